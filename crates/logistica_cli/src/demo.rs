//! Fixed seed-and-query demonstration script.
//!
//! # Responsibility
//! - Clear the store, insert the three sample clientes, run the canned
//!   lookups and print their results.
//!
//! # Invariants
//! - The sequence is strictly linear; the only branching is on whether a
//!   lookup returned anything.

use log::info;
use logistica_core::{Cliente, ClienteRepository, ClienteService, Pedido, RepoResult};

/// Runs the whole demonstration against the provided service.
pub fn run<R: ClienteRepository>(service: &ClienteService<R>) -> RepoResult<()> {
    println!();
    println!("========================================");
    println!("INICIANDO SISTEMA DE GESTIÓN DE CLIENTES");
    println!("========================================");
    println!();

    limpiar(service)?;
    insertar_clientes(service)?;
    listar_todos(service)?;
    buscar_por_nombre(service, "Alicia")?;
    buscar_por_apellidos(service, "Sánchez López")?;
    buscar_por_email(service, "maria.rodriguez@email.com")?;

    println!();
    println!("========================================");
    println!("✓ SISTEMA EJECUTADO CORRECTAMENTE");
    println!("========================================");
    println!();

    Ok(())
}

fn limpiar<R: ClienteRepository>(service: &ClienteService<R>) -> RepoResult<()> {
    println!(">>> PASO 1: Limpiando base de datos...");
    service.delete_all()?;
    info!("event=demo_clear module=cli status=ok");
    println!("✓ Base de datos limpiada correctamente");
    println!();
    Ok(())
}

fn insertar_clientes<R: ClienteRepository>(service: &ClienteService<R>) -> RepoResult<()> {
    println!(">>> PASO 2: Insertando clientes en la base de datos...");
    println!();

    let mut cliente1 = Cliente::new("Alicia", "González Martínez", "alicia.gonzalez@email.com");
    cliente1.add_pedido(Pedido::new("Laptop Dell XPS 15", 1299.99));
    cliente1.add_pedido(Pedido::new("Mouse Logitech MX Master", 99.99));
    cliente1.add_pedido(Pedido::new("Teclado Mecánico", 149.99));
    let cliente1 = service.save(&cliente1)?;
    println!(
        "✓ Cliente insertado: {} {} (con {} pedidos)",
        cliente1.nombre,
        cliente1.apellidos,
        cliente1.pedidos.len()
    );

    let cliente2 = service.save(&Cliente::new(
        "Roberto",
        "Sánchez López",
        "roberto.sanchez@email.com",
    ))?;
    println!(
        "✓ Cliente insertado: {} {} (sin pedidos - esquema flexible)",
        cliente2.nombre, cliente2.apellidos
    );

    let cliente3 = service.save(&Cliente::with_pedidos(
        "María",
        "Rodríguez Pérez",
        "maria.rodriguez@email.com",
        vec![Pedido::new("Monitor 4K Samsung", 599.99)],
    ))?;
    println!(
        "✓ Cliente insertado: {} {} (con {} pedido)",
        cliente3.nombre,
        cliente3.apellidos,
        cliente3.pedidos.len()
    );

    let total = service.count()?;
    info!("event=demo_seed module=cli status=ok clientes={total}");
    println!();
    println!(">>> TOTAL: {total} clientes insertados correctamente");
    println!();
    Ok(())
}

fn listar_todos<R: ClienteRepository>(service: &ClienteService<R>) -> RepoResult<()> {
    println!("========================================");
    println!(">>> PASO 3: Recuperando TODOS los clientes con find_all():");
    println!("========================================");
    println!();

    let todos = service.find_all()?;
    for cliente in &todos {
        println!("📋 {cliente}");
    }
    info!("event=demo_find_all module=cli status=ok encontrados={}", todos.len());
    println!();
    println!(">>> Total de clientes encontrados: {}", todos.len());
    println!();
    Ok(())
}

fn buscar_por_nombre<R: ClienteRepository>(
    service: &ClienteService<R>,
    nombre: &str,
) -> RepoResult<()> {
    println!("========================================");
    println!(">>> PASO 4: Buscando cliente por nombre '{nombre}':");
    println!("========================================");
    println!();

    let encontrados = service.find_by_nombre(nombre)?;
    info!(
        "event=demo_find_by_nombre module=cli status=ok encontrados={}",
        encontrados.len()
    );
    match encontrados.first() {
        Some(cliente) => {
            println!("✓ Cliente encontrado:");
            println!("  - ID: {}", cliente.id_text());
            println!(
                "  - Nombre completo: {} {}",
                cliente.nombre, cliente.apellidos
            );
            println!("  - Email: {}", cliente.email);
            println!("  - Número de pedidos: {}", cliente.pedidos.len());
            println!("  - Detalle de pedidos:");
            for pedido in &cliente.pedidos {
                println!("    • {} - ${}", pedido.producto, pedido.precio);
            }
        }
        None => println!("✗ No se encontró cliente con nombre '{nombre}'"),
    }
    Ok(())
}

fn buscar_por_apellidos<R: ClienteRepository>(
    service: &ClienteService<R>,
    apellidos: &str,
) -> RepoResult<()> {
    println!();
    println!("========================================");
    println!(">>> PASO 5: Buscando cliente por apellidos '{apellidos}':");
    println!("========================================");
    println!();

    let encontrados = service.find_by_apellidos(apellidos)?;
    info!(
        "event=demo_find_by_apellidos module=cli status=ok encontrados={}",
        encontrados.len()
    );
    match encontrados.first() {
        Some(cliente) => {
            println!("✓ Cliente encontrado:");
            println!(
                "  - Nombre completo: {} {}",
                cliente.nombre, cliente.apellidos
            );
            println!("  - Email: {}", cliente.email);
            if cliente.pedidos.is_empty() {
                println!("  - Pedidos: Sin pedidos");
            } else {
                println!("  - Pedidos: {}", cliente.pedidos.len());
            }
        }
        None => println!("✗ No se encontró cliente con apellidos '{apellidos}'"),
    }
    Ok(())
}

fn buscar_por_email<R: ClienteRepository>(
    service: &ClienteService<R>,
    email: &str,
) -> RepoResult<()> {
    println!();
    println!("========================================");
    println!(">>> PASO 6: Buscando cliente por email '{email}':");
    println!("========================================");
    println!();

    match service.find_by_email(email)? {
        Some(cliente) => {
            info!("event=demo_find_by_email module=cli status=ok encontrados=1");
            println!("✓ Cliente encontrado:");
            println!(
                "  - Nombre completo: {} {}",
                cliente.nombre, cliente.apellidos
            );
            let detalle = cliente
                .pedidos
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");
            println!("  - Pedidos: [{detalle}]");
        }
        None => {
            info!("event=demo_find_by_email module=cli status=ok encontrados=0");
            println!("✗ No se encontró cliente con email '{email}'");
        }
    }
    Ok(())
}
