use logistica_core::db::open_db_in_memory;
use logistica_core::{Cliente, ClienteRepository, Pedido, SqliteClienteRepository};

/// Inserts the three demo clientes used by the runner.
fn seed_demo_clientes(repo: &SqliteClienteRepository<'_>) {
    let mut alicia = Cliente::new("Alicia", "González Martínez", "alicia.gonzalez@email.com");
    alicia.add_pedido(Pedido::new("Laptop Dell XPS 15", 1299.99));
    alicia.add_pedido(Pedido::new("Mouse Logitech MX Master", 99.99));
    alicia.add_pedido(Pedido::new("Teclado Mecánico", 149.99));
    repo.save(&alicia).unwrap();

    repo.save(&Cliente::new("Roberto", "Sánchez López", "roberto.sanchez@email.com"))
        .unwrap();

    repo.save(&Cliente::with_pedidos(
        "María",
        "Rodríguez Pérez",
        "maria.rodriguez@email.com",
        vec![Pedido::new("Monitor 4K Samsung", 599.99)],
    ))
    .unwrap();
}

#[test]
fn find_by_nombre_returns_the_single_exact_match() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClienteRepository::new(&conn);
    seed_demo_clientes(&repo);

    let encontrados = repo.find_by_nombre("Alicia").unwrap();
    assert_eq!(encontrados.len(), 1);
    assert_eq!(encontrados[0].apellidos, "González Martínez");
    assert_eq!(encontrados[0].pedidos.len(), 3);
}

#[test]
fn find_by_nombre_is_case_sensitive_and_exact() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClienteRepository::new(&conn);
    seed_demo_clientes(&repo);

    assert!(repo.find_by_nombre("alicia").unwrap().is_empty());
    assert!(repo.find_by_nombre("Alici").unwrap().is_empty());
}

#[test]
fn find_by_nombre_on_an_empty_store_returns_an_empty_list() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClienteRepository::new(&conn);

    assert!(repo.find_by_nombre("Alicia").unwrap().is_empty());
}

#[test]
fn find_by_apellidos_matches_the_whole_field_only() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClienteRepository::new(&conn);
    seed_demo_clientes(&repo);

    let encontrados = repo.find_by_apellidos("Sánchez López").unwrap();
    assert_eq!(encontrados.len(), 1);
    assert_eq!(encontrados[0].nombre, "Roberto");
    assert!(encontrados[0].pedidos.is_empty());

    // No substring hits.
    assert!(repo.find_by_apellidos("Sánchez").unwrap().is_empty());
}

#[test]
fn find_by_email_returns_the_matching_cliente() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClienteRepository::new(&conn);
    seed_demo_clientes(&repo);

    let maria = repo
        .find_by_email("maria.rodriguez@email.com")
        .unwrap()
        .expect("maria should be stored");
    assert_eq!(maria.nombre, "María");
    assert_eq!(maria.pedidos.len(), 1);
    assert_eq!(maria.pedidos[0].producto, "Monitor 4K Samsung");
    assert_eq!(maria.pedidos[0].precio, 599.99);
}

#[test]
fn find_by_email_returns_none_for_unknown_address() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClienteRepository::new(&conn);
    seed_demo_clientes(&repo);

    assert!(repo.find_by_email("nadie@email.com").unwrap().is_none());
}

#[test]
fn find_by_email_with_duplicates_returns_the_earliest_inserted() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteClienteRepository::new(&conn);

    repo.save(&Cliente::new("Primera", "Cuenta", "compartido@email.com"))
        .unwrap();
    repo.save(&Cliente::new("Segunda", "Cuenta", "compartido@email.com"))
        .unwrap();

    let encontrado = repo.find_by_email("compartido@email.com").unwrap().unwrap();
    assert_eq!(encontrado.nombre, "Primera");
}
