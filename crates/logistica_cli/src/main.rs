//! Seed-and-query demo entry point.
//!
//! # Responsibility
//! - Wire configuration, logging, storage and the repository together.
//! - Run the fixed demo script and map failures to a non-zero exit.

mod config;
mod demo;

use config::Config;
use log::{error, info};
use logistica_core::db::open_db;
use logistica_core::{init_logging, ClienteService, SqliteClienteRepository};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(message) => {
            eprintln!("configuration error: {message}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(message) = init_logging(&config.log_level, &config.log_dir.to_string_lossy()) {
        eprintln!("logging error: {message}");
        return ExitCode::FAILURE;
    }

    match run(&config) {
        Ok(()) => {
            info!("event=demo_run module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=demo_run module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<(), Box<dyn Error>> {
    let conn = open_db(&config.db_path)?;
    let repo = SqliteClienteRepository::new(&conn);
    let service = ClienteService::new(repo);
    demo::run(&service)?;
    Ok(())
}
