//! Runtime configuration from the process environment.
//!
//! # Responsibility
//! - Resolve store path, log directory and log level with sane defaults.
//! - Load a local `.env` file when one is present.

use std::env;
use std::path::{Path, PathBuf};

const ENV_DB_PATH: &str = "LOGISTICA_DB";
const ENV_LOG_DIR: &str = "LOGISTICA_LOG_DIR";
const ENV_LOG_LEVEL: &str = "LOGISTICA_LOG_LEVEL";

#[derive(Debug, Clone)]
pub struct Config {
    /// Database file backing the customer store.
    pub db_path: PathBuf,
    /// Directory for rolling log files. Always absolute.
    pub log_dir: PathBuf,
    pub log_level: String,
}

impl Config {
    /// Reads configuration from the environment, consulting `.env` first.
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();

        let cwd = env::current_dir()
            .map_err(|err| format!("cannot resolve working directory: {err}"))?;

        let db_path = env::var(ENV_DB_PATH)
            .map(|raw| absolutize(&cwd, &raw))
            .unwrap_or_else(|_| cwd.join("logistica.db"));
        let log_dir = env::var(ENV_LOG_DIR)
            .map(|raw| absolutize(&cwd, &raw))
            .unwrap_or_else(|_| cwd.join("logs"));
        let log_level = env::var(ENV_LOG_LEVEL)
            .unwrap_or_else(|_| logistica_core::default_log_level().to_string());

        Ok(Self {
            db_path,
            log_dir,
            log_level,
        })
    }
}

fn absolutize(cwd: &Path, raw: &str) -> PathBuf {
    let path = PathBuf::from(raw);
    if path.is_absolute() {
        path
    } else {
        cwd.join(path)
    }
}
