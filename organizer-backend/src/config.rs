use std::env;
use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const BIND_ADDRESS: &str = "BIND_ADDRESS";
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Directory holding the HTML pages and their assets.
    pub const STATIC_DIR: &str = "STATIC_DIR";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 5000;
    pub const BIND_ADDRESS: &str = "0.0.0.0";
    pub const DATABASE_URL: &str = "database.db";
    pub const STATIC_DIR: &str = "static";
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub bind_address: String,
    pub database_url: String,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let port = match env::var(env_vars::PORT) {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("{} must be a valid port number, got {:?}; using {}", env_vars::PORT, raw, defaults::PORT);
                defaults::PORT
            }),
            Err(_) => defaults::PORT,
        };

        Self {
            port,
            bind_address: env::var(env_vars::BIND_ADDRESS)
                .unwrap_or_else(|_| defaults::BIND_ADDRESS.to_string()),
            database_url: env::var(env_vars::DATABASE_URL)
                .unwrap_or_else(|_| defaults::DATABASE_URL.to_string()),
            static_dir: PathBuf::from(
                env::var(env_vars::STATIC_DIR).unwrap_or_else(|_| defaults::STATIC_DIR.to_string()),
            ),
        }
    }
}
