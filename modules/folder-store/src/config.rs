use std::env;
use std::path::PathBuf;

pub mod env_vars {
    pub const PORT: &str = "FOLDER_STORE_PORT";
    pub const HOST: &str = "FOLDER_STORE_HOST";
    /// JSON file holding the whole folder/document state
    pub const DATA_PATH: &str = "FOLDER_STORE_DATA_PATH";
    pub const STATIC_DIR: &str = "FOLDER_STORE_STATIC_DIR";
}

pub mod defaults {
    pub const PORT: u16 = 3000;
    pub const HOST: &str = "127.0.0.1";
    pub const DATA_PATH: &str = "data.json";
    pub const STATIC_DIR: &str = ".";
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub host: String,
    pub data_path: PathBuf,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let port = env::var(env_vars::PORT)
            .ok()
            .and_then(|s| {
                s.parse()
                    .map_err(|_| log::warn!("Ignoring invalid {}={:?}", env_vars::PORT, s))
                    .ok()
            })
            .unwrap_or(defaults::PORT);

        Self {
            port,
            host: env::var(env_vars::HOST).unwrap_or_else(|_| defaults::HOST.to_string()),
            data_path: env::var(env_vars::DATA_PATH)
                .unwrap_or_else(|_| defaults::DATA_PATH.to_string())
                .into(),
            static_dir: env::var(env_vars::STATIC_DIR)
                .unwrap_or_else(|_| defaults::STATIC_DIR.to_string())
                .into(),
        }
    }
}
