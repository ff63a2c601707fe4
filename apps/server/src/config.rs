//! Server configuration from environment variables.

/// Runtime configuration, populated once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the HTTP listener binds to.
    pub listen_addr: String,
    /// Path to the SQLite database file.
    pub db_path: String,
    /// Log output format, "text" or "json".
    pub log_format: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        let listen_addr =
            std::env::var("INVEST_LISTEN_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
        let db_path =
            std::env::var("INVEST_DB_PATH").unwrap_or_else(|_| "data/investments.db".to_string());
        let log_format =
            std::env::var("INVEST_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
        Self {
            listen_addr,
            db_path,
            log_format,
        }
    }
}
