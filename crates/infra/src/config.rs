use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the application to run on
    pub port: usize,
    /// Postgres connection string. The in-memory store is used when it is
    /// not set.
    pub database_url: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        let default_port = "5000";
        let port = std::env::var("PORT").unwrap_or_else(|_| default_port.into());
        let port = match port.parse::<usize>() {
            Ok(port) => port,
            Err(_) => {
                warn!(
                    "The given PORT: {} is not valid, falling back to the default port: {}.",
                    port, default_port
                );
                5000
            }
        };
        let database_url = match std::env::var("DATABASE_URL") {
            Ok(url) if !url.trim().is_empty() => Some(url),
            _ => {
                info!("Did not find DATABASE_URL environment variable. Going to use the in-memory store.");
                None
            }
        };
        Self { port, database_url }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}
