//! Application settings loaded from environment variables.

use std::env;

use super::constants::{
    DEFAULT_DATABASE_MAX_CONNECTIONS, DEFAULT_DATABASE_URL, DEFAULT_SERVER_HOST,
    DEFAULT_SERVER_PORT,
};

/// Application configuration
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub database_max_connections: u32,
    pub server_host: String,
    pub server_port: u16,
    /// Ensure the demo accounts exist when the server starts
    pub seed_demo_users: bool,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("database_max_connections", &self.database_max_connections)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("seed_demo_users", &self.seed_demo_users)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            database_max_connections: DEFAULT_DATABASE_MAX_CONNECTIONS,
            server_host: DEFAULT_SERVER_HOST.to_string(),
            server_port: DEFAULT_SERVER_PORT,
            seed_demo_users: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables (and `.env` if present).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.database_max_connections),
            server_host: lookup("SERVER_HOST").unwrap_or(defaults.server_host),
            server_port: lookup("SERVER_PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
            seed_demo_users: lookup("SEED_DEMO_USERS")
                .map(|v| parse_flag(&v))
                .unwrap_or(defaults.seed_demo_users),
        }
    }

    /// Get the full server address.
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }
}

fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = Config::from_lookup(|_| None);

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.server_port, 3000);
        assert_eq!(config.server_addr(), "0.0.0.0:3000");
        assert!(config.seed_demo_users);
    }

    #[test]
    fn test_values_override_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("DATABASE_URL", "postgres://localhost/xanadu"),
            ("SERVER_PORT", "8080"),
            ("DATABASE_MAX_CONNECTIONS", "4"),
            ("SEED_DEMO_USERS", "false"),
        ]));

        assert_eq!(config.database_url, "postgres://localhost/xanadu");
        assert_eq!(config.server_port, 8080);
        assert_eq!(config.database_max_connections, 4);
        assert!(!config.seed_demo_users);
    }

    #[test]
    fn test_unparseable_port_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("SERVER_PORT", "not-a-port")]));
        assert_eq!(config.server_port, DEFAULT_SERVER_PORT);
    }

    #[test]
    fn test_debug_redacts_database_url() {
        let config = Config::from_lookup(lookup_from(&[(
            "DATABASE_URL",
            "postgres://admin:hunter2@db/xanadu",
        )]));

        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("[REDACTED]"));
    }
}
