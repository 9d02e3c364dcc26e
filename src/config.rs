use anyhow::Result;
use chrono::Weekday;
use std::env;

use crate::scheduling::weekday_from_index;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub client_base_url: String,
    /// Day that opens the roster week, 0 = Monday .. 6 = Sunday. Configured
    /// once for the whole process; every calendar call site uses this value
    /// instead of deriving its own convention.
    pub week_start_day: u8,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        let week_start_day = env::var("WEEK_START_DAY")
            .unwrap_or_else(|_| "0".to_string())
            .parse()
            .unwrap_or(0);
        if weekday_from_index(week_start_day).is_none() {
            anyhow::bail!("WEEK_START_DAY must be 0-6, got {}", week_start_day);
        }

        Ok(Config {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:rosterd.db".to_string()),
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .unwrap_or(8080),
            environment: env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
            client_base_url: env::var("BASE_URL")
                .unwrap_or_else(|_| "http://localhost:3000".to_string()),
            week_start_day,
        })
    }

    pub fn server_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// The configured week start as a `chrono::Weekday`. `from_env` already
    /// rejected out-of-range values, so the fallback only covers configs
    /// built by hand in tests.
    pub fn week_start(&self) -> Weekday {
        weekday_from_index(self.week_start_day).unwrap_or(Weekday::Mon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn week_start_maps_index_to_weekday() {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
            client_base_url: "http://localhost:3000".to_string(),
            week_start_day: 6,
        };
        assert_eq!(config.week_start(), Weekday::Sun);
    }

    #[test]
    fn server_address_joins_host_and_port() {
        let config = Config {
            database_url: "sqlite::memory:".to_string(),
            host: "0.0.0.0".to_string(),
            port: 9000,
            environment: "test".to_string(),
            client_base_url: "http://localhost:3000".to_string(),
            week_start_day: 0,
        };
        assert_eq!(config.server_address(), "0.0.0.0:9000");
    }
}
