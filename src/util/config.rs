use anyhow::Result;
use std::sync::OnceLock;

use config::{Config, FileFormat};

pub fn get_config() -> &'static Config {
    static CONFIG: OnceLock<Config> = OnceLock::new();

    CONFIG.get_or_init(|| build_config().expect("Configuration error"))
}

fn build_config() -> Result<Config> {
    Ok(Config::builder()
        .set_default("http_addr", "0.0.0.0:8080")?
        .set_default("database_url", "sqlite://gnss.db?mode=ro")?
        .set_default("max_connections", 10)?
        .add_source(config::Environment::with_prefix("GNSS_API"))
        .add_source(config::File::new("gnss-api.toml", FileFormat::Toml).required(false))
        .build()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = build_config().unwrap();

        assert!(config.get_string("http_addr").unwrap().ends_with(":8080"));
        assert!(config
            .get_string("database_url")
            .unwrap()
            .starts_with("sqlite://"));
        assert_eq!(10, config.get_int("max_connections").unwrap());
    }
}
