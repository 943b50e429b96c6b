use core_config::{ConfigError, FromEnv, server::ServerConfig};
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Application configuration, composed from the shared config crates.
#[derive(Clone, Debug)]
pub struct Config {
    pub server: ServerConfig,
    pub mongo: MongoConfig,
    pub environment: Environment,
}

impl FromEnv for Config {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::from_env()?,
            mongo: MongoConfig::from_env()?.with_app_name("catalog-api"),
            environment: Environment::from_env(),
        })
    }
}
