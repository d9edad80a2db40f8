use cotiza_core::RateCard;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    /// Tier tables and commission rates. Defaults to the published card;
    /// deployments override individual fields without recompiling.
    #[serde(default)]
    pub rate_card: RateCard,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Environment-specific file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // E.g. `COTIZA__SERVER__PORT=9000`
            .add_source(config::Environment::with_prefix("COTIZA").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
