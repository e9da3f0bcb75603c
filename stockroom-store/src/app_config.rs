use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub store: StoreConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    pub inventory_file: String,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .set_default("store.inventory_file", "inventory.json")?
            // Optional base configuration file
            .add_source(config::File::with_name("config/default").required(false))
            // Environment-specific file, also optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Eg. `STOCKROOM_STORE__INVENTORY_FILE=/tmp/inv.json`
            .add_source(config::Environment::with_prefix("STOCKROOM").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
