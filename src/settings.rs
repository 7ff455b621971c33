use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub db_path: String,
    pub bind_addr: String,
}

impl Settings {
    /// Reads `DB_PATH` and `BIND_ADDR`, loading a `.env` file first if one exists.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        config::Config::builder()
            .set_default("db_path", "trivia.db")?
            .set_default("bind_addr", "0.0.0.0:8080")?
            .add_source(config::Environment::default().try_parsing(false))
            .build()?
            .try_deserialize()
    }
}
