use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub db_path: String,
    /// Fixes the quiz picker's seed, so question order is reproducible.
    pub quiz_seed: Option<u64>,
}

impl Settings {
    /// Defaults, then `config/trivia.*` if present, then `TRIVIA_*` variables
    /// (a `.env` file is honoured).
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        Self::from_sources(config::Environment::with_prefix("TRIVIA").try_parsing(true))
    }

    fn from_sources(env: config::Environment) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("host", "0.0.0.0")?
            .set_default("port", 8080)?
            .set_default("db_path", "trivia.db")?
            .add_source(config::File::with_name("config/trivia").required(false))
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
