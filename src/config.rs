use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration, read once at startup. The four `DB_*` variables
/// are required; `PORT` falls back to 3000.
#[derive(Debug)]
pub struct Config {
    pub db_host: String,
    pub db_user: String,
    pub db_password: String,
    pub db_database: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let _ = dotenv().is_ok();

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a valid port number, got '{raw}'"))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            db_host: require("DB_HOST")?,
            db_user: require("DB_USER")?,
            db_password: require("DB_PASSWORD")?,
            db_database: require("DB_DATABASE")?,
            port,
        })
    }

    pub fn addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn require(name: &str) -> Result<String> {
    env::var(name).with_context(|| format!("{name} missing, it is required"))
}
