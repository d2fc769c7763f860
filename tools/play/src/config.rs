use std::env;
use std::path::PathBuf;

pub const DEFAULT_SHAPES: &str = "data/countries-50m.json";
pub const DEFAULT_FACTS: &str = "data/restcountries.json";
pub const DEFAULT_DATABASE_URL: &str = "sqlite://atlasly.db?mode=rwc";
pub const DEFAULT_PLAYER: &str = "explorer";

pub struct Config {
    pub shapes: PathBuf,
    pub facts: PathBuf,
    pub database_url: String,
    pub player: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            shapes: env::var("ATLASLY_SHAPES")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_SHAPES)),
            facts: env::var("ATLASLY_FACTS")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_FACTS)),
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            player: env::var("ATLASLY_PLAYER")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_PLAYER.to_string()),
        }
    }
}
