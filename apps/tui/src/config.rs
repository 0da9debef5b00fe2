use dotenv::dotenv;
use std::env;
use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_HISTORICAL_FILE: &str = "historical.json";
pub const DEFAULT_PROJECTIONS_FILE: &str = "projections.json";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub historical_file: String,
    pub projections_file: String,
    pub log_filter: String,
    pub debug: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            historical_file: DEFAULT_HISTORICAL_FILE.to_string(),
            projections_file: DEFAULT_PROJECTIONS_FILE.to_string(),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            debug: false,
        }
    }
}

impl AppConfig {
    pub fn historical_path(&self) -> PathBuf {
        self.data_dir.join(&self.historical_file)
    }

    pub fn projections_path(&self) -> PathBuf {
        self.data_dir.join(&self.projections_file)
    }

    /// Builds a config from a variable lookup; unset variables keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            data_dir: lookup("PROJECTION_DATA_DIR").map_or(defaults.data_dir, PathBuf::from),
            historical_file: lookup("HISTORICAL_FILE").unwrap_or(defaults.historical_file),
            projections_file: lookup("PROJECTIONS_FILE").unwrap_or(defaults.projections_file),
            log_filter: lookup("PROJECTION_LOG").unwrap_or(defaults.log_filter),
            debug: lookup("DEBUG").is_some(),
        }
    }
}

/// Initializes the application configuration from `.env` and the environment
pub fn init_app_config() -> AppConfig {
    // Load environment variables from .env file
    dotenv().ok();

    AppConfig::from_lookup(|key| env::var(key).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn unset_environment_uses_defaults() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.historical_path(), PathBuf::from("./data/historical.json"));
    }

    #[test]
    fn environment_overrides_paths_and_logging() {
        let vars: HashMap<&str, &str> = [
            ("PROJECTION_DATA_DIR", "/srv/fits"),
            ("PROJECTIONS_FILE", "curves.json"),
            ("PROJECTION_LOG", "projection_core=debug"),
            ("DEBUG", "1"),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::from_lookup(|key| vars.get(key).map(ToString::to_string));
        assert_eq!(config.projections_path(), PathBuf::from("/srv/fits/curves.json"));
        assert_eq!(config.historical_file, DEFAULT_HISTORICAL_FILE);
        assert_eq!(config.log_filter, "projection_core=debug");
        assert!(config.debug);
    }
}
