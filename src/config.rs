use std::path::PathBuf;

use crate::error::ConfigError;

/// Settings read from the environment (and `.env` during development).
#[derive(Clone, Debug)]
pub struct Config {
    pub token: String,
    pub users_file: PathBuf,
    pub quiz_file: PathBuf,
    pub events_file: PathBuf,
    pub images_dir: PathBuf,
    pub admin_ids: Vec<u64>,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let path = |key: &str, default: &str| {
            PathBuf::from(lookup(key).unwrap_or_else(|| default.to_string()))
        };

        let token = lookup("TELOXIDE_TOKEN")
            .filter(|token| !token.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingVar("TELOXIDE_TOKEN".to_string()))?;

        let admin_ids = match lookup("ADMIN_IDS") {
            Some(raw) => parse_admin_ids(&raw)?,
            None => Vec::new(),
        };

        Ok(Self {
            token,
            users_file: path("USERS_FILE", "data/users.json"),
            quiz_file: path("QUIZ_FILE", "data/quiz_data.json"),
            events_file: path("EVENTS_FILE", "data/events.json"),
            images_dir: path("IMAGES_DIR", "images"),
            admin_ids,
        })
    }

    pub fn is_admin(&self, user_id: u64) -> bool {
        self.admin_ids.contains(&user_id)
    }
}

fn parse_admin_ids(raw: &str) -> Result<Vec<u64>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(|id| {
            id.parse::<u64>().map_err(|e| {
                ConfigError::InvalidValue("ADMIN_IDS".to_string(), format!("'{}': {}", id, e))
            })
        })
        .collect()
}
