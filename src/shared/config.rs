//! Application configuration. Data paths and the seed account.

use crate::domain::User;
use serde::Deserialize;

/// Env prefix for every setting, e.g. `COMMUNITY_EVENTS_DATA_DIR`.
pub const ENV_PREFIX: &str = "COMMUNITY_EVENTS";

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_SEED_EMAIL: &str = "test@example.com";
pub const DEFAULT_SEED_PASSWORD: &str = "12345";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Directory holding `events.json` and `users.json`. Read from COMMUNITY_EVENTS_DATA_DIR.
    #[serde(default)]
    pub data_dir: Option<String>,

    /// Account available before any user directory has been saved.
    #[serde(default)]
    pub seed_email: Option<String>,

    #[serde(default)]
    pub seed_password: Option<String>,

    /// When set, shared invitations are also appended to `<share_dir>/shared.txt`.
    #[serde(default)]
    pub share_dir: Option<String>,
}

impl AppConfig {
    /// Loads from `COMMUNITY_EVENTS_*` env vars (and `.env`), plus the file named by
    /// COMMUNITY_EVENTS_CONFIG when set. Env wins over the file.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        if let Ok(path) = std::env::var(format!("{}_CONFIG", ENV_PREFIX)) {
            c = c.add_source(config::File::with_name(&path));
        }
        c = c.add_source(config::Environment::with_prefix(ENV_PREFIX));
        c.build()?.try_deserialize()
    }

    pub fn data_dir_or_default(&self) -> &str {
        self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR)
    }

    pub fn seed_user(&self) -> User {
        User::new(
            self.seed_email.as_deref().unwrap_or(DEFAULT_SEED_EMAIL),
            self.seed_password.as_deref().unwrap_or(DEFAULT_SEED_PASSWORD),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.data_dir_or_default(), "./data");
        assert_eq!(cfg.seed_user(), User::new("test@example.com", "12345"));
        assert!(cfg.share_dir.is_none());
    }

    #[test]
    fn test_file_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.toml");
        std::fs::write(
            &path,
            "data_dir = \"/tmp/events\"\nseed_email = \"admin@x.com\"\nseed_password = \"pw\"\n",
        )
        .unwrap();

        let cfg: AppConfig = config::Config::builder()
            .add_source(config::File::from(path.as_path()))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();
        assert_eq!(cfg.data_dir_or_default(), "/tmp/events");
        assert_eq!(cfg.seed_user(), User::new("admin@x.com", "pw"));
    }
}
