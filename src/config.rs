use figment::{
    Figment,
    providers::{Env, Serialized},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::PortfolioError;

/// Prefix for environment overrides, e.g. `PORTFOLIO_DATABASE_URL`.
pub const ENV_PREFIX: &str = "PORTFOLIO_";

/// 16 MiB, the cap applied to `/api/upload` bodies.
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub listen_addr: String,
    pub database_url: String,
    pub loglevel: String,
    /// Root for `/`, `/admin` and any other static asset.
    pub static_dir: PathBuf,
    /// Uploaded files land here and are served back under `/uploads`.
    pub upload_dir: PathBuf,
    pub max_upload_bytes: usize,
    /// Run the contact notifier after each stored message.
    pub notify_contact: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:5000".to_string(),
            database_url: "sqlite:portfolio.db".to_string(),
            loglevel: "info".to_string(),
            static_dir: PathBuf::from("static"),
            upload_dir: PathBuf::from("uploads"),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            notify_contact: false,
        }
    }
}

impl Config {
    /// Defaults, then `PORTFOLIO_*` environment variables on top.
    pub fn load() -> Result<Self, PortfolioError> {
        Ok(Self::figment().extract()?)
    }

    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(Config::default())).merge(Env::prefixed(ENV_PREFIX))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("PORTFOLIO_DATABASE_URL", "sqlite:other.db");
            jail.set_env("PORTFOLIO_NOTIFY_CONTACT", "true");

            let cfg = Config::load().expect("config should load");
            assert_eq!(cfg.database_url, "sqlite:other.db");
            assert!(cfg.notify_contact);
            assert_eq!(cfg.max_upload_bytes, DEFAULT_MAX_UPLOAD_BYTES);
            assert_eq!(cfg.upload_dir, PathBuf::from("uploads"));
            Ok(())
        });
    }
}
