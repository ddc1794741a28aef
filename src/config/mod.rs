use std::{
    env, fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::errors::{Result, WalletError};
use crate::utils::paths::{self, ensure_dir, write_atomic};

const VALIDATION_KEY_ENV: &str = "WALLET_CORE_VALIDATION_KEY";
const EMAIL_PUBLIC_KEY_ENV: &str = "WALLET_CORE_EMAIL_PUBLIC_KEY";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory (relative to the application home) holding the key/value store.
    pub store_dir: String,
    /// Label appended to formatted amounts.
    pub currency_label: String,
    pub gate: GateConfig,
    pub contact: ContactConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: "store".into(),
            currency_label: "TL".into(),
            gate: GateConfig::default(),
            contact: ContactConfig::default(),
        }
    }
}

/// Strings compared by the decorative gate. Not a security boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GateConfig {
    pub username: String,
    pub password: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            username: "erdener".into(),
            password: "Bee2508".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub validation_url: String,
    pub validation_api_key: String,
    pub send_url: String,
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub recipient_name: String,
    pub recipient_email: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            validation_url: "https://emailvalidation.abstractapi.com/v1/".into(),
            validation_api_key: String::new(),
            send_url: "https://api.emailjs.com/api/v1.0/email/send".into(),
            service_id: "service_pv3jdwr".into(),
            template_id: "template_zjmgdjq".into(),
            public_key: String::new(),
            recipient_name: "Batuhan Erdener Ekşi".into(),
            recipient_email: "batuhanerdenereksi@gmail.com".into(),
        }
    }
}

impl ContactConfig {
    /// Fails when a credential the HTTP clients need is still blank.
    pub fn ensure_credentials(&self) -> Result<()> {
        if self.validation_api_key.trim().is_empty() {
            return Err(WalletError::Config(format!(
                "email validation key missing (set contact.validation_api_key or {VALIDATION_KEY_ENV})"
            )));
        }
        if self.public_key.trim().is_empty() {
            return Err(WalletError::Config(format!(
                "email service public key missing (set contact.public_key or {EMAIL_PUBLIC_KEY_ENV})"
            )));
        }
        Ok(())
    }
}

pub struct ConfigManager {
    base: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self> {
        Self::with_base_dir(paths::app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self> {
        ensure_dir(&base)?;
        Ok(Self {
            path: paths::config_file_in(&base),
            base,
        })
    }

    /// Loads the configuration file (defaults when absent) and applies
    /// environment overrides.
    pub fn load(&self) -> Result<Config> {
        let mut config = if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data).map_err(|err| {
                WalletError::Config(format!("{}: {err}", self.path.display()))
            })?
        } else {
            tracing::debug!(path = %self.path.display(), "config file absent, using defaults");
            Config::default()
        };
        apply_env_overrides(&mut config);
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        write_atomic(&self.path, &json)?;
        tracing::info!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn store_dir(&self, config: &Config) -> PathBuf {
        paths::store_dir_in(&self.base, &config.store_dir)
    }

    pub fn base_dir(&self) -> &Path {
        &self.base
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn apply_env_overrides(config: &mut Config) {
    if let Ok(key) = env::var(VALIDATION_KEY_ENV) {
        config.contact.validation_api_key = key;
    }
    if let Ok(key) = env::var(EMAIL_PUBLIC_KEY_ENV) {
        config.contact.public_key = key;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.currency_label, "TL");
        assert_eq!(config.store_dir, "store");
    }

    #[test]
    fn save_then_load_preserves_values() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        let mut config = Config::default();
        config.currency_label = "TRY".into();
        config.gate.username = "someone".into();
        manager.save(&config).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.currency_label, "TRY");
        assert_eq!(loaded.gate.username, "someone");
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf()).unwrap();
        fs::write(manager.path(), r#"{ "currency_label": "EUR" }"#).unwrap();
        let loaded = manager.load().unwrap();
        assert_eq!(loaded.currency_label, "EUR");
        assert_eq!(loaded.store_dir, "store");
    }

    #[test]
    fn blank_credentials_are_reported() {
        let contact = ContactConfig::default();
        let err = contact.ensure_credentials().unwrap_err();
        assert!(matches!(err, WalletError::Config(_)));
    }
}
