//! Settings for the sealed ledger
//!
//! Names the environment variable holding the encryption secret, the default
//! currency for new users and whether the audit trail is written.

use serde::{Deserialize, Serialize};

use super::paths::LedgerPaths;
use crate::crypto::KeyMaterial;
use crate::error::{LedgerError, LedgerResult};
use crate::models::Currency;

/// Default name of the environment variable holding the encryption secret
pub const DEFAULT_KEY_ENV_VAR: &str = "LEDGER_ENCRYPTION_KEY";

/// Ledger settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Environment variable the encryption secret is read from
    #[serde(default = "default_key_env_var")]
    pub key_env_var: String,

    /// Currency given to new users' preferences
    #[serde(default)]
    pub default_currency: Currency,

    /// Whether mutations are appended to the audit log
    #[serde(default = "default_audit_enabled")]
    pub audit_enabled: bool,
}

fn default_schema_version() -> u32 {
    1
}

fn default_key_env_var() -> String {
    DEFAULT_KEY_ENV_VAR.to_string()
}

fn default_audit_enabled() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            key_env_var: default_key_env_var(),
            default_currency: Currency::default(),
            audit_enabled: default_audit_enabled(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &LedgerPaths) -> LedgerResult<Self> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| LedgerError::Io(format!("Failed to read settings file: {}", e)))?;

            serde_json::from_str(&contents)
                .map_err(|e| LedgerError::Config(format!("Failed to parse settings file: {}", e)))
        } else {
            // Not persisted until the caller saves
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LedgerPaths) -> LedgerResult<()> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| LedgerError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| LedgerError::Io(format!("Failed to write settings file: {}", e)))
    }

    /// Read the encryption secret from the configured environment variable
    ///
    /// The secret itself never appears in the error.
    pub fn load_key(&self) -> LedgerResult<KeyMaterial> {
        let secret = std::env::var(&self.key_env_var).map_err(|_| {
            LedgerError::Config(format!("{} is not set", self.key_env_var))
        })?;

        if secret.is_empty() {
            return Err(LedgerError::Config(format!("{} is empty", self.key_env_var)));
        }

        Ok(KeyMaterial::from_secret(&secret))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::STANDARD, Engine};
    use std::env;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.key_env_var, "LEDGER_ENCRYPTION_KEY");
        assert_eq!(settings.default_currency, Currency::Usd);
        assert!(settings.audit_enabled);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: Settings = serde_json::from_str(r#"{"audit_enabled":false}"#).unwrap();
        assert!(!settings.audit_enabled);
        assert_eq!(settings.key_env_var, DEFAULT_KEY_ENV_VAR);
        assert_eq!(settings.schema_version, 1);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            default_currency: Currency::Eur,
            audit_enabled: false,
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_without_file_returns_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(Settings::load_or_create(&paths).unwrap(), Settings::default());
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_malformed_settings_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LedgerPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{not json").unwrap();

        let err = Settings::load_or_create(&paths).unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));
    }

    #[test]
    fn test_load_key_from_env() {
        let var = "SEALED_LEDGER_TEST_KEY_PRESENT";
        let settings = Settings {
            key_env_var: var.to_string(),
            ..Settings::default()
        };
        env::set_var(var, STANDARD.encode([9u8; 32]));

        let key = settings.load_key().unwrap();
        env::remove_var(var);

        assert_eq!(key.as_bytes(), &[9u8; 32]);
    }

    #[test]
    fn test_load_key_missing_or_empty() {
        let missing = Settings {
            key_env_var: "SEALED_LEDGER_TEST_KEY_MISSING".to_string(),
            ..Settings::default()
        };
        let err = missing.load_key().unwrap_err();
        assert!(matches!(err, LedgerError::Config(_)));

        let var = "SEALED_LEDGER_TEST_KEY_EMPTY";
        let empty = Settings {
            key_env_var: var.to_string(),
            ..Settings::default()
        };
        env::set_var(var, "");
        let err = empty.load_key().unwrap_err();
        env::remove_var(var);
        assert!(matches!(err, LedgerError::Config(_)));
    }
}
