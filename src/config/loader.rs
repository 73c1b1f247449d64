//! Configuration Loader
//!
//! Imports and exports `BotConfig` as a TOML document (the backup/restore
//! surface). Imports are validated; a document that fails validation never
//! reaches the caller.

use std::path::Path;
use thiserror::Error;

use crate::domain::config::{BotConfig, ValidationError};

/// Configuration file errors
#[derive(Debug, Error)]
pub enum ConfigFileError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize TOML: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Load and validate a configuration backup from a TOML file.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<BotConfig, ConfigFileError> {
    let content = std::fs::read_to_string(path)?;
    let config: BotConfig = toml::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Write a configuration backup as pretty TOML.
pub fn export_config<P: AsRef<Path>>(path: P, config: &BotConfig) -> Result<(), ConfigFileError> {
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::Network;
    use tempfile::tempdir;

    #[test]
    fn test_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = BotConfig::default();
        config.network = Network::Bsc;
        config.wallet_address = Some("0x1234567890123456789012345678901234567890".to_string());
        config.auto_sell = true;

        export_config(&path, &config).unwrap();
        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_roundtrip_without_wallet() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        export_config(&path, &BotConfig::default()).unwrap();
        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded.wallet_address, None);
    }

    #[test]
    fn test_import_rejects_out_of_range() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = BotConfig::default();
        config.stop_loss_pct = 250.0;
        // Export does not validate; import does.
        export_config(&path, &config).unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigFileError::Validation(_)));
    }

    #[test]
    fn test_import_rejects_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "network = ").unwrap();

        let err = load_config(&path).unwrap_err();
        assert!(matches!(err, ConfigFileError::Parse(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_config("/nonexistent/config.toml").unwrap_err();
        assert!(matches!(err, ConfigFileError::Io(_)));
    }
}
