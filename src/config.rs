//! Form configuration loaded from TOML.
//!
//! ```toml
//! [length]
//! min = 4
//! max = 64
//! default = 16
//!
//! [options]
//! uppercase = true
//! lowercase = true
//! numbers = true
//! symbols = false
//!
//! [debug]
//! log_state = false
//! ```
//!
//! Every key is optional; missing keys take the defaults above.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::model::{LengthRange, OptionFlags, PasswordState};

/// Directory name under the platform config dir.
pub const APP_DIR: &str = "pwgen-form";

/// Config file name inside [`APP_DIR`].
pub const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub length: LengthRange,
    pub options: OptionFlags,
    pub debug: DebugConfig,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DebugConfig {
    /// Log the serialized state after every length change.
    pub log_state: bool,
}

/// Default config location (~/.config/pwgen-form/config.toml on Linux).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILE))
}

impl Config {
    /// Parse and validate a TOML document. `path` is used for messages only.
    pub fn from_toml(content: &str, path: &Path) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit path. The file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content, path)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Load `explicit` if given, else the default location if it exists,
    /// else fall back to defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match default_config_path() {
            Some(path) => match Self::load(&path) {
                Err(Error::ConfigRead { source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                    tracing::debug!(path = %path.display(), "no config file, using defaults");
                    Ok(Self::default())
                }
                other => other,
            },
            None => Ok(Self::default()),
        }
    }

    /// Check the length range invariant.
    pub fn validate(&self) -> Result<()> {
        let LengthRange { min, max, default } = self.length;
        if min == 0 || min > default || default > max {
            return Err(Error::InvalidRange { min, default, max });
        }
        Ok(())
    }

    /// Initial form state described by this config.
    pub fn initial_state(&self) -> PasswordState {
        PasswordState::new(self.length, self.options)
    }

    /// Reject a user-supplied starting length outside the range.
    pub fn check_length(&self, value: u32) -> Result<u32> {
        if self.length.contains(value) {
            Ok(value)
        } else {
            Err(Error::LengthOutOfRange {
                value,
                min: self.length.min,
                max: self.length.max,
            })
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
