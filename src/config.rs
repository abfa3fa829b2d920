//! Settings for a [`Calendar`](crate::Calendar), loadable from TOML.
//!
//! ```toml
//! script = "traditional"
//! utc_offset_minutes = 480
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::chinese::fmt::Script;

/// Timezones in use span UTC-12:00 to UTC+14:00.
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Conversion settings.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Script of all Chinese text in results.
    pub script: Script,
    /// Timezone deciding the civil date of solar terms, in minutes east of
    /// UTC. Beijing time (`480`) by default.
    pub utc_offset_minutes: i32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            script: Script::Simplified,
            utc_offset_minutes: 480,
        }
    }
}

/// Failure to load a [`Config`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("utc_offset_minutes {0} is outside -840..=840")]
    InvalidOffset(i32),
}

impl Config {
    /// Parses and validates a TOML document. Missing keys take their
    /// defaults; unknown keys are rejected.
    ///
    /// ```
    /// use solarlunar::Config;
    /// use solarlunar::chinese::fmt::Script;
    ///
    /// let config = Config::from_toml_str(r#"script = "traditional""#).unwrap();
    /// assert_eq!(Script::Traditional, config.script);
    /// assert_eq!(480, config.utc_offset_minutes);
    /// ```
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads a TOML file, see [`Config::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_owned(),
            source,
        })?;
        log::debug!("loading config from {}", path.display());
        Self::from_toml_str(&text)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(-MAX_OFFSET_MINUTES..=MAX_OFFSET_MINUTES).contains(&self.utc_offset_minutes) {
            return Err(ConfigError::InvalidOffset(self.utc_offset_minutes));
        }
        Ok(())
    }
}
