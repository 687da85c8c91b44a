//! Loading the comparison tolerance from an external source.
//!
//! The host application decides where the tolerance lives (a JSON
//! document, an environment variable); this module only resolves it
//! into a validated [`Epsilon`].

use std::io::Read;

use serde::Deserialize;
use thiserror::Error;

use crate::error::NumeraError;
use crate::tolerance::Epsilon;

/// Errors raised while resolving a tolerance from configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No tolerance value was configured.
    #[error("no tolerance configured")]
    Missing,

    /// The JSON document could not be parsed.
    #[error("invalid tolerance document: {0}")]
    Json(#[from] serde_json::Error),

    /// A raw value could not be read as a number.
    #[error("`{key}` is not a number: {value:?}")]
    Malformed {
        /// Source of the value.
        key: String,
        /// The offending text.
        value: String,
    },

    /// The number was read but is not a valid tolerance.
    #[error(transparent)]
    Tolerance(#[from] NumeraError),
}

/// Tolerance settings as they appear in a configuration document.
///
/// ```json
/// { "epsilon": 0.0001 }
/// ```
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToleranceConfig {
    /// The configured tolerance, if any.
    pub epsilon: Option<f64>,
}

impl ToleranceConfig {
    /// Parses a JSON document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document is malformed.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a JSON document from a reader.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] if the document is malformed or
    /// cannot be read.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads the tolerance from the environment variable `key`.
    ///
    /// An unset variable yields an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] if the variable is set but is
    /// not a number.
    pub fn from_env(key: &str) -> Result<Self, ConfigError> {
        match std::env::var(key) {
            Ok(raw) => Self::from_raw(key, &raw),
            Err(_) => Ok(Self::default()),
        }
    }

    /// Reads the tolerance from a raw textual value.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Malformed`] if `raw` is not a number.
    pub fn from_raw(key: &str, raw: &str) -> Result<Self, ConfigError> {
        let trimmed = raw.trim();
        match trimmed.parse::<f64>() {
            Ok(value) => Ok(Self {
                epsilon: Some(value),
            }),
            Err(_) => {
                tracing::warn!(key, value = trimmed, "tolerance is not a number");
                Err(ConfigError::Malformed {
                    key: key.to_owned(),
                    value: trimmed.to_owned(),
                })
            }
        }
    }

    /// Resolves the configured value into an [`Epsilon`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Missing`] when nothing was configured and
    /// [`ConfigError::Tolerance`] when the value is negative or NaN.
    pub fn epsilon(&self) -> Result<Epsilon, ConfigError> {
        let value = self.epsilon.ok_or(ConfigError::Missing)?;
        let eps = Epsilon::new(value)?;
        tracing::debug!(epsilon = value, "resolved tolerance");
        Ok(eps)
    }
}
