//! Configuration support for hologram-hypercomplex
//!
//! Settings are read from TOML text supplied by the caller; the crate itself
//! never touches the filesystem.
//!
//! # Example Config
//!
//! ```toml
//! # Mixed-order multiplication: "promote" (default) or "broadcast"
//! multiplication = "promote"
//!
//! # Print zero coefficients (default: false)
//! show_zero_coefficients = false
//! ```

use crate::algebra::promotion::MulPolicy;
use crate::context::AlgebraContext;
use crate::codec::format::FormatOptions;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Section name used when the settings share a document with other tools
pub const SECTION: &str = "hypercomplex";

/// Algebra settings; unset fields take their defaults
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct AlgebraConfig {
    /// Mixed-order multiplication policy (default: promote)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub multiplication: Option<MulPolicy>,

    /// Print zero coefficients (default: false)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_zero_coefficients: Option<bool>,
}

impl AlgebraConfig {
    /// Parse a TOML document in sectioned or direct format
    ///
    /// 1. **Sectioned format**:
    /// ```toml
    /// [hypercomplex]
    /// multiplication = "broadcast"
    /// ```
    ///
    /// 2. **Direct format**:
    /// ```toml
    /// multiplication = "broadcast"
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let table: toml::Table = toml::from_str(text)?;
        let config: AlgebraConfig = match table.get(SECTION) {
            Some(section) => section.clone().try_into()?,
            None => toml::Value::Table(table).try_into()?,
        };
        tracing::debug!(?config, "loaded algebra configuration");
        Ok(config)
    }

    /// Serialize in direct format
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| Error::Config(e.to_string()))
    }

    /// Effective mixed-order policy
    pub fn mul_policy(&self) -> MulPolicy {
        self.multiplication.unwrap_or_default()
    }

    /// Effective printer settings
    pub fn format_options(&self) -> FormatOptions {
        FormatOptions {
            show_zero_coefficients: self.show_zero_coefficients.unwrap_or(false),
        }
    }

    /// Immutable runtime context built from these settings
    pub fn to_context(&self) -> AlgebraContext {
        AlgebraContext::new(self.mul_policy(), self.format_options())
    }
}
