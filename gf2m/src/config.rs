//! Field configuration loaded from TOML
//!
//! ```toml
//! name = "gf8"
//! generator = "1011"        # or: exponents = [3, 1, 0]
//! text_policy = "strict"    # or "lossy"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::field::Field;
use crate::poly::{BitPoly, TextPolicy};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Generator as an MSB-first bit string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generator: Option<String>,
    /// Generator as the degrees of its non-zero terms.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exponents: Option<Vec<usize>>,
    #[serde(default)]
    pub text_policy: TextPolicy,
}

impl FieldConfig {
    pub fn from_exponents(name: &str, exponents: &[usize]) -> Self {
        Self {
            name: Some(name.to_owned()),
            exponents: Some(exponents.to_vec()),
            ..Self::default()
        }
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        let config = Self::from_toml_str(&contents)?;
        debug!(path = %path.display(), name = ?config.name, "loaded field config");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::Config(e.to_string()))
    }

    pub fn generator_poly(&self) -> Result<BitPoly> {
        match (&self.generator, &self.exponents) {
            (Some(bits), None) => BitPoly::parse_with(bits, self.text_policy),
            (None, Some(exponents)) => Ok(BitPoly::from_exponents(exponents)),
            (Some(_), Some(_)) => Err(Error::Config(
                "specify either `generator` or `exponents`, not both".into(),
            )),
            (None, None) => Err(Error::Config("missing `generator` or `exponents`".into())),
        }
    }

    pub fn build(&self) -> Result<Field> {
        Ok(Field::new(self.generator_poly()?)?.with_text_policy(self.text_policy))
    }
}
