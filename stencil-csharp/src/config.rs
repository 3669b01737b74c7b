//! Generator configuration.

use serde::Deserialize;
use stencil_emit::Indent;

use crate::Result;

/// Configuration for a generation pass.
///
/// Loaded from TOML, e.g.:
///
/// ```toml
/// indent = { spaces = 4 }
/// ```
///
/// Every field has a default; `indent` defaults to one tab per level.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Indentation token used per nesting level.
    pub indent: Indent,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            indent: Indent::default(),
        }
    }
}

impl GeneratorConfig {
    /// Parse configuration from a TOML document.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        Ok(toml::from_str(input)?)
    }
}
