//! Configuration
//!
//! Settings are loaded from `sheetnorm.toml`:
//!
//! ```toml
//! [pipeline]
//! duplicate_headers = "suffix"   # or "overwrite"
//! month_keyword = "month"
//! ```
//!
//! Every key is optional; missing keys take their defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pipeline::PipelineOptions;

/// Default configuration file name
pub const CONFIG_FILE_NAME: &str = "sheetnorm.toml";

/// Top-level settings structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    /// Normalization pipeline settings
    pub pipeline: PipelineOptions,
}

impl Settings {
    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load settings from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Load `sheetnorm.toml` from `dir` if it exists, defaults otherwise
    pub fn discover(dir: impl AsRef<Path>) -> Result<Self> {
        let path = dir.as_ref().join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
