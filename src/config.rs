use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};
use std::{fs::File, io::BufReader, path::Path};
use tracing::warn;

use crate::{AssertResult, Error};

/// Environment variable naming a JSON file with an [`AssertConfig`].
pub const CONFIG_ENV: &str = "ASSERTING_CONFIG";

lazy_static! {
    static ref DEFAULT_CONFIG: AssertConfig = match AssertConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "falling back to the default assertion config");
            AssertConfig::default()
        }
    };
}

/// Process-wide configuration, read once from [`CONFIG_ENV`].
pub fn default_config() -> &'static AssertConfig {
    &DEFAULT_CONFIG
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AssertConfig {
    /// Emit a trace event for every passing assertion.
    #[serde(default = "default_false")]
    pub trace_passes: bool,

    #[serde(default)]
    pub harness: HarnessConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HarnessConfig {
    /// Fail the test at the end if a continuing failure was reported.
    #[serde(default = "default_true")]
    pub fail_on_drop: bool,

    #[serde(default = "default_true")]
    pub log_failures: bool,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            fail_on_drop: default_true(),
            log_failures: default_true(),
        }
    }
}

impl Default for AssertConfig {
    fn default() -> Self {
        Self {
            trace_passes: default_false(),
            harness: HarnessConfig::default(),
        }
    }
}

impl AssertConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> AssertResult<Self> {
        from_file(path)
    }

    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> AssertResult<Self> {
        from_str(s)
    }

    /// Loads the file named by [`CONFIG_ENV`], or the defaults when the
    /// variable is unset.
    pub fn from_env() -> AssertResult<Self> {
        match std::env::var(CONFIG_ENV) {
            Ok(path) => Self::from_file(path),
            Err(_) => Ok(Self::default()),
        }
    }
}

pub fn from_file<T: for<'de> Deserialize<'de>, P: AsRef<Path>>(path: P) -> AssertResult<T> {
    let file = File::open(path)
        .map_err(|e| Error::config(format!("Failed to open config file: {}", e)))?;
    let reader = BufReader::new(file);
    let config = serde_json::from_reader(reader)
        .map_err(|e| Error::config(format!("Failed to parse config file: {}", e)))?;
    Ok(config)
}

pub fn from_str<T: for<'de> Deserialize<'de>>(s: &str) -> AssertResult<T> {
    let config = serde_json::from_str(s)
        .map_err(|e| Error::config(format!("Failed to parse config: {}", e)))?;
    Ok(config)
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}
