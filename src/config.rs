//! Runtime settings
//!
//! Settings come from the process environment by default, with an injectable
//! lookup seam so callers (and tests) can supply values from another bag of
//! parameters instead.

use crate::error::{Error, Result};

/// Everything the exporter needs from its environment
#[derive(Debug, Clone)]
pub struct Settings {
    /// Output destination URL (`s3://bucket/prefix`, `gs://...`, local path)
    pub output_url: String,
    /// Path of the snapshot database file
    pub database_path: String,
    /// Log level directive
    pub log_level: String,
    /// System code stamped onto every log event
    pub sys_code: String,
}

impl Settings {
    /// Load settings from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load settings through an arbitrary lookup function
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            output_url: require(&lookup, "OUTPUT_URL")?,
            database_path: require(&lookup, "DATABASE_PATH")?,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
            sys_code: lookup("SYS_CODE").unwrap_or_else(|| "tablesnap".to_string()),
        })
    }
}

/// Fetch a required variable, naming it in the failure
fn require<F>(lookup: &F, name: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).ok_or_else(|| Error::missing_env(name))
}
