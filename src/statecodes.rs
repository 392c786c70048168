//! Region code directory, loaded once at startup and injected read-only
//! into the command handler.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("cannot read state code file: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed state code file: {0}")]
    Json(#[from] serde_json::Error),
}

/// Maps uppercase two-letter codes and full-name aliases to region names.
pub(crate) struct StateCodes {
    entries: BTreeMap<String, String>,
}

impl StateCodes {
    pub(crate) fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)?;
        Ok(Self::parse(&raw)?)
    }

    pub(crate) fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        let entries = serde_json::from_str(raw)?;
        Ok(Self { entries })
    }

    pub(crate) fn resolve(&self, code: &str) -> Option<&str> {
        self.entries.get(code).map(String::as_str)
    }

    /// Two-letter codes only; the full-name aliases are excluded from the
    /// listing. Order is the code order, stable across runs.
    pub(crate) fn short_codes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .filter(|(code, _)| code.len() == 2)
            .map(|(code, name)| (code.as_str(), name.as_str()))
    }
}
