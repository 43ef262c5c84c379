//! Localized control labels and the host data object.

use crate::error::ImplicantResult;
use crate::trace::Trace;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Label key of the trigger while stopped.
pub const SIMULATE: &str = "simulate";
/// Label key of the trigger while running.
pub const STOP_SIMULATION: &str = "stopSimulation";
/// Label key of the previous-step control.
pub const PREV_STEP: &str = "prevStep";
/// Label key of the next-step control.
pub const NEXT_STEP: &str = "nextStep";

/// Key -> localized string table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Translations {
    entries: BTreeMap<String, String>,
}

impl Translations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.entries.insert(key.into(), text.into());
        self
    }

    /// Localized text for `key`, or the key itself when there is none.
    pub fn tr<'a>(&'a self, key: &'a str) -> &'a str {
        match self.entries.get(key) {
            Some(text) if !text.is_empty() => text.as_str(),
            _ => key,
        }
    }
}

/// Data the report host provides before the player starts.
///
/// Both fields are optional in JSON; a missing trace leaves the simulate
/// control disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostData {
    pub combinations: Trace,
    pub translations: Translations,
}

impl HostData {
    pub fn from_json_str(json: &str) -> ImplicantResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> ImplicantResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }
}
