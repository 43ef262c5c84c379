//! Combination trace data and the playback cursor.
//!
//! A trace is the ordered list of implicant combinations recorded by the
//! minimizer. Each [`Step`] maps a role (`"combined"` for the implicant that
//! was produced, other keys for the implicants it was built from) to the
//! identifier under which the report renders that implicant.
//!
//! # Example
//!
//! ```
//! use implicant_replay::{Trace, TraceStore};
//!
//! let trace = Trace::from_json_str(r#"[
//!     {"combined": "0-", "left": 0, "right": 1},
//!     {"combined": "-0", "left": 0, "right": 2}
//! ]"#).unwrap();
//!
//! let store = TraceStore::new(trace);
//! assert_eq!(store.len(), 2);
//! assert_eq!(store.cursor(), 0);
//! assert!(store.has_next());
//! ```

use crate::error::{ImplicantResult, TraceError};
use crate::page::Page;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// One recorded combination: role name -> element identifier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Step {
    roles: BTreeMap<String, String>,
}

impl Step {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add (or replace) the identifier for a role.
    pub fn with_role(mut self, role: impl Into<String>, id: impl Into<String>) -> Self {
        self.roles.insert(role.into(), id.into());
        self
    }

    /// Identifier bound to `role`, if the step has one.
    pub fn get(&self, role: &str) -> Option<&str> {
        self.roles.get(role).map(String::as_str)
    }

    /// Iterate `(role, identifier)` pairs in role order.
    pub fn roles(&self) -> impl Iterator<Item = (&str, &str)> {
        self.roles.iter().map(|(r, id)| (r.as_str(), id.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

/// Ordered, immutable sequence of combination steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<BTreeMap<String, serde_json::Value>>")]
#[serde(into = "Vec<Step>")]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    /// Parse a trace from a JSON array of role objects.
    ///
    /// Identifiers may be strings or integers; integers are stored in their
    /// decimal form so `{"combined": 5}` addresses `m_5` / `b_5`.
    pub fn from_json_str(json: &str) -> ImplicantResult<Self> {
        let raw: Vec<BTreeMap<String, serde_json::Value>> =
            serde_json::from_str(json).map_err(|e| TraceError::Parse(e.to_string()))?;
        Ok(Self::try_from(raw)?)
    }

    /// Load a trace from a JSON file.
    pub fn from_path(path: &Path) -> ImplicantResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Step> {
        self.steps.get(index)
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Whether any step before `index` binds `role` to `id`.
    pub fn bound_before(&self, index: usize, role: &str, id: &str) -> bool {
        self.steps[..index.min(self.steps.len())]
            .iter()
            .any(|step| step.get(role) == Some(id))
    }
}

impl TryFrom<Vec<BTreeMap<String, serde_json::Value>>> for Trace {
    type Error = TraceError;

    fn try_from(raw: Vec<BTreeMap<String, serde_json::Value>>) -> Result<Self, Self::Error> {
        let mut steps = Vec::with_capacity(raw.len());

        for (index, entry) in raw.into_iter().enumerate() {
            let mut step = Step::new();
            for (role, value) in entry {
                let id = match value {
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => n.to_string(),
                    other => {
                        return Err(TraceError::InvalidIdentifier {
                            step: index,
                            role,
                            found: other.to_string(),
                        })
                    }
                };
                step.roles.insert(role, id);
            }
            steps.push(step);
        }

        Ok(Self { steps })
    }
}

impl From<Trace> for Vec<Step> {
    fn from(trace: Trace) -> Self {
        trace.steps
    }
}

impl FromIterator<Step> for Trace {
    fn from_iter<I: IntoIterator<Item = Step>>(iter: I) -> Self {
        Self {
            steps: iter.into_iter().collect(),
        }
    }
}

/// A trace together with the playback cursor.
///
/// The cursor is always in `[0, len]`: `0` means nothing has been shown yet,
/// `k` means step `k - 1` is the active one.
#[derive(Debug, Clone, Default)]
pub struct TraceStore {
    trace: Trace,
    cursor: usize,
}

impl TraceStore {
    pub fn new(trace: Trace) -> Self {
        Self { trace, cursor: 0 }
    }

    /// Rewind to the start without touching the page.
    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn len(&self) -> usize {
        self.trace.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    /// Whether playback can start: the container is rendered and there is
    /// at least one step.
    pub fn is_ready<P: Page + ?Sized>(&self, page: &P, container_id: &str) -> bool {
        page.has_container(container_id) && !self.trace.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn has_next(&self) -> bool {
        self.cursor < self.trace.len()
    }

    pub fn has_prev(&self) -> bool {
        self.cursor > 0
    }

    /// The active step, if any.
    pub fn current(&self) -> Option<&Step> {
        self.cursor.checked_sub(1).and_then(|i| self.trace.get(i))
    }

    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Move forward one step; `None` at the end.
    pub(crate) fn step_forward(&mut self) -> Option<usize> {
        if !self.has_next() {
            return None;
        }
        self.cursor += 1;
        Some(self.cursor)
    }

    /// Move back one step; `None` at the start.
    pub(crate) fn step_back(&mut self) -> Option<usize> {
        if !self.has_prev() {
            return None;
        }
        self.cursor -= 1;
        Some(self.cursor)
    }
}
