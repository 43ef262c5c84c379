//! The page seam between the player and the rendered report.
//!
//! The player never owns report elements. It addresses them by id through
//! [`Page`], which the host implements over whatever it renders into.
//! [`ReportPage`] is an in-memory implementation used headless and in tests.
//!
//! # Example
//!
//! ```
//! use implicant_replay::{Emphasis, Page, ReportPage, Visibility};
//!
//! let mut page = ReportPage::new()
//!     .with_container("finding_primes")
//!     .with_simulated("m_A")
//!     .with_simulated("b_A");
//!
//! page.set_visibility("m_A", Visibility::Hidden);
//! page.set_emphasis("m_A", Emphasis::Next);
//!
//! let m = page.element("m_A").unwrap();
//! assert_eq!(m.visibility, Visibility::Hidden);
//! assert_eq!(m.emphasis.color(), "#f30");
//! ```

use crate::config::PlayerConfig;
use crate::trace::Trace;
use serde::Serialize;
use std::collections::BTreeMap;

/// Whether an element is drawn.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    #[default]
    Visible,
    Hidden,
}

impl Visibility {
    /// CSS `visibility` value.
    pub fn as_css(self) -> &'static str {
        match self {
            Visibility::Visible => "visible",
            Visibility::Hidden => "hidden",
        }
    }
}

/// Highlight applied to an element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    /// Plain text color, used for shown and not-yet-shown implicants.
    #[default]
    Normal,
    /// Highlight color marking the implicants of the active combination.
    Next,
}

impl Emphasis {
    /// CSS color value.
    pub fn color(self) -> &'static str {
        match self {
            Emphasis::Normal => "#000",
            Emphasis::Next => "#f30",
        }
    }
}

/// An element found inside the simulation container.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerElement {
    pub id: String,
    /// Elements taking part in the simulation are hidden while it runs.
    pub simulated: bool,
}

/// Host page the player reads and writes.
///
/// Every write addresses an element or control by id. Writes to ids that do
/// not exist must be ignored rather than fail.
pub trait Page {
    /// Whether the simulation container has been rendered.
    fn has_container(&self, container_id: &str) -> bool;

    /// All elements inside the container (empty if it is missing).
    fn container_elements(&self, container_id: &str) -> Vec<ContainerElement>;

    fn has_element(&self, id: &str) -> bool;

    fn set_visibility(&mut self, id: &str, visibility: Visibility);

    fn set_emphasis(&mut self, id: &str, emphasis: Emphasis);

    fn has_control(&self, id: &str) -> bool;

    /// Whether a control exists and accepts activation.
    fn is_control_enabled(&self, id: &str) -> bool;

    /// Create a control next to the simulate trigger. Replaces an existing
    /// control with the same id.
    fn insert_control(&mut self, id: &str, label: &str, enabled: bool);

    fn set_control_label(&mut self, id: &str, label: &str);

    fn set_control_enabled(&mut self, id: &str, enabled: bool);

    fn remove_control(&mut self, id: &str);
}

/// State of one element on a [`ReportPage`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Element {
    pub simulated: bool,
    pub visibility: Visibility,
    pub emphasis: Emphasis,
}

/// State of one control on a [`ReportPage`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ControlState {
    pub label: String,
    pub enabled: bool,
}

/// In-memory report page.
///
/// All elements live inside the single container (when it exists). Maps are
/// ordered so `Debug` output is stable and diffable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportPage {
    container: Option<String>,
    elements: BTreeMap<String, Element>,
    controls: BTreeMap<String, ControlState>,
}

impl ReportPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the page a report for `trace` would render: every identifier
    /// gets a minterm and a bit-pattern element, identifiers produced by a
    /// combination are simulated, and the simulate trigger is present.
    pub fn for_trace(trace: &Trace, config: &PlayerConfig) -> Self {
        let mut page = Self::new()
            .with_container(&config.container_id)
            .with_trigger(&config.trigger_id);

        for step in trace.steps() {
            for (role, id) in step.roles() {
                let simulated = role == config.combined_role;
                for prefix in [&config.minterm_prefix, &config.bits_prefix] {
                    let element = page.elements.entry(format!("{prefix}{id}")).or_default();
                    element.simulated |= simulated;
                }
            }
        }

        page
    }

    pub fn with_container(mut self, id: impl Into<String>) -> Self {
        self.container = Some(id.into());
        self
    }

    /// Add a non-simulated element.
    pub fn with_element(mut self, id: impl Into<String>) -> Self {
        self.elements.insert(id.into(), Element::default());
        self
    }

    /// Add an element that takes part in the simulation.
    pub fn with_simulated(mut self, id: impl Into<String>) -> Self {
        self.elements.insert(
            id.into(),
            Element {
                simulated: true,
                ..Element::default()
            },
        );
        self
    }

    /// Add the simulate trigger (enabled, unlabelled).
    pub fn with_trigger(mut self, id: impl Into<String>) -> Self {
        self.controls.insert(
            id.into(),
            ControlState {
                label: String::new(),
                enabled: true,
            },
        );
        self
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    pub fn elements(&self) -> impl Iterator<Item = (&str, &Element)> {
        self.elements.iter().map(|(id, e)| (id.as_str(), e))
    }

    pub fn control(&self, id: &str) -> Option<&ControlState> {
        self.controls.get(id)
    }
}

impl Page for ReportPage {
    fn has_container(&self, container_id: &str) -> bool {
        self.container.as_deref() == Some(container_id)
    }

    fn container_elements(&self, container_id: &str) -> Vec<ContainerElement> {
        if !self.has_container(container_id) {
            return Vec::new();
        }
        self.elements
            .iter()
            .map(|(id, e)| ContainerElement {
                id: id.clone(),
                simulated: e.simulated,
            })
            .collect()
    }

    fn has_element(&self, id: &str) -> bool {
        self.elements.contains_key(id)
    }

    fn set_visibility(&mut self, id: &str, visibility: Visibility) {
        if let Some(e) = self.elements.get_mut(id) {
            e.visibility = visibility;
        }
    }

    fn set_emphasis(&mut self, id: &str, emphasis: Emphasis) {
        if let Some(e) = self.elements.get_mut(id) {
            e.emphasis = emphasis;
        }
    }

    fn has_control(&self, id: &str) -> bool {
        self.controls.contains_key(id)
    }

    fn is_control_enabled(&self, id: &str) -> bool {
        self.controls.get(id).is_some_and(|c| c.enabled)
    }

    fn insert_control(&mut self, id: &str, label: &str, enabled: bool) {
        self.controls.insert(
            id.to_string(),
            ControlState {
                label: label.to_string(),
                enabled,
            },
        );
    }

    fn set_control_label(&mut self, id: &str, label: &str) {
        if let Some(c) = self.controls.get_mut(id) {
            c.label = label.to_string();
        }
    }

    fn set_control_enabled(&mut self, id: &str, enabled: bool) {
        if let Some(c) = self.controls.get_mut(id) {
            c.enabled = enabled;
        }
    }

    fn remove_control(&mut self, id: &str) {
        self.controls.remove(id);
    }
}
