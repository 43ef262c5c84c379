//! Playback controller.
//!
//! [`Player`] owns the trace cursor and the playback [`Mode`]. It reacts to
//! activations of three controls: the simulate trigger (which toggles the
//! mode), and the previous/next controls it creates while running.
//!
//! While running, the page reflects the cursor:
//!
//! - steps before the active one: combined implicant visible, plain color
//! - the active step: combined implicant visible, all its implicants highlighted
//! - steps after it: combined implicant hidden
//!
//! # Example
//!
//! ```
//! use implicant_replay::{Emphasis, Mode, Player, PlayerConfig, ReportPage, Step, Trace, Translations, Visibility};
//!
//! let trace = Trace::new(vec![
//!     Step::new().with_role("combined", "A"),
//!     Step::new().with_role("combined", "B"),
//! ]);
//! let config = PlayerConfig::default();
//! let mut page = ReportPage::for_trace(&trace, &config);
//! let mut player = Player::new(trace, config, Translations::new());
//!
//! assert!(player.attach(&mut page));
//! assert!(player.toggle(&mut page));
//! assert_eq!(player.mode(), Mode::Running);
//!
//! player.advance(&mut page);
//! let a = page.element("m_A").unwrap();
//! assert_eq!((a.visibility, a.emphasis), (Visibility::Visible, Emphasis::Next));
//! ```

use crate::config::PlayerConfig;
use crate::labels::{HostData, Translations, NEXT_STEP, PREV_STEP, SIMULATE, STOP_SIMULATION};
use crate::page::{Emphasis, Page, Visibility};
use crate::trace::{Trace, TraceStore};
use std::fmt;
use tracing::{debug, info};

/// Playback mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Report fully shown; the trigger starts a simulation.
    #[default]
    Stopped,
    /// Stepping through the trace; the trigger stops it.
    Running,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Stopped => f.write_str("stopped"),
            Mode::Running => f.write_str("running"),
        }
    }
}

/// Steps a combination trace forward and backward on a [`Page`].
///
/// One player drives one page. Every operation returns whether it changed
/// anything; operations that do not apply in the current mode or at the
/// current cursor are ignored.
#[derive(Debug, Clone)]
pub struct Player {
    store: TraceStore,
    mode: Mode,
    config: PlayerConfig,
    labels: Translations,
    available: bool,
}

impl Player {
    pub fn new(trace: Trace, config: PlayerConfig, labels: Translations) -> Self {
        Self {
            store: TraceStore::new(trace),
            mode: Mode::Stopped,
            config,
            labels,
            available: false,
        }
    }

    /// Create a player from the data object the report host injects.
    pub fn from_host_data(data: HostData, config: PlayerConfig) -> Self {
        Self::new(data.combinations, config, data.translations)
    }

    /// Bind the player to the page's simulate trigger.
    ///
    /// Without a trigger the player stays inert. If the page has no
    /// container or the trace is empty, the trigger is disabled for good.
    /// Otherwise the page is put in the stopped view: every implicant shown
    /// in plain color, no step controls, the trigger labelled for starting a
    /// simulation. A running simulation is stopped first. Returns whether
    /// the simulation can be started.
    pub fn attach<P: Page + ?Sized>(&mut self, page: &mut P) -> bool {
        if self.mode == Mode::Running {
            self.exit_running(page);
        }

        let trigger = &self.config.trigger_id;
        if !page.has_control(trigger) {
            debug!(trigger = %trigger, "No simulate trigger on page");
            self.available = false;
            return false;
        }

        if !self.store.is_ready(&*page, &self.config.container_id) {
            debug!(
                container = %self.config.container_id,
                steps = self.store.len(),
                "Nothing to simulate, disabling trigger"
            );
            page.set_control_enabled(trigger, false);
            self.available = false;
            return false;
        }

        self.show_stopped(page);
        page.set_control_enabled(&self.config.trigger_id, true);
        self.available = true;
        true
    }

    /// Start or stop the simulation, depending on the current mode.
    pub fn toggle<P: Page + ?Sized>(&mut self, page: &mut P) -> bool {
        match self.mode {
            Mode::Stopped => self.enter_running(page),
            Mode::Running => self.exit_running(page),
        }
    }

    /// Handle activation of the control with id `control`.
    ///
    /// Disabled or unknown controls are ignored.
    pub fn activate<P: Page + ?Sized>(&mut self, page: &mut P, control: &str) -> bool {
        if !page.is_control_enabled(control) {
            debug!(control, "Ignoring activation of disabled or missing control");
            return false;
        }

        if control == self.config.trigger_id {
            self.toggle(page)
        } else if control == self.config.prev_id {
            self.retreat(page)
        } else if control == self.config.next_id {
            self.advance(page)
        } else {
            false
        }
    }

    /// Hide the simulated implicants, rewind, and show the step controls.
    pub fn enter_running<P: Page + ?Sized>(&mut self, page: &mut P) -> bool {
        if self.mode == Mode::Running {
            return false;
        }
        if !self.available || !self.store.is_ready(&*page, &self.config.container_id) {
            debug!("Simulation not available");
            return false;
        }

        self.mode = Mode::Running;
        self.reset_container(page, Visibility::Hidden);
        self.store.reset();

        page.insert_control(&self.config.prev_id, self.labels.tr(PREV_STEP), false);
        page.insert_control(
            &self.config.next_id,
            self.labels.tr(NEXT_STEP),
            self.store.has_next(),
        );
        page.set_control_label(&self.config.trigger_id, self.labels.tr(STOP_SIMULATION));

        info!(steps = self.store.len(), "Simulation started");
        true
    }

    /// Show the whole report again and remove the step controls.
    pub fn exit_running<P: Page + ?Sized>(&mut self, page: &mut P) -> bool {
        if self.mode != Mode::Running {
            return false;
        }

        self.mode = Mode::Stopped;
        self.show_stopped(page);

        info!(cursor = self.store.cursor(), "Simulation stopped");
        true
    }

    /// Show the next combination.
    pub fn advance<P: Page + ?Sized>(&mut self, page: &mut P) -> bool {
        if self.mode != Mode::Running || !self.store.has_next() {
            debug!(mode = %self.mode, cursor = self.store.cursor(), "Ignoring advance");
            return false;
        }

        let index = self.store.cursor();
        if index > 0 {
            self.set_step_emphasis(page, index - 1, false, true);
        } else {
            page.set_control_enabled(&self.config.prev_id, true);
        }

        self.set_step_emphasis(page, index, true, true);
        self.store.step_forward();

        if !self.store.has_next() {
            page.set_control_enabled(&self.config.next_id, false);
        }

        debug!(cursor = self.store.cursor(), "Advanced");
        true
    }

    /// Undo the active combination and highlight the one before it.
    pub fn retreat<P: Page + ?Sized>(&mut self, page: &mut P) -> bool {
        if self.mode != Mode::Running || !self.store.has_prev() {
            debug!(mode = %self.mode, cursor = self.store.cursor(), "Ignoring retreat");
            return false;
        }

        if !self.store.has_next() {
            page.set_control_enabled(&self.config.next_id, true);
        }

        let index = self.store.cursor() - 1;
        self.set_step_emphasis(page, index, true, false);
        self.store.step_back();

        if index > 0 {
            self.set_step_emphasis(page, index - 1, false, false);
        } else {
            page.set_control_enabled(&self.config.prev_id, false);
        }

        debug!(cursor = self.store.cursor(), "Retreated");
        true
    }

    /// Apply the highlight for step `index` to both views of each of its
    /// implicants.
    ///
    /// `active` with `is_next` shows the step as the current one; `active`
    /// without it undoes the step. Inactive styling swaps the colors: with
    /// `is_next` the step becomes an already shown one, without it the step
    /// is highlighted again. Only the combined implicant changes visibility,
    /// and it stays visible if an earlier step produced the same implicant.
    /// Implicants missing either view are skipped.
    pub fn set_step_emphasis<P: Page + ?Sized>(
        &self,
        page: &mut P,
        index: usize,
        active: bool,
        is_next: bool,
    ) {
        let Some(step) = self.store.trace().get(index) else {
            return;
        };

        let emphasis = match (active, is_next) {
            (true, true) | (false, false) => Emphasis::Next,
            (true, false) | (false, true) => Emphasis::Normal,
        };

        for (role, id) in step.roles() {
            let (minterm, bits) = self.config.element_ids(id);
            if !page.has_element(&minterm) || !page.has_element(&bits) {
                continue;
            }

            if active && role == self.config.combined_role {
                let visibility = if is_next || self.store.trace().bound_before(index, role, id) {
                    Visibility::Visible
                } else {
                    Visibility::Hidden
                };
                page.set_visibility(&minterm, visibility);
                page.set_visibility(&bits, visibility);
            }

            page.set_emphasis(&minterm, emphasis);
            page.set_emphasis(&bits, emphasis);
        }
    }

    /// Set every simulated element's visibility and clear all highlights.
    fn reset_container<P: Page + ?Sized>(&self, page: &mut P, visibility: Visibility) {
        for element in page.container_elements(&self.config.container_id) {
            if element.simulated {
                page.set_visibility(&element.id, visibility);
            }
            page.set_emphasis(&element.id, Emphasis::Normal);
        }
    }

    /// Full report, no step controls, trigger labelled for starting.
    fn show_stopped<P: Page + ?Sized>(&self, page: &mut P) {
        self.reset_container(page, Visibility::Visible);
        page.remove_control(&self.config.prev_id);
        page.remove_control(&self.config.next_id);
        page.set_control_label(&self.config.trigger_id, self.labels.tr(SIMULATE));
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn cursor(&self) -> usize {
        self.store.cursor()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Whether [`attach`](Self::attach) found a usable trigger and trace.
    pub fn is_available(&self) -> bool {
        self.available
    }

    pub fn has_next(&self) -> bool {
        self.store.has_next()
    }

    pub fn has_prev(&self) -> bool {
        self.store.has_prev()
    }
}
