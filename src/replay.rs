//! Command script replay and trace verification.
//!
//! Replays a sequence of control activations against a [`Player`], and
//! checks that stepping a trace forward and back is lossless on a page.

use crate::config::PlayerConfig;
use crate::error::{ImplicantResult, ReplayError};
use crate::labels::Translations;
use crate::page::Page;
use crate::player::Player;
use crate::trace::Trace;
use similar::{ChangeTag, TextDiff};
use std::fmt::{self, Debug};
use std::str::FromStr;
use tracing::{debug, info};

/// A control activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// The simulate/stop trigger.
    Toggle,
    /// The next-step control.
    Advance,
    /// The previous-step control.
    Retreat,
}

impl FromStr for Command {
    type Err = ReplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "toggle" | "simulate" => Ok(Command::Toggle),
            "advance" | "next" => Ok(Command::Advance),
            "retreat" | "prev" => Ok(Command::Retreat),
            other => Err(ReplayError::UnknownCommand(other.to_string())),
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Toggle => f.write_str("toggle"),
            Command::Advance => f.write_str("advance"),
            Command::Retreat => f.write_str("retreat"),
        }
    }
}

/// Apply `commands` in order, returning the cursor after each one.
///
/// Fails on the first command that leaves the player unchanged.
pub fn replay_commands<P: Page + ?Sized>(
    player: &mut Player,
    page: &mut P,
    commands: &[Command],
) -> ImplicantResult<Vec<usize>> {
    let mut cursors = Vec::with_capacity(commands.len());

    for (index, command) in commands.iter().enumerate() {
        let applied = match command {
            Command::Toggle => player.toggle(page),
            Command::Advance => player.advance(page),
            Command::Retreat => player.retreat(page),
        };

        if !applied {
            return Err(ReplayError::Rejected {
                index,
                command: command.to_string(),
                mode: player.mode().to_string(),
                cursor: player.cursor(),
            }
            .into());
        }

        cursors.push(player.cursor());
    }

    debug!(commands = commands.len(), cursor = player.cursor(), "Script replayed");
    Ok(cursors)
}

/// Replay a JSON array of command names, e.g. `["simulate", "next", "prev"]`.
pub fn replay_script_str<P: Page + ?Sized>(
    player: &mut Player,
    page: &mut P,
    json: &str,
) -> ImplicantResult<Vec<usize>> {
    let names: Vec<String> =
        serde_json::from_str(json).map_err(|e| ReplayError::Parse(e.to_string()))?;
    let commands = names
        .iter()
        .map(|name| name.parse())
        .collect::<Result<Vec<Command>, _>>()?;
    replay_commands(player, page, &commands)
}

/// Check that every step of `trace` can be undone exactly.
///
/// Starting a simulation on a fresh page from `page_factory`, walks the trace
/// to its end and back. At each position, an advance followed by a retreat
/// (and on the way back a retreat followed by an advance) must leave the page
/// as it was. The step controls must be disabled exactly at the ends, and
/// stopping must remove them.
pub fn verify_trace<P, F>(page_factory: F, trace: &Trace, config: &PlayerConfig) -> ImplicantResult<()>
where
    P: Page + Clone + PartialEq + Debug,
    F: Fn(&Trace, &PlayerConfig) -> P,
{
    info!(steps = trace.len(), "Verifying trace");

    let mut page = page_factory(trace, config);
    let mut player = Player::new(trace.clone(), config.clone(), Translations::new());
    if !player.attach(&mut page) || !player.enter_running(&mut page) {
        return Err(ReplayError::NotReady.into());
    }

    let len = trace.len();

    for cursor in 0..len {
        check_round_trip(&mut player, &mut page, "advance then retreat", |p, pg| {
            p.advance(pg) && p.retreat(pg)
        })?;
        debug_assert_eq!(player.cursor(), cursor);
        player.advance(&mut page);
    }
    check_control(&page, &config.next_id, false, len)?;
    check_control(&page, &config.prev_id, true, len)?;

    for cursor in (1..=len).rev() {
        check_round_trip(&mut player, &mut page, "retreat then advance", |p, pg| {
            p.retreat(pg) && p.advance(pg)
        })?;
        debug_assert_eq!(player.cursor(), cursor);
        player.retreat(&mut page);
    }
    check_control(&page, &config.prev_id, false, 0)?;
    check_control(&page, &config.next_id, true, 0)?;

    player.exit_running(&mut page);
    for control in [&config.prev_id, &config.next_id] {
        if page.has_control(control) {
            return Err(ReplayError::Boundary {
                control: control.clone(),
                expected: "removed",
                cursor: player.cursor(),
            }
            .into());
        }
    }

    info!(steps = len, "Trace verified");
    Ok(())
}

fn check_round_trip<P, F>(
    player: &mut Player,
    page: &mut P,
    operation: &str,
    round_trip: F,
) -> ImplicantResult<()>
where
    P: Page + Clone + PartialEq + Debug,
    F: FnOnce(&mut Player, &mut P) -> bool,
{
    let cursor = player.cursor();
    let before = page.clone();

    if !round_trip(player, page) || player.cursor() != cursor || *page != before {
        let diff = unified_diff(&format!("{before:#?}"), &format!("{page:#?}"));
        return Err(ReplayError::Mismatch {
            cursor,
            operation: operation.to_string(),
            diff,
        }
        .into());
    }

    Ok(())
}

fn check_control<P: Page + ?Sized>(
    page: &P,
    control: &str,
    enabled: bool,
    cursor: usize,
) -> ImplicantResult<()> {
    if page.is_control_enabled(control) != enabled {
        return Err(ReplayError::Boundary {
            control: control.to_string(),
            expected: if enabled { "enabled" } else { "disabled" },
            cursor,
        }
        .into());
    }
    Ok(())
}

/// Produce a unified diff between two debug-formatted strings.
pub fn unified_diff(left: &str, right: &str) -> String {
    let diff = TextDiff::from_lines(left, right);
    let mut output = String::new();

    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-",
            ChangeTag::Insert => "+",
            ChangeTag::Equal => " ",
        };
        output.push_str(sign);
        output.push_str(change.value());
        if !change.value().ends_with('\n') {
            output.push('\n');
        }
    }

    output
}
