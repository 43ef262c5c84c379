//! implicant-replay: step-by-step replay of Quine-McCluskey combination traces.
//!
//! The minimizer records every pair of implicants it combines while finding
//! prime implicants. The report renders each implicant twice (as a minterm
//! set and as a bit pattern). This crate walks through the recorded
//! combinations one at a time on the rendered report, hiding implicants that
//! have not been produced yet and highlighting the combination being shown.
//!
//! The report itself is reached through the [`Page`] trait; [`ReportPage`]
//! implements it in memory.
//!
//! # Quick Start
//!
//! ```
//! use implicant_replay::*;
//!
//! let data = HostData::from_json_str(r#"{
//!     "combinations": [
//!         {"combined": "0-", "left": "00", "right": "01"},
//!         {"combined": "-0", "left": "00", "right": "10"}
//!     ],
//!     "translations": {"simulate": "Simulate", "stopSimulation": "Stop"}
//! }"#)?;
//!
//! let config = PlayerConfig::default();
//! let mut page = ReportPage::for_trace(&data.combinations, &config);
//! let mut player = Player::from_host_data(data, config);
//!
//! player.attach(&mut page);
//! player.activate(&mut page, "fpi-simulate");
//! player.activate(&mut page, "fpi-next");
//!
//! assert_eq!(player.cursor(), 1);
//! assert_eq!(page.control("fpi-simulate").unwrap().label, "Stop");
//! # Ok::<(), implicant_replay::Error>(())
//! ```

pub mod config;
pub mod error;
pub mod labels;
pub mod page;
pub mod player;
#[cfg(feature = "replay")]
pub mod replay;
pub mod trace;

// Re-export core types for convenience
pub use config::{PlayerConfig, PlayerConfigBuilder};
pub use error::{ConfigError, Error, ImplicantResult, TraceError};
pub use labels::{HostData, Translations};
pub use page::{ContainerElement, ControlState, Element, Emphasis, Page, ReportPage, Visibility};
pub use player::{Mode, Player};
pub use trace::{Step, Trace, TraceStore};

#[cfg(feature = "replay")]
pub use error::ReplayError;
#[cfg(feature = "replay")]
pub use replay::{replay_commands, replay_script_str, verify_trace, Command};
