//! # leakcheck common
//!
//! Shared vocabulary of the leakcheck workspace.
//!
//! * **[`models`]**: probe targets, outcomes, verdicts and the reports handed to the sink.
//! * **[`ports`]**: traits separating the probing engine from HTTP, the OS and the terminal.
//! * **[`error`]**: the typed [`error::ProbeError`] returned by every probe.
//! * **[`config`]**: service lists, deadlines and thresholds.
//! * **[`network`]**: IPv4 literal helpers and interface enumeration.

pub mod config;
pub mod error;
pub mod models;
pub mod network;
pub mod ports;
pub mod utils;
