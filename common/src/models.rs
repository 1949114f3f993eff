//! # Domain Models
//!
//! Core data structures shared by every layer of leakcheck.
//!
//! ## Probe Results
//! * [`probe::ProbeTarget`]: One statically configured IP-echo service.
//! * [`probe::ProbeOutcome`]: The immutable result of probing a single target.
//! * [`verdict::ConsistencyVerdict`]: Agreement classification across many outcomes.
//!
//! ## Local State
//! * [`interface::InterfaceAddress`]: One address of a local network interface.
//! * [`system::ConnectivitySnapshot`]: Transport and capability flags of the active network.
//! * [`system::TimeSnapshot`]: Time zone and locale of the device.
//!
//! ## Reports
//! * [`report::BasicReport`] and [`report::AdvancedReport`] are what the presentation sink receives.

pub mod geo;
pub mod interface;
pub mod probe;
pub mod report;
pub mod system;
pub mod verdict;
