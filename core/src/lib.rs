//! # leakcheck core
//!
//! The probing engine. Every check talks to the outside world through the ports defined in
//! `leakcheck_common::ports`, and this crate also ships the adapters for a real host.
//!
//! * **[`resolver`]** and **[`consistency`]**: public IP lookups against IP-echo services.
//! * **[`dns_exposure`]** and **[`local_addresses`]**: interface address heuristics.
//! * **[`geo`]** and **[`vpn_range`]**: advanced checks on the public IP.
//! * **[`orchestrator`]**: runs the basic and advanced checks and reports to a sink.

pub mod consistency;
pub mod dns_exposure;
pub mod geo;
pub mod local_addresses;
pub mod locale;
pub mod network;
pub mod orchestrator;
pub mod resolver;
pub mod system;
pub mod vpn_range;
pub mod webrtc;
