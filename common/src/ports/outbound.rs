//! # Outbound Ports (Driven Actors)
//!
//! Contracts for interactions *initiated by the engine* towards the outside world.
//!
//! ## Rules
//! 1. All items here must be `traits`.
//! 2. No concrete implementations allowed.
//! 3. Every fallible method returns a [`crate::error::ProbeError`], never panics.
pub mod fetcher;
pub mod system_repository;
pub mod ui;
