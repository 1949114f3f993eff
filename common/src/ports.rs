//! # Ports Layer (Boundaries)
//!
//! Defines the traits that isolate the probing engine from the infrastructure it talks to.
//!
//! ## Dependency Rule
//! * The orchestrator and the checks depend on these traits only.
//! * `leakcheck-core` provides the system adapters, the CLI provides the presentation sink, and
//!   tests provide stubs.

pub mod outbound;
