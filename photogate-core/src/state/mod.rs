//! Trigger/timer state machine
//!
//! Defines the authoritative arm/run behavior of a gate.
//! The state machine is explicit, finite, and deterministic.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::Phase;
