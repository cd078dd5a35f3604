//! Board-agnostic core logic for the Photogate laser stopwatch
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Trigger/timer state machine
//! - Stopwatch controller (tick and inbound-packet handling)
//! - Elapsed-time to display-digit codec
//! - Configuration type definitions
//!
//! The monotonic clock is injected as a `now_ms` argument and the transport
//! is decoupled by returning packets to send, so everything here runs
//! deterministically in host tests.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod state;
pub mod stopwatch;
pub mod timecode;
