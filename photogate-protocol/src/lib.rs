//! Gate-to-gate control packet protocol
//!
//! This crate defines the fixed-size binary packet exchanged between two
//! paired Photogate devices over the point-to-point datagram link. The
//! protocol is symmetric: either gate may report runs or command the other.
//!
//! # Wire format
//!
//! All packets are exactly 13 bytes, little-endian:
//! ```text
//! ┌──────┬───────────┬──────────┬─────────────┐
//! │ CODE │ START     │ STOP     │ ELAPSED     │
//! │ 1B   │ 4B (i32)  │ 4B (i32) │ 4B (i32)    │
//! └──────┴───────────┴──────────┴─────────────┘
//! ```
//!
//! Timestamps are sender-local milliseconds; a receiver must never compare
//! them against its own clock. Unknown codes are carried through decode so
//! the receiving controller can apply its fail-safe disarm rule.

#![no_std]
#![deny(unsafe_code)]

pub mod packet;

pub use packet::{Command, Packet, PacketError, PACKET_LEN};
