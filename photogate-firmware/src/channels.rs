//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! Inbound packets are queued here and applied by the gate task between
//! ticks, so controller state is only ever touched from one loop.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::mutex::Mutex;
use embassy_sync::signal::Signal;

use photogate_display::DisplayFrame;
use photogate_protocol::Packet;

/// Channel capacity for inbound packets from the peer gate
const RX_CHANNEL_SIZE: usize = 8;

/// Channel capacity for outbound packets
const TX_CHANNEL_SIZE: usize = 8;

/// Per-send completion report from the radio TX task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SendStatus {
    /// The datagram was handed to the link
    Delivered,
    /// The link refused the datagram
    Failed,
}

/// Inbound packets decoded by the radio RX task
pub static RADIO_RX_CHANNEL: Channel<CriticalSectionRawMutex, Packet, RX_CHANNEL_SIZE> =
    Channel::new();

/// Outbound packets awaiting transmission
pub static RADIO_TX_CHANNEL: Channel<CriticalSectionRawMutex, Packet, TX_CHANNEL_SIZE> =
    Channel::new();

/// Completion reports, one per outbound packet
pub static SEND_STATUS: Channel<CriticalSectionRawMutex, SendStatus, TX_CHANNEL_SIZE> =
    Channel::new();

/// Shared display frame protected by mutex
pub static FRAME: Mutex<CriticalSectionRawMutex, DisplayFrame> = Mutex::new(DisplayFrame::new());

/// Signal that a new frame is ready to be pushed to the strip
pub static FRAME_UPDATE: Signal<CriticalSectionRawMutex, ()> = Signal::new();
