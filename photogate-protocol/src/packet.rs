//! Control packet encoding and decoding.
//!
//! Packet format (13 bytes, little-endian):
//! - CODE (1 byte): command discriminator
//! - START (4 bytes): sender-local start timestamp in ms
//! - STOP (4 bytes): sender-local stop timestamp in ms
//! - ELAPSED (4 bytes): computed run duration in ms

/// Size of an encoded packet in bytes
pub const PACKET_LEN: usize = 13;

// Wire values for the command discriminator
const CODE_REQUEST_ARM: u8 = 3;
const CODE_BUSY: u8 = 5;
const CODE_RUN_STOPPED: u8 = 8;
const CODE_RUN_STARTED: u8 = 9;
const CODE_TOGGLE_ARM: u8 = 10;

/// Errors that can occur during packet encoding or decoding
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PacketError {
    /// Datagram is not exactly [`PACKET_LEN`] bytes
    WrongLength,
    /// Output buffer too small for encoding
    BufferTooSmall,
}

/// Command discriminator carried in the CODE byte
///
/// Any value outside the canonical set decodes to [`Command::Other`] rather
/// than an error: the receiving controller treats unrecognized codes as a
/// disarm request, so they must survive decode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Ask the peer to arm its trigger
    RequestArm,
    /// Peer refused a packet because a run is in progress
    Busy,
    /// A run finished; timestamps and elapsed time are valid
    RunStopped,
    /// A run started; the start timestamp is valid
    RunStarted,
    /// Flip the peer's arm state; accepted even mid-run
    ToggleArm,
    /// Unrecognized discriminator (fail-safe: receiver disarms)
    Other(u8),
}

impl Command {
    /// Wire value of this command
    pub fn code(self) -> u8 {
        match self {
            Command::RequestArm => CODE_REQUEST_ARM,
            Command::Busy => CODE_BUSY,
            Command::RunStopped => CODE_RUN_STOPPED,
            Command::RunStarted => CODE_RUN_STARTED,
            Command::ToggleArm => CODE_TOGGLE_ARM,
            Command::Other(code) => code,
        }
    }

    /// Decode a wire value
    pub fn from_code(code: u8) -> Self {
        match code {
            CODE_REQUEST_ARM => Command::RequestArm,
            CODE_BUSY => Command::Busy,
            CODE_RUN_STOPPED => Command::RunStopped,
            CODE_RUN_STARTED => Command::RunStarted,
            CODE_TOGGLE_ARM => Command::ToggleArm,
            other => Command::Other(other),
        }
    }

    /// Check if this command may be applied while a run is in progress
    pub fn overrides_run(self) -> bool {
        matches!(self, Command::ToggleArm)
    }
}

/// A gate-to-gate control packet
///
/// Both gates keep two instances alive for the device lifetime: one being
/// built for the next send, one overwritten by each accepted receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Packet {
    /// Command discriminator
    pub command: Command,
    /// Sender-local run start timestamp (ms)
    pub start_ms: i32,
    /// Sender-local run stop timestamp (ms)
    pub stop_ms: i32,
    /// Computed run duration (ms)
    pub elapsed_ms: i32,
}

impl Packet {
    /// An all-zero packet with the given command
    pub const fn empty(command: Command) -> Self {
        Self {
            command,
            start_ms: 0,
            stop_ms: 0,
            elapsed_ms: 0,
        }
    }

    /// A copy of this packet with only the command replaced
    ///
    /// Used for the busy notice, which must keep the timestamp fields of the
    /// pending outgoing packet intact.
    pub fn with_command(self, command: Command) -> Self {
        Self { command, ..self }
    }

    /// Encode this packet into a byte buffer
    ///
    /// Returns the number of bytes written
    pub fn encode(&self, buffer: &mut [u8]) -> Result<usize, PacketError> {
        if buffer.len() < PACKET_LEN {
            return Err(PacketError::BufferTooSmall);
        }

        buffer[0] = self.command.code();
        buffer[1..5].copy_from_slice(&self.start_ms.to_le_bytes());
        buffer[5..9].copy_from_slice(&self.stop_ms.to_le_bytes());
        buffer[9..13].copy_from_slice(&self.elapsed_ms.to_le_bytes());

        Ok(PACKET_LEN)
    }

    /// Encode this packet into a fixed-size array
    pub fn to_bytes(&self) -> [u8; PACKET_LEN] {
        let mut buffer = [0u8; PACKET_LEN];
        // Cannot fail: the buffer is exactly PACKET_LEN
        let _ = self.encode(&mut buffer);
        buffer
    }

    /// Decode a packet from a received datagram
    ///
    /// The datagram must be exactly [`PACKET_LEN`] bytes; the link preserves
    /// packet boundaries, so a short or long read is a framing fault.
    pub fn decode(bytes: &[u8]) -> Result<Self, PacketError> {
        if bytes.len() != PACKET_LEN {
            return Err(PacketError::WrongLength);
        }

        let field = |range: core::ops::Range<usize>| {
            let mut word = [0u8; 4];
            word.copy_from_slice(&bytes[range]);
            i32::from_le_bytes(word)
        };

        Ok(Self {
            command: Command::from_code(bytes[0]),
            start_ms: field(1..5),
            stop_ms: field(5..9),
            elapsed_ms: field(9..13),
        })
    }
}
