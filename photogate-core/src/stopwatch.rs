//! Stopwatch controller
//!
//! The controller is the stateful core of a gate. It owns the trigger phase,
//! the run timestamps, and the outgoing/incoming packet buffers, and is
//! driven from exactly two entry points:
//!
//! - [`Stopwatch::tick`], called periodically with the sensor level
//! - [`Stopwatch::on_packet`], called with each inbound packet
//!
//! Both run on the same loop; the firmware enqueues received packets and
//! applies them between ticks, so no locking is needed and a run can never
//! be mutated mid-flight by remote traffic.
//!
//! The clock is injected as `now_ms` and sends are returned to the caller
//! rather than performed here, which keeps the controller host-testable.

use photogate_protocol::{Command, Packet};

use crate::config::GateConfig;
use crate::state::{Event, Phase};

/// A display update produced by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Readout {
    /// Elapsed milliseconds to render as MM:SS:CC
    pub elapsed_ms: u32,
    /// Render in the alert color instead of the normal one
    pub alert: bool,
}

/// What the caller must do after driving the controller
///
/// `send` is fire-and-forget: the transport reports completion back through
/// [`Stopwatch::send_succeeded`] / [`Stopwatch::send_failed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Output {
    /// Packet to transmit to the paired gate, if any
    pub send: Option<Packet>,
    /// Display update to render, if any
    pub show: Option<Readout>,
}

/// The trigger/timer state machine plus its working buffers
pub struct Stopwatch {
    config: GateConfig,
    phase: Phase,
    /// Run start timestamp; valid only while running
    start_ms: u32,
    /// Timestamp of the last disarm event; gates re-arming
    last_arm_ms: u32,
    /// Packet being built for the next send
    outgoing: Packet,
    /// Most recently accepted inbound packet
    incoming: Packet,
    /// Exact bytes of the last transmission, kept for the single resend
    last_sent: Packet,
    /// A resend is still available for the last transmission
    retry_armed: bool,
}

impl Stopwatch {
    /// Create a new controller; the gate starts disarmed
    pub fn new(config: GateConfig) -> Self {
        Self {
            config,
            phase: Phase::Disarmed,
            start_ms: 0,
            last_arm_ms: 0,
            outgoing: Packet::empty(Command::Other(0)),
            incoming: Packet::empty(Command::Other(0)),
            last_sent: Packet::empty(Command::Other(0)),
            retry_armed: false,
        }
    }

    /// Current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if a run is in progress
    pub fn is_running(&self) -> bool {
        self.phase.running()
    }

    /// Most recently accepted inbound packet
    pub fn incoming(&self) -> &Packet {
        &self.incoming
    }

    /// Packet staged for the next send
    pub fn outgoing(&self) -> &Packet {
        &self.outgoing
    }

    /// Advance the controller by one tick
    ///
    /// `beam_interrupted` is the sensor level at this tick (logic-high =
    /// beam broken). At most one arm-state transition happens per tick.
    pub fn tick(&mut self, now_ms: u32, beam_interrupted: bool) -> Output {
        let mut output = Output::default();

        match self.phase {
            Phase::ArmedIdle if beam_interrupted => {
                // First trip since arming: start the run
                self.phase = self.phase.transition(Event::BeamInterrupted);
                self.start_ms = now_ms;
                self.last_arm_ms = now_ms;
                self.outgoing = Packet {
                    command: Command::RunStarted,
                    start_ms: now_ms as i32,
                    stop_ms: 0,
                    elapsed_ms: 0,
                };
                output.send = Some(self.stage_send(self.outgoing));
            }

            Phase::Running => {
                if beam_interrupted {
                    // Second trip: stop the run and report it
                    let elapsed_ms = now_ms.wrapping_sub(self.start_ms);
                    self.phase = self.phase.transition(Event::BeamInterrupted);
                    self.last_arm_ms = now_ms;
                    self.outgoing = Packet {
                        command: Command::RunStopped,
                        start_ms: self.start_ms as i32,
                        stop_ms: now_ms as i32,
                        elapsed_ms: elapsed_ms as i32,
                    };
                    output.show = Some(Readout {
                        elapsed_ms,
                        alert: false,
                    });
                    output.send = Some(self.stage_send(self.outgoing));
                } else {
                    // Live readout; lags real time by at most one tick
                    output.show = Some(Readout {
                        elapsed_ms: now_ms.wrapping_sub(self.start_ms),
                        alert: false,
                    });
                }
            }

            Phase::Disarmed => {
                if self.config.auto_rearm
                    && now_ms.wrapping_sub(self.last_arm_ms) >= self.config.disarm_interval_ms
                {
                    self.phase = self.phase.transition(Event::RearmWindowElapsed);
                }
            }

            _ => {}
        }

        output
    }

    /// Apply an inbound packet
    ///
    /// While a run is in progress any packet that does not carry the
    /// override code is refused: the peer gets a busy notice, the incoming
    /// buffer is left untouched, and no state changes. Otherwise the packet
    /// is stored, rendered, and the arm-management rule applied.
    pub fn on_packet(&mut self, now_ms: u32, packet: Packet) -> Output {
        let mut output = Output::default();

        if self.is_running() && !packet.command.overrides_run() {
            // Busy notice keeps the pending packet's timestamp fields
            output.send = Some(self.stage_send(self.outgoing.with_command(Command::Busy)));
            return output;
        }

        self.incoming = packet;
        output.show = Some(Readout {
            elapsed_ms: packet.elapsed_ms.max(0) as u32,
            alert: packet.command == Command::Busy,
        });

        // Arm-management rule: unrecognized or status codes disarm, so a
        // malformed or stale packet can never arm the gate
        let event = match packet.command {
            Command::RequestArm => Event::RemoteArm,
            Command::ToggleArm => Event::RemoteToggle,
            _ => Event::RemoteDisarm,
        };
        if event.is_disarm() && !self.is_running() {
            // Restart the quiet window so auto re-arm does not undo this
            self.last_arm_ms = now_ms;
        }
        self.phase = self.phase.transition(event);

        output
    }

    /// Report that the last send was delivered
    pub fn send_succeeded(&mut self) {
        self.retry_armed = false;
    }

    /// Report that the last send failed
    ///
    /// Returns the exact packet to resend, at most once per failed send;
    /// a failed resend is not retried again.
    pub fn send_failed(&mut self) -> Option<Packet> {
        if self.retry_armed {
            self.retry_armed = false;
            Some(self.last_sent)
        } else {
            None
        }
    }

    /// Record a transmission and arm its single resend
    fn stage_send(&mut self, packet: Packet) -> Packet {
        self.last_sent = packet;
        self.retry_armed = true;
        packet
    }
}
