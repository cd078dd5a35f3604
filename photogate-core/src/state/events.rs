//! Events that trigger state transitions

/// Events that can trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Sensor events
    /// The laser beam was broken while the sensor is actionable
    BeamInterrupted,

    // Timer events
    /// The quiet window since the last disarm event has elapsed
    RearmWindowElapsed,

    // Remote events (applied after an inbound packet is accepted)
    /// Peer requested arming
    RemoteArm,
    /// Peer requested the arm state be flipped
    RemoteToggle,
    /// Peer sent any other code; fail-safe disarm
    RemoteDisarm,
}

impl Event {
    /// Check if this event originated from the paired gate
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Event::RemoteArm | Event::RemoteToggle | Event::RemoteDisarm
        )
    }

    /// Check if this event is a disarm event for re-arm gating purposes
    pub fn is_disarm(&self) -> bool {
        matches!(self, Event::BeamInterrupted | Event::RemoteDisarm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_events() {
        assert!(Event::RemoteArm.is_remote());
        assert!(Event::RemoteToggle.is_remote());
        assert!(Event::RemoteDisarm.is_remote());
        assert!(!Event::BeamInterrupted.is_remote());
        assert!(!Event::RearmWindowElapsed.is_remote());
    }

    #[test]
    fn test_disarm_events() {
        assert!(Event::BeamInterrupted.is_disarm());
        assert!(Event::RemoteDisarm.is_disarm());
        assert!(!Event::RemoteArm.is_disarm());
    }
}
