//! State machine definition
//!
//! All trigger and timer behavior is a function of the current phase and an
//! event. A single beam interruption both starts and later stops a run: the
//! sensor line is a toggle, not an edge pair.

use super::events::Event;

/// Gate phases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Sensor interruptions are not actionable; waiting for re-arm
    Disarmed,
    /// Armed and idle; the next interruption starts a run
    ArmedIdle,
    /// A timed interval is in progress; the next interruption stops it
    Running,
}

impl Phase {
    /// Check if a sensor interruption is currently actionable
    pub fn armed(&self) -> bool {
        matches!(self, Phase::ArmedIdle | Phase::Running)
    }

    /// Check if a timed interval is in progress
    pub fn running(&self) -> bool {
        matches!(self, Phase::Running)
    }

    /// Process an event and return the next phase
    ///
    /// This is the core state transition logic. A running gate never leaves
    /// `Running` for a remote event: inbound traffic cannot corrupt a run
    /// (the controller refuses non-override packets before they get here).
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Phase::*;

        match (self, event) {
            // Disarmed transitions
            (Disarmed, RearmWindowElapsed) => ArmedIdle,
            (Disarmed, RemoteArm) => ArmedIdle,
            (Disarmed, RemoteToggle) => ArmedIdle,

            // ArmedIdle transitions
            (ArmedIdle, BeamInterrupted) => Running,
            (ArmedIdle, RemoteToggle) => Disarmed,
            (ArmedIdle, RemoteDisarm) => Disarmed,

            // Running transitions
            (Running, BeamInterrupted) => Disarmed,

            // Default: stay in current phase
            _ => self,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rearm_window() {
        let phase = Phase::Disarmed;
        let next = phase.transition(Event::RearmWindowElapsed);
        assert_eq!(next, Phase::ArmedIdle);
    }

    #[test]
    fn test_interruption_is_a_toggle() {
        // First trip since arming starts the run
        let running = Phase::ArmedIdle.transition(Event::BeamInterrupted);
        assert_eq!(running, Phase::Running);

        // Second trip while running stops it, pending re-arm
        let stopped = running.transition(Event::BeamInterrupted);
        assert_eq!(stopped, Phase::Disarmed);
    }

    #[test]
    fn test_interruption_ignored_while_disarmed() {
        let next = Phase::Disarmed.transition(Event::BeamInterrupted);
        assert_eq!(next, Phase::Disarmed);
    }

    #[test]
    fn test_remote_arm_and_disarm() {
        assert_eq!(
            Phase::Disarmed.transition(Event::RemoteArm),
            Phase::ArmedIdle
        );
        assert_eq!(
            Phase::ArmedIdle.transition(Event::RemoteDisarm),
            Phase::Disarmed
        );
        // Arming an armed gate is a no-op
        assert_eq!(
            Phase::ArmedIdle.transition(Event::RemoteArm),
            Phase::ArmedIdle
        );
    }

    #[test]
    fn test_remote_toggle_flips_arm() {
        assert_eq!(
            Phase::Disarmed.transition(Event::RemoteToggle),
            Phase::ArmedIdle
        );
        assert_eq!(
            Phase::ArmedIdle.transition(Event::RemoteToggle),
            Phase::Disarmed
        );
    }

    #[test]
    fn test_run_survives_remote_events() {
        for event in [Event::RemoteArm, Event::RemoteToggle, Event::RemoteDisarm] {
            assert_eq!(Phase::Running.transition(event), Phase::Running);
        }
    }

    #[test]
    fn test_armed_predicate() {
        assert!(Phase::ArmedIdle.armed());
        assert!(Phase::Running.armed());
        assert!(!Phase::Disarmed.armed());
    }
}
