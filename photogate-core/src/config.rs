//! Configuration type definitions

/// Gate behavior configuration
///
/// Built once at boot by the firmware and handed to the controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GateConfig {
    /// Quiet window after a disarm event before the gate may re-arm (ms)
    pub disarm_interval_ms: u32,
    /// Re-arm automatically once the quiet window has elapsed
    ///
    /// When false the gate re-arms only on a remote arm/toggle command.
    pub auto_rearm: bool,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            disarm_interval_ms: 10_000,
            auto_rearm: true,
        }
    }
}
