//! Tick task for time-based updates
//!
//! Provides periodic ticks to the gate task for:
//! - Sensor polling
//! - Re-arm window tracking
//! - Live readout refresh (display lags by at most one tick)

use defmt::*;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use embassy_time::{Duration, Instant, Ticker};

/// Tick interval in milliseconds
pub const TICK_INTERVAL_MS: u32 = 20;

/// Signal to notify the gate task of a tick
pub static TICK_SIGNAL: Signal<CriticalSectionRawMutex, u32> = Signal::new();

/// Tick task - sends periodic tick signals with timestamp
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut ticker = Ticker::every(Duration::from_millis(TICK_INTERVAL_MS as u64));

    loop {
        ticker.next().await;

        // Milliseconds since boot; the gate's injected monotonic clock
        let now_ms = Instant::now().as_millis() as u32;

        TICK_SIGNAL.signal(now_ms);
    }
}
