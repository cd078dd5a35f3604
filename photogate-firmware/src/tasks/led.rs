//! LED strip push task
//!
//! Waits for a frame update and pushes the whole strip in one DMA write,
//! so a digit is never visible half-painted.

use defmt::*;
use embassy_rp::peripherals::PIO0;
use embassy_rp::pio_programs::ws2812::PioWs2812;

use photogate_display::NUM_LEDS;

use crate::channels::{FRAME, FRAME_UPDATE};

/// LED task - pushes rendered frames to the WS2812 strip
#[embassy_executor::task]
pub async fn led_task(mut ws2812: PioWs2812<'static, PIO0, 0, NUM_LEDS>) {
    info!("LED task started");

    loop {
        FRAME_UPDATE.wait().await;

        // Copy the frame out so the DMA write does not hold the lock
        let leds = *FRAME.lock().await.leds();
        ws2812.write(&leds).await;

        trace!("Frame pushed");
    }
}
