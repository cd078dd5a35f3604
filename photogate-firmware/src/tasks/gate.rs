//! Main gate task
//!
//! Owns the stopwatch controller and the laser sensor pin. Every iteration
//! handles exactly one of: a tick, an inbound packet, or a send-completion
//! report. Packets are therefore applied synchronously between ticks and
//! can never race the tick path.

use defmt::*;
use embassy_futures::select::{select3, Either3};
use embassy_rp::gpio::Input;
use embassy_time::Instant;

use photogate_core::config::GateConfig;
use photogate_core::stopwatch::{Output, Readout, Stopwatch};
use photogate_core::timecode::TimeFields;
use photogate_display::Mode;

use crate::channels::{SendStatus, FRAME, FRAME_UPDATE, RADIO_RX_CHANNEL, RADIO_TX_CHANNEL, SEND_STATUS};
use crate::tasks::tick::TICK_SIGNAL;

/// Gate task - drives the stopwatch controller
#[embassy_executor::task]
pub async fn gate_task(beam: Input<'static>, config: GateConfig) {
    info!("Gate task started");

    let mut watch = Stopwatch::new(config);

    loop {
        match select3(
            TICK_SIGNAL.wait(),
            RADIO_RX_CHANNEL.receive(),
            SEND_STATUS.receive(),
        )
        .await
        {
            Either3::First(now_ms) => {
                // Logic-high = beam broken
                let interrupted = beam.is_high();
                let output = watch.tick(now_ms, interrupted);
                if output.send.is_some() {
                    debug!("Tick at {} ms: phase {:?}", now_ms, watch.phase());
                }
                apply(output).await;
            }

            Either3::Second(packet) => {
                debug!("Inbound packet: {:?}", packet.command);
                let now_ms = Instant::now().as_millis() as u32;
                apply(watch.on_packet(now_ms, packet)).await;
            }

            Either3::Third(status) => match status {
                SendStatus::Delivered => watch.send_succeeded(),
                SendStatus::Failed => {
                    if let Some(packet) = watch.send_failed() {
                        warn!("Send failed, resending once");
                        RADIO_TX_CHANNEL.send(packet).await;
                    } else {
                        warn!("Resend failed too, giving up");
                    }
                }
            },
        }
    }
}

/// Carry out the controller's requested side effects
async fn apply(output: Output) {
    if let Some(packet) = output.send {
        RADIO_TX_CHANNEL.send(packet).await;
    }
    if let Some(readout) = output.show {
        render(readout).await;
    }
}

/// Paint a readout into the shared frame and signal the LED task
async fn render(readout: Readout) {
    let digits = TimeFields::from_ms(readout.elapsed_ms).digits();
    let mode = if readout.alert { Mode::Alert } else { Mode::Normal };

    let mut frame = FRAME.lock().await;
    frame.paint_time(digits, mode);
    drop(frame);

    FRAME_UPDATE.signal(());
}
