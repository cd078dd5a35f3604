//! Radio transmit task
//!
//! Sends queued packets to the peer gate and reports per-send completion
//! back to the gate task, which decides on the single resend.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use crate::channels::{SendStatus, RADIO_TX_CHANNEL, SEND_STATUS};

/// Radio TX task - encodes and transmits packets
#[embassy_executor::task]
pub async fn radio_tx_task(mut tx: BufferedUartTx) {
    info!("Radio TX task started");

    loop {
        let packet = RADIO_TX_CHANNEL.receive().await;
        let bytes = packet.to_bytes();

        let status = match tx.write_all(&bytes).await {
            Ok(()) => {
                trace!("TX packet, code {}", packet.command.code());
                SendStatus::Delivered
            }
            Err(_) => {
                warn!("UART write error");
                SendStatus::Failed
            }
        };

        SEND_STATUS.send(status).await;
    }
}
