//! Radio receive task
//!
//! Reads 13-byte datagrams from the peer gate and queues them for the gate
//! task. The modem is a transparent serial link that preserves datagram
//! boundaries, so a fixed-size read realigns on every packet.

use defmt::*;
use embassy_rp::uart::BufferedUartRx;
use embedded_io_async::Read;

use photogate_protocol::{Packet, PACKET_LEN};

use crate::channels::RADIO_RX_CHANNEL;

/// Radio RX task - receives and decodes packets from the peer
#[embassy_executor::task]
pub async fn radio_rx_task(mut rx: BufferedUartRx) {
    info!("Radio RX task started");

    let mut buf = [0u8; PACKET_LEN];

    loop {
        match rx.read_exact(&mut buf).await {
            Ok(()) => match Packet::decode(&buf) {
                Ok(packet) => {
                    trace!("RX packet, code {}", packet.command.code());
                    // Queue for the gate task, dropping if full
                    if RADIO_RX_CHANNEL.try_send(packet).is_err() {
                        warn!("RX channel full, dropping packet");
                    }
                }
                Err(e) => {
                    warn!("Packet decode error: {:?}", e);
                }
            },
            Err(_) => {
                warn!("UART read error");
            }
        }
    }
}
