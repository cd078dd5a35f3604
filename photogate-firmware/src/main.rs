//! Photogate - Laser timing gate firmware
//!
//! Main firmware binary for RP2040-based gates. A laser-interruption sensor
//! arms and stops a stopwatch, elapsed time is rendered on a 336-LED
//! 7-segment array, and results travel to the paired gate over a
//! transparent-serial radio modem on UART0.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::peripherals::{PIO0, UART0};
use embassy_rp::pio::Pio;
use embassy_rp::pio_programs::ws2812::{PioWs2812, PioWs2812Program};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use photogate_core::config::GateConfig;

mod channels;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    PIO0_IRQ_0 => embassy_rp::pio::InterruptHandler<PIO0>;
});

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 64]> = StaticCell::new();

// PIO program for the WS2812 strip (referenced by the driver for 'static)
static WS2812_PROGRAM: StaticCell<PioWs2812Program<'static, PIO0>> = StaticCell::new();

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Photogate firmware starting...");

    // Initialize RP2040 peripherals
    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    // Radio modem on UART0 - transparent serial, 13-byte datagrams
    let uart_config = {
        let mut cfg = UartConfig::default();
        cfg.baudrate = 115_200;
        cfg
    };
    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 64]);

    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, uart_config);
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();

    info!("UART initialized for peer link");

    // Laser sensor on GPIO4, pulled up; logic-high = beam broken
    let beam = Input::new(p.PIN_4, Pull::Up);

    // WS2812 strip on GPIO21 via PIO0
    let Pio {
        mut common, sm0, ..
    } = Pio::new(p.PIO0, Irqs);
    let program = WS2812_PROGRAM.init(PioWs2812Program::new(&mut common));
    let ws2812 = PioWs2812::new(&mut common, sm0, p.DMA_CH0, p.PIN_21, program);

    info!("LED strip initialized");

    let config = GateConfig::default();
    info!(
        "Gate config: disarm interval {} ms, auto re-arm {}",
        config.disarm_interval_ms, config.auto_rearm
    );

    // Spawn tasks
    spawner.spawn(tasks::tick_task()).unwrap();
    spawner.spawn(tasks::gate_task(beam, config)).unwrap();
    spawner.spawn(tasks::radio_rx_task(rx)).unwrap();
    spawner.spawn(tasks::radio_tx_task(tx)).unwrap();
    spawner.spawn(tasks::led_task(ws2812)).unwrap();

    // Push the cleared frame so the strip starts dark
    channels::FRAME_UPDATE.signal(());

    info!("All tasks spawned");
}
