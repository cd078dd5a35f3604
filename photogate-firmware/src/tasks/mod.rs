//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod gate;
pub mod led;
pub mod radio_rx;
pub mod radio_tx;
pub mod tick;

pub use gate::gate_task;
pub use led::led_task;
pub use radio_rx::radio_rx_task;
pub use radio_tx::radio_tx_task;
pub use tick::tick_task;
