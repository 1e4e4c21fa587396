//! Port traits — the boundary between the game core and the hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ GameEngine (domain)
//! ```
//!
//! Driven adapters (UART, GPIO LED bank, hardware timer) implement these
//! traits. The [`GameEngine`](super::engine::GameEngine) consumes them via
//! generics, so the domain core never touches hardware registers directly
//! and test doubles can stand in on the host.

use core::fmt;

/// Bidirectional serial terminal port.
///
/// The write side is plain [`core::fmt::Write`]; the read side is a
/// blocking byte receive with a drainable RX buffer. `read_byte` suspends
/// the whole control flow until a byte arrives; there is no timeout or
/// cancellation, so a silent player halts the game until reset.
pub trait SerialPort: fmt::Write {
    /// Block until one byte arrives and return it.
    fn read_byte(&mut self) -> u8;

    /// Whether the receive buffer currently holds no bytes.
    fn rx_empty(&self) -> bool;

    /// Discard every byte currently buffered, without blocking.
    ///
    /// Called before each prompt so stale keypresses are never misread
    /// as answers.
    fn drain_rx(&mut self) {
        while !self.rx_empty() {
            let _ = self.read_byte();
        }
    }
}

/// Discrete LED bank output.
pub trait LedBankPort {
    /// Set the visible LED bank to exactly this pattern — full overwrite,
    /// no partial-bit update semantics.
    fn write_mask(&mut self, mask: u8);
}

/// Free-running hardware counter, started at boot and never stopped.
///
/// The game samples it exactly once, as its entropy source.
pub trait CounterPort {
    /// Current counter value.
    fn read_counter(&mut self) -> u32;
}
