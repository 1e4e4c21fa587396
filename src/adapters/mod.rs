//! Hardware adapters implementing the game's port traits.
//!
//! Each adapter has two faces:
//! - On ESP-IDF (`target_os = "espidf"`): raw `esp-idf-sys` calls against
//!   the real UART, GPIO, `esp_timer`, and LEDC peripherals.
//! - On the host: a simulation fallback (std I/O, `Instant`-based counter,
//!   log-only outputs) so the library builds and demos everywhere.
//!
//! Tests do not use these — they drive the core through recording mocks.

pub mod counter;
pub mod led_bank;
pub mod pwm;
pub mod uart;
