//! Error types for peripheral bring-up.
//!
//! The game core itself has no recoverable-error path: invalid keypresses
//! are retried forever and contract breaches (bad LED slot index) panic.
//! What remains fallible is one-shot hardware initialization, which funnels
//! into this type so `main` can handle every failure uniformly.

use core::fmt;

/// Errors during one-shot peripheral initialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HwInitError {
    /// UART driver install/config failed (esp-idf return code).
    UartInstallFailed(i32),
    /// GPIO direction/level config failed (esp-idf return code).
    GpioConfigFailed(i32),
}

impl fmt::Display for HwInitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UartInstallFailed(rc) => write!(f, "UART driver install failed (rc={})", rc),
            Self::GpioConfigFailed(rc) => write!(f, "GPIO config failed (rc={})", rc),
        }
    }
}

impl std::error::Error for HwInitError {}

/// Firmware-wide `Result` alias for init paths.
pub type Result<T> = core::result::Result<T, HwInitError>;
