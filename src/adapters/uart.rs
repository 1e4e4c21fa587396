//! Console UART adapter — the player's terminal.
//!
//! On ESP-IDF this installs the UART driver on the console port and maps
//! [`SerialPort`] onto blocking driver reads/writes. On the host it talks
//! to stdin/stdout (note: most terminals are line-buffered, so digits
//! arrive after Enter — acceptable for a desk demo).

#[cfg(target_os = "espidf")]
use crate::error::HwInitError;
use crate::error::Result;
use crate::game::ports::SerialPort;
use crate::pins;

#[cfg(target_os = "espidf")]
use esp_idf_sys::*;

/// Receive FIFO handed to the UART driver (bytes, not a tunable).
#[cfg(target_os = "espidf")]
const RX_BUFFER_LEN: i32 = 256;

pub struct ConsoleUart {
    #[cfg_attr(not(target_os = "espidf"), allow(dead_code))]
    port: i32,
}

#[cfg(target_os = "espidf")]
impl ConsoleUart {
    /// Install the UART driver on the console port.
    pub fn new() -> Result<Self> {
        let port = i32::from(pins::CONSOLE_UART);
        // SAFETY: driver install happens once at boot from the single main
        // task, before any read/write call.
        let rc = unsafe {
            uart_driver_install(port, RX_BUFFER_LEN, 0, 0, core::ptr::null_mut(), 0)
        };
        if rc != ESP_OK {
            return Err(HwInitError::UartInstallFailed(rc));
        }
        log::info!("uart: driver installed on port {}", port);
        Ok(Self { port })
    }
}

#[cfg(not(target_os = "espidf"))]
impl ConsoleUart {
    pub fn new() -> Result<Self> {
        log::info!("uart(sim): using stdin/stdout");
        Ok(Self {
            port: i32::from(pins::CONSOLE_UART),
        })
    }
}

impl core::fmt::Write for ConsoleUart {
    #[cfg(target_os = "espidf")]
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        // SAFETY: driver installed in new(); uart_write_bytes copies the
        // buffer before returning.
        unsafe {
            uart_write_bytes(self.port, s.as_ptr().cast(), s.len());
        }
        Ok(())
    }

    #[cfg(not(target_os = "espidf"))]
    fn write_str(&mut self, s: &str) -> core::fmt::Result {
        use std::io::Write;
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(s.as_bytes()).map_err(|_| core::fmt::Error)?;
        stdout.flush().map_err(|_| core::fmt::Error)
    }
}

impl SerialPort for ConsoleUart {
    #[cfg(target_os = "espidf")]
    fn read_byte(&mut self) -> u8 {
        let mut byte = 0u8;
        loop {
            // SAFETY: single-reader discipline — only the game loop reads.
            let n = unsafe {
                uart_read_bytes(
                    self.port,
                    (&raw mut byte).cast(),
                    1,
                    portMAX_DELAY,
                )
            };
            if n == 1 {
                return byte;
            }
        }
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_byte(&mut self) -> u8 {
        use std::io::Read;
        let mut buf = [0u8; 1];
        loop {
            match std::io::stdin().lock().read_exact(&mut buf) {
                Ok(()) => return buf[0],
                // Closed stdin behaves like a silent player: block forever.
                Err(_) => std::thread::sleep(std::time::Duration::from_millis(50)),
            }
        }
    }

    #[cfg(target_os = "espidf")]
    fn rx_empty(&self) -> bool {
        let mut buffered: usize = 0;
        // SAFETY: driver installed in new().
        unsafe {
            uart_get_buffered_data_len(self.port, &raw mut buffered);
        }
        buffered == 0
    }

    #[cfg(not(target_os = "espidf"))]
    fn rx_empty(&self) -> bool {
        // stdin has no non-destructive peek; treat it as drained.
        true
    }

    #[cfg(target_os = "espidf")]
    fn drain_rx(&mut self) {
        // SAFETY: driver installed in new().
        unsafe {
            uart_flush_input(self.port);
        }
    }
}
