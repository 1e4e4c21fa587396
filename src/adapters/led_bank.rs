//! Discrete LED bank adapter — four GPIO-driven lamps.
//!
//! Mask bit `i` drives `pins::LED_BANK_GPIOS[i]`. Every write is a full
//! overwrite of the bank; there is no partial-bit update.

use crate::error::Result;
use crate::game::ports::LedBankPort;
use crate::pins;

#[cfg(target_os = "espidf")]
use crate::error::HwInitError;
#[cfg(target_os = "espidf")]
use esp_idf_sys::*;

pub struct LedBank {
    current: u8,
}

impl LedBank {
    /// Configure every bank pin as an output, all lamps dark.
    #[cfg(target_os = "espidf")]
    pub fn new() -> Result<Self> {
        for gpio in pins::LED_BANK_GPIOS {
            // SAFETY: one-shot pin config from the single main task.
            let rc = unsafe { gpio_set_direction(gpio, gpio_mode_t_GPIO_MODE_OUTPUT) };
            if rc != ESP_OK {
                return Err(HwInitError::GpioConfigFailed(rc));
            }
            unsafe {
                gpio_set_level(gpio, 0);
            }
        }
        log::info!("led_bank: {} lamps configured", pins::LED_BANK_GPIOS.len());
        Ok(Self { current: 0 })
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn new() -> Result<Self> {
        log::info!("led_bank(sim): {} lamps tracked in-memory", pins::LED_BANK_GPIOS.len());
        Ok(Self { current: 0 })
    }

    /// Last mask written (for diagnostics).
    pub fn current_mask(&self) -> u8 {
        self.current
    }
}

impl LedBankPort for LedBank {
    #[cfg(target_os = "espidf")]
    fn write_mask(&mut self, mask: u8) {
        for (bit, gpio) in pins::LED_BANK_GPIOS.into_iter().enumerate() {
            // SAFETY: pins configured as outputs in new().
            unsafe {
                gpio_set_level(gpio, u32::from(mask >> bit) & 1);
            }
        }
        self.current = mask;
    }

    #[cfg(not(target_os = "espidf"))]
    fn write_mask(&mut self, mask: u8) {
        log::debug!("led_bank(sim): mask 0b{:04b}", mask);
        self.current = mask;
    }
}
