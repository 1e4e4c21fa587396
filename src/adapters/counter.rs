//! Free-running counter adapter — the game's entropy source.
//!
//! On ESP-IDF this is `esp_timer_get_time()`, the 64-bit microsecond
//! timer that starts at boot and never stops; the game only cares about
//! its low decimal digits. On the host it is microseconds elapsed since
//! adapter construction.

use crate::game::ports::CounterPort;

pub struct FreeRunningCounter {
    #[cfg(not(target_os = "espidf"))]
    epoch: std::time::Instant,
}

impl FreeRunningCounter {
    #[cfg(target_os = "espidf")]
    pub fn new() -> Self {
        Self {}
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn new() -> Self {
        Self {
            epoch: std::time::Instant::now(),
        }
    }
}

impl Default for FreeRunningCounter {
    fn default() -> Self {
        Self::new()
    }
}

impl CounterPort for FreeRunningCounter {
    #[cfg(target_os = "espidf")]
    fn read_counter(&mut self) -> u32 {
        // SAFETY: esp_timer_get_time has no preconditions after boot.
        (unsafe { esp_idf_sys::esp_timer_get_time() }) as u32
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_counter(&mut self) -> u32 {
        self.epoch.elapsed().as_micros() as u32
    }
}
