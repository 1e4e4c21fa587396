//! LEDC PWM adapter for the RGB LED slots.
//!
//! Maps the renderer's period/duty/enable seam onto the LEDC peripheral:
//! one low-speed timer shared by six channels (two RGB slots, R-G-B
//! order per slot, `pins::RGB_PWM_GPIOS`).
//!
//! LEDC expresses the PWM window as `2^resolution` counts, so `set_period`
//! takes a power of two (the renderer's 8192 ⇒ 13-bit resolution). Duties
//! written before `enable` are staged and applied when the channels are
//! configured, matching the renderer's init sequence.

use log::debug;

use crate::pins;
use crate::render::PwmPort;

#[cfg(target_os = "espidf")]
use esp_idf_sys::*;

const NUM_CHANNELS: usize = pins::RGB_PWM_GPIOS.len();

#[cfg(target_os = "espidf")]
const PWM_FREQ_HZ: u32 = 5000;

pub struct LedcPwm {
    staged: [u32; NUM_CHANNELS],
    enabled: bool,
}

impl LedcPwm {
    pub fn new() -> Self {
        Self {
            staged: [0; NUM_CHANNELS],
            enabled: false,
        }
    }
}

impl Default for LedcPwm {
    fn default() -> Self {
        Self::new()
    }
}

impl PwmPort for LedcPwm {
    #[cfg(target_os = "espidf")]
    fn set_period(&mut self, period: u32) {
        debug_assert!(period.is_power_of_two(), "LEDC windows are 2^n counts");
        let resolution = 31 - period.leading_zeros();
        let timer_cfg = ledc_timer_config_t {
            speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
            duty_resolution: resolution,
            timer_num: ledc_timer_t_LEDC_TIMER_0,
            freq_hz: PWM_FREQ_HZ,
            clk_cfg: soc_periph_ledc_clk_src_legacy_t_LEDC_AUTO_CLK,
            ..Default::default()
        };
        // SAFETY: one-shot timer config from the single main task.
        let rc = unsafe { ledc_timer_config(&timer_cfg) };
        if rc != ESP_OK {
            log::error!("ledc: timer config failed (rc={}) — LEDs will stay dark", rc);
        }
    }

    #[cfg(not(target_os = "espidf"))]
    fn set_period(&mut self, period: u32) {
        debug!("ledc(sim): period {} counts", period);
    }

    #[cfg(target_os = "espidf")]
    fn set_duty(&mut self, channel: usize, duty: u32) {
        self.staged[channel] = duty;
        if !self.enabled {
            return;
        }
        // SAFETY: channels configured in enable(); set+update is the
        // documented glitch-free duty change sequence.
        unsafe {
            ledc_set_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel as u32, duty);
            ledc_update_duty(ledc_mode_t_LEDC_LOW_SPEED_MODE, channel as u32);
        }
    }

    #[cfg(not(target_os = "espidf"))]
    fn set_duty(&mut self, channel: usize, duty: u32) {
        self.staged[channel] = duty;
        debug!(
            "ledc(sim): channel {} duty {}{}",
            channel,
            duty,
            if self.enabled { "" } else { " (staged)" }
        );
    }

    #[cfg(target_os = "espidf")]
    fn enable(&mut self) {
        for (channel, gpio) in pins::RGB_PWM_GPIOS.into_iter().enumerate() {
            let channel_cfg = ledc_channel_config_t {
                gpio_num: gpio,
                speed_mode: ledc_mode_t_LEDC_LOW_SPEED_MODE,
                channel: channel as u32,
                intr_type: ledc_intr_type_t_LEDC_INTR_DISABLE,
                timer_sel: ledc_timer_t_LEDC_TIMER_0,
                duty: self.staged[channel],
                hpoint: 0,
                ..Default::default()
            };
            // SAFETY: one-shot channel config from the single main task.
            let rc = unsafe { ledc_channel_config(&channel_cfg) };
            if rc != ESP_OK {
                log::error!("ledc: channel {} config failed (rc={})", channel, rc);
            }
        }
        self.enabled = true;
        log::info!("ledc: {} channels enabled", NUM_CHANNELS);
    }

    #[cfg(not(target_os = "espidf"))]
    fn enable(&mut self) {
        self.enabled = true;
        debug!("ledc(sim): output enabled (duties {:?})", self.staged);
    }
}
