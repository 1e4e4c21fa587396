//! RGB color renderer — maps abstract colors onto PWM duty cycles.
//!
//! Each logical LED slot consumes three consecutive PWM channels in
//! R, G, B order: slot `n` drives channels `3n`, `3n+1`, `3n+2`. The
//! renderer is stateless beyond the one-time period configuration done
//! at construction.

/// PWM peripheral seam: period/duty register programming plus output
/// enable. Implemented by the LEDC adapter on hardware and by a recording
/// double in tests.
pub trait PwmPort {
    /// Program the shared PWM window length (in peripheral clock ticks).
    fn set_period(&mut self, period: u32);

    /// Program one channel's duty register. Takes effect immediately.
    fn set_duty(&mut self, channel: usize, duty: u32);

    /// Enable PWM output across all channels.
    fn enable(&mut self);
}

/// PWM window length in peripheral clock ticks.
pub const PWM_PERIOD: u32 = 8192;

/// Maximum duty the renderer will ever program. The LEDs are uncomfortably
/// bright at full duty, so brightness is capped at `MAX_DUTY / PWM_PERIOD`
/// of the window. Fixed policy, not user-configurable.
pub const MAX_DUTY: u32 = 256;

/// Converts an 8-bit channel value into a duty in `0..=MAX_DUTY`.
const COLOR_MULT: u32 = MAX_DUTY / 256;

/// PWM channels consumed per LED slot (R, G, B).
pub const CHANNELS_PER_SLOT: usize = 3;

/// Renderer for a fixed bank of RGB LED slots.
pub struct RgbRenderer<P: PwmPort> {
    pwm: P,
    slots: usize,
}

impl<P: PwmPort> RgbRenderer<P> {
    /// Configure the PWM period, zero every channel of every slot, and
    /// enable output.
    ///
    /// Construction *is* initialization, so a `set_color` call can never
    /// precede it. The caller must ensure the peripheral actually has
    /// `3 * slots` channels; that is a contract, not a runtime check.
    pub fn new(mut pwm: P, slots: usize) -> Self {
        pwm.set_period(PWM_PERIOD);
        for channel in 0..slots * CHANNELS_PER_SLOT {
            pwm.set_duty(channel, 0);
        }
        pwm.enable();
        Self { pwm, slots }
    }

    /// Display `color` on the given slot. Immediately visible; other slots
    /// are untouched.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is outside the capacity given at construction —
    /// that is a programming error, not a recoverable condition.
    pub fn set_color(&mut self, slot: usize, color: crate::color::Color) {
        assert!(slot < self.slots, "LED slot {slot} out of range (have {})", self.slots);
        let base = slot * CHANNELS_PER_SLOT;
        self.pwm.set_duty(base, duty_for(color.r));
        self.pwm.set_duty(base + 1, duty_for(color.g));
        self.pwm.set_duty(base + 2, duty_for(color.b));
    }

    /// Number of slots this renderer was configured for.
    pub fn slots(&self) -> usize {
        self.slots
    }

    /// The underlying PWM port (diagnostics and tests).
    pub fn pwm(&self) -> &P {
        &self.pwm
    }
}

/// Scale an 8-bit channel value into the capped duty domain.
fn duty_for(value: u8) -> u32 {
    u32::from(value) * COLOR_MULT
}
