//! Color value type and digit conversions.
//!
//! Every channel the game produces or accepts is a decimal digit 0–9
//! scaled by [`CHANNEL_STEP`], so legal channel values are exactly
//! {0, 25, 50, …, 225}. Colors are plain values compared by per-channel
//! equality — there is no identity or lifecycle attached to them.

/// One guess digit maps to this many 8-bit brightness steps.
pub const CHANNEL_STEP: u8 = 25;

/// Largest legal channel value (`9 * CHANNEL_STEP`).
pub const CHANNEL_MAX: u8 = 9 * CHANNEL_STEP;

/// A 24-bit RGB color restricted to the game's digit-scaled domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// All channels off.
    pub const OFF: Self = Self { r: 0, g: 0, b: 0 };

    /// Build a color from three guess digits (each 0–9).
    pub fn from_digits(r: u8, g: u8, b: u8) -> Self {
        debug_assert!(r <= 9 && g <= 9 && b <= 9, "digit out of range");
        Self {
            r: r * CHANNEL_STEP,
            g: g * CHANNEL_STEP,
            b: b * CHANNEL_STEP,
        }
    }

    /// Derive a target color from a free-running counter sample.
    ///
    /// The three lowest decimal digits of the sample pick the channels, so
    /// there are 1000 possible targets. The sample timing (how long the
    /// player took to press the start key) is the game's only entropy.
    pub fn from_counter(t: u32) -> Self {
        let r = ((t % 1000) / 100) as u8;
        let g = ((t % 100) / 10) as u8;
        let b = (t % 10) as u8;
        Self::from_digits(r, g, b)
    }

    /// The (red, green, blue) digits this color was built from.
    pub fn digits(self) -> (u8, u8, u8) {
        (
            self.r / CHANNEL_STEP,
            self.g / CHANNEL_STEP,
            self.b / CHANNEL_STEP,
        )
    }
}

/// Parse one ASCII byte as a guess digit.
///
/// Returns `None` for anything outside `'0'..='9'`; callers decide whether
/// to retry (the guess loop) or ignore (the start trigger).
pub fn digit_from_ascii(byte: u8) -> Option<u8> {
    byte.is_ascii_digit().then(|| byte - b'0')
}
