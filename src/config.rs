//! Game configuration parameters.
//!
//! All tunable parameters for a game session. Fixed at compile time —
//! there is no runtime provisioning or persistence for this firmware.

/// Core game configuration.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// Number of guesses the player gets per session.
    pub max_guesses: u32,
    /// Number of RGB LED slots driven by the renderer (3 PWM channels each).
    pub led_slots: usize,
    /// LED slot that shows the secret target color.
    pub target_slot: usize,
    /// LED slot that mirrors the most recent guess.
    pub guess_slot: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: 5,
            led_slots: 2,
            target_slot: 0,
            guess_slot: 1,
        }
    }
}
