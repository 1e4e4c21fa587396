//! Per-session game state.
//!
//! `GameState` is the single record the engine mutates: the secret target,
//! the attempt counter, the win flag, the latest guess, and the append-only
//! digit histories shown on the status screen. It lives for exactly one
//! session — "play again" is an external reset, not a state transition.

use heapless::Vec;

use crate::color::Color;

/// Capacity of each per-channel digit history.
/// Must be at least `GameConfig::max_guesses`.
pub const HISTORY_CAP: usize = 16;

/// Append-only record of every digit guessed, one sequence per channel.
#[derive(Debug, Default)]
pub struct ChannelHistory {
    red: Vec<u8, HISTORY_CAP>,
    green: Vec<u8, HISTORY_CAP>,
    blue: Vec<u8, HISTORY_CAP>,
}

impl ChannelHistory {
    /// Append one completed guess. Digits are never removed afterwards.
    pub fn record(&mut self, guess: Color) {
        let (r, g, b) = guess.digits();
        self.red.push(r).ok();
        self.green.push(g).ok();
        self.blue.push(b).ok();
    }

    /// Number of completed guesses recorded so far.
    pub fn len(&self) -> usize {
        self.red.len()
    }

    pub fn is_empty(&self) -> bool {
        self.red.is_empty()
    }

    /// Decimal concatenation of all red digits, most recent least
    /// significant (`3` then `7` reads back as `37`).
    pub fn red_concat(&self) -> u32 {
        Self::concat(&self.red)
    }

    pub fn green_concat(&self) -> u32 {
        Self::concat(&self.green)
    }

    pub fn blue_concat(&self) -> u32 {
        Self::concat(&self.blue)
    }

    fn concat(digits: &[u8]) -> u32 {
        digits.iter().fold(0, |acc, &d| acc * 10 + u32::from(d))
    }
}

/// The whole state of one game session.
#[derive(Debug, Default)]
pub struct GameState {
    /// Secret color, immutable once generated.
    pub target: Color,
    /// Most recent completed guess.
    pub last_guess: Color,
    /// Completed attempts, 0-based, bounded by `max_guesses`.
    pub attempt: u32,
    /// Set when a guess matches on all three channels; never reverts.
    pub won: bool,
    /// Cumulative digit record for the status screen.
    pub history: ChannelHistory,
}
