//! Per-attempt correctness feedback.
//!
//! One guess is summarized as a 4-bit code written verbatim to the
//! discrete LED bank: one lamp per correctly guessed channel plus a win
//! lamp that lights only when all three are correct. The code is
//! recomputed fresh on every attempt and never persisted.

use crate::color::Color;

/// 4-bit feedback bitmask for a single guess attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedbackCode(u8);

impl FeedbackCode {
    /// Blue channel guessed exactly.
    pub const BLUE: u8 = 0b0000_0001;
    /// Green channel guessed exactly.
    pub const GREEN: u8 = 0b0000_0010;
    /// Red channel guessed exactly.
    pub const RED: u8 = 0b0000_0100;
    /// All three channels correct — the game is won.
    pub const WIN: u8 = 0b0000_1000;

    /// Score one guess against the target.
    pub fn score(guess: Color, target: Color) -> Self {
        let mut bits = 0;
        if guess.r == target.r {
            bits |= Self::RED;
        }
        if guess.g == target.g {
            bits |= Self::GREEN;
        }
        if guess.b == target.b {
            bits |= Self::BLUE;
        }
        if bits == Self::RED | Self::GREEN | Self::BLUE {
            bits |= Self::WIN;
        }
        Self(bits)
    }

    /// Raw bitmask for the LED bank.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Whether this attempt won the game.
    pub const fn is_win(self) -> bool {
        self.0 & Self::WIN != 0
    }
}
