//! Game engine — phase sequencing and the guess/feedback loop.
//!
//! ```text
//!  AwaitingStart ──[any byte]──▶ GeneratingTarget ──▶ Guessing(attempt 0..max)
//!                                                          │
//!                                     [win or guesses exhausted]
//!                                                          ▼
//!                                                      Finished
//! ```
//!
//! Everything is one sequential blocking control flow: UART reads suspend
//! the engine until the player types, and the only terminal condition is
//! the intentional halt after the final report. All I/O goes through port
//! traits, so the whole loop runs against scripted doubles in tests.

use core::fmt;

use log::{debug, info};

use crate::color::{Color, digit_from_ascii};
use crate::config::GameConfig;
use crate::game::feedback::FeedbackCode;
use crate::game::ports::{CounterPort, LedBankPort, SerialPort};
use crate::game::state::GameState;
use crate::render::{PwmPort, RgbRenderer};
use crate::screen;

/// Engine phase. Transitions are one-way; there is no replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Blocked on the start keypress (its timing seeds the target).
    AwaitingStart,
    /// Sampling the counter and deriving the secret color.
    GeneratingTarget,
    /// Collecting and scoring guesses.
    Guessing,
    /// Session over; no further input is accepted.
    Finished,
}

/// The game engine: owns the session state and drives it through the ports.
pub struct GameEngine {
    config: GameConfig,
    state: GameState,
    phase: Phase,
}

impl GameEngine {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            state: GameState::default(),
            phase: Phase::AwaitingStart,
        }
    }

    /// Play one full session: banner → target → guess loop → final report.
    ///
    /// Returns once the report has been written; the caller decides how to
    /// halt (on hardware, `main` parks forever).
    pub fn run(
        &mut self,
        serial: &mut impl SerialPort,
        counter: &mut impl CounterPort,
        leds: &mut impl LedBankPort,
        rgb: &mut RgbRenderer<impl PwmPort>,
    ) -> fmt::Result {
        leds.write_mask(0);
        self.await_start(serial)?;
        self.generate_target(counter, rgb);
        while self.phase == Phase::Guessing {
            screen::status(serial, &self.state, self.config.max_guesses)?;
            self.play_attempt(serial, leds, rgb)?;
        }
        screen::final_report(serial, &self.state)
    }

    /// Show the banner and block until any byte arrives. The byte's value
    /// is discarded — only its unpredictable timing matters.
    pub fn await_start(&mut self, serial: &mut impl SerialPort) -> fmt::Result {
        debug_assert_eq!(self.phase, Phase::AwaitingStart);
        screen::banner(serial)?;
        serial.drain_rx();
        let _ = serial.read_byte();
        info!("game: start keypress received");
        self.phase = Phase::GeneratingTarget;
        Ok(())
    }

    /// Sample the free-running counter once, derive the target from its
    /// low decimal digits, and light it on the target slot.
    pub fn generate_target(
        &mut self,
        counter: &mut impl CounterPort,
        rgb: &mut RgbRenderer<impl PwmPort>,
    ) {
        debug_assert_eq!(self.phase, Phase::GeneratingTarget);
        let sample = counter.read_counter();
        self.state.target = Color::from_counter(sample);
        rgb.set_color(self.config.target_slot, self.state.target);
        // debug level only: an info console would spoil the answer.
        debug!("game: counter sample {} -> target {:?}", sample, self.state.target.digits());
        self.phase = Phase::Guessing;
    }

    /// Collect one full guess (three digits), score it, drive the LEDs,
    /// and update the session bookkeeping.
    pub fn play_attempt(
        &mut self,
        serial: &mut impl SerialPort,
        leds: &mut impl LedBankPort,
        rgb: &mut RgbRenderer<impl PwmPort>,
    ) -> Result<FeedbackCode, fmt::Error> {
        debug_assert_eq!(self.phase, Phase::Guessing);

        let r = read_digit(serial, "Red")?;
        let g = read_digit(serial, "Green")?;
        let b = read_digit(serial, "Blue")?;
        let guess = Color::from_digits(r, g, b);

        rgb.set_color(self.config.guess_slot, guess);
        let code = FeedbackCode::score(guess, self.state.target);
        leds.write_mask(code.bits());

        self.state.last_guess = guess;
        self.state.history.record(guess);
        self.state.attempt += 1;
        if code.is_win() {
            self.state.won = true;
        }
        info!(
            "game: attempt {}/{} scored 0b{:04b}",
            self.state.attempt,
            self.config.max_guesses,
            code.bits()
        );

        if self.state.won || self.state.attempt >= self.config.max_guesses {
            info!(
                "game: finished after {} attempts ({})",
                self.state.attempt,
                if self.state.won { "won" } else { "lost" }
            );
            self.phase = Phase::Finished;
        }
        Ok(code)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn finished(&self) -> bool {
        self.phase == Phase::Finished
    }

    /// Read-only view of the session state (used by screens and tests).
    pub fn state(&self) -> &GameState {
        &self.state
    }
}

/// Prompt for one channel digit and block until a valid one arrives.
///
/// Bytes outside `'0'..='9'` are silently discarded and re-read — the loop
/// never gives up and never aborts the game. The accepted digit is echoed
/// back with CRLF.
fn read_digit(serial: &mut impl SerialPort, channel: &str) -> Result<u8, fmt::Error> {
    write!(serial, "Guess {} Magnitude (0-9):", channel)?;
    serial.drain_rx();
    loop {
        if let Some(digit) = digit_from_ascii(serial.read_byte()) {
            write!(serial, "{}\r\n", digit)?;
            return Ok(digit);
        }
    }
}
