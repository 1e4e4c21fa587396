//! Terminal screens: banner, per-attempt status, final report.
//!
//! Everything here is cosmetic except the displayed values themselves
//! (remaining guesses, previous guess, digit histories, verdict). Screens
//! write against plain [`core::fmt::Write`], so tests render them into a
//! `String` and assert on content without any hardware.
//!
//! The terminal is redrawn from scratch each time via cursor-home +
//! clear-screen, matching a dumb 115200-baud serial console.

use core::fmt::{self, Write};

use crate::game::state::GameState;

const BORDER: &str = "**************************************************\r\n";

/// Cursor to top-left, then wipe the terminal.
fn clear(w: &mut impl Write) -> fmt::Result {
    w.write_str("\x1B[H")?;
    w.write_str("\x1B[2J")
}

fn title(w: &mut impl Write) -> fmt::Result {
    w.write_str(BORDER)?;
    w.write_str("*            RGB LED Guessing Game               *\r\n")?;
    w.write_str(BORDER)
}

/// Opening screen shown while waiting for the start keypress.
pub fn banner(w: &mut impl Write) -> fmt::Result {
    clear(w)?;
    title(w)?;
    w.write_str("Press any key to begin...\r\n")
}

/// Full status redraw shown before each guess attempt.
pub fn status(w: &mut impl Write, state: &GameState, max_guesses: u32) -> fmt::Result {
    clear(w)?;
    title(w)?;
    w.write_str("*Instructions:                                   *\r\n")?;
    w.write_str("*   Guess the color shown on the target LED by   *\r\n")?;
    w.write_str("*   entering its Red, Green and Blue magnitudes  *\r\n")?;
    write!(w, "*   (0-9 each). You have {} guesses.              *\r\n", max_guesses)?;
    w.write_str("*   The other LEDs report on your last guess:    *\r\n")?;
    w.write_str("*     guess LED:  color of the previous guess    *\r\n")?;
    w.write_str("*     blue lamp:  previous blue guess was right  *\r\n")?;
    w.write_str("*     green lamp: previous green guess was right *\r\n")?;
    w.write_str("*     red lamp:   previous red guess was right   *\r\n")?;
    w.write_str("*     win lamp:   lit if you win!                *\r\n")?;
    w.write_str(BORDER)?;
    write!(w, "*Remaining Guesses: {}\r\n", max_guesses - state.attempt)?;
    if state.attempt > 0 {
        let (r, g, b) = state.last_guess.digits();
        write!(w, "*Previous Guess:  Red={}  Green={}  Blue={}\r\n", r, g, b)?;
        write!(w, "*Red Values Guessed: {}\r\n", state.history.red_concat())?;
        write!(w, "*Green Values Guessed: {}\r\n", state.history.green_concat())?;
        write!(w, "*Blue Values Guessed: {}\r\n", state.history.blue_concat())?;
    }
    w.write_str(BORDER)
}

/// End-of-game summary. The process halts after this; "play again" is the
/// reset button.
pub fn final_report(w: &mut impl Write, state: &GameState) -> fmt::Result {
    clear(w)?;
    w.write_str(BORDER)?;
    if state.won {
        w.write_str("*                   YOU WON!                     *\r\n")?;
    } else {
        w.write_str("*                   YOU LOST                     *\r\n")?;
    }
    w.write_str(BORDER)?;
    write!(w, "*Number of Guesses: {}\r\n", state.attempt)?;
    let (r, g, b) = state.last_guess.digits();
    write!(w, "*Last Guess:     Red={}  Green={}  Blue={}\r\n", r, g, b)?;
    let (r, g, b) = state.target.digits();
    write!(w, "*Correct Color:  Red={}  Green={}  Blue={}\r\n", r, g, b)?;
    w.write_str(BORDER)?;
    w.write_str("\r\n     PRESS THE RESET BUTTON TO PLAY AGAIN     \r\n")
}
