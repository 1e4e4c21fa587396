//! End-to-end game sessions through the port boundary.
//!
//! These drive `GameEngine::run` (or its individual steps) with scripted
//! serial input and assert on LED masks, PWM writes, and terminal output.

use crate::mock_hw::{FixedCounter, MockLedBank, MockPwm, MockSerial};

use colorguess::config::GameConfig;
use colorguess::game::engine::{GameEngine, Phase};
use colorguess::game::feedback::FeedbackCode;
use colorguess::render::RgbRenderer;

fn renderer() -> RgbRenderer<MockPwm> {
    RgbRenderer::new(MockPwm::new(), 2)
}

// ── Exact win on the first attempt ────────────────────────────

#[test]
fn win_on_first_attempt_lights_every_lamp_and_reports_victory() {
    // Counter 321 -> target digits (3,2,1) = (75,50,25).
    let mut engine = GameEngine::new(GameConfig::default());
    let mut serial = MockSerial::new(b" 321");
    let mut leds = MockLedBank::new();
    let mut rgb = renderer();

    engine
        .run(&mut serial, &mut FixedCounter(321), &mut leds, &mut rgb)
        .unwrap();

    assert!(engine.state().won);
    assert_eq!(engine.state().attempt, 1);
    assert_eq!(engine.phase(), Phase::Finished);
    // Bank cleared at start, then the all-correct code with the win bit.
    assert_eq!(leds.masks, vec![0, 0b1111]);
    assert!(serial.output.contains("YOU WON!"));
    assert!(serial.output.contains("Number of Guesses: 1"));
}

// ── Exhausting every guess ────────────────────────────────────

#[test]
fn five_wrong_guesses_exhaust_the_game() {
    // Counter 444 -> target (100,100,100); player always answers 000.
    let mut engine = GameEngine::new(GameConfig::default());
    let mut serial = MockSerial::new(b"A000000000000000");
    let mut leds = MockLedBank::new();
    let mut rgb = renderer();

    engine
        .run(&mut serial, &mut FixedCounter(444), &mut leds, &mut rgb)
        .unwrap();

    assert!(!engine.state().won);
    assert_eq!(engine.state().attempt, 5);
    assert_eq!(serial.remaining_input(), 0);
    assert!(leds.masks.iter().all(|&m| m == 0), "no channel ever matched");
    assert!(serial.output.contains("YOU LOST"));
    assert!(serial.output.contains("Number of Guesses: 5"));
    assert!(serial.output.contains("Last Guess:     Red=0  Green=0  Blue=0"));
    assert!(serial.output.contains("Correct Color:  Red=4  Green=4  Blue=4"));
}

// ── Partial match feedback ────────────────────────────────────

#[test]
fn partial_match_sets_exactly_the_matching_lamps() {
    // Counter 230 -> target (50,75,0); guess (50,0,0) matches red and blue.
    let mut engine = GameEngine::new(GameConfig::default());
    engine.await_start(&mut MockSerial::new(b"\n")).unwrap();
    let mut rgb = renderer();
    engine.generate_target(&mut FixedCounter(230), &mut rgb);

    let mut leds = MockLedBank::new();
    let code = engine
        .play_attempt(&mut MockSerial::new(b"200"), &mut leds, &mut rgb)
        .unwrap();

    assert_eq!(code.bits(), FeedbackCode::RED | FeedbackCode::BLUE);
    assert_eq!(leds.last_mask(), Some(0b101));
    assert!(!engine.state().won);
}

// ── Invalid keystrokes never abort ────────────────────────────

#[test]
fn junk_bytes_before_a_digit_are_silently_discarded() {
    // Counter 300 -> target (3,0,0). 'x' and 'y' are noise before the red
    // digit; the game still completes (and happens to win).
    let mut engine = GameEngine::new(GameConfig::default());
    let mut serial = MockSerial::new(b"?xy300");
    let mut leds = MockLedBank::new();
    let mut rgb = renderer();

    engine
        .run(&mut serial, &mut FixedCounter(300), &mut leds, &mut rgb)
        .unwrap();

    assert!(engine.state().won);
    assert_eq!(engine.state().last_guess.digits(), (3, 0, 0));
    assert_eq!(serial.remaining_input(), 0);
}

// ── Status screen between attempts ────────────────────────────

#[test]
fn status_screen_shows_remaining_count_and_history_after_first_attempt() {
    let mut engine = GameEngine::new(GameConfig::default());
    // Two attempts: 123 then 456, then the input ends — so the game must
    // be stopped before the third status redraw would read.
    let mut serial = MockSerial::new(b" 123456");
    let mut leds = MockLedBank::new();
    let mut rgb = renderer();

    engine.await_start(&mut serial).unwrap();
    engine.generate_target(&mut FixedCounter(999), &mut rgb);
    engine.play_attempt(&mut serial, &mut leds, &mut rgb).unwrap();
    engine.play_attempt(&mut serial, &mut leds, &mut rgb).unwrap();

    let mut out = String::new();
    colorguess::screen::status(&mut out, engine.state(), 5).unwrap();
    assert!(out.contains("Remaining Guesses: 3"));
    assert!(out.contains("Previous Guess:  Red=4  Green=5  Blue=6"));
    assert!(out.contains("Red Values Guessed: 14"));
    assert!(out.contains("Green Values Guessed: 25"));
    assert!(out.contains("Blue Values Guessed: 36"));
}

// ── Target and guess land on their own LED slots ─────────────

#[test]
fn target_and_guess_render_to_separate_slots() {
    let mut engine = GameEngine::new(GameConfig::default());
    let mut leds = MockLedBank::new();
    let mut rgb = renderer();

    engine.await_start(&mut MockSerial::new(b" ")).unwrap();
    engine.generate_target(&mut FixedCounter(321), &mut rgb);
    engine
        .play_attempt(&mut MockSerial::new(b"987"), &mut leds, &mut rgb)
        .unwrap();

    // Slot 0 carries the target (3,2,1) -> duties 75/50/25.
    assert_eq!(rgb.pwm().duty(0), Some(75));
    assert_eq!(rgb.pwm().duty(1), Some(50));
    assert_eq!(rgb.pwm().duty(2), Some(25));
    // Slot 1 carries the last guess (9,8,7) -> duties 225/200/175.
    assert_eq!(rgb.pwm().duty(3), Some(225));
    assert_eq!(rgb.pwm().duty(4), Some(200));
    assert_eq!(rgb.pwm().duty(5), Some(175));
}
