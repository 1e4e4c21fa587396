//! ColorGuess firmware — main entry point.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                  Adapters (outer ring)                   │
//! │                                                          │
//! │  ConsoleUart     LedBank      FreeRunningCounter  LedcPwm│
//! │  (SerialPort)    (LedBankPort)  (CounterPort)   (PwmPort)│
//! │                                                          │
//! │  ────────────── Port Trait Boundary ──────────────────   │
//! │                                                          │
//! │  ┌────────────────────────────────────────────────────┐  │
//! │  │          GameEngine + RgbRenderer (pure logic)     │  │
//! │  └────────────────────────────────────────────────────┘  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! One session per boot: the engine runs to its final report and the
//! firmware parks forever — the reset button is the "play again" path.

#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use colorguess::adapters::counter::FreeRunningCounter;
use colorguess::adapters::led_bank::LedBank;
use colorguess::adapters::pwm::LedcPwm;
use colorguess::adapters::uart::ConsoleUart;
use colorguess::config::GameConfig;
use colorguess::game::engine::GameEngine;
use colorguess::render::RgbRenderer;

fn main() -> Result<()> {
    // ── ESP-IDF bootstrap ─────────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("ColorGuess v{}", env!("CARGO_PKG_VERSION"));

    // ── Peripheral adapters ───────────────────────────────────
    let config = GameConfig::default();
    let mut serial = ConsoleUart::new()?;
    let mut leds = LedBank::new()?;
    let mut counter = FreeRunningCounter::new();
    let mut rgb = RgbRenderer::new(LedcPwm::new(), config.led_slots);

    // ── One game session ──────────────────────────────────────
    let mut engine = GameEngine::new(config);
    engine.run(&mut serial, &mut counter, &mut leds, &mut rgb)?;

    info!("game over — press reset to play again");

    // Intentional halt: no further input is accepted this boot.
    loop {
        esp_idf_hal::delay::FreeRtos::delay_ms(1000);
    }
}
