//! ColorGuess firmware library.
//!
//! Exposes the game core, renderer, and screens for integration testing
//! on the host. All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within the adapter modules.

#![deny(unused_must_use)]

pub mod color;
pub mod config;
pub mod game;
pub mod render;
pub mod screen;

pub mod error;

// Hardware-facing modules; real implementations are guarded by cfg
// attributes inside, with host-sim fallbacks so the library builds
// everywhere.
pub mod adapters;
mod pins;
