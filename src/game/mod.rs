//! Game core — pure domain logic, zero I/O.
//!
//! This module contains the business rules for the guessing game: phase
//! sequencing, target derivation, guess scoring, and per-session
//! bookkeeping. All interaction with hardware happens through **port
//! traits** defined in [`ports`], keeping this layer fully testable
//! without real peripherals.

pub mod engine;
pub mod feedback;
pub mod ports;
pub mod state;
