//! Mock hardware adapters for integration tests.
//!
//! Each mock records every port call so tests can assert on the full
//! command history without touching real UART/GPIO/PWM registers.

use std::collections::VecDeque;
use std::fmt;

use colorguess::game::ports::{CounterPort, LedBankPort, SerialPort};
use colorguess::render::PwmPort;

// ── Serial terminal double ────────────────────────────────────

/// Scripted input bytes plus captured output text.
pub struct MockSerial {
    input: VecDeque<u8>,
    pub output: String,
}

#[allow(dead_code)]
impl MockSerial {
    pub fn new(script: &[u8]) -> Self {
        Self {
            input: script.iter().copied().collect(),
            output: String::new(),
        }
    }

    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }
}

impl fmt::Write for MockSerial {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.output.push_str(s);
        Ok(())
    }
}

impl SerialPort for MockSerial {
    fn read_byte(&mut self) -> u8 {
        // A real UART would block forever here; in tests that is a bug in
        // the script, so fail loudly instead of hanging.
        self.input.pop_front().expect("test input script exhausted")
    }

    fn rx_empty(&self) -> bool {
        // Scripted bytes model future keystrokes, not stale buffer content.
        true
    }
}

// ── LED bank double ───────────────────────────────────────────

#[derive(Default)]
pub struct MockLedBank {
    pub masks: Vec<u8>,
}

#[allow(dead_code)]
impl MockLedBank {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_mask(&self) -> Option<u8> {
        self.masks.last().copied()
    }
}

impl LedBankPort for MockLedBank {
    fn write_mask(&mut self, mask: u8) {
        self.masks.push(mask);
    }
}

// ── Counter double ────────────────────────────────────────────

/// Free-running counter pinned to one value, so the target is chosen.
pub struct FixedCounter(pub u32);

impl CounterPort for FixedCounter {
    fn read_counter(&mut self) -> u32 {
        self.0
    }
}

// ── PWM double ────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PwmCall {
    SetPeriod(u32),
    SetDuty { channel: usize, duty: u32 },
    Enable,
}

#[derive(Default)]
pub struct MockPwm {
    pub calls: Vec<PwmCall>,
}

#[allow(dead_code)]
impl MockPwm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest duty written to a channel, if any.
    pub fn duty(&self, channel: usize) -> Option<u32> {
        self.calls.iter().rev().find_map(|c| match c {
            PwmCall::SetDuty { channel: ch, duty } if *ch == channel => Some(*duty),
            _ => None,
        })
    }
}

impl PwmPort for MockPwm {
    fn set_period(&mut self, period: u32) {
        self.calls.push(PwmCall::SetPeriod(period));
    }

    fn set_duty(&mut self, channel: usize, duty: u32) {
        self.calls.push(PwmCall::SetDuty { channel, duty });
    }

    fn enable(&mut self) {
        self.calls.push(PwmCall::Enable);
    }
}
