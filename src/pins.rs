//! Pin and peripheral channel assignments.
//!
//! One flat list so a board respin touches exactly one file.

// Only the espidf adapters reference these.
#![cfg_attr(not(target_os = "espidf"), allow(dead_code))]

/// UART port used for the player terminal (console UART).
pub const CONSOLE_UART: u8 = 0;

/// Discrete LED bank, least-significant mask bit first:
/// bit 0 = blue-correct, bit 1 = green-correct, bit 2 = red-correct,
/// bit 3 = win lamp.
pub const LED_BANK_GPIOS: [i32; 4] = [4, 5, 6, 7];

/// LEDC output pins for the RGB LED slots, three per slot in R, G, B order.
/// Slot 0 shows the target color, slot 1 the previous guess.
pub const RGB_PWM_GPIOS: [i32; 6] = [12, 13, 14, 15, 16, 17];
