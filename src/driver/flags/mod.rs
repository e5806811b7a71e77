//! flag string codec
//! every subsystem state travels as a fixed width ascii string, one character per position.
//! strings sent to the device may carry the wildcard `X` for "leave unchanged",
//! strings received from the device are always fully numeric.

mod buzzer;
mod digital;
mod lamp;
mod voice;

pub use buzzer::{build_buzzer_flags, parse_buzzer_flags};
pub use digital::{build_do_flags, parse_di_flags, parse_do_flags};
pub use lamp::{build_lamp_flags, parse_lamp_flags};
pub use voice::{build_voice_flags, parse_voice_flags};

use super::prelude::WILDCARD;
use crate::common::error::EncodingError;

/// all-wildcard template of the given width
pub(crate) fn wildcard_template<const N: usize>() -> [char; N] {
    [WILDCARD; N]
}

/// reject device responses of the wrong width
pub(crate) fn check_len(flags: &str, expected: usize) -> Result<(), EncodingError> {
    let actual = flags.len();
    if actual != expected {
        return Err(EncodingError::Length { expected, actual });
    }
    Ok(())
}

/// read the digit at `index`
pub(crate) fn digit_at(flags: &str, index: usize) -> Result<u8, EncodingError> {
    let byte = flags.as_bytes()[index];
    if !byte.is_ascii() {
        return Err(EncodingError::NotAscii { index, byte });
    }
    let found = char::from(byte);
    found
        .to_digit(10)
        .map(|d| d as u8)
        .ok_or(EncodingError::NotDigit { index, found })
}

/// read a decimal field spanning `start..end`
pub(crate) fn number_at(flags: &str, start: usize, end: usize) -> Result<u32, EncodingError> {
    let mut number = 0u32;
    for index in start..end {
        number = number * 10 + digit_at(flags, index)? as u32;
    }
    Ok(number)
}

/// value digit of a state, used by building
pub(crate) fn digit_char(value: u8) -> char {
    char::from(b'0' + value)
}
