//! buzzer flags, shares the `ACOP -u 1` string with the lamps.
//! continuous and intermittent are two independent bits, not one tri-state digit.

use super::{check_len, digit_at, wildcard_template};
use crate::common::error::EncodingError;
use crate::driver::prelude::FLAG_LEN;
use crate::entity::bo::state_bo::BuzzerMode;

// scanned in this order when parsing
const BUZZER_POSITIONS: [(BuzzerMode, usize); 2] = [
    (BuzzerMode::Continuous, 3),
    (BuzzerMode::Intermittent, 4),
];

/// build flags for a buzzer mode.
/// turning one mode on leaves the other mode's bit as `X`, so the device keeps it as is.
pub fn build_buzzer_flags(mode: BuzzerMode) -> String {
    let mut flags = wildcard_template::<FLAG_LEN>();
    for (bit_mode, index) in BUZZER_POSITIONS {
        if mode == BuzzerMode::Off {
            flags[index] = '0';
        } else if mode == bit_mode {
            flags[index] = '1';
        }
    }
    flags.iter().collect()
}

/// parse a buzzer status response, the first set bit wins
pub fn parse_buzzer_flags(flags: &str) -> Result<BuzzerMode, EncodingError> {
    check_len(flags, FLAG_LEN)?;
    for (mode, index) in BUZZER_POSITIONS {
        if digit_at(flags, index)? == 1 {
            return Ok(mode);
        }
    }
    Ok(BuzzerMode::Off)
}
