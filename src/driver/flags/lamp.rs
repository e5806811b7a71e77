//! lamp flags, `ACOP -u 1`

use super::{check_len, digit_at, digit_char, wildcard_template};
use crate::common::error::EncodingError;
use crate::driver::prelude::FLAG_LEN;
use crate::entity::bo::state_bo::{Color, LampMode, LampStates};

fn position(color: Color) -> usize {
    match color {
        Color::Red => 0,
        Color::Yellow => 1,
        Color::Green => 2,
    }
}

fn value(mode: LampMode) -> u8 {
    match mode {
        LampMode::Off => 0,
        LampMode::On => 1,
        LampMode::Blink => 2,
        LampMode::Quickblink => 3,
    }
}

fn mode(index: usize, value: u8) -> Result<LampMode, EncodingError> {
    match value {
        0 => Ok(LampMode::Off),
        1 => Ok(LampMode::On),
        2 => Ok(LampMode::Blink),
        3 => Ok(LampMode::Quickblink),
        _ => Err(EncodingError::UnknownValue { index, value: digit_char(value) }),
    }
}

/// build flags for the given colors, colors not listed stay `X`
pub fn build_lamp_flags(states: &[(Color, LampMode)]) -> String {
    let mut flags = wildcard_template::<FLAG_LEN>();
    for (color, mode) in states {
        flags[position(*color)] = digit_char(value(*mode));
    }
    flags.iter().collect()
}

/// parse a lamp status response, `[0123]{8}`
pub fn parse_lamp_flags(flags: &str) -> Result<LampStates, EncodingError> {
    check_len(flags, FLAG_LEN)?;
    let read = |color: Color| -> Result<LampMode, EncodingError> {
        let index = position(color);
        mode(index, digit_at(flags, index)?)
    };
    Ok(LampStates {
        red: read(Color::Red)?,
        yellow: read(Color::Yellow)?,
        green: read(Color::Green)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_single() {
        assert_eq!(build_lamp_flags(&[(Color::Red, LampMode::On)]), "1XXXXXXX");
        assert_eq!(build_lamp_flags(&[(Color::Yellow, LampMode::Blink)]), "X2XXXXXX");
        assert_eq!(build_lamp_flags(&[(Color::Green, LampMode::Quickblink)]), "XX3XXXXX");
    }

    #[test]
    fn test_build_partial_keeps_wildcard() {
        let flags = build_lamp_flags(&[(Color::Red, LampMode::On), (Color::Green, LampMode::Off)]);
        assert_eq!(flags, "1X0XXXXX");
        assert_eq!(build_lamp_flags(&[]), "XXXXXXXX");
    }

    #[test]
    fn test_parse() {
        let states = parse_lamp_flags("02300000").unwrap();
        assert_eq!(states.red, LampMode::Off);
        assert_eq!(states.yellow, LampMode::Blink);
        assert_eq!(states.green, LampMode::Quickblink);
    }

    #[test]
    fn test_round_trip_full_state() {
        let modes = [LampMode::Off, LampMode::On, LampMode::Blink, LampMode::Quickblink];
        for red in modes {
            for green in modes {
                let states = LampStates { red, yellow: LampMode::Blink, green };
                let flags = build_lamp_flags(&states.to_pairs());
                assert!(!flags[..3].contains('X'));
                // the device answers with zeros in positions lamps do not own
                let response = flags.replace('X', "0");
                assert_eq!(parse_lamp_flags(&response).unwrap(), states);
            }
        }
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_lamp_flags("0000"), Err(EncodingError::Length { expected: 8, actual: 4 }));
        assert_eq!(
            parse_lamp_flags("0X000000"),
            Err(EncodingError::NotDigit { index: 1, found: 'X' })
        );
        assert_eq!(
            parse_lamp_flags("00400000"),
            Err(EncodingError::UnknownValue { index: 2, value: '4' })
        );
    }

    #[test]
    fn test_parse_non_ascii() {
        // 'é' is two bytes, the string is still eight bytes wide
        assert_eq!(
            parse_lamp_flags("é000000"),
            Err(EncodingError::NotAscii { index: 0, byte: 0xC3 })
        );
    }
}
