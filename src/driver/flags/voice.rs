//! voice flags, `SPOP`.
//! a discriminated encoding rather than a positional table: position 0 says whether
//! anything plays, and only then do the other fields carry meaning.
//!
//! ```text
//! 0 0000000          stop
//! 1 NN 00000         play voice NN, repeat infinitely
//! 1 NN 1 RR 00       play voice NN, RR times in total
//! ```

use super::{check_len, digit_at, number_at};
use crate::common::error::EncodingError;
use crate::driver::prelude::FLAG_LEN;
use crate::entity::bo::state_bo::{VoiceState, VOICE_NUMBER_MAX, VOICE_NUMBER_MIN};

const STOP_FLAGS: &str = "00000000";
const REPEAT_MAX: u8 = 99;

fn check_number(number: u32) -> Result<u8, EncodingError> {
    if !(VOICE_NUMBER_MIN as u32..=VOICE_NUMBER_MAX as u32).contains(&number) {
        return Err(EncodingError::OutOfRange {
            field: "voice number",
            value: number,
            min: VOICE_NUMBER_MIN as u32,
            max: VOICE_NUMBER_MAX as u32,
        });
    }
    Ok(number as u8)
}

pub fn build_voice_flags(state: VoiceState) -> Result<String, EncodingError> {
    match state {
        VoiceState::Stop => Ok(STOP_FLAGS.to_string()),
        VoiceState::Playing { number, repeat } => {
            let number = check_number(number as u32)?;
            if repeat > REPEAT_MAX {
                return Err(EncodingError::OutOfRange {
                    field: "voice repeat",
                    value: repeat as u32,
                    min: 0,
                    max: REPEAT_MAX as u32,
                });
            }
            if repeat == 0 {
                Ok(format!("1{:02}00000", number))
            } else {
                Ok(format!("1{:02}1{:02}00", number, repeat))
            }
        }
    }
}

/// parse a voice status response, `[0-9]{8}`
pub fn parse_voice_flags(flags: &str) -> Result<VoiceState, EncodingError> {
    check_len(flags, FLAG_LEN)?;
    if digit_at(flags, 0)? == 0 {
        return Ok(VoiceState::Stop);
    }
    let number = check_number(number_at(flags, 1, 3)?)?;
    // two digits can not exceed u8
    let repeat = number_at(flags, 4, 6)? as u8;
    Ok(VoiceState::Playing { number, repeat })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build() {
        assert_eq!(build_voice_flags(VoiceState::Playing { number: 15, repeat: 8 }).unwrap(), "11510800");
        assert_eq!(build_voice_flags(VoiceState::Playing { number: 2, repeat: 0 }).unwrap(), "10200000");
        assert_eq!(build_voice_flags(VoiceState::Stop).unwrap(), "00000000");
    }

    #[test]
    fn test_round_trip() {
        let state = parse_voice_flags("11510800").unwrap();
        assert_eq!(state, VoiceState::Playing { number: 15, repeat: 8 });
        assert_eq!(build_voice_flags(state).unwrap(), "11510800");
        assert_eq!(parse_voice_flags("10200000").unwrap(), VoiceState::Playing { number: 2, repeat: 0 });
        assert_eq!(parse_voice_flags("00000000").unwrap(), VoiceState::Stop);
    }

    #[test]
    fn test_build_out_of_range() {
        assert!(matches!(
            build_voice_flags(VoiceState::Playing { number: 21, repeat: 1 }),
            Err(EncodingError::OutOfRange { field: "voice number", .. })
        ));
        assert!(matches!(
            build_voice_flags(VoiceState::Playing { number: 0, repeat: 1 }),
            Err(EncodingError::OutOfRange { .. })
        ));
        assert!(matches!(
            build_voice_flags(VoiceState::Playing { number: 1, repeat: 100 }),
            Err(EncodingError::OutOfRange { field: "voice repeat", .. })
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(parse_voice_flags("1151080"), Err(EncodingError::Length { .. })));
        assert_eq!(parse_voice_flags("1A510800"), Err(EncodingError::NotDigit { index: 1, found: 'A' }));
        assert!(matches!(parse_voice_flags("12510800"), Err(EncodingError::OutOfRange { value: 25, .. })));
    }
}
