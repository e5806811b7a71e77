//! digital output (`ACOP -u 2`) and digital input (`ROPS`) flags

use super::{check_len, digit_at, digit_char, wildcard_template};
use crate::common::error::EncodingError;
use crate::driver::prelude::{DI_FLAG_LEN, FLAG_LEN};
use crate::entity::bo::state_bo::{DigitalStates, SwitchState, Terminal, TERMINAL_NUM};

fn position(terminal: Terminal) -> usize {
    terminal.number() as usize - 1
}

fn value(state: SwitchState) -> u8 {
    match state {
        SwitchState::Off => 0,
        SwitchState::On => 1,
    }
}

fn state(index: usize, value: u8) -> Result<SwitchState, EncodingError> {
    match value {
        0 => Ok(SwitchState::Off),
        1 => Ok(SwitchState::On),
        _ => Err(EncodingError::UnknownValue { index, value: digit_char(value) }),
    }
}

fn parse_terminals(flags: &str, len: usize) -> Result<DigitalStates, EncodingError> {
    check_len(flags, len)?;
    let mut states = [SwitchState::Off; TERMINAL_NUM];
    for terminal in Terminal::all() {
        let index = position(terminal);
        states[index] = state(index, digit_at(flags, index)?)?;
    }
    Ok(DigitalStates::new(states))
}

/// build flags for the given terminals, terminals not listed stay `X`
pub fn build_do_flags(states: &[(Terminal, SwitchState)]) -> String {
    let mut flags = wildcard_template::<FLAG_LEN>();
    for (terminal, state) in states {
        flags[position(*terminal)] = digit_char(value(*state));
    }
    flags.iter().collect()
}

/// parse a digital output status response, `[01]{8}`
pub fn parse_do_flags(flags: &str) -> Result<DigitalStates, EncodingError> {
    parse_terminals(flags, FLAG_LEN)
}

/// parse a digital input status response, `[01]{4}`
pub fn parse_di_flags(flags: &str) -> Result<DigitalStates, EncodingError> {
    parse_terminals(flags, DI_FLAG_LEN)
}
