use crate::common::error::KeikoResult;
use crate::driver::flags::{build_do_flags, parse_do_flags};
use crate::driver::prelude::DO_UNIT;
use crate::driver::raw_client::RawClient;
use crate::entity::bo::state_bo::{DigitalStates, SwitchState, Terminal, Timing};
use crate::info;

const LOG_TAG: &str = "digital_output";

/// digital output terminals, unit 2 of `ACOP`
pub struct DigitalOutputGroup<'a> {
    raw: &'a RawClient,
}

impl<'a> DigitalOutputGroup<'a> {
    pub(crate) fn new(raw: &'a RawClient) -> Self {
        DigitalOutputGroup { raw }
    }

    pub fn status(&self) -> KeikoResult<DigitalStates> {
        let flags = self.raw.acop(None, DO_UNIT, Timing::default())?;
        Ok(parse_do_flags(&flags)?)
    }

    /// view of one terminal, fails for numbers outside 1..=4 without touching the network
    pub fn terminal(&self, number: u8) -> KeikoResult<DigitalOutput<'a>> {
        Ok(self.get(Terminal::new(number)?))
    }

    pub fn get(&self, terminal: Terminal) -> DigitalOutput<'a> {
        DigitalOutput { raw: self.raw, terminal }
    }
}

pub struct DigitalOutput<'a> {
    raw: &'a RawClient,
    terminal: Terminal,
}

impl<'a> DigitalOutput<'a> {
    pub fn terminal(&self) -> Terminal {
        self.terminal
    }

    pub fn status(&self) -> KeikoResult<SwitchState> {
        Ok(DigitalOutputGroup::new(self.raw).status()?.get(self.terminal))
    }

    pub fn set(&self, state: SwitchState, timing: Timing) -> KeikoResult<()> {
        let flags = build_do_flags(&[(self.terminal, state)]);
        self.raw.acop(Some(&flags), DO_UNIT, timing)?;
        info!(LOG_TAG, "output {} set to {:?}, timing: {:?}", self.terminal, state, timing);
        Ok(())
    }

    pub fn on(&self, timing: Timing) -> KeikoResult<()> {
        self.set(SwitchState::On, timing)
    }

    pub fn off(&self, wait: u32) -> KeikoResult<()> {
        self.set(SwitchState::Off, Timing::wait(wait))
    }
}
