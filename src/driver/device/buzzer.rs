use crate::common::error::KeikoResult;
use crate::driver::flags::{build_buzzer_flags, parse_buzzer_flags};
use crate::driver::prelude::LAMP_UNIT;
use crate::driver::raw_client::RawClient;
use crate::entity::bo::state_bo::{BuzzerMode, Timing};
use crate::info;

const LOG_TAG: &str = "buzzer";

/// the buzzer shares unit 1 with the lamps
pub struct Buzzer<'a> {
    raw: &'a RawClient,
}

impl<'a> Buzzer<'a> {
    pub(crate) fn new(raw: &'a RawClient) -> Self {
        Buzzer { raw }
    }

    pub fn status(&self) -> KeikoResult<BuzzerMode> {
        let flags = self.raw.acop(None, LAMP_UNIT, Timing::default())?;
        Ok(parse_buzzer_flags(&flags)?)
    }

    /// switching between continuous and intermittent does not clear the other mode,
    /// call `off` first for a clean switch
    pub fn set(&self, mode: BuzzerMode, timing: Timing) -> KeikoResult<()> {
        let flags = build_buzzer_flags(mode);
        self.raw.acop(Some(&flags), LAMP_UNIT, timing)?;
        info!(LOG_TAG, "buzzer set to {:?}, timing: {:?}", mode, timing);
        Ok(())
    }

    /// same as `continuous`
    pub fn on(&self, timing: Timing) -> KeikoResult<()> {
        self.continuous(timing)
    }

    pub fn continuous(&self, timing: Timing) -> KeikoResult<()> {
        self.set(BuzzerMode::Continuous, timing)
    }

    pub fn intermittent(&self, timing: Timing) -> KeikoResult<()> {
        self.set(BuzzerMode::Intermittent, timing)
    }

    pub fn off(&self, wait: u32) -> KeikoResult<()> {
        self.set(BuzzerMode::Off, Timing::wait(wait))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::raw_client::tests::RecordingTransport;

    #[test]
    fn test_get_buzzer() {
        let transport = RecordingTransport::responding("00000000");
        let raw = transport.client();
        let buzzer = Buzzer::new(&raw);
        assert_eq!(buzzer.status().unwrap(), BuzzerMode::Off);
        assert_eq!(transport.last_command().unwrap(), "ACOP -u 1");

        transport.set_response("00010000");
        assert_eq!(buzzer.status().unwrap(), BuzzerMode::Continuous);
        transport.set_response("00001000");
        assert_eq!(buzzer.status().unwrap(), BuzzerMode::Intermittent);
    }

    #[test]
    fn test_turn_on_buzzer() {
        let transport = RecordingTransport::responding("OK");
        let raw = transport.client();
        let buzzer = Buzzer::new(&raw);
        buzzer.on(Timing::default()).unwrap();
        buzzer.intermittent(Timing::default()).unwrap();
        buzzer.continuous(Timing::new(2, 3)).unwrap();
        assert_eq!(
            transport.commands(),
            vec![
                "ACOP -u 1 XXX1XXXX -w 0 -t 0",
                "ACOP -u 1 XXXX1XXX -w 0 -t 0",
                "ACOP -u 1 XXX1XXXX -w 2 -t 3",
            ]
        );
    }

    #[test]
    fn test_turn_off_buzzer() {
        let transport = RecordingTransport::responding("OK");
        let raw = transport.client();
        Buzzer::new(&raw).off(2).unwrap();
        assert_eq!(transport.last_command().unwrap(), "ACOP -u 1 XXX00XXX -w 2 -t 0");
    }
}
