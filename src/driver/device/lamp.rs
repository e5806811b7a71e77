use crate::common::error::KeikoResult;
use crate::driver::flags::{build_lamp_flags, parse_lamp_flags};
use crate::driver::prelude::LAMP_UNIT;
use crate::driver::raw_client::RawClient;
use crate::entity::bo::state_bo::{Color, LampMode, LampStates, Timing};
use crate::info;

const LOG_TAG: &str = "lamp";

/// the three lamps of the tower
pub struct LampGroup<'a> {
    raw: &'a RawClient,
}

impl<'a> LampGroup<'a> {
    pub(crate) fn new(raw: &'a RawClient) -> Self {
        LampGroup { raw }
    }

    pub fn status(&self) -> KeikoResult<LampStates> {
        let flags = self.raw.acop(None, LAMP_UNIT, Timing::default())?;
        Ok(parse_lamp_flags(&flags)?)
    }

    /// turn all lamps off in one command
    pub fn off(&self, wait: u32) -> KeikoResult<()> {
        let states: Vec<(Color, LampMode)> = Color::ALL.iter().map(|color| (*color, LampMode::Off)).collect();
        let flags = build_lamp_flags(&states);
        self.raw.acop(Some(&flags), LAMP_UNIT, Timing::wait(wait))?;
        info!(LOG_TAG, "all lamps off, wait: {}", wait);
        Ok(())
    }

    pub fn lamp(&self, color: Color) -> Lamp<'a> {
        Lamp { raw: self.raw, color }
    }

    pub fn red(&self) -> Lamp<'a> {
        self.lamp(Color::Red)
    }

    pub fn yellow(&self) -> Lamp<'a> {
        self.lamp(Color::Yellow)
    }

    pub fn green(&self) -> Lamp<'a> {
        self.lamp(Color::Green)
    }
}

/// a single lamp, writes only touch its own position
pub struct Lamp<'a> {
    raw: &'a RawClient,
    color: Color,
}

impl<'a> Lamp<'a> {
    pub fn color(&self) -> Color {
        self.color
    }

    pub fn status(&self) -> KeikoResult<LampMode> {
        Ok(LampGroup::new(self.raw).status()?.get(self.color))
    }

    pub fn set(&self, mode: LampMode, timing: Timing) -> KeikoResult<()> {
        let flags = build_lamp_flags(&[(self.color, mode)]);
        self.raw.acop(Some(&flags), LAMP_UNIT, timing)?;
        info!(LOG_TAG, "lamp {} set to {:?}, timing: {:?}", self.color, mode, timing);
        Ok(())
    }

    pub fn on(&self, timing: Timing) -> KeikoResult<()> {
        self.set(LampMode::On, timing)
    }

    pub fn blink(&self, timing: Timing) -> KeikoResult<()> {
        self.set(LampMode::Blink, timing)
    }

    pub fn quickblink(&self, timing: Timing) -> KeikoResult<()> {
        self.set(LampMode::Quickblink, timing)
    }

    pub fn off(&self, wait: u32) -> KeikoResult<()> {
        self.set(LampMode::Off, Timing::wait(wait))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::KeikoError;
    use crate::driver::raw_client::tests::RecordingTransport;

    #[test]
    fn test_get_lamps() {
        let transport = RecordingTransport::responding("10100000");
        let raw = transport.client();
        let states = LampGroup::new(&raw).status().unwrap();
        assert_eq!(states, LampStates { red: LampMode::On, yellow: LampMode::Off, green: LampMode::On });
        assert_eq!(transport.last_command().unwrap(), "ACOP -u 1");
    }

    #[test]
    fn test_get_lamp_with_mode() {
        let transport = RecordingTransport::responding("02300000");
        let raw = transport.client();
        let lamps = LampGroup::new(&raw);
        assert_eq!(lamps.red().status().unwrap(), LampMode::Off);
        assert_eq!(lamps.yellow().status().unwrap(), LampMode::Blink);
        assert_eq!(lamps.green().status().unwrap(), LampMode::Quickblink);
        assert_eq!(transport.commands(), vec!["ACOP -u 1"; 3]);
    }

    #[test]
    fn test_turn_on_lamp() {
        let transport = RecordingTransport::responding("OK");
        let raw = transport.client();
        LampGroup::new(&raw).red().on(Timing::default()).unwrap();
        assert_eq!(transport.last_command().unwrap(), "ACOP -u 1 1XXXXXXX -w 0 -t 0");
    }

    #[test]
    fn test_turn_on_lamp_with_mode_and_timing() {
        let transport = RecordingTransport::responding("OK");
        let raw = transport.client();
        let lamps = LampGroup::new(&raw);
        lamps.yellow().blink(Timing::default()).unwrap();
        lamps.green().on(Timing::new(2, 3)).unwrap();
        lamps.red().quickblink(Timing::new(0, 10)).unwrap();
        assert_eq!(
            transport.commands(),
            vec![
                "ACOP -u 1 X2XXXXXX -w 0 -t 0",
                "ACOP -u 1 XX1XXXXX -w 2 -t 3",
                "ACOP -u 1 3XXXXXXX -w 0 -t 10",
            ]
        );
    }

    #[test]
    fn test_turn_off() {
        let transport = RecordingTransport::responding("OK");
        let raw = transport.client();
        let lamps = LampGroup::new(&raw);
        lamps.yellow().off(2).unwrap();
        lamps.off(0).unwrap();
        assert_eq!(transport.commands(), vec!["ACOP -u 1 X0XXXXXX -w 2 -t 0", "ACOP -u 1 000XXXXX -w 0 -t 0"]);
    }

    #[test]
    fn test_lamp_by_parsed_color() {
        let transport = RecordingTransport::responding("OK");
        let raw = transport.client();
        let color: Color = "green".parse().unwrap();
        LampGroup::new(&raw).lamp(color).set(LampMode::Blink, Timing::default()).unwrap();
        assert_eq!(transport.last_command().unwrap(), "ACOP -u 1 XX2XXXXX -w 0 -t 0");
    }

    #[test]
    fn test_malformed_status() {
        let transport = RecordingTransport::responding("1010");
        let raw = transport.client();
        let err = LampGroup::new(&raw).status().unwrap_err();
        assert!(matches!(err, KeikoError::Encoding(_)));
    }
}
