use crate::common::error::KeikoResult;
use crate::driver::flags::parse_di_flags;
use crate::driver::raw_client::RawClient;
use crate::entity::bo::state_bo::{DigitalStates, SwitchState, Terminal};

/// digital input terminals, read only
pub struct DigitalInputGroup<'a> {
    raw: &'a RawClient,
}

impl<'a> DigitalInputGroup<'a> {
    pub(crate) fn new(raw: &'a RawClient) -> Self {
        DigitalInputGroup { raw }
    }

    pub fn status(&self) -> KeikoResult<DigitalStates> {
        let flags = self.raw.rops()?;
        Ok(parse_di_flags(&flags)?)
    }

    pub fn terminal(&self, number: u8) -> KeikoResult<DigitalInput<'a>> {
        Ok(self.get(Terminal::new(number)?))
    }

    pub fn get(&self, terminal: Terminal) -> DigitalInput<'a> {
        DigitalInput { raw: self.raw, terminal }
    }
}

pub struct DigitalInput<'a> {
    raw: &'a RawClient,
    terminal: Terminal,
}

impl<'a> DigitalInput<'a> {
    pub fn terminal(&self) -> Terminal {
        self.terminal
    }

    pub fn status(&self) -> KeikoResult<SwitchState> {
        Ok(DigitalInputGroup::new(self.raw).status()?.get(self.terminal))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::error::KeikoError;
    use crate::driver::raw_client::tests::RecordingTransport;

    #[test]
    fn test_get_dis() {
        let transport = RecordingTransport::responding("0101");
        let raw = transport.client();
        let inputs = DigitalInputGroup::new(&raw);
        let expected = [SwitchState::Off, SwitchState::On, SwitchState::Off, SwitchState::On];
        assert_eq!(inputs.status().unwrap(), DigitalStates::new(expected));
        assert_eq!(inputs.terminal(2).unwrap().status().unwrap(), SwitchState::On);
        assert_eq!(inputs.terminal(3).unwrap().status().unwrap(), SwitchState::Off);
        assert_eq!(transport.commands(), vec!["ROPS"; 3]);
    }

    #[test]
    fn test_invalid_terminal_before_io() {
        let transport = RecordingTransport::responding("0101");
        let raw = transport.client();
        assert!(matches!(DigitalInputGroup::new(&raw).terminal(7), Err(KeikoError::Validation(_))));
        assert!(transport.frames().is_empty());
    }

    #[test]
    fn test_short_response() {
        let transport = RecordingTransport::responding("01");
        let raw = transport.client();
        assert!(matches!(DigitalInputGroup::new(&raw).status(), Err(KeikoError::Encoding(_))));
    }
}
