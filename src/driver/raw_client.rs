//! low level client of the signal tower.
//! one method per device command; each performs exactly one exchange and returns the
//! stripped response string, or the protocol error the device answered with.

use std::io;
use super::command::{Command, OutputAction, RelayAction, Toggle};
use super::prelude::{EOL, RELAY_NUM};
use super::traits::Transport;
use super::transport::TcpTransport;
use crate::common::error::{KeikoError, KeikoResult, ProtocolError};
use crate::entity::bo::state_bo::{Terminal, Timing};
use crate::{debug, warn};

const LOG_TAG: &str = "raw_client";

pub struct RawClient {
    transport: Box<dyn Transport>,
}

impl RawClient {
    pub fn new(address: &str, port: u16) -> Self {
        Self::with_transport(Box::new(TcpTransport::new(address, port)))
    }

    pub fn with_transport(transport: Box<dyn Transport>) -> Self {
        RawClient { transport }
    }

    /// send a command and classify the answer
    pub fn execute(&self, command: &Command) -> KeikoResult<String> {
        debug!(LOG_TAG, "send command: {}", command);
        let data = self.transport.exchange(&command.to_frame())?;
        let result = strip_response(data)?;
        if let Some(err) = ProtocolError::from_token(&result) {
            warn!(LOG_TAG, "device rejected command {}: {} ({})", command, err.token(), err);
            return Err(err.into());
        }
        debug!(LOG_TAG, "received: {}", &result);
        Ok(result)
    }

    /// lamps, buzzer (unit 1) and digital outputs (unit 2).
    /// without flags the command queries, with flags it writes.
    pub fn acop(&self, flags: Option<&str>, unit: u8, timing: Timing) -> KeikoResult<String> {
        let command = Command::new("ACOP").unit(unit);
        let command = match flags.filter(|flags| !flags.is_empty()) {
            Some(flags) => command.arg(flags).timing(timing),
            None => command,
        };
        self.execute(&command)
    }

    /// turn every output off
    pub fn alof(&self) -> KeikoResult<String> {
        self.execute(&Command::new("ALOF"))
    }

    /// flags: `[EDX]{4}`
    pub fn ckdi(&self, flags: Option<&str>) -> KeikoResult<String> {
        self.execute(&Command::new("CKDI").arg_opt(flags))
    }

    pub fn ckid(&self, param: Option<Toggle>) -> KeikoResult<String> {
        self.execute(&Command::new("CKID").arg_opt(param))
    }

    /// flags: `[EDX]{20}`
    pub fn ckip(&self, flags: Option<&str>) -> KeikoResult<String> {
        self.execute(&Command::new("CKIP").arg_opt(flags))
    }

    pub fn ckst(&self) -> KeikoResult<String> {
        self.execute(&Command::new("CKST"))
    }

    pub fn help(&self) -> KeikoResult<String> {
        self.execute(&Command::new("HELP"))
    }

    pub fn lgpw(&self, new_password: Option<&str>) -> KeikoResult<String> {
        self.execute(&Command::new("LGPW").arg_opt(new_password))
    }

    pub fn pwst(&self, param: Option<Toggle>) -> KeikoResult<String> {
        self.execute(&Command::new("PWST").arg_opt(param))
    }

    /// contract deadline
    pub fn rdcd(&self) -> KeikoResult<String> {
        self.execute(&Command::new("RDCD"))
    }

    /// contract number
    pub fn rdcn(&self) -> KeikoResult<String> {
        self.execute(&Command::new("RDCN"))
    }

    /// model name
    pub fn rdmn(&self) -> KeikoResult<String> {
        self.execute(&Command::new("RDMN"))
    }

    /// production date
    pub fn rdpd(&self) -> KeikoResult<String> {
        self.execute(&Command::new("RDPD"))
    }

    /// serial number
    pub fn rdsn(&self) -> KeikoResult<String> {
        self.execute(&Command::new("RDSN"))
    }

    /// `RLY1` .. `RLY8`
    pub fn rly(&self, relay: u8, action: Option<RelayAction>, timing: Timing) -> KeikoResult<String> {
        if !(1..=RELAY_NUM).contains(&relay) {
            return Err(KeikoError::Validation(format!("relay number out of range 1..={}: {}", RELAY_NUM, relay)));
        }
        let command = Command::new(format!("RLY{}", relay).as_str());
        let command = match action {
            Some(action) => command.arg(action).timing(timing),
            None => command,
        };
        self.execute(&command)
    }

    /// digital input status
    pub fn rops(&self) -> KeikoResult<String> {
        self.execute(&Command::new("ROPS"))
    }

    pub fn ryin(&self, terminal: Terminal) -> KeikoResult<String> {
        self.execute(&Command::new("RYIN").terminal(terminal))
    }

    pub fn ryof(&self, terminal: Terminal) -> KeikoResult<String> {
        self.execute(&Command::new("RYOF").terminal(terminal))
    }

    pub fn ryot(&self, terminal: Terminal, action: Option<OutputAction>, timing: Timing) -> KeikoResult<String> {
        let command = Command::new("RYOT").terminal(terminal);
        let command = match action {
            Some(action) => command.arg(action).timing(timing),
            None => command,
        };
        self.execute(&command)
    }

    /// voice playback, flags: `[0-9]{8}`
    pub fn spop(&self, flags: Option<&str>) -> KeikoResult<String> {
        self.execute(&Command::new("SPOP").arg_opt(flags))
    }

    /// unit id
    pub fn utid(&self) -> KeikoResult<String> {
        self.execute(&Command::new("UTID"))
    }

    /// firmware version
    pub fn vern(&self) -> KeikoResult<String> {
        self.execute(&Command::new("VERN"))
    }
}

/// drop trailing carriage returns, the rest is payload
fn strip_response(data: Vec<u8>) -> KeikoResult<String> {
    let text = String::from_utf8(data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(text.trim_end_matches(EOL as char).to_string())
}
