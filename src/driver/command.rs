//! command line building
//! a command is the verb and its arguments joined by single spaces, framed by one `\r`.
//! there is no length prefix and no checksum.

use std::fmt;
use super::prelude::EOL;
use crate::entity::bo::state_bo::{Terminal, Timing};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    parts: Vec<String>,
}

impl Command {
    pub fn new(verb: &str) -> Self {
        Command { parts: vec![verb.to_string()] }
    }

    pub fn arg<T: ToString>(mut self, arg: T) -> Self {
        self.parts.push(arg.to_string());
        self
    }

    /// append the argument only when present, an empty argument counts as absent
    pub fn arg_opt<T: ToString>(self, arg: Option<T>) -> Self {
        match arg.map(|arg| arg.to_string()).filter(|arg| !arg.is_empty()) {
            Some(arg) => self.arg(arg),
            None => self,
        }
    }

    /// `-u <unit>`
    pub fn unit(self, unit: u8) -> Self {
        self.arg("-u").arg(unit)
    }

    /// `-n <terminal>`
    pub fn terminal(self, terminal: Terminal) -> Self {
        self.arg("-n").arg(terminal)
    }

    /// `-w <wait> -t <time>`
    pub fn timing(self, timing: Timing) -> Self {
        self.arg("-w").arg(timing.wait).arg("-t").arg(timing.time)
    }

    pub fn verb(&self) -> &str {
        &self.parts[0]
    }

    pub fn line(&self) -> String {
        self.parts.join(" ")
    }

    /// bytes on the wire, the line plus a single carriage return
    pub fn to_frame(&self) -> Vec<u8> {
        let mut frame = self.line().into_bytes();
        frame.push(EOL);
        frame
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.line())
    }
}

/// parameter of `CKID` and `PWST`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Toggle {
    Enable,
    Disable,
}

impl fmt::Display for Toggle {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            Toggle::Enable => "Enable",
            Toggle::Disable => "Disable",
        })
    }
}

/// parameter of `RLY1` .. `RLY8`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RelayAction {
    TurnOff,
    TurnOn,
    Blink,
}

impl fmt::Display for RelayAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            RelayAction::TurnOff => "TurnOff",
            RelayAction::TurnOn => "TurnOn",
            RelayAction::Blink => "Blink",
        })
    }
}

/// parameter of `RYOT`
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OutputAction {
    TurnOff,
    TurnOn,
    Pulse,
}

impl fmt::Display for OutputAction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(match self {
            OutputAction::TurnOff => "TurnOff",
            OutputAction::TurnOn => "TurnOn",
            OutputAction::Pulse => "Pulse",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_line() {
        let command = Command::new("ACOP").unit(1);
        assert_eq!(command.line(), "ACOP -u 1");
        assert_eq!(command.to_frame(), b"ACOP -u 1\r".to_vec());
        assert_eq!(command.verb(), "ACOP");
    }

    #[test]
    fn test_write_line() {
        let command = Command::new("ACOP")
            .unit(2)
            .arg("1X0XXXXX")
            .timing(Timing::new(2, 3));
        assert_eq!(command.to_string(), "ACOP -u 2 1X0XXXXX -w 2 -t 3");
    }

    #[test]
    fn test_frame_has_single_cr() {
        let frame = Command::new("VERN").to_frame();
        assert_eq!(frame, b"VERN\r".to_vec());
        assert!(!frame.contains(&b'\n'));
    }

    #[test]
    fn test_optional_and_terminal() {
        let terminal = Terminal::new(3).unwrap();
        assert_eq!(Command::new("RYOT").terminal(terminal).arg_opt(None::<OutputAction>).line(), "RYOT -n 3");
        assert_eq!(
            Command::new("RYOT").terminal(terminal).arg_opt(Some(OutputAction::Pulse)).line(),
            "RYOT -n 3 Pulse"
        );
        assert_eq!(Command::new("PWST").arg(Toggle::Disable).line(), "PWST Disable");
    }
}
