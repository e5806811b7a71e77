//! 设备状态实体类
//! value types exchanged between the facade and the flag codec, created fresh on every call

use std::fmt;
use std::str::FromStr;
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Deserialize, Serialize, Serializer};
use crate::common::error::{KeikoError, KeikoResult};

pub const TERMINAL_NUM: usize = 4;
pub const VOICE_NUMBER_MIN: u8 = 1;
pub const VOICE_NUMBER_MAX: u8 = 20;

/// lamp colors of the tower
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Yellow,
    Green,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Yellow, Color::Green];

    pub fn name(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Green => "green",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = KeikoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Color::Red),
            "yellow" => Ok(Color::Yellow),
            "green" => Ok(Color::Green),
            _ => Err(KeikoError::Validation(format!("unknown lamp color: {}", s))),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LampMode {
    Off,
    On,
    Blink,
    Quickblink,
}

impl FromStr for LampMode {
    type Err = KeikoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(LampMode::Off),
            "on" => Ok(LampMode::On),
            "blink" => Ok(LampMode::Blink),
            "quickblink" => Ok(LampMode::Quickblink),
            _ => Err(KeikoError::Validation(format!("unknown lamp state: {}", s))),
        }
    }
}

/// state of all three lamps, as reported by the device
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
pub struct LampStates {
    pub red: LampMode,
    pub yellow: LampMode,
    pub green: LampMode,
}

impl LampStates {
    pub fn get(&self, color: Color) -> LampMode {
        match color {
            Color::Red => self.red,
            Color::Yellow => self.yellow,
            Color::Green => self.green,
        }
    }

    pub fn to_pairs(&self) -> [(Color, LampMode); 3] {
        Color::ALL.map(|color| (color, self.get(color)))
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BuzzerMode {
    Off,
    Continuous,
    Intermittent,
}

impl FromStr for BuzzerMode {
    type Err = KeikoError;

    /// `on` is an alias of `continuous`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(BuzzerMode::Off),
            "on" | "continuous" => Ok(BuzzerMode::Continuous),
            "intermittent" => Ok(BuzzerMode::Intermittent),
            _ => Err(KeikoError::Validation(format!("unknown buzzer state: {}", s))),
        }
    }
}

/// state of a digital input or output terminal
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SwitchState {
    Off,
    On,
}

impl FromStr for SwitchState {
    type Err = KeikoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(SwitchState::Off),
            "on" => Ok(SwitchState::On),
            _ => Err(KeikoError::Validation(format!("unknown terminal state: {}", s))),
        }
    }
}

/// digital I/O terminal number, always within 1..=4
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Terminal(u8);

impl Terminal {
    pub fn new(number: u8) -> KeikoResult<Self> {
        if (1..=TERMINAL_NUM as u8).contains(&number) {
            Ok(Terminal(number))
        } else {
            Err(KeikoError::Validation(format!("terminal number out of range 1..={}: {}", TERMINAL_NUM, number)))
        }
    }

    pub fn all() -> impl Iterator<Item = Terminal> {
        (1..=TERMINAL_NUM as u8).map(Terminal)
    }

    pub fn number(&self) -> u8 {
        self.0
    }
}

impl FromStr for Terminal {
    type Err = KeikoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = s
            .parse::<u8>()
            .map_err(|_| KeikoError::Validation(format!("invalid terminal number: {}", s)))?;
        Terminal::new(number)
    }
}

impl fmt::Display for Terminal {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// state of all four terminals of a DO or DI group
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct DigitalStates([SwitchState; TERMINAL_NUM]);

impl DigitalStates {
    pub fn new(states: [SwitchState; TERMINAL_NUM]) -> Self {
        DigitalStates(states)
    }

    pub fn get(&self, terminal: Terminal) -> SwitchState {
        self.0[terminal.number() as usize - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Terminal, SwitchState)> + '_ {
        Terminal::all().map(move |terminal| (terminal, self.get(terminal)))
    }
}

impl Serialize for DigitalStates {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(TERMINAL_NUM))?;
        for (terminal, state) in self.iter() {
            map.serialize_entry(&terminal.number(), &state)?;
        }
        map.end()
    }
}

/// voice announcement state; `repeat == 0` means repeat infinitely
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum VoiceState {
    Stop,
    Playing { number: u8, repeat: u8 },
}

impl Serialize for VoiceState {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            VoiceState::Stop => serializer.serialize_str("stop"),
            VoiceState::Playing { number, repeat } => {
                let mut state = serializer.serialize_struct("VoiceState", 2)?;
                state.serialize_field("number", number)?;
                state.serialize_field("repeat", repeat)?;
                state.end()
            }
        }
    }
}

/// whether one voice slot is the one currently playing
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoicePlayback {
    Play,
    Stop,
}

/// delay before action (`-w`) and duration of timed actions (`-t`), both default 0
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timing {
    pub wait: u32,
    pub time: u32,
}

impl Timing {
    pub fn new(wait: u32, time: u32) -> Self {
        Timing { wait, time }
    }

    /// timing for turning something off, the device takes no duration for it
    pub fn wait(wait: u32) -> Self {
        Timing { wait, time: 0 }
    }
}
