//! per subsystem device api.
//! writes put real values only at the positions they change and `X` everywhere else,
//! so the device itself keeps the rest; nothing is read back and merged.
//! reads query without flags and decode the whole response.

mod buzzer;
mod client;
mod digital_input;
mod digital_output;
mod lamp;
mod voice;

pub use buzzer::Buzzer;
pub use client::Client;
pub use digital_input::{DigitalInput, DigitalInputGroup};
pub use digital_output::{DigitalOutput, DigitalOutputGroup};
pub use lamp::{Lamp, LampGroup};
pub use voice::{Voice, VoiceGroup};
