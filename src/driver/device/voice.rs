use crate::common::error::{KeikoError, KeikoResult};
use crate::driver::flags::{build_voice_flags, parse_voice_flags};
use crate::driver::raw_client::RawClient;
use crate::entity::bo::state_bo::{VoicePlayback, VoiceState, VOICE_NUMBER_MAX, VOICE_NUMBER_MIN};
use crate::info;

const LOG_TAG: &str = "voice";
// the repeat count travels as two digits
const PLAY_TIMES_MAX: u8 = 99;

/// pre-recorded voice announcements, `SPOP`
pub struct VoiceGroup<'a> {
    raw: &'a RawClient,
}

impl<'a> VoiceGroup<'a> {
    pub(crate) fn new(raw: &'a RawClient) -> Self {
        VoiceGroup { raw }
    }

    pub fn status(&self) -> KeikoResult<VoiceState> {
        let flags = self.raw.spop(None)?;
        Ok(parse_voice_flags(&flags)?)
    }

    /// stop whatever is playing
    pub fn stop(&self) -> KeikoResult<()> {
        send(self.raw, VoiceState::Stop)
    }

    /// view of one voice slot, fails for numbers outside 1..=20 without touching the network
    pub fn voice(&self, number: u8) -> KeikoResult<Voice<'a>> {
        if !(VOICE_NUMBER_MIN..=VOICE_NUMBER_MAX).contains(&number) {
            return Err(KeikoError::Validation(format!(
                "voice number out of range {}..={}: {}",
                VOICE_NUMBER_MIN, VOICE_NUMBER_MAX, number
            )));
        }
        Ok(Voice { raw: self.raw, number })
    }
}

pub struct Voice<'a> {
    raw: &'a RawClient,
    number: u8,
}

impl<'a> Voice<'a> {
    pub fn number(&self) -> u8 {
        self.number
    }

    /// `play` only when the device reports this very slot as playing
    pub fn status(&self) -> KeikoResult<VoicePlayback> {
        match VoiceGroup::new(self.raw).status()? {
            VoiceState::Playing { number, .. } if number == self.number => Ok(VoicePlayback::Play),
            _ => Ok(VoicePlayback::Stop),
        }
    }

    /// play `times` times in total, 0 repeats infinitely
    pub fn play(&self, times: u8) -> KeikoResult<()> {
        if times > PLAY_TIMES_MAX {
            return Err(KeikoError::Validation(format!("play times out of range 0..={}: {}", PLAY_TIMES_MAX, times)));
        }
        send(self.raw, VoiceState::Playing { number: self.number, repeat: times })
    }

    pub fn repeat(&self) -> KeikoResult<()> {
        self.play(0)
    }

    pub fn stop(&self) -> KeikoResult<()> {
        send(self.raw, VoiceState::Stop)
    }
}

fn send(raw: &RawClient, state: VoiceState) -> KeikoResult<()> {
    let flags = build_voice_flags(state)?;
    raw.spop(Some(&flags))?;
    info!(LOG_TAG, "voice set to {:?}", state);
    Ok(())
}
