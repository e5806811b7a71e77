//! entry point of the device api.
//! a `Client` is built once from the settings and handed to whoever needs it; the
//! subsystem views it returns only borrow the protocol client and carry no state.

use super::buzzer::Buzzer;
use super::digital_input::DigitalInputGroup;
use super::digital_output::DigitalOutputGroup;
use super::lamp::LampGroup;
use super::voice::VoiceGroup;
use crate::driver::raw_client::RawClient;

pub struct Client {
    raw: RawClient,
}

impl Client {
    pub fn new(address: &str, port: u16) -> Self {
        Self::with_raw(RawClient::new(address, port))
    }

    pub fn with_raw(raw: RawClient) -> Self {
        Client { raw }
    }

    /// device commands without a facade, e.g. serial number or firmware version
    pub fn raw(&self) -> &RawClient {
        &self.raw
    }

    pub fn lamps(&self) -> LampGroup<'_> {
        LampGroup::new(&self.raw)
    }

    pub fn buzzer(&self) -> Buzzer<'_> {
        Buzzer::new(&self.raw)
    }

    pub fn digital_outputs(&self) -> DigitalOutputGroup<'_> {
        DigitalOutputGroup::new(&self.raw)
    }

    pub fn digital_inputs(&self) -> DigitalInputGroup<'_> {
        DigitalInputGroup::new(&self.raw)
    }

    pub fn voices(&self) -> VoiceGroup<'_> {
        VoiceGroup::new(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::raw_client::tests::RecordingTransport;
    use crate::entity::bo::state_bo::{BuzzerMode, LampMode, SwitchState, Terminal, VoiceState};
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    #[test]
    fn test_views_share_one_client() {
        let transport = RecordingTransport::responding("12010000");
        let client = Client::with_raw(transport.client());
        assert_eq!(client.lamps().status().unwrap().yellow, LampMode::Blink);
        assert_eq!(client.buzzer().status().unwrap(), BuzzerMode::Continuous);
        transport.set_response("10100000");
        assert_eq!(client.digital_outputs().status().unwrap().get(Terminal::new(1).unwrap()), SwitchState::On);
        assert_eq!(transport.commands(), vec!["ACOP -u 1", "ACOP -u 1", "ACOP -u 2"]);
    }

    #[test]
    fn test_client_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Client>();
    }

    /// full stack against a socket, one connection per command
    #[test]
    fn test_over_tcp() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let port = listener.local_addr().unwrap().port();
        let server = thread::spawn(move || {
            let answers: [&[u8]; 2] = [b"11510800\r", b"ER03\r"];
            let mut received = Vec::new();
            for answer in answers {
                let (mut stream, _) = listener.accept().unwrap();
                let mut buf = [0u8; 64];
                let len = stream.read(&mut buf).unwrap();
                received.push(buf[..len].to_vec());
                stream.write_all(answer).unwrap();
            }
            received
        });

        let client = Client::new("127.0.0.1", port);
        assert_eq!(client.voices().status().unwrap(), VoiceState::Playing { number: 15, repeat: 8 });
        let err = client.voices().stop().unwrap_err();
        assert_eq!(err.to_string(), "protocol error: Wrong arguments");

        let received = server.join().unwrap();
        assert_eq!(received, vec![b"SPOP\r".to_vec(), b"SPOP 00000000\r".to_vec()]);
    }
}
