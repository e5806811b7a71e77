//! tcp transport
//! - every exchange connects anew, the stream is dropped (closed) before returning on every path
//! - a single read of at most 64 bytes, the device answers with one short line
//! - no timeout besides the os default, no retry

use std::io::{Read, Write};
use std::net::TcpStream;
use super::prelude::RESPONSE_BUF_LEN;
use super::traits::Transport;
use crate::trace;

const LOG_TAG: &str = "tcp_transport";

#[derive(Debug, Clone)]
pub struct TcpTransport {
    address: String,
    port: u16,
}

impl TcpTransport {
    pub fn new(address: &str, port: u16) -> Self {
        TcpTransport {
            address: address.to_string(),
            port,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl Transport for TcpTransport {
    fn exchange(&self, frame: &[u8]) -> std::io::Result<Vec<u8>> {
        let mut stream = TcpStream::connect((self.address.as_str(), self.port))?;
        stream.write_all(frame)?;
        let mut buf = [0u8; RESPONSE_BUF_LEN];
        let len = stream.read(&mut buf)?;
        trace!(LOG_TAG, "{}:{} answered {} bytes", &self.address, self.port, len);
        Ok(buf[..len].to_vec())
    }
}
