use std::io;

/// byte level exchange with the device.
/// one call is one request and one response on a connection of its own.
pub trait Transport: Send + Sync {
    fn exchange(&self, frame: &[u8]) -> io::Result<Vec<u8>>;
}
