pub mod command;
pub mod device;
pub mod flags;
pub mod prelude;
pub mod raw_client;
pub mod traits;
pub mod transport;
