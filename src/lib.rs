//! client for the keiko signal tower: lamps, buzzer, digital I/O and voice over its ascii tcp protocol

pub mod common;
pub mod driver;
pub mod entity;
pub mod http_server;
