// flag string length of ACOP and SPOP
pub const FLAG_LEN: usize = 8;
// flag string length of the ROPS response
pub const DI_FLAG_LEN: usize = 4;
// placeholder telling the device to leave a position unchanged
pub const WILDCARD: char = 'X';
// response read buffer, enough for every status line the device sends
pub const RESPONSE_BUF_LEN: usize = 64;
// command line terminator, the device rejects anything else
pub const EOL: u8 = b'\r';
// unit selector of the ACOP command
pub const LAMP_UNIT: u8 = 1;
pub const DO_UNIT: u8 = 2;
pub const RELAY_NUM: u8 = 8;
