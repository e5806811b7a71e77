use std::io;
use thiserror::Error;

/// error codes reported to http callers
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    // 未知错误
    UnknownError = 1000,
    // 参数校验错误
    ValidationError = 1001,
    // 设备返回错误码
    ProtocolError = 1002,
    // 网络或数据格式错误
    TransportError = 1003,
}

/// coarse grouping of errors, callers decide retry policy from this
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Protocol,
    Transport,
}

/// the four error tokens the device may answer with
#[derive(Debug, Copy, Clone, PartialEq, Eq, Error)]
pub enum ProtocolError {
    #[error("Invalid command")]
    InvalidCommand,
    #[error("Wrong EOL code")]
    WrongEol,
    #[error("Wrong arguments")]
    WrongArguments,
    #[error("Command failed")]
    CommandFailed,
}

impl ProtocolError {
    const ALL: [ProtocolError; 4] = [
        ProtocolError::InvalidCommand,
        ProtocolError::WrongEol,
        ProtocolError::WrongArguments,
        ProtocolError::CommandFailed,
    ];

    pub fn token(&self) -> &'static str {
        match self {
            ProtocolError::InvalidCommand => "ER01",
            ProtocolError::WrongEol => "ER02",
            ProtocolError::WrongArguments => "ER03",
            ProtocolError::CommandFailed => "ER04",
        }
    }

    /// human readable reason of the error token
    pub fn reason(&self) -> String {
        self.to_string()
    }

    /// match a stripped response against the reserved tokens
    pub fn from_token(response: &str) -> Option<ProtocolError> {
        Self::ALL.iter().copied().find(|e| e.token() == response)
    }
}

/// flag string could not be built or parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("flag string length mismatch, expected: {expected}, actual: {actual}")]
    Length { expected: usize, actual: usize },

    #[error("non ascii byte {byte:#04x} at index {index}")]
    NotAscii { index: usize, byte: u8 },

    #[error("non digit character {found:?} at index {index}")]
    NotDigit { index: usize, found: char },

    #[error("value {value} at index {index} is not a known state")]
    UnknownValue { index: usize, value: char },

    #[error("{field} {value} is out of range {min}..={max}")]
    OutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },
}

#[derive(Debug, Error)]
pub enum KeikoError {
    /// caller supplied selector or state outside its domain, raised before any I/O
    #[error("validation error: {0}")]
    Validation(String),

    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    #[error("transport error: {0}")]
    Transport(#[from] io::Error),

    #[error("encoding error: {0}")]
    Encoding(#[from] EncodingError),
}

impl KeikoError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            KeikoError::Validation(_) => ErrorCategory::Validation,
            KeikoError::Protocol(_) => ErrorCategory::Protocol,
            // an undecodable response is as unusable as a broken socket
            KeikoError::Transport(_) | KeikoError::Encoding(_) => ErrorCategory::Transport,
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self.category() {
            ErrorCategory::Validation => ErrorCode::ValidationError,
            ErrorCategory::Protocol => ErrorCode::ProtocolError,
            ErrorCategory::Transport => ErrorCode::TransportError,
        }
    }
}

pub type KeikoResult<T> = Result<T, KeikoError>;

/// settings file missing or malformed
#[derive(Debug, Error)]
pub enum SettingError {
    #[error("cannot read config file {path}: {source}")]
    Read { path: String, source: io::Error },

    #[error("config file format invalid: {0}")]
    Format(#[from] toml::de::Error),
}
