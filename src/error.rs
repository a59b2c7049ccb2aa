use crate::{engine::TransportError, juno::SysexError, wire::EncodeError};

/// Crate-level error. Every variant aborts only the operation that raised it.
#[derive(Debug)]
pub enum Error {
    Encode(EncodeError),
    Sysex(SysexError),
    Transport(TransportError),
    /// `note_on` on a pool that owns no voices (built empty, or released)
    VoicePoolExhausted,
    /// A recording (or store-patch capture) is already running
    RecordingActive,
    /// Stop requested with no recording running
    RecordingInactive,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Encode(err) => write!(f, "Encode error: {}", err),
            Error::Sysex(err) => write!(f, "Sysex error: {}", err),
            Error::Transport(err) => write!(f, "Transport error: {}", err),
            Error::VoicePoolExhausted => {
                f.write_str("Note on with no voices - pool is empty or has been released")
            }
            Error::RecordingActive => f.write_str("A recording session is already active"),
            Error::RecordingInactive => f.write_str("No recording session is active"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Encode(err) => Some(err),
            Error::Sysex(err) => Some(err),
            Error::Transport(err) => Some(err),
            _ => None,
        }
    }
}

impl From<EncodeError> for Error {
    fn from(err: EncodeError) -> Self {
        Error::Encode(err)
    }
}

impl From<SysexError> for Error {
    fn from(err: SysexError) -> Self {
        Error::Sysex(err)
    }
}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        Error::Transport(err)
    }
}
