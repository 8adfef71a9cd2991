//! Error types and the Ledger status word each one corresponds to.

use thiserror::Error;

/// Status words the device answers with when it receives the kind of
/// malformed request the matching [`ApduError`] guards against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u16)]
pub enum StatusWord {
    IncorrectLength = 0x6700,
    IncorrectData = 0x6A80,
}

/// Errors returned by the library.
#[derive(Debug, Error)]
pub enum ApduError {
    #[error("invalid BIP32 path: {0}")]
    InvalidPath(String),

    #[error("payload length of {len} exceeds {max}")]
    PayloadTooLarge { len: usize, max: usize },

    #[error("payload chunk count ({count}) exceeds max of {max}")]
    TooManyChunks { count: usize, max: usize },

    #[error("frame {index} would carry {len} bytes, more than fits in one APDU")]
    FrameOverflow { index: usize, len: usize },

    #[error("invalid request: {0}")]
    InvalidRequest(String),

    #[error("invalid hex payload: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    #[error("message must contain printable ASCII characters")]
    NonAsciiMessage,
}

impl ApduError {
    pub fn status_word(&self) -> StatusWord {
        match self {
            Self::PayloadTooLarge { .. }
            | Self::TooManyChunks { .. }
            | Self::FrameOverflow { .. } => StatusWord::IncorrectLength,
            Self::InvalidPath(_)
            | Self::InvalidRequest(_)
            | Self::InvalidHex(_)
            | Self::NonAsciiMessage => StatusWord::IncorrectData,
        }
    }
}
