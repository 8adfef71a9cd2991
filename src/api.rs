//! High-level API - a [`Config`] describes one request and turns it into
//! the frames to send.

use crate::apdu::{Frame, SignatureAlgo};
use crate::commands;
use crate::error::ApduError;
use crate::types::Bip32Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    PublicKey,
    ExtendedPublicKey,
    Message,
    Transaction,
    AppVersion,
}

impl RequestKind {
    /// Message and transaction requests carry a payload; the rest don't.
    pub fn takes_payload(self) -> bool {
        matches!(self, Self::Message | Self::Transaction)
    }
}

/// Everything needed to build one request. Built once, then read-only.
#[derive(Debug, Clone)]
pub struct Config {
    pub kind: RequestKind,
    pub path: Bip32Path,
    pub payload: Option<Vec<u8>>,
    pub algorithm: SignatureAlgo,
    /// Ask for on-device confirmation (public key requests).
    pub confirm: bool,
    /// Require a BIP44-shaped path and an ASCII message.
    pub strict: bool,
}

impl Config {
    /// Default path and algorithm, no payload.
    pub fn new(kind: RequestKind) -> Self {
        Self {
            kind,
            path: Bip32Path::default(),
            payload: None,
            algorithm: SignatureAlgo::default(),
            confirm: false,
            strict: false,
        }
    }

    /// Build the frames for this request, in sending order.
    pub fn frames(&self) -> Result<Vec<Frame>, ApduError> {
        self.validate()?;

        match self.kind {
            RequestKind::PublicKey => Ok(vec![commands::get_pubkey::build(
                &self.path,
                false,
                self.confirm,
            )]),
            RequestKind::ExtendedPublicKey => Ok(vec![commands::get_pubkey::build(
                &self.path,
                true,
                self.confirm,
            )]),
            RequestKind::AppVersion => Ok(vec![commands::get_version::build()]),
            RequestKind::Message => commands::sign_message::build(
                self.payload(),
                &self.path,
                self.algorithm,
                self.strict,
            ),
            RequestKind::Transaction => {
                commands::sign_tx::build(self.payload(), &self.path, self.algorithm)
            }
        }
    }

    fn payload(&self) -> &[u8] {
        self.payload.as_deref().unwrap_or_default()
    }

    fn validate(&self) -> Result<(), ApduError> {
        let problem = match (self.kind.takes_payload(), &self.payload) {
            (true, None) => Some("needs a payload"),
            (false, Some(_)) => Some("takes no payload"),
            _ => None,
        };
        if let Some(problem) = problem {
            return Err(ApduError::InvalidRequest(format!(
                "{:?} request {problem}",
                self.kind
            )));
        }

        if self.strict && self.kind != RequestKind::AppVersion && !self.path.is_bip44() {
            return Err(ApduError::InvalidPath(format!(
                "{} is not a BIP44 path (44'/coin'/account'/change/index)",
                self.path
            )));
        }

        Ok(())
    }
}
