//! APDU frame builder for the ARK Ledger app.
//!
//! Turns a request (public key, extended public key, app version,
//! transaction or message signing) into the exact APDU frames the app
//! expects, ready to hand to a transport or paste into a test fixture.
//!
//! # Quick start
//!
//! ```
//! use ark_ledger_apdu::{Config, RequestKind};
//!
//! let config = Config {
//!     payload: Some(b"Hello ARK".to_vec()),
//!     ..Config::new(RequestKind::Message)
//! };
//! for frame in config.frames()? {
//!     println!("{frame}");
//! }
//! # Ok::<(), ark_ledger_apdu::ApduError>(())
//! ```
//!
//! # Modules
//!
//! - [`api`] -- [`Config`] and [`RequestKind`]
//! - [`apdu`] -- header constants and the [`Frame`] wire type
//! - [`protocol`] -- splitting signing payloads into frames
//! - [`types`] -- [`Bip32Path`]

pub mod apdu;
pub mod api;
pub(crate) mod commands;
pub mod error;
pub mod protocol;
pub mod types;

pub use apdu::{Frame, Instruction, Segment, SignatureAlgo};
pub use api::{Config, RequestKind};
pub use error::{ApduError, StatusWord};
pub use protocol::chunks::{CHUNK_MAX, CHUNK_SIZE, PAYLOAD_MAX};
pub use types::{Bip32Path, DEFAULT_PATH};
