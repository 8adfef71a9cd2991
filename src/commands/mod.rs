//! One frame builder per request kind.
//!
//! You probably want [`Config::frames`](crate::api::Config::frames) instead.

pub mod get_pubkey;
pub mod get_version;
pub mod sign_message;
pub mod sign_tx;
