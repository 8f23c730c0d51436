//! Authentication module
//!
//! VARIoT instances authenticate with a personal API key sent as
//! `Authorization: Token <key>`. The `Authenticator` holds that key for a
//! client and applies it to every outgoing request.

mod authenticator;

pub use authenticator::{Authenticator, AUTH_SCHEME};
