//! NFC Service
//!
//! Boundary to the native NFC stack:
//! - adapter: trait over the platform NFC implementation
//! - ndef: text-record payload decoding
//! - service: session lifecycle shared across commands

mod adapter;
mod ndef;
mod service;

pub use adapter::{NfcAdapter, UnsupportedAdapter};
pub use ndef::decode_text_payload;
pub use service::NfcService;

#[cfg(test)]
pub use adapter::MockAdapter;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Technology session kind requested by the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    /// NDEF-formatted tags
    Ndef,
    /// Raw tag technology
    Tag,
}

impl SessionKind {
    pub fn from_str(s: &str) -> Self {
        match s {
            "tag" => SessionKind::Tag,
            _ => SessionKind::Ndef,
        }
    }
}

/// One NDEF record: an opaque byte payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NdefRecord {
    pub payload: Vec<u8>,
}

/// A tag as presented to the reader: zero or more records
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TagDescriptor {
    pub records: Vec<NdefRecord>,
}

#[derive(Debug, Error)]
pub enum NfcError {
    #[error("NFC is not supported on this device")]
    Unsupported,

    #[error("a scan session is already active")]
    SessionBusy,

    #[error("no active scan session")]
    NoSession,

    #[error("adapter error: {0}")]
    Adapter(String),

    #[error("payload decode error: {0}")]
    Decode(String),
}
