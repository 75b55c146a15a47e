//! Commands Layer
//!
//! Tauri command handlers that bridge the frontend to the NFC service.

mod nfc_cmd;

pub use nfc_cmd::*;
