//! Tauri Commands for the NFC Service
//!
//! Exposes the scan session operations to the frontend via Tauri IPC.

use tauri::State;

use crate::nfc::{SessionKind, TagDescriptor};
use crate::AppState;

/// Hardware capability query
#[tauri::command]
pub fn nfc_is_supported(state: State<'_, AppState>) -> bool {
    state.nfc.supported()
}

/// Idempotent initialization of the NFC stack
#[tauri::command]
pub async fn nfc_start(state: State<'_, AppState>) -> Result<(), String> {
    state.nfc.start().await.map_err(|e| e.to_string())
}

/// Arm a technology session ("ndef" or "tag")
#[tauri::command]
pub async fn nfc_request_session(state: State<'_, AppState>, kind: String) -> Result<(), String> {
    state
        .nfc
        .request_session(SessionKind::from_str(&kind))
        .await
        .map_err(|e| e.to_string())
}

/// Wait for a tag to be presented
#[tauri::command]
pub async fn nfc_read_tag(state: State<'_, AppState>) -> Result<TagDescriptor, String> {
    state.nfc.read_tag().await.map_err(|e| e.to_string())
}

/// Decode an NDEF text-record payload
#[tauri::command]
pub fn nfc_decode_text(state: State<'_, AppState>, payload: Vec<u8>) -> Result<String, String> {
    state.nfc.decode_text(&payload).map_err(|e| e.to_string())
}

/// Release any pending session; safe to call when none is active
#[tauri::command]
pub async fn nfc_cancel_session(state: State<'_, AppState>) -> Result<(), String> {
    state.nfc.cancel().await;
    Ok(())
}
