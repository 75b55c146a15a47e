//! NFC Command Wrappers
//!
//! Frontend bindings to the backend NFC service commands. Commands return
//! `Result`, so the binding uses `catch` and a rejected invoke surfaces as
//! the backend's error string.

use wasm_bindgen::prelude::*;
use serde::{Deserialize, Serialize};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> Result<JsValue, JsValue>;
}

fn error_string(err: JsValue) -> String {
    err.as_string()
        .unwrap_or_else(|| format!("{:?}", err))
}

// ========================
// Command Argument Structs
// ========================

#[derive(Serialize)]
pub struct RequestSessionArgs<'a> {
    pub kind: &'a str,
}

#[derive(Serialize)]
pub struct DecodeTextArgs<'a> {
    pub payload: &'a [u8],
}

// ========================
// Tag Data
// ========================

/// One NDEF record as returned by the backend (opaque bytes)
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct NdefRecord {
    pub payload: Vec<u8>,
}

/// Tag descriptor: zero or more records
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TagDescriptor {
    pub records: Vec<NdefRecord>,
}

// ========================
// NFC Commands
// ========================

pub async fn is_supported() -> Result<bool, String> {
    let result = invoke("nfc_is_supported", JsValue::NULL).await.map_err(error_string)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn start() -> Result<(), String> {
    invoke("nfc_start", JsValue::NULL).await.map_err(error_string)?;
    Ok(())
}

pub async fn request_session(kind: &str) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&RequestSessionArgs { kind }).map_err(|e| e.to_string())?;
    invoke("nfc_request_session", js_args).await.map_err(error_string)?;
    Ok(())
}

pub async fn read_tag() -> Result<TagDescriptor, String> {
    let result = invoke("nfc_read_tag", JsValue::NULL).await.map_err(error_string)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn decode_text_payload(payload: &[u8]) -> Result<String, String> {
    let js_args = serde_wasm_bindgen::to_value(&DecodeTextArgs { payload }).map_err(|e| e.to_string())?;
    let result = invoke("nfc_decode_text", js_args).await.map_err(error_string)?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Release any pending session. Safe to call when none is active.
pub async fn cancel_session() -> Result<(), String> {
    let _ = invoke("nfc_cancel_session", JsValue::NULL).await;
    Ok(())
}
