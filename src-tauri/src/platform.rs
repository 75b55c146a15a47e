//! Mobile NFC Adapter
//!
//! Bridges the adapter trait to the official NFC plugin. Only compiled
//! for mobile targets; desktop builds fall back to `UnsupportedAdapter`.

use async_trait::async_trait;
use tauri::AppHandle;
use tauri_plugin_nfc::NfcExt;
use tokio::sync::Mutex;

use crate::nfc::{NdefRecord, NfcAdapter, NfcError, SessionKind, TagDescriptor};

pub struct PluginAdapter {
    app: AppHandle,
    /// Kind armed by `request_session`, consumed by `read_tag`. The
    /// plugin exposes a single blocking scan call, so the session request
    /// only records the kind and the read performs the actual scan.
    armed: Mutex<Option<SessionKind>>,
}

impl PluginAdapter {
    pub fn new(app: AppHandle) -> Self {
        Self {
            app,
            armed: Mutex::new(None),
        }
    }
}

#[async_trait]
impl NfcAdapter for PluginAdapter {
    fn supported(&self) -> bool {
        self.app
            .nfc()
            .is_available()
            .unwrap_or(false)
    }

    async fn start(&self) -> Result<(), NfcError> {
        // The plugin initializes lazily on first use
        Ok(())
    }

    async fn request_session(&self, kind: SessionKind) -> Result<(), NfcError> {
        *self.armed.lock().await = Some(kind);
        Ok(())
    }

    async fn read_tag(&self) -> Result<TagDescriptor, NfcError> {
        let kind = (*self.armed.lock().await).ok_or(NfcError::NoSession)?;

        let scan_kind = match kind {
            SessionKind::Ndef => tauri_plugin_nfc::ScanKind::Ndef {
                mime_type: None,
                uri: None,
                tech_list: None,
            },
            SessionKind::Tag => tauri_plugin_nfc::ScanKind::Tag {
                mime_type: None,
                uri: None,
            },
        };

        let app = self.app.clone();
        let tag = tauri::async_runtime::spawn_blocking(move || {
            app.nfc().scan(tauri_plugin_nfc::ScanRequest {
                kind: scan_kind,
                keep_session_alive: false,
            })
        })
        .await
        .map_err(|e| NfcError::Adapter(e.to_string()))?
        .map_err(|e| NfcError::Adapter(e.to_string()))?;

        Ok(TagDescriptor {
            records: tag
                .records
                .into_iter()
                .map(|record| NdefRecord {
                    payload: record.payload,
                })
                .collect(),
        })
    }

    async fn cancel(&self) {
        // The plugin's scan call owns the platform session and closes it
        // when it returns; dropping the armed kind is all that is left.
        *self.armed.lock().await = None;
    }
}
