//! Wallet Backend
//!
//! Layered architecture:
//! - nfc: adapter trait, NDEF decoding and the session service
//! - commands: Tauri command handlers

use std::sync::Arc;
use tauri::Manager;

mod commands;
mod nfc;
#[cfg(mobile)]
mod platform;

use nfc::{NfcAdapter, NfcService, UnsupportedAdapter};

/// Application state shared across commands
pub struct AppState {
    pub nfc: NfcService,
}

#[cfg(mobile)]
fn adapter(app: &tauri::AppHandle) -> Arc<dyn NfcAdapter> {
    Arc::new(platform::PluginAdapter::new(app.clone()))
}

#[cfg(not(mobile))]
fn adapter(_app: &tauri::AppHandle) -> Arc<dyn NfcAdapter> {
    Arc::new(UnsupportedAdapter)
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    let builder = tauri::Builder::default();

    #[cfg(mobile)]
    let builder = builder.plugin(tauri_plugin_nfc::init());

    builder
        .setup(|app| {
            // Single instance check - must be first!
            #[cfg(desktop)]
            app.handle()
                .plugin(tauri_plugin_single_instance::init(|_app, _args, _cwd| {
                    // Focus the existing window when a new instance tries to start
                    if let Some(window) = _app.get_webview_window("main") {
                        let _ = window.set_focus();
                    }
                }))?;

            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wallet=info")),
                )
                .init();

            let nfc = NfcService::new(adapter(app.handle()));
            tracing::info!(supported = nfc.supported(), "NFC service initialized");

            app.manage(AppState { nfc });

            Ok(())
        })
        .invoke_handler(tauri::generate_handler![
            commands::nfc_is_supported,
            commands::nfc_start,
            commands::nfc_request_session,
            commands::nfc_read_tag,
            commands::nfc_decode_text,
            commands::nfc_cancel_session,
        ])
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
