//! Card List Component
//!
//! Owns the canonical card collection and the NFC scan workflow.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::models::Card;
use crate::nfc;
use crate::store::{allocate_id, remove_card};
use crate::components::{CardItem, Notice, ScanDialog};

const NOTICE_NFC_UNAVAILABLE: &str = "NFC is not available on this device";
const NOTICE_SCAN_FAILED: &str = "Could not read the tag. Try again.";

/// The fallible part of a scan: request a session, wait for a tag and
/// decode its first record. `Ok(None)` is a tag with no readable record.
/// Session release is NOT done here; the caller releases unconditionally.
async fn read_scanned_text() -> Result<Option<String>, String> {
    nfc::request_session("ndef").await?;
    let tag = nfc::read_tag().await?;
    match tag.records.first() {
        Some(record) => nfc::decode_text_payload(&record.payload).await.map(Some),
        None => Ok(None),
    }
}

#[component]
pub fn CardList() -> impl IntoView {
    let (cards, set_cards) = signal(vec![Card::seed(1)]);
    let (next_id, set_next_id) = signal(2u32);
    let (nfc_available, set_nfc_available) = signal(false);
    let (scan_open, set_scan_open) = signal(false);
    let (scan_busy, set_scan_busy) = signal(false);
    let (notice, set_notice) = signal::<Option<String>>(None);

    // Capability check, once on mount. Unsupported hardware is a
    // recoverable condition: the list itself keeps working.
    Effect::new(move |prev: Option<()>| {
        if prev.is_some() {
            return;
        }
        spawn_local(async move {
            match nfc::is_supported().await {
                Ok(true) => {
                    if let Err(e) = nfc::start().await {
                        web_sys::console::log_1(&format!("[NFC] start failed: {}", e).into());
                        return;
                    }
                    set_nfc_available.set(true);
                }
                Ok(false) => {}
                Err(e) => {
                    web_sys::console::log_1(&format!("[NFC] capability check failed: {}", e).into());
                }
            }
        });
    });

    let delete_card = move |id: u32| {
        set_cards.update(|cards| remove_card(cards, id));
    };

    // Scan trigger: without hardware support this only surfaces the
    // notice and never opens the dialog.
    let initiate_scan = move |_| {
        if !nfc_available.get() {
            set_notice.set(Some(NOTICE_NFC_UNAVAILABLE.to_string()));
            return;
        }
        set_scan_open.set(true);
    };

    // User confirmed the scan. Serialized: a request while one is in
    // flight is ignored. The session is released and the dialog closed
    // on every exit path, success or failure.
    let perform_scan = move |_: ()| {
        if scan_busy.get_untracked() {
            return;
        }
        set_scan_busy.set(true);
        spawn_local(async move {
            let outcome = read_scanned_text().await;

            let _ = nfc::cancel_session().await;
            set_scan_open.set(false);
            set_scan_busy.set(false);

            match outcome {
                Ok(payload) => {
                    let mut counter = next_id.get_untracked();
                    let id = allocate_id(&mut counter);
                    set_next_id.set(counter);
                    set_cards.update(|cards| cards.push(Card::scanned(id, payload)));
                }
                Err(e) => {
                    web_sys::console::log_1(&format!("[NFC] scan failed: {}", e).into());
                    set_notice.set(Some(NOTICE_SCAN_FAILED.to_string()));
                }
            }
        });
    };

    view! {
        <div class="card-list">
            <Notice message=notice set_message=set_notice />

            <For
                each=move || cards.get()
                key=|card| card.id
                children=move |card| {
                    view! { <CardItem card=card on_delete=delete_card /> }
                }
            />

            <button class="add-card-btn" on:click=initiate_scan>
                "+ Add card"
            </button>

            <ScanDialog
                open=scan_open
                scanning=scan_busy
                on_confirm=perform_scan
                on_dismiss=move |_: ()| set_scan_open.set(false)
            />
        </div>
    }
}
