//! Scan Dialog Component
//!
//! Confirmation surface shown before an NFC scan is started.

use leptos::prelude::*;

#[component]
pub fn ScanDialog(
    open: ReadSignal<bool>,
    scanning: ReadSignal<bool>,
    #[prop(into)] on_confirm: Callback<()>,
    #[prop(into)] on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop">
                <div class="modal scan-dialog">
                    <p class="modal-text">
                        {move || if scanning.get() {
                            "Hold the tag near the device..."
                        } else {
                            "Scan an NFC tag to add a card?"
                        }}
                    </p>
                    <div class="modal-actions">
                        <button
                            class="confirm-btn"
                            disabled=move || scanning.get()
                            on:click=move |_| on_confirm.run(())
                        >
                            "Scan"
                        </button>
                        <button
                            class="cancel-btn"
                            disabled=move || scanning.get()
                            on:click=move |_| on_dismiss.run(())
                        >
                            "Cancel"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
