//! Card Item Component
//!
//! One collapsible wallet card with an inline delete-confirmation modal.
//! Stateless with respect to the collection: deletion is reported upward
//! by id via the `on_delete` callback.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;

use crate::models::Card;

/// Collapsed/expanded card heights in px, and the transition duration.
/// The CSS transition animates between the two extents; only the
/// expanded boolean is observable from outside.
const COLLAPSED_HEIGHT_PX: u32 = 72;
const EXPANDED_HEIGHT_PX: u32 = 220;
const EXPAND_ANIM_MS: u32 = 250;

/// Duration of the fade/collapse played before a confirmed delete is
/// reported upward.
const FADE_OUT_MS: u32 = 300;

#[component]
pub fn CardItem(
    card: Card,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let (confirming, set_confirming) = signal(false);
    let (removing, set_removing) = signal(false);

    let id = card.id;
    let title = card.title.clone();
    let details = card.details.clone();
    let nfc_data = card.nfc_data.clone();

    let card_style = move || {
        let height = if expanded.get() { EXPANDED_HEIGHT_PX } else { COLLAPSED_HEIGHT_PX };
        format!(
            "height: {}px; transition: height {}ms ease, opacity {}ms ease;",
            height, EXPAND_ANIM_MS, FADE_OUT_MS
        )
    };

    // Play the fade/collapse to completion, then report deletion upward
    // and close the confirmation surface.
    let confirm_delete = move |_| {
        set_removing.set(true);
        spawn_local(async move {
            TimeoutFuture::new(FADE_OUT_MS).await;
            on_delete.run(id);
            set_confirming.set(false);
        });
    };

    view! {
        <div
            class=move || if removing.get() { "card removing" } else { "card" }
            style=card_style
            on:click=move |_| set_expanded.update(|e| *e = !*e)
        >
            <div class="card-header">
                <span class="card-title">{title}</span>
                <button
                    class="card-delete-btn"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        set_confirming.set(true);
                    }
                >
                    "×"
                </button>
            </div>

            <Show when=move || expanded.get()>
                <div class="card-body">
                    <p class="card-details">{details.clone()}</p>
                    {nfc_data.clone().map(|data| view! {
                        <p class="card-nfc-data">"Tag data: " {data}</p>
                    })}
                </div>
            </Show>

            <Show when=move || confirming.get()>
                <div class="modal-backdrop" on:click=move |ev| ev.stop_propagation()>
                    <div class="modal">
                        <p class="modal-text">"Delete this card?"</p>
                        <div class="modal-actions">
                            <button class="confirm-btn" on:click=confirm_delete>
                                "Delete"
                            </button>
                            <button
                                class="cancel-btn"
                                on:click=move |ev| {
                                    ev.stop_propagation();
                                    set_confirming.set(false);
                                }
                            >
                                "Cancel"
                            </button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
