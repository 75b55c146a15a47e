//! Notice Component
//!
//! Transient error banner, auto-dismissed after a fixed delay.

use leptos::prelude::*;
use leptos::task::spawn_local;
use gloo_timers::future::TimeoutFuture;

const NOTICE_VISIBLE_MS: u32 = 4000;

#[component]
pub fn Notice(
    message: ReadSignal<Option<String>>,
    set_message: WriteSignal<Option<String>>,
) -> impl IntoView {
    // Arm an auto-dismiss timer whenever a message appears.
    Effect::new(move |_| {
        if message.get().is_some() {
            spawn_local(async move {
                TimeoutFuture::new(NOTICE_VISIBLE_MS).await;
                set_message.set(None);
            });
        }
    });

    view! {
        <Show when=move || message.get().is_some()>
            <div class="notice error" on:click=move |_| set_message.set(None)>
                {move || message.get().unwrap_or_default()}
            </div>
        </Show>
    }
}
