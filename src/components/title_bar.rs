//! Title Bar Component
//!
//! Static chrome: status-bar spacer and the app title.

use leptos::prelude::*;

#[component]
pub fn TitleBar() -> impl IntoView {
    view! {
        <header class="title-bar">
            <div class="status-bar-spacer"></div>
            <h1 class="app-title">"Wallet"</h1>
        </header>
    }
}
