//! Wallet Frontend App
//!
//! Root view: static chrome plus the card list.

use leptos::prelude::*;

use crate::components::{CardList, TitleBar};

#[component]
pub fn App() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TitleBar />
            <main class="main-content">
                <CardList />
            </main>
        </div>
    }
}
