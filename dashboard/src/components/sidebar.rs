//! Sidebar shell

use leptos::prelude::*;

/// Empty sidebar panel; only reflects the open state owned by the caller
#[component]
pub fn Sidebar(sidebar_open: ReadSignal<bool>) -> impl IntoView {
    view! {
        <aside
            class="sidebar"
            class:sidebar-open=move || sidebar_open.get()
            aria-hidden=move || (!sidebar_open.get()).to_string()
        ></aside>
    }
}
