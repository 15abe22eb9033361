//! ==============================================================================
//! lib.rs - Vault Dashboard
//! ==============================================================================
//!
//! purpose:
//!     leptos wasm shell around the vault page header. the app owns the
//!     sidebar visibility state and hands the header a callback to flip it.
//!
//! architecture:
//!     - leptos csr (client-side rendering)
//!     - compiled to wasm, runs in browser
//!     - branding and class names come from the shared crate
//!     - styles and logo are static files served next to index.html
//!
//! ==============================================================================

use leptos::logging::log;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use vault_shared::VAULT_BRANDING;
use wasm_bindgen::prelude::*;

mod components;

use components::{Header, Sidebar};

// ==============================================================================
// main entry point
// ==============================================================================

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}

// ==============================================================================
// app component
// ==============================================================================

#[component]
fn App() -> impl IntoView {
    provide_meta_context();

    // sidebar visibility lives here, not in the header
    let (sidebar_open, set_sidebar_open) = signal(false);
    let on_toggle_sidebar = Callback::new(move |_| {
        toggle_sidebar(sidebar_open, set_sidebar_open);
    });

    view! {
        <Title text=VAULT_BRANDING.title />
        <Header on_toggle_sidebar=on_toggle_sidebar />
        <Sidebar sidebar_open=sidebar_open />
    }
}

/// Flip the sidebar state and return the new value.
fn toggle_sidebar(sidebar_open: ReadSignal<bool>, set_sidebar_open: WriteSignal<bool>) -> bool {
    set_sidebar_open.update(|open| *open = !*open);
    let open = sidebar_open.get_untracked();
    log!("sidebar open: {}", open);
    open
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_sidebar_flips_state() {
        let owner = Owner::new();
        owner.with(|| {
            let (sidebar_open, set_sidebar_open) = signal(false);

            assert!(toggle_sidebar(sidebar_open, set_sidebar_open));
            assert!(sidebar_open.get_untracked());
            assert!(!toggle_sidebar(sidebar_open, set_sidebar_open));
            assert!(!sidebar_open.get_untracked());
        });
    }
}
