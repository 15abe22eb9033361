//! Header component

use leptos::prelude::*;
use vault_shared::{classes, MENU_ICON, TOGGLE_LABEL, VAULT_BRANDING};

/// Header bar with the sidebar toggle on the left and the logo lockup on the right.
///
/// Stateless: the callback is only captured by the click handler, never stored.
#[component]
pub fn Header(
    /// Invoked with no arguments when the toggle button is clicked
    #[prop(optional)]
    on_toggle_sidebar: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <header class=classes::HEADER>
            <div class=classes::HEADER_CORNER>
                <button
                    aria-label=TOGGLE_LABEL
                    on:click=move |_| notify_toggle(on_toggle_sidebar)
                >
                    <svg
                        xmlns=MENU_ICON.xmlns
                        width=MENU_ICON.width
                        height=MENU_ICON.height
                        viewBox=MENU_ICON.view_box
                        fill=MENU_ICON.fill
                    >
                        <path d=MENU_ICON.path />
                    </svg>
                </button>
            </div>
            <div class=classes::HEADER_LOCKUP>
                <img
                    src=VAULT_BRANDING.logo_src
                    width=VAULT_BRANDING.logo_width.to_string()
                />
                <span class=classes::TITLE>{VAULT_BRANDING.title}</span>
            </div>
        </header>
    }
}

/// Run the toggle callback once, or do nothing when the caller supplied none.
pub fn notify_toggle(on_toggle_sidebar: Option<Callback<()>>) {
    if let Some(handler) = on_toggle_sidebar {
        handler.run(());
    }
}


#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn host_element() -> web_sys::HtmlElement {
        let document = document();
        let host = document
            .create_element("div")
            .expect("create host")
            .unchecked_into::<web_sys::HtmlElement>();
        document
            .body()
            .expect("document body")
            .append_child(&host)
            .expect("attach host");
        host
    }

    fn click_toggle(host: &web_sys::HtmlElement) {
        host.query_selector("button")
            .expect("query button")
            .expect("button rendered")
            .unchecked_into::<web_sys::HtmlElement>()
            .click();
    }

    fn counter() -> Arc<AtomicUsize> {
        Arc::new(AtomicUsize::new(0))
    }

    #[wasm_bindgen_test]
    fn click_invokes_callback_once() {
        let host = host_element();
        let calls = counter();
        let counted = Arc::clone(&calls);

        let _handle = leptos::mount::mount_to(host.clone(), move || {
            let cb = Callback::new(move |_| {
                counted.fetch_add(1, Ordering::SeqCst);
            });
            view! { <Header on_toggle_sidebar=cb /> }
        });

        click_toggle(&host);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[wasm_bindgen_test]
    fn click_without_callback_is_noop() {
        let host = host_element();
        let _handle = leptos::mount::mount_to(host.clone(), || view! { <Header /> });

        click_toggle(&host);
        assert_eq!(host.query_selector_all("img").expect("query img").length(), 1);
    }

    #[wasm_bindgen_test]
    fn remount_with_new_callback_drops_old_target() {
        let host = host_element();
        let first = counter();
        let second = counter();

        let counted = Arc::clone(&first);
        let handle = leptos::mount::mount_to(host.clone(), move || {
            let cb = Callback::new(move |_| {
                counted.fetch_add(1, Ordering::SeqCst);
            });
            view! { <Header on_toggle_sidebar=cb /> }
        });
        click_toggle(&host);
        drop(handle);

        let counted = Arc::clone(&second);
        let _handle = leptos::mount::mount_to(host.clone(), move || {
            let cb = Callback::new(move |_| {
                counted.fetch_add(1, Ordering::SeqCst);
            });
            view! { <Header on_toggle_sidebar=cb /> }
        });
        click_toggle(&host);
        click_toggle(&host);

        assert_eq!(first.load(Ordering::SeqCst), 1);
        assert_eq!(second.load(Ordering::SeqCst), 2);
    }
}
