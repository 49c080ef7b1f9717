//! Application shell wiring the sidebar to host-owned view state.
//!
//! Routing and section observation belong to the host site; this shell
//! owns the [`ViewState`] store they would feed and renders both
//! navigation surfaces: the persistent desktop sidebar and the mobile
//! drawer with its close-time state freeze.

use gloo_timers::future::TimeoutFuture;
use leptos::context::Provider;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{NavigationSidebar, OVERLAY_CLOSE};
use crate::dom;
use crate::state::{OverlayContext, ViewState};

#[component]
pub fn App() -> impl IntoView {
    // Route and section state, owned here and mutated by the host's
    // observers. The sidebar only reads it.
    let view_state = ViewState::new(&dom::current_path());

    // Mobile drawer state. While `closing` is true the drawer's sidebar
    // freezes its inputs so the exit animation does not jump.
    let drawer_open = RwSignal::new(false);
    let drawer_closing = RwSignal::new(false);
    let overlay = OverlayContext {
        closing: drawer_closing.into(),
    };

    let close_drawer = move || {
        drawer_closing.set(true);
        spawn_local(async move {
            TimeoutFuture::new(OVERLAY_CLOSE.total_ms()).await;
            drawer_open.set(false);
            drawer_closing.set(false);
        });
    };

    let on_menu_toggle = move |_| {
        if drawer_closing.get_untracked() {
            return;
        }
        if drawer_open.get_untracked() {
            close_drawer();
        } else {
            drawer_open.set(true);
        }
    };

    view! {
        <div class="docs-layout">
            <header class="docs-header">
                <button class="menu-toggle mobile-only" on:click=on_menu_toggle>
                    "Menu"
                </button>
                <span class="docs-wordmark">"Relay Docs"</span>
            </header>

            <aside class="docs-sidebar">
                <NavigationSidebar view_state=view_state />
            </aside>

            <Show when=move || drawer_open.get()>
                <div
                    class="docs-drawer"
                    class:docs-drawer-closing=move || drawer_closing.get()
                    style:transition=OVERLAY_CLOSE.css("transform")
                >
                    <Provider value=overlay>
                        <NavigationSidebar view_state=view_state class="docs-nav-drawer" />
                    </Provider>
                </div>
            </Show>

            <main class="docs-content">
                // the host site renders the article here; the sidebar only
                // needs its route and section state
            </main>
        </div>
    }
}
