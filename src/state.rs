//! Externally owned view state and the snapshot plumbing the sidebar
//! reads it through.
//!
//! The host's route and scroll observers own and mutate these signals; the
//! navigation component only ever reads consistent snapshots of them.

use leptos::prelude::*;

/// An in-page heading of the currently displayed document.
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub title: String,
    /// Optional short badge label ("new", "beta").
    pub tag: Option<String>,
}

/// Reactive store fed by the host. Copyable handle, shared signals.
#[derive(Clone, Copy)]
pub struct ViewState {
    pub current_path: RwSignal<String>,
    pub sections: RwSignal<Vec<Section>>,
    pub visible_section_ids: RwSignal<Vec<String>>,
}

impl ViewState {
    pub fn new(initial_path: &str) -> Self {
        Self {
            current_path: RwSignal::new(initial_path.to_string()),
            sections: RwSignal::new(Vec::new()),
            visible_section_ids: RwSignal::new(Vec::new()),
        }
    }

    /// One consistent snapshot of route and section state. Every render
    /// reads this memo instead of the individual signals, so an update
    /// arriving mid-flight can never tear a frame.
    pub fn snapshot(self) -> Memo<NavSnapshot> {
        Memo::new(move |_| NavSnapshot {
            path: self.current_path.get(),
            sections: self.sections.get(),
            visible_ids: self.visible_section_ids.get(),
        })
    }
}

/// The inputs of one render, captured together.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavSnapshot {
    pub path: String,
    pub sections: Vec<Section>,
    pub visible_ids: Vec<String>,
}

/// Marks the sidebar as hosted inside a transient overlay (mobile drawer).
/// While `closing` is true the sidebar freezes its inputs so the exit
/// animation does not jump under a concurrent route or scroll change.
#[derive(Clone, Copy)]
pub struct OverlayContext {
    pub closing: Signal<bool>,
}

/// A signal that follows `live` until `frozen` turns true, then holds the
/// last sampled value until `frozen` releases.
pub fn hold_while<T>(frozen: Signal<bool>, live: Signal<T>) -> Signal<T>
where
    T: Clone + PartialEq + Send + Sync + 'static,
{
    let held = RwSignal::new(live.get_untracked());
    Effect::new(move || {
        let value = live.get();
        if !frozen.get() {
            held.set(value);
        }
    });
    held.into()
}
