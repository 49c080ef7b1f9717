//! Declarative enter/exit transitions.
//!
//! A transition is a descriptor (delay + duration) rendered into a CSS
//! `transition` value; the browser's animation engine interprets it. The
//! only imperative part is choreography: waiting out an exit before
//! removing a node, and letting a freshly mounted node paint hidden before
//! fading it in.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Target style change after `delay_ms`, played over `duration_ms`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transition {
    pub delay_ms: u32,
    pub duration_ms: u32,
}

impl Transition {
    pub const fn new(delay_ms: u32, duration_ms: u32) -> Self {
        Self {
            delay_ms,
            duration_ms,
        }
    }

    /// CSS `transition` value animating `property`.
    pub fn css(&self, property: &str) -> String {
        format!("{} {}ms ease {}ms", property, self.duration_ms, self.delay_ms)
    }

    pub const fn total_ms(&self) -> u32 {
        self.delay_ms + self.duration_ms
    }
}

/// Section list enter: brief delay, then fade in.
pub const SECTION_ENTER: Transition = Transition::new(150, 200);
/// Section list exit: immediate, faster than enter.
pub const SECTION_EXIT: Transition = Transition::new(0, 120);
/// Highlight overlays fade in with a short delay on mount.
pub const HIGHLIGHT_ENTER: Transition = Transition::new(150, 200);
/// Highlight overlays fade out on group deactivation.
pub const HIGHLIGHT_EXIT: Transition = Transition::new(0, 120);
/// Smooth reflow of band geometry changes.
pub const HIGHLIGHT_RESIZE: Transition = Transition::new(0, 200);
/// Mobile drawer close, during which the sidebar freezes its inputs.
pub const OVERLAY_CLOSE: Transition = Transition::new(0, 250);

/// Fades children in when `when` turns true and fades them out before
/// removing them. An exit interrupting an in-flight enter (or the reverse)
/// supersedes it: the removal timer re-checks intent before tearing down,
/// so rapid toggling settles on the latest state instead of queueing.
#[component]
pub fn Fade(
    when: Signal<bool>,
    #[prop(default = SECTION_ENTER)] enter: Transition,
    #[prop(default = SECTION_EXIT)] exit: Transition,
    children: ChildrenFn,
) -> impl IntoView {
    let mounted = RwSignal::new(false);
    let visible = RwSignal::new(false);

    Effect::new(move || {
        if when.get() {
            mounted.set(true);
            spawn_local(async move {
                // let the hidden state paint before flipping, so the
                // opacity change actually transitions
                TimeoutFuture::new(10).await;
                if when.get_untracked() {
                    visible.set(true);
                }
            });
        } else {
            visible.set(false);
            let linger = exit.total_ms();
            spawn_local(async move {
                TimeoutFuture::new(linger).await;
                if !when.get_untracked() {
                    mounted.set(false);
                }
            });
        }
    });

    view! {
        <Show when=move || mounted.get()>
            <div
                class="fade"
                class:fade-visible=move || visible.get()
                style:opacity=move || if visible.get() { "1" } else { "0" }
                style:transition=move || {
                    let t = if visible.get() { enter } else { exit };
                    t.css("opacity")
                }
            >
                {children()}
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_value_carries_duration_and_delay() {
        let t = Transition::new(150, 200);
        assert_eq!(t.css("opacity"), "opacity 200ms ease 150ms");
        assert_eq!(t.total_ms(), 350);
    }

    #[test]
    fn test_exit_is_faster_than_enter() {
        assert!(SECTION_EXIT.total_ms() < SECTION_ENTER.total_ms());
        assert!(HIGHLIGHT_EXIT.total_ms() < HIGHLIGHT_ENTER.total_ms());
    }
}
