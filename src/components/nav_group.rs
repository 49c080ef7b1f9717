//! One navigation group: heading, link rows, and the two highlight
//! overlays (visible-section band, active-link marker).

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::section_list::SectionList;
use crate::components::transition::{HIGHLIGHT_ENTER, HIGHLIGHT_EXIT, HIGHLIGHT_RESIZE};
use crate::nav::highlight::{
    BandRect, HighlightMetrics, band_rect, first_visible_index, marker_height, marker_top,
};
use crate::nav::tree::Group;
use crate::state::NavSnapshot;

#[component]
pub fn NavGroup(
    group: Group,
    view: Signal<NavSnapshot>,
    metrics: HighlightMetrics,
    /// Index of this group's active link, resolved by the sidebar over the
    /// whole tree so duplicated paths activate only one group.
    active_index: Signal<Option<usize>>,
) -> impl IntoView {
    let group = StoredValue::new(group);
    let title = group.with_value(|g| g.title.clone());

    // Overlay choreography: `present` keeps the nodes in the DOM through
    // the fade-out, `settled` is the faded-in, full-extent state. A timer
    // that fires after the state changed again does nothing.
    let present = RwSignal::new(false);
    let settled = RwSignal::new(false);

    Effect::new(move || {
        if active_index.get().is_some() {
            present.set(true);
            spawn_local(async move {
                // paint hidden first so the fade-in transitions
                TimeoutFuture::new(10).await;
                if active_index.get_untracked().is_some() {
                    settled.set(true);
                }
            });
        } else {
            settled.set(false);
            spawn_local(async move {
                TimeoutFuture::new(HIGHLIGHT_EXIT.total_ms()).await;
                if active_index.get_untracked().is_none() {
                    present.set(false);
                }
            });
        }
    });

    // Geometry holds its last value while the fade-out plays, otherwise a
    // deactivated group would snap to the top mid-fade.
    let band = Memo::new(move |prev: Option<&BandRect>| match active_index.get() {
        Some(idx) => view.with(|v| {
            let first = first_visible_index(&v.sections, &v.visible_ids);
            band_rect(metrics, idx, first, v.visible_ids.len(), settled.get())
        }),
        None => prev.copied().unwrap_or(BandRect {
            top: 0.0,
            height: metrics.row_height,
        }),
    });

    let marker = Memo::new(move |prev: Option<&f64>| match active_index.get() {
        Some(idx) => marker_top(metrics, idx),
        None => prev.copied().unwrap_or(metrics.marker_offset),
    });

    let overlay_transition = move || {
        let fade = if settled.get() {
            HIGHLIGHT_ENTER
        } else {
            HIGHLIGHT_EXIT
        };
        format!(
            "{}, {}, {}",
            HIGHLIGHT_RESIZE.css("top"),
            HIGHLIGHT_RESIZE.css("height"),
            fade.css("opacity")
        )
    };

    let rows = group
        .with_value(|g| g.links.clone())
        .into_iter()
        .enumerate()
        .map(|(i, link)| {
            let is_active = Signal::derive(move || active_index.get() == Some(i));
            let parent_path = link.path.clone();
            view! {
                <li class="nav-item">
                    <a
                        class="nav-link"
                        class:nav-link-active=move || is_active.get()
                        href=link.path.clone()
                    >
                        <span>{link.title.clone()}</span>
                        {link.tag.clone().map(|t| view! { <span class="nav-tag">{t}</span> })}
                    </a>
                    <SectionList when=is_active view=view parent_path=parent_path />
                </li>
            }
        })
        .collect_view();

    view! {
        <li class="nav-group">
            <h5 class="nav-group-title">{title}</h5>
            <div class="nav-group-body">
                <Show when=move || present.get()>
                    <div
                        class="nav-highlight-band"
                        style:top=move || format!("{}px", band.get().top)
                        style:height=move || format!("{}px", band.get().height)
                        style:opacity=move || if settled.get() { "1" } else { "0" }
                        style:transition=overlay_transition
                    ></div>
                    <div
                        class="nav-marker"
                        style:top=move || format!("{}px", marker.get())
                        style:height=format!("{}px", marker_height(metrics))
                        style:opacity=move || if settled.get() { "1" } else { "0" }
                        style:transition=overlay_transition
                    ></div>
                </Show>
                <ul class="nav-links">{rows}</ul>
            </div>
        </li>
    }
}
