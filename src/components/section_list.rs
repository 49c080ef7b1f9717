//! Expandable list of the active link's in-page sections.

use leptos::prelude::*;

use crate::components::transition::{Fade, SECTION_ENTER, SECTION_EXIT};
use crate::state::NavSnapshot;

/// Sub-links for the active document's sections, shown only under the link
/// matching the current path. Each section links to its anchor on the
/// parent page. Renders nothing when the document has no sections.
#[component]
pub fn SectionList(
    /// True while the owning link is the active one.
    when: Signal<bool>,
    view: Signal<NavSnapshot>,
    parent_path: String,
) -> impl IntoView {
    let parent = StoredValue::new(parent_path);
    let show = Signal::derive(move || when.get() && view.with(|v| !v.sections.is_empty()));

    view! {
        <Fade when=show enter=SECTION_ENTER exit=SECTION_EXIT>
            <ul class="nav-section-list">
                {move || {
                    view.with(|v| {
                        v.sections
                            .iter()
                            .map(|section| {
                                let href = format!(
                                    "{}#{}",
                                    parent.with_value(|p| p.clone()),
                                    section.id
                                );
                                let tag = section.tag.clone();
                                view! {
                                    <li class="nav-section-item">
                                        <a class="nav-section-link" href=href>
                                            <span>{section.title.clone()}</span>
                                            {tag.map(|t| view! {
                                                <span class="nav-tag">{t}</span>
                                            })}
                                        </a>
                                    </li>
                                }
                            })
                            .collect_view()
                    })
                }}
            </ul>
        </Fade>
    }
}
