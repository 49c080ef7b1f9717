//! The documentation navigation sidebar.

use leptos::prelude::*;

use crate::components::nav_group::NavGroup;
use crate::config;
use crate::nav::active::active_group_link;
use crate::nav::highlight::HighlightMetrics;
use crate::state::{NavSnapshot, OverlayContext, ViewState, hold_while};

/// Hierarchical link list over the static navigation tree, with
/// active-link highlighting driven by the injected [`ViewState`].
///
/// Render order: narrow-layout top links, the groups in content order,
/// then the bottom-pinned call-to-action. Inside a closing overlay (see
/// [`OverlayContext`]) the rendered state is frozen until the overlay is
/// gone.
#[component]
pub fn NavigationSidebar(
    view_state: ViewState,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let tree = config::navigation();
    let metrics = HighlightMetrics::from_root_font();

    let live = view_state.snapshot();
    let view = match use_context::<OverlayContext>() {
        Some(overlay) => hold_while(overlay.closing, live.into()),
        None => live.into(),
    };

    // Resolved once over the whole tree; a duplicated path can then only
    // activate its first occurrence.
    let active = Memo::new(move |_| {
        view.with(|v: &NavSnapshot| active_group_link(&config::navigation().groups, &v.path))
    });

    let nav_class = if class.is_empty() {
        "docs-nav".to_string()
    } else {
        format!("docs-nav {class}")
    };

    view! {
        <nav class=nav_class aria-label="Documentation">
            <ul class="docs-nav-top mobile-only">
                {tree
                    .top_links
                    .iter()
                    .map(|link| {
                        view! {
                            <li>
                                <a class="nav-link" href=link.path.clone()>
                                    {link.title.clone()}
                                </a>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <ul class="docs-nav-groups">
                {tree
                    .groups
                    .iter()
                    .enumerate()
                    .map(|(gi, group)| {
                        let active_in_group = Signal::derive(move || {
                            active.get().and_then(|(g, l)| (g == gi).then_some(l))
                        });
                        view! {
                            <NavGroup
                                group=group.clone()
                                view=view
                                metrics=metrics
                                active_index=active_in_group
                            />
                        }
                    })
                    .collect_view()}
            </ul>
            {tree
                .cta
                .as_ref()
                .map(|cta| {
                    view! {
                        <div class="docs-nav-cta mobile-only">
                            <a class="docs-nav-cta-link" href=cta.path.clone()>
                                {cta.title.clone()}
                            </a>
                        </div>
                    }
                })}
        </nav>
    }
}
