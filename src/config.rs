//! Navigation content loading and validation.
//!
//! The tree is content, not logic: an editable JSON file bundled into the
//! binary and parsed once at first use.

use std::collections::HashSet;
use std::sync::OnceLock;

use leptos::logging::{error, log, warn};

use crate::error::{NavError, Result};
use crate::nav::tree::NavTree;

const NAVIGATION_JSON: &str = include_str!("../assets/navigation.json");

/// Parse a navigation tree from JSON and run load-time checks.
pub fn parse(json: &str) -> Result<NavTree> {
    let tree: NavTree = serde_json::from_str(json)?;
    validate(&tree)?;
    Ok(tree)
}

/// Shape checks. Only an entirely empty tree is an error; content-quality
/// problems (duplicate paths, empty groups) are warnings because rendering
/// degrades deterministically: the first occurrence of a path wins.
fn validate(tree: &NavTree) -> Result<()> {
    if tree.groups.is_empty() && tree.top_links.is_empty() {
        return Err(NavError::Invalid("navigation tree has no content".to_string()));
    }

    let mut seen = HashSet::new();
    for group in &tree.groups {
        if group.links.is_empty() {
            warn!("navigation: group {:?} has no links", group.title);
        }
        for link in &group.links {
            if !seen.insert(link.path.as_str()) {
                warn!(
                    "navigation: duplicate path {:?}; first occurrence wins",
                    link.path
                );
            }
        }
    }

    Ok(())
}

/// The bundled navigation tree, parsed once. A malformed bundle logs the
/// failure and yields an empty tree; the sidebar then renders an empty nav
/// rather than failing the whole page.
pub fn navigation() -> &'static NavTree {
    static TREE: OnceLock<NavTree> = OnceLock::new();
    TREE.get_or_init(|| match parse(NAVIGATION_JSON) {
        Ok(tree) => {
            log!(
                "navigation: {} groups, {} links",
                tree.groups.len(),
                tree.link_count()
            );
            tree
        }
        Err(e) => {
            error!("navigation: {}", e);
            NavTree::default()
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_bundled_navigation() {
        let tree = parse(NAVIGATION_JSON).unwrap();

        assert_eq!(tree.groups.len(), 3);
        assert_eq!(tree.top_links.len(), 3);
        assert!(tree.cta.is_some());
        assert!(tree.link_count() >= 10);
    }

    #[test]
    fn test_missing_tag_is_none() {
        let tree = parse(NAVIGATION_JSON).unwrap();
        let intro = tree.find_path("/introduction").unwrap();
        let attachments = tree.find_path("/attachments").unwrap();

        assert_eq!(intro.tag, None);
        assert_eq!(attachments.tag.as_deref(), Some("new"));
    }

    #[test]
    fn test_duplicate_paths_parse_and_resolve_to_first() {
        let json = r#"{
            "groups": [
                { "title": "A", "links": [
                    { "title": "Contacts", "path": "/contacts" },
                    { "title": "Messages", "path": "/messages" }
                ]},
                { "title": "B", "links": [
                    { "title": "Contacts again", "path": "/contacts" }
                ]}
            ]
        }"#;

        let tree = parse(json).unwrap();
        assert_eq!(
            tree.find_path("/contacts").map(|l| l.title.as_str()),
            Some("Contacts")
        );
    }

    #[test]
    fn test_empty_tree_is_rejected() {
        assert!(parse("{}").is_err());
    }

    #[test]
    fn test_garbage_is_a_parse_error() {
        assert!(matches!(parse("not json"), Err(NavError::Parse(_))));
    }
}
