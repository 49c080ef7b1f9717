//! Navigation content model: ordered groups of titled links.

use serde::Deserialize;

/// A single navigation link.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Link {
    pub title: String,
    pub path: String,
    /// Optional short badge label ("new", "beta").
    #[serde(default)]
    pub tag: Option<String>,
}

/// A titled collection of links rendered together under one heading.
/// Link order is display order.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Group {
    pub title: String,
    pub links: Vec<Link>,
}

/// The whole sidebar content tree.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct NavTree {
    /// Standalone links shown only in the narrow layout, above the groups.
    #[serde(default)]
    pub top_links: Vec<Link>,
    #[serde(default)]
    pub groups: Vec<Group>,
    /// Call-to-action pinned to the bottom in the narrow layout.
    #[serde(default)]
    pub cta: Option<Link>,
}

impl NavTree {
    /// First group link matching `path`, scanning groups in display order.
    /// Duplicate paths resolve to the earliest occurrence.
    pub fn find_path(&self, path: &str) -> Option<&Link> {
        self.groups
            .iter()
            .flat_map(|g| g.links.iter())
            .find(|l| l.path == path)
    }

    /// Total number of group links.
    pub fn link_count(&self) -> usize {
        self.groups.iter().map(|g| g.links.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(title: &str, path: &str) -> Link {
        Link {
            title: title.to_string(),
            path: path.to_string(),
            tag: None,
        }
    }

    #[test]
    fn test_find_path_scans_groups_in_order() {
        let tree = NavTree {
            top_links: vec![],
            groups: vec![
                Group {
                    title: "First".to_string(),
                    links: vec![link("A", "/a"), link("B", "/b")],
                },
                Group {
                    title: "Second".to_string(),
                    links: vec![link("C", "/c")],
                },
            ],
            cta: None,
        };

        assert_eq!(tree.find_path("/c").map(|l| l.title.as_str()), Some("C"));
        assert!(tree.find_path("/missing").is_none());
        assert_eq!(tree.link_count(), 3);
    }

    #[test]
    fn test_find_path_prefers_first_duplicate() {
        let tree = NavTree {
            top_links: vec![],
            groups: vec![
                Group {
                    title: "First".to_string(),
                    links: vec![link("Original", "/contacts")],
                },
                Group {
                    title: "Second".to_string(),
                    links: vec![link("Shadowed", "/contacts")],
                },
            ],
            cta: None,
        };

        assert_eq!(
            tree.find_path("/contacts").map(|l| l.title.as_str()),
            Some("Original")
        );
    }
}
