//! Active-link resolution against the current route path.

use super::tree::Group;

/// Index of the first link in `group` whose path equals `current_path`.
///
/// `None` means the group is not active for this route. Duplicate paths
/// within a group resolve to the earliest link.
pub fn active_link_index(group: &Group, current_path: &str) -> Option<usize> {
    group.links.iter().position(|l| l.path == current_path)
}

/// Whether `group` contains a link for `current_path`.
pub fn is_group_active(group: &Group, current_path: &str) -> bool {
    active_link_index(group, current_path).is_some()
}

/// `(group index, link index)` of the first link across all groups whose
/// path equals `current_path`.
///
/// Resolving once over the whole tree is what keeps a duplicated path from
/// letting two groups claim the active state at the same time.
pub fn active_group_link(groups: &[Group], current_path: &str) -> Option<(usize, usize)> {
    groups
        .iter()
        .enumerate()
        .find_map(|(gi, g)| active_link_index(g, current_path).map(|li| (gi, li)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nav::tree::Link;

    fn group(links: &[(&str, &str)]) -> Group {
        Group {
            title: "Javascript".to_string(),
            links: links
                .iter()
                .map(|(title, path)| Link {
                    title: title.to_string(),
                    path: path.to_string(),
                    tag: None,
                })
                .collect(),
        }
    }

    #[test]
    fn test_second_link_active() {
        let g = group(&[("词法环境", "/"), ("问题摘要", "/quickstart")]);

        assert!(is_group_active(&g, "/quickstart"));
        assert_eq!(active_link_index(&g, "/quickstart"), Some(1));
    }

    #[test]
    fn test_unknown_path_matches_nothing() {
        let g = group(&[("词法环境", "/"), ("问题摘要", "/quickstart")]);

        assert!(!is_group_active(&g, "/not-a-real-path"));
        assert_eq!(active_link_index(&g, "/not-a-real-path"), None);
    }

    #[test]
    fn test_duplicate_paths_resolve_to_first() {
        let g = group(&[("One", "/contacts"), ("Two", "/contacts")]);

        assert_eq!(active_link_index(&g, "/contacts"), Some(0));
    }

    #[test]
    fn test_empty_group_is_never_active() {
        let g = group(&[]);

        assert!(!is_group_active(&g, "/"));
        assert_eq!(active_link_index(&g, "/"), None);
    }

    #[test]
    fn test_cross_group_duplicate_resolves_to_first_group() {
        let groups = vec![
            group(&[("One", "/a")]),
            group(&[("Two", "/contacts")]),
            group(&[("Three", "/contacts")]),
        ];

        assert_eq!(active_group_link(&groups, "/contacts"), Some((1, 0)));
        assert_eq!(active_group_link(&groups, "/a"), Some((0, 0)));
        assert_eq!(active_group_link(&groups, "/not-a-real-path"), None);
    }
}
