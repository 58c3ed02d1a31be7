//! URL path building for route segments
//!
//! All functions are **pure**: given same input, always produce same output with no side effects.

pub mod hierarchy;
pub use hierarchy::ParentNames;

/// Builds the URL path a route contributes
///
/// **Pure function**: `(segments, raw_segments, index) → Option<path>`
///
/// # Rules
///
/// - Index routes drop their final segment (`_index`)
/// - A segment written with a leading `_` is a pathless layout and adds nothing
/// - A segment written with a trailing `_` loses that underscore
/// - Surviving segments are joined, each with a leading `/`
///
/// Returns `None` when no segment survives.
///
/// # Examples
///
/// ```
/// use flat_routes::path::create_route_path;
///
/// let segments = ["_auth", "login"];
/// assert_eq!(create_route_path(&segments, &segments, false), Some("/login".to_string()));
///
/// let segments = ["blog", "_index"];
/// assert_eq!(create_route_path(&segments, &segments, true), Some("/blog".to_string()));
///
/// let segments = ["_index"];
/// assert_eq!(create_route_path(&segments, &segments, true), None);
/// ```
pub fn create_route_path<S: AsRef<str>>(
    segments: &[S],
    raw_segments: &[S],
    index: bool,
) -> Option<String> {
    let segments = match (index, segments.split_last()) {
        (true, Some((_, rest))) => rest,
        _ => segments,
    };

    let path = segments
        .iter()
        .zip(raw_segments)
        .map(|(segment, raw)| (segment.as_ref(), raw.as_ref()))
        .filter(|(segment, raw)| !(segment.starts_with('_') && raw.starts_with('_')))
        .map(|(segment, raw)| {
            if segment.ends_with('_') && raw.ends_with('_') {
                &segment[..segment.len() - 1]
            } else {
                segment
            }
        })
        .fold(String::new(), |mut path, segment| {
            path.push('/');
            path.push_str(segment);
            path
        });

    (!path.is_empty()).then_some(path)
}

/// Subtracts a parent's path from a child's path
///
/// The parent path is removed as a prefix (an absent parent path counts as
/// `/`), then one leading `/` is dropped. Absent child paths yield `""`.
///
/// # Examples
///
/// ```
/// use flat_routes::path::relative_route_path;
///
/// assert_eq!(relative_route_path(Some("/blog/:slug"), Some("/blog")), ":slug");
/// assert_eq!(relative_route_path(Some("/about"), None), "about");
/// assert_eq!(relative_route_path(Some("/blog"), Some("/blog")), "");
/// assert_eq!(relative_route_path(None, Some("/blog")), "");
/// ```
pub fn relative_route_path<'a>(child_path: Option<&'a str>, parent_path: Option<&str>) -> &'a str {
    let parent_len = parent_path.unwrap_or("/").len();
    let relative = child_path
        .and_then(|path| path.get(parent_len..))
        .unwrap_or("");
    relative.strip_prefix('/').unwrap_or(relative)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path_of(segments: &[&str], raw: &[&str], index: bool) -> Option<String> {
        create_route_path(segments, raw, index)
    }

    #[test]
    fn test_create_route_path_static() {
        assert_eq!(path_of(&["about"], &["about"], false).as_deref(), Some("/about"));
        assert_eq!(
            path_of(&["blog", "posts"], &["blog", "posts"], false).as_deref(),
            Some("/blog/posts")
        );
    }

    #[test]
    fn test_create_route_path_dynamic_and_splat() {
        assert_eq!(
            path_of(&["users", ":id"], &["users", "$id"], false).as_deref(),
            Some("/users/:id")
        );
        assert_eq!(path_of(&["files", "*"], &["files", "$"], false).as_deref(), Some("/files/*"));
    }

    #[test]
    fn test_create_route_path_skips_pathless_layouts() {
        assert_eq!(
            path_of(&["_auth", "login"], &["_auth", "login"], false).as_deref(),
            Some("/login")
        );
        assert_eq!(path_of(&["_auth"], &["_auth"], false), None);
    }

    #[test]
    fn test_create_route_path_keeps_escaped_underscores() {
        // `[_]auth` is a literal `_auth` segment, not a pathless layout
        assert_eq!(path_of(&["_auth"], &["[_]auth"], false).as_deref(), Some("/_auth"));
        // `users[_]` keeps its trailing underscore
        assert_eq!(path_of(&["users_"], &["users[_]"], false).as_deref(), Some("/users_"));
    }

    #[test]
    fn test_create_route_path_strips_trailing_underscore() {
        assert_eq!(
            path_of(&["posts_", "edit"], &["posts_", "edit"], false).as_deref(),
            Some("/posts/edit")
        );
    }

    #[test]
    fn test_create_route_path_index_drops_last_segment() {
        assert_eq!(
            path_of(&["blog", "_index"], &["blog", "_index"], true).as_deref(),
            Some("/blog")
        );
        assert_eq!(path_of(&["_index"], &["_index"], true), None);
        assert_eq!(path_of(&[], &[], true), None);
    }

    #[test]
    fn test_relative_route_path_pathless_parent() {
        assert_eq!(relative_route_path(Some("/login"), None), "login");
    }

    #[test]
    fn test_parent_names() {
        let names: Vec<&str> = ParentNames::new("a/b/c").collect();
        assert_eq!(names, vec!["a/b/c", "a/b", "a"]);

        let names: Vec<&str> = ParentNames::new("users").collect();
        assert_eq!(names, vec!["users"]);
    }

    #[test]
    fn test_parent_names_short_circuit() {
        let mut iter = ParentNames::new("a/b/c/d");
        let found = iter.find(|&name| name == "a/b");
        assert_eq!(found, Some("a/b"));
        assert_eq!(iter.next(), Some("a"));
        assert_eq!(iter.next(), None);
    }
}
