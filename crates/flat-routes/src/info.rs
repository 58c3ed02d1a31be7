//! Per-file route derivation: id, URL path and segments

use crate::convention::{create_flat_route_id, is_index_route, normalize_slashes};
use crate::error::Result;
use crate::path::create_route_path;
use crate::segment::get_route_segments;

/// Everything the convention derives from one route module file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteInfo {
    /// Route id relative to the routes directory, e.g. `users.$id`
    pub id: String,
    /// Absolute URL path, or `None` for pathless routes
    pub path: Option<String>,
    /// File path relative to the app directory
    pub file: String,
    /// Slash-joined logical segments, used to resolve parents
    pub(crate) name: String,
    /// Logical segments (`:id`, `*`, `lang?` ...)
    pub segments: Vec<String>,
    /// Whether this is an index route (`_index`)
    pub index: bool,
    /// Resolved parent route id; `None` attaches to the implicit root
    pub parent_id: Option<String>,
}

impl RouteInfo {
    /// Derives route info from a file path
    ///
    /// # Arguments
    ///
    /// * `app_directory` - Directory the file path is relative to
    /// * `routes_dir` - Routes subtree inside the app directory (usually `routes`)
    /// * `file_path` - Path of the route module file
    ///
    /// The parent id is left unset; [`RouteMap::build`](crate::RouteMap::build)
    /// resolves it against the other routes.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_routes::RouteInfo;
    ///
    /// let info = RouteInfo::from_file("/app", "routes", "/app/routes/users.$id.tsx").unwrap();
    /// assert_eq!(info.id, "users.$id");
    /// assert_eq!(info.path.as_deref(), Some("/users/:id"));
    /// assert_eq!(info.file, "routes/users.$id.tsx");
    /// assert!(!info.index);
    /// ```
    pub fn from_file(app_directory: &str, routes_dir: &str, file_path: &str) -> Result<Self> {
        let file = strip_dir(&normalize_slashes(file_path), &normalize_slashes(app_directory))
            .to_string();

        let route_id = create_flat_route_id(&file);
        let id = strip_dir(&route_id, &normalize_slashes(routes_dir)).to_string();

        let index = is_index_route(&id);
        let parsed = get_route_segments(&id)?;
        let path = create_route_path(&parsed.segments, &parsed.raw_segments, index);

        Ok(RouteInfo {
            name: parsed.segments.join("/"),
            id,
            path,
            file,
            segments: parsed.segments,
            index,
            parent_id: None,
        })
    }

    /// Slash-joined logical segments
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Strips `dir` and the following separator from the front of `path`
///
/// Paths outside `dir` are returned unchanged.
pub(crate) fn strip_dir<'a>(path: &'a str, dir: &str) -> &'a str {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() {
        return path.trim_start_matches('/');
    }
    match path.strip_prefix(dir) {
        Some("") => "",
        Some(rest) if rest.starts_with('/') => &rest[1..],
        _ => path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(file: &str) -> RouteInfo {
        RouteInfo::from_file("/app", "routes", &format!("/app/routes/{}", file)).unwrap()
    }

    #[test]
    fn test_flat_file() {
        let route = info("about.tsx");
        assert_eq!(route.id, "about");
        assert_eq!(route.path.as_deref(), Some("/about"));
        assert_eq!(route.file, "routes/about.tsx");
        assert_eq!(route.name(), "about");
        assert!(!route.index);
        assert_eq!(route.parent_id, None);
    }

    #[test]
    fn test_folder_route_module() {
        let route = info("blog/route.tsx");
        assert_eq!(route.id, "blog");
        assert_eq!(route.path.as_deref(), Some("/blog"));
        assert_eq!(route.file, "routes/blog/route.tsx");

        let route = info("blog/index.tsx");
        assert_eq!(route.id, "blog");
        assert_eq!(route.segments, vec!["blog"]);
    }

    #[test]
    fn test_index_routes() {
        let route = info("_index.tsx");
        assert_eq!(route.id, "_index");
        assert!(route.index);
        assert_eq!(route.path, None);

        let route = info("blog._index.tsx");
        assert!(route.index);
        assert_eq!(route.path.as_deref(), Some("/blog"));
        assert_eq!(route.name(), "blog/_index");
    }

    #[test]
    fn test_pathless_layout_child() {
        let route = info("_auth/login.tsx");
        assert_eq!(route.id, "_auth/login");
        assert_eq!(route.segments, vec!["_auth", "login"]);
        assert_eq!(route.path.as_deref(), Some("/login"));
        assert_eq!(route.name(), "_auth/login");
    }

    #[test]
    fn test_windows_separators() {
        let route = RouteInfo::from_file(
            "C:\\project\\app",
            "routes",
            "C:\\project\\app\\routes\\users.$id\\route.tsx",
        )
        .unwrap();
        assert_eq!(route.id, "users.$id");
        assert_eq!(route.file, "routes/users.$id/route.tsx");
        assert_eq!(route.path.as_deref(), Some("/users/:id"));
    }

    #[test]
    fn test_trailing_slash_on_app_directory() {
        let route = RouteInfo::from_file("/app/", "routes", "/app/routes/about.tsx").unwrap();
        assert_eq!(route.id, "about");
        assert_eq!(route.file, "routes/about.tsx");
    }

    #[test]
    fn test_root_index_file_collapses_to_empty_id() {
        let route = info("index.tsx");
        assert_eq!(route.id, "");
        assert!(route.segments.is_empty());
        assert_eq!(route.path, None);
    }

    #[test]
    fn test_strip_dir() {
        assert_eq!(strip_dir("/app/routes/a.tsx", "/app"), "routes/a.tsx");
        assert_eq!(strip_dir("/application/a.tsx", "/app"), "/application/a.tsx");
        assert_eq!(strip_dir("routes", "routes"), "");
        assert_eq!(strip_dir("routes/a", "routes/"), "a");
    }
}
