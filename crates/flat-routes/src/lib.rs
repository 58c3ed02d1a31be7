//! # Flat Routes
//!
//! Turns a directory of route module files into a nested route manifest.
//!
//! ## File Naming
//!
//! Route ids come from file names relative to the routes directory:
//! - Nesting with `.` or `/`: `blog.$slug.tsx` nests under `blog.tsx`
//! - Dynamic segments: `users.$id.tsx` → `/users/:id`
//! - Splats: `files.$.tsx` → `/files/*`
//! - Optional segments: `($lang).about.tsx` → `/:lang?/about`
//! - Escapes: `sitemap[.]xml.tsx` → `/sitemap.xml`
//! - Index routes: `blog._index.tsx`
//! - Pathless layouts: `_auth.tsx`, `_auth.login.tsx` → `/login`
//! - Un-nesting: `posts_.$id.edit.tsx` → `/posts/:id/edit` without the
//!   `posts` layout
//! - Folder modules: `blog/route.tsx` and `blog/index.tsx` are route `blog`
//!
//! ## Pipeline
//!
//! 1. [`RouteInfo::from_file`] derives id, path and segments per file
//! 2. [`RouteMap::build`] resolves each route's parent by name
//! 3. [`define_nested_routes`] emits the tree to a [`DefineRoute`] sink,
//!    rejecting path conflicts and index routes with children
//!
//! [`flat_routes_universal`] runs all three into a [`RouteManifest`].
//!
//! ## Example
//!
//! ```
//! use flat_routes::flat_routes_universal;
//!
//! let files = vec![
//!     "/app/routes/blog.tsx".to_string(),
//!     "/app/routes/blog._index.tsx".to_string(),
//!     "/app/routes/blog.$slug.tsx".to_string(),
//! ];
//! let manifest = flat_routes_universal("/app", &files, "routes").unwrap();
//!
//! let post = manifest.get("routes/blog.$slug").unwrap();
//! assert_eq!(post.path.as_deref(), Some(":slug"));
//! assert_eq!(post.parent_id.as_deref(), Some("routes/blog"));
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod config;
pub mod convention;
mod error;
mod format;
mod info;
mod manifest;
mod map;
mod nested;
pub mod path;
pub mod segment;

pub use config::{FlatRoutesConfig, RoutingConfig};
pub use error::{FlatRoutesError, Result};
pub use format::{format_routes, format_routes_as_json, format_routes_as_jsx, RoutesFormat};
pub use info::RouteInfo;
pub use manifest::{
    define_routes, Children, ConfigRoute, DefineRoute, ManifestBuilder, RouteManifest,
    RouteOptions, ROOT_ROUTE_ID,
};
pub use map::RouteMap;
pub use nested::define_nested_routes;

// ============================================================================
// Entry Point
// ============================================================================

/// Builds the route manifest for a list of route module files
///
/// # Arguments
///
/// * `app_directory` - Directory the files are relative to
/// * `route_paths` - Files under `app_directory/prefix`, in listing order
/// * `prefix` - Routes directory name; also prefixes every emitted id
///
/// # Errors
///
/// Returns the first [`FlatRoutesError`] hit while building the map or
/// assembling the tree. No partial manifest is returned.
pub fn flat_routes_universal<S: AsRef<str>>(
    app_directory: &str,
    route_paths: &[S],
    prefix: &str,
) -> Result<RouteManifest> {
    let map = RouteMap::build(app_directory, route_paths, prefix)?;
    define_routes(|define| define_nested_routes(&map, define, prefix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flat_routes_universal_prefixes_ids() {
        let files = vec!["/app/routes/_index.tsx", "/app/routes/about.tsx"];
        let manifest = flat_routes_universal("/app", &files, "routes").unwrap();

        let ids: Vec<&str> = manifest.iter().map(|route| route.id.as_str()).collect();
        assert_eq!(ids, vec!["routes/_index", "routes/about"]);
        assert!(manifest.get("routes/_index").unwrap().index);
    }

    #[test]
    fn test_flat_routes_universal_empty_input() {
        let files: Vec<String> = Vec::new();
        let manifest = flat_routes_universal("/app", &files, "routes").unwrap();
        assert!(manifest.is_empty());
    }
}
