//! Naming convention for flat route module files
//!
//! Grammar characters and the pure predicates that decide which files are
//! route modules and how a file path becomes a route id.

use std::borrow::Cow;

/// Marks a dynamic (`$id` → `:id`) or splat (`$` → `*`) segment
pub const PARAM_PREFIX_CHAR: char = '$';
/// Opens a literal (escaped) run of characters
pub const ESCAPE_START: char = '[';
/// Closes a literal run
pub const ESCAPE_END: char = ']';
/// Opens an optional segment
pub const OPTIONAL_START: char = '(';
/// Closes an optional segment
pub const OPTIONAL_END: char = ')';

/// File extensions recognised as route modules
pub const ROUTE_MODULE_EXTS: [&str; 6] = [".js", ".jsx", ".ts", ".tsx", ".md", ".mdx"];

/// Subtree under the app directory that holds route modules
pub const DEFAULT_ROUTES_DIR: &str = "routes";

/// Checks whether a character separates segments of a route id
///
/// Dots, forward slashes and Windows backslashes all separate:
/// `users.$id`, `users/$id` and `users\$id` are the same route.
pub fn is_segment_separator(ch: char) -> bool {
    matches!(ch, '.' | '/' | '\\')
}

/// Replaces Windows separators with forward slashes
///
/// Returns `Cow::Borrowed` when there is nothing to replace.
///
/// # Examples
///
/// ```
/// use flat_routes::convention::normalize_slashes;
///
/// assert_eq!(normalize_slashes("routes\\blog\\index.tsx"), "routes/blog/index.tsx");
/// assert_eq!(normalize_slashes("routes/about.tsx"), "routes/about.tsx");
/// ```
pub fn normalize_slashes(file: &str) -> Cow<'_, str> {
    if file.contains('\\') {
        Cow::Owned(file.replace('\\', "/"))
    } else {
        Cow::Borrowed(file)
    }
}

/// Returns the extension of the last path component, dot included
///
/// Dotfiles (`.gitignore`) have no extension, matching the usual path
/// semantics.
pub fn extension(file: &str) -> &str {
    let basename_start = file.rfind(|c: char| c == '/' || c == '\\').map_or(0, |pos| pos + 1);
    let basename = &file[basename_start..];
    match basename.rfind('.') {
        Some(0) | None => "",
        Some(dot) => &basename[dot..],
    }
}

/// Strips the extension of the last path component
pub fn strip_file_extension(file: &str) -> &str {
    let ext = extension(file);
    &file[..file.len() - ext.len()]
}

/// Whether the extension is one of [`ROUTE_MODULE_EXTS`]
pub fn has_route_module_ext(file: &str) -> bool {
    ROUTE_MODULE_EXTS.contains(&extension(file))
}

/// Creates a route id from a file path: slashes normalised, extension dropped
///
/// # Examples
///
/// ```
/// use flat_routes::convention::create_route_id;
///
/// assert_eq!(create_route_id("routes/users.$id.tsx"), "routes/users.$id");
/// assert_eq!(create_route_id("routes\\blog\\route.jsx"), "routes/blog/route");
/// ```
pub fn create_route_id(file: &str) -> String {
    normalize_slashes(strip_file_extension(file)).into_owned()
}

/// Creates a route id for a flat-routes file
///
/// Like [`create_route_id`], and additionally collapses a folder route
/// module (`blog/index`, `blog/route`) into its folder (`blog`).
pub fn create_flat_route_id(file: &str) -> String {
    let route_id = create_route_id(file);
    collapse_folder_module(&route_id).to_string()
}

/// Drops a trailing `/index` or `/route` component from an id that has a folder
pub fn collapse_folder_module(route_id: &str) -> &str {
    if !route_id.contains('/') {
        return route_id;
    }
    route_id
        .strip_suffix("/index")
        .or_else(|| route_id.strip_suffix("/route"))
        .unwrap_or(route_id)
}

/// Checks whether a path relative to the routes directory is a route module
///
/// Flat files (no folder) only need a recognised extension. Files inside a
/// folder must be named `route` or `index`; other files in a route folder
/// are colocated modules (components, styles, helpers) and not routes.
///
/// # Examples
///
/// ```
/// use flat_routes::convention::is_route_module_file;
///
/// assert!(is_route_module_file("about.tsx"));
/// assert!(is_route_module_file("blog/route.tsx"));
/// assert!(is_route_module_file("blog/index.jsx"));
/// assert!(!is_route_module_file("blog/header.tsx"));
/// assert!(!is_route_module_file("styles.css"));
/// ```
pub fn is_route_module_file(file: &str) -> bool {
    if !has_route_module_ext(file) {
        return false;
    }

    let normalized = normalize_slashes(file);
    if !normalized.contains('/') {
        return true;
    }

    let basename = strip_file_extension(&normalized);
    basename.ends_with("/route") || basename.ends_with("/index")
}

/// Whether a route id denotes an index route (`_index` suffix)
pub fn is_index_route(route_id: &str) -> bool {
    route_id.ends_with("_index")
}
