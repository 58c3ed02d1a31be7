// File: src/discover.rs
// Purpose: Find route module candidates on disk

use anyhow::{Context, Result};
use flat_routes::convention::{has_route_module_ext, ROUTE_MODULE_EXTS};
use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

/// Lists the files under `app_dir/routes_dir` that may be route modules
///
/// Files with an unrecognised extension, and files whose path relative to
/// the routes directory matches one of `ignored`, are left out. The result
/// is sorted so route order does not depend on the file system.
pub fn discover_route_files(
    app_dir: &Path,
    routes_dir: &str,
    ignored: &[String],
) -> Result<Vec<PathBuf>> {
    let patterns = ignored
        .iter()
        .map(|pattern| {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid ignored route file pattern: {:?}", pattern))
        })
        .collect::<Result<Vec<_>>>()?;

    let root = app_dir.join(routes_dir);
    if !root.is_dir() {
        debug!("Routes directory {:?} does not exist", root);
        return Ok(Vec::new());
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(&root).sort_by_file_name() {
        let entry =
            entry.with_context(|| format!("Failed to read routes directory: {:?}", root))?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let relative = path.strip_prefix(&root)?;
        let relative = relative.to_string_lossy().replace('\\', "/");

        if !has_route_module_ext(&relative) {
            continue;
        }
        if patterns.iter().any(|pattern| pattern.matches(&relative)) {
            debug!("Ignoring route file {}", relative);
            continue;
        }

        files.push(path.to_path_buf());
    }

    // Compare as strings: `blog.tsx` sorts before `blog/route.tsx`
    files.sort_by_cached_key(|file| file.to_string_lossy().replace('\\', "/"));
    Ok(files)
}

/// Finds `root.<ext>` in the app directory, relative to it
pub fn find_root_route(app_dir: &Path) -> Option<String> {
    ROUTE_MODULE_EXTS
        .iter()
        .map(|ext| format!("root{}", ext))
        .find(|file| app_dir.join(file).is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &Path, relative: &str) {
        let path = dir.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "").unwrap();
    }

    fn names(app_dir: &Path, files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|file| {
                file.strip_prefix(app_dir)
                    .unwrap()
                    .to_string_lossy()
                    .replace('\\', "/")
            })
            .collect()
    }

    #[test]
    fn test_discovers_route_modules_in_order() {
        let temp = TempDir::new().unwrap();
        let app = temp.path();
        touch(app, "routes/blog.tsx");
        touch(app, "routes/_index.tsx");
        touch(app, "routes/blog/route.tsx");
        touch(app, "routes/blog/styles.css");
        touch(app, "root.tsx");

        let files = discover_route_files(app, "routes", &[]).unwrap();
        assert_eq!(
            names(app, &files),
            vec!["routes/_index.tsx", "routes/blog.tsx", "routes/blog/route.tsx"]
        );
    }

    #[test]
    fn test_sorts_by_path_text_not_components() {
        let temp = TempDir::new().unwrap();
        let app = temp.path();
        touch(app, "routes/blog/route.tsx");
        touch(app, "routes/blog-archive.tsx");
        touch(app, "routes/blog.tsx");

        let files = discover_route_files(app, "routes", &[]).unwrap();
        assert_eq!(
            names(app, &files),
            vec!["routes/blog-archive.tsx", "routes/blog.tsx", "routes/blog/route.tsx"]
        );
    }

    #[test]
    fn test_ignored_patterns_are_relative_to_routes_directory() {
        let temp = TempDir::new().unwrap();
        let app = temp.path();
        touch(app, "routes/about.tsx");
        touch(app, "routes/about.test.tsx");
        touch(app, "routes/admin/route.tsx");

        let ignored = vec!["**/*.test.tsx".to_string(), "admin/*".to_string()];
        let files = discover_route_files(app, "routes", &ignored).unwrap();
        assert_eq!(names(app, &files), vec!["routes/about.tsx"]);
    }

    #[test]
    fn test_missing_routes_directory_is_empty() {
        let temp = TempDir::new().unwrap();
        let files = discover_route_files(temp.path(), "routes", &[]).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_invalid_pattern_is_an_error() {
        let temp = TempDir::new().unwrap();
        let ignored = vec!["[".to_string()];
        assert!(discover_route_files(temp.path(), "routes", &ignored).is_err());
    }

    #[test]
    fn test_find_root_route() {
        let temp = TempDir::new().unwrap();
        assert_eq!(find_root_route(temp.path()), None);

        touch(temp.path(), "root.jsx");
        assert_eq!(find_root_route(temp.path()).as_deref(), Some("root.jsx"));
    }
}
