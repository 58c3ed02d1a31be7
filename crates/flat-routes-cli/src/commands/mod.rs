pub mod check;
pub mod routes;

use anyhow::{bail, Context, Result};
use flat_routes::{flat_routes_universal, FlatRoutesConfig, RouteManifest};
use std::path::Path;
use tracing::debug;

use crate::discover::{discover_route_files, find_root_route};

/// Discovers the route files of `app_dir` and compiles them into a manifest
///
/// The manifest is rooted at the configured root route, or at `root.<ext>`
/// in the app directory when none is configured.
pub fn load_manifest(app_dir: &Path, config: &FlatRoutesConfig) -> Result<RouteManifest> {
    let routing = &config.routing;
    let root = resolve_root_route(app_dir, routing.root_route.as_deref())?;
    debug!("Root route module: {}", root);

    let files = discover_route_files(app_dir, &routing.routes_dir, &routing.ignored_route_files)?;
    debug!("Found {} route file candidates in {:?}", files.len(), app_dir);

    let files: Vec<String> = files
        .iter()
        .map(|file| file.to_string_lossy().into_owned())
        .collect();
    let app_directory = app_dir.to_string_lossy();

    let manifest = flat_routes_universal(&app_directory, &files, &routing.routes_dir)
        .with_context(|| format!("Failed to compile routes in {:?}", app_dir))?;

    Ok(manifest.with_root(root)?)
}

/// Picks the root route module, relative to the app directory
fn resolve_root_route(app_dir: &Path, configured: Option<&str>) -> Result<String> {
    match configured {
        Some(root) if app_dir.join(root).is_file() => Ok(root.to_string()),
        Some(root) => bail!("Missing \"root\" route file: {:?}", app_dir.join(root)),
        None => find_root_route(app_dir).with_context(|| {
            format!("Missing \"root\" route file in {:?}", app_dir)
        }),
    }
}
