//! Route map: every discovered route keyed by id, parents resolved
//!
//! Parents are found by name, not by folder: a route's name is shortened one
//! segment at a time until it matches another route's name. Intermediate
//! folders that have no route file of their own are skipped over, so
//! `app.projects.$id.tsx` nests under `app.tsx` when there is no
//! `app.projects.tsx`.

use std::collections::HashMap;

use tracing::debug;

use crate::convention::{is_route_module_file, normalize_slashes};
use crate::error::{FlatRoutesError, Result};
use crate::info::{strip_dir, RouteInfo};
use crate::path::ParentNames;

/// Resolved routes in file-listing order
#[derive(Debug, Clone, Default)]
pub struct RouteMap {
    routes: Vec<RouteInfo>,
    by_id: HashMap<String, usize>,
}

impl RouteMap {
    /// Builds the route map for a set of route module files
    ///
    /// # Arguments
    ///
    /// * `app_directory` - Directory the route files are relative to
    /// * `route_paths` - Candidate files, in enumeration order
    /// * `prefix` - Routes subtree inside the app directory (usually `routes`)
    ///
    /// Files that are not route modules (e.g. `blog/header.tsx`) are skipped.
    ///
    /// # Examples
    ///
    /// ```
    /// use flat_routes::RouteMap;
    ///
    /// let files = vec![
    ///     "/app/routes/app.tsx".to_string(),
    ///     "/app/routes/app.projects.$id.tsx".to_string(),
    /// ];
    /// let map = RouteMap::build("/app", &files, "routes").unwrap();
    ///
    /// let project = map.get("app.projects.$id").unwrap();
    /// assert_eq!(project.parent_id.as_deref(), Some("app"));
    /// ```
    ///
    /// # Errors
    ///
    /// - [`FlatRoutesError::GrammarViolation`] for a malformed route id
    /// - [`FlatRoutesError::DuplicateRouteId`] when two files collapse into one id
    pub fn build<S: AsRef<str>>(
        app_directory: &str,
        route_paths: &[S],
        prefix: &str,
    ) -> Result<Self> {
        let routes_directory = format!(
            "{}/{}",
            normalize_slashes(app_directory).trim_end_matches('/'),
            normalize_slashes(prefix)
        );

        let mut map = RouteMap::default();
        let mut by_name: HashMap<String, usize> = HashMap::new();

        for route_path in route_paths {
            let route_path = route_path.as_ref();
            let normalized = normalize_slashes(route_path);
            let routes_relative = strip_dir(&normalized, &routes_directory);

            if routes_relative == normalized || !is_route_module_file(routes_relative) {
                debug!("Skipping non-route module: {}", route_path);
                continue;
            }

            let info = RouteInfo::from_file(app_directory, prefix, route_path)?;
            debug!("Discovered route {:?} ({})", info.id, info.file);

            if let Some(&existing) = map.by_id.get(&info.id) {
                return Err(FlatRoutesError::DuplicateRouteId {
                    id: info.id,
                    file: info.file,
                    existing_file: map.routes[existing].file.clone(),
                });
            }

            let position = map.routes.len();
            map.by_id.insert(info.id.clone(), position);
            by_name.insert(info.name.clone(), position);
            map.routes.push(info);
        }

        // Parents are resolved once every name is known
        let parent_ids: Vec<Option<String>> = map
            .routes
            .iter()
            .map(|info| find_parent_route_id(info, &by_name, &map.routes))
            .collect();

        for (info, parent_id) in map.routes.iter_mut().zip(parent_ids) {
            debug!("Route {:?} nests under {:?}", info.id, parent_id);
            info.parent_id = parent_id;
        }

        Ok(map)
    }

    /// Looks up a route by id
    pub fn get(&self, id: &str) -> Option<&RouteInfo> {
        self.by_id.get(id).map(|&position| &self.routes[position])
    }

    /// Routes in file-listing order
    pub fn iter(&self) -> impl Iterator<Item = &RouteInfo> {
        self.routes.iter()
    }

    /// Routes whose parent is `parent_id` (`None` for root-level routes)
    pub fn children_of<'a>(
        &'a self,
        parent_id: Option<&'a str>,
    ) -> impl Iterator<Item = &'a RouteInfo> + 'a {
        self.routes
            .iter()
            .filter(move |info| info.parent_id.as_deref() == parent_id)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Finds the nearest ancestor route by name
///
/// Starts from the route's name minus its last segment and drops one
/// segment per step until a route with that name exists. `None` means
/// the route attaches to the implicit root.
fn find_parent_route_id(
    info: &RouteInfo,
    by_name: &HashMap<String, usize>,
    routes: &[RouteInfo],
) -> Option<String> {
    let parent_name = match info.segments.split_last() {
        Some((_, ancestors)) => ancestors.join("/"),
        None => return None,
    };

    ParentNames::new(&parent_name)
        .find_map(|name| by_name.get(name))
        .map(|&position| routes[position].id.clone())
}
