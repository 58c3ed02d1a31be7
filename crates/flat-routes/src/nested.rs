//! Nested route tree assembly
//!
//! Walks a resolved [`RouteMap`] depth-first and emits every route to a
//! [`DefineRoute`] implementation, parents before children and siblings in
//! file-listing order. Paths are emitted relative to the parent route.

use std::collections::HashMap;

use tracing::trace;

use crate::error::{FlatRoutesError, Result};
use crate::info::RouteInfo;
use crate::manifest::{Children, DefineRoute, RouteOptions};
use crate::map::RouteMap;
use crate::path::relative_route_path;

/// Emits the routes of `map` to `define`
///
/// Emitted ids are prefixed with `prefix` (`routes/blog` for route `blog`).
///
/// # Errors
///
/// - [`FlatRoutesError::PathConflict`] when two routes share a URL path and index-ness
/// - [`FlatRoutesError::InvalidIndexChildren`] when routes nest under an index route
/// - any error returned by `define`
pub fn define_nested_routes<D: DefineRoute + ?Sized>(
    map: &RouteMap,
    define: &mut D,
    prefix: &str,
) -> Result<()> {
    let assembler = Assembler::new(map, prefix);
    let mut emitted = HashMap::new();
    assembler.define_children(define, None, &mut emitted)
}

/// Children grouped by parent id once, so each level is a lookup
struct Assembler<'a> {
    map: &'a RouteMap,
    children: HashMap<Option<&'a str>, Vec<&'a RouteInfo>>,
    prefix: &'a str,
}

impl<'a> Assembler<'a> {
    fn new(map: &'a RouteMap, prefix: &'a str) -> Self {
        let mut children: HashMap<Option<&'a str>, Vec<&'a RouteInfo>> = HashMap::new();
        for info in map.iter() {
            children
                .entry(info.parent_id.as_deref())
                .or_default()
                .push(info);
        }
        Self {
            map,
            children,
            prefix,
        }
    }

    fn children_of(&self, parent_id: Option<&'a str>) -> &[&'a RouteInfo] {
        self.children
            .get(&parent_id)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Defines every child of `parent_id`, recursing into non-index routes
    ///
    /// `emitted` maps each uniqueness key (`path` or `path?index`) to the
    /// route that claimed it and is shared by the whole pass.
    fn define_children<D: DefineRoute + ?Sized>(
        &self,
        define: &mut D,
        parent_id: Option<&'a str>,
        emitted: &mut HashMap<String, String>,
    ) -> Result<()> {
        let parent_path = parent_id
            .and_then(|id| self.map.get(id))
            .and_then(|parent| parent.path.as_deref());

        for &child in self.children_of(parent_id) {
            let route_path = relative_route_path(child.path.as_deref(), parent_path);

            claim_path(child, emitted)?;

            let options = RouteOptions {
                id: Some(join_route_id(self.prefix, &child.id)),
                index: child.index,
                case_sensitive: false,
            };
            trace!("Defining route {:?} at {:?}", child.id, route_path);

            if child.index {
                let invalid: Vec<String> = self
                    .children_of(Some(child.id.as_str()))
                    .iter()
                    .map(|info| info.id.clone())
                    .collect();
                if !invalid.is_empty() {
                    return Err(FlatRoutesError::InvalidIndexChildren {
                        route_id: child.id.clone(),
                        children: invalid,
                    });
                }
                define.define_route(route_path, &child.file, options, None)?;
            } else {
                let child_id = Some(child.id.as_str());
                let mut nested =
                    |define: &mut D| self.define_children(define, child_id, &mut *emitted);
                let nested: &mut Children<'_, D> = &mut nested;
                define.define_route(route_path, &child.file, options, Some(nested))?;
            }
        }

        Ok(())
    }
}

/// Records the route's full path, failing if another route already has it
fn claim_path(child: &RouteInfo, emitted: &mut HashMap<String, String>) -> Result<()> {
    let full_path = child.path.as_deref().unwrap_or("");
    let key = if child.index {
        format!("{}?index", full_path)
    } else {
        full_path.to_string()
    };

    // Pathless layouts never conflict
    if key.is_empty() {
        return Ok(());
    }

    if let Some(conflicting_id) = emitted.get(&key) {
        return Err(FlatRoutesError::PathConflict {
            path: full_path.to_string(),
            route_id: child.id.clone(),
            conflicting_id: conflicting_id.clone(),
        });
    }
    emitted.insert(key, child.id.clone());
    Ok(())
}

/// Joins the routes prefix and a route id with one `/`
fn join_route_id(prefix: &str, id: &str) -> String {
    let prefix = prefix.trim_end_matches('/');
    match (prefix.is_empty(), id.is_empty()) {
        (true, _) => id.to_string(),
        (false, true) => prefix.to_string(),
        (false, false) => format!("{}/{}", prefix, id),
    }
}
