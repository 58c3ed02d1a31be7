//! Route manifest and the define-route callback surface
//!
//! A manifest is the flat, id-keyed table of route configs the build system
//! consumes. It is filled through [`DefineRoute`]: each call records one
//! route, and an optional children closure defines the routes nested
//! under it.

use std::collections::HashMap;

use serde::Serialize;

use crate::convention::create_route_id;
use crate::error::{FlatRoutesError, Result};

/// Id of the implicit route every top-level route attaches to
pub const ROOT_ROUTE_ID: &str = "root";

/// Options passed with every define-route call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteOptions {
    /// Explicit route id; defaults to the file path minus its extension
    pub id: Option<String>,
    /// Whether the route is the index of its parent
    pub index: bool,
    /// Whether path matching is case sensitive
    pub case_sensitive: bool,
}

impl RouteOptions {
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    pub fn index(mut self, index: bool) -> Self {
        self.index = index;
        self
    }

    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }
}

/// Closure that defines the children of a route
pub type Children<'a, D> = dyn FnMut(&mut D) -> Result<()> + 'a;

/// Receives one call per route, parents before children
pub trait DefineRoute {
    /// Defines a route
    ///
    /// # Arguments
    ///
    /// * `path` - URL path relative to the parent route (`""` for none)
    /// * `file` - Route module file relative to the app directory
    /// * `options` - Route id, index flag and case sensitivity
    /// * `children` - Defines the nested routes, when the route has any
    fn define_route(
        &mut self,
        path: &str,
        file: &str,
        options: RouteOptions,
        children: Option<&mut Children<'_, Self>>,
    ) -> Result<()>;
}

/// One route as recorded in the manifest
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigRoute {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub index: bool,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub case_sensitive: bool,
    pub file: String,
}

/// Routes keyed by id, in definition order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteManifest {
    routes: Vec<ConfigRoute>,
    positions: HashMap<String, usize>,
}

impl RouteManifest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a route, rejecting a second route with the same id
    pub fn insert(&mut self, route: ConfigRoute) -> Result<()> {
        if let Some(existing) = self.get(&route.id) {
            return Err(FlatRoutesError::DuplicateRouteId {
                id: route.id,
                file: route.file,
                existing_file: existing.file.clone(),
            });
        }
        self.positions.insert(route.id.clone(), self.routes.len());
        self.routes.push(route);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&ConfigRoute> {
        self.positions.get(id).map(|&position| &self.routes[position])
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConfigRoute> {
        self.routes.iter()
    }

    /// Routes whose parent is `parent_id`, in definition order
    pub fn children_of<'a>(
        &'a self,
        parent_id: Option<&'a str>,
    ) -> impl Iterator<Item = &'a ConfigRoute> + 'a {
        self.routes
            .iter()
            .filter(move |route| route.parent_id.as_deref() == parent_id)
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Puts every top-level route under an explicit `root` route
    ///
    /// The root route comes first, has no path, and uses `file` as its
    /// module.
    ///
    /// # Errors
    ///
    /// [`FlatRoutesError::DuplicateRouteId`] when a route is already named `root`.
    pub fn with_root(self, file: impl Into<String>) -> Result<Self> {
        let mut manifest = RouteManifest::new();
        manifest.insert(ConfigRoute {
            id: ROOT_ROUTE_ID.to_string(),
            parent_id: None,
            path: None,
            index: false,
            case_sensitive: false,
            file: file.into(),
        })?;

        for mut route in self.routes {
            if route.parent_id.is_none() {
                route.parent_id = Some(ROOT_ROUTE_ID.to_string());
            }
            manifest.insert(route)?;
        }
        Ok(manifest)
    }
}

impl<'a> IntoIterator for &'a RouteManifest {
    type Item = &'a ConfigRoute;
    type IntoIter = std::slice::Iter<'a, ConfigRoute>;

    fn into_iter(self) -> Self::IntoIter {
        self.routes.iter()
    }
}

/// Records define-route calls into a [`RouteManifest`]
///
/// Nesting is tracked with a stack of the routes whose children are being
/// defined; the top of the stack is the parent of the next route.
#[derive(Debug, Default)]
pub struct ManifestBuilder {
    manifest: RouteManifest,
    parents: Vec<String>,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn finish(self) -> RouteManifest {
        self.manifest
    }
}

impl DefineRoute for ManifestBuilder {
    fn define_route(
        &mut self,
        path: &str,
        file: &str,
        options: RouteOptions,
        children: Option<&mut Children<'_, Self>>,
    ) -> Result<()> {
        let id = options.id.unwrap_or_else(|| create_route_id(file));

        self.manifest.insert(ConfigRoute {
            id: id.clone(),
            parent_id: self.parents.last().cloned(),
            path: (!path.is_empty()).then(|| path.to_string()),
            index: options.index,
            case_sensitive: options.case_sensitive,
            file: file.to_string(),
        })?;

        if let Some(children) = children {
            self.parents.push(id);
            let result = children(self);
            self.parents.pop();
            result?;
        }

        Ok(())
    }
}

/// Builds a manifest from a closure that defines routes
///
/// # Examples
///
/// ```
/// use flat_routes::{define_routes, DefineRoute, ManifestBuilder, RouteOptions};
///
/// let manifest = define_routes(|define| {
///     define.define_route("/", "routes/home.tsx", RouteOptions::default(), None)?;
///     define.define_route(
///         "blog",
///         "routes/blog.tsx",
///         RouteOptions::default(),
///         Some(&mut |define: &mut ManifestBuilder| {
///             let options = RouteOptions::default().index(true);
///             define.define_route("", "routes/blog/index.tsx", options, None)
///         }),
///     )
/// })
/// .unwrap();
///
/// let index = manifest.get("routes/blog/index").unwrap();
/// assert_eq!(index.parent_id.as_deref(), Some("routes/blog"));
/// assert!(index.index);
/// ```
pub fn define_routes<F>(callback: F) -> Result<RouteManifest>
where
    F: FnOnce(&mut ManifestBuilder) -> Result<()>,
{
    let mut builder = ManifestBuilder::new();
    callback(&mut builder)?;
    Ok(builder.finish())
}
