//! Text renderings of a route manifest
//!
//! `Jsx` prints the nested `<Routes>` tree a hand-written route config would
//! look like; `Json` prints the same tree as data.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Result;
use crate::manifest::{ConfigRoute, RouteManifest};

/// Output format for [`format_routes`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RoutesFormat {
    #[default]
    Jsx,
    Json,
}

impl FromStr for RoutesFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "jsx" => Ok(RoutesFormat::Jsx),
            "json" => Ok(RoutesFormat::Json),
            other => Err(format!("unknown routes format {:?} (expected jsx or json)", other)),
        }
    }
}

impl fmt::Display for RoutesFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RoutesFormat::Jsx => f.write_str("jsx"),
            RoutesFormat::Json => f.write_str("json"),
        }
    }
}

/// Renders a manifest in the requested format
///
/// # Examples
///
/// ```
/// use flat_routes::{define_routes, format_routes, DefineRoute, RouteOptions, RoutesFormat};
///
/// let manifest = define_routes(|define| {
///     define.define_route("about", "routes/about.tsx", RouteOptions::default(), None)
/// })
/// .unwrap();
///
/// let jsx = format_routes(&manifest, RoutesFormat::Jsx).unwrap();
/// assert_eq!(jsx, "<Routes>\n  <Route path=\"about\" file=\"routes/about.tsx\" />\n</Routes>");
/// ```
pub fn format_routes(manifest: &RouteManifest, format: RoutesFormat) -> Result<String> {
    match format {
        RoutesFormat::Jsx => format_routes_as_jsx(manifest),
        RoutesFormat::Json => format_routes_as_json(manifest),
    }
}

/// Renders the `<Routes>` tree, two spaces of indent per level
pub fn format_routes_as_jsx(manifest: &RouteManifest) -> Result<String> {
    let mut output = String::from("<Routes>");
    write_jsx_level(manifest, None, 1, &mut output)?;
    output.push_str("\n</Routes>");
    Ok(output)
}

fn write_jsx_level(
    manifest: &RouteManifest,
    parent_id: Option<&str>,
    level: usize,
    output: &mut String,
) -> Result<()> {
    let indent = " ".repeat(level * 2);

    for route in manifest.children_of(parent_id) {
        output.push('\n');
        output.push_str(&indent);
        output.push_str(&jsx_open_tag(route)?);

        let has_children = manifest.children_of(Some(route.id.as_str())).next().is_some();
        if has_children {
            write_jsx_level(manifest, Some(route.id.as_str()), level + 1, output)?;
            output.push('\n');
            output.push_str(&indent);
            output.push_str("</Route>");
        } else {
            // `<Route ...>` becomes `<Route ... />`
            output.pop();
            output.push_str(" />");
        }
    }

    Ok(())
}

fn jsx_open_tag(route: &ConfigRoute) -> Result<String> {
    let mut tag = String::from("<Route");
    if let Some(path) = route.path.as_deref().filter(|path| !path.is_empty()) {
        tag.push_str(" path=");
        tag.push_str(&serde_json::to_string(path)?);
    }
    if route.index {
        tag.push_str(" index");
    }
    if route.case_sensitive {
        tag.push_str(" caseSensitive");
    }
    if !route.file.is_empty() {
        tag.push_str(" file=");
        tag.push_str(&serde_json::to_string(&route.file)?);
    }
    tag.push('>');
    Ok(tag)
}

/// One node of the JSON tree
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct RouteNode<'a> {
    id: &'a str,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    index: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    case_sensitive: bool,
    file: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    children: Option<Vec<RouteNode<'a>>>,
}

fn json_level<'a>(
    manifest: &'a RouteManifest,
    parent_id: Option<&'a str>,
) -> Option<Vec<RouteNode<'a>>> {
    let nodes: Vec<RouteNode<'a>> = manifest
        .children_of(parent_id)
        .map(|route| RouteNode {
            id: &route.id,
            index: route.index,
            path: route.path.as_deref(),
            case_sensitive: route.case_sensitive,
            file: &route.file,
            children: json_level(manifest, Some(route.id.as_str())),
        })
        .collect();

    (!nodes.is_empty()).then_some(nodes)
}

/// Renders the tree as pretty JSON; an empty manifest renders as `null`
pub fn format_routes_as_json(manifest: &RouteManifest) -> Result<String> {
    Ok(serde_json::to_string_pretty(&json_level(manifest, None))?)
}
