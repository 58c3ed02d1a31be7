/// Integration tests for manifest assembly and rendering
///
/// Routes go through the whole pipeline: discovery listing → route map →
/// nested definitions → manifest → text output.

use flat_routes::{
    define_nested_routes, flat_routes_universal, format_routes, DefineRoute, RouteMap,
    RouteOptions, RoutesFormat, Children, Result, ROOT_ROUTE_ID,
};
use pretty_assertions::assert_eq;

fn app_files() -> Vec<String> {
    ["blog.tsx", "blog._index.tsx", "blog.$slug.tsx", "about.tsx"]
        .iter()
        .map(|name| format!("/app/routes/{}", name))
        .collect()
}

#[test]
fn test_manifest_renders_as_jsx_under_root() {
    let manifest = flat_routes_universal("/app", &app_files(), "routes")
        .unwrap()
        .with_root("root.tsx")
        .unwrap();

    let expected = [
        "<Routes>",
        "  <Route file=\"root.tsx\">",
        "    <Route path=\"blog\" file=\"routes/blog.tsx\">",
        "      <Route index file=\"routes/blog._index.tsx\" />",
        "      <Route path=\":slug\" file=\"routes/blog.$slug.tsx\" />",
        "    </Route>",
        "    <Route path=\"about\" file=\"routes/about.tsx\" />",
        "  </Route>",
        "</Routes>",
    ]
    .join("\n");

    assert_eq!(format_routes(&manifest, RoutesFormat::Jsx).unwrap(), expected);
}

#[test]
fn test_manifest_renders_as_json_tree() {
    let manifest = flat_routes_universal("/app", &app_files(), "routes").unwrap();
    let json = format_routes(&manifest, RoutesFormat::Json).unwrap();

    let expected = serde_json::json!([
        {
            "id": "routes/blog",
            "path": "blog",
            "file": "routes/blog.tsx",
            "children": [
                { "id": "routes/blog._index", "index": true, "file": "routes/blog._index.tsx" },
                { "id": "routes/blog.$slug", "path": ":slug", "file": "routes/blog.$slug.tsx" }
            ]
        },
        { "id": "routes/about", "path": "about", "file": "routes/about.tsx" }
    ]);
    let actual: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(actual, expected);
}

#[test]
fn test_root_route_is_parent_of_top_level_routes() {
    let manifest = flat_routes_universal("/app", &app_files(), "routes")
        .unwrap()
        .with_root("root.tsx")
        .unwrap();

    let top_level: Vec<&str> = manifest
        .children_of(Some(ROOT_ROUTE_ID))
        .map(|route| route.id.as_str())
        .collect();
    assert_eq!(top_level, vec!["routes/blog", "routes/about"]);
}

#[test]
fn test_custom_routes_prefix() {
    let files = vec!["C:\\site\\app\\pages\\users.$id.tsx".to_string()];
    let manifest = flat_routes_universal("C:\\site\\app", &files, "pages").unwrap();

    let route = manifest.get("pages/users.$id").unwrap();
    assert_eq!(route.file, "pages/users.$id.tsx");
    assert_eq!(route.path.as_deref(), Some("users/:id"));
}

/// Counts define-route calls per nesting depth
#[derive(Default)]
struct DepthCounter {
    depth: usize,
    per_depth: Vec<usize>,
}

impl DefineRoute for DepthCounter {
    fn define_route(
        &mut self,
        _path: &str,
        _file: &str,
        _options: RouteOptions,
        children: Option<&mut Children<'_, Self>>,
    ) -> Result<()> {
        if self.per_depth.len() <= self.depth {
            self.per_depth.push(0);
        }
        self.per_depth[self.depth] += 1;

        if let Some(children) = children {
            self.depth += 1;
            children(self)?;
            self.depth -= 1;
        }
        Ok(())
    }
}

#[test]
fn test_custom_define_route_sink() {
    let map = RouteMap::build("/app", &app_files(), "routes").unwrap();
    let mut counter = DepthCounter::default();
    define_nested_routes(&map, &mut counter, "routes").unwrap();
    assert_eq!(counter.per_depth, vec![2, 2]);
}
