/// Lazy iterator over the ancestor names of a route name
///
/// For name `a/b/c`, yields: `a/b/c` → `a/b` → `a`, then stops. The empty
/// name (the implicit root) is never yielded.
///
/// Parent resolution walks this iterator until a name matches a known route,
/// so the walk is bounded by the name depth and uses no recursion.
///
/// # Examples
///
/// ```
/// use flat_routes::path::ParentNames;
///
/// let names: Vec<&str> = ParentNames::new("app/projects/$id").collect();
/// assert_eq!(names, vec!["app/projects/$id", "app/projects", "app"]);
///
/// assert_eq!(ParentNames::new("").next(), None);
/// ```
#[derive(Debug, Clone)]
pub struct ParentNames<'a> {
    current: Option<&'a str>,
}

impl<'a> ParentNames<'a> {
    /// Creates an iterator starting at `name` itself
    pub fn new(name: &'a str) -> Self {
        Self {
            current: (!name.is_empty()).then_some(name),
        }
    }
}

impl<'a> Iterator for ParentNames<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;

        self.current = match current.rfind('/') {
            Some(0) | None => None,
            Some(slash_pos) => Some(&current[..slash_pos]),
        };

        Some(current)
    }
}
