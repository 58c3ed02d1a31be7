/// Errors raised while compiling a route listing into a manifest
///
/// Every variant is fatal for the compilation pass: nothing is recovered
/// locally and no partial manifest is returned.
#[derive(Debug, thiserror::Error)]
pub enum FlatRoutesError {
    /// A segment uses `*`, `:` or `/` outside the convention's own handling
    #[error(
        "Route segment \"{segment}\" for \"{route_id}\" cannot contain \"{character}\". \
         Use `$` for dynamic segments and `[...]` to escape special characters"
    )]
    GrammarViolation {
        segment: String,
        route_id: String,
        character: char,
    },

    /// Two routes resolve to the same URL path and index-ness
    #[error("Path {path:?} defined by route {route_id:?} conflicts with route {conflicting_id:?}")]
    PathConflict {
        path: String,
        route_id: String,
        conflicting_id: String,
    },

    /// An index route has routes nested under it
    #[error(
        "Child routes are not allowed in index routes. Please remove child routes of {route_id} ({})",
        .children.join(", ")
    )]
    InvalidIndexChildren {
        route_id: String,
        children: Vec<String>,
    },

    /// Two definitions share one route id
    #[error("Unable to define routes with duplicate route id {id:?} ({file} and {existing_file})")]
    DuplicateRouteId {
        id: String,
        file: String,
        existing_file: String,
    },

    /// A manifest could not be rendered
    #[error("Failed to serialize route manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, FlatRoutesError>;
