//! Segment module for route id tokenization
//!
//! Turns a file-derived route id into the ordered segments that drive path
//! building and parent resolution:
//! - `.` `/` `\` separate segments
//! - `$name` is a dynamic parameter, a trailing bare `$` is a splat
//! - `(segment)` is optional
//! - `[text]` is literal text with no special meaning

pub mod tokenizer;

// Re-export commonly used types
pub use tokenizer::{get_route_segments, RouteSegments, TokenizerState};
