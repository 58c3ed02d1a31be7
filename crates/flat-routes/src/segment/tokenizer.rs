//! Route id tokenizer
//!
//! A character-by-character state machine that splits a route id into
//! logical segments (used to build URL paths and resolve parents) and raw
//! segments (the original text, kept to tell escaped characters from
//! convention characters).

use crate::convention::{
    collapse_folder_module, is_segment_separator, ESCAPE_END, ESCAPE_START, OPTIONAL_END,
    OPTIONAL_START, PARAM_PREFIX_CHAR,
};
use crate::error::{FlatRoutesError, Result};

/// Tokenizer state
///
/// ```text
///            '['            '('
///  Escape <------- Normal -------> Optional
///         ------->        <-------   |  ^
///            ']'            ')'   '['|  |']'
///                                    v  |
///                               OptionalEscape
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenizerState {
    /// Outside any bracket pair
    #[default]
    Normal,
    /// Inside `[...]`: characters are copied literally
    Escape,
    /// Inside `(...)`: the segment gets a trailing `?`
    Optional,
    /// Inside `[...]` nested in `(...)`
    OptionalEscape,
}

/// What the caller must do after feeding a character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Keep accumulating into the current segment
    Continue,
    /// A separator ended the current segment: flush it
    Flush,
}

/// The segment under construction
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentBuffer {
    /// Logical text (`:id`, `*`, `lang?`, literal escapes unwrapped)
    pub segment: String,
    /// Raw text as written in the id
    pub raw: String,
}

impl SegmentBuffer {
    fn push(&mut self, ch: char) {
        self.segment.push(ch);
        self.raw.push(ch);
    }

    fn push_raw(&mut self, ch: char) {
        self.raw.push(ch);
    }

    /// `$` at the start of a segment: splat when last in the id, param otherwise
    fn push_param_prefix(&mut self, ch: char, is_last: bool) {
        self.segment.push(if is_last { '*' } else { ':' });
        self.raw.push(ch);
    }

    fn take(&mut self) -> (String, String) {
        (
            std::mem::take(&mut self.segment),
            std::mem::take(&mut self.raw),
        )
    }
}

/// Feeds one character through the state machine
///
/// **Pure transition**: `(state, char, buffer) → (state, action)`. The only
/// effect is on the caller-owned buffer.
///
/// `is_last` tells whether `ch` is the final character of the route id; a
/// bare `$` there becomes a splat.
///
/// # Examples
///
/// ```
/// use flat_routes::segment::tokenizer::{transition, Action, SegmentBuffer, TokenizerState};
///
/// let mut buffer = SegmentBuffer::default();
/// let (state, action) = transition(TokenizerState::Normal, '(', false, &mut buffer);
/// assert_eq!(state, TokenizerState::Optional);
/// assert_eq!(action, Action::Continue);
/// assert_eq!(buffer.raw, "(");
/// assert_eq!(buffer.segment, "");
/// ```
pub fn transition(
    state: TokenizerState,
    ch: char,
    is_last: bool,
    buffer: &mut SegmentBuffer,
) -> (TokenizerState, Action) {
    use TokenizerState::*;

    match state {
        Normal => {
            if is_segment_separator(ch) {
                return (Normal, Action::Flush);
            }
            if ch == ESCAPE_START {
                buffer.push_raw(ch);
                return (Escape, Action::Continue);
            }
            if ch == OPTIONAL_START {
                buffer.push_raw(ch);
                return (Optional, Action::Continue);
            }
            if buffer.segment.is_empty() && ch == PARAM_PREFIX_CHAR {
                buffer.push_param_prefix(ch, is_last);
                return (Normal, Action::Continue);
            }
            buffer.push(ch);
            (Normal, Action::Continue)
        }
        Escape => {
            if ch == ESCAPE_END {
                buffer.push_raw(ch);
                return (Normal, Action::Continue);
            }
            buffer.push(ch);
            (Escape, Action::Continue)
        }
        Optional => {
            if ch == OPTIONAL_END {
                buffer.segment.push('?');
                buffer.push_raw(ch);
                return (Normal, Action::Continue);
            }
            if ch == ESCAPE_START {
                buffer.push_raw(ch);
                return (OptionalEscape, Action::Continue);
            }
            if buffer.segment.is_empty() && ch == PARAM_PREFIX_CHAR {
                buffer.push_param_prefix(ch, is_last);
                return (Optional, Action::Continue);
            }
            buffer.push(ch);
            (Optional, Action::Continue)
        }
        OptionalEscape => {
            if ch == ESCAPE_END {
                buffer.push_raw(ch);
                return (Optional, Action::Continue);
            }
            buffer.push(ch);
            (OptionalEscape, Action::Continue)
        }
    }
}

/// Logical and raw segments of one route id, index-aligned
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteSegments {
    pub segments: Vec<String>,
    pub raw_segments: Vec<String>,
}

impl RouteSegments {
    /// Appends a finished segment pair
    ///
    /// Empty segments are dropped. Raw text may only carry `*`, `:` or `/`
    /// when the state machine produced them itself, which it never does in
    /// raw form, so their presence is a grammar violation.
    fn push(&mut self, route_id: &str, segment: String, raw: String) -> Result<()> {
        if segment.is_empty() {
            return Ok(());
        }

        let violation = |segment: &str, character: char| FlatRoutesError::GrammarViolation {
            segment: segment.to_string(),
            route_id: route_id.to_string(),
            character,
        };

        if raw.contains('*') {
            return Err(violation(&raw, '*'));
        }
        if raw.contains(':') {
            return Err(violation(&raw, ':'));
        }
        if raw.contains('/') {
            return Err(violation(&segment, '/'));
        }

        self.segments.push(segment);
        self.raw_segments.push(raw);
        Ok(())
    }

    /// Whether the id produced no segments (the root id)
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Tokenizes a route id into its segments
///
/// A trailing `/index` or `/route` component of a folder id is collapsed
/// first, so `blog/route` tokenizes like `blog`.
///
/// # Examples
///
/// ```
/// use flat_routes::segment::get_route_segments;
///
/// let parsed = get_route_segments("users.$id.edit").unwrap();
/// assert_eq!(parsed.segments, vec!["users", ":id", "edit"]);
///
/// let parsed = get_route_segments("($lang).files.$").unwrap();
/// assert_eq!(parsed.segments, vec![":lang?", "files", "*"]);
/// assert_eq!(parsed.raw_segments, vec!["($lang)", "files", "$"]);
///
/// let parsed = get_route_segments("sitemap[.]xml").unwrap();
/// assert_eq!(parsed.segments, vec!["sitemap.xml"]);
/// ```
///
/// # Errors
///
/// [`FlatRoutesError::GrammarViolation`] when a segment contains `*`, `:`
/// or an escaped `/`.
pub fn get_route_segments(route_id: &str) -> Result<RouteSegments> {
    let route_id = collapse_folder_module(route_id);

    let mut parsed = RouteSegments::default();
    let mut buffer = SegmentBuffer::default();
    let mut state = TokenizerState::Normal;
    let mut chars = route_id.chars().peekable();

    while let Some(ch) = chars.next() {
        let is_last = chars.peek().is_none();
        let (next, action) = transition(state, ch, is_last, &mut buffer);
        if action == Action::Flush {
            let (segment, raw) = buffer.take();
            parsed.push(route_id, segment, raw)?;
        }
        state = next;
    }

    let (segment, raw) = buffer.take();
    parsed.push(route_id, segment, raw)?;

    Ok(parsed)
}
