use crate::error::{InsertError, SyntaxRule};

use std::str::Split;

// Splits a route pattern into its segments, validating it on the way.
//
// The root route `/` has no segments. Validation runs over the whole route
// before anything is returned, so a rejected route never reaches the tree.
pub(crate) fn route_segments(route: &str) -> Result<Vec<&str>, InsertError> {
    if route.is_empty() {
        return Err(InsertError::syntax(route, SyntaxRule::Empty));
    }

    if !route.starts_with('/') {
        return Err(InsertError::syntax(route, SyntaxRule::MissingLeadingSlash));
    }

    if route == "/" {
        return Ok(Vec::new());
    }

    if route.ends_with('/') {
        return Err(InsertError::syntax(route, SyntaxRule::TrailingSlash));
    }

    let mut segments = Vec::new();
    for segment in route[1..].split('/') {
        if segment.is_empty() {
            return Err(InsertError::syntax(route, SyntaxRule::EmptySegment));
        }
        segments.push(segment);
    }

    Ok(segments)
}

// Splits a request path into the segments walked during lookup.
//
// All leading and trailing slashes are trimmed first, so `/user/` and
// `//user` walk the same single segment. Inner empty segments are kept.
pub(crate) fn request_segments(path: &str) -> Split<'_, char> {
    path.trim_matches('/').split('/')
}
