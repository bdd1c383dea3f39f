use std::fmt;

/// Represents errors that can occur when inserting a new route.
///
/// Every variant is detected before the handler is attached, so a failed
/// insertion never replaces an existing handler.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum InsertError {
    /// The route pattern is malformed.
    InvalidPathSyntax {
        /// The rejected route.
        route: String,
        /// The syntax rule the route breaks.
        rule: SyntaxRule,
    },
    /// A handler is already registered for this method and route.
    RouteConflict {
        /// The route that was registered twice.
        route: String,
    },
    /// A parameter and a wildcard were registered at the same segment.
    AmbiguousWildcardParam {
        /// The route whose insertion was rejected.
        route: String,
        /// The label of the dynamic segment already registered at that
        /// position, either `*` or `:name`.
        existing: String,
    },
}

/// The syntax rules a route pattern must follow.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum SyntaxRule {
    /// The route is the empty string.
    Empty,
    /// The route does not begin with `/`.
    MissingLeadingSlash,
    /// The route ends with `/` and is not the root route.
    TrailingSlash,
    /// The route contains an empty segment, as in `/a//b` or `//a`.
    EmptySegment,
}

impl fmt::Display for SyntaxRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Self::Empty => "routes must not be empty",
            Self::MissingLeadingSlash => "routes must begin with '/'",
            Self::TrailingSlash => "routes must not end with '/'",
            Self::EmptySegment => "routes must not contain empty segments",
        };
        f.write_str(msg)
    }
}

impl fmt::Display for InsertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPathSyntax { route, rule } => {
                write!(f, "invalid route '{}': {}", route, rule)
            }
            Self::RouteConflict { route } => {
                write!(f, "a handler is already registered for route '{}'", route)
            }
            Self::AmbiguousWildcardParam { route, existing } => write!(
                f,
                "route '{}' mixes a parameter and a wildcard at the same segment, '{}' is already registered there",
                route, existing
            ),
        }
    }
}

impl std::error::Error for InsertError {}

impl InsertError {
    pub(crate) fn syntax(route: &str, rule: SyntaxRule) -> Self {
        InsertError::InvalidPathSyntax {
            route: route.to_owned(),
            rule,
        }
    }
}

/// A failed match attempt.
///
/// ```
/// use segtrie::{MatchError, Router};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = Router::new();
/// router.get("/home", "Welcome!")?;
///
/// // no routes match
/// if let Err(err) = router.at("GET", "/foobar") {
///     assert_eq!(err, MatchError::NotFound);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MatchError {
    /// No node was reached for the method and path.
    NotFound,
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "matching route not found")
    }
}

impl std::error::Error for MatchError {}
