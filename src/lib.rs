//! A segment-based prefix tree HTTP route matcher.
//!
//! Routes are registered per HTTP method and split on `/` into segments.
//! Each segment becomes a node of that method's tree, so a lookup costs one
//! step per path segment no matter how many routes are registered.
//!
//! ```rust
//! use segtrie::Router;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut router = Router::new();
//! router.get("/", "Welcome!")?;
//! router.get("/users/:id", "A User")?;
//!
//! let matched = router.at("GET", "/users/978")?;
//! assert_eq!(matched.params.get("id"), Some("978"));
//! assert_eq!(matched.value(), Some(&"A User"));
//! # Ok(())
//! # }
//! ```
//!
//! # Segments
//!
//! ```text
//!  Syntax    Type
//!  user      static segment, matched by exact text
//!  :name     named parameter, captures one segment
//!  *         wildcard, matches one segment without capturing it
//! ```
//!
//! A wildcard matches exactly one segment, never a suffix:
//!
//! ```text
//!  Route: /order/*
//!
//!  /order/abc              match
//!  /order/abc/def          no match
//!  /order                  no match
//! ```
//!
//! A parameter and a wildcard cannot be registered at the same position;
//! the second registration fails with
//! [`InsertError::AmbiguousWildcardParam`].
//!
//! # Precedence
//!
//! At every segment a static child is tried first, then the parameter or
//! wildcard child. The lookup never backtracks: with `/user/new/edit` and
//! `/user/:id/view` registered, `/user/new/view` is not found, because `new`
//! commits the lookup to the static branch.
//!
//! # Matches without a value
//!
//! [`Router::at`] succeeds as soon as the path leads to a node, even if no
//! route terminates there. Use [`Match::value`] to tell the two apart.
#![deny(clippy::all)]
#![forbid(unsafe_code)]

#[macro_use]
extern crate log;

mod error;
mod params;
mod path;
mod router;
mod tree;

pub use error::{InsertError, MatchError, SyntaxRule};
pub use params::{Params, ParamsIter};
pub use router::{Match, Router};
pub use tree::{Node, NodeType};
