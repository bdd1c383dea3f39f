use crate::error::{InsertError, MatchError};
use crate::params::Params;
use crate::path::route_segments;
use crate::tree::Node;

use std::collections::HashMap;

/// A forest of routing trees, one per HTTP method.
///
/// Routes are registered with [`insert`](Router::insert) (or one of the
/// method shortcuts) while the router is being built. Lookups through
/// [`at`](Router::at) only read the tree, so once registration is done the
/// router can be shared across threads behind an `Arc` and queried
/// concurrently.
///
/// ```rust
/// use segtrie::Router;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let mut router = Router::new();
/// router.get("/home", "Welcome!")?;
/// router.post("/users/:id", "A User")?;
///
/// let matched = router.at("POST", "/users/978")?;
/// assert_eq!(matched.params.get("id"), Some("978"));
/// assert_eq!(matched.value(), Some(&"A User"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct Router<T> {
    trees: HashMap<String, Node<T>>,
}

impl<T> Default for Router<T> {
    fn default() -> Self {
        Self {
            trees: HashMap::new(),
        }
    }
}

impl<T> Router<T> {
    /// Construct a new router.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a route into the router under the given method.
    ///
    /// Routes must begin with `/`, must not end with `/` unless they are
    /// the root route, and must not contain empty segments. A segment
    /// starting with `:` is a named parameter, a `*` segment is a wildcard
    /// matching exactly one request segment. Parameters and wildcards cannot
    /// share a position in the tree.
    ///
    /// ```rust
    /// # use segtrie::Router;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut router = Router::new();
    /// router.insert("GET", "/home", "Welcome!")?;
    /// router.insert("GET", "/users/:id", "A User")?;
    /// router.insert("GET", "/files/*", "A File")?;
    /// # Ok(())
    /// # }
    /// ```
    ///
    /// A rejected route leaves the router unchanged.
    pub fn insert(&mut self, method: &str, route: &str, value: T) -> Result<(), InsertError> {
        let segments = route_segments(route)?;

        self.trees
            .entry(method.to_owned())
            .or_insert_with(Node::root)
            .insert(route, &segments, value)?;

        debug!("registered route {} {}", method, route);
        Ok(())
    }

    /// Register a value for GET requests.
    pub fn get(&mut self, route: &str, value: T) -> Result<(), InsertError> {
        self.insert("GET", route, value)
    }

    /// Register a value for HEAD requests.
    pub fn head(&mut self, route: &str, value: T) -> Result<(), InsertError> {
        self.insert("HEAD", route, value)
    }

    /// Register a value for OPTIONS requests.
    pub fn options(&mut self, route: &str, value: T) -> Result<(), InsertError> {
        self.insert("OPTIONS", route, value)
    }

    /// Register a value for POST requests.
    pub fn post(&mut self, route: &str, value: T) -> Result<(), InsertError> {
        self.insert("POST", route, value)
    }

    /// Register a value for PUT requests.
    pub fn put(&mut self, route: &str, value: T) -> Result<(), InsertError> {
        self.insert("PUT", route, value)
    }

    /// Register a value for PATCH requests.
    pub fn patch(&mut self, route: &str, value: T) -> Result<(), InsertError> {
        self.insert("PATCH", route, value)
    }

    /// Register a value for DELETE requests.
    pub fn delete(&mut self, route: &str, value: T) -> Result<(), InsertError> {
        self.insert("DELETE", route, value)
    }

    /// Tries to match a request method and path against the registered
    /// routes.
    ///
    /// On success the returned [`Match`] holds the node the path leads to
    /// and the captured parameters. The node does not necessarily carry a
    /// value: `/order` reaches a node as soon as `/order/create` is
    /// registered. Callers should treat a match without a value as not
    /// routable.
    ///
    /// ```rust
    /// # use segtrie::Router;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut router = Router::new();
    /// router.get("/order/create", true)?;
    ///
    /// assert_eq!(router.at("GET", "/order/create")?.value(), Some(&true));
    /// assert_eq!(router.at("GET", "/order")?.value(), None);
    /// assert!(router.at("GET", "/order/delete").is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn at<'r, 'p>(&'r self, method: &str, path: &'p str) -> Result<Match<'r, 'p, T>, MatchError> {
        let result = match self.trees.get(method) {
            Some(root) => root.at(path),
            None => Err(MatchError::NotFound),
        };

        match result {
            Ok((node, params)) => Ok(Match { node, params }),
            Err(err) => {
                trace!("no route for {} {}", method, path);
                Err(err)
            }
        }
    }

    /// Returns the methods under which `path` leads to a registered value,
    /// in sorted order.
    ///
    /// The special path `*` lists every method with at least one route.
    ///
    /// ```rust
    /// # use segtrie::Router;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut router = Router::new();
    /// router.get("/products", "all products")?;
    /// router.post("/products", "product created")?;
    ///
    /// assert_eq!(router.allowed("/products"), ["GET", "POST"]);
    /// assert!(router.allowed("/orders").is_empty());
    /// # Ok(())
    /// # }
    /// ```
    pub fn allowed(&self, path: &str) -> Vec<&str> {
        let mut allowed: Vec<&str> = match path {
            "*" => self.trees.keys().map(String::as_str).collect(),
            _ => self
                .trees
                .iter()
                .filter(|(_, root)| matches!(root.at(path), Ok((node, _)) if node.value().is_some()))
                .map(|(method, _)| method.as_str())
                .collect(),
        };

        allowed.sort_unstable();
        allowed
    }

    /// Returns every registered `(method, route)` pair, sorted by method
    /// and then by route.
    ///
    /// Parameter segments are rendered with the name they currently hold.
    pub fn routes(&self) -> Vec<(&str, String)> {
        let mut methods: Vec<_> = self.trees.iter().collect();
        methods.sort_unstable_by(|a, b| a.0.cmp(b.0));

        let mut all = Vec::new();
        for (method, root) in methods {
            let mut routes = Vec::new();
            root.routes("", &mut routes);
            routes.sort_unstable();
            all.extend(routes.into_iter().map(|route| (method.as_str(), route)));
        }

        all
    }

    /// Merge a given router into the current one.
    ///
    /// Routes are inserted one by one. The first failure is returned, and
    /// routes merged before it stay registered.
    ///
    /// ```rust
    /// # use segtrie::Router;
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let mut root = Router::new();
    /// root.get("/home", "Welcome!")?;
    ///
    /// let mut child = Router::new();
    /// child.get("/users/:id", "A User")?;
    ///
    /// root.merge(child)?;
    /// assert!(root.at("GET", "/users/1").is_ok());
    /// # Ok(())
    /// # }
    /// ```
    pub fn merge(&mut self, other: Self) -> Result<(), InsertError> {
        let mut trees: Vec<_> = other.trees.into_iter().collect();
        trees.sort_unstable_by(|a, b| a.0.cmp(&b.0));

        for (method, root) in trees {
            let mut routes = Vec::new();
            root.into_routes("", &mut routes);

            for (route, value) in routes {
                self.insert(&method, &route, value)?;
            }
        }

        Ok(())
    }
}

/// A successful match consisting of the node the path led to and the
/// parameters captured on the way.
#[derive(Debug)]
pub struct Match<'r, 'p, T> {
    /// The node reached by the request path.
    pub node: &'r Node<T>,
    /// The path parameters captured while walking the tree.
    pub params: Params<'r, 'p>,
}

impl<'r, T> Match<'r, '_, T> {
    /// The value registered at the matched node, if any.
    pub fn value(&self) -> Option<&'r T> {
        self.node.value()
    }
}
