use crate::error::{InsertError, MatchError};
use crate::params::Params;
use crate::path::request_segments;

use std::collections::HashMap;

/// The kind of segment a [`Node`] represents.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeType {
    /// The root of a method's tree, labeled `/`.
    Root,
    /// A literal segment, matched by exact text.
    Static,
    /// A named parameter segment such as `:id`.
    Param,
    /// The single-segment wildcard `*`.
    Wildcard,
}

/// A vertex of the routing tree.
///
/// A node owns its static children keyed by their segment text, and at most
/// one dynamic child which is either a parameter or a wildcard, never both.
/// A node without a value only exists as a prefix of longer routes.
#[derive(Clone, Debug)]
pub struct Node<T> {
    label: String,
    node_type: NodeType,
    children: HashMap<String, Node<T>>,
    wild_child: Option<Box<Node<T>>>,
    value: Option<T>,
}

impl<T> Node<T> {
    pub(crate) fn root() -> Self {
        Node::new("/", NodeType::Root)
    }

    fn new(label: &str, node_type: NodeType) -> Self {
        Node {
            label: label.to_owned(),
            node_type,
            children: HashMap::new(),
            wild_child: None,
            value: None,
        }
    }

    /// The literal text of this node's segment: `/` for a root, `:name`
    /// for a parameter, `*` for a wildcard.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The kind of segment this node represents.
    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    /// The value registered at this node, if a route terminates here.
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// The name a parameter node captures under, without the leading `:`.
    ///
    /// A bare `:` segment captures under the empty name.
    pub fn param_name(&self) -> Option<&str> {
        match self.node_type {
            NodeType::Param => self.label.strip_prefix(':'),
            _ => None,
        }
    }

    // Attaches the value at the end of pre-validated route segments,
    // creating missing nodes on the way. The tree is left untouched if the
    // route is rejected.
    pub(crate) fn insert(&mut self, route: &str, segments: &[&str], value: T) -> Result<(), InsertError> {
        self.check(route, segments)?;

        let mut current = self;
        for segment in segments {
            current = current.child_get_or_create(route, segment);
        }

        current.value = Some(value);
        Ok(())
    }

    // Follows the route as far as it already exists and reports the error
    // inserting it would run into, if any.
    fn check(&self, route: &str, segments: &[&str]) -> Result<(), InsertError> {
        let mut current = self;
        for segment in segments {
            let next = match segment_type(segment) {
                NodeType::Static => current.children.get(*segment),
                node_type => match &current.wild_child {
                    Some(child) if child.node_type != node_type => {
                        return Err(InsertError::AmbiguousWildcardParam {
                            route: route.to_owned(),
                            existing: child.label.clone(),
                        });
                    }
                    child => child.as_deref(),
                },
            };

            match next {
                Some(next) => current = next,
                None => return Ok(()),
            }
        }

        if current.value.is_some() {
            return Err(InsertError::RouteConflict {
                route: route.to_owned(),
            });
        }

        Ok(())
    }

    fn child_get_or_create(&mut self, route: &str, segment: &str) -> &mut Node<T> {
        let node_type = segment_type(segment);

        if node_type == NodeType::Static {
            return self
                .children
                .entry(segment.to_owned())
                .or_insert_with(|| Node::new(segment, node_type));
        }

        let child = self
            .wild_child
            .get_or_insert_with(|| Box::new(Node::new(segment, node_type)));

        // There is a single parameter slot per node, the latest name wins.
        if child.label != segment {
            warn!(
                "route '{}' renames parameter '{}' to '{}'",
                route, child.label, segment
            );
            child.label = segment.to_owned();
        }

        child
    }

    // Static children take precedence over the dynamic child.
    fn child(&self, segment: &str) -> Option<&Node<T>> {
        self.children.get(segment).or(self.wild_child.as_deref())
    }

    // Walks the tree along `path`, one segment at a time, and returns the
    // node reached along with the captured parameters.
    //
    // The walk is greedy: at every segment a static child is preferred over
    // the dynamic child, and a failed segment is never retried through
    // another branch.
    pub(crate) fn at<'n, 'p>(&'n self, path: &'p str) -> Result<(&'n Node<T>, Params<'n, 'p>), MatchError> {
        let mut params = Params::new();

        if path == "/" {
            return Ok((self, params));
        }

        let mut current = self;
        for segment in request_segments(path) {
            current = current.child(segment).ok_or(MatchError::NotFound)?;

            if let Some(name) = current.param_name() {
                params.insert(name, segment);
            }
        }

        Ok((current, params))
    }

    // Collects the route of every node carrying a value below `prefix`.
    pub(crate) fn routes(&self, prefix: &str, out: &mut Vec<String>) {
        let route = self.route_below(prefix);

        if self.value.is_some() {
            out.push(display_route(&route));
        }

        let mut children: Vec<_> = self.children.iter().collect();
        children.sort_unstable_by(|a, b| a.0.cmp(b.0));
        for (_, child) in children {
            child.routes(&route, out);
        }

        if let Some(child) = &self.wild_child {
            child.routes(&route, out);
        }
    }

    // Like `routes`, but hands over the values along with their routes.
    pub(crate) fn into_routes(self, prefix: &str, out: &mut Vec<(String, T)>) {
        let route = self.route_below(prefix);

        if let Some(value) = self.value {
            out.push((display_route(&route), value));
        }

        let mut children: Vec<_> = self.children.into_iter().collect();
        children.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        for (_, child) in children {
            child.into_routes(&route, out);
        }

        if let Some(child) = self.wild_child {
            child.into_routes(&route, out);
        }
    }

    fn route_below(&self, prefix: &str) -> String {
        match self.node_type {
            NodeType::Root => String::new(),
            _ => format!("{}/{}", prefix, self.label),
        }
    }
}

fn segment_type(segment: &str) -> NodeType {
    match segment {
        "*" => NodeType::Wildcard,
        _ if segment.starts_with(':') => NodeType::Param,
        _ => NodeType::Static,
    }
}

fn display_route(route: &str) -> String {
    if route.is_empty() {
        "/".to_owned()
    } else {
        route.to_owned()
    }
}
