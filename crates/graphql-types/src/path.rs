//! Response path tracking (§4.7 "Path"): every completion maintains a path
//! of response keys and list indices, included in every error. Implemented
//! as structural sharing (§5 "The `path` list is logically immutable via
//! structural sharing per frame") via an `Arc`-linked list rather than a
//! cloned `Vec` at each recursion frame.

use std::sync::Arc;

#[derive(Clone, Debug, PartialEq)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

#[derive(Clone, Debug, Default)]
pub struct Path {
    head: Option<Arc<PathNode>>,
}

#[derive(Debug)]
struct PathNode {
    parent: Option<Arc<PathNode>>,
    segment: PathSegment,
}

impl Path {
    pub fn new() -> Self {
        Path { head: None }
    }

    pub fn with_key(&self, key: impl Into<String>) -> Self {
        Path { head: Some(Arc::new(PathNode { parent: self.head.clone(), segment: PathSegment::Key(key.into()) })) }
    }

    pub fn with_index(&self, index: usize) -> Self {
        Path { head: Some(Arc::new(PathNode { parent: self.head.clone(), segment: PathSegment::Index(index) })) }
    }

    /// Materializes the path root-to-leaf, for error reporting and for the
    /// wire-stable `GraphQLError.path`.
    pub fn to_vec(&self) -> Vec<PathSegment> {
        let mut segments = Vec::new();
        let mut node = self.head.as_ref();
        while let Some(n) = node {
            segments.push(n.segment.clone());
            node = n.parent.as_ref();
        }
        segments.reverse();
        segments
    }
}

impl PartialEq for Path {
    fn eq(&self, other: &Self) -> bool {
        self.to_vec() == other.to_vec()
    }
}
