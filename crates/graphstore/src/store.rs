use std::collections::{BTreeMap, BTreeSet};

/// Node keys are the dataset's own string identifiers.
pub type NodeKey = String;

/// Geographic source attributes, the immutable truth a node was loaded with.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoAttributes {
    pub latitude: f64,
    pub longitude: f64,
    pub full_name: String,
}

impl GeoAttributes {
    pub fn new(latitude: f64, longitude: f64, full_name: impl Into<String>) -> Self {
        Self {
            latitude,
            longitude,
            full_name: full_name.into(),
        }
    }
}

/// Display attributes derived from the geographic ones, written once at
/// import time and consumed by the renderer afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodeDisplay {
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub label: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NodeRecord {
    pub geo: GeoAttributes,
    pub display: NodeDisplay,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EdgeRecord {
    pub source: NodeKey,
    pub target: NodeKey,
    pub weight: f64,
}

impl EdgeRecord {
    /// Whether `key` is one of this edge's extremities.
    pub fn touches(&self, key: &str) -> bool {
        self.source == key || self.target == key
    }
}

/// In-memory graph data model: node records keyed by string, an edge list,
/// and an adjacency index for neighbor and degree lookups.
///
/// Iteration order is the `BTreeMap` key order, so queries are
/// deterministic across runs.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct GraphStore {
    nodes: BTreeMap<NodeKey, NodeRecord>,
    edges: Vec<EdgeRecord>,
    adjacency: BTreeMap<NodeKey, BTreeSet<NodeKey>>,
    degrees: BTreeMap<NodeKey, usize>,
}

impl GraphStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a node with its geographic attributes. Returns `false` if the
    /// key is already present (the existing record is left untouched).
    pub fn add_node(&mut self, key: impl Into<NodeKey>, geo: GeoAttributes) -> bool {
        let key = key.into();
        if self.nodes.contains_key(&key) {
            return false;
        }
        self.nodes.insert(
            key,
            NodeRecord {
                geo,
                display: NodeDisplay::default(),
            },
        );
        true
    }

    /// Insert an edge between two existing nodes. Returns `false` when
    /// either endpoint is unknown.
    pub fn add_edge(&mut self, source: &str, target: &str, weight: f64) -> bool {
        if !self.nodes.contains_key(source) || !self.nodes.contains_key(target) {
            return false;
        }
        self.edges.push(EdgeRecord {
            source: source.to_string(),
            target: target.to_string(),
            weight,
        });
        self.adjacency
            .entry(source.to_string())
            .or_default()
            .insert(target.to_string());
        self.adjacency
            .entry(target.to_string())
            .or_default()
            .insert(source.to_string());
        // Incident-edge count; a self-loop contributes two endpoints.
        *self.degrees.entry(source.to_string()).or_default() += 1;
        *self.degrees.entry(target.to_string()).or_default() += 1;
        true
    }

    pub fn contains_node(&self, key: &str) -> bool {
        self.nodes.contains_key(key)
    }

    pub fn node(&self, key: &str) -> Option<&NodeRecord> {
        self.nodes.get(key)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn node_keys(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(String::as_str)
    }

    pub fn nodes(&self) -> impl Iterator<Item = (&str, &NodeRecord)> {
        self.nodes.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn edges(&self) -> &[EdgeRecord] {
        &self.edges
    }

    /// Update a node's display attributes in place. Returns `false` for an
    /// unknown key.
    pub fn update_display(&mut self, key: &str, update: impl FnOnce(&mut NodeDisplay)) -> bool {
        match self.nodes.get_mut(key) {
            Some(record) => {
                update(&mut record.display);
                true
            }
            None => false,
        }
    }

    pub fn neighbors(&self, key: &str) -> impl Iterator<Item = &str> {
        self.adjacency
            .get(key)
            .into_iter()
            .flatten()
            .map(String::as_str)
    }

    pub fn is_neighbor(&self, a: &str, b: &str) -> bool {
        self.adjacency.get(a).is_some_and(|n| n.contains(b))
    }

    /// Number of edge endpoints incident to the node. Self-loops count
    /// twice; unknown keys report zero.
    pub fn degree(&self, key: &str) -> usize {
        self.degrees.get(key).copied().unwrap_or(0)
    }
}
