use serde::Deserialize;

use crate::store::{GeoAttributes, GraphStore};

/// Errors surfaced while ingesting a serialized graph dataset. These are
/// fatal load errors: the dataset is assumed pre-validated upstream, so any
/// of these means the file itself is wrong, not the data model.
#[derive(Debug)]
pub enum DatasetError {
    Parse(String),
    DuplicateNode { key: String },
    UnknownEndpoint { index: usize, key: String },
}

impl std::fmt::Display for DatasetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DatasetError::Parse(msg) => write!(f, "dataset parse error: {msg}"),
            DatasetError::DuplicateNode { key } => {
                write!(f, "duplicate node key {key:?}")
            }
            DatasetError::UnknownEndpoint { index, key } => {
                write!(f, "edge at index {index} references unknown node {key:?}")
            }
        }
    }
}

impl std::error::Error for DatasetError {}

/// Serialized graph document: `{"nodes": [...], "edges": [...]}` with
/// per-element attribute objects, the export format of common JS graph
/// libraries.
#[derive(Debug, Deserialize)]
struct DatasetDoc {
    #[serde(default)]
    nodes: Vec<DatasetNode>,
    #[serde(default)]
    edges: Vec<DatasetEdge>,
}

#[derive(Debug, Deserialize)]
struct DatasetNode {
    key: String,
    attributes: DatasetNodeAttributes,
}

#[derive(Debug, Deserialize)]
struct DatasetNodeAttributes {
    latitude: f64,
    longitude: f64,
    #[serde(rename = "fullName")]
    full_name: String,
}

#[derive(Debug, Deserialize)]
struct DatasetEdge {
    source: String,
    target: String,
    #[serde(default)]
    attributes: DatasetEdgeAttributes,
}

#[derive(Debug, Deserialize)]
struct DatasetEdgeAttributes {
    #[serde(default = "default_weight")]
    weight: f64,
}

impl Default for DatasetEdgeAttributes {
    fn default() -> Self {
        Self {
            weight: default_weight(),
        }
    }
}

fn default_weight() -> f64 {
    1.0
}

/// Bulk-import a JSON dataset into a fresh [`GraphStore`].
pub fn store_from_json_str(payload: &str) -> Result<GraphStore, DatasetError> {
    let doc: DatasetDoc =
        serde_json::from_str(payload).map_err(|e| DatasetError::Parse(e.to_string()))?;

    let mut store = GraphStore::new();
    for node in doc.nodes {
        let attrs = GeoAttributes::new(
            node.attributes.latitude,
            node.attributes.longitude,
            node.attributes.full_name,
        );
        if !store.add_node(node.key.clone(), attrs) {
            return Err(DatasetError::DuplicateNode { key: node.key });
        }
    }
    for (index, edge) in doc.edges.into_iter().enumerate() {
        for key in [&edge.source, &edge.target] {
            if !store.contains_node(key) {
                return Err(DatasetError::UnknownEndpoint {
                    index,
                    key: key.clone(),
                });
            }
        }
        store.add_edge(&edge.source, &edge.target, edge.attributes.weight);
    }
    Ok(store)
}

#[cfg(test)]
mod tests {
    use super::{DatasetError, store_from_json_str};
    use pretty_assertions::assert_eq;

    const SMALL: &str = r#"{
        "nodes": [
            {"key": "cdg", "attributes": {"latitude": 49.0097, "longitude": 2.5479, "fullName": "Paris Charles de Gaulle"}},
            {"key": "lhr", "attributes": {"latitude": 51.4700, "longitude": -0.4543, "fullName": "London Heathrow"}}
        ],
        "edges": [
            {"source": "cdg", "target": "lhr", "attributes": {"weight": 3.0}}
        ]
    }"#;

    #[test]
    fn loads_nodes_edges_and_attributes() {
        let store = store_from_json_str(SMALL).expect("load");
        assert_eq!(store.node_count(), 2);
        assert_eq!(store.edge_count(), 1);

        let cdg = store.node("cdg").expect("cdg");
        assert_eq!(cdg.geo.full_name, "Paris Charles de Gaulle");
        assert_eq!(cdg.geo.latitude, 49.0097);
        assert_eq!(store.edges()[0].weight, 3.0);
    }

    #[test]
    fn edge_weight_defaults_to_one() {
        let payload = r#"{
            "nodes": [
                {"key": "a", "attributes": {"latitude": 0.0, "longitude": 0.0, "fullName": "A"}},
                {"key": "b", "attributes": {"latitude": 1.0, "longitude": 1.0, "fullName": "B"}}
            ],
            "edges": [{"source": "a", "target": "b"}]
        }"#;
        let store = store_from_json_str(payload).expect("load");
        assert_eq!(store.edges()[0].weight, 1.0);
    }

    #[test]
    fn rejects_unknown_edge_endpoint() {
        let payload = r#"{
            "nodes": [
                {"key": "a", "attributes": {"latitude": 0.0, "longitude": 0.0, "fullName": "A"}}
            ],
            "edges": [{"source": "a", "target": "ghost"}]
        }"#;
        match store_from_json_str(payload) {
            Err(DatasetError::UnknownEndpoint { index, key }) => {
                assert_eq!(index, 0);
                assert_eq!(key, "ghost");
            }
            other => panic!("expected UnknownEndpoint, got {other:?}"),
        }
    }

    #[test]
    fn rejects_duplicate_node_keys() {
        let payload = r#"{
            "nodes": [
                {"key": "a", "attributes": {"latitude": 0.0, "longitude": 0.0, "fullName": "A"}},
                {"key": "a", "attributes": {"latitude": 1.0, "longitude": 1.0, "fullName": "A again"}}
            ]
        }"#;
        assert!(matches!(
            store_from_json_str(payload),
            Err(DatasetError::DuplicateNode { .. })
        ));
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        assert!(matches!(
            store_from_json_str("{not json"),
            Err(DatasetError::Parse(_))
        ));
    }
}
