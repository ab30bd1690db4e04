//! Road network snapshot types.
//!
//! The network is immutable reference data supplied by a collaborator once
//! per planning call: nodes with coordinates plus undirected road segments
//! stored once. Traversal in both directions is materialized later by the
//! graph index, not here.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::geo::Coordinate;

/// Numeric identifier for a road-network node.
pub type NodeId = i64;

/// Surface condition of a road segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadQuality {
    #[default]
    Normal,
    Poor,
}

/// Classification of a road segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoadCategory {
    #[default]
    Standard,
    Highway,
    Toll,
    Ferry,
}

/// A junction or point of interest in the road network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoadNode {
    pub id: NodeId,
    pub name: String,
    pub position: Coordinate,
}

/// An undirected road segment between two nodes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoadSegment {
    pub from: NodeId,
    pub to: NodeId,
    pub distance_km: f64,
    #[serde(default)]
    pub quality: RoadQuality,
    #[serde(default)]
    pub category: RoadCategory,
}

/// In-memory road network snapshot.
///
/// Nodes keep their input order so distance scans resolve exact ties the
/// same way on every call. Segments referencing unknown node ids are
/// tolerated: they only ever produce adjacency entries the search cannot
/// reach.
#[derive(Debug, Clone, Default)]
pub struct RoadNetwork {
    nodes: Vec<RoadNode>,
    index: HashMap<NodeId, usize>,
    segments: Vec<RoadSegment>,
}

impl RoadNetwork {
    /// Build a network from node and segment lists. The first definition of
    /// a duplicated node id wins; later ones are dropped.
    pub fn new(nodes: Vec<RoadNode>, segments: Vec<RoadSegment>) -> Self {
        let mut index = HashMap::with_capacity(nodes.len());
        let mut ordered = Vec::with_capacity(nodes.len());
        for node in nodes {
            if index.contains_key(&node.id) {
                debug!(id = node.id, "dropping duplicate node definition");
                continue;
            }
            index.insert(node.id, ordered.len());
            ordered.push(node);
        }
        Self {
            nodes: ordered,
            index,
            segments,
        }
    }

    /// Lookup a node by identifier.
    pub fn node(&self, id: NodeId) -> Option<&RoadNode> {
        self.index.get(&id).map(|&slot| &self.nodes[slot])
    }

    /// Lookup a node's display name.
    pub fn node_name(&self, id: NodeId) -> Option<&str> {
        self.node(id).map(|node| node.name.as_str())
    }

    /// Lookup a node's coordinate.
    pub fn position(&self, id: NodeId) -> Option<Coordinate> {
        self.node(id).map(|node| node.position)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Iterate over all nodes in input order.
    pub fn nodes(&self) -> impl Iterator<Item = &RoadNode> {
        self.nodes.iter()
    }

    /// Road segments in input order, each stored once.
    pub fn segments(&self) -> &[RoadSegment] {
        &self.segments
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[derive(Debug, Deserialize)]
struct NetworkDocument {
    nodes: Vec<RoadNode>,
    #[serde(default)]
    segments: Vec<RoadSegment>,
}

/// Load a road network from a JSON document with `nodes` and `segments`
/// arrays.
pub fn load_network(path: impl AsRef<Path>) -> Result<RoadNetwork> {
    let raw = fs::read_to_string(path.as_ref())?;
    let document: NetworkDocument = serde_json::from_str(&raw)?;
    debug!(
        nodes = document.nodes.len(),
        segments = document.segments.len(),
        "loaded road network"
    );
    Ok(RoadNetwork::new(document.nodes, document.segments))
}
