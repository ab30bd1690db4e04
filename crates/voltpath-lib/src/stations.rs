//! Charging-station catalog and its association with the road network.
//!
//! Stations are supplied per planning call. The index computes each
//! station's nearest network node once and groups stations by that node;
//! path resolution then reuses those associations instead of rescanning the
//! whole network.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::geo::Coordinate;
use crate::network::{NodeId, RoadNetwork};

/// Numeric identifier for a charging station.
pub type StationId = i64;

/// A public charging station supplied as part of the planning snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargingStation {
    pub id: StationId,
    pub name: String,
    pub position: Coordinate,
    pub power_kw: f64,
    pub connectors: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
}

impl ChargingStation {
    /// Whether the station offers the given connector. Comparison is
    /// case-insensitive so snapshot data and vehicle profiles do not need to
    /// agree on capitalization.
    pub fn supports_connector(&self, connector: &str) -> bool {
        self.connectors
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(connector))
    }
}

/// A station together with its precomputed nearest network node.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedStation {
    pub station: ChargingStation,
    pub nearest_node: NodeId,
    pub distance_km: f64,
}

/// A station resolved against a concrete path: the path node it attaches to
/// and the straight-line distance to that node.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyStation {
    pub station: ChargingStation,
    pub node: NodeId,
    pub distance_km: f64,
}

/// Node-keyed lookup of charging stations, built once per planning call.
#[derive(Debug, Clone, Default)]
pub struct StationIndex {
    stations: Vec<IndexedStation>,
    by_node: HashMap<NodeId, Vec<usize>>,
}

impl StationIndex {
    /// Associate every station with its nearest node by great-circle
    /// distance. Exact distance ties resolve to the node that appears first
    /// in the network's input order, keeping repeated builds identical.
    pub fn build(network: &RoadNetwork, stations: &[ChargingStation]) -> Self {
        let mut indexed = Vec::with_capacity(stations.len());
        let mut by_node: HashMap<NodeId, Vec<usize>> = HashMap::new();

        for station in stations {
            let Some((nearest_node, distance_km)) = nearest_node(network, station.position)
            else {
                debug!(station = station.id, "no network nodes to attach station to");
                continue;
            };
            by_node.entry(nearest_node).or_default().push(indexed.len());
            indexed.push(IndexedStation {
                station: station.clone(),
                nearest_node,
                distance_km,
            });
        }

        debug!(
            stations = indexed.len(),
            nodes = by_node.len(),
            "built station index"
        );
        Self {
            stations: indexed,
            by_node,
        }
    }

    /// All indexed stations in catalog input order.
    pub fn stations(&self) -> &[IndexedStation] {
        &self.stations
    }

    /// Stations whose nearest node is `node`, in catalog input order.
    pub fn at_node(&self, node: NodeId) -> Vec<&IndexedStation> {
        self.by_node
            .get(&node)
            .map(|slots| slots.iter().map(|&slot| &self.stations[slot]).collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Resolve the stations usable along a path at the given detour radius.
    ///
    /// Stations whose nearest node lies on the path attach there regardless
    /// of the radius. Every other station attaches to its closest path node
    /// when the straight-line distance is within `radius_km`, ties again
    /// resolving to the earlier path position.
    pub fn along_path(
        &self,
        network: &RoadNetwork,
        path: &[NodeId],
        radius_km: f64,
    ) -> HashMap<NodeId, Vec<NearbyStation>> {
        let on_path: HashSet<NodeId> = path.iter().copied().collect();
        let mut resolved: HashMap<NodeId, Vec<NearbyStation>> = HashMap::new();

        for indexed in &self.stations {
            if on_path.contains(&indexed.nearest_node) {
                resolved
                    .entry(indexed.nearest_node)
                    .or_default()
                    .push(NearbyStation {
                        station: indexed.station.clone(),
                        node: indexed.nearest_node,
                        distance_km: indexed.distance_km,
                    });
                continue;
            }

            let mut best: Option<(NodeId, f64)> = None;
            for &node in path {
                let Some(position) = network.position(node) else {
                    continue;
                };
                let distance = indexed.station.position.distance_km(&position);
                let better = match best {
                    Some((_, best_distance)) => distance < best_distance,
                    None => true,
                };
                if better {
                    best = Some((node, distance));
                }
            }

            if let Some((node, distance_km)) = best {
                if distance_km <= radius_km {
                    resolved.entry(node).or_default().push(NearbyStation {
                        station: indexed.station.clone(),
                        node,
                        distance_km,
                    });
                }
            }
        }

        resolved
    }
}

fn nearest_node(network: &RoadNetwork, position: Coordinate) -> Option<(NodeId, f64)> {
    let mut best: Option<(NodeId, f64)> = None;
    for node in network.nodes() {
        let distance = position.distance_km(&node.position);
        let better = match best {
            Some((_, best_distance)) => distance < best_distance,
            None => true,
        };
        if better {
            best = Some((node.id, distance));
        }
    }
    best
}

#[derive(Debug, Deserialize)]
struct StationsDocument {
    stations: Vec<ChargingStation>,
}

/// Load charging stations from a JSON document with a `stations` array.
pub fn load_stations(path: impl AsRef<Path>) -> Result<Vec<ChargingStation>> {
    let raw = fs::read_to_string(path.as_ref())?;
    let document: StationsDocument = serde_json::from_str(&raw)?;
    debug!(stations = document.stations.len(), "loaded charging stations");
    Ok(document.stations)
}
