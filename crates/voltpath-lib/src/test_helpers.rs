// Test-only helpers for `voltpath-lib` tests
#![allow(dead_code)]

use crate::geo::Coordinate;
use crate::network::{NodeId, RoadCategory, RoadNetwork, RoadNode, RoadQuality, RoadSegment};
use crate::stations::{ChargingStation, StationId};

/// Builder to create small `RoadNetwork` fixtures with sensible defaults.
pub struct NetworkBuilder {
    nodes: Vec<RoadNode>,
    segments: Vec<RoadSegment>,
}

impl NetworkBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            segments: Vec::new(),
        }
    }

    pub fn node(mut self, id: NodeId, lat: f64, lng: f64) -> Self {
        self.nodes.push(RoadNode {
            id,
            name: format!("node-{id}"),
            position: Coordinate::new(lat, lng),
        });
        self
    }

    pub fn named_node(mut self, id: NodeId, name: &str, lat: f64, lng: f64) -> Self {
        self.nodes.push(RoadNode {
            id,
            name: name.to_string(),
            position: Coordinate::new(lat, lng),
        });
        self
    }

    pub fn segment(self, from: NodeId, to: NodeId, distance_km: f64) -> Self {
        self.segment_with(
            from,
            to,
            distance_km,
            RoadQuality::Normal,
            RoadCategory::Standard,
        )
    }

    pub fn segment_with(
        mut self,
        from: NodeId,
        to: NodeId,
        distance_km: f64,
        quality: RoadQuality,
        category: RoadCategory,
    ) -> Self {
        self.segments.push(RoadSegment {
            from,
            to,
            distance_km,
            quality,
            category,
        });
        self
    }

    pub fn build(self) -> RoadNetwork {
        RoadNetwork::new(self.nodes, self.segments)
    }
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder to create `ChargingStation` instances in tests with sensible
/// defaults: 50 kW, a single `ccs` connector, positioned at the origin.
pub struct StationBuilder {
    station: ChargingStation,
}

impl StationBuilder {
    #[must_use]
    pub fn new(id: StationId) -> Self {
        Self {
            station: ChargingStation {
                id,
                name: format!("station-{id}"),
                position: Coordinate::new(0.0, 0.0),
                power_kw: 50.0,
                connectors: vec!["ccs".to_string()],
                amenities: Vec::new(),
            },
        }
    }

    pub fn at(mut self, lat: f64, lng: f64) -> Self {
        self.station.position = Coordinate::new(lat, lng);
        self
    }

    pub fn name(mut self, name: &str) -> Self {
        self.station.name = name.to_string();
        self
    }

    pub fn power_kw(mut self, power_kw: f64) -> Self {
        self.station.power_kw = power_kw;
        self
    }

    /// Replace the connector list with a single connector.
    pub fn connector(mut self, connector: &str) -> Self {
        self.station.connectors = vec![connector.to_string()];
        self
    }

    pub fn add_connector(mut self, connector: &str) -> Self {
        self.station.connectors.push(connector.to_string());
        self
    }

    pub fn amenity(mut self, amenity: &str) -> Self {
        self.station.amenities.push(amenity.to_string());
        self
    }

    pub fn build(self) -> ChargingStation {
        self.station
    }
}
