//! Core library for the voltpath EV route planner.
//!
//! The crate is organised around a handful of focused modules:
//!
//! - [`network`] - road network snapshot (nodes, segments) and its JSON loader
//! - [`graph`] - adjacency built from the network with biased edge weights
//! - [`path`] - A* search over the weighted graph
//! - [`stations`] - charging station catalog and nearest-node indexing
//! - [`vehicle`] - vehicle profiles, the bundled catalog and the energy model
//! - [`charging`] - battery simulation along a fixed path
//! - [`routing`] - the end-to-end planner tying the above together
//! - [`output`] - rendering planned routes for human consumption
//! - [`error`] - shared error type for the whole crate

#![deny(warnings)]

pub mod charging;
pub mod error;
pub mod geo;
pub mod graph;
pub mod network;
pub mod output;
pub mod path;
pub mod routing;
pub mod stations;
pub mod vehicle;

#[cfg(test)]
pub(crate) mod test_helpers;

pub use charging::{ChargingPlan, ChargingStop, Feasibility};
pub use error::{Error, Result};
pub use geo::Coordinate;
pub use graph::RoadGraph;
pub use network::{load_network, NodeId, RoadCategory, RoadNetwork, RoadNode, RoadQuality, RoadSegment};
pub use output::{RoutePoint, RouteSummary};
pub use path::{find_route_a_star, route_legs, RouteLeg};
pub use routing::{
    plan_route, plan_route_debug, PlanDiagnostics, PlannerConfig, RouteRequest, RouteResult,
};
pub use stations::{load_stations, ChargingStation, NearbyStation, StationId, StationIndex};
pub use vehicle::{VehicleCatalog, VehicleProfile};
