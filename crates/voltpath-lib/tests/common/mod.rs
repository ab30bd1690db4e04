//! Shared fixture helpers for the integration tests.
//!
//! The demo snapshot under `docs/fixtures` models a coastal corridor of
//! eight towns 56 km apart plus two off-route nodes, with chargers placed
//! so the small fixture vehicle needs defensive stops and the large one
//! drives the corridor nonstop.

use std::path::PathBuf;

use voltpath_lib::{
    load_network, load_stations, ChargingStation, RoadNetwork, VehicleCatalog, VehicleProfile,
};

#[allow(dead_code)]
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures")
}

#[allow(dead_code)]
pub fn fixture_network() -> RoadNetwork {
    load_network(fixtures_dir().join("network.json")).expect("load fixture network.json")
}

#[allow(dead_code)]
pub fn fixture_stations() -> Vec<ChargingStation> {
    load_stations(fixtures_dir().join("stations.json")).expect("load fixture stations.json")
}

/// Load a vehicle from the fixture catalog by id.
#[allow(dead_code)]
pub fn fixture_vehicle(id: &str) -> VehicleProfile {
    let catalog = VehicleCatalog::from_path(&fixtures_dir().join("vehicles.csv"))
        .expect("load fixture vehicles.csv");
    catalog
        .get(id)
        .unwrap_or_else(|| panic!("vehicle {id} present in fixtures"))
        .clone()
}
