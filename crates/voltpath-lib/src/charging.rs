//! Battery feasibility simulation along a fixed path.
//!
//! The simulation walks the legs of an already-chosen path with a full
//! battery and charges at departure nodes: forcibly when the next leg would
//! exhaust the battery, defensively when the arrival level would dip below
//! the configured safety margin and a charger happens to be in reach. It
//! never alters the path itself; widening the detour radius and retrying is
//! the caller's job.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::geo::Coordinate;
use crate::network::NodeId;
use crate::path::RouteLeg;
use crate::stations::{NearbyStation, StationId};
use crate::vehicle::{battery_percent, charge_duration_hours, segment_energy_kwh, VehicleProfile};

/// A charging stop recorded while simulating or assembling a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargingStop {
    pub node: NodeId,
    pub station_id: StationId,
    pub station_name: String,
    pub position: Coordinate,
    pub duration_hours: f64,
    pub energy_kwh: f64,
    /// `true` for stops the plan depends on, either to finish a segment at
    /// all or to protect the safety margin. Informational stops appended by
    /// the assembler are `false`.
    pub required: bool,
}

/// Outcome of a feasible simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChargingPlan {
    pub stops: Vec<ChargingStop>,
    pub final_battery_kwh: f64,
    pub trace: Vec<String>,
}

/// First blocking reason of an infeasible simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct ChargingBlocked {
    pub node: NodeId,
    pub needed_kwh: f64,
    pub available_kwh: f64,
    pub trace: Vec<String>,
}

/// Result of one simulation pass at a fixed detour radius.
#[derive(Debug, Clone, PartialEq)]
pub enum Feasibility {
    Feasible(ChargingPlan),
    Blocked(ChargingBlocked),
}

/// Simulate traversing `legs` with a full battery, charging at the stations
/// resolved in `nearby`.
///
/// A leg whose energy need exceeds the current level forces a charge at the
/// departure node; the charge covers at least a full battery and, for needs
/// beyond the capacity, the whole segment need, so the level never goes
/// negative. Without a compatible station there the simulation reports the
/// blocking reason instead. When a leg is coverable but would leave the
/// battery below `safety_margin_percent`, a compatible station at the
/// departure node triggers a defensive top-up to full; absent one, the
/// vehicle rides through on the reduced margin.
pub fn simulate_charging(
    legs: &[RouteLeg],
    nearby: &HashMap<NodeId, Vec<NearbyStation>>,
    vehicle: &VehicleProfile,
    safety_margin_percent: f64,
) -> Result<Feasibility> {
    let capacity = vehicle.battery_kwh;
    let mut level = capacity;
    let mut stops = Vec::new();
    let mut trace = Vec::new();

    trace.push(format!("battery starts full at {capacity:.2} kWh"));

    for leg in legs {
        let need = segment_energy_kwh(vehicle, leg.distance_km)?;

        if need > level {
            let Some(station) = first_compatible(nearby, leg.from, vehicle) else {
                trace.push(format!(
                    "segment {} -> {} needs {:.2} kWh but only {:.2} kWh remain and node {} has no compatible station",
                    leg.from, leg.to, need, level, leg.from
                ));
                debug!(node = leg.from, needed = need, available = level, "charging blocked");
                return Ok(Feasibility::Blocked(ChargingBlocked {
                    node: leg.from,
                    needed_kwh: need,
                    available_kwh: level,
                    trace,
                }));
            };

            // Charge to full, or to the segment need when that exceeds the
            // battery capacity outright.
            let target = capacity.max(need);
            let energy = target - level;
            let duration = charge_duration_hours(energy, station.station.power_kw)?;
            trace.push(format!(
                "forced charge at node {} ({}): +{:.2} kWh in {:.2} h",
                leg.from, station.station.name, energy, duration
            ));
            stops.push(stop_at(station, leg.from, duration, energy, true));
            level = target;
        } else if battery_percent(level - need, capacity) < safety_margin_percent {
            if let Some(station) = first_compatible(nearby, leg.from, vehicle) {
                let energy = capacity - level;
                if energy > 0.0 {
                    let duration = charge_duration_hours(energy, station.station.power_kw)?;
                    trace.push(format!(
                        "defensive charge at node {} ({}): +{:.2} kWh to protect the {:.0}% margin",
                        leg.from, station.station.name, energy, safety_margin_percent
                    ));
                    stops.push(stop_at(station, leg.from, duration, energy, true));
                    level = capacity;
                }
            } else {
                trace.push(format!(
                    "continuing past node {} below the {:.0}% margin, no station in reach",
                    leg.from, safety_margin_percent
                ));
            }
        }

        level -= need;
        trace.push(format!("arrived at node {} with {:.2} kWh", leg.to, level));
    }

    debug!(
        stops = stops.len(),
        final_battery = level,
        "charging simulation feasible"
    );
    Ok(Feasibility::Feasible(ChargingPlan {
        stops,
        final_battery_kwh: level,
        trace,
    }))
}

/// First station at `node` that matches the vehicle's connector, in resolver
/// order.
fn first_compatible<'a>(
    nearby: &'a HashMap<NodeId, Vec<NearbyStation>>,
    node: NodeId,
    vehicle: &VehicleProfile,
) -> Option<&'a NearbyStation> {
    nearby
        .get(&node)?
        .iter()
        .find(|candidate| candidate.station.supports_connector(&vehicle.connector))
}

fn stop_at(
    nearby: &NearbyStation,
    node: NodeId,
    duration_hours: f64,
    energy_kwh: f64,
    required: bool,
) -> ChargingStop {
    ChargingStop {
        node,
        station_id: nearby.station.id,
        station_name: nearby.station.name.clone(),
        position: nearby.station.position,
        duration_hours,
        energy_kwh,
        required,
    }
}
