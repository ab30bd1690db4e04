//! Route planning orchestration.
//!
//! This module provides:
//! - [`PlannerConfig`] - Tunable planning parameters and their defaults
//! - [`RouteRequest`] - High-level route planning request
//! - [`RouteResult`] - Planned route with charging stops and trip time
//! - [`plan_route`] - Main entry point for computing routes
//! - [`plan_route_debug`] - Entry point that also captures diagnostics
//!
//! Planning runs in stages: a battery-oblivious shortest-path search fixes
//! the geometry, the station index resolves chargers near that path, and the
//! charging simulation checks the path is drivable. When the tight detour
//! radius yields no feasible plan the simulation is retried once with the
//! widened radius before giving up.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::debug;

use crate::charging::{simulate_charging, ChargingBlocked, ChargingPlan, ChargingStop, Feasibility};
use crate::error::{Error, Result};
use crate::graph::RoadGraph;
use crate::network::{NodeId, RoadNetwork};
use crate::path::{find_route_a_star, route_legs, RouteLeg};
use crate::stations::{ChargingStation, NearbyStation, StationId, StationIndex};
use crate::vehicle::VehicleProfile;

/// Tunable planning parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlannerConfig {
    /// Straight-line distance within which an off-path station still counts
    /// as reachable from the route.
    pub detour_radius_km: f64,
    /// Radius of the second attempt after a failed tight-radius simulation.
    pub widened_detour_radius_km: f64,
    /// Arrival battery percentage below which a defensive top-up triggers.
    pub battery_safety_margin_percent: f64,
    /// Assumed cruising speed for driving-time estimates.
    pub average_speed_kmh: f64,
    /// Driving time between rest breaks.
    pub rest_interval_hours: f64,
    /// Duration of one rest break.
    pub rest_duration_minutes: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            detour_radius_km: 5.0,
            widened_detour_radius_km: 10.0,
            battery_safety_margin_percent: 20.0,
            average_speed_kmh: 60.0,
            rest_interval_hours: 2.0,
            rest_duration_minutes: 15.0,
        }
    }
}

impl PlannerConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        let positives = [
            (self.detour_radius_km, "detour_radius_km"),
            (self.widened_detour_radius_km, "widened_detour_radius_km"),
            (self.average_speed_kmh, "average_speed_kmh"),
            (self.rest_interval_hours, "rest_interval_hours"),
        ];
        for (value, field) in positives {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::InvalidPlannerConfig {
                    message: format!("{field} must be a finite positive number"),
                });
            }
        }

        if !self.rest_duration_minutes.is_finite() || self.rest_duration_minutes < 0.0 {
            return Err(Error::InvalidPlannerConfig {
                message: "rest_duration_minutes must be finite and non-negative".to_string(),
            });
        }

        if !self.battery_safety_margin_percent.is_finite()
            || !(0.0..100.0).contains(&self.battery_safety_margin_percent)
        {
            return Err(Error::InvalidPlannerConfig {
                message: format!(
                    "battery_safety_margin_percent must be within [0, 100), got {}",
                    self.battery_safety_margin_percent
                ),
            });
        }

        if self.widened_detour_radius_km < self.detour_radius_km {
            return Err(Error::InvalidPlannerConfig {
                message: "widened_detour_radius_km must not be smaller than detour_radius_km"
                    .to_string(),
            });
        }

        Ok(())
    }
}

/// High-level route planning request.
#[derive(Debug, Clone)]
pub struct RouteRequest {
    pub origin: NodeId,
    pub destination: NodeId,
    pub config: PlannerConfig,
}

impl RouteRequest {
    /// Request a route with the default planner configuration.
    pub fn new(origin: NodeId, destination: NodeId) -> Self {
        Self {
            origin,
            destination,
            config: PlannerConfig::default(),
        }
    }

    pub fn with_config(mut self, config: PlannerConfig) -> Self {
        self.config = config;
        self
    }
}

/// Planned route returned by the library.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResult {
    pub origin: NodeId,
    pub destination: NodeId,
    /// Node sequence from origin to destination inclusive.
    pub path: Vec<NodeId>,
    /// Required stops in traversal order, followed by informational optional
    /// stops ordered by their position along the path.
    pub stops: Vec<ChargingStop>,
    pub total_distance_km: f64,
    pub driving_hours: f64,
    pub charging_hours: f64,
    pub rest_hours: f64,
    /// Driving, charging and rest time combined.
    pub trip_hours: f64,
    /// Battery level on arrival.
    pub final_battery_kwh: f64,
    /// Detour radius the successful simulation used.
    pub detour_radius_km: f64,
    /// Notes about the planning run, e.g. that the widened radius was
    /// needed.
    pub warnings: Vec<String>,
}

impl RouteResult {
    /// Number of traversed edges in the route.
    pub fn hop_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// The stops the plan depends on, without the informational ones.
    pub fn required_stops(&self) -> impl Iterator<Item = &ChargingStop> {
        self.stops.iter().filter(|stop| stop.required)
    }
}

/// Extra observability captured by [`plan_route_debug`].
#[derive(Debug, Clone, Default)]
pub struct PlanDiagnostics {
    /// Distance-optimal path found before feasibility analysis.
    pub optimal_path: Vec<NodeId>,
    /// Station map resolved at the widened radius, regardless of which
    /// radius the plan ended up using.
    pub widened_nearby: HashMap<NodeId, Vec<NearbyStation>>,
    /// Simulation narration across all attempts.
    pub trace: Vec<String>,
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Rest time mandated by the driving duration: one break per completed rest
/// interval.
fn rest_hours(driving_hours: f64, config: &PlannerConfig) -> f64 {
    let breaks = (driving_hours / config.rest_interval_hours).floor();
    breaks * config.rest_duration_minutes / 60.0
}

/// Append an informational stop for every resolved station the simulation
/// never charged at, walking the path so the stops come out in route order.
fn append_optional_stops(
    stops: &mut Vec<ChargingStop>,
    path: &[NodeId],
    nearby: &HashMap<NodeId, Vec<NearbyStation>>,
) {
    let used: HashSet<StationId> = stops.iter().map(|stop| stop.station_id).collect();

    for node in path {
        let Some(candidates) = nearby.get(node) else {
            continue;
        };
        for candidate in candidates {
            if used.contains(&candidate.station.id) {
                continue;
            }
            stops.push(ChargingStop {
                node: *node,
                station_id: candidate.station.id,
                station_name: candidate.station.name.clone(),
                position: candidate.station.position,
                duration_hours: 0.0,
                energy_kwh: 0.0,
                required: false,
            });
        }
    }
}

/// Combine a feasible charging plan with the path geometry into the final
/// route result.
fn assemble_result(
    request: &RouteRequest,
    path: Vec<NodeId>,
    legs: &[RouteLeg],
    plan: ChargingPlan,
    nearby: &HashMap<NodeId, Vec<NearbyStation>>,
    detour_radius_km: f64,
    warnings: Vec<String>,
) -> RouteResult {
    let config = &request.config;
    let total_distance_km: f64 = legs.iter().map(|leg| leg.distance_km).sum();
    let driving_hours = total_distance_km / config.average_speed_kmh;
    let charging_hours: f64 = plan.stops.iter().map(|stop| stop.duration_hours).sum();
    let rest_hours = rest_hours(driving_hours, config);

    let mut stops = plan.stops;
    append_optional_stops(&mut stops, &path, nearby);

    RouteResult {
        origin: request.origin,
        destination: request.destination,
        path,
        stops,
        total_distance_km,
        driving_hours,
        charging_hours,
        rest_hours,
        trip_hours: driving_hours + charging_hours + rest_hours,
        final_battery_kwh: plan.final_battery_kwh,
        detour_radius_km,
        warnings,
    }
}

fn blocked_to_error(blocked: &ChargingBlocked) -> Error {
    Error::NoCompatibleOrNoStation {
        node: blocked.node,
        needed_kwh: blocked.needed_kwh,
        available_kwh: blocked.available_kwh,
    }
}

// =============================================================================
// Main Entry Points
// =============================================================================

/// Plan a battery-feasible route between two nodes.
///
/// This is the main entry point for route planning. It:
/// 1. Validates the configuration and the vehicle profile
/// 2. Checks both endpoints exist in the network
/// 3. Builds the routing graph and the station index
/// 4. Finds the distance-optimal path, ignoring the battery
/// 5. Simulates charging at the tight detour radius, retrying once with the
///    widened radius before declaring the route infeasible
pub fn plan_route(
    network: &RoadNetwork,
    stations: &[ChargingStation],
    vehicle: &VehicleProfile,
    request: &RouteRequest,
) -> Result<RouteResult> {
    plan(network, stations, vehicle, request, None)
}

/// Plan a route and capture the optimal path, the widened-radius station
/// map, and the full simulation trace alongside the result. Planning
/// semantics are identical to [`plan_route`].
pub fn plan_route_debug(
    network: &RoadNetwork,
    stations: &[ChargingStation],
    vehicle: &VehicleProfile,
    request: &RouteRequest,
) -> (Result<RouteResult>, PlanDiagnostics) {
    let mut diagnostics = PlanDiagnostics::default();
    let result = plan(network, stations, vehicle, request, Some(&mut diagnostics));
    (result, diagnostics)
}

fn plan(
    network: &RoadNetwork,
    stations: &[ChargingStation],
    vehicle: &VehicleProfile,
    request: &RouteRequest,
    mut diagnostics: Option<&mut PlanDiagnostics>,
) -> Result<RouteResult> {
    let config = &request.config;

    // Step 1: Validate inputs
    config.validate()?;
    vehicle.validate()?;

    // Step 2: Both endpoints must exist before any search runs
    for id in [request.origin, request.destination] {
        if !network.contains(id) {
            return Err(Error::NodeNotFound { id });
        }
    }

    debug!(
        origin = request.origin,
        destination = request.destination,
        vehicle = %vehicle.id,
        "planning route"
    );

    // Step 3: Build the per-call snapshot structures
    let graph = RoadGraph::build(network);
    let index = StationIndex::build(network, stations);

    // Step 4: Distance-optimal path, battery ignored
    let path = find_route_a_star(&graph, network, request.origin, request.destination).ok_or(
        Error::NoPathFound {
            origin: request.origin,
            destination: request.destination,
        },
    )?;
    let legs = route_legs(&graph, &path).ok_or(Error::NoPathFound {
        origin: request.origin,
        destination: request.destination,
    })?;
    let total_distance_km: f64 = legs.iter().map(|leg| leg.distance_km).sum();

    if let Some(diag) = diagnostics.as_deref_mut() {
        diag.optimal_path = path.clone();
    }

    // Step 5: Feasibility at the tight radius
    let tight_nearby = index.along_path(network, &path, config.detour_radius_km);
    match simulate_charging(
        &legs,
        &tight_nearby,
        vehicle,
        config.battery_safety_margin_percent,
    )? {
        Feasibility::Feasible(plan) => {
            if let Some(diag) = diagnostics.as_deref_mut() {
                diag.trace.extend(plan.trace.iter().cloned());
                diag.widened_nearby =
                    index.along_path(network, &path, config.widened_detour_radius_km);
            }
            Ok(assemble_result(
                request,
                path,
                &legs,
                plan,
                &tight_nearby,
                config.detour_radius_km,
                Vec::new(),
            ))
        }
        Feasibility::Blocked(blocked) => {
            debug!(
                node = blocked.node,
                radius = config.detour_radius_km,
                "tight radius infeasible, widening"
            );
            if let Some(diag) = diagnostics.as_deref_mut() {
                diag.trace.extend(blocked.trace.iter().cloned());
            }

            // Step 6: Retry once at the widened radius
            let widened_nearby =
                index.along_path(network, &path, config.widened_detour_radius_km);
            if let Some(diag) = diagnostics.as_deref_mut() {
                diag.widened_nearby = widened_nearby.clone();
            }

            match simulate_charging(
                &legs,
                &widened_nearby,
                vehicle,
                config.battery_safety_margin_percent,
            )? {
                Feasibility::Feasible(plan) => {
                    if let Some(diag) = diagnostics.as_deref_mut() {
                        diag.trace.extend(plan.trace.iter().cloned());
                    }
                    let warnings = vec![format!(
                        "no feasible charging plan within {:.0} km of the route; \
                         stations up to {:.0} km away were considered",
                        config.detour_radius_km, config.widened_detour_radius_km
                    )];
                    Ok(assemble_result(
                        request,
                        path,
                        &legs,
                        plan,
                        &widened_nearby,
                        config.widened_detour_radius_km,
                        warnings,
                    ))
                }
                Feasibility::Blocked(final_blocked) => {
                    if let Some(diag) = diagnostics.as_deref_mut() {
                        diag.trace.extend(final_blocked.trace.iter().cloned());
                    }
                    Err(Error::InfeasibleAtAnyRadius {
                        widened_radius_km: config.widened_detour_radius_km,
                        cause: Box::new(blocked_to_error(&final_blocked)),
                        optimal_path: path,
                        optimal_distance_km: total_distance_km,
                        trace: final_blocked.trace,
                    })
                }
            }
        }
    }
}
