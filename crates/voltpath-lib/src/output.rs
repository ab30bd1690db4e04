use std::fmt::Write;

use serde::Serialize;

use crate::charging::ChargingStop;
use crate::error::{Error, Result};
use crate::network::{NodeId, RoadNetwork};
use crate::routing::RouteResult;

/// A point along the route with its resolved display name.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RoutePoint {
    pub id: NodeId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl RoutePoint {
    fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("<unknown>")
    }
}

/// Structured representation of a planned route that higher-level consumers
/// can serialise.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct RouteSummary {
    pub origin: RoutePoint,
    pub destination: RoutePoint,
    pub hops: usize,
    pub waypoints: Vec<RoutePoint>,
    pub stops: Vec<ChargingStop>,
    pub total_distance_km: f64,
    pub driving_hours: f64,
    pub charging_hours: f64,
    pub rest_hours: f64,
    pub trip_hours: f64,
    pub final_battery_kwh: f64,
    pub detour_radius_km: f64,
    pub warnings: Vec<String>,
}

impl RouteSummary {
    /// Convert a [`RouteResult`] into a summary with resolved node names.
    pub fn from_result(network: &RoadNetwork, result: &RouteResult) -> Result<Self> {
        let waypoints = result
            .path
            .iter()
            .map(|&id| RoutePoint {
                id,
                name: network.node_name(id).map(|name| name.to_string()),
            })
            .collect::<Vec<_>>();

        let origin = waypoints.first().cloned().ok_or(Error::EmptyRoute)?;
        let destination = waypoints.last().cloned().ok_or(Error::EmptyRoute)?;

        Ok(Self {
            origin,
            destination,
            hops: result.hop_count(),
            waypoints,
            stops: result.stops.clone(),
            total_distance_km: result.total_distance_km,
            driving_hours: result.driving_hours,
            charging_hours: result.charging_hours,
            rest_hours: result.rest_hours,
            trip_hours: result.trip_hours,
            final_battery_kwh: result.final_battery_kwh,
            detour_radius_km: result.detour_radius_km,
            warnings: result.warnings.clone(),
        })
    }

    /// Render the summary as plain text.
    pub fn render(&self) -> String {
        let mut buffer = String::new();
        let _ = writeln!(
            buffer,
            "Route: {} -> {} ({} hops)",
            self.origin.display_name(),
            self.destination.display_name(),
            self.hops
        );
        let _ = writeln!(
            buffer,
            "Distance {:.1} km | trip {:.2} h = driving {:.2} h + charging {:.2} h + rest {:.2} h",
            self.total_distance_km,
            self.trip_hours,
            self.driving_hours,
            self.charging_hours,
            self.rest_hours
        );
        let _ = writeln!(buffer, "Arrival battery {:.2} kWh", self.final_battery_kwh);

        for (index, point) in self.waypoints.iter().enumerate() {
            let _ = writeln!(buffer, "{:>3}: {} ({})", index, point.display_name(), point.id);
        }

        if !self.stops.is_empty() {
            let _ = writeln!(buffer, "Charging stops:");
            for stop in &self.stops {
                if stop.required {
                    let _ = writeln!(
                        buffer,
                        "  required: {} at {} ({}) +{:.2} kWh in {:.2} h",
                        stop.station_name,
                        self.waypoint_name(stop.node),
                        stop.node,
                        stop.energy_kwh,
                        stop.duration_hours
                    );
                } else {
                    let _ = writeln!(
                        buffer,
                        "  optional: {} at {} ({})",
                        stop.station_name,
                        self.waypoint_name(stop.node),
                        stop.node
                    );
                }
            }
        }

        if !self.warnings.is_empty() {
            let _ = writeln!(buffer, "Warnings:");
            for warning in &self.warnings {
                let _ = writeln!(buffer, "  - {warning}");
            }
        }

        buffer
    }

    fn waypoint_name(&self, node: NodeId) -> &str {
        self.waypoints
            .iter()
            .find(|point| point.id == node)
            .map(|point| point.display_name())
            .unwrap_or("<unknown>")
    }
}
