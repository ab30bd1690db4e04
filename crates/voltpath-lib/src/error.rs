use thiserror::Error;

use crate::network::NodeId;

/// Convenient result alias for the voltpath library.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level library error type.
///
/// The first four variants are the stable reason codes a planning call can
/// surface; the remainder cover catalog and configuration validation. All
/// failures are returned as values, nothing is panicked across the library
/// boundary.
#[derive(Debug, Error)]
pub enum Error {
    /// Origin or destination id is absent from the road network.
    #[error("node {id} is not part of the road network")]
    NodeNotFound { id: NodeId },

    /// The search frontier emptied before reaching the destination.
    #[error("no drivable path between nodes {origin} and {destination}")]
    NoPathFound { origin: NodeId, destination: NodeId },

    /// A battery-exhausting segment had no usable charging option at its
    /// departure node.
    #[error(
        "segment leaving node {node} needs {needed_kwh:.2} kWh with {available_kwh:.2} kWh \
         in the battery and no compatible charging station in reach"
    )]
    NoCompatibleOrNoStation {
        node: NodeId,
        needed_kwh: f64,
        available_kwh: f64,
    },

    /// Charging remained infeasible even after the widened detour retry.
    ///
    /// Carries the blocking reason of the final attempt together with the
    /// best-effort partial data: the distance-optimal path that was found
    /// before feasibility analysis and the planner's diagnostic trace.
    #[error("no feasible charging plan even with the detour radius widened to {widened_radius_km} km")]
    InfeasibleAtAnyRadius {
        widened_radius_km: f64,
        #[source]
        cause: Box<Error>,
        optimal_path: Vec<NodeId>,
        optimal_distance_km: f64,
        trace: Vec<String>,
    },

    /// Raised when a vehicle name could not be found in the catalog.
    #[error("unknown vehicle: {name}{}", format_suggestions(.suggestions))]
    UnknownVehicle {
        name: String,
        suggestions: Vec<String>,
    },

    /// Raised when vehicle data fails validation.
    #[error("invalid vehicle data: {message}")]
    VehicleDataValidation { message: String },

    /// Raised when duplicate vehicle ids are encountered during catalog load.
    #[error("duplicate vehicle id encountered: {id}")]
    DuplicateVehicleId { id: String },

    /// Raised when planner configuration fails validation.
    #[error("invalid planner configuration: {message}")]
    InvalidPlannerConfig { message: String },

    /// Raised when a summary is requested for a route without any nodes.
    #[error("route contained no nodes")]
    EmptyRoute,

    /// Wrapper for IO errors while loading snapshot files.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Wrapper for JSON parse errors while loading snapshot files.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else if suggestions.len() == 1 {
        format!(". Did you mean '{}'?", suggestions[0])
    } else {
        format!(
            ". Did you mean one of: {}?",
            suggestions
                .iter()
                .map(|s| format!("'{}'", s))
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}
