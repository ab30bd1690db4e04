//! Plan command handler for computing battery-feasible routes.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use voltpath_lib::{
    load_network, load_stations, plan_route, plan_route_debug, NodeId, PlannerConfig,
    RouteRequest, RouteSummary,
};

use crate::commands::vehicles::load_vehicle_catalog;
use crate::output::OutputFormat;

/// Arguments for the plan command.
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Road network snapshot (JSON).
    #[arg(long)]
    pub network: PathBuf,

    /// Charging station snapshot (JSON).
    #[arg(long)]
    pub stations: PathBuf,

    /// Origin node id.
    #[arg(long)]
    pub from: NodeId,

    /// Destination node id.
    #[arg(long)]
    pub to: NodeId,

    /// Vehicle id or display name from the catalog.
    #[arg(long)]
    pub vehicle: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Print the planner diagnostic trace to stderr.
    #[arg(long)]
    pub debug: bool,

    /// Detour radius in km for matching chargers to the route.
    #[arg(long)]
    pub detour_radius_km: Option<f64>,

    /// Fallback detour radius in km when the first pass finds no feasible plan.
    #[arg(long)]
    pub widened_radius_km: Option<f64>,

    /// Battery safety margin in percent.
    #[arg(long)]
    pub safety_margin_percent: Option<f64>,

    /// Average driving speed in km/h.
    #[arg(long)]
    pub speed_kmh: Option<f64>,
}

impl PlanArgs {
    /// Planner configuration with the CLI overrides applied.
    fn config(&self) -> PlannerConfig {
        let mut config = PlannerConfig::default();
        if let Some(radius) = self.detour_radius_km {
            config.detour_radius_km = radius;
        }
        if let Some(radius) = self.widened_radius_km {
            config.widened_detour_radius_km = radius;
        }
        if let Some(margin) = self.safety_margin_percent {
            config.battery_safety_margin_percent = margin;
        }
        if let Some(speed) = self.speed_kmh {
            config.average_speed_kmh = speed;
        }
        config
    }
}

/// Handle the plan subcommand.
pub fn handle_plan(catalog_path: Option<&Path>, args: &PlanArgs) -> Result<()> {
    let network = load_network(&args.network)
        .with_context(|| format!("failed to load road network from {}", args.network.display()))?;
    let stations = load_stations(&args.stations).with_context(|| {
        format!("failed to load charging stations from {}", args.stations.display())
    })?;
    let catalog = load_vehicle_catalog(catalog_path)?;
    let vehicle = catalog.lookup(&args.vehicle)?;

    let request = RouteRequest::new(args.from, args.to).with_config(args.config());

    let result = if args.debug {
        let (result, diagnostics) = plan_route_debug(&network, &stations, vehicle, &request);
        for line in &diagnostics.trace {
            eprintln!("trace: {line}");
        }
        result?
    } else {
        plan_route(&network, &stations, vehicle, &request)?
    };

    let summary = RouteSummary::from_result(&network, &result)?;
    match args.format {
        OutputFormat::Text => print!("{}", summary.render()),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)
                .context("failed to serialise route summary")?;
            println!("{json}");
        }
    }

    Ok(())
}
