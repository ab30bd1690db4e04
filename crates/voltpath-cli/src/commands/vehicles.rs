//! Vehicles command handler for listing the available catalog.

use std::path::Path;

use anyhow::{Context, Result};

use voltpath_lib::VehicleCatalog;

use crate::output::OutputFormat;

/// Handle the vehicles subcommand.
pub fn handle_list_vehicles(catalog_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let catalog = load_vehicle_catalog(catalog_path)?;

    match format {
        OutputFormat::Text => print_vehicle_catalog(&catalog),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&catalog.vehicles_sorted())
                .context("failed to serialise vehicle catalog")?;
            println!("{json}");
        }
    }

    Ok(())
}

/// Load the vehicle catalog from `catalog_path`, falling back to the catalog
/// bundled into the library.
pub fn load_vehicle_catalog(catalog_path: Option<&Path>) -> Result<VehicleCatalog> {
    match catalog_path {
        Some(path) => VehicleCatalog::from_path(path)
            .with_context(|| format!("failed to load vehicle catalog from {}", path.display())),
        None => VehicleCatalog::bundled()
            .cloned()
            .context("bundled vehicle catalog unavailable"),
    }
}

/// Print the vehicle catalog to stdout in a formatted table.
fn print_vehicle_catalog(catalog: &VehicleCatalog) {
    let vehicles = catalog.vehicles_sorted();
    if vehicles.is_empty() {
        println!("No vehicles available in catalog.");
        return;
    }

    println!("Available vehicles ({}):", vehicles.len());
    println!(
        "{:<16} {:<20} {:>13} {:>10} {:>10}",
        "Id", "Name", "Battery (kWh)", "Range (km)", "Connector"
    );
    for vehicle in vehicles {
        println!(
            "{:<16} {:<20} {:>13.1} {:>10.0} {:>10}",
            vehicle.id, vehicle.name, vehicle.battery_kwh, vehicle.range_km, vehicle.connector
        );
    }
}
