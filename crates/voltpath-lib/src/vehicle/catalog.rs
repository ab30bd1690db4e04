//! Vehicle catalog loading and lookup.
//!
//! Catalogs are CSV files with one vehicle profile per row. A small catalog
//! of common vehicles is compiled into the library so callers work without
//! any external data file.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::{ReaderBuilder, Trim};
use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::error::{Error, Result};

use super::profile::VehicleProfile;

/// Similarity floor below which a catalog entry is not worth suggesting.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// CSV catalog compiled into the library.
const BUNDLED_CSV: &str = include_str!("vehicles.csv");

static BUNDLED: Lazy<Option<VehicleCatalog>> = Lazy::new(|| {
    match VehicleCatalog::from_reader(BUNDLED_CSV.as_bytes()) {
        Ok(catalog) => Some(catalog),
        Err(err) => {
            warn!(error = %err, "bundled vehicle catalog failed to parse");
            None
        }
    }
});

/// Collection of vehicle definitions loaded from a CSV file.
#[derive(Debug, Clone, Default)]
pub struct VehicleCatalog {
    vehicles: HashMap<String, VehicleProfile>,
    by_name: HashMap<String, String>,
    source: Option<PathBuf>,
}

impl VehicleCatalog {
    /// The catalog of common vehicles compiled into the library.
    pub fn bundled() -> Option<&'static VehicleCatalog> {
        BUNDLED.as_ref()
    }

    /// Load a vehicle catalog from a file path.
    pub fn from_path(path: &Path) -> Result<Self> {
        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());
        Ok(catalog)
    }

    /// Load a vehicle catalog from a reader (e.g., file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut csv_reader = ReaderBuilder::new().trim(Trim::Fields).from_reader(reader);

        let mut vehicles = HashMap::new();
        let mut by_name = HashMap::new();

        for (slot, record) in csv_reader.deserialize::<VehicleProfile>().enumerate() {
            // Header occupies line 1.
            let row = slot + 2;
            let vehicle = record.map_err(|err| Error::VehicleDataValidation {
                message: format!("vehicle catalog row {row}: {err}"),
            })?;
            vehicle.validate()?;

            let key = normalize_name(&vehicle.id);
            if vehicles.contains_key(&key) {
                return Err(Error::DuplicateVehicleId { id: vehicle.id });
            }
            by_name
                .entry(normalize_name(&vehicle.name))
                .or_insert_with(|| key.clone());
            vehicles.insert(key, vehicle);
        }

        debug!(vehicles = vehicles.len(), "loaded vehicle catalog");
        Ok(Self {
            vehicles,
            by_name,
            source: None,
        })
    }

    /// Get a vehicle by id or display name (case-insensitive).
    pub fn get(&self, name: &str) -> Option<&VehicleProfile> {
        let key = normalize_name(name);
        if let Some(vehicle) = self.vehicles.get(&key) {
            return Some(vehicle);
        }
        self.by_name
            .get(&key)
            .and_then(|id_key| self.vehicles.get(id_key))
    }

    /// Get a vehicle by id or name, or fail with ranked suggestions.
    pub fn lookup(&self, name: &str) -> Result<&VehicleProfile> {
        self.get(name).ok_or_else(|| Error::UnknownVehicle {
            name: name.to_string(),
            suggestions: self.fuzzy_matches(name, 3),
        })
    }

    /// Return up to `limit` catalog entries ranked by similarity to `name`.
    /// Ids and display names both participate; entries below the similarity
    /// floor are dropped.
    pub fn fuzzy_matches(&self, name: &str, limit: usize) -> Vec<String> {
        let needle = normalize_name(name);
        let mut scored: Vec<(f64, String)> = Vec::new();

        for vehicle in self.vehicles.values() {
            for candidate in [&vehicle.id, &vehicle.name] {
                let score = strsim::jaro_winkler(&needle, &normalize_name(candidate));
                if score >= SUGGESTION_THRESHOLD {
                    scored.push((score, candidate.clone()));
                }
            }
        }

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(&b.1)));
        scored.dedup_by(|a, b| a.1 == b.1);
        scored.truncate(limit);
        scored.into_iter().map(|(_, candidate)| candidate).collect()
    }

    /// Get a sorted list of all vehicle ids.
    pub fn vehicle_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self.vehicles.values().map(|v| v.id.clone()).collect();
        ids.sort();
        ids
    }

    /// Get all vehicles sorted by id.
    pub fn vehicles_sorted(&self) -> Vec<&VehicleProfile> {
        let mut vehicles: Vec<&VehicleProfile> = self.vehicles.values().collect();
        vehicles.sort_by(|a, b| a.id.cmp(&b.id));
        vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Get the source path if the catalog was loaded from a file.
    pub fn source_path(&self) -> Option<&Path> {
        self.source.as_deref()
    }
}

/// Normalize an id or name for case-insensitive lookup.
fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}
