//! Vehicle data types, energy calculations, and catalog management.
//!
//! This module is organized into focused submodules:
//!
//! - [`profile`] - Vehicle battery and efficiency attributes
//! - [`energy`] - Energy consumption and charging-time calculations
//! - [`catalog`] - Vehicle catalog loading and lookup
//!
//! # Example
//!
//! ```
//! use voltpath_lib::vehicle::{segment_energy_kwh, VehicleCatalog};
//!
//! let catalog = VehicleCatalog::bundled().expect("bundled catalog parses");
//! let vehicle = catalog.get("renault-zoe").expect("vehicle exists");
//!
//! let energy = segment_energy_kwh(vehicle, 100.0).expect("distance is valid");
//! assert!(energy > 0.0);
//! ```

pub mod catalog;
pub mod energy;
pub mod profile;

pub use catalog::VehicleCatalog;
pub use energy::{battery_percent, charge_duration_hours, segment_energy_kwh};
pub use profile::VehicleProfile;
