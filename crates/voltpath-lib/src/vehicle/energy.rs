//! Energy consumption and charging-time calculations.
//!
//! The model is deliberately linear: driving draws `distance × efficiency`
//! kWh and charging restores energy at the station's rated power. Elevation,
//! temperature and charging curves are out of scope for the planner.

use crate::error::{Error, Result};

use super::profile::VehicleProfile;

/// Energy in kWh drawn by driving `distance_km` with the given vehicle.
pub fn segment_energy_kwh(vehicle: &VehicleProfile, distance_km: f64) -> Result<f64> {
    if !distance_km.is_finite() || distance_km < 0.0 {
        return Err(Error::VehicleDataValidation {
            message: format!("distance must be finite and non-negative, got {distance_km}"),
        });
    }
    if !vehicle.efficiency_kwh_per_km.is_finite() || vehicle.efficiency_kwh_per_km <= 0.0 {
        return Err(Error::VehicleDataValidation {
            message: "efficiency_kwh_per_km must be a finite positive number".to_string(),
        });
    }

    Ok(distance_km * vehicle.efficiency_kwh_per_km)
}

/// Hours needed to transfer `energy_kwh` at a station delivering `power_kw`.
pub fn charge_duration_hours(energy_kwh: f64, power_kw: f64) -> Result<f64> {
    if !energy_kwh.is_finite() || energy_kwh < 0.0 {
        return Err(Error::VehicleDataValidation {
            message: format!("charge energy must be finite and non-negative, got {energy_kwh}"),
        });
    }
    if !power_kw.is_finite() || power_kw <= 0.0 {
        return Err(Error::VehicleDataValidation {
            message: format!("charging power must be finite and positive, got {power_kw}"),
        });
    }

    Ok(energy_kwh / power_kw)
}

/// Battery level as a percentage of capacity. Returns zero for a
/// non-positive capacity rather than propagating a division artifact.
pub fn battery_percent(level_kwh: f64, capacity_kwh: f64) -> f64 {
    if capacity_kwh <= 0.0 {
        return 0.0;
    }
    (level_kwh / capacity_kwh) * 100.0
}
