//! Vehicle battery and efficiency attributes.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Physical and charging attributes of an electric vehicle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VehicleProfile {
    pub id: String,
    pub name: String,
    /// Usable battery capacity in kWh.
    pub battery_kwh: f64,
    /// Rated range in km. Informational only; planning derives reach from
    /// capacity and efficiency.
    pub range_km: f64,
    /// Energy drawn per driven kilometre.
    pub efficiency_kwh_per_km: f64,
    /// The single connector type the vehicle can charge with.
    pub connector: String,
}

impl VehicleProfile {
    /// Validate vehicle attributes for correctness.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(Error::VehicleDataValidation {
                message: "vehicle id must not be empty".to_string(),
            });
        }
        if self.name.trim().is_empty() {
            return Err(Error::VehicleDataValidation {
                message: "vehicle name must not be empty".to_string(),
            });
        }
        if self.connector.trim().is_empty() {
            return Err(Error::VehicleDataValidation {
                message: "vehicle connector must not be empty".to_string(),
            });
        }

        let fields = [
            (self.battery_kwh, "battery_kwh"),
            (self.range_km, "range_km"),
            (self.efficiency_kwh_per_km, "efficiency_kwh_per_km"),
        ];

        for (value, field) in fields {
            if !value.is_finite() || value <= 0.0 {
                return Err(Error::VehicleDataValidation {
                    message: format!("{field} must be a finite positive number"),
                });
            }
        }

        Ok(())
    }
}
