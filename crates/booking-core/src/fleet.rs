//! The fixed fleet: vehicle types and per-type inventory.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::BookingError;

/// Units held per vehicle type. Uniform across the whole fleet.
pub const UNITS_PER_TYPE: u32 = 3;

/// A vehicle type in the fleet. Closed set, not user-extensible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VehicleType {
    Sedan,
    /// Serialized under its UI label, not the variant name.
    #[serde(rename = "SUV")]
    Suv,
    Van,
}

impl VehicleType {
    /// All vehicle types in canonical enumeration order. Availability
    /// results follow this order, never insertion or count order.
    pub const ALL: [VehicleType; 3] = [VehicleType::Sedan, VehicleType::Suv, VehicleType::Van];

    /// The label shown to users and accepted back by [`FromStr`].
    pub fn label(&self) -> &'static str {
        match self {
            VehicleType::Sedan => "Sedan",
            VehicleType::Suv => "SUV",
            VehicleType::Van => "Van",
        }
    }
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for VehicleType {
    type Err = BookingError;

    /// Parse a vehicle type from its label, case-insensitively.
    ///
    /// # Errors
    /// Returns `BookingError::UnknownVehicle` when the text names no type in
    /// the fleet.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sedan" => Ok(VehicleType::Sedan),
            "suv" => Ok(VehicleType::Suv),
            "van" => Ok(VehicleType::Van),
            _ => Err(BookingError::UnknownVehicle(s.trim().to_string())),
        }
    }
}
