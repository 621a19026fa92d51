//! The availability engine -- which vehicle types have a free unit for a
//! candidate date range.
//!
//! Pure functions over caller-owned data: the candidate range, and the full
//! reservation list. Callers recompute eagerly whenever a date or the store
//! changes; nothing here caches.
//!
//! Ranges are half-open `[pickup, dropoff)`: a reservation ending exactly on
//! the candidate's start day, or starting exactly on its end day, does NOT
//! consume a unit. Back-to-back bookings are permitted.

use chrono::NaiveDate;

use crate::fleet::{VehicleType, UNITS_PER_TYPE};
use crate::store::Reservation;

/// Two half-open day ranges overlap iff `a_start < b_end && b_start < a_end`.
/// This excludes the adjacent case where one range ends exactly when the
/// other starts.
fn overlaps(
    a_start: NaiveDate,
    a_end: NaiveDate,
    b_start: NaiveDate,
    b_end: NaiveDate,
) -> bool {
    a_start < b_end && b_start < a_end
}

/// Count units of `vehicle` still free for the candidate range.
///
/// Counts reservations of that type overlapping `[pickup, dropoff)` and
/// subtracts from the fixed per-type inventory, saturating at zero (a seeded
/// store may oversubscribe a type).
pub fn remaining_units(
    vehicle: VehicleType,
    pickup: NaiveDate,
    dropoff: NaiveDate,
    reservations: &[Reservation],
) -> u32 {
    let booked = reservations
        .iter()
        .filter(|r| r.vehicle == vehicle && overlaps(r.pickup, r.dropoff, pickup, dropoff))
        .count() as u32;
    UNITS_PER_TYPE.saturating_sub(booked)
}

/// The ordered subset of vehicle types with at least one free unit for the
/// candidate range.
///
/// # Arguments
/// - `pickup` -- candidate pick-up day, or `None` while the field is unset
/// - `dropoff` -- candidate drop-off day, or `None` while the field is unset
/// - `reservations` -- the full reservation list for the session
///
/// Either date missing yields an empty result: it signals "cannot compute
/// yet", not "nothing is available". The result follows
/// [`VehicleType::ALL`] canonical order.
pub fn available_vehicle_types(
    pickup: Option<NaiveDate>,
    dropoff: Option<NaiveDate>,
    reservations: &[Reservation],
) -> Vec<VehicleType> {
    let (Some(pickup), Some(dropoff)) = (pickup, dropoff) else {
        return Vec::new();
    };

    VehicleType::ALL
        .into_iter()
        .filter(|&vehicle| remaining_units(vehicle, pickup, dropoff, reservations) > 0)
        .collect()
}
