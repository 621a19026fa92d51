//! Reservation records and the in-memory session store.
//!
//! The store is an insertion-ordered, append-only sequence. Records are
//! immutable once created and live for the remainder of the session; no
//! update or delete path exists. The store performs no validation of its
//! own -- the submission validator guarantees validity before appending.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::fleet::VehicleType;

/// A confirmed reservation.
///
/// Invariant: `dropoff` is strictly after `pickup`. Upheld by the submission
/// validator, which is the only construction path during a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Session-unique identifier, monotonically increasing.
    pub id: u64,
    pub vehicle: VehicleType,
    /// First rental day (inclusive).
    pub pickup: NaiveDate,
    /// Return day (exclusive -- the vehicle is free again on this day).
    pub dropoff: NaiveDate,
}

impl Reservation {
    /// Elapsed rental days, end date exclusive.
    pub fn total_days(&self) -> i64 {
        (self.dropoff - self.pickup).num_days()
    }
}

impl fmt::Display for Reservation {
    /// The listing line shown to users:
    /// `Sedan | Pick-up: 2025-08-01 | Drop-off: 2025-08-05 | Total days: 4`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | Pick-up: {} | Drop-off: {} | Total days: {}",
            self.vehicle,
            self.pickup.format(crate::dates::DATE_FORMAT),
            self.dropoff.format(crate::dates::DATE_FORMAT),
            self.total_days()
        )
    }
}

/// Append-only, insertion-ordered collection of reservations for one session.
///
/// Owns the id counter: every record appended through the store gets the next
/// session-unique id. Callers hand the [`list`](ReservationStore::list) slice
/// to the availability engine on every recomputation.
#[derive(Debug, Clone)]
pub struct ReservationStore {
    records: Vec<Reservation>,
    next_id: u64,
}

impl Default for ReservationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationStore {
    /// An empty session store. Ids start at 1.
    pub fn new() -> Self {
        ReservationStore {
            records: Vec::new(),
            next_id: 1,
        }
    }

    /// Seed a session with existing records, e.g. loaded from a fixture.
    ///
    /// The id counter is advanced past the largest seeded id so that records
    /// appended later never collide with seeded ones.
    pub fn with_records(records: Vec<Reservation>) -> Self {
        let next_id = records.iter().map(|r| r.id).max().unwrap_or(0) + 1;
        ReservationStore { records, next_id }
    }

    /// Append a validated reservation and return a reference to the stored
    /// record. No validation happens here.
    pub fn append(
        &mut self,
        vehicle: VehicleType,
        pickup: NaiveDate,
        dropoff: NaiveDate,
    ) -> &Reservation {
        let id = self.next_id;
        self.next_id += 1;
        let idx = self.records.len();
        self.records.push(Reservation {
            id,
            vehicle,
            pickup,
            dropoff,
        });
        &self.records[idx]
    }

    /// The full sequence in insertion order.
    pub fn list(&self) -> &[Reservation] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
