//! The submission validator -- an explicit finite-state machine over the
//! three form fields, plus the pure ordered validation it runs on submit.
//!
//! The form is a single mutable context object owned by the UI layer and
//! passed by reference into the pure availability and validation functions.
//! Accepting a submission appends to the reservation store and resets the
//! fields; rejecting one records only a transient error.

use chrono::NaiveDate;

use crate::availability::available_vehicle_types;
use crate::error::{BookingError, Result};
use crate::fleet::VehicleType;
use crate::store::{Reservation, ReservationStore};

/// Where the form currently sits in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    /// No field set.
    Empty,
    /// Some but not all of pick-up, drop-off, vehicle set.
    PartiallyFilled,
    /// All three fields set; a submit attempt may run.
    ReadyToValidate,
    /// The last submit attempt passed; fields have been reset.
    Accepted,
    /// The last submit attempt failed; fields are unchanged and the error is
    /// readable via [`ReservationForm::error`]. Any field edit leaves this
    /// state.
    Rejected,
}

/// Validate a candidate submission against the current reservation list.
///
/// Checks run in fixed order, short-circuiting at the first failure:
/// 1. all three fields present -- else [`BookingError::MissingField`];
/// 2. drop-off strictly after pick-up -- else [`BookingError::InvalidRange`];
/// 3. the vehicle is in the availability result for the range -- else
///    [`BookingError::UnavailableVehicle`] (covers availability changing
///    between selection and submission).
///
/// Pure: no side effects. On success returns the validated triple for the
/// caller to append.
pub fn validate_submission(
    pickup: Option<NaiveDate>,
    dropoff: Option<NaiveDate>,
    vehicle: Option<VehicleType>,
    reservations: &[Reservation],
) -> Result<(NaiveDate, NaiveDate, VehicleType)> {
    let (Some(pickup), Some(dropoff), Some(vehicle)) = (pickup, dropoff, vehicle) else {
        return Err(BookingError::MissingField);
    };
    if dropoff <= pickup {
        return Err(BookingError::InvalidRange);
    }
    if !available_vehicle_types(Some(pickup), Some(dropoff), reservations).contains(&vehicle) {
        return Err(BookingError::UnavailableVehicle);
    }
    Ok((pickup, dropoff, vehicle))
}

/// Validate a candidate submission and, if it passes, append the new
/// reservation to the store.
///
/// The store is left untouched on failure. Returns a clone of the stored
/// record on success.
pub fn validate_and_submit(
    pickup: Option<NaiveDate>,
    dropoff: Option<NaiveDate>,
    vehicle: Option<VehicleType>,
    store: &mut ReservationStore,
) -> Result<Reservation> {
    let (pickup, dropoff, vehicle) = validate_submission(pickup, dropoff, vehicle, store.list())?;
    Ok(store.append(vehicle, pickup, dropoff).clone())
}

/// Outcome of the most recent submit attempt, cleared by any field edit.
#[derive(Debug, Clone, PartialEq, Eq)]
enum SubmitOutcome {
    Accepted,
    Rejected(BookingError),
}

/// The reservation form: transient field state plus the last submit outcome.
#[derive(Debug, Clone, Default)]
pub struct ReservationForm {
    pickup: Option<NaiveDate>,
    dropoff: Option<NaiveDate>,
    vehicle: Option<VehicleType>,
    outcome: Option<SubmitOutcome>,
}

impl ReservationForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set or clear the pick-up date. Clears any recorded submit outcome.
    pub fn set_pickup(&mut self, pickup: Option<NaiveDate>) {
        self.pickup = pickup;
        self.outcome = None;
    }

    /// Set or clear the drop-off date. Clears any recorded submit outcome.
    pub fn set_dropoff(&mut self, dropoff: Option<NaiveDate>) {
        self.dropoff = dropoff;
        self.outcome = None;
    }

    /// Select or clear the vehicle type. Clears any recorded submit outcome.
    pub fn select_vehicle(&mut self, vehicle: Option<VehicleType>) {
        self.vehicle = vehicle;
        self.outcome = None;
    }

    pub fn pickup(&self) -> Option<NaiveDate> {
        self.pickup
    }

    pub fn dropoff(&self) -> Option<NaiveDate> {
        self.dropoff
    }

    pub fn vehicle(&self) -> Option<VehicleType> {
        self.vehicle
    }

    /// The error recorded by the last rejected submit, if any.
    pub fn error(&self) -> Option<&BookingError> {
        match &self.outcome {
            Some(SubmitOutcome::Rejected(err)) => Some(err),
            _ => None,
        }
    }

    /// The current state, derived from the fields and the last submit
    /// attempt.
    pub fn state(&self) -> FormState {
        match &self.outcome {
            Some(SubmitOutcome::Accepted) => FormState::Accepted,
            Some(SubmitOutcome::Rejected(_)) => FormState::Rejected,
            None => {
                let set = [
                    self.pickup.is_some(),
                    self.dropoff.is_some(),
                    self.vehicle.is_some(),
                ]
                .iter()
                .filter(|&&set| set)
                .count();
                match set {
                    0 => FormState::Empty,
                    3 => FormState::ReadyToValidate,
                    _ => FormState::PartiallyFilled,
                }
            }
        }
    }

    /// Whether the submit action is enabled. Mirrors the form control: no
    /// vehicle selected (including "no types available"), no submit.
    pub fn can_submit(&self) -> bool {
        self.vehicle.is_some()
    }

    /// The vehicle types currently selectable, recomputed eagerly from the
    /// form dates and the store contents.
    pub fn available_types(&self, store: &ReservationStore) -> Vec<VehicleType> {
        available_vehicle_types(self.pickup, self.dropoff, store.list())
    }

    /// Run the ordered validation; on success append to `store` and reset
    /// all fields.
    ///
    /// # Errors
    /// Returns the first failed check. The store and the form fields are
    /// left untouched; the error is also readable via
    /// [`error`](ReservationForm::error) until the next field edit.
    pub fn submit(&mut self, store: &mut ReservationStore) -> Result<Reservation> {
        match validate_and_submit(self.pickup, self.dropoff, self.vehicle, store) {
            Ok(record) => {
                self.pickup = None;
                self.dropoff = None;
                self.vehicle = None;
                self.outcome = Some(SubmitOutcome::Accepted);
                Ok(record)
            }
            Err(err) => {
                self.outcome = Some(SubmitOutcome::Rejected(err.clone()));
                Err(err)
            }
        }
    }
}
