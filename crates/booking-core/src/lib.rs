//! # booking-core
//!
//! In-memory vehicle reservation core: a pure date-interval availability
//! engine over a fixed small fleet, the validation state machine driving a
//! reservation form, and the append-only session store the two share.
//!
//! The UI layer (whatever renders the form) owns the mutable state and calls
//! in through three seams: recompute availability whenever a date or the
//! store changes, validate-and-submit on the submit action, and list the
//! store for display.
//!
//! ## Quick start
//!
//! ```rust
//! use booking_core::{parse_date, ReservationForm, ReservationStore, VehicleType};
//!
//! let mut store = ReservationStore::new();
//! let mut form = ReservationForm::new();
//!
//! form.set_pickup(Some(parse_date("2025-08-01").unwrap()));
//! form.set_dropoff(Some(parse_date("2025-08-05").unwrap()));
//! assert_eq!(form.available_types(&store), VehicleType::ALL.to_vec());
//!
//! form.select_vehicle(Some(VehicleType::Sedan));
//! let record = form.submit(&mut store).unwrap();
//! assert_eq!(record.total_days(), 4);
//! assert_eq!(store.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`availability`] — candidate range + reservation list → free vehicle types
//! - [`form`] — the submission validator state machine
//! - [`store`] — reservation records and the append-only session store
//! - [`fleet`] — the closed vehicle-type enumeration and inventory constant
//! - [`dates`] — the fixed `YYYY-MM-DD` textual boundary
//! - [`error`] — error types

pub mod availability;
pub mod dates;
pub mod error;
pub mod fleet;
pub mod form;
pub mod store;

pub use availability::{available_vehicle_types, remaining_units};
pub use dates::{format_date, parse_date};
pub use error::BookingError;
pub use fleet::{VehicleType, UNITS_PER_TYPE};
pub use form::{validate_and_submit, validate_submission, FormState, ReservationForm};
pub use store::{Reservation, ReservationStore};
