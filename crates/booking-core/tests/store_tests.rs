//! Tests for reservation records and the session store.

use booking_core::{format_date, parse_date, BookingError, Reservation, ReservationStore, VehicleType};
use chrono::NaiveDate;

// ── Helpers ─────────────────────────────────────────────────────────────────

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ── Test 1: Append preserves insertion order ────────────────────────────────

#[test]
fn list_preserves_insertion_order() {
    let mut store = ReservationStore::new();
    store.append(VehicleType::Van, date(2025, 8, 10), date(2025, 8, 12));
    store.append(VehicleType::Sedan, date(2025, 8, 1), date(2025, 8, 5));
    store.append(VehicleType::Suv, date(2025, 8, 3), date(2025, 8, 4));

    let vehicles: Vec<VehicleType> = store.list().iter().map(|r| r.vehicle).collect();
    assert_eq!(
        vehicles,
        vec![VehicleType::Van, VehicleType::Sedan, VehicleType::Suv]
    );
}

// ── Test 2: Ids are unique and monotonically increasing ─────────────────────

#[test]
fn ids_are_unique_and_monotonic() {
    let mut store = ReservationStore::new();
    for _ in 0..5 {
        store.append(VehicleType::Sedan, date(2025, 8, 1), date(2025, 8, 2));
    }
    let ids: Vec<u64> = store.list().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

// ── Test 3: Seeding advances the id counter ─────────────────────────────────

#[test]
fn seeded_store_never_reuses_ids() {
    let seeded = vec![
        Reservation {
            id: 7,
            vehicle: VehicleType::Van,
            pickup: date(2025, 8, 1),
            dropoff: date(2025, 8, 3),
        },
        Reservation {
            id: 2,
            vehicle: VehicleType::Sedan,
            pickup: date(2025, 8, 1),
            dropoff: date(2025, 8, 2),
        },
    ];
    let mut store = ReservationStore::with_records(seeded);
    assert_eq!(store.len(), 2);

    let record = store.append(VehicleType::Suv, date(2025, 8, 5), date(2025, 8, 6));
    assert_eq!(record.id, 8, "counter must start past the largest seeded id");
}

// ── Test 4: Round-trip through the store ────────────────────────────────────

#[test]
fn stored_record_reproduces_inputs() {
    let mut store = ReservationStore::new();
    store.append(VehicleType::Suv, date(2025, 8, 1), date(2025, 8, 5));

    let record = &store.list()[0];
    assert_eq!(record.vehicle, VehicleType::Suv);
    assert_eq!(record.pickup, date(2025, 8, 1));
    assert_eq!(record.dropoff, date(2025, 8, 5));
}

// ── Test 5: total_days is end-exclusive ─────────────────────────────────────

#[test]
fn total_days_counts_elapsed_days() {
    let record = Reservation {
        id: 1,
        vehicle: VehicleType::Sedan,
        pickup: date(2025, 8, 1),
        dropoff: date(2025, 8, 5),
    };
    assert_eq!(record.total_days(), 4);

    let overnight = Reservation {
        id: 2,
        vehicle: VehicleType::Van,
        pickup: date(2025, 8, 31),
        dropoff: date(2025, 9, 1),
    };
    assert_eq!(overnight.total_days(), 1);
}

// ── Test 6: Display renders the listing line ────────────────────────────────

#[test]
fn display_renders_listing_line() {
    let record = Reservation {
        id: 1,
        vehicle: VehicleType::Suv,
        pickup: date(2025, 8, 1),
        dropoff: date(2025, 8, 5),
    };
    assert_eq!(
        record.to_string(),
        "SUV | Pick-up: 2025-08-01 | Drop-off: 2025-08-05 | Total days: 4"
    );
}

// ── Test 7: Records serialize with YYYY-MM-DD dates ─────────────────────────

#[test]
fn serde_roundtrip_uses_fixed_date_format() {
    let record = Reservation {
        id: 42,
        vehicle: VehicleType::Van,
        pickup: date(2025, 8, 1),
        dropoff: date(2025, 8, 5),
    };

    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"2025-08-01\""), "pickup should serialize as plain date: {json}");
    assert!(json.contains("\"2025-08-05\""), "dropoff should serialize as plain date: {json}");

    let back: Reservation = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

// ── Test 8: Date boundary parses and formats the fixed format ───────────────

#[test]
fn date_boundary_roundtrip() {
    let parsed = parse_date("2025-08-01").unwrap();
    assert_eq!(parsed, date(2025, 8, 1));
    assert_eq!(format_date(parsed), "2025-08-01");
}

// ── Test 9: Impossible calendar text rejected at the boundary ───────────────

#[test]
fn invalid_date_text_rejected() {
    for text in ["2025-02-30", "not-a-date", "08/01/2025", "2025-13-01", ""] {
        let err = parse_date(text).unwrap_err();
        assert!(
            matches!(err, BookingError::InvalidDate(_)),
            "{text:?} should fail with InvalidDate, got {err:?}"
        );
    }
}

// ── Test 10: Vehicle labels round-trip through FromStr ──────────────────────

#[test]
fn vehicle_labels_roundtrip() {
    for vehicle in VehicleType::ALL {
        let parsed: VehicleType = vehicle.to_string().parse().unwrap();
        assert_eq!(parsed, vehicle);
    }
    // Case-insensitive on the way in.
    assert_eq!("suv".parse::<VehicleType>().unwrap(), VehicleType::Suv);
    assert!(matches!(
        "bicycle".parse::<VehicleType>().unwrap_err(),
        BookingError::UnknownVehicle(_)
    ));
}
