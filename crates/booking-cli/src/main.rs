//! `booking` CLI — drive a vehicle reservation session from the terminal.
//!
//! One process is one session: reservations live in memory and are gone at
//! exit. Commands arrive one per line on stdin, mirroring the controls of a
//! reservation form.
//!
//! ## Usage
//!
//! ```sh
//! # Interactive session
//! booking
//!
//! # Seed the session with existing reservations from a JSON array
//! booking --seed reservations.json
//!
//! # Scripted session
//! printf 'pickup 2025-08-01\ndropoff 2025-08-05\nvehicle Sedan\nsubmit\nlist\nquit\n' | booking
//! ```
//!
//! ## Commands
//!
//! - `pickup <YYYY-MM-DD>` / `dropoff <YYYY-MM-DD>` — set a date (no
//!   argument clears it)
//! - `vehicle <type>` — select a vehicle type (no argument clears it)
//! - `types` — show vehicle types available for the chosen dates
//! - `status` — show form state and current selections
//! - `submit` — validate and record the reservation
//! - `list` — show the session's reservations
//! - `help`, `quit`

use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};

use booking_core::{
    parse_date, Reservation, ReservationForm, ReservationStore, VehicleType,
};

#[derive(Parser)]
#[command(name = "booking", version, about = "Vehicle reservation session")]
struct Cli {
    /// JSON file holding an array of existing reservations to seed the
    /// session with
    #[arg(long)]
    seed: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let store = match cli.seed.as_deref() {
        Some(path) => load_seed(path)?,
        None => ReservationStore::new(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), stdout.lock(), store)
}

/// Load seed reservations from a JSON array file.
fn load_seed(path: &str) -> Result<ReservationStore> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read seed file: {}", path))?;
    let records: Vec<Reservation> = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse seed file: {}", path))?;
    Ok(ReservationStore::with_records(records))
}

/// The command loop: one session over one store and one form.
fn run_session(input: impl BufRead, mut out: impl Write, mut store: ReservationStore) -> Result<()> {
    let mut form = ReservationForm::new();
    writeln!(out, "Vehicle Reservation — type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (command, arg) = match trimmed.split_once(char::is_whitespace) {
            Some((cmd, rest)) => (cmd, rest.trim()),
            None => (trimmed, ""),
        };

        match command {
            "pickup" => set_date(&mut out, &mut form, &store, Field::Pickup, arg)?,
            "dropoff" => set_date(&mut out, &mut form, &store, Field::Dropoff, arg)?,
            "vehicle" => select_vehicle(&mut out, &mut form, arg)?,
            "types" => print_types(&mut out, &form, &store)?,
            "status" => print_status(&mut out, &form)?,
            "submit" => match form.submit(&mut store) {
                Ok(record) => writeln!(out, "Reserved: {}", record)?,
                Err(err) => writeln!(out, "Error: {}", err)?,
            },
            "list" => print_list(&mut out, &store)?,
            "help" => print_help(&mut out)?,
            "quit" | "exit" => break,
            other => writeln!(out, "Unknown command: '{}' — type 'help'.", other)?,
        }
    }

    Ok(())
}

enum Field {
    Pickup,
    Dropoff,
}

/// Set or clear a date field, then report availability eagerly, the way the
/// form recomputes on every date change.
fn set_date(
    out: &mut impl Write,
    form: &mut ReservationForm,
    store: &ReservationStore,
    field: Field,
    arg: &str,
) -> Result<()> {
    let value = if arg.is_empty() {
        None
    } else {
        match parse_date(arg) {
            Ok(date) => Some(date),
            Err(err) => {
                writeln!(out, "Error: {}", err)?;
                return Ok(());
            }
        }
    };

    match field {
        Field::Pickup => form.set_pickup(value),
        Field::Dropoff => form.set_dropoff(value),
    }

    if form.pickup().is_some() && form.dropoff().is_some() {
        print_types(out, form, store)?;
    }
    Ok(())
}

fn select_vehicle(out: &mut impl Write, form: &mut ReservationForm, arg: &str) -> Result<()> {
    if arg.is_empty() {
        form.select_vehicle(None);
        writeln!(out, "Vehicle selection cleared.")?;
        return Ok(());
    }
    match arg.parse::<VehicleType>() {
        Ok(vehicle) => {
            form.select_vehicle(Some(vehicle));
            writeln!(out, "Vehicle: {}", vehicle)?;
        }
        Err(err) => writeln!(out, "Error: {}", err)?,
    }
    Ok(())
}

fn print_types(out: &mut impl Write, form: &ReservationForm, store: &ReservationStore) -> Result<()> {
    if form.pickup().is_none() || form.dropoff().is_none() {
        writeln!(out, "Select pick-up and drop-off dates first.")?;
        return Ok(());
    }
    let types = form.available_types(store);
    if types.is_empty() {
        writeln!(out, "No vehicles available for selected dates.")?;
    } else {
        let labels: Vec<&str> = types.iter().map(|t| t.label()).collect();
        writeln!(out, "Available: {}", labels.join(", "))?;
    }
    Ok(())
}

fn print_status(out: &mut impl Write, form: &ReservationForm) -> Result<()> {
    fn or_dash<T: std::fmt::Display>(value: Option<T>) -> String {
        value.map_or_else(|| "-".to_string(), |v| v.to_string())
    }
    writeln!(
        out,
        "State: {:?} | Pick-up: {} | Drop-off: {} | Vehicle: {}",
        form.state(),
        or_dash(form.pickup()),
        or_dash(form.dropoff()),
        or_dash(form.vehicle()),
    )?;
    Ok(())
}

fn print_list(out: &mut impl Write, store: &ReservationStore) -> Result<()> {
    if store.is_empty() {
        writeln!(out, "No reservations yet.")?;
        return Ok(());
    }
    for record in store.list() {
        writeln!(out, "{}", record)?;
    }
    Ok(())
}

fn print_help(out: &mut impl Write) -> Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  pickup <YYYY-MM-DD>   set the pick-up date (no argument clears it)")?;
    writeln!(out, "  dropoff <YYYY-MM-DD>  set the drop-off date (no argument clears it)")?;
    writeln!(out, "  vehicle <type>        select Sedan, SUV, or Van (no argument clears it)")?;
    writeln!(out, "  types                 show available vehicle types for the chosen dates")?;
    writeln!(out, "  status                show form state and current selections")?;
    writeln!(out, "  submit                validate and record the reservation")?;
    writeln!(out, "  list                  show this session's reservations")?;
    writeln!(out, "  quit                  end the session")?;
    Ok(())
}
