//! # Commands Module
//!
//! The operations a front end calls. Each is a plain function taking the
//! store, the caller's capability where the command writes, and the raw
//! form input.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs          ◄─── You are here (exports)
//! ├── vehicle.rs      ◄─── Registry CRUD, retire, status
//! ├── driver.rs       ◄─── Driver CRUD, duty status, roster summary
//! ├── trip.rs         ◄─── Trip creation and status moves
//! ├── maintenance.rs  ◄─── Service logs, resolve
//! ├── fuel.rs         ◄─── Fuel logs
//! ├── dashboard.rs    ◄─── KPIs, distributions, filters
//! ├── analytics.rs    ◄─── Financial report, export
//! └── config.rs       ◄─── Configuration retrieval and reload
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  create_trip(&store, &Role::Manager, &form)                             │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  authorize(caps, Permission::Create) ───── denied ──► FORBIDDEN         │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  store.transact(|state, today| {                                        │
//! │      validate_trip(form, state, today)? ── invalid ─► VALIDATION_ERROR  │
//! │      state.next_id(EntityKind::Trip)                                    │
//! │      (FleetAction::AddTrip(trip), trip)                                 │
//! │  })                                                                     │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Ok(Trip)  (serialized for the caller)                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reads need no capability. Every write, including filter changes, is
//! checked before anything is validated.

pub mod analytics;
pub mod config;
pub mod dashboard;
pub mod driver;
pub mod fuel;
pub mod maintenance;
pub mod trip;
pub mod vehicle;

use fleet_core::CoreError;

/// Turns a failed lookup into `NotFound` inside a transaction.
pub(crate) fn found<T>(record: Option<T>, entity: &'static str, id: &str) -> Result<T, CoreError> {
    record.ok_or_else(|| CoreError::NotFound {
        entity,
        id: id.to_string(),
    })
}

#[cfg(test)]
pub(crate) mod test_support {
    use chrono::NaiveDate;

    use crate::seed::demo_state;
    use crate::state::FleetStore;

    /// The demo fleet as of 21 Feb 2026.
    pub fn demo_store() -> FleetStore {
        FleetStore::new(demo_state()).with_fixed_date(today())
    }

    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 21).unwrap()
    }
}
