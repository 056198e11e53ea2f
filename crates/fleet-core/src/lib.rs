//! # fleet-core: Pure State Logic for Fleet Ops
//!
//! This crate is the **heart** of Fleet Ops. It holds the fleet snapshot,
//! the transition engine that keeps vehicles, drivers, trips and
//! maintenance consistent with one another, and every figure derived from
//! that snapshot. No I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Fleet Ops Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Dashboard (any front end)                    │   │
//! │  │   Vehicles ──► Drivers ──► Trips ──► Maintenance ──► Analytics  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands / action JSON                 │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    fleet-store                                  │   │
//! │  │   FleetStore (single writer), capability checks, config, logs   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ fleet-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────────┐   │   │
//! │  │   │  types   │  │  engine  │  │ metrics  │  │  validation  │   │   │
//! │  │   │  state   │  │  action  │  │selectors │  │    access    │   │   │
//! │  │   │  ids     │  │          │  │          │  │              │   │   │
//! │  │   └──────────┘  └──────────┘  └──────────┘  └──────────────┘   │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOCKS • NO LOGGING • PURE FUNCTIONS               │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Entities, statuses, patches and filters
//! - [`state`] - `FleetState`, the whole-fleet snapshot
//! - [`ids`] - Sequential id generation (`V009`, `T012`)
//! - [`action`] - `FleetAction`, the closed set of state changes
//! - [`engine`] - `apply`: action + snapshot → next snapshot
//! - [`metrics`] - Costs, revenue, ROI, utilization, analytics
//! - [`selectors`] - Filtered and ordered views
//! - [`validation`] - Form input → typed records
//! - [`access`] - Roles and the capability predicate
//! - [`money`] - Integer paise
//! - [`error`] - Domain error types
//!
//! ## Design Principles
//!
//! 1. **Snapshots**: `apply` never edits its input; it returns a new state
//! 2. **All or nothing**: an action and its cascades land together or not at all
//! 3. **Integer Money**: amounts are paise (i64), never floats
//! 4. **Dangling ids are fine**: deleting a vehicle never breaks its trips
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use fleet_core::{apply_on, FleetAction, FleetState, TripStatus, VehicleStatus};
//! # use fleet_core::{Money, Region, Trip, Vehicle, VehicleType};
//! # let mut state = FleetState::new();
//! # state.vehicles.push(Vehicle {
//! #     id: "V001".into(), name: "Volvo FH16".into(), model: "FH16 750".into(),
//! #     vehicle_type: VehicleType::Truck, plate: "MH-01-AB-1234".into(),
//! #     capacity: 24000, odometer: 142500, status: VehicleStatus::Available,
//! #     region: Region::North, year: 2021,
//! # });
//! # state.trips.push(Trip {
//! #     id: "T006".into(), vehicle_id: "V001".into(), driver_id: "D001".into(),
//! #     origin: "Delhi".into(), destination: "Chandigarh".into(),
//! #     cargo_description: "FMCG Goods".into(), cargo_weight: 20000,
//! #     status: TripStatus::Draft, start_date: None, end_date: None,
//! #     revenue: Money::from_major(70000),
//! # });
//! let today = NaiveDate::from_ymd_opt(2026, 2, 21).unwrap();
//!
//! let action = FleetAction::UpdateTripStatus {
//!     trip_id: "T006".into(),
//!     status: TripStatus::Dispatched,
//! };
//! let next = apply_on(&state, action, today).unwrap();
//!
//! assert_eq!(next.vehicle("V001").unwrap().status, VehicleStatus::OnTrip);
//! // the old snapshot is untouched
//! assert_eq!(state.vehicle("V001").unwrap().status, VehicleStatus::Available);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod access;
pub mod action;
pub mod engine;
pub mod error;
pub mod ids;
pub mod metrics;
pub mod money;
pub mod selectors;
pub mod state;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use fleet_core::FleetState` instead of
// `use fleet_core::state::FleetState`

pub use access::{Capability, Permission, Role};
pub use action::FleetAction;
pub use engine::{apply, apply_json, apply_on};
pub use error::{CoreError, CoreResult, FieldErrors, ValidationError};
pub use ids::EntityKind;
pub use money::Money;
pub use state::FleetState;
pub use types::*;
