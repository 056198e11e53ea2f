//! # fleet-store: The Owning Layer
//!
//! Holds the single fleet snapshot, loads configuration, and exposes the
//! commands a front end calls. All business rules live in `fleet-core`;
//! this crate adds locking, capability checks, id assignment and logging.
//!
//! ## Module Organization
//! ```text
//! fleet_store/
//! ├── lib.rs          ◄─── You are here (exports, tracing setup)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── store.rs    ◄─── FleetStore: single writer, snapshots
//! │   └── config.rs   ◄─── FleetConfig: defaults, fleet.toml, FLEET_*
//! ├── commands/       ◄─── One file per screen
//! ├── seed.rs         ◄─── Demo fleet
//! ├── error.rs        ◄─── ApiError for commands, ConfigError
//! └── bin/
//!     └── fleet_report.rs
//! ```
//!
//! ## Example
//! ```rust
//! use fleet_core::validation::TripForm;
//! use fleet_core::{Role, TripStatus, VehicleStatus};
//! use fleet_store::commands::trip::create_trip;
//! use fleet_store::{seed, FleetStore};
//!
//! let store = FleetStore::new(seed::demo_state())
//!     .with_fixed_date(chrono::NaiveDate::from_ymd_opt(2026, 2, 21).unwrap());
//!
//! let form = TripForm {
//!     vehicle_id: "V004".into(),
//!     driver_id: "D003".into(),
//!     origin: "Jaipur".into(),
//!     destination: "Agra".into(),
//!     cargo_description: "Handicrafts".into(),
//!     cargo_weight: "900".into(),
//!     status: TripStatus::Dispatched,
//!     ..Default::default()
//! };
//! let trip = create_trip(&store, &Role::Manager, &form).unwrap();
//!
//! assert_eq!(trip.id, "T008");
//! let state = store.snapshot();
//! assert_eq!(state.vehicle("V004").unwrap().status, VehicleStatus::OnTrip);
//! ```

pub mod commands;
pub mod error;
pub mod seed;
pub mod state;

use tracing_subscriber::EnvFilter;

pub use error::{ApiError, ConfigError, ErrorCode};
pub use state::{authorize, FleetConfig, FleetStore};

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=fleet_store=trace` - Show trace for this crate only
/// - Otherwise `default_filter` (from [`FleetConfig::log_filter`])
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt().with_env_filter(filter).init();
}
