//! # Selectors
//!
//! Filtered and ordered views over a snapshot. Each selector borrows from
//! the state and preserves the collection's insertion order unless it says
//! otherwise.
//!
//! Trips may name a vehicle or driver that has since been deleted. Views
//! resolve those through [`Reference`] instead of looking them up ad hoc,
//! so a dangling id always renders as [`ABSENT`].

use crate::state::FleetState;
use crate::types::{Driver, DriverStatus, PendingCargo, Vehicle, VehicleStatus};

/// Placeholder shown for a reference whose target no longer exists.
pub const ABSENT: &str = "—";

/// Result of following an id to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference<'a, T> {
    Present(&'a T),
    Absent,
}

impl<'a, T> Reference<'a, T> {
    pub fn from_option(found: Option<&'a T>) -> Self {
        match found {
            Some(record) => Reference::Present(record),
            None => Reference::Absent,
        }
    }

    pub fn get(&self) -> Option<&'a T> {
        match self {
            Reference::Present(record) => Some(record),
            Reference::Absent => None,
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, Reference::Absent)
    }
}

pub fn vehicle_ref<'a>(state: &'a FleetState, id: &str) -> Reference<'a, Vehicle> {
    Reference::from_option(state.vehicle(id))
}

pub fn driver_ref<'a>(state: &'a FleetState, id: &str) -> Reference<'a, Driver> {
    Reference::from_option(state.driver(id))
}

/// Vehicle name for display, [`ABSENT`] when it is gone.
pub fn vehicle_label<'a>(state: &'a FleetState, id: &str) -> &'a str {
    vehicle_ref(state, id)
        .get()
        .map(|v| v.name.as_str())
        .unwrap_or(ABSENT)
}

/// Driver name for display, [`ABSENT`] when they are gone.
pub fn driver_label<'a>(state: &'a FleetState, id: &str) -> &'a str {
    driver_ref(state, id)
        .get()
        .map(|d| d.name.as_str())
        .unwrap_or(ABSENT)
}

/// Vehicles matching the active type and region filters.
pub fn filtered_vehicles(state: &FleetState) -> Vec<&Vehicle> {
    let filters = state.filters;
    state
        .vehicles
        .iter()
        .filter(|v| filters.vehicle_type.matches(v.vehicle_type) && filters.region.matches(v.region))
        .collect()
}

/// Vehicles that can be assigned to a new trip.
pub fn available_vehicles(state: &FleetState) -> Vec<&Vehicle> {
    state
        .vehicles
        .iter()
        .filter(|v| v.status == VehicleStatus::Available)
        .collect()
}

/// Drivers that can be assigned to a new trip (anyone not suspended).
pub fn available_drivers(state: &FleetState) -> Vec<&Driver> {
    state
        .drivers
        .iter()
        .filter(|d| d.status != DriverStatus::Suspended)
        .collect()
}

/// Pending cargo, most urgent first. Equal priorities keep list order.
pub fn pending_cargo_by_priority(state: &FleetState) -> Vec<&PendingCargo> {
    let mut cargo: Vec<&PendingCargo> = state.pending_cargo.iter().collect();
    cargo.sort_by_key(|c| c.priority.rank());
    cargo
}
