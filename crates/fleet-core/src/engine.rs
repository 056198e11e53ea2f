//! # Transition Engine
//!
//! `apply(state, action) -> next state`. The only place fleet state
//! changes, and the only place cross-entity cascades live.
//!
//! ## Cascades
//! ```text
//! ┌──────────────────────────────┬─────────────────────┬─────────────────────┐
//! │ Action                       │ Vehicle             │ Driver              │
//! ├──────────────────────────────┼─────────────────────┼─────────────────────┤
//! │ ADD_TRIP (Dispatched)        │ → On Trip           │ → On Duty           │
//! │ UPDATE_TRIP_STATUS Dispatched│ → On Trip           │ → On Duty           │
//! │ UPDATE_TRIP_STATUS Completed │ → Available         │ → Off Duty          │
//! │ UPDATE_TRIP_STATUS Cancelled │ → Available         │ → Off Duty          │
//! │ ADD_MAINTENANCE_LOG          │ → In Shop           │                     │
//! │ UPDATE_MAINTENANCE_LOG       │ → Available when no │                     │
//! │   (merged log Completed)     │   log In Progress   │                     │
//! └──────────────────────────────┴─────────────────────┴─────────────────────┘
//! ```
//!
//! ## Guarantees
//! - The input snapshot is never modified; a fresh one is returned.
//! - An action and all of its cascades land together or not at all: when
//!   `apply` returns `Err`, the caller still holds the untouched input.
//! - A reference to a missing record (unknown trip, vehicle deleted out
//!   from under a trip) is skipped, never an error.
//! - Trips only move along [`TripStatus::next_statuses`]; anything else is
//!   [`CoreError::IllegalTripTransition`].

use chrono::{Local, NaiveDate};

use crate::action::FleetAction;
use crate::error::{CoreError, CoreResult};
use crate::ids::EntityKind;
use crate::state::FleetState;
use crate::types::{Driver, DriverStatus, MaintenanceStatus, TripStatus, Vehicle, VehicleStatus};

/// Applies `action` to `state`, dating trip completions with the local
/// calendar date.
pub fn apply(state: &FleetState, action: FleetAction) -> CoreResult<FleetState> {
    apply_on(state, action, Local::now().date_naive())
}

/// Same as [`apply`], with "today" supplied by the caller.
pub fn apply_on(state: &FleetState, action: FleetAction, today: NaiveDate) -> CoreResult<FleetState> {
    let mut next = state.clone();

    match action {
        // =====================================================================
        // Vehicles
        // =====================================================================
        FleetAction::AddVehicle(vehicle) => {
            next.issued_ids.observe(EntityKind::Vehicle, &vehicle.id);
            next.vehicles.push(vehicle);
        }
        FleetAction::UpdateVehicle(patch) => {
            if let Some(v) = next.vehicles.iter_mut().find(|v| v.id == patch.id) {
                *v = patch.merge(v);
            }
        }
        FleetAction::DeleteVehicle(id) => {
            next.vehicles.retain(|v| v.id != id);
        }
        FleetAction::ToggleVehicleRetired(id) => {
            if let Some(v) = next.vehicles.iter_mut().find(|v| v.id == id) {
                v.status = match v.status {
                    VehicleStatus::Retired => VehicleStatus::Available,
                    _ => VehicleStatus::Retired,
                };
            }
        }
        FleetAction::SetVehicleStatus { id, status } => {
            set_vehicle_status(&mut next.vehicles, &id, status);
        }

        // =====================================================================
        // Drivers
        // =====================================================================
        FleetAction::AddDriver(driver) => {
            next.issued_ids.observe(EntityKind::Driver, &driver.id);
            next.drivers.push(driver);
        }
        FleetAction::UpdateDriver(patch) => {
            if let Some(d) = next.drivers.iter_mut().find(|d| d.id == patch.id) {
                *d = patch.merge(d);
            }
        }
        FleetAction::DeleteDriver(id) => {
            next.drivers.retain(|d| d.id != id);
        }
        FleetAction::SetDriverStatus { id, status } => {
            set_driver_status(&mut next.drivers, &id, status);
        }

        // =====================================================================
        // Trips
        // =====================================================================
        FleetAction::AddTrip(trip) => {
            if trip.status == TripStatus::Dispatched {
                set_vehicle_status(&mut next.vehicles, &trip.vehicle_id, VehicleStatus::OnTrip);
                set_driver_status(&mut next.drivers, &trip.driver_id, DriverStatus::OnDuty);
            }
            next.issued_ids.observe(EntityKind::Trip, &trip.id);
            next.trips.push(trip);
        }
        FleetAction::UpdateTripStatus { trip_id, status } => {
            let Some(trip) = next.trips.iter_mut().find(|t| t.id == trip_id) else {
                return Ok(next);
            };
            if !trip.status.can_transition_to(status) {
                return Err(CoreError::IllegalTripTransition {
                    trip_id,
                    from: trip.status,
                    to: status,
                });
            }

            trip.status = status;
            if status.is_terminal() {
                trip.end_date = Some(today);
            }
            let vehicle_id = trip.vehicle_id.clone();
            let driver_id = trip.driver_id.clone();

            let (vehicle_status, driver_status) = if status.is_terminal() {
                (VehicleStatus::Available, DriverStatus::OffDuty)
            } else {
                (VehicleStatus::OnTrip, DriverStatus::OnDuty)
            };
            set_vehicle_status(&mut next.vehicles, &vehicle_id, vehicle_status);
            set_driver_status(&mut next.drivers, &driver_id, driver_status);
        }

        // =====================================================================
        // Maintenance
        // =====================================================================
        FleetAction::AddMaintenanceLog(log) => {
            set_vehicle_status(&mut next.vehicles, &log.vehicle_id, VehicleStatus::InShop);
            next.issued_ids.observe(EntityKind::MaintenanceLog, &log.id);
            next.maintenance_logs.push(log);
        }
        FleetAction::UpdateMaintenanceLog(patch) => {
            let Some(log) = next.maintenance_logs.iter_mut().find(|m| m.id == patch.id) else {
                return Ok(next);
            };
            let merged = patch.merge(log);
            *log = merged.clone();

            if merged.status == MaintenanceStatus::Completed {
                let still_open = next.maintenance_logs.iter().any(|m| {
                    m.vehicle_id == merged.vehicle_id && m.status == MaintenanceStatus::InProgress
                });
                if !still_open {
                    set_vehicle_status(
                        &mut next.vehicles,
                        &merged.vehicle_id,
                        VehicleStatus::Available,
                    );
                }
            }
        }
        // Vehicle status is left alone even if this was its last open log.
        FleetAction::DeleteMaintenanceLog(id) => {
            next.maintenance_logs.retain(|m| m.id != id);
        }

        // =====================================================================
        // Fuel
        // =====================================================================
        FleetAction::AddFuelLog(log) => {
            next.issued_ids.observe(EntityKind::FuelLog, &log.id);
            next.fuel_logs.push(log);
        }
        FleetAction::DeleteFuelLog(id) => {
            next.fuel_logs.retain(|f| f.id != id);
        }

        // =====================================================================
        // Filters
        // =====================================================================
        FleetAction::SetFilter(patch) => {
            next.filters = patch.merge(&next.filters);
        }
    }

    Ok(next)
}

/// Applies action JSON. Unknown action types leave the state as it was.
pub fn apply_json(state: &FleetState, action: serde_json::Value) -> CoreResult<FleetState> {
    match FleetAction::from_json(action)? {
        Some(action) => apply(state, action),
        None => Ok(state.clone()),
    }
}

fn set_vehicle_status(vehicles: &mut [Vehicle], id: &str, status: VehicleStatus) {
    if let Some(v) = vehicles.iter_mut().find(|v| v.id == id) {
        v.status = status;
    }
}

fn set_driver_status(drivers: &mut [Driver], id: &str, status: DriverStatus) {
    if let Some(d) = drivers.iter_mut().find(|d| d.id == id) {
        d.status = status;
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
