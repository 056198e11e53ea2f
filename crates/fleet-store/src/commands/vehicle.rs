//! # Vehicle Commands
//!
//! Registry operations.
//!
//! ## Vehicle Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Vehicle Lifecycle                                    │
//! │                                                                         │
//! │  create_vehicle ──► Available ◄──────────────► On Trip                  │
//! │                        │   ▲     (trip commands)                        │
//! │                        │   │                                            │
//! │       maintenance ─────┘   └───── last open log resolved                │
//! │            ▼                                                            │
//! │         In Shop                                                         │
//! │                                                                         │
//! │  toggle_vehicle_retired:  any ──► Retired ──► Available                 │
//! │  delete_vehicle:          gone (trips keep the dangling id)             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use fleet_core::selectors::{available_vehicles as available_pool, filtered_vehicles};
use fleet_core::validation::{validate_vehicle, VehicleForm};
use fleet_core::{Capability, EntityKind, FleetAction, Permission, Vehicle, VehicleStatus};
use tracing::{debug, info};

use super::found;
use crate::error::ApiError;
use crate::state::{authorize, FleetStore};

/// Vehicles matching the active dashboard filters, in registry order.
pub fn list_vehicles(store: &FleetStore) -> Vec<Vehicle> {
    debug!("list_vehicles command");
    store.with_state(|s| filtered_vehicles(s).into_iter().cloned().collect())
}

/// Vehicles a new trip may use.
pub fn available_vehicles(store: &FleetStore) -> Vec<Vehicle> {
    debug!("available_vehicles command");
    store.with_state(|s| available_pool(s).into_iter().cloned().collect())
}

pub fn get_vehicle(store: &FleetStore, id: &str) -> Result<Vehicle, ApiError> {
    debug!(id, "get_vehicle command");
    store
        .with_state(|s| s.vehicle(id).cloned())
        .ok_or_else(|| ApiError::not_found("Vehicle", id))
}

/// Registers a vehicle. It always starts Available.
pub fn create_vehicle(
    store: &FleetStore,
    caps: &impl Capability,
    form: &VehicleForm,
) -> Result<Vehicle, ApiError> {
    debug!(plate = %form.plate, "create_vehicle command");
    authorize(caps, Permission::Create, "create_vehicle")?;

    let vehicle = store.transact(|state, today| {
        let draft = validate_vehicle(form, state, None, today)?;
        let vehicle = draft.into_vehicle(state.next_id(EntityKind::Vehicle));
        Ok((FleetAction::AddVehicle(vehicle.clone()), vehicle))
    })?;

    info!(id = %vehicle.id, plate = %vehicle.plate, "Vehicle registered");
    Ok(vehicle)
}

/// Replaces a vehicle's details from a full form.
pub fn update_vehicle(
    store: &FleetStore,
    caps: &impl Capability,
    id: &str,
    form: &VehicleForm,
) -> Result<Vehicle, ApiError> {
    debug!(id, "update_vehicle command");
    authorize(caps, Permission::Update, "update_vehicle")?;

    let vehicle = store.transact(|state, today| {
        let current = found(state.vehicle(id), "Vehicle", id)?;
        let patch = validate_vehicle(form, state, Some(id), today)?.into_patch(id.to_string());
        let updated = patch.merge(current);
        Ok((FleetAction::UpdateVehicle(patch), updated))
    })?;

    Ok(vehicle)
}

pub fn delete_vehicle(store: &FleetStore, caps: &impl Capability, id: &str) -> Result<(), ApiError> {
    debug!(id, "delete_vehicle command");
    authorize(caps, Permission::Delete, "delete_vehicle")?;

    store.transact(|state, _| {
        found(state.vehicle(id), "Vehicle", id)?;
        Ok((FleetAction::DeleteVehicle(id.to_string()), ()))
    })?;

    info!(id, "Vehicle deleted");
    Ok(())
}

/// Retires an active vehicle, or returns a retired one to service.
pub fn toggle_vehicle_retired(
    store: &FleetStore,
    caps: &impl Capability,
    id: &str,
) -> Result<Vehicle, ApiError> {
    debug!(id, "toggle_vehicle_retired command");
    authorize(caps, Permission::Update, "toggle_vehicle_retired")?;

    let next = store.dispatch(FleetAction::ToggleVehicleRetired(id.to_string()))?;
    next.vehicle(id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Vehicle", id))
}

/// Sets a status directly, without any cascade.
pub fn set_vehicle_status(
    store: &FleetStore,
    caps: &impl Capability,
    id: &str,
    status: VehicleStatus,
) -> Result<Vehicle, ApiError> {
    debug!(id, %status, "set_vehicle_status command");
    authorize(caps, Permission::Update, "set_vehicle_status")?;

    let next = store.dispatch(FleetAction::SetVehicleStatus {
        id: id.to_string(),
        status,
    })?;
    next.vehicle(id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Vehicle", id))
}
