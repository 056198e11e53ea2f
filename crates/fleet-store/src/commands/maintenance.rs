//! # Maintenance Commands
//!
//! Opening a service log sends the vehicle to the shop. Resolving the last
//! open log for a vehicle brings it back to Available.

use fleet_core::validation::{validate_maintenance, MaintenanceForm};
use fleet_core::{
    Capability, CoreError, EntityKind, FleetAction, MaintenanceLog, MaintenanceLogPatch,
    MaintenanceStatus, Permission, ValidationError,
};
use tracing::{debug, info};

use super::found;
use crate::error::ApiError;
use crate::state::{authorize, FleetStore};

/// Service history, newest entry last.
pub fn list_maintenance_logs(store: &FleetStore) -> Vec<MaintenanceLog> {
    debug!("list_maintenance_logs command");
    store.with_state(|s| s.maintenance_logs.clone())
}

pub fn create_maintenance_log(
    store: &FleetStore,
    caps: &impl Capability,
    form: &MaintenanceForm,
) -> Result<MaintenanceLog, ApiError> {
    debug!(vehicle_id = %form.vehicle_id, "create_maintenance_log command");
    authorize(caps, Permission::Create, "create_maintenance_log")?;

    let log = store.transact(|state, _| {
        let log = validate_maintenance(form, state)?
            .into_log(state.next_id(EntityKind::MaintenanceLog));
        Ok((FleetAction::AddMaintenanceLog(log.clone()), log))
    })?;

    info!(id = %log.id, vehicle_id = %log.vehicle_id, "Vehicle sent to shop");
    Ok(log)
}

/// Edits an open log's details; its status is left as it is.
/// Completed logs are closed and reject edits.
pub fn update_maintenance_log(
    store: &FleetStore,
    caps: &impl Capability,
    id: &str,
    form: &MaintenanceForm,
) -> Result<MaintenanceLog, ApiError> {
    debug!(id, "update_maintenance_log command");
    authorize(caps, Permission::Update, "update_maintenance_log")?;

    let log = store.transact(|state, _| {
        let current = open_log(state.maintenance_log(id), id)?;
        let patch = validate_maintenance(form, state)?.into_patch(id.to_string());
        let updated = patch.merge(current);
        Ok((FleetAction::UpdateMaintenanceLog(patch), updated))
    })?;

    Ok(log)
}

/// Marks an open log Completed.
pub fn resolve_maintenance_log(
    store: &FleetStore,
    caps: &impl Capability,
    id: &str,
) -> Result<MaintenanceLog, ApiError> {
    debug!(id, "resolve_maintenance_log command");
    authorize(caps, Permission::Update, "resolve_maintenance_log")?;

    let log = store.transact(|state, _| {
        let patch = MaintenanceLogPatch::resolve(id);
        let resolved = patch.merge(open_log(state.maintenance_log(id), id)?);
        Ok((FleetAction::UpdateMaintenanceLog(patch), resolved))
    })?;

    info!(id, vehicle_id = %log.vehicle_id, "Maintenance resolved");
    Ok(log)
}

fn open_log<'a>(log: Option<&'a MaintenanceLog>, id: &str) -> Result<&'a MaintenanceLog, CoreError> {
    let log = found(log, "Maintenance log", id)?;
    if log.status != MaintenanceStatus::InProgress {
        return Err(ValidationError::AlreadyClosed {
            id: id.to_string(),
            status: log.status.to_string(),
        }
        .into());
    }
    Ok(log)
}

/// Removes a log. The vehicle's status is not recomputed.
pub fn delete_maintenance_log(
    store: &FleetStore,
    caps: &impl Capability,
    id: &str,
) -> Result<(), ApiError> {
    debug!(id, "delete_maintenance_log command");
    authorize(caps, Permission::Delete, "delete_maintenance_log")?;

    store.transact(|state, _| {
        found(state.maintenance_log(id), "Maintenance log", id)?;
        Ok((FleetAction::DeleteMaintenanceLog(id.to_string()), ()))
    })?;
    Ok(())
}
