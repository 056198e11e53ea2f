//! # Driver Commands
//!
//! Driver roster operations. Duty status normally follows trips; the
//! explicit status command exists for suspensions and manual corrections.

use fleet_core::metrics::{
    average_safety_score, driver_status_counts, driver_trip_count, expired_license_count,
    StatusCount,
};
use fleet_core::selectors::available_drivers as available_pool;
use fleet_core::validation::{validate_driver, DriverForm};
use fleet_core::{Capability, Driver, DriverStatus, EntityKind, FleetAction, Permission};
use serde::Serialize;
use tracing::{debug, info};

use super::found;
use crate::error::ApiError;
use crate::state::{authorize, FleetStore};

/// A driver plus the figures the roster shows next to them.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverRow {
    #[serde(flatten)]
    pub driver: Driver,
    /// Percent of assigned trips completed.
    pub completion_rate: f64,
    /// Trips on record naming this driver.
    pub trip_count: usize,
    pub license_expired: bool,
}

pub fn list_drivers(store: &FleetStore) -> Vec<DriverRow> {
    debug!("list_drivers command");
    let today = store.today();
    store.with_state(|s| {
        s.drivers
            .iter()
            .map(|d| DriverRow {
                driver: d.clone(),
                completion_rate: d.completion_rate(),
                trip_count: driver_trip_count(s, &d.id),
                license_expired: d.is_license_expired_on(today),
            })
            .collect()
    })
}

/// The roster header: duty counts, expired licenses, average safety score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterSummary {
    pub total: usize,
    pub status_counts: Vec<StatusCount<DriverStatus>>,
    pub expired_licenses: usize,
    pub average_safety_score: Option<u8>,
}

pub fn driver_summary(store: &FleetStore) -> RosterSummary {
    debug!("driver_summary command");
    let today = store.today();
    store.with_state(|s| RosterSummary {
        total: s.drivers.len(),
        status_counts: driver_status_counts(s),
        expired_licenses: expired_license_count(s, today),
        average_safety_score: average_safety_score(s),
    })
}

/// Drivers a new trip may use (anyone not suspended).
pub fn available_drivers(store: &FleetStore) -> Vec<Driver> {
    debug!("available_drivers command");
    store.with_state(|s| available_pool(s).into_iter().cloned().collect())
}

pub fn get_driver(store: &FleetStore, id: &str) -> Result<Driver, ApiError> {
    debug!(id, "get_driver command");
    store
        .with_state(|s| s.driver(id).cloned())
        .ok_or_else(|| ApiError::not_found("Driver", id))
}

pub fn create_driver(
    store: &FleetStore,
    caps: &impl Capability,
    form: &DriverForm,
) -> Result<Driver, ApiError> {
    debug!(name = %form.name, "create_driver command");
    authorize(caps, Permission::Create, "create_driver")?;

    let driver = store.transact(|state, _| {
        let driver = validate_driver(form)?.into_driver(state.next_id(EntityKind::Driver));
        Ok((FleetAction::AddDriver(driver.clone()), driver))
    })?;

    info!(id = %driver.id, "Driver added");
    Ok(driver)
}

pub fn update_driver(
    store: &FleetStore,
    caps: &impl Capability,
    id: &str,
    form: &DriverForm,
) -> Result<Driver, ApiError> {
    debug!(id, "update_driver command");
    authorize(caps, Permission::Update, "update_driver")?;

    let driver = store.transact(|state, _| {
        let current = found(state.driver(id), "Driver", id)?;
        let patch = validate_driver(form)?.into_patch(id.to_string());
        let updated = patch.merge(current);
        Ok((FleetAction::UpdateDriver(patch), updated))
    })?;

    Ok(driver)
}

/// Removes a driver. Their trips keep the id and render it as absent.
pub fn delete_driver(store: &FleetStore, caps: &impl Capability, id: &str) -> Result<(), ApiError> {
    debug!(id, "delete_driver command");
    authorize(caps, Permission::Delete, "delete_driver")?;

    store.transact(|state, _| {
        found(state.driver(id), "Driver", id)?;
        Ok((FleetAction::DeleteDriver(id.to_string()), ()))
    })?;

    info!(id, "Driver deleted");
    Ok(())
}

pub fn set_driver_status(
    store: &FleetStore,
    caps: &impl Capability,
    id: &str,
    status: DriverStatus,
) -> Result<Driver, ApiError> {
    debug!(id, %status, "set_driver_status command");
    authorize(caps, Permission::Update, "set_driver_status")?;

    let next = store.dispatch(FleetAction::SetDriverStatus {
        id: id.to_string(),
        status,
    })?;
    next.driver(id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Driver", id))
}
