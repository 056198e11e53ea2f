//! # Fleet State
//!
//! The snapshot the engine transforms: five entity collections, the
//! read-only pending cargo list and the dashboard filter selection.
//!
//! A `FleetState` is a plain value. The engine never edits one in place;
//! it builds the next snapshot and the owner swaps it in with a single
//! assignment, so observers see either the old state or the new one.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::IdWatermarks;
use crate::types::{Driver, Filters, FuelLog, MaintenanceLog, PendingCargo, Trip, Vehicle};

/// One consistent snapshot of the whole fleet.
///
/// Collections keep insertion order; selectors rely on it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FleetState {
    pub vehicles: Vec<Vehicle>,
    pub drivers: Vec<Driver>,
    pub trips: Vec<Trip>,
    pub maintenance_logs: Vec<MaintenanceLog>,
    pub fuel_logs: Vec<FuelLog>,
    pub pending_cargo: Vec<PendingCargo>,
    pub filters: Filters,
    /// Highest id accepted per collection; keeps deleted ids retired.
    #[serde(default)]
    pub issued_ids: IdWatermarks,
}

impl FleetState {
    /// An empty fleet with default (All/All) filters.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn driver(&self, id: &str) -> Option<&Driver> {
        self.drivers.iter().find(|d| d.id == id)
    }

    pub fn trip(&self, id: &str) -> Option<&Trip> {
        self.trips.iter().find(|t| t.id == id)
    }

    pub fn maintenance_log(&self, id: &str) -> Option<&MaintenanceLog> {
        self.maintenance_logs.iter().find(|m| m.id == id)
    }

    pub fn fuel_log(&self, id: &str) -> Option<&FuelLog> {
        self.fuel_logs.iter().find(|f| f.id == id)
    }
}
