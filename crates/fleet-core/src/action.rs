//! # Actions
//!
//! The closed set of state changes. Every mutation of fleet state is one
//! `FleetAction` handed to [`crate::engine::apply`].
//!
//! ## Wire Shape
//! ```text
//! { "type": "UPDATE_TRIP_STATUS", "payload": { "tripId": "T001", "status": "Completed" } }
//! { "type": "DELETE_VEHICLE",     "payload": "V003" }
//! ```
//!
//! Action JSON with a `type` this build doesn't know is not an error:
//! [`FleetAction::from_json`] returns `Ok(None)` and the caller keeps the
//! current state.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::access::Permission;
use crate::error::{CoreError, CoreResult};
use crate::types::{
    Driver, DriverPatch, DriverStatus, FilterPatch, FuelLog, MaintenanceLog, MaintenanceLogPatch,
    Trip, TripStatus, Vehicle, VehiclePatch, VehicleStatus,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum FleetAction {
    // ─── Vehicles ───────────────────────────────────────────────────────
    AddVehicle(Vehicle),
    UpdateVehicle(VehiclePatch),
    DeleteVehicle(String),
    ToggleVehicleRetired(String),
    SetVehicleStatus {
        id: String,
        status: VehicleStatus,
    },

    // ─── Drivers ────────────────────────────────────────────────────────
    AddDriver(Driver),
    UpdateDriver(DriverPatch),
    DeleteDriver(String),
    SetDriverStatus {
        id: String,
        status: DriverStatus,
    },

    // ─── Trips ──────────────────────────────────────────────────────────
    AddTrip(Trip),
    UpdateTripStatus {
        #[serde(rename = "tripId")]
        trip_id: String,
        status: TripStatus,
    },

    // ─── Maintenance ────────────────────────────────────────────────────
    AddMaintenanceLog(MaintenanceLog),
    UpdateMaintenanceLog(MaintenanceLogPatch),
    DeleteMaintenanceLog(String),

    // ─── Fuel ───────────────────────────────────────────────────────────
    AddFuelLog(FuelLog),
    DeleteFuelLog(String),

    // ─── Filters ────────────────────────────────────────────────────────
    SetFilter(FilterPatch),
}

impl FleetAction {
    /// Every `type` tag this build understands.
    pub const KINDS: [&'static str; 17] = [
        "ADD_VEHICLE",
        "UPDATE_VEHICLE",
        "DELETE_VEHICLE",
        "TOGGLE_VEHICLE_RETIRED",
        "SET_VEHICLE_STATUS",
        "ADD_DRIVER",
        "UPDATE_DRIVER",
        "DELETE_DRIVER",
        "SET_DRIVER_STATUS",
        "ADD_TRIP",
        "UPDATE_TRIP_STATUS",
        "ADD_MAINTENANCE_LOG",
        "UPDATE_MAINTENANCE_LOG",
        "DELETE_MAINTENANCE_LOG",
        "ADD_FUEL_LOG",
        "DELETE_FUEL_LOG",
        "SET_FILTER",
    ];

    /// The wire `type` tag of this action.
    pub fn kind(&self) -> &'static str {
        match self {
            FleetAction::AddVehicle(_) => "ADD_VEHICLE",
            FleetAction::UpdateVehicle(_) => "UPDATE_VEHICLE",
            FleetAction::DeleteVehicle(_) => "DELETE_VEHICLE",
            FleetAction::ToggleVehicleRetired(_) => "TOGGLE_VEHICLE_RETIRED",
            FleetAction::SetVehicleStatus { .. } => "SET_VEHICLE_STATUS",
            FleetAction::AddDriver(_) => "ADD_DRIVER",
            FleetAction::UpdateDriver(_) => "UPDATE_DRIVER",
            FleetAction::DeleteDriver(_) => "DELETE_DRIVER",
            FleetAction::SetDriverStatus { .. } => "SET_DRIVER_STATUS",
            FleetAction::AddTrip(_) => "ADD_TRIP",
            FleetAction::UpdateTripStatus { .. } => "UPDATE_TRIP_STATUS",
            FleetAction::AddMaintenanceLog(_) => "ADD_MAINTENANCE_LOG",
            FleetAction::UpdateMaintenanceLog(_) => "UPDATE_MAINTENANCE_LOG",
            FleetAction::DeleteMaintenanceLog(_) => "DELETE_MAINTENANCE_LOG",
            FleetAction::AddFuelLog(_) => "ADD_FUEL_LOG",
            FleetAction::DeleteFuelLog(_) => "DELETE_FUEL_LOG",
            FleetAction::SetFilter(_) => "SET_FILTER",
        }
    }

    /// Permission a caller needs before this action may be dispatched.
    pub fn required_permission(&self) -> Permission {
        match self {
            FleetAction::AddVehicle(_)
            | FleetAction::AddDriver(_)
            | FleetAction::AddTrip(_)
            | FleetAction::AddMaintenanceLog(_)
            | FleetAction::AddFuelLog(_) => Permission::Create,

            FleetAction::UpdateVehicle(_)
            | FleetAction::ToggleVehicleRetired(_)
            | FleetAction::SetVehicleStatus { .. }
            | FleetAction::UpdateDriver(_)
            | FleetAction::SetDriverStatus { .. }
            | FleetAction::UpdateTripStatus { .. }
            | FleetAction::UpdateMaintenanceLog(_) => Permission::Update,

            FleetAction::DeleteVehicle(_)
            | FleetAction::DeleteDriver(_)
            | FleetAction::DeleteMaintenanceLog(_)
            | FleetAction::DeleteFuelLog(_) => Permission::Delete,

            FleetAction::SetFilter(_) => Permission::Read,
        }
    }

    /// Decodes action JSON.
    ///
    /// ## Returns
    /// - `Ok(Some(action))` for a known, well-formed action
    /// - `Ok(None)` when `type` is missing or not one of [`Self::KINDS`]
    /// - `Err(MalformedAction)` when a known `type` carries a bad payload
    pub fn from_json(value: serde_json::Value) -> CoreResult<Option<FleetAction>> {
        let known = value
            .get("type")
            .and_then(|t| t.as_str())
            .is_some_and(|t| Self::KINDS.contains(&t));
        if !known {
            return Ok(None);
        }

        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| CoreError::MalformedAction(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_shape() {
        let action = FleetAction::UpdateTripStatus {
            trip_id: "T001".to_string(),
            status: TripStatus::Completed,
        };
        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(
            json,
            json!({ "type": "UPDATE_TRIP_STATUS", "payload": { "tripId": "T001", "status": "Completed" } })
        );

        let json = serde_json::to_value(FleetAction::DeleteVehicle("V003".to_string())).unwrap();
        assert_eq!(json, json!({ "type": "DELETE_VEHICLE", "payload": "V003" }));
    }

    #[test]
    fn test_kind_matches_serialized_tag() {
        let actions = [
            FleetAction::ToggleVehicleRetired("V006".to_string()),
            FleetAction::SetDriverStatus {
                id: "D004".to_string(),
                status: DriverStatus::Suspended,
            },
            FleetAction::UpdateMaintenanceLog(MaintenanceLogPatch::resolve("M001")),
            FleetAction::SetFilter(FilterPatch::default()),
        ];
        for action in actions {
            let json = serde_json::to_value(&action).unwrap();
            assert_eq!(json["type"], action.kind());
            assert!(FleetAction::KINDS.contains(&action.kind()));
        }
    }

    #[test]
    fn test_from_json_unknown_kind_is_none() {
        assert!(FleetAction::from_json(json!({ "type": "RESET_EVERYTHING" }))
            .unwrap()
            .is_none());
        assert!(FleetAction::from_json(json!({ "payload": 1 })).unwrap().is_none());
    }

    #[test]
    fn test_from_json_known_kind() {
        let action = FleetAction::from_json(json!({
            "type": "SET_FILTER",
            "payload": { "vehicleType": "Truck" }
        }))
        .unwrap()
        .unwrap();
        assert!(matches!(action, FleetAction::SetFilter(p) if p.region.is_none()));
    }

    #[test]
    fn test_from_json_malformed_payload() {
        let err = FleetAction::from_json(json!({ "type": "DELETE_FUEL_LOG", "payload": 7 }))
            .unwrap_err();
        assert!(matches!(err, CoreError::MalformedAction(_)));
    }

    #[test]
    fn test_required_permissions() {
        assert_eq!(
            FleetAction::DeleteDriver("D001".to_string()).required_permission(),
            Permission::Delete
        );
        assert_eq!(
            FleetAction::ToggleVehicleRetired("V001".to_string()).required_permission(),
            Permission::Update
        );
        assert_eq!(
            FleetAction::SetFilter(FilterPatch::default()).required_permission(),
            Permission::Read
        );
    }
}
