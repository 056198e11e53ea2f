//! # Trip Commands
//!
//! Trip creation and status moves. Both cascade onto the assigned vehicle
//! and driver inside the engine.
//!
//! ## Trip Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Trip Lifecycle                                       │
//! │                                                                         │
//! │  create_trip                                                            │
//! │      │                                                                  │
//! │      ├── Draft ──────────┬──────────────► Cancelled                     │
//! │      │                   │                   ▲                          │
//! │      │                   ▼                   │                          │
//! │      └── Dispatched ◄────┘ ──────────────────┤                          │
//! │              │                               │                          │
//! │              └─────────────► Completed       │                          │
//! │                                                                         │
//! │  Dispatched:            vehicle → On Trip,   driver → On Duty           │
//! │  Completed / Cancelled: vehicle → Available, driver → Off Duty          │
//! │  Anything else:         ILLEGAL_TRANSITION, nothing changes             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use fleet_core::selectors::{driver_label, vehicle_label};
use fleet_core::validation::{validate_trip, TripForm};
use fleet_core::{Capability, EntityKind, FleetAction, Permission, Trip, TripStatus};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{authorize, FleetStore};

/// A trip with its vehicle and driver resolved to names.
///
/// A deleted vehicle or driver shows as `"—"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TripRow {
    #[serde(flatten)]
    pub trip: Trip,
    pub vehicle_name: String,
    pub driver_name: String,
}

pub fn list_trips(store: &FleetStore) -> Vec<TripRow> {
    debug!("list_trips command");
    store.with_state(|s| {
        s.trips
            .iter()
            .map(|t| TripRow {
                trip: t.clone(),
                vehicle_name: vehicle_label(s, &t.vehicle_id).to_string(),
                driver_name: driver_label(s, &t.driver_id).to_string(),
            })
            .collect()
    })
}

pub fn get_trip(store: &FleetStore, id: &str) -> Result<Trip, ApiError> {
    debug!(id, "get_trip command");
    store
        .with_state(|s| s.trip(id).cloned())
        .ok_or_else(|| ApiError::not_found("Trip", id))
}

/// Creates a trip as Draft or Dispatched.
///
/// ## Hard Blocks
/// - cargo heavier than the vehicle's capacity
/// - driver license expired as of today
/// - vehicle not Available, driver Suspended
pub fn create_trip(
    store: &FleetStore,
    caps: &impl Capability,
    form: &TripForm,
) -> Result<Trip, ApiError> {
    debug!(vehicle_id = %form.vehicle_id, driver_id = %form.driver_id, "create_trip command");
    authorize(caps, Permission::Create, "create_trip")?;

    let trip = store.transact(|state, today| {
        let draft = validate_trip(form, state, today)?;
        let trip = draft.into_trip(state.next_id(EntityKind::Trip), today);
        Ok((FleetAction::AddTrip(trip.clone()), trip))
    })?;

    info!(id = %trip.id, status = %trip.status, "Trip created");
    Ok(trip)
}

/// Moves a trip along its lifecycle.
pub fn update_trip_status(
    store: &FleetStore,
    caps: &impl Capability,
    trip_id: &str,
    status: TripStatus,
) -> Result<Trip, ApiError> {
    debug!(trip_id, %status, "update_trip_status command");
    authorize(caps, Permission::Update, "update_trip_status")?;

    let next = store.dispatch(FleetAction::UpdateTripStatus {
        trip_id: trip_id.to_string(),
        status,
    })?;
    let trip = next
        .trip(trip_id)
        .cloned()
        .ok_or_else(|| ApiError::not_found("Trip", trip_id))?;

    info!(id = %trip.id, status = %trip.status, "Trip status changed");
    Ok(trip)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{demo_store, today};
    use crate::commands::vehicle::delete_vehicle;
    use crate::error::ErrorCode;
    use fleet_core::selectors::ABSENT;
    use fleet_core::{DriverStatus, Money, Role, VehicleStatus};

    fn form(vehicle_id: &str, driver_id: &str, weight: &str, status: TripStatus) -> TripForm {
        TripForm {
            vehicle_id: vehicle_id.to_string(),
            driver_id: driver_id.to_string(),
            origin: "Jaipur".to_string(),
            destination: "Agra".to_string(),
            cargo_description: "Handicrafts".to_string(),
            cargo_weight: weight.to_string(),
            revenue: "12500.50".to_string(),
            status,
        }
    }

    #[test]
    fn test_create_dispatched_trip_cascades() {
        let store = demo_store();
        let trip = create_trip(&store, &Role::Manager, &form("V004", "D003", "900", TripStatus::Dispatched)).unwrap();

        assert_eq!(trip.id, "T008");
        assert_eq!(trip.start_date, Some(today()));
        assert_eq!(trip.revenue, Money::from_minor(1_250_050));

        let state = store.snapshot();
        assert_eq!(state.vehicle("V004").unwrap().status, VehicleStatus::OnTrip);
        assert_eq!(state.driver("D003").unwrap().status, DriverStatus::OnDuty);
    }

    #[test]
    fn test_create_draft_trip_has_no_dates() {
        let store = demo_store();
        let trip = create_trip(&store, &Role::Admin, &form("V007", "D006", "7000", TripStatus::Draft)).unwrap();

        assert_eq!(trip.start_date, None);
        assert_eq!(store.snapshot().vehicle("V007").unwrap().status, VehicleStatus::Available);
    }

    #[test]
    fn test_capacity_is_a_hard_block() {
        let store = demo_store();
        let err = create_trip(&store, &Role::Admin, &form("V004", "D003", "5000", TripStatus::Draft)).unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(err.fields.unwrap().contains_key("cargoWeight"));
        assert_eq!(store.snapshot().trips.len(), 7);
    }

    #[test]
    fn test_expired_license_is_a_hard_block() {
        let store = demo_store();
        let err = create_trip(&store, &Role::Admin, &form("V007", "D002", "1000", TripStatus::Dispatched)).unwrap_err();

        let fields = err.fields.unwrap();
        assert!(fields["driverId"].contains("expired"));
        assert_eq!(store.snapshot().vehicle("V007").unwrap().status, VehicleStatus::Available);
    }

    #[test]
    fn test_busy_vehicle_and_suspended_driver_rejected() {
        let store = demo_store();
        let err = create_trip(&store, &Role::Admin, &form("V002", "D004", "100", TripStatus::Draft)).unwrap_err();

        let fields = err.fields.unwrap();
        assert!(fields.contains_key("vehicleId"));
        assert!(fields.contains_key("driverId"));
    }

    #[test]
    fn test_viewer_cannot_create_trip() {
        let store = demo_store();
        let err = create_trip(&store, &Role::Viewer, &form("V004", "D003", "900", TripStatus::Draft)).unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
    }

    #[test]
    fn test_dispatch_then_complete() {
        let store = demo_store();

        let trip = update_trip_status(&store, &Role::Manager, "T006", TripStatus::Dispatched).unwrap();
        assert_eq!(trip.status, TripStatus::Dispatched);
        assert_eq!(store.snapshot().vehicle("V001").unwrap().status, VehicleStatus::OnTrip);

        let trip = update_trip_status(&store, &Role::Manager, "T006", TripStatus::Completed).unwrap();
        assert_eq!(trip.end_date, Some(today()));

        let state = store.snapshot();
        assert_eq!(state.vehicle("V001").unwrap().status, VehicleStatus::Available);
        assert_eq!(state.driver("D001").unwrap().status, DriverStatus::OffDuty);
    }

    #[test]
    fn test_completed_trip_cannot_be_redispatched() {
        let store = demo_store();
        let err = update_trip_status(&store, &Role::Admin, "T003", TripStatus::Dispatched).unwrap_err();

        assert_eq!(err.code, ErrorCode::IllegalTransition);
        assert_eq!(store.snapshot().vehicle("V001").unwrap().status, VehicleStatus::Available);
    }

    #[test]
    fn test_unknown_trip_is_not_found() {
        let store = demo_store();
        let before = store.snapshot();
        let err = update_trip_status(&store, &Role::Admin, "T404", TripStatus::Completed).unwrap_err();

        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(*store.snapshot(), *before);
    }

    #[test]
    fn test_list_trips_resolves_names() {
        let store = demo_store();
        delete_vehicle(&store, &Role::Admin, "V008").unwrap();

        let rows = list_trips(&store);
        let t001 = rows.iter().find(|r| r.trip.id == "T001").unwrap();
        assert_eq!(t001.vehicle_name, "Mercedes Actros");
        assert_eq!(t001.driver_name, "Rajesh Kumar");

        let t007 = rows.iter().find(|r| r.trip.id == "T007").unwrap();
        assert_eq!(t007.vehicle_name, ABSENT);
        assert_eq!(t007.driver_name, "Meena Das");
    }
}
