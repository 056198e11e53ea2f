//! # Fleet Store
//!
//! The single writer that owns the current [`FleetState`].
//!
//! ## Thread Safety
//! The snapshot is held as `Arc<Mutex<Arc<FleetState>>>`:
//! 1. Every dispatch takes the lock, so actions apply strictly in order
//! 2. Readers clone the inner `Arc` and release the lock immediately
//! 3. A snapshot handed out earlier never changes underneath its holder
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Store Operations                                     │
//! │                                                                         │
//! │  Caller                   FleetStore              Snapshot              │
//! │  ──────                   ──────────              ────────              │
//! │                                                                         │
//! │  dispatch(action) ───────► lock ──► apply_on ───► Arc::new(next)       │
//! │                                        │                                │
//! │                                        └─ Err ──► old snapshot kept     │
//! │                                                                         │
//! │  transact(|state| ..) ───► lock ──► validate ──► next_id ──► apply_on  │
//! │                            (one lock for the whole read-modify-write)   │
//! │                                                                         │
//! │  snapshot() ─────────────► lock ──► Arc::clone ──► (read only)         │
//! │                                                                         │
//! │  NOTE: apply_on never touches its input, so a rejected action leaves    │
//! │        the store exactly as it was.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use chrono::{Local, NaiveDate};
use fleet_core::{apply_on, Capability, CoreError, CoreResult, FleetAction, FleetState, Permission};
use tracing::{debug, info, warn};

use crate::error::ApiError;

/// Shared handle to the fleet snapshot.
///
/// Cloning the store clones the handle, not the data: every clone
/// dispatches into the same state.
#[derive(Debug, Clone)]
pub struct FleetStore {
    state: Arc<Mutex<Arc<FleetState>>>,

    /// Pins "today" for trip end dates and license checks.
    fixed_date: Option<NaiveDate>,
}

impl FleetStore {
    /// Creates a store holding `initial`.
    pub fn new(initial: FleetState) -> Self {
        info!(
            vehicles = initial.vehicles.len(),
            drivers = initial.drivers.len(),
            trips = initial.trips.len(),
            "Fleet store initialized"
        );
        FleetStore {
            state: Arc::new(Mutex::new(Arc::new(initial))),
            fixed_date: None,
        }
    }

    pub fn empty() -> Self {
        Self::new(FleetState::new())
    }

    /// Uses `date` as today instead of the local clock.
    pub fn with_fixed_date(mut self, date: NaiveDate) -> Self {
        self.fixed_date = Some(date);
        self
    }

    /// Calendar date used for every date-dependent rule.
    pub fn today(&self) -> NaiveDate {
        self.fixed_date
            .unwrap_or_else(|| Local::now().date_naive())
    }

    /// A panic inside a previous dispatch cannot have left a half-written
    /// snapshot behind (the swap is a single assignment), so a poisoned
    /// lock is safe to reuse.
    fn lock(&self) -> MutexGuard<'_, Arc<FleetState>> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// The current snapshot.
    pub fn snapshot(&self) -> Arc<FleetState> {
        Arc::clone(&self.lock())
    }

    /// Executes a function with read access to the current snapshot.
    ///
    /// ## Usage
    /// ```rust
    /// use fleet_store::FleetStore;
    ///
    /// let store = FleetStore::empty();
    /// let count = store.with_state(|s| s.vehicles.len());
    /// assert_eq!(count, 0);
    /// ```
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&FleetState) -> R,
    {
        let snapshot = self.snapshot();
        f(&snapshot)
    }

    // =========================================================================
    // Writes
    // =========================================================================

    /// Applies one action and publishes the result.
    ///
    /// ## Returns
    /// - `Ok(snapshot)` with the new state (unchanged for no-op actions)
    /// - `Err(IllegalTripTransition)` and the store untouched otherwise
    pub fn dispatch(&self, action: FleetAction) -> CoreResult<Arc<FleetState>> {
        let kind = action.kind();
        debug!(action = kind, "Dispatching action");

        let today = self.today();
        let mut current = self.lock();
        match apply_on(&current, action, today) {
            Ok(next) => {
                let next = Arc::new(next);
                *current = Arc::clone(&next);
                Ok(next)
            }
            Err(e) => {
                warn!(action = kind, error = %e, "Action rejected");
                Err(e)
            }
        }
    }

    /// [`Self::dispatch`] after checking the caller may submit this action.
    pub fn dispatch_as(
        &self,
        caps: &impl Capability,
        action: FleetAction,
    ) -> Result<Arc<FleetState>, ApiError> {
        authorize(caps, action.required_permission(), action.kind())?;
        Ok(self.dispatch(action)?)
    }

    /// Dispatches action JSON as received from a front end.
    ///
    /// Unknown or missing `type` tags leave the state as it is.
    pub fn dispatch_json(&self, raw: &str) -> CoreResult<Arc<FleetState>> {
        let value: serde_json::Value =
            serde_json::from_str(raw).map_err(|e| CoreError::MalformedAction(e.to_string()))?;

        match FleetAction::from_json(value)? {
            Some(action) => self.dispatch(action),
            None => {
                debug!("Ignoring action with unknown type");
                Ok(self.snapshot())
            }
        }
    }

    /// Read-validate-write under a single lock.
    ///
    /// `f` sees the current snapshot and today's date and returns the
    /// action to apply plus a value for the caller. Nothing can be
    /// dispatched between `f` reading the state and its action landing, so
    /// generated ids and cross-entity checks stay valid.
    ///
    /// ## Usage
    /// ```rust
    /// use fleet_core::{EntityKind, FleetAction, FilterPatch};
    /// use fleet_store::FleetStore;
    ///
    /// let store = FleetStore::empty();
    /// let next = store
    ///     .transact(|state, _today| {
    ///         let id = state.next_id(EntityKind::Vehicle);
    ///         Ok((FleetAction::SetFilter(FilterPatch::default()), id))
    ///     })
    ///     .unwrap();
    /// assert_eq!(next, "V001");
    /// ```
    pub fn transact<F, R>(&self, f: F) -> CoreResult<R>
    where
        F: FnOnce(&FleetState, NaiveDate) -> CoreResult<(FleetAction, R)>,
    {
        let today = self.today();
        let mut current = self.lock();

        let (action, output) = f(&current, today)?;
        let kind = action.kind();
        debug!(action = kind, "Dispatching action");

        match apply_on(&current, action, today) {
            Ok(next) => {
                *current = Arc::new(next);
                Ok(output)
            }
            Err(e) => {
                warn!(action = kind, error = %e, "Action rejected");
                Err(e)
            }
        }
    }
}

impl Default for FleetStore {
    fn default() -> Self {
        Self::empty()
    }
}

/// Fails with `FORBIDDEN` unless `caps` grants `permission`.
pub fn authorize(
    caps: &impl Capability,
    permission: Permission,
    command: &str,
) -> Result<(), ApiError> {
    if caps.can(permission) {
        return Ok(());
    }
    warn!(command, %permission, "Permission denied");
    Err(ApiError::forbidden(permission))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use fleet_core::{
        DriverStatus, FilterPatch, Money, Region, Role, Trip, TripStatus, Vehicle,
        VehicleStatus, VehicleType, VehicleTypeFilter,
    };
    use std::thread;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn vehicle(id: &str, status: VehicleStatus) -> Vehicle {
        Vehicle {
            id: id.to_string(),
            name: format!("Truck {}", id),
            model: "Pro 2059".to_string(),
            vehicle_type: VehicleType::Truck,
            plate: format!("MH-04-{}", id),
            capacity: 9000,
            odometer: 63200,
            status,
            region: Region::North,
            year: 2022,
        }
    }

    fn store() -> FleetStore {
        let mut state = FleetState::new();
        state.vehicles.push(vehicle("V001", VehicleStatus::Available));
        state.trips.push(Trip {
            id: "T001".to_string(),
            vehicle_id: "V001".to_string(),
            driver_id: "D001".to_string(),
            origin: "Delhi".to_string(),
            destination: "Chandigarh".to_string(),
            cargo_description: "FMCG Goods".to_string(),
            cargo_weight: 2000,
            status: TripStatus::Completed,
            start_date: Some(date(2026, 2, 10)),
            end_date: Some(date(2026, 2, 11)),
            revenue: Money::from_major(70000),
        });
        FleetStore::new(state).with_fixed_date(date(2026, 2, 21))
    }

    #[test]
    fn test_dispatch_publishes_new_snapshot() {
        let store = store();
        let before = store.snapshot();

        store
            .dispatch(FleetAction::SetVehicleStatus {
                id: "V001".to_string(),
                status: VehicleStatus::InShop,
            })
            .unwrap();

        assert_eq!(before.vehicles[0].status, VehicleStatus::Available);
        assert_eq!(store.snapshot().vehicles[0].status, VehicleStatus::InShop);
    }

    #[test]
    fn test_rejected_action_keeps_state() {
        let store = store();
        let before = store.snapshot();

        let result = store.dispatch(FleetAction::UpdateTripStatus {
            trip_id: "T001".to_string(),
            status: TripStatus::Dispatched,
        });

        assert!(matches!(result, Err(CoreError::IllegalTripTransition { .. })));
        assert_eq!(*store.snapshot(), *before);
    }

    #[test]
    fn test_dispatch_as_checks_permission() {
        let store = store();
        let err = store
            .dispatch_as(&Role::Viewer, FleetAction::DeleteVehicle("V001".to_string()))
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);
        assert_eq!(store.snapshot().vehicles.len(), 1);

        let next = store
            .dispatch_as(&Role::Admin, FleetAction::DeleteVehicle("V001".to_string()))
            .unwrap();
        assert!(next.vehicles.is_empty());
    }

    #[test]
    fn test_dispatch_as_without_role_is_denied() {
        let store = store();
        let nobody: Option<Role> = None;
        let result = store.dispatch_as(
            &nobody,
            FleetAction::SetFilter(FilterPatch::default()),
        );
        assert_eq!(result.unwrap_err().code, ErrorCode::Forbidden);
    }

    #[test]
    fn test_dispatch_json() {
        let store = store();

        let next = store
            .dispatch_json(r#"{"type":"SET_FILTER","payload":{"vehicleType":"Truck"}}"#)
            .unwrap();
        assert_eq!(next.filters.vehicle_type, VehicleTypeFilter::Truck);

        let unchanged = store.dispatch_json(r#"{"type":"LAUNCH_ROCKET","payload":1}"#).unwrap();
        assert_eq!(unchanged, next);

        let bad = store.dispatch_json(r#"{"type":"DELETE_VEHICLE","payload":{"nope":1}}"#);
        assert!(matches!(bad, Err(CoreError::MalformedAction(_))));

        let garbage = store.dispatch_json("not json");
        assert!(matches!(garbage, Err(CoreError::MalformedAction(_))));
    }

    #[test]
    fn test_transact_error_applies_nothing() {
        let store = store();
        let before = store.snapshot();

        let result: CoreResult<()> = store.transact(|_, _| {
            Err(CoreError::NotFound {
                entity: "Vehicle",
                id: "V404".to_string(),
            })
        });

        assert!(result.is_err());
        assert_eq!(*store.snapshot(), *before);
    }

    #[test]
    fn test_transact_sees_fixed_date() {
        let store = store();
        let seen = store
            .transact(|_, today| Ok((FleetAction::SetFilter(FilterPatch::default()), today)))
            .unwrap();
        assert_eq!(seen, date(2026, 2, 21));
    }

    #[test]
    fn test_concurrent_adds_get_distinct_ids() {
        let store = store();
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = store.clone();
                thread::spawn(move || {
                    store
                        .transact(|state, _| {
                            let id = state.next_id(fleet_core::EntityKind::Vehicle);
                            let v = vehicle(&id, VehicleStatus::Available);
                            Ok((FleetAction::AddVehicle(v), id))
                        })
                        .unwrap()
                })
            })
            .collect();

        let mut ids: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort();
        ids.dedup();

        assert_eq!(ids.len(), 8);
        assert_eq!(store.snapshot().vehicles.len(), 9);
    }

    #[test]
    fn test_poisoned_lock_is_recovered() {
        let store = store();
        let poisoner = store.clone();
        let _ = thread::spawn(move || {
            let _guard = poisoner.state.lock().unwrap();
            panic!("poison the lock");
        })
        .join();

        store
            .dispatch(FleetAction::SetDriverStatus {
                id: "D404".to_string(),
                status: DriverStatus::OnDuty,
            })
            .unwrap();
        assert_eq!(store.snapshot().vehicles.len(), 1);
    }

    #[test]
    fn test_authorize_with_closure() {
        let read_only = |p: Permission| p == Permission::Read;
        assert!(authorize(&read_only, Permission::Read, "list_vehicles").is_ok());
        let err = authorize(&read_only, Permission::Export, "export_analytics").unwrap_err();
        assert_eq!(err.message, "Permission 'export' required");
    }
}
