//! # Fuel Commands

use fleet_core::validation::{validate_fuel, FuelForm};
use fleet_core::{Capability, EntityKind, FleetAction, FuelLog, Permission};
use tracing::{debug, info};

use super::found;
use crate::error::ApiError;
use crate::state::{authorize, FleetStore};

/// Fuel logs, optionally for one vehicle only.
pub fn list_fuel_logs(store: &FleetStore, vehicle_id: Option<&str>) -> Vec<FuelLog> {
    debug!(?vehicle_id, "list_fuel_logs command");
    store.with_state(|s| {
        s.fuel_logs
            .iter()
            .filter(|f| vehicle_id.map_or(true, |id| f.vehicle_id == id))
            .cloned()
            .collect()
    })
}

/// Records a refuelling. The total is computed, never taken from input.
pub fn create_fuel_log(
    store: &FleetStore,
    caps: &impl Capability,
    form: &FuelForm,
) -> Result<FuelLog, ApiError> {
    debug!(vehicle_id = %form.vehicle_id, "create_fuel_log command");
    authorize(caps, Permission::Create, "create_fuel_log")?;

    let log = store.transact(|state, _| {
        let log = validate_fuel(form, state)?.into_log(state.next_id(EntityKind::FuelLog));
        Ok((FleetAction::AddFuelLog(log.clone()), log))
    })?;

    info!(id = %log.id, total = %log.total_cost, "Fuel logged");
    Ok(log)
}

pub fn delete_fuel_log(store: &FleetStore, caps: &impl Capability, id: &str) -> Result<(), ApiError> {
    debug!(id, "delete_fuel_log command");
    authorize(caps, Permission::Delete, "delete_fuel_log")?;

    store.transact(|state, _| {
        found(state.fuel_log(id), "Fuel log", id)?;
        Ok((FleetAction::DeleteFuelLog(id.to_string()), ()))
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::demo_store;
    use crate::error::ErrorCode;
    use fleet_core::metrics::vehicle_costs;
    use fleet_core::{Money, Role};

    fn form(liters: &str, price: &str) -> FuelForm {
        FuelForm {
            vehicle_id: "V005".to_string(),
            date: "2026-02-21".to_string(),
            liters: liters.to_string(),
            cost_per_liter: price.to_string(),
            odometer: "12450".to_string(),
        }
    }

    #[test]
    fn test_total_is_computed() {
        let store = demo_store();
        let log = create_fuel_log(&store, &Role::Manager, &form("4.5", "110.30")).unwrap();

        assert_eq!(log.id, "F009");
        assert_eq!(log.total_cost, Money::from_minor(49_635));

        let costs = store.with_state(|s| vehicle_costs(s, "V005"));
        assert_eq!(costs.fuel, Money::from_minor(55_150 + 49_635));
    }

    #[test]
    fn test_rejects_non_positive_liters() {
        let store = demo_store();
        let err = create_fuel_log(&store, &Role::Manager, &form("0", "110.30")).unwrap_err();
        assert!(err.fields.unwrap().contains_key("liters"));
    }

    #[test]
    fn test_list_by_vehicle() {
        let store = demo_store();
        let ids: Vec<String> = list_fuel_logs(&store, Some("V001"))
            .into_iter()
            .map(|f| f.id)
            .collect();
        assert_eq!(ids, vec!["F001", "F007"]);
        assert_eq!(list_fuel_logs(&store, None).len(), 8);
    }

    #[test]
    fn test_delete_fuel_log() {
        let store = demo_store();
        let err = delete_fuel_log(&store, &Role::Manager, "F001").unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);

        delete_fuel_log(&store, &Role::Admin, "F001").unwrap();
        assert!(store.snapshot().fuel_log("F001").is_none());
        assert_eq!(
            delete_fuel_log(&store, &Role::Admin, "F001").unwrap_err().code,
            ErrorCode::NotFound
        );
    }
}
