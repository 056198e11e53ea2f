//! # Analytics Commands
//!
//! Per-vehicle cost, revenue and ROI over the non-retired fleet.

use fleet_core::metrics::{fleet_analytics, ExportTable, FleetAnalytics, VehicleAnalytics};
use fleet_core::{Capability, Permission};
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::{authorize, FleetStore};

pub fn get_analytics(store: &FleetStore) -> FleetAnalytics {
    debug!("get_analytics command");
    store.with_state(fleet_analytics)
}

/// One vehicle's row of the report. Retired vehicles have none.
pub fn get_vehicle_analytics(store: &FleetStore, vehicle_id: &str) -> Result<VehicleAnalytics, ApiError> {
    debug!(vehicle_id, "get_vehicle_analytics command");
    get_analytics(store)
        .rows
        .into_iter()
        .find(|r| r.vehicle_id == vehicle_id)
        .ok_or_else(|| ApiError::not_found("Vehicle", vehicle_id))
}

/// The report as a table, for CSV download.
pub fn export_analytics(store: &FleetStore, caps: &impl Capability) -> Result<ExportTable, ApiError> {
    debug!("export_analytics command");
    authorize(caps, Permission::Export, "export_analytics")?;

    let table = get_analytics(store).to_table();
    info!(rows = table.rows.len(), "Analytics exported");
    Ok(table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::demo_store;
    use crate::error::ErrorCode;
    use fleet_core::{Money, Role};

    #[test]
    fn test_volvo_row() {
        let store = demo_store();
        let row = get_vehicle_analytics(&store, "V001").unwrap();

        assert_eq!(row.trips_completed, 1);
        assert_eq!(row.revenue, Money::from_major(95000));
        assert_eq!(row.total_cost, Money::from_major(25465));
        assert!((row.roi - 273.06).abs() < 0.01);
    }

    #[test]
    fn test_retired_vehicle_has_no_row() {
        let store = demo_store();
        let err = get_vehicle_analytics(&store, "V006").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_summary_totals() {
        let store = demo_store();
        let summary = get_analytics(&store).summary;

        // V006's tyre job is excluded along with the vehicle.
        assert_eq!(summary.total_maintenance, Money::from_major(52000 + 3500 + 8200 + 6800));
        assert_eq!(summary.total_revenue, Money::from_major(95000 + 42000 + 3500));
        assert_eq!(summary.total_cost, summary.total_fuel + summary.total_maintenance);
    }

    #[test]
    fn test_export_requires_permission() {
        let store = demo_store();
        let err = export_analytics(&store, &Role::Viewer).unwrap_err();
        assert_eq!(err.code, ErrorCode::Forbidden);

        let table = export_analytics(&store, &Role::Manager).unwrap();
        assert_eq!(table.headers.len(), 10);
        assert_eq!(table.rows.len(), 7);
        assert_eq!(
            table.rows[0],
            vec!["V001", "Volvo FH16", "Truck", "North", "1", "95000", "21965", "3500", "25465", "273.1"]
        );
    }
}
