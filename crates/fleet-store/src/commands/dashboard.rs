//! # Dashboard Commands
//!
//! The command center view and the filter bar.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────┐      │
//! │  │ Active 2 │ │ InShop 1 │ │  Util 43%│ │ Total 7  │ │ Avail 4  │      │
//! │  └──────────┘ └──────────┘ └──────────┘ └──────────┘ └──────────┘      │
//! │                                                                         │
//! │  Vehicle status     Trip status          Pending cargo (Urgent first)  │
//! │  ▇▇▇▇ Available 4   ▇ Draft 1            C002 Pharmaceutical  Urgent   │
//! │  ▇▇ On Trip 2       ▇▇ Dispatched 2      C004 Cold Chain      Urgent   │
//! │  ▇ In Shop 1        ▇▇▇ Completed 3      C001 Machinery       High     │
//! │  ▇ Retired 1        ▇ Cancelled 1        C003 Construction    Normal   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use fleet_core::metrics::{
    expired_license_count, fleet_kpis, trip_status_counts, vehicle_status_counts, FleetKpis,
    StatusCount,
};
use fleet_core::selectors::pending_cargo_by_priority;
use fleet_core::{
    Capability, FilterPatch, Filters, FleetAction, PendingCargo, Permission, TripStatus,
    VehicleStatus,
};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{authorize, FleetStore};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub kpis: FleetKpis,
    pub vehicle_status: Vec<StatusCount<VehicleStatus>>,
    pub trip_status: Vec<StatusCount<TripStatus>>,
    /// Most urgent first.
    pub pending_cargo: Vec<PendingCargo>,
    /// Drivers whose license has expired as of today.
    pub expired_licenses: usize,
    pub filters: Filters,
}

pub fn get_dashboard(store: &FleetStore) -> Dashboard {
    debug!("get_dashboard command");
    let today = store.today();
    store.with_state(|s| Dashboard {
        kpis: fleet_kpis(s),
        vehicle_status: vehicle_status_counts(s),
        trip_status: trip_status_counts(s),
        pending_cargo: pending_cargo_by_priority(s).into_iter().cloned().collect(),
        expired_licenses: expired_license_count(s, today),
        filters: s.filters,
    })
}

/// Changes the vehicle type and/or region filter. Omitted parts stay.
pub fn set_filter(
    store: &FleetStore,
    caps: &impl Capability,
    patch: FilterPatch,
) -> Result<Filters, ApiError> {
    debug!(?patch, "set_filter command");
    authorize(caps, Permission::Read, "set_filter")?;

    let next = store.dispatch(FleetAction::SetFilter(patch))?;
    Ok(next.filters)
}
