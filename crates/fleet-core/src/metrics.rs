//! # Derived Metrics
//!
//! Read-only figures computed from a [`FleetState`] snapshot. Nothing here
//! is stored; every call recomputes from the collections.
//!
//! ## Cost & Return
//! ```text
//! fuel(v)        = Σ fuel_logs[v].total_cost
//! maintenance(v) = Σ maintenance_logs[v].cost
//! revenue(v)     = Σ trips[v].revenue        where status == Completed
//! roi(v)         = (revenue − cost) / cost × 100,   0 when cost == 0
//! ```
//!
//! ## Utilization
//! ```text
//! total       = vehicles not Retired
//! utilization = round((total − available) / total × 100),   0 when total == 0
//! ```

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::state::FleetState;
use crate::types::{DriverStatus, Region, TripStatus, VehicleStatus, VehicleType};

// =============================================================================
// Per-Vehicle Figures
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VehicleCosts {
    pub fuel: Money,
    pub maintenance: Money,
    pub total: Money,
}

/// Operational cost of one vehicle. An unknown id costs nothing.
pub fn vehicle_costs(state: &FleetState, vehicle_id: &str) -> VehicleCosts {
    let fuel: Money = state
        .fuel_logs
        .iter()
        .filter(|f| f.vehicle_id == vehicle_id)
        .map(|f| f.total_cost)
        .sum();
    let maintenance: Money = state
        .maintenance_logs
        .iter()
        .filter(|m| m.vehicle_id == vehicle_id)
        .map(|m| m.cost)
        .sum();

    VehicleCosts {
        fuel,
        maintenance,
        total: fuel + maintenance,
    }
}

/// Revenue earned by completed trips of one vehicle.
pub fn vehicle_revenue(state: &FleetState, vehicle_id: &str) -> Money {
    state
        .trips
        .iter()
        .filter(|t| t.vehicle_id == vehicle_id && t.status == TripStatus::Completed)
        .map(|t| t.revenue)
        .sum()
}

/// Return on operating cost as a percentage.
///
/// ```rust
/// use fleet_core::metrics::roi;
/// use fleet_core::money::Money;
///
/// assert_eq!(roi(Money::from_major(150), Money::from_major(100)), 50.0);
/// assert_eq!(roi(Money::from_major(150), Money::zero()), 0.0);
/// ```
pub fn roi(revenue: Money, cost: Money) -> f64 {
    (revenue - cost)
        .ratio(cost)
        .map(|r| r * 100.0)
        .unwrap_or(0.0)
}

pub fn vehicle_roi(state: &FleetState, vehicle_id: &str) -> f64 {
    roi(
        vehicle_revenue(state, vehicle_id),
        vehicle_costs(state, vehicle_id).total,
    )
}

/// Completed trips on record for one vehicle.
pub fn completed_trips(state: &FleetState, vehicle_id: &str) -> usize {
    state
        .trips
        .iter()
        .filter(|t| t.vehicle_id == vehicle_id && t.status == TripStatus::Completed)
        .count()
}

// =============================================================================
// Drivers
// =============================================================================

/// Whether the driver's license expired before today. Unknown drivers are
/// reported as not expired.
pub fn is_license_expired(state: &FleetState, driver_id: &str) -> bool {
    is_license_expired_on(state, driver_id, Local::now().date_naive())
}

pub fn is_license_expired_on(state: &FleetState, driver_id: &str, today: NaiveDate) -> bool {
    state
        .driver(driver_id)
        .is_some_and(|d| d.is_license_expired_on(today))
}

/// How many drivers on record hold an expired license.
pub fn expired_license_count(state: &FleetState, today: NaiveDate) -> usize {
    state
        .drivers
        .iter()
        .filter(|d| d.is_license_expired_on(today))
        .count()
}

/// Trips on record (any status) naming this driver.
pub fn driver_trip_count(state: &FleetState, driver_id: &str) -> usize {
    state.trips.iter().filter(|t| t.driver_id == driver_id).count()
}

// =============================================================================
// Fleet KPIs
// =============================================================================

/// Headline numbers for the command center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FleetKpis {
    /// Vehicles On Trip.
    pub active: usize,
    pub in_shop: usize,
    /// Percent of the non-retired fleet not Available, 0-100.
    pub utilization: u32,
    /// Vehicles not Retired.
    pub total: usize,
    pub available: usize,
}

pub fn fleet_kpis(state: &FleetState) -> FleetKpis {
    let count = |status: VehicleStatus| {
        state
            .vehicles
            .iter()
            .filter(|v| v.status == status)
            .count()
    };

    let active = count(VehicleStatus::OnTrip);
    let in_shop = count(VehicleStatus::InShop);
    let available = count(VehicleStatus::Available);
    let total = state.vehicles.len() - count(VehicleStatus::Retired);

    let utilization = if total == 0 {
        0
    } else {
        (((total - available) as f64 / total as f64) * 100.0).round() as u32
    };

    FleetKpis {
        active,
        in_shop,
        utilization,
        total,
        available,
    }
}

/// How many records sit in one status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
pub struct StatusCount<S> {
    pub status: S,
    pub count: usize,
}

/// Vehicles per status, in [`VehicleStatus::ALL`] order.
pub fn vehicle_status_counts(state: &FleetState) -> Vec<StatusCount<VehicleStatus>> {
    VehicleStatus::ALL
        .iter()
        .map(|&status| StatusCount {
            status,
            count: state.vehicles.iter().filter(|v| v.status == status).count(),
        })
        .collect()
}

/// Trips per status, in [`TripStatus::ALL`] order.
pub fn trip_status_counts(state: &FleetState) -> Vec<StatusCount<TripStatus>> {
    TripStatus::ALL
        .iter()
        .map(|&status| StatusCount {
            status,
            count: state.trips.iter().filter(|t| t.status == status).count(),
        })
        .collect()
}

/// Drivers per duty status, in [`DriverStatus::ALL`] order.
pub fn driver_status_counts(state: &FleetState) -> Vec<StatusCount<DriverStatus>> {
    DriverStatus::ALL
        .iter()
        .map(|&status| StatusCount {
            status,
            count: state.drivers.iter().filter(|d| d.status == status).count(),
        })
        .collect()
}

/// Mean safety score over the roster, rounded. `None` with no drivers.
pub fn average_safety_score(state: &FleetState) -> Option<u8> {
    if state.drivers.is_empty() {
        return None;
    }
    let total: u32 = state.drivers.iter().map(|d| u32::from(d.safety_score)).sum();
    Some((f64::from(total) / state.drivers.len() as f64).round() as u8)
}

// =============================================================================
// Analytics
// =============================================================================

/// One row of the per-vehicle financial report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VehicleAnalytics {
    pub vehicle_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub region: Region,
    pub status: VehicleStatus,
    pub trips_completed: usize,
    pub revenue: Money,
    pub fuel_cost: Money,
    pub maintenance_cost: Money,
    pub total_cost: Money,
    pub roi: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AnalyticsSummary {
    pub total_revenue: Money,
    pub total_fuel: Money,
    pub total_maintenance: Money,
    pub total_cost: Money,
    pub overall_roi: f64,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FleetAnalytics {
    pub rows: Vec<VehicleAnalytics>,
    pub summary: AnalyticsSummary,
}

/// Financial report over every non-retired vehicle.
pub fn fleet_analytics(state: &FleetState) -> FleetAnalytics {
    let rows: Vec<VehicleAnalytics> = state
        .vehicles
        .iter()
        .filter(|v| v.status != VehicleStatus::Retired)
        .map(|v| {
            let costs = vehicle_costs(state, &v.id);
            let revenue = vehicle_revenue(state, &v.id);
            VehicleAnalytics {
                vehicle_id: v.id.clone(),
                name: v.name.clone(),
                vehicle_type: v.vehicle_type,
                region: v.region,
                status: v.status,
                trips_completed: completed_trips(state, &v.id),
                revenue,
                fuel_cost: costs.fuel,
                maintenance_cost: costs.maintenance,
                total_cost: costs.total,
                roi: roi(revenue, costs.total),
            }
        })
        .collect();

    let total_revenue: Money = rows.iter().map(|r| r.revenue).sum();
    let total_fuel: Money = rows.iter().map(|r| r.fuel_cost).sum();
    let total_maintenance: Money = rows.iter().map(|r| r.maintenance_cost).sum();
    let total_cost = total_fuel + total_maintenance;

    FleetAnalytics {
        summary: AnalyticsSummary {
            total_revenue,
            total_fuel,
            total_maintenance,
            total_cost,
            overall_roi: roi(total_revenue, total_cost),
        },
        rows,
    }
}

/// Plain-text table for CSV export.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ExportTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl ExportTable {
    /// Renders as CSV. Cells containing a comma or quote are quoted.
    pub fn to_csv(&self) -> String {
        let line = |cells: &[String]| {
            cells
                .iter()
                .map(|c| {
                    if c.contains(',') || c.contains('"') {
                        format!("\"{}\"", c.replace('"', "\"\""))
                    } else {
                        c.clone()
                    }
                })
                .collect::<Vec<_>>()
                .join(",")
        };

        let mut out = line(&self.headers);
        for row in &self.rows {
            out.push('\n');
            out.push_str(&line(row));
        }
        out
    }
}

impl FleetAnalytics {
    /// The analytics report as a flat table; amounts in whole rupees.
    pub fn to_table(&self) -> ExportTable {
        let headers = [
            "Vehicle ID",
            "Name",
            "Type",
            "Region",
            "Trips",
            "Revenue (₹)",
            "Fuel Cost (₹)",
            "Maintenance Cost (₹)",
            "Total Cost (₹)",
            "ROI (%)",
        ]
        .iter()
        .map(|h| h.to_string())
        .collect();

        let rows = self
            .rows
            .iter()
            .map(|r| {
                vec![
                    r.vehicle_id.clone(),
                    r.name.clone(),
                    r.vehicle_type.to_string(),
                    r.region.to_string(),
                    r.trips_completed.to_string(),
                    r.revenue.rounded_major().to_string(),
                    r.fuel_cost.rounded_major().to_string(),
                    r.maintenance_cost.rounded_major().to_string(),
                    r.total_cost.rounded_major().to_string(),
                    format!("{:.1}", r.roi),
                ]
            })
            .collect();

        ExportTable { headers, rows }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
