//! # Domain Types
//!
//! Core domain types used throughout Fleet Ops.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Vehicle      │◄──│      Trip       │──►│     Driver      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id  (V001)     │   │  id  (T001)     │   │  id  (D001)     │       │
//! │  │  plate (unique) │   │  vehicle_id     │   │  license_expiry │       │
//! │  │  capacity (kg)  │   │  driver_id      │   │  status         │       │
//! │  │  status         │   │  cargo_weight   │   │  safety_score   │       │
//! │  └────────▲────────┘   │  status         │   └─────────────────┘       │
//! │           │            └─────────────────┘                              │
//! │     ┌─────┴──────────────────┐                                          │
//! │  ┌──┴──────────────┐   ┌─────┴───────────┐   ┌─────────────────┐       │
//! │  │ MaintenanceLog  │   │    FuelLog      │   │  PendingCargo   │       │
//! │  │  id  (M001)     │   │  id  (F001)     │   │  id  (C001)     │       │
//! │  │  cost, status   │   │  liters, cost   │   │  priority       │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Value Records
//! Entities are plain values. Edits arrive as `*Patch` records and are
//! shallow-merged into a copy of the entity; nothing is mutated in place
//! behind the store's back.
//!
//! ## Wire Names
//! Field names serialize in camelCase and statuses keep their display
//! spelling (`"On Trip"`, `"In Shop"`) so dashboards can bind directly.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Vehicle Enums
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum VehicleType {
    Truck,
    Van,
    Bike,
}

impl VehicleType {
    pub const ALL: [VehicleType; 3] = [VehicleType::Truck, VehicleType::Van, VehicleType::Bike];
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VehicleType::Truck => "Truck",
            VehicleType::Van => "Van",
            VehicleType::Bike => "Bike",
        };
        f.write_str(label)
    }
}

/// Operational status of a vehicle.
///
/// ## Who Changes It
/// ```text
/// Available ──(trip dispatched)──────► On Trip
/// On Trip ────(trip completed/cancelled)► Available
/// any ────────(maintenance logged)───► In Shop
/// In Shop ────(last open log resolved)► Available
/// Retired ◄──(toggle)──► Available
/// ```
/// Admin edits and `SET_VEHICLE_STATUS` may override any of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum VehicleStatus {
    #[default]
    Available,
    #[serde(rename = "On Trip")]
    OnTrip,
    #[serde(rename = "In Shop")]
    InShop,
    Retired,
}

impl VehicleStatus {
    pub const ALL: [VehicleStatus; 4] = [
        VehicleStatus::Available,
        VehicleStatus::OnTrip,
        VehicleStatus::InShop,
        VehicleStatus::Retired,
    ];
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            VehicleStatus::Available => "Available",
            VehicleStatus::OnTrip => "On Trip",
            VehicleStatus::InShop => "In Shop",
            VehicleStatus::Retired => "Retired",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::North, Region::South, Region::East, Region::West];
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
        };
        f.write_str(label)
    }
}

// =============================================================================
// Vehicle
// =============================================================================

/// A vehicle in the fleet registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Vehicle {
    /// Sequential identifier, e.g. `V007`.
    pub id: String,

    /// Display name, e.g. "Volvo FH16".
    pub name: String,

    pub model: String,

    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,

    /// Registration plate, unique across the registry.
    pub plate: String,

    /// Maximum cargo in kilograms.
    pub capacity: u32,

    /// Odometer reading in kilometres.
    pub odometer: u64,

    pub status: VehicleStatus,

    pub region: Region,

    pub year: u16,
}

impl Vehicle {
    /// Whether a cargo of `weight_kg` fits this vehicle.
    #[inline]
    pub fn can_carry(&self, weight_kg: u32) -> bool {
        weight_kg <= self.capacity
    }
}

/// Partial vehicle edit; `None` fields keep their current value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct VehiclePatch {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<VehicleType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plate: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub odometer: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<VehicleStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<u16>,
}

impl VehiclePatch {
    /// Returns a copy of `vehicle` with every present field replaced.
    pub fn merge(&self, vehicle: &Vehicle) -> Vehicle {
        let mut merged = vehicle.clone();
        if let Some(name) = &self.name {
            merged.name = name.clone();
        }
        if let Some(model) = &self.model {
            merged.model = model.clone();
        }
        if let Some(vehicle_type) = self.vehicle_type {
            merged.vehicle_type = vehicle_type;
        }
        if let Some(plate) = &self.plate {
            merged.plate = plate.clone();
        }
        if let Some(capacity) = self.capacity {
            merged.capacity = capacity;
        }
        if let Some(odometer) = self.odometer {
            merged.odometer = odometer;
        }
        if let Some(status) = self.status {
            merged.status = status;
        }
        if let Some(region) = self.region {
            merged.region = region;
        }
        if let Some(year) = self.year {
            merged.year = year;
        }
        merged
    }
}

// =============================================================================
// Driver
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum DriverStatus {
    #[serde(rename = "On Duty")]
    OnDuty,
    #[default]
    #[serde(rename = "Off Duty")]
    OffDuty,
    Suspended,
}

impl DriverStatus {
    pub const ALL: [DriverStatus; 3] = [
        DriverStatus::OnDuty,
        DriverStatus::OffDuty,
        DriverStatus::Suspended,
    ];

    /// Only suspension takes a driver out of the dispatch pool.
    #[inline]
    pub fn is_assignable(&self) -> bool {
        !matches!(self, DriverStatus::Suspended)
    }
}

impl fmt::Display for DriverStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            DriverStatus::OnDuty => "On Duty",
            DriverStatus::OffDuty => "Off Duty",
            DriverStatus::Suspended => "Suspended",
        };
        f.write_str(label)
    }
}

/// A licensed driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Driver {
    pub id: String,
    pub name: String,
    /// License number.
    pub license: String,
    #[ts(as = "String")]
    pub license_expiry: NaiveDate,
    pub status: DriverStatus,
    /// 0-100.
    pub safety_score: u8,
    /// Never greater than `total_trips`.
    pub trips_completed: u32,
    pub total_trips: u32,
    pub phone: String,
    pub region: Region,
}

impl Driver {
    /// A license is expired once its expiry date is strictly before `today`.
    #[inline]
    pub fn is_license_expired_on(&self, today: NaiveDate) -> bool {
        self.license_expiry < today
    }

    /// `trips_completed / total_trips` as a percentage, 0 without trips.
    pub fn completion_rate(&self) -> f64 {
        if self.total_trips == 0 {
            return 0.0;
        }
        self.trips_completed as f64 / self.total_trips as f64 * 100.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DriverPatch {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub license_expiry: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<DriverStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub safety_score: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trips_completed: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_trips: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
}

impl DriverPatch {
    /// Returns a copy of `driver` with every present field replaced.
    pub fn merge(&self, driver: &Driver) -> Driver {
        let mut merged = driver.clone();
        if let Some(name) = &self.name {
            merged.name = name.clone();
        }
        if let Some(license) = &self.license {
            merged.license = license.clone();
        }
        if let Some(expiry) = self.license_expiry {
            merged.license_expiry = expiry;
        }
        if let Some(status) = self.status {
            merged.status = status;
        }
        if let Some(score) = self.safety_score {
            merged.safety_score = score;
        }
        if let Some(completed) = self.trips_completed {
            merged.trips_completed = completed;
        }
        if let Some(total) = self.total_trips {
            merged.total_trips = total;
        }
        if let Some(phone) = &self.phone {
            merged.phone = phone.clone();
        }
        if let Some(region) = self.region {
            merged.region = region;
        }
        merged
    }
}

// =============================================================================
// Trip
// =============================================================================

/// Lifecycle of a trip.
///
/// ```text
/// ┌───────┐      ┌────────────┐      ┌───────────┐
/// │ Draft │─────►│ Dispatched │─────►│ Completed │ (terminal)
/// └───┬───┘      └─────┬──────┘      └───────────┘
///     │                │
///     │          ┌─────▼─────┐
///     └─────────►│ Cancelled │ (terminal)
///                └───────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum TripStatus {
    #[default]
    Draft,
    Dispatched,
    Completed,
    Cancelled,
}

impl TripStatus {
    pub const ALL: [TripStatus; 4] = [
        TripStatus::Draft,
        TripStatus::Dispatched,
        TripStatus::Completed,
        TripStatus::Cancelled,
    ];

    /// Statuses reachable in one step from `self`.
    pub fn next_statuses(&self) -> &'static [TripStatus] {
        match self {
            TripStatus::Draft => &[TripStatus::Dispatched, TripStatus::Cancelled],
            TripStatus::Dispatched => &[TripStatus::Completed, TripStatus::Cancelled],
            TripStatus::Completed | TripStatus::Cancelled => &[],
        }
    }

    #[inline]
    pub fn can_transition_to(&self, next: TripStatus) -> bool {
        self.next_statuses().contains(&next)
    }

    /// Completed and Cancelled trips release their vehicle and driver.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, TripStatus::Completed | TripStatus::Cancelled)
    }
}

impl fmt::Display for TripStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TripStatus::Draft => "Draft",
            TripStatus::Dispatched => "Dispatched",
            TripStatus::Completed => "Completed",
            TripStatus::Cancelled => "Cancelled",
        };
        f.write_str(label)
    }
}

/// A cargo run assigning one vehicle and one driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Trip {
    pub id: String,
    /// May dangle after the vehicle is deleted.
    pub vehicle_id: String,
    /// May dangle after the driver is deleted.
    pub driver_id: String,
    pub origin: String,
    pub destination: String,
    pub cargo_description: String,
    /// Kilograms; never above the vehicle capacity at creation time.
    pub cargo_weight: u32,
    pub status: TripStatus,
    #[ts(as = "Option<String>")]
    pub start_date: Option<NaiveDate>,
    #[ts(as = "Option<String>")]
    pub end_date: Option<NaiveDate>,
    /// Counted toward vehicle revenue only once Completed.
    pub revenue: Money,
}

// =============================================================================
// Maintenance Log
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum MaintenanceStatus {
    #[default]
    #[serde(rename = "In Progress")]
    InProgress,
    Completed,
}

impl fmt::Display for MaintenanceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MaintenanceStatus::InProgress => f.write_str("In Progress"),
            MaintenanceStatus::Completed => f.write_str("Completed"),
        }
    }
}

/// A service performed on a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MaintenanceLog {
    pub id: String,
    pub vehicle_id: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub service_type: String,
    pub description: String,
    pub cost: Money,
    pub technician: String,
    pub status: MaintenanceStatus,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MaintenanceLogPatch {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(as = "Option<String>")]
    pub date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cost: Option<Money>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub technician: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MaintenanceStatus>,
}

impl MaintenanceLogPatch {
    /// Patch that only marks a log as resolved.
    pub fn resolve(id: impl Into<String>) -> Self {
        MaintenanceLogPatch {
            id: id.into(),
            status: Some(MaintenanceStatus::Completed),
            ..Default::default()
        }
    }

    /// Returns a copy of `log` with every present field replaced.
    pub fn merge(&self, log: &MaintenanceLog) -> MaintenanceLog {
        let mut merged = log.clone();
        if let Some(vehicle_id) = &self.vehicle_id {
            merged.vehicle_id = vehicle_id.clone();
        }
        if let Some(date) = self.date {
            merged.date = date;
        }
        if let Some(service_type) = &self.service_type {
            merged.service_type = service_type.clone();
        }
        if let Some(description) = &self.description {
            merged.description = description.clone();
        }
        if let Some(cost) = self.cost {
            merged.cost = cost;
        }
        if let Some(technician) = &self.technician {
            merged.technician = technician.clone();
        }
        if let Some(status) = self.status {
            merged.status = status;
        }
        merged
    }
}

// =============================================================================
// Fuel Log
// =============================================================================

/// A refuelling record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FuelLog {
    pub id: String,
    pub vehicle_id: String,
    #[ts(as = "String")]
    pub date: NaiveDate,
    pub liters: f64,
    pub cost_per_liter: Money,
    /// `liters × cost_per_liter`, rounded to the paisa when recorded.
    pub total_cost: Money,
    /// Odometer reading at the pump, km.
    pub odometer: u64,
}

// =============================================================================
// Pending Cargo
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum CargoPriority {
    Urgent,
    High,
    Normal,
}

impl CargoPriority {
    /// Sort key: lower is more pressing.
    #[inline]
    pub fn rank(&self) -> u8 {
        match self {
            CargoPriority::Urgent => 0,
            CargoPriority::High => 1,
            CargoPriority::Normal => 2,
        }
    }
}

/// Cargo waiting for a trip. Read-only; never touched by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PendingCargo {
    pub id: String,
    pub description: String,
    /// Kilograms.
    pub weight: u32,
    pub origin: String,
    pub destination: String,
    pub priority: CargoPriority,
}

// =============================================================================
// Filters
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum VehicleTypeFilter {
    #[default]
    All,
    Truck,
    Van,
    Bike,
}

impl VehicleTypeFilter {
    pub fn matches(&self, vehicle_type: VehicleType) -> bool {
        match self {
            VehicleTypeFilter::All => true,
            VehicleTypeFilter::Truck => vehicle_type == VehicleType::Truck,
            VehicleTypeFilter::Van => vehicle_type == VehicleType::Van,
            VehicleTypeFilter::Bike => vehicle_type == VehicleType::Bike,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum RegionFilter {
    #[default]
    All,
    North,
    South,
    East,
    West,
}

impl RegionFilter {
    pub fn matches(&self, region: Region) -> bool {
        match self {
            RegionFilter::All => true,
            RegionFilter::North => region == Region::North,
            RegionFilter::South => region == Region::South,
            RegionFilter::East => region == Region::East,
            RegionFilter::West => region == Region::West,
        }
    }
}

/// Active dashboard filter selection. Only read selectors consult it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Filters {
    pub vehicle_type: VehicleTypeFilter,
    pub region: RegionFilter,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FilterPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vehicle_type: Option<VehicleTypeFilter>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<RegionFilter>,
}

impl FilterPatch {
    pub fn merge(&self, filters: &Filters) -> Filters {
        Filters {
            vehicle_type: self.vehicle_type.unwrap_or(filters.vehicle_type),
            region: self.region.unwrap_or(filters.region),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn volvo() -> Vehicle {
        Vehicle {
            id: "V001".to_string(),
            name: "Volvo FH16".to_string(),
            model: "FH16 750".to_string(),
            vehicle_type: VehicleType::Truck,
            plate: "MH-01-AB-1234".to_string(),
            capacity: 24000,
            odometer: 142500,
            status: VehicleStatus::Available,
            region: Region::North,
            year: 2021,
        }
    }

    #[test]
    fn test_trip_transition_table() {
        assert!(TripStatus::Draft.can_transition_to(TripStatus::Dispatched));
        assert!(TripStatus::Draft.can_transition_to(TripStatus::Cancelled));
        assert!(TripStatus::Dispatched.can_transition_to(TripStatus::Completed));
        assert!(TripStatus::Dispatched.can_transition_to(TripStatus::Cancelled));

        assert!(!TripStatus::Draft.can_transition_to(TripStatus::Completed));
        assert!(!TripStatus::Draft.can_transition_to(TripStatus::Draft));
        assert!(!TripStatus::Dispatched.can_transition_to(TripStatus::Draft));
        for terminal in [TripStatus::Completed, TripStatus::Cancelled] {
            assert!(terminal.is_terminal());
            assert!(terminal.next_statuses().is_empty());
        }
    }

    #[test]
    fn test_status_wire_names() {
        assert_eq!(
            serde_json::to_string(&VehicleStatus::OnTrip).unwrap(),
            "\"On Trip\""
        );
        assert_eq!(
            serde_json::from_str::<DriverStatus>("\"Off Duty\"").unwrap(),
            DriverStatus::OffDuty
        );
        assert_eq!(
            serde_json::from_str::<MaintenanceStatus>("\"In Progress\"").unwrap(),
            MaintenanceStatus::InProgress
        );
    }

    #[test]
    fn test_vehicle_serializes_type_field() {
        let json = serde_json::to_value(volvo()).unwrap();
        assert_eq!(json["type"], "Truck");
        assert_eq!(json["status"], "Available");
        assert!(json.get("vehicleType").is_none());
    }

    #[test]
    fn test_vehicle_patch_is_shallow_merge() {
        let patch = VehiclePatch {
            id: "V001".to_string(),
            odometer: Some(150000),
            ..Default::default()
        };
        let merged = patch.merge(&volvo());
        assert_eq!(merged.odometer, 150000);
        assert_eq!(merged.name, "Volvo FH16");
        assert_eq!(merged.status, VehicleStatus::Available);
    }

    #[test]
    fn test_license_expiry_is_strict() {
        let driver = Driver {
            id: "D001".to_string(),
            name: "Rajesh Kumar".to_string(),
            license: "MH-012345".to_string(),
            license_expiry: date(2027, 6, 15),
            status: DriverStatus::OnDuty,
            safety_score: 92,
            trips_completed: 145,
            total_trips: 152,
            phone: "+91-9876543210".to_string(),
            region: Region::North,
        };
        assert!(!driver.is_license_expired_on(date(2027, 6, 15)));
        assert!(driver.is_license_expired_on(date(2027, 6, 16)));
        assert!((driver.completion_rate() - 95.394).abs() < 0.01);
    }

    #[test]
    fn test_filters_match() {
        assert!(VehicleTypeFilter::All.matches(VehicleType::Bike));
        assert!(!VehicleTypeFilter::Truck.matches(VehicleType::Van));
        assert!(RegionFilter::West.matches(Region::West));

        let patch = FilterPatch {
            vehicle_type: Some(VehicleTypeFilter::Van),
            region: None,
        };
        let filters = patch.merge(&Filters::default());
        assert_eq!(filters.vehicle_type, VehicleTypeFilter::Van);
        assert_eq!(filters.region, RegionFilter::All);
    }

    #[test]
    fn test_cargo_priority_rank() {
        assert!(CargoPriority::Urgent.rank() < CargoPriority::High.rank());
        assert!(CargoPriority::High.rank() < CargoPriority::Normal.rank());
    }
}
