//! # Validation Module
//!
//! Turns raw form input into typed records before anything is dispatched.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form (front end)                                             │
//! │  ├── Raw strings, exactly as typed                                     │
//! │  └── Only offers Available vehicles / non-suspended drivers            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Required fields, number parsing, ranges                           │
//! │  ├── Cross-entity rules (plate unique, capacity, license expiry)       │
//! │  └── Every failing field collected into one FieldErrors map            │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Engine                                                       │
//! │  └── Trip status guard; never sees an unvalidated record               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Each `validate_*` returns a `*Draft`: the parsed values without an id.
//! The caller assigns the id (see [`crate::ids`]) and turns the draft into
//! a record or a patch.
//!
//! ## Usage
//! ```rust
//! use chrono::NaiveDate;
//! use fleet_core::state::FleetState;
//! use fleet_core::validation::{validate_vehicle, VehicleForm};
//!
//! let state = FleetState::new();
//! let today = NaiveDate::from_ymd_opt(2026, 2, 21).unwrap();
//! let form = VehicleForm {
//!     name: "Eicher Pro".into(),
//!     plate: "mh-04-mn-6789".into(),
//!     capacity: "9000".into(),
//!     odometer: "63200".into(),
//!     ..Default::default()
//! };
//!
//! let draft = validate_vehicle(&form, &state, None, today).unwrap();
//! assert_eq!(draft.plate, "MH-04-MN-6789");
//! ```

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult, FieldErrors, ValidationError};
use crate::money::Money;
use crate::state::FleetState;
use crate::types::{
    Driver, DriverPatch, DriverStatus, FuelLog, MaintenanceLog, MaintenanceLogPatch,
    MaintenanceStatus, Region, Trip, TripStatus, Vehicle, VehiclePatch, VehicleStatus,
    VehicleType,
};

/// Result type for single-field checks.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Oldest model year the registry accepts.
pub const MIN_VEHICLE_YEAR: i64 = 1950;

/// Safety score given to drivers added without one.
pub const DEFAULT_SAFETY_SCORE: u8 = 80;

/// Service type recorded when the form leaves it blank.
pub const DEFAULT_SERVICE_TYPE: &str = "General Service";

/// Largest rupee amount a single cost, price or revenue field may hold.
pub const MAX_RUPEES: i64 = 1_000_000_000_000;

const DATE_FORMAT: &str = "%Y-%m-%d";

// =============================================================================
// Field Parsers
// =============================================================================

/// Trimmed value, or `Required` when blank.
pub fn validate_required(field: &str, raw: &str) -> ValidationResult<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(value.to_string())
}

/// Parses a whole number within `min..=max`.
///
/// ## Example
/// ```rust
/// use fleet_core::validation::validate_whole_number;
///
/// assert_eq!(validate_whole_number("capacity", " 750 ", 1, 100_000), Ok(750));
/// assert!(validate_whole_number("capacity", "0", 1, 100_000).is_err());
/// assert!(validate_whole_number("capacity", "lots", 1, 100_000).is_err());
/// ```
pub fn validate_whole_number(field: &str, raw: &str, min: i64, max: i64) -> ValidationResult<i64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    let value: i64 = raw.parse().map_err(|_| ValidationError::NotANumber {
        field: field.to_string(),
    })?;

    if value < min || value > max {
        let field = field.to_string();
        return Err(match min {
            0 if value < 0 => ValidationError::Negative { field },
            1 if value < 1 => ValidationError::MustBePositive { field },
            _ => ValidationError::OutOfRange { field, min, max },
        });
    }

    Ok(value)
}

/// Parses a rupee amount with at most two decimals into [`Money`].
///
/// ## Example
/// ```rust
/// use fleet_core::validation::validate_rupees;
///
/// assert_eq!(validate_rupees("cost", "110.3").unwrap().minor(), 11030);
/// assert_eq!(validate_rupees("cost", "52000").unwrap().minor(), 5_200_000);
/// assert!(validate_rupees("cost", "-1").is_err());
/// assert!(validate_rupees("cost", "1.005").is_err());
/// ```
pub fn validate_rupees(field: &str, raw: &str) -> ValidationResult<Money> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    if raw.starts_with('-') {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    let (major, minor) = raw.split_once('.').unwrap_or((raw, ""));
    let digits = |s: &str| s.chars().all(|c| c.is_ascii_digit());
    if (major.is_empty() && minor.is_empty()) || !digits(major) || !digits(minor) {
        return Err(ValidationError::NotANumber {
            field: field.to_string(),
        });
    }
    if minor.len() > 2 {
        return Err(ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "at most 2 decimal places".to_string(),
        });
    }

    let too_large = || ValidationError::OutOfRange {
        field: field.to_string(),
        min: 0,
        max: MAX_RUPEES,
    };
    let major: i64 = if major.is_empty() {
        0
    } else {
        major.parse().map_err(|_| too_large())?
    };
    if major > MAX_RUPEES {
        return Err(too_large());
    }
    let minor: i64 = match minor.len() {
        0 => 0,
        1 => minor.parse::<i64>().unwrap_or(0) * 10,
        _ => minor.parse().unwrap_or(0),
    };

    Money::checked_from_major_minor(major, minor).ok_or_else(too_large)
}

/// Parses an ISO `YYYY-MM-DD` date.
pub fn validate_date(field: &str, raw: &str) -> ValidationResult<NaiveDate> {
    let raw = validate_required(field, raw)?;
    NaiveDate::parse_from_str(&raw, DATE_FORMAT).map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "expected YYYY-MM-DD".to_string(),
    })
}

/// Collects the error (if any) and hands back the value.
fn collect<T>(errors: &mut FieldErrors, result: ValidationResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}

fn optional_whole(field: &str, raw: &str, default: i64, min: i64, max: i64) -> ValidationResult<i64> {
    if raw.trim().is_empty() {
        Ok(default)
    } else {
        validate_whole_number(field, raw, min, max)
    }
}

fn optional_rupees(field: &str, raw: &str) -> ValidationResult<Money> {
    if raw.trim().is_empty() {
        Ok(Money::zero())
    } else {
        validate_rupees(field, raw)
    }
}

fn require_vehicle<'a>(state: &'a FleetState, raw: &str) -> ValidationResult<&'a Vehicle> {
    let id = validate_required("vehicleId", raw)?;
    state
        .vehicle(&id)
        .ok_or(ValidationError::UnknownReference {
            field: "vehicleId".to_string(),
            id,
        })
}

fn require_driver<'a>(state: &'a FleetState, raw: &str) -> ValidationResult<&'a Driver> {
    let id = validate_required("driverId", raw)?;
    state
        .driver(&id)
        .ok_or(ValidationError::UnknownReference {
            field: "driverId".to_string(),
            id,
        })
}

// =============================================================================
// Vehicle
// =============================================================================

/// Vehicle registry form, as typed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct VehicleForm {
    pub name: String,
    pub model: String,
    #[serde(rename = "type")]
    pub vehicle_type: VehicleType,
    pub plate: String,
    pub capacity: String,
    pub odometer: String,
    pub region: Region,
    /// Blank means the current year.
    pub year: String,
    /// Only honored when editing; new vehicles start Available.
    pub status: Option<VehicleStatus>,
}

impl Default for VehicleForm {
    fn default() -> Self {
        VehicleForm {
            name: String::new(),
            model: String::new(),
            vehicle_type: VehicleType::Truck,
            plate: String::new(),
            capacity: String::new(),
            odometer: String::new(),
            region: Region::North,
            year: String::new(),
            status: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleDraft {
    pub name: String,
    pub model: String,
    pub vehicle_type: VehicleType,
    /// Trimmed and upper-cased.
    pub plate: String,
    pub capacity: u32,
    pub odometer: u64,
    pub region: Region,
    pub year: u16,
    pub status: Option<VehicleStatus>,
}

impl VehicleDraft {
    pub fn into_vehicle(self, id: String) -> Vehicle {
        Vehicle {
            id,
            name: self.name,
            model: self.model,
            vehicle_type: self.vehicle_type,
            plate: self.plate,
            capacity: self.capacity,
            odometer: self.odometer,
            status: VehicleStatus::Available,
            region: self.region,
            year: self.year,
        }
    }

    pub fn into_patch(self, id: String) -> VehiclePatch {
        VehiclePatch {
            id,
            name: Some(self.name),
            model: Some(self.model),
            vehicle_type: Some(self.vehicle_type),
            plate: Some(self.plate),
            capacity: Some(self.capacity),
            odometer: Some(self.odometer),
            status: self.status,
            region: Some(self.region),
            year: Some(self.year),
        }
    }
}

/// Validates a vehicle form.
///
/// ## Rules
/// - `name` and `plate` required
/// - `plate` unique across the registry, ignoring case and the vehicle
///   being edited (`editing`)
/// - `capacity` > 0 kg, `odometer` ≥ 0 km
/// - `year` between 1950 and next year
pub fn validate_vehicle(
    form: &VehicleForm,
    state: &FleetState,
    editing: Option<&str>,
    today: NaiveDate,
) -> CoreResult<VehicleDraft> {
    let mut errors = FieldErrors::new();

    let name = collect(&mut errors, validate_required("name", &form.name));

    let plate = collect(&mut errors, validate_required("plate", &form.plate))
        .map(|p| p.to_uppercase());
    if let Some(plate) = &plate {
        let taken = state.vehicles.iter().any(|v| {
            Some(v.id.as_str()) != editing && v.plate.trim().eq_ignore_ascii_case(plate)
        });
        if taken {
            errors.push(ValidationError::Duplicate {
                field: "plate".to_string(),
                value: plate.clone(),
            });
        }
    }

    let capacity = collect(
        &mut errors,
        validate_whole_number("capacity", &form.capacity, 1, u32::MAX as i64),
    );
    let odometer = collect(
        &mut errors,
        validate_whole_number("odometer", &form.odometer, 0, i64::MAX),
    );
    let current_year = today.year() as i64;
    let year = collect(
        &mut errors,
        optional_whole("year", &form.year, current_year, MIN_VEHICLE_YEAR, current_year + 1),
    );

    match (name, plate, capacity, odometer, year) {
        (Some(name), Some(plate), Some(capacity), Some(odometer), Some(year)) if errors.is_empty() => {
            Ok(VehicleDraft {
                name,
                model: form.model.trim().to_string(),
                vehicle_type: form.vehicle_type,
                plate,
                capacity: capacity as u32,
                odometer: odometer as u64,
                region: form.region,
                year: year as u16,
                status: form.status,
            })
        }
        _ => Err(CoreError::InvalidInput(errors)),
    }
}

// =============================================================================
// Driver
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct DriverForm {
    pub name: String,
    pub license: String,
    /// `YYYY-MM-DD`.
    pub license_expiry: String,
    pub phone: String,
    pub region: Region,
    /// New drivers start Off Duty when unset; edits keep the current status.
    pub status: Option<DriverStatus>,
    /// Blank means 80.
    pub safety_score: String,
    pub trips_completed: String,
    pub total_trips: String,
}

impl Default for DriverForm {
    fn default() -> Self {
        DriverForm {
            name: String::new(),
            license: String::new(),
            license_expiry: String::new(),
            phone: String::new(),
            region: Region::North,
            status: None,
            safety_score: String::new(),
            trips_completed: String::new(),
            total_trips: String::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverDraft {
    pub name: String,
    pub license: String,
    pub license_expiry: NaiveDate,
    pub phone: String,
    pub region: Region,
    pub status: Option<DriverStatus>,
    pub safety_score: u8,
    pub trips_completed: u32,
    pub total_trips: u32,
}

impl DriverDraft {
    pub fn into_driver(self, id: String) -> Driver {
        Driver {
            id,
            name: self.name,
            license: self.license,
            license_expiry: self.license_expiry,
            status: self.status.unwrap_or(DriverStatus::OffDuty),
            safety_score: self.safety_score,
            trips_completed: self.trips_completed,
            total_trips: self.total_trips,
            phone: self.phone,
            region: self.region,
        }
    }

    pub fn into_patch(self, id: String) -> DriverPatch {
        DriverPatch {
            id,
            name: Some(self.name),
            license: Some(self.license),
            license_expiry: Some(self.license_expiry),
            status: self.status,
            safety_score: Some(self.safety_score),
            trips_completed: Some(self.trips_completed),
            total_trips: Some(self.total_trips),
            phone: Some(self.phone),
            region: Some(self.region),
        }
    }
}

/// Validates a driver form.
///
/// An already-expired license is accepted here; it only blocks dispatch.
pub fn validate_driver(form: &DriverForm) -> CoreResult<DriverDraft> {
    let mut errors = FieldErrors::new();

    let name = collect(&mut errors, validate_required("name", &form.name));
    let license = collect(&mut errors, validate_required("license", &form.license));
    let license_expiry = collect(
        &mut errors,
        validate_date("licenseExpiry", &form.license_expiry),
    );
    let phone = collect(&mut errors, validate_required("phone", &form.phone));
    let safety_score = collect(
        &mut errors,
        optional_whole(
            "safetyScore",
            &form.safety_score,
            DEFAULT_SAFETY_SCORE as i64,
            0,
            100,
        ),
    );
    let total_trips = collect(
        &mut errors,
        optional_whole("totalTrips", &form.total_trips, 0, 0, u32::MAX as i64),
    );
    let trips_completed = collect(
        &mut errors,
        optional_whole("tripsCompleted", &form.trips_completed, 0, 0, u32::MAX as i64),
    );
    if let (Some(completed), Some(total)) = (trips_completed, total_trips) {
        if completed > total {
            errors.push(ValidationError::OutOfRange {
                field: "tripsCompleted".to_string(),
                min: 0,
                max: total,
            });
        }
    }

    match (name, license, license_expiry, phone, safety_score, trips_completed, total_trips) {
        (
            Some(name),
            Some(license),
            Some(license_expiry),
            Some(phone),
            Some(safety_score),
            Some(trips_completed),
            Some(total_trips),
        ) if errors.is_empty() => Ok(DriverDraft {
            name,
            license,
            license_expiry,
            phone,
            region: form.region,
            status: form.status,
            safety_score: safety_score as u8,
            trips_completed: trips_completed as u32,
            total_trips: total_trips as u32,
        }),
        _ => Err(CoreError::InvalidInput(errors)),
    }
}

// =============================================================================
// Trip
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct TripForm {
    pub vehicle_id: String,
    pub driver_id: String,
    pub origin: String,
    pub destination: String,
    pub cargo_description: String,
    pub cargo_weight: String,
    /// Blank means no revenue.
    pub revenue: String,
    /// Draft or Dispatched.
    pub status: TripStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripDraft {
    pub vehicle_id: String,
    pub driver_id: String,
    pub origin: String,
    pub destination: String,
    pub cargo_description: String,
    pub cargo_weight: u32,
    pub revenue: Money,
    pub status: TripStatus,
}

impl TripDraft {
    /// A dispatched trip starts today; a draft has no dates yet.
    pub fn into_trip(self, id: String, today: NaiveDate) -> Trip {
        let start_date = (self.status == TripStatus::Dispatched).then_some(today);
        Trip {
            id,
            vehicle_id: self.vehicle_id,
            driver_id: self.driver_id,
            origin: self.origin,
            destination: self.destination,
            cargo_description: self.cargo_description,
            cargo_weight: self.cargo_weight,
            status: self.status,
            start_date,
            end_date: None,
            revenue: self.revenue,
        }
    }
}

/// Validates a trip form against the current fleet.
///
/// ## Rules
/// - vehicle must exist and be Available
/// - driver must exist, not be Suspended, and hold a license that has not
///   expired as of `today`
/// - `origin`, `destination`, `cargoDescription` required
/// - `cargoWeight` > 0 and within the vehicle's capacity
/// - trips are created as Draft or Dispatched only
pub fn validate_trip(form: &TripForm, state: &FleetState, today: NaiveDate) -> CoreResult<TripDraft> {
    let mut errors = FieldErrors::new();

    let vehicle = collect(&mut errors, require_vehicle(state, &form.vehicle_id));
    if let Some(v) = vehicle {
        if v.status != VehicleStatus::Available {
            errors.push(ValidationError::NotAssignable {
                field: "vehicleId".to_string(),
                id: v.id.clone(),
                status: v.status.to_string(),
            });
        }
    }

    let driver = collect(&mut errors, require_driver(state, &form.driver_id));
    if let Some(d) = driver {
        if !d.status.is_assignable() {
            errors.push(ValidationError::NotAssignable {
                field: "driverId".to_string(),
                id: d.id.clone(),
                status: d.status.to_string(),
            });
        }
        if d.is_license_expired_on(today) {
            errors.push(ValidationError::LicenseExpired {
                driver_id: d.id.clone(),
                expired_on: d.license_expiry,
            });
        }
    }

    let origin = collect(&mut errors, validate_required("origin", &form.origin));
    let destination = collect(&mut errors, validate_required("destination", &form.destination));
    let cargo_description = collect(
        &mut errors,
        validate_required("cargoDescription", &form.cargo_description),
    );

    let cargo_weight = collect(
        &mut errors,
        validate_whole_number("cargoWeight", &form.cargo_weight, 1, u32::MAX as i64),
    )
    .map(|w| w as u32);
    if let (Some(v), Some(weight)) = (vehicle, cargo_weight) {
        if !v.can_carry(weight) {
            errors.push(ValidationError::CapacityExceeded {
                cargo_kg: weight,
                capacity_kg: v.capacity,
            });
        }
    }

    let revenue = collect(&mut errors, optional_rupees("revenue", &form.revenue));

    if !matches!(form.status, TripStatus::Draft | TripStatus::Dispatched) {
        errors.push(ValidationError::NotAllowed {
            field: "status".to_string(),
            allowed: vec!["Draft".to_string(), "Dispatched".to_string()],
        });
    }

    match (vehicle, driver, origin, destination, cargo_description, cargo_weight, revenue) {
        (
            Some(v),
            Some(d),
            Some(origin),
            Some(destination),
            Some(cargo_description),
            Some(cargo_weight),
            Some(revenue),
        ) if errors.is_empty() =>
        {
            Ok(TripDraft {
                vehicle_id: v.id.clone(),
                driver_id: d.id.clone(),
                origin,
                destination,
                cargo_description,
                cargo_weight,
                revenue,
                status: form.status,
            })
        }
        _ => Err(CoreError::InvalidInput(errors)),
    }
}

// =============================================================================
// Maintenance
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct MaintenanceForm {
    pub vehicle_id: String,
    pub date: String,
    /// Blank means "General Service".
    pub service_type: String,
    pub description: String,
    /// Rupees; blank means free.
    pub cost: String,
    pub technician: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaintenanceDraft {
    pub vehicle_id: String,
    pub date: NaiveDate,
    pub service_type: String,
    pub description: String,
    pub cost: Money,
    pub technician: String,
}

impl MaintenanceDraft {
    /// New logs are always opened In Progress.
    pub fn into_log(self, id: String) -> MaintenanceLog {
        MaintenanceLog {
            id,
            vehicle_id: self.vehicle_id,
            date: self.date,
            service_type: self.service_type,
            description: self.description,
            cost: self.cost,
            technician: self.technician,
            status: MaintenanceStatus::InProgress,
        }
    }

    /// Edit of an existing log; its status is left as it is.
    pub fn into_patch(self, id: String) -> MaintenanceLogPatch {
        MaintenanceLogPatch {
            id,
            vehicle_id: Some(self.vehicle_id),
            date: Some(self.date),
            service_type: Some(self.service_type),
            description: Some(self.description),
            cost: Some(self.cost),
            technician: Some(self.technician),
            status: None,
        }
    }
}

pub fn validate_maintenance(form: &MaintenanceForm, state: &FleetState) -> CoreResult<MaintenanceDraft> {
    let mut errors = FieldErrors::new();

    let vehicle = collect(&mut errors, require_vehicle(state, &form.vehicle_id));
    let date = collect(&mut errors, validate_date("date", &form.date));
    let description = collect(&mut errors, validate_required("description", &form.description));
    let cost = collect(&mut errors, optional_rupees("cost", &form.cost));

    let service_type = match form.service_type.trim() {
        "" => DEFAULT_SERVICE_TYPE.to_string(),
        s => s.to_string(),
    };

    match (vehicle, date, description, cost) {
        (Some(v), Some(date), Some(description), Some(cost)) if errors.is_empty() => {
            Ok(MaintenanceDraft {
                vehicle_id: v.id.clone(),
                date,
                service_type,
                description,
                cost,
                technician: form.technician.trim().to_string(),
            })
        }
        _ => Err(CoreError::InvalidInput(errors)),
    }
}

// =============================================================================
// Fuel
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct FuelForm {
    pub vehicle_id: String,
    pub date: String,
    pub liters: String,
    /// Rupees per liter.
    pub cost_per_liter: String,
    pub odometer: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FuelDraft {
    pub vehicle_id: String,
    pub date: NaiveDate,
    pub liters: f64,
    pub cost_per_liter: Money,
    pub odometer: u64,
}

impl FuelDraft {
    /// Total is `liters × cost_per_liter`, rounded to the paisa.
    pub fn total_cost(&self) -> Money {
        self.cost_per_liter.times_quantity(self.liters)
    }

    pub fn into_log(self, id: String) -> FuelLog {
        FuelLog {
            id,
            total_cost: self.total_cost(),
            vehicle_id: self.vehicle_id,
            date: self.date,
            liters: self.liters,
            cost_per_liter: self.cost_per_liter,
            odometer: self.odometer,
        }
    }
}

fn validate_liters(raw: &str) -> ValidationResult<f64> {
    let raw = validate_required("liters", raw)?;
    let liters: f64 = raw.parse().map_err(|_| ValidationError::NotANumber {
        field: "liters".to_string(),
    })?;
    if !liters.is_finite() {
        return Err(ValidationError::NotANumber {
            field: "liters".to_string(),
        });
    }
    if liters <= 0.0 {
        return Err(ValidationError::MustBePositive {
            field: "liters".to_string(),
        });
    }
    Ok(liters)
}

pub fn validate_fuel(form: &FuelForm, state: &FleetState) -> CoreResult<FuelDraft> {
    let mut errors = FieldErrors::new();

    let vehicle = collect(&mut errors, require_vehicle(state, &form.vehicle_id));
    let date = collect(&mut errors, validate_date("date", &form.date));
    let liters = collect(&mut errors, validate_liters(&form.liters));
    let cost_per_liter = collect(
        &mut errors,
        validate_rupees("costPerLiter", &form.cost_per_liter),
    );
    let odometer = collect(
        &mut errors,
        validate_whole_number("odometer", &form.odometer, 0, i64::MAX),
    );

    match (vehicle, date, liters, cost_per_liter, odometer) {
        (Some(v), Some(date), Some(liters), Some(cost_per_liter), Some(odometer))
            if errors.is_empty() =>
        {
            Ok(FuelDraft {
                vehicle_id: v.id.clone(),
                date,
                liters,
                cost_per_liter,
                odometer: odometer as u64,
            })
        }
        _ => Err(CoreError::InvalidInput(errors)),
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

    fn today() -> NaiveDate {
        date(2026, 2, 21)
    }

    fn field_errors(err: CoreError) -> FieldErrors {
        match err {
            CoreError::InvalidInput(errors) => errors,
            other => panic!("expected InvalidInput, got {:?}", other),
        }
    }

    fn fleet() -> FleetState {
        let mut state = FleetState::new();
        state.vehicles.push(Vehicle {
            id: "V001".to_string(),
            name: "Eicher Pro".to_string(),
            model: "Pro 2059".to_string(),
            vehicle_type: VehicleType::Truck,
            plate: "MH-04-MN-6789".to_string(),
            capacity: 9000,
            odometer: 63200,
            status: VehicleStatus::Available,
            region: Region::North,
            year: 2022,
        });
        state.vehicles.push(Vehicle {
            id: "V002".to_string(),
            name: "Tata Ace".to_string(),
            model: "Ace Gold".to_string(),
            vehicle_type: VehicleType::Van,
            plate: "KA-03-EF-9012".to_string(),
            capacity: 750,
            odometer: 55400,
            status: VehicleStatus::InShop,
            region: Region::West,
            year: 2022,
        });
        state.drivers.push(Driver {
            id: "D001".to_string(),
            name: "Karan Singh".to_string(),
            license: "TN-654321".to_string(),
            license_expiry: date(2026, 9, 25),
            status: DriverStatus::OffDuty,
            safety_score: 84,
            trips_completed: 130,
            total_trips: 140,
            phone: "+91-9321098765".to_string(),
            region: Region::South,
        });
        state.drivers.push(Driver {
            id: "D002".to_string(),
            name: "Amit Patel".to_string(),
            license: "GJ-321654".to_string(),
            license_expiry: date(2023, 8, 1),
            status: DriverStatus::OffDuty,
            safety_score: 55,
            trips_completed: 67,
            total_trips: 89,
            phone: "+91-9543210987".to_string(),
            region: Region::West,
        });
        state
    }

    fn trip_form(vehicle_id: &str, driver_id: &str, weight: &str) -> TripForm {
        TripForm {
            vehicle_id: vehicle_id.to_string(),
            driver_id: driver_id.to_string(),
            origin: "Ahmedabad".to_string(),
            destination: "Surat".to_string(),
            cargo_description: "Textiles".to_string(),
            cargo_weight: weight.to_string(),
            revenue: "42000".to_string(),
            status: TripStatus::Draft,
        }
    }

    #[test]
    fn test_validate_whole_number() {
        assert_eq!(validate_whole_number("odometer", "0", 0, 10), Ok(0));
        assert!(matches!(
            validate_whole_number("odometer", "-1", 0, 10),
            Err(ValidationError::Negative { .. })
        ));
        assert!(matches!(
            validate_whole_number("capacity", "0", 1, 10),
            Err(ValidationError::MustBePositive { .. })
        ));
        assert!(matches!(
            validate_whole_number("year", "1900", 1950, 2027),
            Err(ValidationError::OutOfRange { min: 1950, .. })
        ));
        assert!(matches!(
            validate_whole_number("capacity", "", 1, 10),
            Err(ValidationError::Required { .. })
        ));
    }

    #[test]
    fn test_validate_rupees() {
        assert_eq!(validate_rupees("x", "0").unwrap(), Money::zero());
        assert_eq!(validate_rupees("x", ".5").unwrap().minor(), 50);
        assert_eq!(validate_rupees("x", "95.50").unwrap().minor(), 9550);
        assert!(matches!(
            validate_rupees("x", "12a"),
            Err(ValidationError::NotANumber { .. })
        ));
        assert!(matches!(
            validate_rupees("x", "."),
            Err(ValidationError::NotANumber { .. })
        ));
    }

    #[test]
    fn test_validate_rupees_rejects_huge_amounts() {
        for raw in ["99999999999999999", "99999999999999999999999", "1000000000001.00"] {
            assert!(
                matches!(
                    validate_rupees("cost", raw),
                    Err(ValidationError::OutOfRange { min: 0, max: MAX_RUPEES, .. })
                ),
                "{raw} should be out of range"
            );
        }
        assert_eq!(
            validate_rupees("cost", "1000000000000.99").unwrap().minor(),
            MAX_RUPEES * 100 + 99
        );
    }

    #[test]
    fn test_validate_date() {
        assert_eq!(validate_date("date", "2026-02-14").unwrap(), date(2026, 2, 14));
        assert!(matches!(
            validate_date("date", "14/02/2026"),
            Err(ValidationError::InvalidFormat { .. })
        ));
    }

    #[test]
    fn test_vehicle_form_collects_every_error() {
        let form = VehicleForm {
            capacity: "0".to_string(),
            odometer: "-5".to_string(),
            ..Default::default()
        };
        let errors = field_errors(validate_vehicle(&form, &fleet(), None, today()).unwrap_err());
        assert!(errors.get("name").is_some());
        assert!(errors.get("plate").is_some());
        assert!(errors.get("capacity").is_some());
        assert!(errors.get("odometer").is_some());
        assert!(errors.get("year").is_none());
    }

    #[test]
    fn test_vehicle_plate_uniqueness() {
        let form = VehicleForm {
            name: "Second Eicher".to_string(),
            plate: " mh-04-mn-6789 ".to_string(),
            capacity: "9000".to_string(),
            odometer: "0".to_string(),
            year: "2026".to_string(),
            ..Default::default()
        };
        let errors = field_errors(validate_vehicle(&form, &fleet(), None, today()).unwrap_err());
        assert!(matches!(errors.get("plate"), Some(ValidationError::Duplicate { .. })));

        // editing V001 keeps its own plate
        let draft = validate_vehicle(&form, &fleet(), Some("V001"), today()).unwrap();
        assert_eq!(draft.plate, "MH-04-MN-6789");
        assert_eq!(draft.into_patch("V001".to_string()).status, None);
    }

    #[test]
    fn test_vehicle_year_defaults_and_bounds() {
        let mut form = VehicleForm {
            name: "Bajaj RE".to_string(),
            plate: "UP-32-OP-9999".to_string(),
            capacity: "500".to_string(),
            odometer: "0".to_string(),
            vehicle_type: VehicleType::Bike,
            ..Default::default()
        };
        let draft = validate_vehicle(&form, &fleet(), None, today()).unwrap();
        assert_eq!(draft.year, 2026);
        let vehicle = draft.into_vehicle("V003".to_string());
        assert_eq!(vehicle.status, VehicleStatus::Available);
        assert_eq!(vehicle.vehicle_type, VehicleType::Bike);

        form.year = "2028".to_string();
        let errors = field_errors(validate_vehicle(&form, &fleet(), None, today()).unwrap_err());
        assert!(matches!(errors.get("year"), Some(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn test_driver_form() {
        let form = DriverForm {
            name: "Meena Das".to_string(),
            license: "MH-789012".to_string(),
            license_expiry: "2028-01-10".to_string(),
            phone: "+91-9432109876".to_string(),
            region: Region::East,
            ..Default::default()
        };
        let draft = validate_driver(&form).unwrap();
        assert_eq!(draft.safety_score, DEFAULT_SAFETY_SCORE);
        assert_eq!(draft.status, None);
        assert_eq!(draft.clone().into_patch("D008".to_string()).status, None);
        let driver = draft.into_driver("D008".to_string());
        assert_eq!(driver.status, DriverStatus::OffDuty);
        assert_eq!(driver.total_trips, 0);
    }

    #[test]
    fn test_driver_form_rejects_bad_numbers() {
        let form = DriverForm {
            license_expiry: "soon".to_string(),
            safety_score: "101".to_string(),
            trips_completed: "10".to_string(),
            total_trips: "5".to_string(),
            ..Default::default()
        };
        let errors = field_errors(validate_driver(&form).unwrap_err());
        assert!(errors.get("name").is_some());
        assert!(errors.get("license").is_some());
        assert!(errors.get("phone").is_some());
        assert!(matches!(
            errors.get("licenseExpiry"),
            Some(ValidationError::InvalidFormat { .. })
        ));
        assert!(matches!(
            errors.get("safetyScore"),
            Some(ValidationError::OutOfRange { max: 100, .. })
        ));
        assert!(matches!(
            errors.get("tripsCompleted"),
            Some(ValidationError::OutOfRange { max: 5, .. })
        ));
    }

    #[test]
    fn test_trip_form_valid_draft_and_dispatch() {
        let draft = validate_trip(&trip_form("V001", "D001", "7500"), &fleet(), today()).unwrap();
        assert_eq!(draft.revenue, Money::from_major(42000));
        let trip = draft.into_trip("T001".to_string(), today());
        assert_eq!(trip.status, TripStatus::Draft);
        assert_eq!(trip.start_date, None);

        let mut form = trip_form("V001", "D001", "7500");
        form.status = TripStatus::Dispatched;
        form.revenue = String::new();
        let trip = validate_trip(&form, &fleet(), today())
            .unwrap()
            .into_trip("T002".to_string(), today());
        assert_eq!(trip.start_date, Some(today()));
        assert_eq!(trip.revenue, Money::zero());
    }

    #[test]
    fn test_trip_capacity_exceeded() {
        let errors = field_errors(
            validate_trip(&trip_form("V001", "D001", "9001"), &fleet(), today()).unwrap_err(),
        );
        assert_eq!(
            errors.get("cargoWeight"),
            Some(&ValidationError::CapacityExceeded {
                cargo_kg: 9001,
                capacity_kg: 9000
            })
        );
    }

    #[test]
    fn test_trip_expired_license_and_busy_vehicle() {
        let errors = field_errors(
            validate_trip(&trip_form("V002", "D002", "100"), &fleet(), today()).unwrap_err(),
        );
        assert!(matches!(
            errors.get("driverId"),
            Some(ValidationError::LicenseExpired { .. })
        ));
        assert!(matches!(
            errors.get("vehicleId"),
            Some(ValidationError::NotAssignable { .. })
        ));
    }

    #[test]
    fn test_trip_unknown_references() {
        let errors = field_errors(
            validate_trip(&trip_form("V404", "D404", "100"), &fleet(), today()).unwrap_err(),
        );
        assert!(matches!(
            errors.get("vehicleId"),
            Some(ValidationError::UnknownReference { .. })
        ));
        assert!(matches!(
            errors.get("driverId"),
            Some(ValidationError::UnknownReference { .. })
        ));
    }

    #[test]
    fn test_trip_cannot_start_completed() {
        let mut form = trip_form("V001", "D001", "100");
        form.status = TripStatus::Completed;
        let errors = field_errors(validate_trip(&form, &fleet(), today()).unwrap_err());
        assert!(matches!(errors.get("status"), Some(ValidationError::NotAllowed { .. })));
    }

    #[test]
    fn test_maintenance_form_defaults() {
        let form = MaintenanceForm {
            vehicle_id: "V002".to_string(),
            date: "2026-02-14".to_string(),
            description: "Full engine inspection".to_string(),
            cost: "52000".to_string(),
            ..Default::default()
        };
        let log = validate_maintenance(&form, &fleet())
            .unwrap()
            .into_log("M001".to_string());
        assert_eq!(log.service_type, DEFAULT_SERVICE_TYPE);
        assert_eq!(log.status, MaintenanceStatus::InProgress);
        assert_eq!(log.cost, Money::from_major(52000));
    }

    #[test]
    fn test_maintenance_form_errors() {
        let form = MaintenanceForm {
            vehicle_id: "V404".to_string(),
            cost: "-10".to_string(),
            ..Default::default()
        };
        let errors = field_errors(validate_maintenance(&form, &fleet()).unwrap_err());
        assert_eq!(errors.len(), 4);
        assert!(matches!(errors.get("cost"), Some(ValidationError::Negative { .. })));
    }

    #[test]
    fn test_fuel_form_computes_total() {
        let form = FuelForm {
            vehicle_id: "V001".to_string(),
            date: "2026-02-20".to_string(),
            liters: "5".to_string(),
            cost_per_liter: "110.3".to_string(),
            odometer: "12380".to_string(),
        };
        let log = validate_fuel(&form, &fleet()).unwrap().into_log("F005".to_string());
        assert_eq!(log.total_cost, Money::from_minor(55150));
        assert_eq!(log.odometer, 12380);
    }

    #[test]
    fn test_fuel_form_rejects_zero_liters() {
        let form = FuelForm {
            vehicle_id: "V001".to_string(),
            date: "2026-02-20".to_string(),
            liters: "0".to_string(),
            cost_per_liter: "95.5".to_string(),
            odometer: "100".to_string(),
        };
        let errors = field_errors(validate_fuel(&form, &fleet()).unwrap_err());
        assert!(matches!(errors.get("liters"), Some(ValidationError::MustBePositive { .. })));
    }
}
