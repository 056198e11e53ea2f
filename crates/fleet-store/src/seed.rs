//! # Demo Fleet
//!
//! The sample fleet a fresh install starts with when `seed_demo_data` is on.
//!
//! ## What's Included
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  8 vehicles     trucks, vans and bikes across all four regions          │
//! │                 (one On Trip pair, one In Shop, one Retired)            │
//! │  7 drivers      one Suspended with a long-expired license               │
//! │  7 trips        Draft, Dispatched, Completed and Cancelled              │
//! │  5 maintenance  one still In Progress (V003)                            │
//! │  8 fuel logs    diesel at ₹95.50, petrol ₹105.20 / ₹110.30              │
//! │  4 cargo items  waiting for a trip                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::NaiveDate;
use fleet_core::{
    CargoPriority, Driver, DriverStatus, FleetState, FuelLog, MaintenanceLog,
    MaintenanceStatus, Money, PendingCargo, Region, Trip, TripStatus, Vehicle, VehicleStatus,
    VehicleType,
};
use tracing::info;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

/// Builds the demo fleet.
pub fn demo_state() -> FleetState {
    let mut state = FleetState {
        vehicles: vehicles(),
        drivers: drivers(),
        trips: trips(),
        maintenance_logs: maintenance_logs(),
        fuel_logs: fuel_logs(),
        pending_cargo: pending_cargo(),
        ..FleetState::new()
    };
    state.sync_issued_ids();

    info!(
        vehicles = state.vehicles.len(),
        drivers = state.drivers.len(),
        trips = state.trips.len(),
        "Demo fleet seeded"
    );
    state
}

// =============================================================================
// Vehicles
// =============================================================================

#[allow(clippy::too_many_arguments)]
fn vehicle(
    id: &str,
    name: &str,
    model: &str,
    vehicle_type: VehicleType,
    plate: &str,
    capacity: u32,
    odometer: u64,
    status: VehicleStatus,
    region: Region,
    year: u16,
) -> Vehicle {
    Vehicle {
        id: id.to_string(),
        name: name.to_string(),
        model: model.to_string(),
        vehicle_type,
        plate: plate.to_string(),
        capacity,
        odometer,
        status,
        region,
        year,
    }
}

fn vehicles() -> Vec<Vehicle> {
    use Region::*;
    use VehicleStatus::*;
    use VehicleType::*;

    vec![
        vehicle("V001", "Volvo FH16", "FH16 750", Truck, "MH-01-AB-1234", 24000, 142500, Available, North, 2021),
        vehicle("V002", "Mercedes Actros", "Actros 2545", Truck, "DL-05-CD-5678", 20000, 98300, OnTrip, South, 2020),
        vehicle("V003", "Tata Ace", "Ace Gold", Van, "KA-03-EF-9012", 750, 55400, InShop, West, 2022),
        vehicle("V004", "Mahindra Bolero", "Bolero Pickup", Van, "GJ-07-GH-3456", 1200, 77800, Available, West, 2021),
        vehicle("V005", "Honda Activa", "Activa 6G", Bike, "MH-12-IJ-7890", 25, 12400, OnTrip, East, 2023),
        vehicle("V006", "Ashok Leyland", "Captain 3518", Truck, "TN-09-KL-2345", 18000, 210000, Retired, South, 2018),
        vehicle("V007", "Eicher Pro", "Pro 2059", Truck, "MH-04-MN-6789", 9000, 63200, Available, North, 2022),
        vehicle("V008", "Bajaj RE", "RE Compact", Bike, "UP-32-OP-1234", 500, 34500, Available, East, 2022),
    ]
}

// =============================================================================
// Drivers
// =============================================================================

#[allow(clippy::too_many_arguments)]
fn driver(
    id: &str,
    name: &str,
    license: &str,
    license_expiry: NaiveDate,
    status: DriverStatus,
    safety_score: u8,
    (trips_completed, total_trips): (u32, u32),
    phone: &str,
    region: Region,
) -> Driver {
    Driver {
        id: id.to_string(),
        name: name.to_string(),
        license: license.to_string(),
        license_expiry,
        status,
        safety_score,
        trips_completed,
        total_trips,
        phone: phone.to_string(),
        region,
    }
}

fn drivers() -> Vec<Driver> {
    use DriverStatus::*;
    use Region::*;

    vec![
        driver("D001", "Rajesh Kumar", "MH-012345", date(2027, 6, 15), OnDuty, 92, (145, 152), "+91-9876543210", North),
        driver("D002", "Sunil Sharma", "DL-987654", date(2025, 11, 30), OnDuty, 78, (98, 110), "+91-9765432109", South),
        driver("D003", "Priya Nair", "KA-456789", date(2026, 3, 20), OffDuty, 95, (201, 205), "+91-9654321098", West),
        driver("D004", "Amit Patel", "GJ-321654", date(2023, 8, 1), Suspended, 55, (67, 89), "+91-9543210987", West),
        driver("D005", "Meena Das", "MH-789012", date(2028, 1, 10), OnDuty, 88, (77, 80), "+91-9432109876", East),
        driver("D006", "Karan Singh", "TN-654321", date(2026, 9, 25), OffDuty, 84, (130, 140), "+91-9321098765", South),
        driver("D007", "Anita Roy", "UP-111222", date(2027, 12, 5), OnDuty, 91, (60, 63), "+91-9210987654", East),
    ]
}

// =============================================================================
// Trips
// =============================================================================

#[allow(clippy::too_many_arguments)]
fn trip(
    id: &str,
    (vehicle_id, driver_id): (&str, &str),
    (origin, destination): (&str, &str),
    cargo_description: &str,
    cargo_weight: u32,
    status: TripStatus,
    (start_date, end_date): (Option<NaiveDate>, Option<NaiveDate>),
    revenue_rupees: i64,
) -> Trip {
    Trip {
        id: id.to_string(),
        vehicle_id: vehicle_id.to_string(),
        driver_id: driver_id.to_string(),
        origin: origin.to_string(),
        destination: destination.to_string(),
        cargo_description: cargo_description.to_string(),
        cargo_weight,
        status,
        start_date,
        end_date,
        revenue: Money::from_major(revenue_rupees),
    }
}

fn trips() -> Vec<Trip> {
    use TripStatus::*;

    let feb = |d: u32| Some(date(2026, 2, d));

    vec![
        trip("T001", ("V002", "D001"), ("Mumbai", "Delhi"), "Electronics", 15000, Dispatched, (feb(18), None), 85000),
        trip("T002", ("V005", "D005"), ("Pune", "Nashik"), "Parcels", 20, Dispatched, (feb(20), None), 1200),
        trip("T003", ("V001", "D003"), ("Bengaluru", "Chennai"), "Auto Parts", 18000, Completed, (feb(10), feb(13)), 95000),
        trip("T004", ("V007", "D006"), ("Ahmedabad", "Surat"), "Textiles", 7500, Completed, (feb(5), feb(6)), 42000),
        trip("T005", ("V004", "D007"), ("Jaipur", "Agra"), "Handicrafts", 900, Cancelled, (feb(15), None), 0),
        trip("T006", ("V001", "D001"), ("Delhi", "Chandigarh"), "FMCG Goods", 20000, Draft, (None, None), 70000),
        trip("T007", ("V008", "D005"), ("Lucknow", "Kanpur"), "Documents", 400, Completed, (feb(1), feb(1)), 3500),
    ]
}

// =============================================================================
// Maintenance & Fuel
// =============================================================================

#[allow(clippy::too_many_arguments)]
fn maintenance(
    id: &str,
    vehicle_id: &str,
    date: NaiveDate,
    service_type: &str,
    description: &str,
    cost_rupees: i64,
    technician: &str,
    status: MaintenanceStatus,
) -> MaintenanceLog {
    MaintenanceLog {
        id: id.to_string(),
        vehicle_id: vehicle_id.to_string(),
        date,
        service_type: service_type.to_string(),
        description: description.to_string(),
        cost: Money::from_major(cost_rupees),
        technician: technician.to_string(),
        status,
    }
}

fn maintenance_logs() -> Vec<MaintenanceLog> {
    use MaintenanceStatus::*;

    vec![
        maintenance("M001", "V003", date(2026, 2, 14), "Engine Overhaul", "Full engine inspection and overhaul", 52000, "Ram Motors", InProgress),
        maintenance("M002", "V001", date(2026, 1, 20), "Oil Change", "Synthetic oil change + filter", 3500, "QuickFix Garage", Completed),
        maintenance("M003", "V002", date(2026, 1, 5), "Brake Service", "Brake pad replacement all wheels", 8200, "AutoCare Center", Completed),
        maintenance("M004", "V006", date(2025, 12, 10), "Tyre Replacement", "All 6 tyres replaced", 45000, "MRF Service", Completed),
        maintenance("M005", "V007", date(2026, 2, 19), "AC Service", "AC compressor and gas refill", 6800, "CoolTech", Completed),
    ]
}

/// Prices and totals are in paise; the recorded totals are kept as
/// entered rather than recomputed.
fn fuel(
    id: &str,
    vehicle_id: &str,
    date: NaiveDate,
    liters: f64,
    (cost_per_liter, total_cost): (i64, i64),
    odometer: u64,
) -> FuelLog {
    FuelLog {
        id: id.to_string(),
        vehicle_id: vehicle_id.to_string(),
        date,
        liters,
        cost_per_liter: Money::from_minor(cost_per_liter),
        total_cost: Money::from_minor(total_cost),
        odometer,
    }
}

fn fuel_logs() -> Vec<FuelLog> {
    let day = |m: u32, d: u32| date(2026, m, d);

    vec![
        fuel("F001", "V001", day(2, 15), 120.0, (9550, 1_146_000), 142200),
        fuel("F002", "V002", day(2, 18), 200.0, (9550, 1_910_000), 97900),
        fuel("F003", "V003", day(2, 10), 40.0, (10520, 420_800), 55200),
        fuel("F004", "V004", day(2, 12), 55.0, (10520, 578_600), 77600),
        fuel("F005", "V005", day(2, 20), 5.0, (11030, 55_150), 12380),
        fuel("F006", "V007", day(2, 16), 80.0, (9550, 764_000), 63000),
        fuel("F007", "V001", day(1, 28), 110.0, (9550, 1_050_500), 141900),
        fuel("F008", "V008", day(2, 19), 8.0, (11030, 88_240), 34300),
    ]
}

// =============================================================================
// Pending Cargo
// =============================================================================

fn cargo(
    id: &str,
    description: &str,
    weight: u32,
    (origin, destination): (&str, &str),
    priority: CargoPriority,
) -> PendingCargo {
    PendingCargo {
        id: id.to_string(),
        description: description.to_string(),
        weight,
        origin: origin.to_string(),
        destination: destination.to_string(),
        priority,
    }
}

fn pending_cargo() -> Vec<PendingCargo> {
    use CargoPriority::*;

    vec![
        cargo("C001", "Industrial Machinery", 22000, ("Pune", "Nagpur"), High),
        cargo("C002", "Pharmaceutical Goods", 500, ("Hyderabad", "Bengaluru"), Urgent),
        cargo("C003", "Construction Material", 8000, ("Jaipur", "Mumbai"), Normal),
        cargo("C004", "Cold Chain Produce", 1200, ("Nashik", "Pune"), Urgent),
    ]
}
