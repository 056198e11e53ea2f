//! # Identifier Generator
//!
//! Sequential, human-readable ids: `V001`, `D014`, `T120`.
//!
//! ```text
//! existing: V001 V002 V005 V008      (V003, V004, V006, V007 deleted)
//!              │    │    │    │
//!              └────┴────┴────┴──► max suffix = 8 ──► next = V009
//! ```
//!
//! The next id is derived from the **maximum** suffix present, not the
//! collection length, so a deletion can never cause an id to be reused
//! while a higher id still exists. Generation is pure: asking twice
//! without inserting yields the same id.
//!
//! A `FleetState` additionally remembers the highest id it has ever
//! accepted per collection ([`IdWatermarks`]), so deleting the newest
//! record (V008) does not hand its id out again.

use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::state::FleetState;
use crate::types::{Driver, FuelLog, MaintenanceLog, Trip, Vehicle};

/// Anything stored under a sequential id.
pub trait Identified {
    fn id(&self) -> &str;
}

macro_rules! impl_identified {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Identified for $ty {
                #[inline]
                fn id(&self) -> &str {
                    &self.id
                }
            }
        )*
    };
}

impl_identified!(Vehicle, Driver, Trip, MaintenanceLog, FuelLog);

/// The entity collections that receive generated ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Vehicle,
    Driver,
    Trip,
    MaintenanceLog,
    FuelLog,
}

impl EntityKind {
    pub const fn prefix(&self) -> char {
        match self {
            EntityKind::Vehicle => 'V',
            EntityKind::Driver => 'D',
            EntityKind::Trip => 'T',
            EntityKind::MaintenanceLog => 'M',
            EntityKind::FuelLog => 'F',
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            EntityKind::Vehicle => "Vehicle",
            EntityKind::Driver => "Driver",
            EntityKind::Trip => "Trip",
            EntityKind::MaintenanceLog => "Maintenance log",
            EntityKind::FuelLog => "Fuel log",
        };
        f.write_str(label)
    }
}

/// Numeric part of an id: everything after the leading prefix letter.
///
/// Ids whose suffix isn't a number yield `None` and are ignored.
fn sequence_of(id: &str) -> Option<u32> {
    let mut chars = id.chars();
    chars.next()?;
    chars.as_str().parse().ok()
}

/// Highest numeric suffix in `items`, 0 when there is none.
pub fn max_sequence<T: Identified>(items: &[T]) -> u32 {
    items
        .iter()
        .filter_map(|item| sequence_of(item.id()))
        .max()
        .unwrap_or(0)
}

/// Formats the id following `last`. Stops at `u32::MAX` rather than wrapping.
fn format_next(prefix: char, last: u32) -> String {
    format!("{}{:03}", prefix, last.saturating_add(1))
}

/// Returns the next id for `items`: `prefix` + (max suffix + 1), padded
/// to three digits.
///
/// ```rust
/// use fleet_core::ids::next_id;
/// use fleet_core::types::Trip;
///
/// let none: Vec<Trip> = Vec::new();
/// assert_eq!(next_id('T', &none), "T001");
/// ```
pub fn next_id<T: Identified>(prefix: char, items: &[T]) -> String {
    format_next(prefix, max_sequence(items))
}

// =============================================================================
// Watermarks
// =============================================================================

/// Highest sequence ever accepted into each collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct IdWatermarks {
    pub vehicle: u32,
    pub driver: u32,
    pub trip: u32,
    pub maintenance_log: u32,
    pub fuel_log: u32,
}

impl IdWatermarks {
    pub fn get(&self, kind: EntityKind) -> u32 {
        match kind {
            EntityKind::Vehicle => self.vehicle,
            EntityKind::Driver => self.driver,
            EntityKind::Trip => self.trip,
            EntityKind::MaintenanceLog => self.maintenance_log,
            EntityKind::FuelLog => self.fuel_log,
        }
    }

    /// Raises the watermark for `kind` to cover `id`. Never lowers it.
    pub fn observe(&mut self, kind: EntityKind, id: &str) {
        let Some(sequence) = sequence_of(id) else {
            return;
        };
        let slot = match kind {
            EntityKind::Vehicle => &mut self.vehicle,
            EntityKind::Driver => &mut self.driver,
            EntityKind::Trip => &mut self.trip,
            EntityKind::MaintenanceLog => &mut self.maintenance_log,
            EntityKind::FuelLog => &mut self.fuel_log,
        };
        *slot = (*slot).max(sequence);
    }
}

impl FleetState {
    /// Next free id for the given collection.
    ///
    /// Takes the larger of the collection's current maximum and the
    /// watermark, so neither deletions nor reordering can cause reuse.
    pub fn next_id(&self, kind: EntityKind) -> String {
        let present = match kind {
            EntityKind::Vehicle => max_sequence(&self.vehicles),
            EntityKind::Driver => max_sequence(&self.drivers),
            EntityKind::Trip => max_sequence(&self.trips),
            EntityKind::MaintenanceLog => max_sequence(&self.maintenance_logs),
            EntityKind::FuelLog => max_sequence(&self.fuel_logs),
        };
        let issued = self.issued_ids.get(kind);
        format_next(kind.prefix(), present.max(issued))
    }

    /// Raises every watermark to cover the ids already in the collections.
    /// Call after building a state by hand (seed data, deserialized files).
    pub fn sync_issued_ids(&mut self) {
        let marks = &mut self.issued_ids;
        for v in &self.vehicles {
            marks.observe(EntityKind::Vehicle, &v.id);
        }
        for d in &self.drivers {
            marks.observe(EntityKind::Driver, &d.id);
        }
        for t in &self.trips {
            marks.observe(EntityKind::Trip, &t.id);
        }
        for m in &self.maintenance_logs {
            marks.observe(EntityKind::MaintenanceLog, &m.id);
        }
        for f in &self.fuel_logs {
            marks.observe(EntityKind::FuelLog, &f.id);
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
