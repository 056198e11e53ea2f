//! # State Module
//!
//! Runtime state for a Fleet Ops host process.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Host (CLI, server, UI shell)               │   │
//! │  │  let config = FleetConfig::load(None)?;                         │   │
//! │  │  let store  = FleetStore::new(seed::demo_state());              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │                 ┌────────────┴────────────┐                             │
//! │                 ▼                         ▼                             │
//! │  ┌──────────────────────────┐  ┌──────────────────────────┐            │
//! │  │       FleetStore         │  │       FleetConfig        │            │
//! │  │                          │  │                          │            │
//! │  │  Arc<Mutex<              │  │  currency                │            │
//! │  │    Arc<FleetState>       │  │  default role            │            │
//! │  │  >>                      │  │  demo data on/off        │            │
//! │  └──────────────────────────┘  └──────────────────────────┘            │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • FleetStore: one writer at a time, snapshots shared by Arc           │
//! │  • FleetConfig: read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod store;

pub use config::{FleetConfig, DEFAULT_CONFIG_FILE};
pub use store::{authorize, FleetStore};
