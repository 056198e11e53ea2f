//! # Config Commands

use std::path::PathBuf;

use fleet_core::{Capability, Permission};
use serde::Serialize;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::FleetConfig;

/// Gets the current configuration (read-only).
pub fn get_config(config: &FleetConfig) -> FleetConfig {
    debug!("get_config command");
    config.clone()
}

/// Re-reads configuration from file and environment. A broken file is
/// reported to the caller as an `INTERNAL` error.
pub fn reload_config(config_path: Option<PathBuf>) -> Result<FleetConfig, ApiError> {
    debug!(?config_path, "reload_config command");
    let config = FleetConfig::load(config_path)?;
    info!(role = %config.default_role, "Config reloaded");
    Ok(config)
}

/// What the caller may do, for enabling and disabling UI controls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilitySummary {
    pub permissions: Vec<Permission>,
}

pub fn get_capabilities(caps: &impl Capability) -> CapabilitySummary {
    debug!("get_capabilities command");
    let all = [
        Permission::Read,
        Permission::Create,
        Permission::Update,
        Permission::Delete,
        Permission::Export,
    ];
    CapabilitySummary {
        permissions: all.into_iter().filter(|p| caps.can(*p)).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fleet_core::Role;

    #[test]
    fn test_manager_capabilities() {
        let summary = get_capabilities(&Role::Manager);
        assert!(!summary.permissions.contains(&Permission::Delete));
        assert_eq!(summary.permissions.len(), 4);

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["permissions"][0], "read");
    }

    #[test]
    fn test_reload_reports_broken_file() {
        let path = std::env::temp_dir().join(format!("fleet-reload-{}.toml", std::process::id()));
        std::fs::write(&path, "seed_demo_data = \"maybe\"\n").unwrap();

        let err = reload_config(Some(path.clone())).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(err.code, crate::error::ErrorCode::Internal);
        assert!(err.message.starts_with("Invalid config file"));
    }

    #[test]
    fn test_get_config_is_a_copy() {
        let config = FleetConfig::default();
        assert_eq!(get_config(&config), config);
    }
}
