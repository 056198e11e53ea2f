//! # Capability Model
//!
//! Who may submit which kind of action. The engine itself never checks;
//! the store asks a [`Capability`] before dispatching.
//!
//! ```text
//! ┌──────────┬──────┬────────┬────────┬────────┬────────┐
//! │ Role     │ read │ create │ update │ delete │ export │
//! ├──────────┼──────┼────────┼────────┼────────┼────────┤
//! │ Admin    │  ✓   │   ✓    │   ✓    │   ✓    │   ✓    │
//! │ Manager  │  ✓   │   ✓    │   ✓    │        │   ✓    │
//! │ Viewer   │  ✓   │        │        │        │        │
//! └──────────┴──────┴────────┴────────┴────────┴────────┘
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum Permission {
    Read,
    Create,
    Update,
    Delete,
    Export,
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Permission::Read => "read",
            Permission::Create => "create",
            Permission::Update => "update",
            Permission::Delete => "delete",
            Permission::Export => "export",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Role {
    Admin,
    Manager,
    #[default]
    Viewer,
}

impl Role {
    pub fn permissions(&self) -> &'static [Permission] {
        match self {
            Role::Admin => &[
                Permission::Read,
                Permission::Create,
                Permission::Update,
                Permission::Delete,
                Permission::Export,
            ],
            Role::Manager => &[
                Permission::Read,
                Permission::Create,
                Permission::Update,
                Permission::Export,
            ],
            Role::Viewer => &[Permission::Read],
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Admin => "Admin",
            Role::Manager => "Manager",
            Role::Viewer => "Viewer",
        };
        f.write_str(label)
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "manager" => Ok(Role::Manager),
            "viewer" => Ok(Role::Viewer),
            other => Err(format!(
                "Unknown role: '{}'. Valid options: admin, manager, viewer",
                other
            )),
        }
    }
}

/// The `can(action)` predicate a caller supplies to the store.
pub trait Capability {
    fn can(&self, permission: Permission) -> bool;
}

impl Capability for Role {
    fn can(&self, permission: Permission) -> bool {
        self.permissions().contains(&permission)
    }
}

/// No role (nobody signed in) may do nothing.
impl<C: Capability> Capability for Option<C> {
    fn can(&self, permission: Permission) -> bool {
        self.as_ref().is_some_and(|c| c.can(permission))
    }
}

impl<F> Capability for F
where
    F: Fn(Permission) -> bool,
{
    fn can(&self, permission: Permission) -> bool {
        self(permission)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_table() {
        assert!(Role::Admin.can(Permission::Delete));
        assert!(Role::Manager.can(Permission::Export));
        assert!(!Role::Manager.can(Permission::Delete));
        assert!(Role::Viewer.can(Permission::Read));
        assert!(!Role::Viewer.can(Permission::Create));
    }

    #[test]
    fn test_signed_out_can_nothing() {
        let nobody: Option<Role> = None;
        assert!(!nobody.can(Permission::Read));
        assert!(Some(Role::Viewer).can(Permission::Read));
    }

    #[test]
    fn test_closure_predicate() {
        let read_only = |p: Permission| p == Permission::Read;
        assert!(read_only.can(Permission::Read));
        assert!(!read_only.can(Permission::Update));
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("Manager".parse::<Role>().unwrap(), Role::Manager);
        assert_eq!(" admin ".parse::<Role>().unwrap(), Role::Admin);
        assert!("driver".parse::<Role>().is_err());
    }
}
