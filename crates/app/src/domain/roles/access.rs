//! Role classification and per-page capability checks.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// A stored role label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Admin,
    SuperAdmin,
}

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for Role {
    type Err = UnknownRole;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "admin" => Ok(Self::Admin),
            "super_admin" => Ok(Self::SuperAdmin),
            other => Err(UnknownRole(other.to_string())),
        }
    }
}

/// The effective access level of an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum Access {
    #[default]
    None,
    Admin,
    SuperAdmin,
}

impl Access {
    /// Classify a set of roles; the highest role wins.
    #[must_use]
    pub fn from_roles<'a>(roles: impl IntoIterator<Item = &'a Role>) -> Self {
        roles
            .into_iter()
            .map(|role| match role {
                Role::Admin => Self::Admin,
                Role::SuperAdmin => Self::SuperAdmin,
            })
            .max()
            .unwrap_or_default()
    }

    /// Whether this access level satisfies `required`.
    #[must_use]
    pub fn permits(self, required: RequiredAccess) -> bool {
        match required {
            RequiredAccess::Admin => matches!(self, Self::Admin | Self::SuperAdmin),
            RequiredAccess::SuperAdmin => self == Self::SuperAdmin,
        }
    }
}

/// Capability a page demands of its caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredAccess {
    /// Admin or super admin.
    Admin,

    /// Super admin only.
    SuperAdmin,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_roles_means_no_access() {
        assert_eq!(Access::from_roles(&[]), Access::None);
    }

    #[test]
    fn highest_role_wins() {
        assert_eq!(
            Access::from_roles(&[Role::Admin, Role::SuperAdmin]),
            Access::SuperAdmin
        );
        assert_eq!(Access::from_roles(&[Role::Admin]), Access::Admin);
    }

    #[test]
    fn admin_pages_accept_admin_and_super_admin() {
        assert!(Access::Admin.permits(RequiredAccess::Admin));
        assert!(Access::SuperAdmin.permits(RequiredAccess::Admin));
        assert!(!Access::None.permits(RequiredAccess::Admin));
    }

    #[test]
    fn super_admin_pages_accept_only_super_admin() {
        assert!(Access::SuperAdmin.permits(RequiredAccess::SuperAdmin));
        assert!(!Access::Admin.permits(RequiredAccess::SuperAdmin));
        assert!(!Access::None.permits(RequiredAccess::SuperAdmin));
    }

    #[test]
    fn role_labels_round_trip_through_strings() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        assert_eq!("super_admin".parse::<Role>(), Ok(Role::SuperAdmin));
        assert!("Admin".parse::<Role>().is_err());
        assert!("editor".parse::<Role>().is_err());
    }
}
