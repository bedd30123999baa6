//! Canonical staff roles and the job-title mapping that assigns them.
//!
//! Staff records carry a free-text job title. At login the title is reduced to
//! one of three canonical roles through a [`RoleMap`]; only the canonical role
//! travels in the access token.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the three roles the permission table is written against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Reception,
    Operations,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Reception, Role::Operations];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Reception => "RECEPTION",
            Role::Operations => "OPERATIONS",
        }
    }

    /// Roles whose resources this role may act on, including itself.
    pub fn accessible_roles(self) -> &'static [Role] {
        match self {
            Role::Admin => &[Role::Admin, Role::Reception, Role::Operations],
            Role::Reception => &[Role::Reception, Role::Operations],
            Role::Operations => &[Role::Operations],
        }
    }

    /// Hierarchy check: ADMIN covers RECEPTION covers OPERATIONS.
    pub fn can_access_role(self, required: Role) -> bool {
        self.accessible_roles().contains(&required)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ADMIN" => Ok(Role::Admin),
            "RECEPTION" => Ok(Role::Reception),
            "OPERATIONS" => Ok(Role::Operations),
            other => Err(CoreError::Validation(format!("Unknown role '{other}'"))),
        }
    }
}

/// Job titles recognised out of the box, with the role each one grants.
pub const STANDARD_JOB_TITLES: &[(&str, Role)] = &[
    ("Genel Müdür", Role::Admin),
    ("Yönetici", Role::Admin),
    ("Resepsiyon Şefi", Role::Reception),
    ("Resepsiyonist", Role::Reception),
    ("Mutfak Şefi", Role::Operations),
    ("Operasyon Şefi", Role::Operations),
    ("Stok Sorumlusu", Role::Operations),
];

/// Role given to any title missing from the map.
pub const DEFAULT_ROLE: Role = Role::Operations;

/// Immutable job-title to role lookup.
///
/// Matching is exact: no trimming, no case folding.
#[derive(Debug, Clone)]
pub struct RoleMap {
    titles: HashMap<String, Role>,
    fallback: Role,
}

impl RoleMap {
    pub fn new<I, S>(titles: I, fallback: Role) -> Self
    where
        I: IntoIterator<Item = (S, Role)>,
        S: Into<String>,
    {
        Self {
            titles: titles.into_iter().map(|(t, r)| (t.into(), r)).collect(),
            fallback,
        }
    }

    /// The hotel's standard title table with [`DEFAULT_ROLE`] as fallback.
    pub fn standard() -> Self {
        Self::new(STANDARD_JOB_TITLES.iter().copied(), DEFAULT_ROLE)
    }

    /// Map a job title to its canonical role, falling back for unknown titles.
    pub fn normalize_role(&self, job_title: &str) -> Role {
        self.lookup(job_title).unwrap_or(self.fallback)
    }

    /// Exact lookup without the fallback.
    pub fn lookup(&self, job_title: &str) -> Option<Role> {
        self.titles.get(job_title).copied()
    }

    pub fn is_mapped(&self, job_title: &str) -> bool {
        self.titles.contains_key(job_title)
    }

    /// Titles mapped to `role`, sorted.
    pub fn titles_for(&self, role: Role) -> Vec<&str> {
        let mut titles: Vec<&str> = self
            .titles
            .iter()
            .filter(|(_, r)| **r == role)
            .map(|(t, _)| t.as_str())
            .collect();
        titles.sort_unstable();
        titles
    }
}

impl Default for RoleMap {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn general_manager_is_admin() {
        assert_eq!(RoleMap::standard().normalize_role("Genel Müdür"), Role::Admin);
    }

    #[test]
    fn unknown_title_defaults_to_operations() {
        let map = RoleMap::standard();
        assert_eq!(map.normalize_role("Unknown Title"), Role::Operations);
        assert!(!map.is_mapped("Unknown Title"));
    }

    #[test]
    fn every_standard_title_maps_as_declared() {
        let map = RoleMap::standard();
        for (title, role) in STANDARD_JOB_TITLES {
            assert_eq!(map.normalize_role(title), *role, "title {title}");
        }
    }

    #[test]
    fn lookup_is_case_and_whitespace_sensitive() {
        let map = RoleMap::standard();
        assert_eq!(map.lookup("genel müdür"), None);
        assert_eq!(map.lookup(" Genel Müdür"), None);
        assert_eq!(map.normalize_role("resepsiyonist"), Role::Operations);
    }

    #[test]
    fn custom_map_uses_its_own_fallback() {
        let map = RoleMap::new([("Night Auditor", Role::Reception)], Role::Reception);
        assert_eq!(map.normalize_role("Night Auditor"), Role::Reception);
        assert_eq!(map.normalize_role("Gardener"), Role::Reception);
    }

    #[test]
    fn titles_for_reception() {
        assert_eq!(
            RoleMap::standard().titles_for(Role::Reception),
            vec!["Resepsiyon Şefi", "Resepsiyonist"]
        );
    }

    #[test]
    fn hierarchy() {
        assert!(Role::Admin.can_access_role(Role::Operations));
        assert!(Role::Reception.can_access_role(Role::Operations));
        assert!(!Role::Reception.can_access_role(Role::Admin));
        assert!(!Role::Operations.can_access_role(Role::Reception));
    }

    #[test]
    fn parses_and_displays_canonical_names() {
        for role in Role::ALL {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
        assert!("admin".parse::<Role>().is_err());
    }
}
