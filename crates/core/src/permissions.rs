//! Static permission table and the access policy built on it.
//!
//! A permission key has the form `<resource>_<action>` (for example
//! `rezervasyonlar_write`). Each key maps to the set of canonical roles allowed
//! to perform it. A key missing from the table grants nothing.
//!
//! The table is built once at start-up and handed to the HTTP layer inside an
//! [`AccessPolicy`]; nothing mutates it afterwards.

use std::collections::{BTreeMap, BTreeSet};

use crate::roles::{Role, RoleMap};

use Role::{Admin, Operations, Reception};

/// Permission keys and their allowed roles as shipped.
pub const STANDARD_PERMISSIONS: &[(&str, &[Role])] = &[
    // Staff
    ("personel_read", &[Admin]),
    ("personel_write", &[Admin]),
    ("personel_delete", &[Admin]),
    // Customers
    ("musteriler_read", &[Admin, Reception]),
    ("musteriler_write", &[Admin, Reception]),
    ("musteriler_delete", &[Admin]),
    // Rooms
    ("odalar_read", &[Admin, Reception]),
    ("odalar_write", &[Admin]),
    ("odalar_delete", &[Admin]),
    // Room features
    ("oda_ozellikleri_read", &[Admin, Reception]),
    ("oda_ozellikleri_write", &[Admin]),
    // Reservations
    ("rezervasyonlar_read", &[Admin, Reception]),
    ("rezervasyonlar_write", &[Admin, Reception]),
    ("rezervasyonlar_delete", &[Admin]),
    // Payments
    ("odemeler_read", &[Admin]),
    ("odemeler_write", &[Admin]),
    ("odemeler_delete", &[Admin]),
    // Extra services
    ("ekstra_hizmetler_read", &[Admin, Reception]),
    ("ekstra_hizmetler_write", &[Admin]),
    ("ekstra_hizmetler_delete", &[Admin]),
    ("ekstra_hizmetler_status_update", &[Admin, Operations]),
    // Customer charges
    ("musteri_harcamalari_read", &[Admin]),
    ("musteri_harcamalari_write", &[Admin]),
    // Stock
    ("depo_stok_read", &[Admin, Operations]),
    ("depo_stok_write", &[Admin, Operations]),
    ("depo_stok_delete", &[Admin]),
    ("depo_stok_amount_update", &[Admin, Operations]),
    // Customer reviews
    ("musteri_degerlendirme_read", &[Admin, Reception]),
    ("musteri_degerlendirme_write", &[Admin, Reception]),
    // Reports and audit
    ("reports_read", &[Admin]),
    ("silinen_rezervasyon_log_read", &[Admin]),
    // Dashboard
    ("dashboard_read", &[Admin, Reception, Operations]),
];

/// Compose a permission key from a resource and an action.
pub fn permission_key(resource: &str, action: &str) -> String {
    format!("{resource}_{action}")
}

/// Immutable mapping from permission key to allowed roles.
#[derive(Debug, Clone, Default)]
pub struct PermissionTable {
    entries: BTreeMap<String, BTreeSet<Role>>,
}

impl PermissionTable {
    pub fn new<I, K, R>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, R)>,
        K: Into<String>,
        R: IntoIterator<Item = Role>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, roles)| (k.into(), roles.into_iter().collect()))
                .collect(),
        }
    }

    /// The table in [`STANDARD_PERMISSIONS`].
    pub fn standard() -> Self {
        Self::new(
            STANDARD_PERMISSIONS
                .iter()
                .map(|(key, roles)| (*key, roles.iter().copied())),
        )
    }

    /// `true` iff `role` is in the allowed set for `permission`.
    ///
    /// Unknown keys are denied, never an error.
    pub fn has_permission(&self, role: Role, permission: &str) -> bool {
        self.entries
            .get(permission)
            .is_some_and(|roles| roles.contains(&role))
    }

    /// Every key `role` holds, sorted. For introspection only; enforcement
    /// always goes through [`has_permission`](Self::has_permission).
    pub fn user_permissions(&self, role: Role) -> BTreeSet<&str> {
        self.entries
            .iter()
            .filter(|(_, roles)| roles.contains(&role))
            .map(|(key, _)| key.as_str())
            .collect()
    }

    /// Check `<resource>_<action>` for `role`.
    pub fn check_resource_access(&self, role: Role, resource: &str, action: &str) -> bool {
        self.has_permission(role, &permission_key(resource, action))
    }

    /// Roles allowed for `permission`; empty for unknown keys.
    pub fn allowed_roles(&self, permission: &str) -> Vec<Role> {
        self.entries
            .get(permission)
            .map(|roles| roles.iter().copied().collect())
            .unwrap_or_default()
    }

    pub fn contains_key(&self, permission: &str) -> bool {
        self.entries.contains_key(permission)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Job-title mapping plus permission table, shared read-only by request handlers.
#[derive(Debug, Clone)]
pub struct AccessPolicy {
    pub roles: RoleMap,
    pub permissions: PermissionTable,
}

impl AccessPolicy {
    pub fn new(roles: RoleMap, permissions: PermissionTable) -> Self {
        Self { roles, permissions }
    }

    pub fn standard() -> Self {
        Self::new(RoleMap::standard(), PermissionTable::standard())
    }

    pub fn normalize_role(&self, job_title: &str) -> Role {
        self.roles.normalize_role(job_title)
    }

    pub fn has_permission(&self, role: Role, permission: &str) -> bool {
        self.permissions.has_permission(role, permission)
    }

    pub fn user_permissions(&self, role: Role) -> BTreeSet<&str> {
        self.permissions.user_permissions(role)
    }
}

impl Default for AccessPolicy {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_may_delete_staff() {
        assert!(PermissionTable::standard().has_permission(Admin, "personel_delete"));
    }

    #[test]
    fn reception_may_not_delete_staff() {
        assert!(!PermissionTable::standard().has_permission(Reception, "personel_delete"));
    }

    #[test]
    fn unknown_permission_is_denied_for_everyone() {
        let table = PermissionTable::standard();
        for role in Role::ALL {
            assert!(!table.has_permission(role, "nonexistent_permission"));
        }
        assert!(table.allowed_roles("nonexistent_permission").is_empty());
    }

    #[test]
    fn reception_can_book_but_not_delete_reservations() {
        let table = PermissionTable::standard();
        assert!(table.has_permission(Reception, "rezervasyonlar_write"));
        assert!(!table.has_permission(Reception, "rezervasyonlar_delete"));
        assert!(!table.has_permission(Operations, "rezervasyonlar_read"));
    }

    #[test]
    fn operations_manages_stock_amounts_and_service_status() {
        let table = PermissionTable::standard();
        assert!(table.has_permission(Operations, "depo_stok_amount_update"));
        assert!(table.has_permission(Operations, "ekstra_hizmetler_status_update"));
        assert!(!table.has_permission(Operations, "depo_stok_delete"));
    }

    #[test]
    fn dashboard_is_open_to_every_role() {
        let table = PermissionTable::standard();
        for role in Role::ALL {
            assert!(table.has_permission(role, "dashboard_read"));
        }
    }

    #[test]
    fn admin_holds_every_key() {
        let table = PermissionTable::standard();
        assert_eq!(table.user_permissions(Admin).len(), table.len());
    }

    #[test]
    fn operations_permission_set() {
        let table = PermissionTable::standard();
        let perms = table.user_permissions(Operations);
        let expected: BTreeSet<&str> = [
            "dashboard_read",
            "depo_stok_amount_update",
            "depo_stok_read",
            "depo_stok_write",
            "ekstra_hizmetler_status_update",
        ]
        .into_iter()
        .collect();
        assert_eq!(perms, expected);
    }

    #[test]
    fn resource_access_composes_key() {
        let table = PermissionTable::standard();
        assert!(table.check_resource_access(Reception, "musteriler", "write"));
        assert!(!table.check_resource_access(Reception, "musteriler", "delete"));
        assert_eq!(permission_key("odalar", "read"), "odalar_read");
    }

    #[test]
    fn empty_table_denies_everything() {
        let table = PermissionTable::default();
        assert!(table.is_empty());
        assert!(!table.has_permission(Admin, "personel_read"));
    }

    #[test]
    fn injected_table_replaces_the_standard_one() {
        let policy = AccessPolicy::new(
            RoleMap::standard(),
            PermissionTable::new([("odalar_read", [Operations])]),
        );
        assert!(policy.has_permission(Operations, "odalar_read"));
        assert!(!policy.has_permission(Admin, "odalar_read"));
    }

    #[test]
    fn policy_normalizes_titles() {
        let policy = AccessPolicy::standard();
        assert_eq!(policy.normalize_role("Stok Sorumlusu"), Operations);
        assert_eq!(policy.normalize_role("Unknown Title"), Operations);
    }
}
