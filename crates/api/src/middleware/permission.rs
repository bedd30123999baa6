//! Permission-key extractor.
//!
//! Each protected handler names the key it needs as a type parameter:
//!
//! ```ignore
//! async fn delete_room(
//!     State(state): State<AppState>,
//!     _auth: Authorized<perm::RoomsDelete>,
//!     Path(id): Path<DbId>,
//! ) -> AppResult<StatusCode> { ... }
//! ```
//!
//! The check runs on every request against the [`AccessPolicy`] in
//! [`AppState`]; nothing is cached between requests.
//!
//! [`AccessPolicy`]: hotel_core::permissions::AccessPolicy

use std::marker::PhantomData;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use hotel_core::error::CoreError;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// A permission key known at compile time.
pub trait PermissionKey: Send + Sync + 'static {
    const KEY: &'static str;
}

/// An authenticated staff member whose role holds permission `P`.
///
/// Rejects with 401 when the token is missing or invalid and with 403 when
/// the role lacks the key (including keys absent from the table).
pub struct Authorized<P: PermissionKey> {
    pub user: AuthUser,
    _permission: PhantomData<P>,
}

impl<P: PermissionKey> FromRequestParts<AppState> for Authorized<P> {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;

        if !state.access.has_permission(user.role, P::KEY) {
            tracing::warn!(
                staff_id = user.staff_id,
                role = %user.role,
                permission = P::KEY,
                "Permission denied",
            );
            return Err(AppError::Core(CoreError::Forbidden(format!(
                "Role {} lacks permission '{}'",
                user.role,
                P::KEY
            ))));
        }

        Ok(Authorized {
            user,
            _permission: PhantomData,
        })
    }
}

macro_rules! permission_keys {
    ($($(#[$meta:meta])* $name:ident => $key:literal),* $(,)?) => {
        $(
            $(#[$meta])*
            pub struct $name;

            impl PermissionKey for $name {
                const KEY: &'static str = $key;
            }
        )*
    };
}

/// Marker types for the permission keys routes require.
pub mod perm {
    use super::PermissionKey;

    permission_keys! {
        StaffRead => "personel_read",
        StaffWrite => "personel_write",
        StaffDelete => "personel_delete",

        CustomersRead => "musteriler_read",
        CustomersWrite => "musteriler_write",
        CustomersDelete => "musteriler_delete",

        RoomsRead => "odalar_read",
        RoomsWrite => "odalar_write",
        RoomsDelete => "odalar_delete",

        ReservationsRead => "rezervasyonlar_read",
        ReservationsWrite => "rezervasyonlar_write",
        ReservationsDelete => "rezervasyonlar_delete",
        /// Read access to the deleted-reservation audit log.
        DeletedReservationsRead => "silinen_rezervasyon_log_read",

        PaymentsRead => "odemeler_read",
        PaymentsWrite => "odemeler_write",
        PaymentsDelete => "odemeler_delete",

        ServicesRead => "ekstra_hizmetler_read",
        ServicesWrite => "ekstra_hizmetler_write",
        ServicesDelete => "ekstra_hizmetler_delete",
        ServicesStatusUpdate => "ekstra_hizmetler_status_update",

        ChargesRead => "musteri_harcamalari_read",
        ChargesWrite => "musteri_harcamalari_write",

        StockRead => "depo_stok_read",
        StockWrite => "depo_stok_write",
        StockDelete => "depo_stok_delete",
        StockAmountUpdate => "depo_stok_amount_update",

        ReviewsRead => "musteri_degerlendirme_read",
        ReviewsWrite => "musteri_degerlendirme_write",

        ReportsRead => "reports_read",
        DashboardRead => "dashboard_read",
    }
}
