pub mod auth;
pub mod customer;
pub mod dashboard;
pub mod health;
pub mod payment;
pub mod report;
pub mod reservation;
pub mod room;
pub mod service;
pub mod staff;
pub mod stock;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Every route except `/auth/login` and `/auth/refresh` requires a bearer
/// token; each handler additionally names the permission key it needs.
///
/// ```text
/// /auth/login, /auth/refresh, /auth/logout, /auth/me
///
/// /staff                         personel_*
/// /customers                     musteriler_*
/// /customers/{id}/charges        musteri_harcamalari_read
/// /customers/{id}/reviews        musteri_degerlendirme_read
/// /customers/{id}/payments       odemeler_read
/// /rooms                         odalar_*
/// /rooms/{id}/availability       rezervasyonlar_read
/// /reservations                  rezervasyonlar_*
/// /reservations/deleted          silinen_rezervasyon_log_read
/// /reservations/{id}/payments    odemeler_read
/// /reservations/{id}/charges     musteri_harcamalari_write
/// /reservations/{id}/review      musteri_degerlendirme_write
/// /payments                      odemeler_*
/// /services                      ekstra_hizmetler_*
/// /stock                         depo_stok_*
/// /reports                       reports_read
/// /dashboard                     dashboard_read
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/staff", staff::router())
        .nest("/customers", customer::router())
        .nest("/rooms", room::router())
        .nest("/reservations", reservation::router())
        .nest("/payments", payment::router())
        .nest("/services", service::router())
        .nest("/stock", stock::router())
        .nest("/reports", report::router())
        .nest("/dashboard", dashboard::router())
}
