//! Admin dashboard metrics.
//!
//! Serves the counters and time series the admin page renders: exact-date
//! counts for yesterday/today/tomorrow, and current-month appointment
//! volume per day overall and per status.

pub mod dtos;
pub mod handlers;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::DashboardService;
