//! Appointment booking feature.
//!
//! The system of record is a single `appointments` table; this feature owns
//! its lifecycle: booking with date-window validation, listing in slot
//! order, editing, cancellation and hard deletion, plus the prescription
//! attachment reference.
//!
//! ## Endpoints
//!
//! | Method | Endpoint | Description |
//! |--------|----------|-------------|
//! | POST | `/api/appointments` | Book an appointment (multipart) |
//! | GET | `/api/appointments` | List all appointments |
//! | GET | `/api/appointments/{id}` | Get one appointment |
//! | PUT | `/api/appointments/{id}` | Update an appointment (multipart) |
//! | PUT | `/api/appointments/{id}/cancel` | Cancel an appointment |
//! | DELETE | `/api/appointments/{id}` | Delete an appointment |

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use routes::routes;
pub use services::AppointmentService;
