use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post, put},
    Router,
};

use crate::features::appointments::handlers::{
    cancel_appointment, create_appointment, delete_appointment, get_appointment,
    list_appointments, update_appointment, AppointmentState,
};

/// Create routes for the appointments feature
///
/// The body limit leaves headroom above the upload cap for multipart
/// framing overhead.
pub fn routes(state: AppointmentState, max_upload_size: usize) -> Router {
    Router::new()
        .route(
            "/api/appointments",
            post(create_appointment).get(list_appointments),
        )
        .route(
            "/api/appointments/{id}",
            get(get_appointment)
                .put(update_appointment)
                .delete(delete_appointment),
        )
        .route("/api/appointments/{id}/cancel", put(cancel_appointment))
        .layer(DefaultBodyLimit::max(max_upload_size + 1024 * 1024))
        .with_state(state)
}
