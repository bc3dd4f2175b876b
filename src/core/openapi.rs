use utoipa::{Modify, OpenApi};

use crate::features::appointments::{dtos as appointments_dtos, handlers as appointments_handlers};
use crate::features::appointments::models as appointments_models;
use crate::features::dashboard::{dtos as dashboard_dtos, handlers as dashboard_handlers};
use crate::shared::types::MessageResponse;

#[derive(OpenApi)]
#[openapi(
    paths(
        // Appointments
        appointments_handlers::create_appointment,
        appointments_handlers::list_appointments,
        appointments_handlers::get_appointment,
        appointments_handlers::update_appointment,
        appointments_handlers::cancel_appointment,
        appointments_handlers::delete_appointment,
        // Dashboard
        dashboard_handlers::get_summary,
        dashboard_handlers::get_trends,
    ),
    components(
        schemas(
            // Shared
            MessageResponse,
            // Appointments
            appointments_models::AppointmentStatus,
            appointments_dtos::AppointmentResponseDto,
            appointments_dtos::AppointmentMultipartDto,
            appointments_dtos::CreatedAppointmentResponse,
            // Dashboard
            dashboard_dtos::DashboardSummaryDto,
            dashboard_dtos::DailyCountDto,
            dashboard_dtos::StatusSeriesDto,
            dashboard_dtos::DashboardTrendsDto,
        )
    ),
    tags(
        (name = "appointments", description = "Appointment booking and management"),
        (name = "dashboard", description = "Aggregated appointment metrics for the admin dashboard"),
    ),
    info(
        title = "Botika API",
        version = "0.1.0",
        description = "Pharmacy appointment booking API",
    )
)]
pub struct ApiDoc;

/// Modifier to override OpenAPI info from config
pub struct SwaggerInfoModifier {
    pub title: String,
    pub version: String,
    pub description: String,
}

impl Modify for SwaggerInfoModifier {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        openapi.info.title = self.title.clone();
        openapi.info.version = self.version.clone();
        openapi.info.description = Some(self.description.clone());
    }
}
