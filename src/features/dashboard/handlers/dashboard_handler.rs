use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::Result;
use crate::features::dashboard::dtos::{DashboardSummaryDto, DashboardTrendsDto};
use crate::features::dashboard::services::DashboardService;
use crate::shared::types::MessageResponse;

/// Appointment counts for yesterday, today and tomorrow
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    responses(
        (status = 200, description = "Counts by exact date", body = DashboardSummaryDto),
        (status = 500, description = "Unexpected error", body = MessageResponse)
    ),
    tag = "dashboard"
)]
pub async fn get_summary(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<DashboardSummaryDto>> {
    let summary = service.get_summary().await?;
    Ok(Json(summary))
}

/// Current-month appointment volume per day and per status
#[utoipa::path(
    get,
    path = "/api/dashboard/trends",
    responses(
        (status = 200, description = "Current-month series", body = DashboardTrendsDto),
        (status = 500, description = "Unexpected error", body = MessageResponse)
    ),
    tag = "dashboard"
)]
pub async fn get_trends(
    State(service): State<Arc<DashboardService>>,
) -> Result<Json<DashboardTrendsDto>> {
    let trends = service.get_trends().await?;
    Ok(Json(trends))
}
