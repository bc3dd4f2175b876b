use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::features::appointments::models::AppointmentStatus;

/// Appointment counts by exact date around today
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardSummaryDto {
    pub yesterday: i64,
    pub today: i64,
    pub tomorrow: i64,
}

/// One point in a per-day series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DailyCountDto {
    /// Calendar date as `YYYY-MM-DD`
    pub date: String,
    pub count: i64,
}

/// Per-day counts for one status, aligned to the overall daily labels
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusSeriesDto {
    pub status: AppointmentStatus,
    pub points: Vec<DailyCountDto>,
}

/// Current-month appointment volume, overall and broken down by status
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DashboardTrendsDto {
    /// Month the series covers, as `YYYY-MM`
    pub month: String,
    pub daily: Vec<DailyCountDto>,
    pub by_status: Vec<StatusSeriesDto>,
}
