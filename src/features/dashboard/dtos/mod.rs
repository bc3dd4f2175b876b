mod dashboard_dto;

pub use dashboard_dto::{DailyCountDto, DashboardSummaryDto, DashboardTrendsDto, StatusSeriesDto};
