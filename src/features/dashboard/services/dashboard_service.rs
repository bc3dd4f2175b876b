use std::collections::BTreeMap;

use chrono::{Datelike, Days, Local, Months, NaiveDate};
use sqlx::PgPool;

use crate::core::error::{AppError, Result};
use crate::features::appointments::models::AppointmentStatus;
use crate::features::dashboard::dtos::{
    DailyCountDto, DashboardSummaryDto, DashboardTrendsDto, StatusSeriesDto,
};

/// Service for admin dashboard aggregates
pub struct DashboardService {
    pool: PgPool,
}

impl DashboardService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Appointment counts for yesterday, today and tomorrow by exact date
    pub async fn get_summary(&self) -> Result<DashboardSummaryDto> {
        let today = Local::now().date_naive();
        let yesterday = today.checked_sub_days(Days::new(1)).unwrap_or(today);
        let tomorrow = today.checked_add_days(Days::new(1)).unwrap_or(today);

        let (yesterday_count, today_count, tomorrow_count) =
            sqlx::query_as::<_, (i64, i64, i64)>(
                r#"
                SELECT
                    COUNT(*) FILTER (WHERE date = $1),
                    COUNT(*) FILTER (WHERE date = $2),
                    COUNT(*) FILTER (WHERE date = $3)
                FROM appointments
                "#,
            )
            .bind(yesterday)
            .bind(today)
            .bind(tomorrow)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to get summary counts: {:?}", e);
                AppError::Database(e)
            })?;

        Ok(DashboardSummaryDto {
            yesterday: yesterday_count,
            today: today_count,
            tomorrow: tomorrow_count,
        })
    }

    /// Per-day appointment volume for the current calendar month, overall
    /// and broken down by status
    pub async fn get_trends(&self) -> Result<DashboardTrendsDto> {
        let today = Local::now().date_naive();
        let (month_start, next_month_start) = month_bounds(today);

        let rows = sqlx::query_as::<_, (NaiveDate, AppointmentStatus)>(
            r#"
            SELECT date, status
            FROM appointments
            WHERE date >= $1 AND date < $2
            ORDER BY date
            "#,
        )
        .bind(month_start)
        .bind(next_month_start)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to fetch monthly appointments: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(build_trends(month_start.format("%Y-%m").to_string(), &rows))
    }
}

/// First day of the month containing `today` and first day of the next month
fn month_bounds(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    let start = today.with_day(1).unwrap_or(today);
    let next = start
        .checked_add_months(Months::new(1))
        .unwrap_or(NaiveDate::MAX);
    (start, next)
}

/// Aggregate (date, status) rows into the dashboard series.
///
/// Labels are the distinct dates that have at least one appointment, in
/// ascending order; each status series is aligned to those labels with
/// zeros filled in, matching how the admin chart builds its datasets.
fn build_trends(month: String, rows: &[(NaiveDate, AppointmentStatus)]) -> DashboardTrendsDto {
    let mut daily: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for (date, _) in rows {
        *daily.entry(*date).or_insert(0) += 1;
    }

    let labels: Vec<NaiveDate> = daily.keys().copied().collect();

    let mut by_status = Vec::new();
    for status in [
        AppointmentStatus::Pending,
        AppointmentStatus::Confirmed,
        AppointmentStatus::Cancelled,
        AppointmentStatus::Completed,
    ] {
        let mut per_day: BTreeMap<NaiveDate, i64> = BTreeMap::new();
        for (date, row_status) in rows {
            if *row_status == status {
                *per_day.entry(*date).or_insert(0) += 1;
            }
        }

        if per_day.is_empty() {
            continue;
        }

        by_status.push(StatusSeriesDto {
            status,
            points: labels
                .iter()
                .map(|date| DailyCountDto {
                    date: date.format("%Y-%m-%d").to_string(),
                    count: per_day.get(date).copied().unwrap_or(0),
                })
                .collect(),
        });
    }

    DashboardTrendsDto {
        month,
        daily: daily
            .into_iter()
            .map(|(date, count)| DailyCountDto {
                date: date.format("%Y-%m-%d").to_string(),
                count,
            })
            .collect(),
        by_status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, day).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        assert_eq!(
            month_bounds(d(15)),
            (d(1), NaiveDate::from_ymd_opt(2025, 7, 1).unwrap())
        );
        assert_eq!(
            month_bounds(NaiveDate::from_ymd_opt(2025, 12, 31).unwrap()),
            (
                NaiveDate::from_ymd_opt(2025, 12, 1).unwrap(),
                NaiveDate::from_ymd_opt(2026, 1, 1).unwrap()
            )
        );
    }

    #[test]
    fn test_build_trends_empty() {
        let trends = build_trends("2025-06".to_string(), &[]);
        assert!(trends.daily.is_empty());
        assert!(trends.by_status.is_empty());
    }

    #[test]
    fn test_build_trends_counts_and_ordering() {
        let rows = vec![
            (d(10), AppointmentStatus::Pending),
            (d(3), AppointmentStatus::Pending),
            (d(10), AppointmentStatus::Cancelled),
            (d(10), AppointmentStatus::Pending),
        ];

        let trends = build_trends("2025-06".to_string(), &rows);

        assert_eq!(
            trends.daily,
            vec![
                DailyCountDto {
                    date: "2025-06-03".to_string(),
                    count: 1
                },
                DailyCountDto {
                    date: "2025-06-10".to_string(),
                    count: 3
                },
            ]
        );

        // Only statuses that occur get a series, aligned to the daily labels
        assert_eq!(trends.by_status.len(), 2);
        let pending = &trends.by_status[0];
        assert_eq!(pending.status, AppointmentStatus::Pending);
        assert_eq!(
            pending.points,
            vec![
                DailyCountDto {
                    date: "2025-06-03".to_string(),
                    count: 1
                },
                DailyCountDto {
                    date: "2025-06-10".to_string(),
                    count: 2
                },
            ]
        );

        let cancelled = &trends.by_status[1];
        assert_eq!(cancelled.status, AppointmentStatus::Cancelled);
        assert_eq!(cancelled.points[0].count, 0);
        assert_eq!(cancelled.points[1].count, 1);
    }
}
