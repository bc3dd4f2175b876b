use chrono::{Local, NaiveDate, NaiveTime};
use sqlx::PgPool;
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::features::appointments::dtos::{AppointmentFormDto, AppointmentResponseDto};
use crate::features::appointments::models::{Appointment, AppointmentStatus};
use crate::shared::validation::{is_within_booking_window, parse_booking_date, parse_booking_time};

/// Validated write fields extracted from a form submission
#[derive(Debug)]
struct BookingFields {
    name: String,
    phone: String,
    date: NaiveDate,
    time: NaiveTime,
    reason: Option<String>,
    status: Option<AppointmentStatus>,
}

/// Service owning the appointment lifecycle and its validation rules.
///
/// Every operation is a single SQL statement; there is no slot-conflict
/// check here, so double bookings are only prevented advisorily by the
/// booking form against previously fetched data.
pub struct AppointmentService {
    pool: PgPool,
}

impl AppointmentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Book a new appointment and return the generated id.
    ///
    /// The booking date must lie within `[today, today + 3 months]`.
    /// Status defaults to `pending` when absent.
    pub async fn create(&self, form: AppointmentFormDto) -> Result<i64> {
        let fields = validate_form(&form)?;
        ensure_bookable(fields.date, Local::now().date_naive())?;

        let status = fields.status.unwrap_or_default();

        let id = sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO appointments (name, phone, date, time, reason, status, prescription_file)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.phone)
        .bind(fields.date)
        .bind(fields.time)
        .bind(&fields.reason)
        .bind(status)
        .bind(&form.prescription_file)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to create appointment: {:?}", e);
            AppError::Database(e)
        })?;

        tracing::info!(
            "Appointment created: id={}, date={}, time={}",
            id,
            fields.date,
            fields.time.format("%H:%M")
        );

        Ok(id)
    }

    /// List all appointments ordered by (date, time) ascending
    pub async fn list(&self) -> Result<Vec<AppointmentResponseDto>> {
        let appointments = sqlx::query_as::<_, Appointment>(
            r#"
            SELECT id, name, phone, date, time, reason, status, prescription_file,
                   created_at, updated_at
            FROM appointments
            ORDER BY date, time
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to list appointments: {:?}", e);
            AppError::Database(e)
        })?;

        Ok(appointments.into_iter().map(|a| a.into()).collect())
    }

    pub async fn get_by_id(&self, id: i64) -> Result<AppointmentResponseDto> {
        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            SELECT id, name, phone, date, time, reason, status, prescription_file,
                   created_at, updated_at
            FROM appointments
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to get appointment {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        appointment
            .map(|a| a.into())
            .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))
    }

    /// Update an appointment.
    ///
    /// Required fields are validated like on create, but the booking window
    /// is deliberately not re-checked. Status and attachment are tri-state:
    /// omitting them preserves the stored value, while reason is always
    /// written (omission clears it).
    pub async fn update(&self, id: i64, form: AppointmentFormDto) -> Result<()> {
        let fields = validate_form(&form)?;

        let result = sqlx::query(
            r#"
            UPDATE appointments
            SET name = $1,
                phone = $2,
                date = $3,
                time = $4,
                reason = $5,
                status = COALESCE($6, status),
                prescription_file = COALESCE($7, prescription_file),
                updated_at = NOW()
            WHERE id = $8
            "#,
        )
        .bind(&fields.name)
        .bind(&fields.phone)
        .bind(fields.date)
        .bind(fields.time)
        .bind(&fields.reason)
        .bind(fields.status)
        .bind(&form.prescription_file)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to update appointment {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Appointment not found".to_string()));
        }

        tracing::info!("Appointment updated: id={}", id);
        Ok(())
    }

    /// Force `status = cancelled` regardless of the current status
    pub async fn cancel(&self, id: i64) -> Result<()> {
        let result = sqlx::query(
            r#"
            UPDATE appointments
            SET status = $1, updated_at = NOW()
            WHERE id = $2
            "#,
        )
        .bind(AppointmentStatus::Cancelled)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to cancel appointment {}: {:?}", id, e);
            AppError::Database(e)
        })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Appointment not found".to_string()));
        }

        tracing::info!("Appointment cancelled: id={}", id);
        Ok(())
    }

    /// Hard-delete the row. Any prescription file on disk is left behind.
    pub async fn delete(&self, id: i64) -> Result<()> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete appointment {}: {:?}", id, e);
                AppError::Database(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Appointment not found".to_string()));
        }

        tracing::info!("Appointment deleted: id={}", id);
        Ok(())
    }
}

/// Check required fields and wire formats shared by create and update
fn validate_form(form: &AppointmentFormDto) -> Result<BookingFields> {
    form.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let name = required_field(&form.name)?;
    let phone = required_field(&form.phone)?;
    let date_raw = required_field(&form.date)?;
    let time_raw = required_field(&form.time)?;

    let date = parse_booking_date(&date_raw)
        .ok_or_else(|| AppError::Validation("Invalid date, expected YYYY-MM-DD".to_string()))?;
    let time = parse_booking_time(&time_raw)
        .ok_or_else(|| AppError::Validation("Invalid time, expected HH:mm".to_string()))?;

    let status = match form.status.as_deref().map(str::trim) {
        None | Some("") => None,
        Some(raw) => Some(
            raw.parse::<AppointmentStatus>()
                .map_err(AppError::Validation)?,
        ),
    };

    let reason = form
        .reason
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    Ok(BookingFields {
        name,
        phone,
        date,
        time,
        reason,
        status,
    })
}

fn required_field(value: &Option<String>) -> Result<String> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .ok_or_else(|| AppError::Validation("Required fields are missing".to_string()))
}

fn ensure_bookable(date: NaiveDate, today: NaiveDate) -> Result<()> {
    if !is_within_booking_window(date, today) {
        return Err(AppError::Validation(
            "Appointment date must be within the next 3 months and cannot be in the past"
                .to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> AppointmentFormDto {
        AppointmentFormDto {
            name: Some("Jane Doe".to_string()),
            phone: Some("555-0100".to_string()),
            date: Some("2025-07-04".to_string()),
            time: Some("10:00".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_form_accepts_minimal_booking() {
        let fields = validate_form(&valid_form()).unwrap();
        assert_eq!(fields.name, "Jane Doe");
        assert_eq!(fields.date, NaiveDate::from_ymd_opt(2025, 7, 4).unwrap());
        assert_eq!(fields.time, NaiveTime::from_hms_opt(10, 0, 0).unwrap());
        assert_eq!(fields.reason, None);
        assert_eq!(fields.status, None);
    }

    #[test]
    fn test_validate_form_rejects_missing_required_fields() {
        for strip in ["name", "phone", "date", "time"] {
            let mut form = valid_form();
            match strip {
                "name" => form.name = None,
                "phone" => form.phone = Some("   ".to_string()),
                "date" => form.date = Some(String::new()),
                _ => form.time = None,
            }
            let err = validate_form(&form).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "field: {}", strip);
        }
    }

    #[test]
    fn test_validate_form_rejects_bad_formats() {
        let mut form = valid_form();
        form.date = Some("04/07/2025".to_string());
        assert!(matches!(
            validate_form(&form),
            Err(AppError::Validation(_))
        ));

        let mut form = valid_form();
        form.time = Some("10:00:00".to_string());
        assert!(matches!(
            validate_form(&form),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_form_parses_status_case_insensitively() {
        let mut form = valid_form();
        form.status = Some("Confirmed".to_string());
        let fields = validate_form(&form).unwrap();
        assert_eq!(fields.status, Some(AppointmentStatus::Confirmed));

        let mut form = valid_form();
        form.status = Some("no-show".to_string());
        assert!(matches!(
            validate_form(&form),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_form_blank_status_treated_as_omitted() {
        let mut form = valid_form();
        form.status = Some(String::new());
        let fields = validate_form(&form).unwrap();
        assert_eq!(fields.status, None);
    }

    #[test]
    fn test_ensure_bookable_boundaries() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert!(ensure_bookable(today, today).is_ok());
        assert!(ensure_bookable(NaiveDate::from_ymd_opt(2025, 9, 15).unwrap(), today).is_ok());
        assert!(ensure_bookable(NaiveDate::from_ymd_opt(2025, 9, 16).unwrap(), today).is_err());
        assert!(ensure_bookable(NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(), today).is_err());
    }
}
