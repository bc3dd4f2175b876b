use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::features::appointments::models::{Appointment, AppointmentStatus};

/// Tri-state form fields assembled from a multipart request body.
///
/// Every field is optional at this layer so the service can tell "omitted"
/// apart from "supplied": on update, an omitted status or attachment
/// preserves the stored value. `prescription_file` is the stored filename,
/// filled in by the handler after the upload has been written to disk.
#[derive(Debug, Clone, Default, Validate)]
pub struct AppointmentFormDto {
    #[validate(length(max = 255, message = "Name must not exceed 255 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 50, message = "Phone must not exceed 50 characters"))]
    pub phone: Option<String>,

    /// Calendar date in `YYYY-MM-DD`
    pub date: Option<String>,

    /// 24-hour time in `HH:mm`
    pub time: Option<String>,

    #[validate(length(max = 5000, message = "Reason must not exceed 5000 characters"))]
    pub reason: Option<String>,

    pub status: Option<String>,

    pub prescription_file: Option<String>,
}

/// Multipart request body schema for create/update (documentation only;
/// the handler reads the fields from the multipart stream directly)
#[derive(Debug, Deserialize, ToSchema)]
#[allow(dead_code)]
pub struct AppointmentMultipartDto {
    pub name: String,
    pub phone: String,
    /// Calendar date in `YYYY-MM-DD`
    pub date: String,
    /// 24-hour time in `HH:mm`
    pub time: String,
    pub reason: Option<String>,
    pub status: Option<AppointmentStatus>,
    /// Prescription file attachment
    #[schema(value_type = Option<String>, format = Binary)]
    pub prescription: Option<Vec<u8>>,
}

/// Wire representation of an appointment; date and time are rendered as
/// plain `YYYY-MM-DD` and `HH:mm` strings
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AppointmentResponseDto {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub reason: Option<String>,
    pub status: AppointmentStatus,
    pub prescription_file: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Appointment> for AppointmentResponseDto {
    fn from(a: Appointment) -> Self {
        Self {
            id: a.id,
            name: a.name,
            phone: a.phone,
            date: a.date.format("%Y-%m-%d").to_string(),
            time: a.time.format("%H:%M").to_string(),
            reason: a.reason,
            status: a.status,
            prescription_file: a.prescription_file,
            created_at: a.created_at,
            updated_at: a.updated_at,
        }
    }
}

/// Response body for a successful booking
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedAppointmentResponse {
    pub message: String,
    pub id: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn test_response_dto_formats_date_and_time() {
        let now = Utc::now();
        let appointment = Appointment {
            id: 1,
            name: "Jane Doe".to_string(),
            phone: "555-0100".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 7, 4).unwrap(),
            time: NaiveTime::from_hms_opt(9, 30, 0).unwrap(),
            reason: None,
            status: AppointmentStatus::Pending,
            prescription_file: None,
            created_at: now,
            updated_at: now,
        };

        let dto = AppointmentResponseDto::from(appointment);
        assert_eq!(dto.date, "2025-07-04");
        assert_eq!(dto.time, "09:30");
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&AppointmentStatus::Cancelled).unwrap();
        assert_eq!(json, "\"cancelled\"");
    }
}
