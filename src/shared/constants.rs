/// How far into the future an appointment may be booked, in months
pub const BOOKING_WINDOW_MONTHS: u32 = 3;

/// Multipart field name carrying the prescription upload
pub const PRESCRIPTION_FIELD: &str = "prescription";

/// Prefix for stored prescription filenames in the upload directory
pub const PRESCRIPTION_FILE_PREFIX: &str = "prescription";

/// Bookable half-hour slots offered by the booking form
#[allow(dead_code)]
pub const APPOINTMENT_TIMES: &[&str] = &[
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "14:00", "14:30", "15:00", "15:30",
    "16:00", "16:30",
];
