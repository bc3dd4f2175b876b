pub mod appointments;
pub mod dashboard;
