pub mod app_error;
pub mod error_payload;
pub mod grading_error;
