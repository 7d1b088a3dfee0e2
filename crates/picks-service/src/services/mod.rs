pub mod grading_service;
pub mod standings_service;
