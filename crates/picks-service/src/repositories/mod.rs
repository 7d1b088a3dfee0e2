pub mod pick_repository;
pub mod user_repository;
