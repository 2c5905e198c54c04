pub mod user_service;
pub mod user_app_service;
