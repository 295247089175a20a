pub mod auth_guard;
pub mod cors_fairing;
pub mod request_logger;
