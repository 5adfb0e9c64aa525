pub mod app;
pub mod notifications;
