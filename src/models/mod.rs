pub mod location;
pub mod metrics;
pub mod overtime;
pub mod settings;
pub mod shift;
pub mod time_log;
