mod config;

pub use config::{DashboardSettings, HttpSettings, NetworkSettings, Settings};
