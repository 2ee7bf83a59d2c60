//! Built-in health checks

pub mod build_info;
pub mod config;
pub mod tracker;

pub use build_info::BuildInfoCheck;
pub use config::ConfigCheck;
pub use tracker::TrackerCheck;
