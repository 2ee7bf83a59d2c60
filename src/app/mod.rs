//! Demo application
//!
//! Opens a window and logs every swipe made on the configured surface.

mod runner;
mod window;

pub use runner::App;
pub use window::window_attributes_from_config;
