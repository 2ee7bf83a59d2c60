//! Application configuration
//!
//! Supports multiple profiles (debug, release) with different settings.

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::input::Rect;

/// Where a contact may be released and still count as a swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReleaseMode {
    /// Anywhere in the window
    #[default]
    Anywhere,
    /// Only on the target surface
    Target,
}

/// Swipe tracker configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Release surface policy
    #[serde(default)]
    pub release: ReleaseMode,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// `tracing-subscriber` filter directives; `RUST_LOG` takes precedence
    pub filter: String,
    /// Whether to colorize output
    #[serde(default = "default_ansi")]
    pub ansi: bool,
}

fn default_ansi() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "warn,swipe_gesture=info".to_string(),
            ansi: true,
        }
    }
}

/// Demo window configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width
    pub width: f64,
    /// Window height
    pub height: f64,
    /// Whether the window should be resizable
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Swipe Demo".to_string(),
            width: 800.0,
            height: 600.0,
            resizable: true,
        }
    }
}

/// Target surface the demo binds its tracker to
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurfaceConfig {
    /// Surface name used in logs
    pub name: String,
    /// Surface area in logical pixels
    pub rect: Rect,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self {
            name: "swipe-area".to_string(),
            rect: Rect::new(100.0, 100.0, 600.0, 400.0),
        }
    }
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwipeConfig {
    /// The active profile (debug, release, etc.)
    pub profile: String,
    /// Tracker configuration
    #[serde(default)]
    pub tracker: TrackerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Target surface configuration
    #[serde(default)]
    pub surface: SurfaceConfig,
}

impl SwipeConfig {
    /// Loads configuration based on the specified profile
    ///
    /// Profiles are loaded in the following order:
    /// 1. config/{profile}.toml (profile-specific configuration)
    /// 2. Environment variables with prefix APP_ (e.g., APP_TRACKER__RELEASE=target)
    ///
    /// Config files are searched for in:
    /// 1. Next to the executable (target/debug/config or target/release/config)
    /// 2. In the current directory (./config)
    pub fn load(profile: &str) -> Result<Self, ConfigError> {
        Self::load_from(Self::find_config_dir().as_deref(), profile)
    }

    /// Loads a profile from an explicit config directory
    ///
    /// With no directory, `config/{profile}` relative to the working
    /// directory is tried. Missing files are not an error.
    pub fn load_from(config_dir: Option<&Path>, profile: &str) -> Result<Self, ConfigError> {
        let mut builder = Config::builder();

        if let Some(dir) = config_dir {
            let profile_path = dir.join(profile);
            builder = builder.add_source(File::from(profile_path.as_path()).required(false));
        } else {
            builder =
                builder.add_source(File::with_name(&format!("config/{}", profile)).required(false));
        }

        // Use __ as separator for nested fields (e.g., APP_LOGGING__FILTER)
        builder = builder.add_source(
            Environment::with_prefix("APP")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.set_override("profile", profile)?.build()?;

        config.try_deserialize()
    }

    /// Finds the config directory by searching in multiple locations
    fn find_config_dir() -> Option<PathBuf> {
        if let Ok(exe_path) = std::env::current_exe()
            && let Some(exe_dir) = exe_path.parent()
        {
            let config_dir = exe_dir.join("config");
            if config_dir.exists() {
                return Some(config_dir);
            }
        }

        let cwd_config = PathBuf::from("config");
        if cwd_config.exists() {
            return Some(cwd_config);
        }

        None
    }

    /// Loads configuration using the APP_PROFILE environment variable,
    /// defaulting to "release"
    pub fn load_from_env() -> Result<Self, ConfigError> {
        let profile = std::env::var("APP_PROFILE").unwrap_or_else(|_| "release".to_string());
        Self::load(&profile)
    }

    /// Built-in settings for `profile`, used when loading fails
    pub fn fallback(profile: &str) -> Self {
        Self {
            profile: profile.to_string(),
            tracker: TrackerConfig::default(),
            logging: LoggingConfig::default(),
            window: WindowConfig::default(),
            surface: SurfaceConfig::default(),
        }
    }
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self::load("release").unwrap_or_else(|_| Self::fallback("release"))
    }
}
