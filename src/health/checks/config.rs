//! Configuration system health check

use crate::config::SwipeConfig;
use crate::health::check::{CheckResult, SystemCheck};
use crate::logging;

/// Checks that every profile loads and carries a usable tracker setup
pub struct ConfigCheck {
    profiles: Vec<&'static str>,
}

impl ConfigCheck {
    /// Creates a config check for the debug and release profiles
    pub fn new() -> Self {
        Self {
            profiles: vec!["debug", "release"],
        }
    }

    pub fn with_profiles(profiles: Vec<&'static str>) -> Self {
        Self { profiles }
    }

    fn check_profile(config: &SwipeConfig) -> Result<String, String> {
        if !config.surface.rect.is_valid() {
            return Err(format!(
                "surface `{}` has an invalid area {:?}",
                config.surface.name, config.surface.rect
            ));
        }
        logging::env_filter(&config.logging).map_err(|e| e.to_string())?;
        Ok(format!(
            "surface `{}` {}x{}, release {:?}",
            config.surface.name,
            config.surface.rect.width,
            config.surface.rect.height,
            config.tracker.release
        ))
    }
}

impl Default for ConfigCheck {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemCheck for ConfigCheck {
    fn name(&self) -> &'static str {
        "Configuration"
    }

    fn description(&self) -> Option<&'static str> {
        Some("Validates configuration loading from files and environment")
    }

    fn check(&self) -> CheckResult {
        let mut details = Vec::new();
        let mut failed = false;

        for profile in &self.profiles {
            let outcome = SwipeConfig::load(profile)
                .map_err(|e| e.to_string())
                .and_then(|config| Self::check_profile(&config));
            match outcome {
                Ok(summary) => details.push(format!("  ✓ Profile '{}': {}", profile, summary)),
                Err(e) => {
                    details.push(format!("  ✗ Profile '{}': {}", profile, e));
                    failed = true;
                }
            }
        }

        let env_ok = match SwipeConfig::load_from_env() {
            Ok(config) => {
                details.push(format!(
                    "  ✓ Environment config: profile '{}' loaded",
                    config.profile
                ));
                true
            }
            Err(e) => {
                details.push(format!("  ⚠ Environment config: {}", e));
                false
            }
        };

        let details = details.join("\n");
        if failed {
            CheckResult::fail("Failed to load one or more config profiles").with_details(details)
        } else if !env_ok {
            CheckResult::warn("Config loaded with warnings").with_details(details)
        } else {
            CheckResult::pass(format!("{} profiles validated", self.profiles.len()))
                .with_details(details)
        }
    }
}
