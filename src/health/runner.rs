//! Runs registered checks and tallies their outcome

use std::time::Instant;

use tracing::{debug, info, warn};

use super::check::{CheckResult, CheckStatus, SystemCheck};

/// Results from running a health check suite
#[derive(Debug, Default)]
pub struct HealthCheckReport {
    /// Check results in registration order, keyed by system name
    pub results: Vec<(String, CheckResult)>,
    pub total: usize,
    pub passed: usize,
    pub warned: usize,
    pub failed: usize,
}

impl HealthCheckReport {
    /// Builds a report and its counters from finished results
    pub fn from_results(results: Vec<(String, CheckResult)>) -> Self {
        let count = |status| results.iter().filter(|(_, r)| r.status == status).count();
        Self {
            total: results.len(),
            passed: count(CheckStatus::Pass),
            warned: count(CheckStatus::Warn),
            failed: count(CheckStatus::Fail),
            results,
        }
    }

    /// Worst status across all checks; an empty report passes
    pub fn overall(&self) -> CheckStatus {
        self.results
            .iter()
            .map(|(_, result)| result.status)
            .max()
            .unwrap_or(CheckStatus::Pass)
    }

    /// Returns true if no check failed
    pub fn is_healthy(&self) -> bool {
        self.overall().is_ok()
    }

    pub fn has_warnings(&self) -> bool {
        self.warned > 0
    }

    /// Process exit code: 0 = all pass, 1 = any fail, 2 = warnings only
    pub fn exit_code(&self) -> i32 {
        self.overall().exit_code()
    }

    /// Looks up the result for a named system
    pub fn result(&self, name: &str) -> Option<&CheckResult> {
        self.results
            .iter()
            .find_map(|(system, result)| (system == name).then_some(result))
    }
}

/// Ordered collection of checks to run
#[derive(Default)]
pub struct HealthCheckRunner {
    checks: Vec<Box<dyn SystemCheck>>,
}

impl HealthCheckRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a check to the runner
    pub fn add_check<C: SystemCheck + 'static>(mut self, check: C) -> Self {
        self.checks.push(Box::new(check));
        self
    }

    /// Number of registered checks
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    /// Runs every check in registration order
    pub fn run(self) -> HealthCheckReport {
        let results = self
            .checks
            .into_iter()
            .map(|check| {
                let started = Instant::now();
                let result = check.check().with_duration(started.elapsed());
                match result.status {
                    CheckStatus::Fail => {
                        warn!(system = check.name(), message = %result.message, "Health check failed")
                    }
                    status => debug!(system = check.name(), ?status, "Health check finished"),
                }
                (check.name().to_string(), result)
            })
            .collect();

        let report = HealthCheckReport::from_results(results);
        info!(
            total = report.total,
            failed = report.failed,
            warned = report.warned,
            "Health checks complete"
        );
        report
    }
}
