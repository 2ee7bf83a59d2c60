//! Integration tests for the health check system

use swipe_gesture::health::{self, CheckStatus, HealthCheckRunner, SystemCheck, checks::*};

#[test]
fn test_all_health_checks() {
    let report = health::run_all_checks();

    if !report.is_healthy() {
        eprintln!("\n{}", health::format_report(&report));
    }

    assert!(
        report.is_healthy(),
        "Health checks failed: {} failures, {} warnings",
        report.failed,
        report.warned
    );
}

#[test]
fn test_config_check() {
    let result = ConfigCheck::new().check();
    assert!(
        result.status.is_ok(),
        "Config check failed: {}",
        result.message
    );
}

#[test]
fn test_build_info_check() {
    let result = BuildInfoCheck::new().check();
    assert!(
        result.status.is_ok(),
        "Build info check failed: {}",
        result.message
    );
}

#[test]
fn test_tracker_check() {
    let result = TrackerCheck::new().check();
    assert_eq!(
        result.status,
        CheckStatus::Pass,
        "Tracker check failed: {}\n{:?}",
        result.message,
        result.details
    );
}

#[test]
fn test_unknown_profile_is_not_fatal() {
    // Missing profile files fall back to defaults
    let result = ConfigCheck::with_profiles(vec!["no-such-profile"]).check();
    assert!(result.status.is_ok(), "{}", result.message);
}

#[test]
fn test_runner_collects_all_checks() {
    let report = HealthCheckRunner::new()
        .add_check(ConfigCheck::new())
        .add_check(TrackerCheck::new())
        .run();

    assert_eq!(report.total, 2, "Expected 2 checks in report");
    assert_eq!(report.passed + report.warned + report.failed, report.total);
    assert!(report.result("Swipe Tracker").is_some());
    assert!(report.result("Nonexistent").is_none());
}

#[test]
fn test_report_formatting() {
    let report = HealthCheckRunner::new().add_check(TrackerCheck::new()).run();
    let formatted = health::format_report(&report);

    assert!(formatted.contains("Swipe Tracker"));
    assert!(formatted.contains("Summary"));
    assert!(formatted.contains("Total checks: 1"));
}

#[test]
fn test_exit_codes() {
    let report = HealthCheckRunner::new().add_check(TrackerCheck::new()).run();
    assert_eq!(report.exit_code(), 0);

    struct Broken;
    impl SystemCheck for Broken {
        fn name(&self) -> &'static str {
            "Broken"
        }
        fn check(&self) -> health::CheckResult {
            health::CheckResult::fail("always fails")
        }
    }

    let report = HealthCheckRunner::new().add_check(Broken).run();
    assert!(!report.is_healthy());
    assert_eq!(report.exit_code(), 1);
}
