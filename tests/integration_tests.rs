//! Integration tests for the PackSmart CLI

use std::process::{Command, Output};

fn packsmart(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_packsmart"))
        .args(["--config", "/nonexistent/packsmart.toml"])
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

/// Test that the CLI shows help with the explicit help flag
#[test]
fn test_cli_help() {
    let output = packsmart(&["--help"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("packsmart"));
    assert!(stdout.contains("plan"));
    assert!(stdout.contains("serve"));
}

/// Test the example trip from the README
#[test]
fn test_plan_text_output() {
    let output = packsmart(&[
        "plan",
        "Tokyo",
        "--days",
        "3",
        "--start",
        "2024-06-01",
        "--activity",
        "City Exploration",
    ]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Packing List for Tokyo"));
    assert!(stdout.contains("3-Day Itinerary for Tokyo"));
    assert!(stdout.contains("City Walking Tour"));
    assert!(stdout.contains("Day 3  (Monday, Jun 3)"));
    assert!(!stdout.contains("many more adventures"));
}

/// Test that JSON output is parseable and carries the grouped packing list
#[test]
fn test_plan_json_output() {
    let output = packsmart(&[
        "plan",
        "Lisbon",
        "--days",
        "10",
        "--start",
        "2024-06-01",
        "--activity",
        "Beach/Swimming",
        "--format",
        "json",
    ]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["itinerary"].as_array().unwrap().len(), 8);
    assert_eq!(plan["itinerary"][7]["date"], "...");
    assert_eq!(plan["packing_list"][0]["category"], "Documents");
    assert!(plan["footnote"].as_str().unwrap().contains("10-day trip"));
}

/// Test error handling for an empty destination
#[test]
fn test_plan_empty_destination_error() {
    let output = packsmart(&["plan", "", "--days", "3", "--start", "2024-06-01"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid input"));
    assert!(stderr.contains("Destination cannot be empty"));
}

/// Test error handling for a malformed duration
#[test]
fn test_plan_bad_duration_error() {
    let output = packsmart(&["plan", "Rome", "--days", "a week", "--start", "2024-06-01"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("whole number of days"));
}

/// Test that the activity vocabulary is listed in form order
#[test]
fn test_activities_command() {
    let output = packsmart(&["activities"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 10);
    assert_eq!(lines[0], "Beach/Swimming");
    assert_eq!(lines[9], "Adventure Sports");
}
