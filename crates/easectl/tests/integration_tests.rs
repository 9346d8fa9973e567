//! Integration tests for easectl CLI
//!
//! These tests run the binary end to end and check output formats and exit
//! codes for every command.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Custom predicate to check if output is valid JSON
fn is_json() -> impl predicates::Predicate<[u8]> {
    predicates::function::function(|s: &[u8]| {
        if let Ok(text) = std::str::from_utf8(s) {
            serde_json::from_str::<Value>(text).is_ok()
        } else {
            false
        }
    })
}

/// Test helper to create an easectl command
fn easectl() -> Result<Command, Box<dyn std::error::Error>> {
    Ok(Command::cargo_bin("easectl")?)
}

/// Test helper to run a command and parse its stdout as JSON
fn json_output(args: &[&str]) -> Result<Value, Box<dyn std::error::Error>> {
    let output = easectl()?.args(args).output()?;
    Ok(serde_json::from_slice(&output.stdout)?)
}

/// Test helper to write a config file
fn write_config(
    dir: &TempDir,
    name: &str,
    contents: &str,
) -> Result<String, Box<dyn std::error::Error>> {
    let path = dir.path().join(name);
    fs::write(&path, contents)?;
    Ok(path.to_string_lossy().into_owned())
}

#[test]
fn test_cli_help() -> TestResult {
    easectl()?
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cubic-bezier"));
    Ok(())
}

#[test]
fn test_cli_version() -> TestResult {
    easectl()?
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("easectl"));
    Ok(())
}

// Eval

#[test]
fn test_eval_preset_human_output() -> TestResult {
    easectl()?
        .args(["eval", "--curve", "ease", "0.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("f(0.5) = 0.80240"));
    Ok(())
}

#[test]
fn test_eval_json_output() -> TestResult {
    easectl()?
        .args(["--json", "eval", "--curve", "ease-in-out", "0", "0.5", "1"])
        .assert()
        .success()
        .stdout(is_json());

    let json = json_output(&["--json", "eval", "--curve", "ease-in-out", "0", "0.5", "1"])?;
    assert_eq!(json["success"], true);
    assert_eq!(json["curve"], "cubic-bezier(0.42, 0, 0.58, 1)");

    let results = json["results"].as_array().ok_or("results is not an array")?;
    assert_eq!(results.len(), 3);
    assert_eq!(results[0]["y"], 0.0);
    assert_eq!(results[2]["y"], 1.0);

    let middle = results[1]["y"].as_f64().ok_or("y is not a number")?;
    assert!((middle - 0.5).abs() < 1e-9);
    Ok(())
}

#[test]
fn test_eval_number_list_and_css_text_agree() -> TestResult {
    let from_numbers = json_output(&["--json", "eval", "--curve", "0.25,0.1,0.25,1", "0.3"])?;
    let from_css = json_output(&[
        "--json",
        "eval",
        "--curve",
        "cubic-bezier(0.25, 0.1, 0.25, 1)",
        "0.3",
    ])?;
    assert_eq!(from_numbers["results"], from_css["results"]);
    Ok(())
}

#[test]
fn test_eval_overshoot_curve() -> TestResult {
    let json = json_output(&["--json", "eval", "--curve", "0.68,-0.55,0.265,1.55", "0.2", "0.8"])?;
    let low = json["results"][0]["y"].as_f64().ok_or("y is not a number")?;
    let high = json["results"][1]["y"].as_f64().ok_or("y is not a number")?;
    assert!(low < 0.0);
    assert!(high > 1.0);
    Ok(())
}

#[test]
fn test_eval_clamps_out_of_range_inputs() -> TestResult {
    let json = json_output(&["--json", "eval", "--curve", "ease", "-0.5", "1.5"])?;
    assert_eq!(json["results"][0]["y"], 0.0);
    assert_eq!(json["results"][1]["y"], 1.0);
    Ok(())
}

// Sample

#[test]
fn test_sample_default_steps() -> TestResult {
    let json = json_output(&["--json", "sample", "--curve", "ease-out"])?;
    let samples = json["samples"].as_array().ok_or("samples is not an array")?;
    assert_eq!(samples.len(), 11);
    Ok(())
}

#[test]
fn test_sample_custom_steps() -> TestResult {
    let json = json_output(&["--json", "sample", "--curve", "linear", "--steps", "4"])?;
    let samples = json["samples"].as_array().ok_or("samples is not an array")?;
    assert_eq!(samples.len(), 5);
    assert_eq!(samples[1]["x"], 0.25);
    assert_eq!(samples[1]["y"], 0.25);
    Ok(())
}

#[test]
fn test_sample_human_output() -> TestResult {
    easectl()?
        .args(["sample", "--curve", "ease-in", "--steps", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cubic-bezier(0.42, 0, 1, 1)"))
        .stdout(predicate::str::contains("1.000000"));
    Ok(())
}

// Lut

#[test]
fn test_lut_json_output() -> TestResult {
    let json = json_output(&["--json", "lut", "--curve", "ease"])?;
    assert_eq!(json["success"], true);
    assert_eq!(json["size"], 256);
    assert_eq!(json["monotonic"], true);

    let table = json["table"].as_array().ok_or("table is not an array")?;
    assert_eq!(table.len(), 256);
    Ok(())
}

#[test]
fn test_lut_reports_overshoot() -> TestResult {
    let json = json_output(&["--json", "lut", "--curve", "cubic-bezier(0.68, -0.55, 0.265, 1.55)"])?;
    assert_eq!(json["monotonic"], false);

    let min = json["min"].as_f64().ok_or("min is not a number")?;
    let max = json["max"].as_f64().ok_or("max is not a number")?;
    assert!(min < 0.0);
    assert!(max > 1.0);
    Ok(())
}

// Presets

#[test]
fn test_presets_human_output() -> TestResult {
    easectl()?
        .arg("presets")
        .assert()
        .success()
        .stdout(predicate::str::contains("ease-in-out"))
        .stdout(predicate::str::contains("cubic-bezier(0.25, 0.1, 0.25, 1)"));
    Ok(())
}

#[test]
fn test_presets_json_output() -> TestResult {
    let json = json_output(&["--json", "presets"])?;
    let presets = json["presets"].as_array().ok_or("presets is not an array")?;
    assert_eq!(presets.len(), 5);
    assert_eq!(presets[0]["name"], "linear");
    assert_eq!(presets[4]["name"], "ease-in-out");
    assert_eq!(presets[4]["control_points"]["x1"], 0.42);
    Ok(())
}

// Config files

#[test]
fn test_config_file_keyword() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_config(&dir, "curve.json", "\"ease-in\"")?;

    let json = json_output(&["--json", "eval", "--config", &path, "0.5"])?;
    assert_eq!(json["curve"], "cubic-bezier(0.42, 0, 1, 1)");
    Ok(())
}

#[test]
fn test_config_file_object() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_config(
        &dir,
        "curve.json",
        r#"{ "x1": 0.42, "y1": 0.0, "x2": 0.58, "y2": 1.0 }"#,
    )?;

    let json = json_output(&["--json", "sample", "--config", &path, "--steps", "2"])?;
    let middle = json["samples"][1]["y"].as_f64().ok_or("y is not a number")?;
    assert!((middle - 0.5).abs() < 1e-9);
    Ok(())
}

// Exit codes

#[test]
fn test_invalid_control_point_exit_code() -> TestResult {
    easectl()?
        .args(["eval", "--curve", "1.5,0,0.5,1", "0.5"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("control point 1"));
    Ok(())
}

#[test]
fn test_invalid_control_point_json_error() -> TestResult {
    easectl()?
        .args(["--json", "eval", "--curve", "cubic-bezier(0.5, 0, -0.1, 1)", "0.5"])
        .assert()
        .code(2)
        .stdout(is_json());

    let json = json_output(&["--json", "eval", "--curve", "cubic-bezier(0.5, 0, -0.1, 1)", "0.5"])?;
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["type"], "invalid_control_point");
    Ok(())
}

#[test]
fn test_unparseable_curve_exit_code() -> TestResult {
    easectl()?
        .args(["eval", "--curve", "steps(4)", "0.5"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid timing function"));
    Ok(())
}

#[test]
fn test_missing_config_exit_code() -> TestResult {
    let dir = TempDir::new()?;
    let path = dir.path().join("missing.json");

    easectl()?
        .args(["lut", "--config"])
        .arg(&path)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("missing.json"));
    Ok(())
}

#[test]
fn test_malformed_config_exit_code() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_config(&dir, "broken.json", "{ \"x1\": 0.1 ")?;

    easectl()?
        .args(["lut", "--config", &path])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Malformed config file"));
    Ok(())
}

#[test]
fn test_config_with_invalid_points_exit_code() -> TestResult {
    let dir = TempDir::new()?;
    let path = write_config(&dir, "bad.json", "[0.5, 0, 2.0, 1]")?;

    easectl()?
        .args(["lut", "--config", &path])
        .assert()
        .code(2);
    Ok(())
}

#[test]
fn test_usage_error_exit_code() -> TestResult {
    easectl()?
        .args(["sample", "--curve", "ease", "--steps", "0"])
        .assert()
        .code(1);

    easectl()?.arg("lut").assert().code(1);
    Ok(())
}

// Logging

#[test]
fn test_verbose_logging_keeps_stdout_clean() -> TestResult {
    easectl()?
        .args(["-vvv", "--json", "eval", "--curve", "ease", "0.5"])
        .assert()
        .success()
        .stdout(is_json());
    Ok(())
}

#[test]
fn test_rust_log_enables_library_logging() -> TestResult {
    easectl()?
        .env("RUST_LOG", "debug")
        .args(["eval", "--curve", "0.1,0.7,0.9,0.3", "0.5"])
        .assert()
        .success()
        .stderr(predicate::str::contains("built cubic-bezier easing"));
    Ok(())
}
