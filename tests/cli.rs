//! End-to-end tests of the `voice_roi` binary
//!
//! Each run starts in an empty directory with a cleared environment so no
//! `config/` files or `VOICE_ROI__*` variables leak in.

use assert_cmd::Command;
use std::fs;
use tempfile::TempDir;

fn voice_roi(dir: &TempDir) -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_voice_roi"));
    command.current_dir(dir.path()).env_clear();
    command
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn default_scenario_results() {
    let dir = TempDir::new().unwrap();
    let output = voice_roi(&dir)
        .args(["--format", "results"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let results = stdout_json(&output);
    assert_eq!(results["costSavings"], 11_371.0);
    assert_eq!(results["revenueUpside"], 110_061.0);
    assert_eq!(results["annualAICost"], 13_449.0);
    assert_eq!(results["netBenefit"], 107_983.0);
    assert_eq!(results["usage"]["totalMinutes"], 30_817.0);
}

#[test]
fn text_report_shows_summary_and_notes() {
    let dir = TempDir::new().unwrap();
    let output = voice_roi(&dir).output().unwrap();

    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains("Net Annual Benefit"));
    assert!(text.contains("$107,983"));
    assert!(text.contains("Calculation Notes"));
}

#[test]
fn input_file_and_overrides_combine() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("clinic.json");
    fs::write(&input, r#"{"noShowRateAfter": 15}"#).unwrap();

    let output = voice_roi(&dir)
        .arg("--input")
        .arg(&input)
        .args(["--set", "appointmentIncrease=0", "--format", "results"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let results = stdout_json(&output);
    assert_eq!(results["breakdown"]["noShowRevenue"], 0.0);
    assert_eq!(results["breakdown"]["additionalApptsRevenue"], 0.0);
}

#[test]
fn config_file_and_environment_layer() {
    let dir = TempDir::new().unwrap();
    let config = dir.path().join("clinic.toml");
    fs::write(&config, "[output]\nformat = \"results\"\n").unwrap();

    let output = voice_roi(&dir)
        .arg("--config")
        .arg(&config)
        .env("VOICE_ROI__SCENARIO__APPOINTMENTS__NO_SHOW_RATE_AFTER", "15")
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["breakdown"]["noShowRevenue"], 0.0);
}

#[test]
fn writes_report_to_output_file() {
    let dir = TempDir::new().unwrap();
    voice_roi(&dir)
        .args(["--format", "json", "--output", "report.json"])
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(dir.path().join("report.json")).unwrap())
            .unwrap();
    assert_eq!(report["summary"].as_array().unwrap().len(), 6);
    assert_eq!(report["results"]["monthlyRevenue"], 50_000.0);
}

#[test]
fn debug_verbosity_logs_loaded_settings() {
    let dir = TempDir::new().unwrap();
    let output = voice_roi(&dir)
        .args(["-vv", "--format", "results"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr.clone()).unwrap();
    assert!(stderr.contains("Loaded settings"));
    assert!(stderr.contains("Computed ROI"));
    assert_eq!(stdout_json(&output)["netBenefit"], 107_983.0);
}

#[test]
fn out_of_range_input_fails() {
    let dir = TempDir::new().unwrap();
    let output = voice_roi(&dir)
        .args(["--set", "inboundAnswerRate=120"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("inboundAnswerRate"));
}

#[test]
fn unknown_override_field_is_a_usage_error() {
    let dir = TempDir::new().unwrap();
    voice_roi(&dir)
        .args(["--set", "bogusField=1"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn unknown_input_file_key_fails() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("clinic.json");
    fs::write(&input, r#"{"dailyInboundCall": 40}"#).unwrap();

    voice_roi(&dir).arg("--input").arg(&input).assert().failure();
}
