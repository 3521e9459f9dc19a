//! CLI integration tests
//!
//! Each test runs the binary inside its own temporary working directory.
//! Where a working classifier is needed, a one-node ONNX graph
//! (`ArgMax` over the eight readings) is written next to a label encoder.

use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const LABELS: [&str; 8] = [
    "10-26-26",
    "14-35-14",
    "17-17-17",
    "20-20",
    "28-28",
    "DAP",
    "Potassium chloride",
    "Urea",
];

fn run_in(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_fertilizer-predict"))
        .args(args)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .env_remove("FERTILIZER_MODEL_DIR")
        .env_remove("FERTILIZER_CLASSIFIER_FILE")
        .env_remove("FERTILIZER_ENCODER_FILE")
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn split(args: &str) -> Vec<&str> {
    args.split_whitespace().collect()
}

mod onnx {
    //! Minimal protobuf writer for an ONNX `ArgMax` model

    fn varint(mut value: u64, out: &mut Vec<u8>) {
        while value >= 0x80 {
            out.push((value as u8 & 0x7f) | 0x80);
            value >>= 7;
        }
        out.push(value as u8);
    }

    fn int_field(field: u64, value: u64) -> Vec<u8> {
        let mut out = Vec::new();
        varint(field << 3, &mut out);
        varint(value, &mut out);
        out
    }

    fn bytes_field(field: u64, bytes: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        varint((field << 3) | 2, &mut out);
        varint(bytes.len() as u64, &mut out);
        out.extend_from_slice(bytes);
        out
    }

    fn concat(parts: &[Vec<u8>]) -> Vec<u8> {
        parts.concat()
    }

    fn int_attribute(name: &str, value: u64) -> Vec<u8> {
        // AttributeProto: name = 1, i = 3, type = 20 (INT = 2)
        concat(&[
            bytes_field(1, name.as_bytes()),
            int_field(3, value),
            int_field(20, 2),
        ])
    }

    fn value_info(name: &str, elem_type: u64, dims: &[u64]) -> Vec<u8> {
        let shape: Vec<u8> = dims
            .iter()
            .flat_map(|&d| bytes_field(1, &int_field(1, d)))
            .collect();
        let mut tensor_type = int_field(1, elem_type);
        if !dims.is_empty() {
            tensor_type.extend(bytes_field(2, &shape));
        }
        let type_proto = bytes_field(1, &tensor_type);
        concat(&[bytes_field(1, name.as_bytes()), bytes_field(2, &type_proto)])
    }

    /// `y = argmax(x, axis=1, keepdims=0)` with `x: float[1, 8]`, `y: int64`
    pub fn argmax_model() -> Vec<u8> {
        let node = concat(&[
            bytes_field(1, b"x"),
            bytes_field(2, b"y"),
            bytes_field(4, b"ArgMax"),
            bytes_field(5, &int_attribute("axis", 1)),
            bytes_field(5, &int_attribute("keepdims", 0)),
        ]);
        let graph = concat(&[
            bytes_field(1, &node),
            bytes_field(2, b"argmax"),
            bytes_field(11, &value_info("x", 1, &[1, 8])),
            bytes_field(12, &value_info("y", 7, &[])),
        ]);
        let opset = concat(&[bytes_field(1, b""), int_field(2, 13)]);
        concat(&[int_field(1, 7), bytes_field(7, &graph), bytes_field(8, &opset)])
    }
}

fn write_artifacts(dir: &Path, labels: &[&str]) {
    std::fs::write(dir.join("classifier.onnx"), onnx::argmax_model()).unwrap();
    let encoder = serde_json::json!({ "classes": labels });
    std::fs::write(dir.join("fertilizer.json"), encoder.to_string()).unwrap();
}

/// Test that the CLI shows help
#[test]
fn test_cli_help() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &["--help"]);
    let stdout = stdout(&output);

    assert!(output.status.success(), "CLI help should succeed");
    assert!(stdout.contains("--model-dir"), "Should show model-dir option");
    assert!(stdout.contains("--format"), "Should show format option");
    assert!(stdout.contains("soil_type"), "Should describe readings");
}

#[test]
fn test_wrong_argument_count() {
    let dir = TempDir::new().unwrap();
    for args in ["25 80 40 1 5 10 15", "25 80 40 1 5 10 15 20 30", ""] {
        let output = run_in(dir.path(), &split(args));
        assert_eq!(output.status.code(), Some(1), "args: {args:?}");
        assert!(
            stdout(&output).contains("Expected 8 parameters"),
            "args: {args:?}"
        );
    }
}

#[test]
fn test_temperature_out_of_range() {
    let dir = TempDir::new().unwrap();
    write_artifacts(dir.path(), &LABELS);

    let output = run_in(dir.path(), &split("60 80 40 1 5 10 15 20"));
    let stdout = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Input validation error:"));
    assert!(stdout.contains("Temperature must be between 0 and 50"));
}

#[test]
fn test_each_range_reported() {
    let dir = TempDir::new().unwrap();
    write_artifacts(dir.path(), &LABELS);

    let cases = [
        ("25 -5 40 1 5 10 15 20", "Humidity must be between 0 and 100"),
        ("25 80 101 1 5 10 15 20", "Moisture must be between 0 and 100"),
        ("25 80 40 7 5 10 15 20", "Soil type must be between 0 and 4"),
        ("25 80 40 1 -3 10 15 20", "Crop type must be between 0 and 16"),
    ];
    for (args, message) in cases {
        let output = run_in(dir.path(), &split(args));
        assert_eq!(output.status.code(), Some(1), "args: {args}");
        assert!(stdout(&output).contains(message), "args: {args}");
    }
}

#[test]
fn test_non_numeric_reading() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &split("25 80 40 one 5 10 15 20"));
    let stdout = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Unexpected error:"));
    assert!(stdout.contains("soil_type"));
}

#[test]
fn test_missing_artifacts() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &split("25 80 40 1 5 10 15 20"));
    let stdout = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Model file not found"));
    assert!(stdout.contains("classifier.onnx"));
}

#[test]
fn test_missing_encoder() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("classifier.onnx"), onnx::argmax_model()).unwrap();

    let output = run_in(dir.path(), &split("25 80 40 1 5 10 15 20"));
    let stdout = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Model file not found"));
    assert!(stdout.contains("fertilizer.json"));
}

#[test]
fn test_corrupt_classifier() {
    let dir = TempDir::new().unwrap();
    write_artifacts(dir.path(), &LABELS);
    std::fs::write(dir.path().join("classifier.onnx"), b"definitely not protobuf").unwrap();

    let output = run_in(dir.path(), &split("25 80 40 1 5 10 15 20"));

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).contains("Error loading models:"));
}

#[test]
fn test_nutrients_are_not_range_checked() {
    let dir = TempDir::new().unwrap();
    write_artifacts(dir.path(), &LABELS);

    let output = run_in(dir.path(), &split("25 80 40 1 5 -10 0 -20"));
    let stdout = stdout(&output);

    assert!(output.status.success(), "stdout: {stdout}");
    assert!(!stdout.contains("validation"));
}

#[test]
fn test_hyphen_led_nutrients_are_readings() {
    let dir = TempDir::new().unwrap();
    write_artifacts(dir.path(), &LABELS);

    let output = run_in(dir.path(), &split("25 80 40 1 5 -.5 -inf 20"));
    let stdout = stdout(&output);

    assert!(output.status.success(), "stdout: {stdout}");
    assert_eq!(stdout.trim(), "14-35-14");
}

#[test]
fn test_hyphen_led_garbage_exits_one() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &split("25 80 40 1 5 -x 15 20"));
    let stdout = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Unexpected error:"), "stdout: {stdout}");
    assert!(stdout.contains("nitrogen"));
}

#[test]
fn test_usage_error_exits_one() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &split("--format xml 25 80 40 1 5 10 15 20"));
    let stdout = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout.lines().count(), 1, "stdout: {stdout}");
    assert!(stdout.starts_with("Unexpected error:"));
    assert!(stdout.contains("xml"));
}

#[test]
fn test_oversized_category_code() {
    let dir = TempDir::new().unwrap();
    let output = run_in(dir.path(), &split("25 80 40 99999999999999999999 5 10 15 20"));
    let stdout = stdout(&output);

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout.contains("Soil type must be between 0 and 4"), "stdout: {stdout}");
}

#[test]
fn test_prediction() {
    let dir = TempDir::new().unwrap();
    write_artifacts(dir.path(), &LABELS);

    let output = run_in(dir.path(), &split("25 80 40 1 5 10 15 20"));
    let stdout = stdout(&output);

    assert!(output.status.success(), "stdout: {stdout}");
    assert_eq!(stdout.lines().count(), 1);
    // humidity is the largest reading
    assert_eq!(stdout.trim(), "14-35-14");
    assert!(LABELS.contains(&stdout.trim()));
}

#[test]
fn test_prediction_is_repeatable() {
    let dir = TempDir::new().unwrap();
    write_artifacts(dir.path(), &LABELS);

    let args = split("10 20 30 0 0 0 0 500");
    let first = run_in(dir.path(), &args);
    let second = run_in(dir.path(), &args);

    assert!(first.status.success());
    assert_eq!(stdout(&first), stdout(&second));
    assert_eq!(stdout(&first).trim(), "Urea");
}

#[test]
fn test_unknown_class_falls_back() {
    let dir = TempDir::new().unwrap();
    write_artifacts(dir.path(), &["DAP"]);

    let output = run_in(dir.path(), &split("25 80 40 1 5 10 15 20"));
    let stdout = stdout(&output);
    let lines: Vec<&str> = stdout.lines().collect();

    assert!(output.status.success(), "fallback still exits 0");
    assert_eq!(lines.len(), 2, "stdout: {stdout}");
    assert!(lines[0].contains("Error during prediction:"));
    assert_eq!(lines[1], "Urea");
}

#[test]
fn test_model_dir_and_json_output() {
    let dir = TempDir::new().unwrap();
    let models = dir.path().join("models");
    std::fs::create_dir(&models).unwrap();
    write_artifacts(&models, &LABELS);

    let output = run_in(
        dir.path(),
        &[
            "--format", "json", "--model-dir", "models", "25", "80", "40", "1", "5", "10", "15",
            "20",
        ],
    );
    assert!(output.status.success(), "stdout: {}", stdout(&output));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["fertilizer"], "14-35-14");
    assert_eq!(report["degraded"], false);
    assert_eq!(report["soil_type"], "Clayey");
    assert_eq!(report["crop_type"], "Oil Seeds");
    assert_eq!(report["details"]["npk"], "14-35-14");
}

#[test]
fn test_model_dir_from_environment() {
    let dir = TempDir::new().unwrap();
    let models = dir.path().join("models");
    std::fs::create_dir(&models).unwrap();
    write_artifacts(&models, &LABELS);

    let output = Command::new(env!("CARGO_BIN_EXE_fertilizer-predict"))
        .args(split("10 20 90 1 5 10 15 20"))
        .current_dir(dir.path())
        .env("FERTILIZER_MODEL_DIR", &models)
        .env("NO_COLOR", "1")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "stdout: {}", stdout(&output));
    assert_eq!(stdout(&output).trim(), "17-17-17");
}
