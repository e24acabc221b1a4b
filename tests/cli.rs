use std::fs;

use assert_cmd::Command;

#[test]
fn analyze_prints_a_result_record() {
    let dir = tempfile::tempdir().expect("tempdir");
    let mut cmd = Command::cargo_bin("call-triage").expect("binary exists");
    let output = cmd
        .env("MODEL_DIR", dir.path().join("models"))
        .env("REPORTS_DIR", dir.path().join("reports"))
        .arg("analyze")
        .arg("--text")
        .arg("Necesito una cita urgente, me duele una muela")
        .output()
        .expect("run binary");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("\"status\": \"success\""));
    assert!(stdout.contains("\"urgency\": \"high\""));
}

#[test]
fn train_writes_both_artifacts() {
    let dir = tempfile::tempdir().expect("tempdir");
    let models = dir.path().join("models");
    let mut cmd = Command::cargo_bin("call-triage").expect("binary exists");
    cmd.env("MODEL_DIR", &models)
        .env("REPORTS_DIR", dir.path().join("reports"))
        .arg("train")
        .assert()
        .success();

    assert!(models.join("vectorizer.json").is_file());
    assert!(models.join("classifier.json").is_file());
}

#[test]
fn batch_writes_a_report() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("calls.txt");
    fs::write(
        &input,
        "Quiero agendar una cita\n\nEs una emergencia, me duele mucho\n",
    )
    .expect("write input");
    let reports = dir.path().join("reports");

    let mut cmd = Command::cargo_bin("call-triage").expect("binary exists");
    cmd.env("MODEL_DIR", dir.path().join("models"))
        .env("REPORTS_DIR", &reports)
        .arg("batch")
        .arg("--input")
        .arg(&input)
        .assert()
        .success();

    let report = fs::read_dir(&reports)
        .expect("reports dir")
        .filter_map(|entry| entry.ok())
        .find(|entry| entry.file_name().to_string_lossy().starts_with("analysis_"))
        .expect("report file");
    let body = fs::read_to_string(report.path()).expect("read report");
    let report: serde_json::Value = serde_json::from_str(&body).expect("parse report");

    let calls = report["calls"].as_array().expect("calls array");
    assert_eq!(report["total_calls"], 2);
    assert_eq!(calls.len(), 2);

    // Tallies cover successful calls only, so each map sums to the number
    // of success entries.
    let successes = calls
        .iter()
        .filter(|call| call["status"] == "success")
        .count();
    let category_total: u64 = sum_counts(&report["categories"]);
    let urgency_total: u64 = sum_counts(&report["urgencies"]);
    assert_eq!(successes, 2);
    assert_eq!(category_total, successes as u64);
    assert_eq!(urgency_total, successes as u64);
    assert_eq!(report["urgencies"]["high"], 1);
}

fn sum_counts(map: &serde_json::Value) -> u64 {
    map.as_object()
        .expect("count map")
        .values()
        .map(|count| count.as_u64().expect("count"))
        .sum()
}
