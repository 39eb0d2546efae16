use std::process::Command;

fn tester() -> Command {
    Command::new(env!("CARGO_BIN_EXE_valentine-tester"))
}

#[test]
fn lists_scenarios() {
    let output = tester().arg("--list-scenarios").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Available scenarios:"));
    for key in ["smoke", "catch-bounds", "audio-tracks"] {
        assert!(stdout.contains(key), "{key} missing from listing");
    }
}

#[test]
fn smoke_run_writes_a_passing_json_report() {
    let path = std::env::temp_dir().join(format!("valentine-cli-{}.json", std::process::id()));
    let output = tester()
        .args(["--scenarios", "smoke", "--iterations", "2", "--seeds", "7,0x2a"])
        .args(["--report", "json", "--output"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let text = std::fs::read_to_string(&path).unwrap();
    let report: serde_json::Value = serde_json::from_str(&text).unwrap();
    let results = report["results"].as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r["passed"] == true));
    assert_eq!(results[1]["seed"], 42);
    let _ = std::fs::remove_file(path);
}

#[test]
fn bad_seed_fails() {
    let output = tester().args(["--seeds", "not-a-seed"]).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not-a-seed"));
}
