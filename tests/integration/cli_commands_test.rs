use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn formpipe(workspace: &Path) -> Command {
    let mut cmd = Command::cargo_bin("formpipe").expect("formpipe binary");
    cmd.current_dir(workspace)
        .env_remove("RUST_LOG")
        .env_remove("OTEL_EXPORTER_OTLP_ENDPOINT")
        .env_remove("FORMPIPE_LOG_CONSOLE");
    for var in [
        "FORMPIPE_GATEWAY_KIND",
        "FORMPIPE_GATEWAY_DELAY_MS",
        "FORMPIPE_GATEWAY_FAILURE_RATE",
        "FORMPIPE_GATEWAY_ENDPOINT",
        "FORMPIPE_GATEWAY_TIMEOUT_MS",
        "FORMPIPE_MUTATION_OVERRIDE_NAME",
    ] {
        cmd.env_remove(var);
    }
    cmd
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn submit_prints_recorded_submission() {
    let temp_dir = TempDir::new().unwrap();

    let output = formpipe(temp_dir.path())
        .args(["submit", "--name", "Alice", "--email", "a@x.com", "--delay", "1ms"])
        .arg("--workspace")
        .arg(temp_dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(
        stdout_json(&output),
        serde_json::json!({"name": "Alice", "email": "a@x.com", "index": 0})
    );
}

#[test]
fn submit_with_empty_name_is_rejected_quietly() {
    let temp_dir = TempDir::new().unwrap();

    formpipe(temp_dir.path())
        .args(["submit", "--email", "a@x.com", "--delay", "1ms"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("rejected: name is required"));
}

#[test]
fn submit_reports_malformed_email() {
    let temp_dir = TempDir::new().unwrap();

    formpipe(temp_dir.path())
        .args(["submit", "--name", "Alice", "--email", "alice", "--delay", "1ms"])
        .assert()
        .success()
        .stderr(predicate::str::contains("rejected: email is not a valid address"));
}

#[test]
fn submit_fails_when_every_save_fails() {
    let temp_dir = TempDir::new().unwrap();

    formpipe(temp_dir.path())
        .args(["submit", "--name", "Alice", "--email", "a@x.com", "--delay", "1ms"])
        .env("FORMPIPE_GATEWAY_FAILURE_RATE", "1.0")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Submission could not be saved"));
}

#[test]
fn submit_rejects_invalid_workspace_config() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("formpipe.toml"),
        "[gateway]\nfailure_rate = 3.0\n",
    )
    .unwrap();

    formpipe(temp_dir.path())
        .args(["submit", "--name", "Alice", "--email", "a@x.com"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failure_rate"));
}

#[test]
fn replay_runs_inputs_through_one_session() {
    let temp_dir = TempDir::new().unwrap();
    let inputs = temp_dir.path().join("inputs.json");
    fs::write(
        &inputs,
        r#"[
            {"name": "Alice", "email": "a@x.com"},
            {"name": "", "email": "x@x.com"},
            {"name": "Bob", "email": "b@x.com"},
            {"name": "Cara", "email": "c@x.com"}
        ]"#,
    )
    .unwrap();
    let history_file = temp_dir.path().join("out").join("history.json");

    let output = formpipe(temp_dir.path())
        .arg("replay")
        .arg(&inputs)
        .args(["--delay", "1ms", "--output"])
        .arg(&history_file)
        .output()
        .unwrap();

    assert!(output.status.success());
    let report = stdout_json(&output);
    assert_eq!(
        report["summary"],
        serde_json::json!({"recorded": 3, "rejected": 1, "failed": 0})
    );
    assert_eq!(report["counter"], 3);
    assert_eq!(
        report["history"],
        serde_json::json!([
            {"name": "Alice", "email": "a@x.com", "index": 0},
            {"name": "John", "email": "b@x.com", "index": 1},
            {"name": "Cara", "email": "c@x.com", "index": 2}
        ])
    );

    assert_eq!(report["exported_to"], history_file.to_str().unwrap());
    let exported: Value =
        serde_json::from_str(&fs::read_to_string(&history_file).unwrap()).unwrap();
    assert_eq!(exported, report["history"]);
}

#[test]
fn replay_logs_failed_saves_as_warnings() {
    let temp_dir = TempDir::new().unwrap();
    let inputs = temp_dir.path().join("inputs.json");
    fs::write(
        &inputs,
        r#"[{"name": "Alice", "email": "a@x.com"}, {"name": "Bob", "email": "b@x.com"}]"#,
    )
    .unwrap();

    let output = formpipe(temp_dir.path())
        .arg("replay")
        .arg(&inputs)
        .args(["--delay", "1ms"])
        .env("FORMPIPE_GATEWAY_FAILURE_RATE", "1.0")
        .output()
        .unwrap();

    assert!(output.status.success());
    let report = stdout_json(&output);
    assert_eq!(report["summary"]["failed"], 2);
    assert_eq!(report["counter"], 0);
    assert!(report.get("exported_to").is_none());

    let log = fs::read_to_string(
        temp_dir
            .path()
            .join(".formpipe")
            .join("logs")
            .join("formpipe.log"),
    )
    .unwrap();
    let warnings: Vec<_> = log
        .lines()
        .filter(|line| line.contains("WARN") && line.contains("SUBMIT-001"))
        .collect();
    assert_eq!(warnings.len(), 2);
}

#[test]
fn concurrent_replay_assigns_every_index_once() {
    let temp_dir = TempDir::new().unwrap();
    let inputs = temp_dir.path().join("inputs.yaml");
    let yaml: String = (0..6)
        .map(|n| format!("- name: User{n}\n  email: user{n}@x.com\n"))
        .collect();
    fs::write(&inputs, yaml).unwrap();

    let output = formpipe(temp_dir.path())
        .arg("replay")
        .arg(&inputs)
        .args(["--concurrent", "--delay", "5ms"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let report = stdout_json(&output);
    assert_eq!(report["summary"]["recorded"], 6);
    let history = report["history"].as_array().unwrap();
    for (position, record) in history.iter().enumerate() {
        assert_eq!(record["index"], position as u64);
        assert_eq!(record["name"] == "John", position % 2 == 1);
    }
}

#[test]
fn config_prints_resolved_values_and_env_docs() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("formpipe.toml"),
        "[mutation]\noverride_name = \"Jane\"\n",
    )
    .unwrap();

    formpipe(temp_dir.path())
        .arg("config")
        .env("FORMPIPE_GATEWAY_DELAY_MS", "40")
        .assert()
        .success()
        .stdout(predicate::str::contains("kind = \"simulated\""))
        .stdout(predicate::str::contains("delay_ms = 40"))
        .stdout(predicate::str::contains("override_name = \"Jane\""))
        .stdout(predicate::str::contains("# Environment overrides:"))
        .stdout(predicate::str::contains("FORMPIPE_GATEWAY_FAILURE_RATE"));
}

#[test]
fn help_lists_subcommands() {
    let temp_dir = TempDir::new().unwrap();

    formpipe(temp_dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("submit"))
        .stdout(predicate::str::contains("replay"))
        .stdout(predicate::str::contains("config"));
}
