//! End-to-end CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

const INSTANT: [&str; 6] = [
    "--profile-latency",
    "0ms",
    "--posts-latency",
    "0ms",
    "--comments-latency",
    "0ms",
];

const RELIABLE: [&str; 2] = ["--failure-rate", "0"];

fn feedfetch() -> Command {
    let mut cmd = Command::cargo_bin("feedfetch").expect("binary not found");
    cmd.env_remove("RUST_LOG")
        .env_remove("FEEDFETCH_USER_ID")
        .env_remove("FEEDFETCH_MODE")
        .env_remove("FEEDFETCH_SEED")
        .env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_flag() {
    feedfetch()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("comments"));
}

#[test]
fn version_flag() {
    feedfetch()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("feedfetch"));
}

#[test]
fn renders_user_posts_and_comments() {
    feedfetch()
        .args(INSTANT)
        .args(RELIABLE)
        .args(["-m", "sequential", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("User: Nicole Nigro (niclanigro)"))
        .stdout(predicate::str::contains("Email: nicole@example.com"))
        .stdout(predicate::str::contains("Async/Await rocks!"))
        .stdout(predicate::str::contains("  - Alice: Nice post!"));
}

#[test]
fn all_mode_prints_comparison() {
    feedfetch()
        .args(INSTANT)
        .args(RELIABLE)
        .assert()
        .success()
        .stdout(predicate::str::contains("Comparison Results:"))
        .stdout(predicate::str::contains("Sequential"))
        .stdout(predicate::str::contains("Parallel"));
}

#[test]
fn quiet_mode_suppresses_comparison() {
    feedfetch()
        .args(INSTANT)
        .args(RELIABLE)
        .arg("-q")
        .assert()
        .success()
        .stdout(predicate::str::contains("Comparison Results:").not());
}

#[test]
fn json_output_is_parseable() {
    let output = feedfetch()
        .args(INSTANT)
        .args(RELIABLE)
        .args(["-m", "parallel", "--json", "-u", "7"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["user"]["id"], 7);
    assert_eq!(json["posts"].as_array().unwrap().len(), 3);
    assert_eq!(json["posts"][0]["userId"], 7);
    assert_eq!(json["posts"][2]["comments"][1]["username"], "Bob");
}

#[test]
fn json_all_mode_is_one_document() {
    let output = feedfetch()
        .args(INSTANT)
        .args(RELIABLE)
        .arg("--json")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let runs = json.as_array().unwrap();
    assert_eq!(runs.len(), 2);
    assert_eq!(runs[0]["strategy"], "sequential");
    assert_eq!(runs[1]["strategy"], "concurrent");
    assert_eq!(runs[0]["aggregate"], runs[1]["aggregate"]);
    assert_eq!(runs[1]["aggregate"]["posts"].as_array().unwrap().len(), 3);
}

#[test]
fn forced_post_failure_is_isolated() {
    let output = feedfetch()
        .args(INSTANT)
        .args(RELIABLE)
        .args(["-m", "parallel", "--json", "--fail-post", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let posts = json["posts"].as_array().unwrap();
    assert_eq!(posts[0]["comments"].as_array().unwrap().len(), 2);
    assert!(posts[1]["comments"].as_array().unwrap().is_empty());
    assert_eq!(posts[2]["comments"].as_array().unwrap().len(), 2);
}

#[test]
fn forced_post_failure_is_reported() {
    feedfetch()
        .args(INSTANT)
        .args(RELIABLE)
        .args(["-m", "sequential", "--fail-post", "3"])
        .assert()
        .success()
        .stderr(predicate::str::contains(
            "Sequential: comments unavailable for post(s) 3",
        ));
}

#[test]
fn certain_failure_rate_empties_every_post() {
    feedfetch()
        .args(INSTANT)
        .args(["-m", "parallel", "--failure-rate", "1", "-q"])
        .assert()
        .success()
        .stdout(predicate::str::contains("My First Post"))
        .stdout(predicate::str::contains("Alice").not());
}

#[test]
fn invalid_mode() {
    feedfetch()
        .args(INSTANT)
        .args(RELIABLE)
        .args(["-m", "nonexistent"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn invalid_failure_rate() {
    feedfetch()
        .args(["--failure-rate", "1.5"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn invalid_latency() {
    feedfetch()
        .args(["--posts-latency", "whenever"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn completion_bash() {
    feedfetch()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("feedfetch"));
}

#[test]
fn oversized_latency_is_rejected() {
    feedfetch()
        .args(["--profile-latency", "307445734561825861m"])
        .assert()
        .failure()
        .code(4);
}
