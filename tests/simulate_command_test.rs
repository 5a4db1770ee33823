use std::fs;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_command(args: &[&str]) -> Output {
    Command::new("cargo")
        .arg("run")
        .arg("--")
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_simulate_command_reports_transitions() {
    // 3 slides, 5500ms + 1400ms fade per cycle: two advances within 14s
    let output = run_command(&[
        "simulate",
        "--slides",
        "3",
        "--frame-ms",
        "40",
        "--run-ms",
        "14000",
    ]);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("slide 01 -> 02"),
        "Missing first transition: {}",
        stdout
    );
    assert!(
        stdout.contains("slide 02 -> 03"),
        "Missing second transition: {}",
        stdout
    );
    assert!(stdout.contains("transitions: 2"), "Wrong count: {}", stdout);
}

#[test]
fn test_simulate_command_with_events_and_markup() {
    let output = run_command(&[
        "simulate",
        "--slides",
        "4",
        "--frame-ms",
        "40",
        "--run-ms",
        "2000",
        "--events",
        "400:goto=3,800:pause",
        "--markup",
    ]);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("slide 01 -> 04"), "Missing goto: {}", stdout);
    assert!(stdout.contains("Final slide: 04"), "Wrong final slide: {}", stdout);
    assert!(
        stdout.contains(r#"<span>04</span> / 04"#),
        "Missing counter markup: {}",
        stdout
    );
}

#[test]
fn test_simulate_command_rejects_bad_events() {
    let output = run_command(&["simulate", "--events", "soon:pause"]);

    assert!(!output.status.success(), "Bad script should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Event script error"), "Unexpected stderr: {}", stderr);
}

#[test]
fn test_render_command_from_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    for name in ["02-kitchen.jpg", "01-bath.jpg"] {
        fs::write(temp_dir.path().join(name), b"jpeg").expect("Failed to write image");
    }

    let output = run_command(&[
        "render",
        "--dir",
        temp_dir.path().to_str().unwrap(),
        "--pattern",
        "*.jpg",
    ]);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    let bath = stdout.find("01-bath.jpg").expect("Missing first slide");
    let kitchen = stdout.find("02-kitchen.jpg").expect("Missing second slide");
    assert!(bath < kitchen, "Slides should be sorted: {}", stdout);
    assert!(stdout.contains(r#"hero__slide is-active"#), "Missing active slide: {}", stdout);
}

#[test]
fn test_render_command_missing_directory() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let missing = temp_dir.path().join("nope");

    let output = run_command(&["render", "--dir", missing.to_str().unwrap()]);

    assert!(!output.status.success(), "Missing directory should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Path not found"), "Unexpected stderr: {}", stderr);
}
