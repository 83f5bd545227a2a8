//! Tests for the binary's command line.

mod common;

use common::write_config;
use std::process::Command;

fn noteboard_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_noteboard"));
    cmd.env_remove("NOTEBOARD_LOG");
    cmd
}

fn dump(args: &[&str]) -> serde_json::Value {
    let output = noteboard_cmd()
        .args(args)
        .arg("--dump")
        .output()
        .expect("Failed to execute command");
    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("dump is not JSON")
}

#[test]
fn help_lists_options() {
    let output = noteboard_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--config"));
    assert!(stdout.contains("--owner"));
    assert!(stdout.contains("--theme"));
    assert!(stdout.contains("--dump"));
}

#[test]
fn dump_uses_config_file() {
    let (_dir, path) = write_config(
        "[ui]\nowner = \"John\"\n\n[[groceries]]\nname = \"Milk\"\nis_purchased = true\n\n[[groceries]]\nname = \"Eggs\"\n",
    );
    let json = dump(&["--config", path.to_str().unwrap()]);
    assert_eq!(json["grocery"]["title"], "John's To Do List");
    assert_eq!(json["grocery"]["list"]["purchased_count"], 1);
    assert_eq!(json["grocery"]["list"]["items"][0]["name"], "Eggs");
    assert_eq!(json["notes"].as_array().map(Vec::len), Some(6));
}

#[cfg(target_os = "linux")]
#[test]
fn default_config_location_is_used_without_flag() {
    let home = tempfile::TempDir::new().unwrap();
    let config_dir = home.path().join("noteboard");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), "[ui]\nowner = \"Maya\"\n").unwrap();

    let output = noteboard_cmd()
        .env("XDG_CONFIG_HOME", home.path())
        .arg("--dump")
        .output()
        .expect("Failed to execute command");
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["grocery"]["title"], "Maya's To Do List");
}

#[test]
fn flags_override_config() {
    let (_dir, path) = write_config("[ui]\nowner = \"John\"\ntheme = \"light\"\n");
    let json = dump(&[
        "--config",
        path.to_str().unwrap(),
        "--owner",
        "Ana",
        "--theme",
        "dark",
    ]);
    assert_eq!(json["grocery"]["title"], "Ana's To Do List");
    assert_eq!(json["theme"], "dark");
}

#[test]
fn invalid_config_exits_with_error() {
    let (_dir, path) = write_config("[[groceries]]\nname = \"\"\n");
    let output = noteboard_cmd()
        .args(["--config", path.to_str().unwrap(), "--dump"])
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to load config"));
}

#[test]
fn invalid_theme_is_rejected() {
    let output = noteboard_cmd()
        .args(["--theme", "sepia", "--dump"])
        .output()
        .expect("Failed to execute command");
    assert!(!output.status.success());
}
