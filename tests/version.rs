//! Integration test: drive the binary without a terminal UI

use std::fs;
use std::process::Command;

#[test]
fn binary_prints_version() {
    let output = Command::new(env!("CARGO_BIN_EXE_bubblecell"))
        .arg("--version")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(
        stdout.contains("0.1.0"),
        "Expected output to contain version '0.1.0', but got: {}",
        stdout
    );
}

#[test]
fn report_flag_prints_every_cell() {
    let dir = std::env::temp_dir().join("bubblecell_report_cli");
    fs::create_dir_all(&dir).expect("create temp dir");

    let config = dir.join("config.toml");
    let log = dir.join("bubblecell.log");
    fs::write(
        &config,
        format!("item_width = 320.0\nlog_file_path = {:?}\n", log.display().to_string()),
    )
    .expect("write config");

    let conversation = dir.join("chat.json");
    fs::write(
        &conversation,
        r#"{
            "viewer": {"id": "me", "display_name": "my user"},
            "messages": [
                {
                    "id": "1",
                    "sender": {"id": "other", "display_name": "other user"},
                    "created_at": "2019-08-27T09:00:00Z",
                    "kind": {"type": "text", "value": "Hi"}
                },
                {
                    "id": "2",
                    "sender": {"id": "me", "display_name": "my user"},
                    "created_at": "2019-08-27T09:01:00Z",
                    "kind": {"type": "text", "value": "Hello"},
                    "failed": true
                }
            ]
        }"#,
    )
    .expect("write conversation");

    let output = Command::new(env!("CARGO_BIN_EXE_bubblecell"))
        .arg(&conversation)
        .arg("--report")
        .arg("--config")
        .arg(&config)
        .env_remove("BUBBLECELL_ITEM_WIDTH")
        .output()
        .expect("Failed to execute binary");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(output.status.success(), "binary failed: {:?}", output);
    assert_eq!(stdout.lines().count(), 3, "unexpected report:\n{}", stdout);
    assert!(stdout.contains("320x"), "width override missing:\n{}", stdout);
    // failed outgoing message carries the 24pt strip
    assert!(
        stdout.lines().nth(1).is_some_and(|line| line.ends_with("/24")),
        "failed strip missing:\n{}",
        stdout
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn missing_conversation_file_fails() {
    let output = Command::new(env!("CARGO_BIN_EXE_bubblecell"))
        .arg("/nonexistent/bubblecell/chat.json")
        .arg("--report")
        .arg("--config")
        .arg("/nonexistent/bubblecell/config.toml")
        .output()
        .expect("Failed to execute binary");

    assert!(!output.status.success());
}

#[test]
fn unsizable_message_kind_is_rejected_without_panic() {
    let dir = std::env::temp_dir().join("bubblecell_custom_kind_cli");
    fs::create_dir_all(&dir).expect("create temp dir");

    let config = dir.join("config.toml");
    let log = dir.join("bubblecell.log");
    fs::write(&config, format!("log_file_path = {:?}\n", log.display().to_string()))
        .expect("write config");

    let conversation = dir.join("chat.json");
    fs::write(
        &conversation,
        r#"{
            "viewer": {"id": "me", "display_name": "my user"},
            "messages": [
                {
                    "id": "1",
                    "sender": {"id": "other", "display_name": "other user"},
                    "created_at": "2019-08-27T09:00:00Z",
                    "kind": {"type": "custom", "value": "poll"}
                }
            ]
        }"#,
    )
    .expect("write conversation");

    let output = Command::new(env!("CARGO_BIN_EXE_bubblecell"))
        .arg(&conversation)
        .arg("--report")
        .arg("--config")
        .arg(&config)
        .output()
        .expect("Failed to execute binary");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success());
    assert!(!stderr.contains("panicked"), "binary panicked:\n{}", stderr);
    assert!(stderr.contains("no registered sizer"), "unexpected error:\n{}", stderr);

    let _ = fs::remove_dir_all(&dir);
}
