//! Configuration layering as seen from the binary.

use crate::common::{TestWorkspace, stderr_of, stdout_of};

#[test]
fn test_init_creates_settings_file() {
    let ws = TestWorkspace::new();
    let output = ws.run(&["init"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    assert!(ws.path().join(".shapes").join("settings.toml").exists());
    assert!(stdout_of(&output).contains("Created configuration file at:"));
}

#[test]
fn test_init_refuses_to_overwrite() {
    let ws = TestWorkspace::new();
    assert_eq!(ws.run(&["init"]).status.code(), Some(0));

    let output = ws.run(&["init"]);
    assert_eq!(output.status.code(), Some(6));
    assert!(stderr_of(&output).contains("--force"));

    assert_eq!(ws.run(&["init", "--force"]).status.code(), Some(0));
}

#[test]
fn test_workspace_rectangles_drive_cpp_sample() {
    let ws = TestWorkspace::new();
    ws.write_settings("[demo]\nrectangles = [[2.0, 3.0]]\n");

    let output = ws.run(&["demo", "cpp"]);
    assert_eq!(
        stdout_of(&output),
        "Shape Information:\n\
         Shape: Rectangle, Points: 4, Area: 6, Perimeter: 10\n\
         Total area: 6\n"
    );
}

#[test]
fn test_settings_found_from_subdirectory() {
    let ws = TestWorkspace::new();
    ws.write_settings("[output]\nformat = \"json\"\n");
    let nested = ws.path().join("src").join("deep");
    std::fs::create_dir_all(&nested).unwrap();

    let output = ws.run_in(&nested, &["add", "1", "2"]);

    assert_eq!(output.status.code(), Some(0), "stderr: {}", stderr_of(&output));
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["data"]["result"], 3);
}

#[test]
fn test_explicit_config_path() {
    let ws = TestWorkspace::new();
    let custom = ws.path().join("custom.toml");
    std::fs::write(&custom, "[demo]\nrectangles = []\n").unwrap();

    let output = ws.run(&["--config", custom.to_str().unwrap(), "demo", "cpp"]);
    assert_eq!(stdout_of(&output), "Shape Information:\nTotal area: 0\n");
}

#[test]
fn test_missing_explicit_config_is_config_error() {
    let ws = TestWorkspace::new();
    let output = ws.run(&["--config", "does-not-exist.toml", "add", "1", "2"]);

    assert_eq!(output.status.code(), Some(6));
    assert!(stderr_of(&output).contains("does-not-exist.toml"));
}

#[test]
fn test_config_command_prints_toml() {
    let ws = TestWorkspace::new();
    ws.write_settings("[logging]\nlevel = \"info\"\n");

    let output = ws.run(&["config"]);
    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("Current Configuration:"));
    assert!(stdout.contains("level = \"info\""));
    assert!(stdout.contains("[demo]"));
}
