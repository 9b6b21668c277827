//! Helper subcommands and their exit codes.

use crate::common::{TestWorkspace, stderr_of, stdout_of};

#[test]
fn test_add() {
    let ws = TestWorkspace::new();
    let output = ws.run(&["add", "5", "3"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "8\n");

    let output = ws.run(&["add", "-5", "3"]);
    assert_eq!(stdout_of(&output), "-2\n");
}

#[test]
fn test_area() {
    let ws = TestWorkspace::new();
    let output = ws.run(&["area", "10.5", "20.0"]);
    assert_eq!(stdout_of(&output), "210\n");
}

#[test]
fn test_point() {
    let ws = TestWorkspace::new();
    let output = ws.run(&["point", "10", "20"]);
    assert_eq!(stdout_of(&output), "Point: (10, 20)\n");
}

#[test]
fn test_distance() {
    let ws = TestWorkspace::new();
    let output = ws.run(&["distance", "0", "0", "3", "4"]);
    assert_eq!(stdout_of(&output), "5\n");
}

#[test]
fn test_rect_lists_shapes_and_total() {
    let ws = TestWorkspace::new();
    let output = ws.run(&["rect", "10x5", "3x4"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(
        stdout_of(&output),
        "Shape Information:\n\
         Shape: Rectangle, Points: 4, Area: 50, Perimeter: 30\n\
         Shape: Rectangle, Points: 4, Area: 12, Perimeter: 14\n\
         Total area: 62\n"
    );
}

#[test]
fn test_rect_table() {
    let ws = TestWorkspace::new();
    let output = ws.run(&["rect", "10x5", "3x4", "--table"]);

    assert_eq!(output.status.code(), Some(0));
    let table = stdout_of(&output);
    assert!(table.contains("Perimeter"));
    assert!(table.contains("TOTAL"));
    assert!(table.contains("62"));
}

#[test]
fn test_total_area() {
    let ws = TestWorkspace::new();
    let output = ws.run(&["total", "10x5", "3x4"]);
    assert_eq!(stdout_of(&output), "Total area: 62\n");
}

#[test]
fn test_total_area_of_nothing_is_zero() {
    let ws = TestWorkspace::new();
    let output = ws.run(&["total"]);
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "Total area: 0\n");
}

#[test]
fn test_malformed_rectangle_exits_with_invalid_input() {
    let ws = TestWorkspace::new();
    let output = ws.run(&["rect", "10"]);

    assert_eq!(output.status.code(), Some(4));
    assert!(stdout_of(&output).is_empty());
    let stderr = stderr_of(&output);
    assert!(stderr.contains("Invalid dimensions '10'"), "stderr: {stderr}");
    assert!(stderr.contains("Suggestion:"));
}

#[test]
fn test_malformed_rectangle_json_error() {
    let ws = TestWorkspace::new();
    let output = ws.run(&["--json", "total", "axb"]);

    assert_eq!(output.status.code(), Some(4));
    let json: serde_json::Value = serde_json::from_str(&stderr_of(&output)).unwrap();
    assert_eq!(json["status"], "error");
    assert_eq!(json["code"], "INVALID_DIMENSIONS");
    assert_eq!(json["exit_code"], 4);
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    let ws = TestWorkspace::new();
    let output = ws.run(&["triangle"]);
    assert_eq!(output.status.code(), Some(2));
}

#[cfg(target_os = "linux")]
#[test]
fn test_write_failure_is_io_error() {
    let ws = TestWorkspace::new();
    let commands: [&[&str]; 6] = [
        &["add", "1", "2"],
        &["total", "10x5"],
        &["rect", "10x5", "--table"],
        &["--json", "demo", "cpp"],
        &["demo", "c"],
        &["config"],
    ];

    for args in commands {
        let dev_full = std::fs::OpenOptions::new()
            .write(true)
            .open("/dev/full")
            .unwrap();
        let output = ws
            .command(ws.path(), args)
            .stdout(std::process::Stdio::from(dev_full))
            .output()
            .unwrap();

        assert_eq!(output.status.code(), Some(5), "args: {args:?}");
        assert!(stderr_of(&output).contains("I/O error"), "args: {args:?}");
    }
}
