//! Both sample programs run end to end through the binary.

use crate::common::{TestWorkspace, stdout_of};

#[test]
fn test_c_sample_prints_point() {
    let ws = TestWorkspace::new();
    let output = ws.run(&["demo", "c"]);

    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout_of(&output), "Point: (10, 20)\n");
}

#[test]
fn test_cpp_sample_prints_shape_information() {
    let ws = TestWorkspace::new();
    let output = ws.run(&["demo", "cpp"]);

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
fn test_c_sample_json_reports_computed_values() {
    let ws = TestWorkspace::new();
    let output = ws.run(&["demo", "c", "--json"]);

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    assert_eq!(json["status"], "success");
    assert_eq!(json["data"]["point"]["x"], 10);
    assert_eq!(json["data"]["point"]["y"], 20);
    assert_eq!(json["data"]["sum"], 8);
    assert_eq!(json["data"]["area"], 210.0);
}

#[test]
fn test_cpp_sample_json_lists_shapes() {
    let ws = TestWorkspace::new();
    let output = ws.run(&["--json", "demo", "cpp"]);

    assert_eq!(output.status.code(), Some(0));
    let json: serde_json::Value = serde_json::from_str(&stdout_of(&output)).unwrap();
    let shapes = json["data"]["shapes"].as_array().unwrap();
    assert_eq!(shapes.len(), 2);
    assert_eq!(shapes[0]["area"], 50.0);
    assert_eq!(shapes[1]["perimeter"], 14.0);
    assert_eq!(json["data"]["total_area"], 62.0);
}
