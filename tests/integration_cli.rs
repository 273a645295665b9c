use std::process::{Command, Output};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cylinder-cli"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

#[test]
fn test_cli_evaluate_default() {
    let output = run_cli(&["evaluate"]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("SIMULATION RESULTS"), "Should contain results table: {}", stdout);
    assert!(stdout.contains("Angular Accel"));
}

#[test]
fn test_cli_evaluate_torque_json() {
    let output = run_cli(&[
        "evaluate",
        "--mode", "torque",
        "--mass", "50",
        "--radius", "0.06",
        "--torque", "0.54",
        "--duration", "1.0",
        "--output", "json",
    ]);

    assert!(output.status.success(), "Command should succeed");
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("Should be valid JSON");
    let alpha = json["motion"]["angular_accel"].as_f64().unwrap();
    let velocity = json["kinematics"]["linear_velocity"].as_f64().unwrap();
    assert!((alpha - 6.0).abs() < 1e-9);
    assert!((velocity - 0.36).abs() < 1e-9);
    assert_eq!(json["motion_spec"]["mode"], "constant_torque");
}

#[test]
fn test_cli_evaluate_csv() {
    let output = run_cli(&["evaluate", "--output", "csv"]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.starts_with("metric,value"));
    assert!(stdout.contains("total_energy,"));
}

#[test]
fn test_cli_trajectory_csv_frame_count() {
    let output = run_cli(&[
        "trajectory",
        "--mode", "torque",
        "--torque", "0.54",
        "--duration", "1.0",
        "--output", "csv",
    ]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    // Header plus 30 frames at 30 Hz
    assert_eq!(stdout.lines().count(), 31);
    assert!(stdout.lines().nth(1).unwrap().starts_with("0,0.0000,"));
}

#[test]
fn test_cli_replay_prints_frames() {
    let output = run_cli(&[
        "replay",
        "--mode", "torque",
        "--duration", "0.5",
        "--every", "5",
    ]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    // Frames 0, 5, 10 and the final frame 14
    assert_eq!(stdout.lines().count(), 4);
    assert!(stdout.contains("Time: 0.00 s"));
    assert!(stdout.contains("Time: 0.50 s"));
}

#[test]
fn test_cli_rejects_out_of_range() {
    let output = run_cli(&["evaluate", "--mass", "500"]);
    assert!(!output.status.success(), "Out-of-range mass should fail");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("mass"), "Should name the parameter: {}", stderr);
}

#[test]
fn test_cli_invalid_geometry_warns() {
    let output = run_cli(&[
        "evaluate",
        "--shape", "hollow",
        "--radius", "0.1",
        "--inner-radius", "0.2",
        "--unchecked",
    ]);

    assert!(output.status.success(), "Invalid geometry is a warning, not an error");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Warning"), "Should warn: {}", stderr);
}

#[test]
fn test_cli_help() {
    let output = run_cli(&["--help"]);

    assert!(output.status.success(), "Help command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("evaluate"));
    assert!(stdout.contains("trajectory"));
    assert!(stdout.contains("replay"));
    assert!(stdout.contains("info"));
}

#[test]
fn test_cli_invalid_command() {
    let output = run_cli(&["invalid-command"]);
    assert!(!output.status.success(), "Invalid command should fail");
}

#[test]
fn test_cli_rejects_unbounded_frame_rate() {
    for args in [&["trajectory", "--fps", "1e30", "--output", "csv"][..], &["replay", "--fps", "1e30"][..]] {
        let output = run_cli(args);
        assert!(!output.status.success(), "{} should reject --fps 1e30", args[0]);
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("fps"), "Should name the parameter: {}", stderr);
        assert!(!stderr.contains("panicked"), "Should fail cleanly: {}", stderr);
    }
}

#[test]
fn test_cli_shape_names() {
    let output = run_cli(&["evaluate", "--shape", "thin-walled", "--output", "json"]);
    assert!(output.status.success(), "Command should succeed");
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("Should be valid JSON");
    assert_eq!(json["cylinder"]["shape"], "thin_walled");
    // I = M·R² = 50 · 0.06²
    let inertia = json["inertia"].as_f64().unwrap();
    assert!((inertia - 0.18).abs() < 1e-9);

    let output = run_cli(&["evaluate", "--shape", "cube"]);
    assert!(!output.status.success(), "Unknown shape should fail");
}

#[test]
fn test_cli_trajectory_energy_columns() {
    let output = run_cli(&[
        "trajectory",
        "--mode", "torque",
        "--torque", "0.54",
        "--duration", "1.0",
        "--output", "csv",
    ]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    let last: Vec<f64> = stdout
        .lines()
        .last()
        .unwrap()
        .split(',')
        .map(|v| v.parse().unwrap())
        .collect();
    // Final E_rot, E_trans and E_total for the reference torque case
    assert!((last[7] - 1.62).abs() < 1e-6);
    assert!((last[8] - 3.24).abs() < 1e-6);
    assert!((last[9] - 4.86).abs() < 1e-6);
}

#[test]
fn test_cli_replay_draws_hole_for_hollow() {
    let output = run_cli(&[
        "replay",
        "--shape", "hollow",
        "--inner-radius", "0.03",
        "--mode", "torque",
        "--duration", "0.1",
    ]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_eq!(stdout.lines().count(), 3);
    assert!(stdout.lines().all(|line| line.contains("hole 0.030 m")), "{}", stdout);
}
