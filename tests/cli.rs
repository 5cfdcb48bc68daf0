use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_projectile_sim"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command")
}

#[test]
fn default_launch_prints_flight_time() {
    let output = run_cli(&[]);

    assert!(output.status.success(), "Command should succeed");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Time of flight: 7.1705 s"), "{stdout}");
    assert!(stdout.contains("Frames: 430 at 60 fps"), "{stdout}");
}

#[test]
fn flags_feed_the_solver() {
    let output = run_cli(&[
        "--y0", "0", "--speed", "10", "--angle", "45", "--gravity", "9.8",
    ]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Time of flight: 1.4431 s"), "{stdout}");
    assert!(stdout.contains("Horizontal distance: 10.2041 m"), "{stdout}");
}

#[test]
fn csv_output_lists_frames() {
    let output = run_cli(&["--format", "csv", "--fps", "10"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("frame,time_s,x_m,y_m"));
    assert_eq!(stdout.lines().count(), 71 + 1);
}

#[test]
fn json_output_parses() {
    let output = run_cli(&["-o", "json", "--angle", "90", "--y0", "0", "--speed", "20"]);

    assert!(output.status.success());
    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(value["inputs"]["angle_deg"], 90.0);
    assert!(value["summary"]["apex_height_m"].as_f64().unwrap() > 20.0);
}

#[test]
fn negative_gravity_is_reported_as_degenerate() {
    let output = run_cli(&["--gravity", "-9.8"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no valid trajectory for these inputs"), "{stderr}");
}

#[test]
fn zero_duration_is_not_an_error() {
    let output = run_cli(&["--y0", "0", "--speed", "0"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("No frames to animate."), "{stdout}");
}

#[test]
fn config_file_is_read() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("moon.toml");
    std::fs::write(
        &path,
        "[launch]\ny0_m = 0.0\nspeed_mps = 16.2\nangle_deg = 90.0\ngravity_mps2 = 1.62\n",
    )
    .unwrap();

    let output = run_cli(&["--config", path.to_str().unwrap()]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Time of flight: 20.0000 s"), "{stdout}");
}

#[test]
fn interactive_mode_reads_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_projectile_sim"))
        .arg("--interactive")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn command");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"0\n0\nten\n10\n45\n9.8\n")
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stdout.contains("Time of flight: 1.4431 s"), "{stdout}");
    assert!(stderr.contains("Please enter a valid number"));
}

#[test]
fn unsupported_chart_extension_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chart.bmpx");

    let output = run_cli(&["--plot", path.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unsupported chart format"), "{stderr}");
}

#[test]
fn plot_flag_writes_requested_chart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.svg");

    let output = run_cli(&["--plot", path.to_str().unwrap()]);

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let written = std::fs::metadata(&path).expect("chart should exist");
    assert!(written.len() > 0);
}

#[test]
fn bare_plot_flag_writes_timestamped_png() {
    let dir = tempfile::tempdir().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_projectile_sim"))
        .arg("--plot")
        .current_dir(dir.path())
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    let charts: Vec<_> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .filter(|name| name.starts_with("trajectory_") && name.ends_with(".png"))
        .collect();
    assert_eq!(charts.len(), 1, "{charts:?}");
}
