// File: crates/revenue-chart/tests/cli.rs
// Purpose: End-to-end runs of the binary: artifact, stdout line and exit status.

use std::path::PathBuf;
use std::process::Command;

const MESSAGE: &str = "Chart generated successfully: chart.png (512x512 pixels)";

fn work_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    if dir.exists() {
        std::fs::remove_dir_all(&dir).unwrap();
    }
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn writes_chart_and_prints_one_line() {
    let dir = work_dir("cli_ok");
    let out = Command::new(env!("CARGO_BIN_EXE_revenue-chart"))
        .current_dir(&dir)
        .output()
        .expect("spawn binary");

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert_eq!(stdout, format!("{MESSAGE}\n"));

    let img = image::open(dir.join("chart.png")).expect("chart.png decodes");
    assert_eq!((img.width(), img.height()), (512, 512));
}

#[test]
fn unwritable_output_fails_without_message() {
    let dir = work_dir("cli_blocked");
    // a directory where the image should go makes the write fail
    std::fs::create_dir(dir.join("chart.png")).unwrap();

    let out = Command::new(env!("CARGO_BIN_EXE_revenue-chart"))
        .current_dir(&dir)
        .output()
        .expect("spawn binary");

    assert!(!out.status.success());
    assert!(!String::from_utf8_lossy(&out.stdout).contains(MESSAGE));
}
