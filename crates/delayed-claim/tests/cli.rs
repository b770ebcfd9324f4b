// File: crates/delayed-claim/tests/cli.rs
// Purpose: Run the generator binary in a scratch working directory.

use std::process::Command;

const BIN: &str = env!("CARGO_BIN_EXE_delayed-claim-er-change");

fn run_in(dir: &std::path::Path) -> std::process::Output {
    Command::new(BIN)
        .current_dir(dir)
        .env("RUST_LOG", "info")
        .output()
        .expect("spawn generator")
}

fn entries(dir: &std::path::Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .expect("read dir")
        .map(|e| e.expect("entry").file_name().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn writes_chart_into_working_directory() {
    if chart_core::TextShaper::try_new().is_err() {
        eprintln!("[cli] no system fonts; skipping successful run");
        return;
    }
    let dir = tempfile::tempdir().expect("tempdir");

    let out = run_in(dir.path());

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(entries(dir.path()), vec!["delayed_claim_er_change.png".to_string()]);
    let bytes = std::fs::read(dir.path().join("delayed_claim_er_change.png")).expect("read png");
    assert!(!bytes.is_empty());
    let img = image::load_from_memory(&bytes).expect("decode").to_rgba8();
    assert_eq!(img.dimensions(), (1920, 1440));
}

#[test]
fn missing_fonts_exit_non_zero() {
    if chart_core::TextShaper::try_new().is_ok() {
        eprintln!("[cli] system fonts present; fontless run not reproducible here");
        return;
    }
    let dir = tempfile::tempdir().expect("tempdir");

    let out = run_in(dir.path());

    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("no system fonts"));
    assert!(entries(dir.path()).is_empty());
}
