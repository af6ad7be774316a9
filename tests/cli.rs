// Iconsmith - tests/cli.rs
//
// Drives the compiled binary to check console output and exit status.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn run(args: &[&str], asset_dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_iconsmith"))
        .arg("--asset-dir")
        .arg(asset_dir)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to launch iconsmith")
}

/// Temp project root with an empty `public/` directory.
fn empty_project() -> (tempfile::TempDir, PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let asset_dir = tmp.path().join("public");
    fs::create_dir(&asset_dir).unwrap();
    (tmp, asset_dir)
}

#[test]
fn missing_source_reports_and_exits_zero() {
    let (_tmp, asset_dir) = empty_project();
    let out = run(&[], &asset_dir);
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert!(out.status.success(), "status: {:?}", out.status);
    #[cfg(feature = "render")]
    {
        assert!(stdout.contains("Error generating icons:"), "stdout: {stdout}");
        assert!(stdout.contains("Alternative solution:"), "stdout: {stdout}");
        assert!(stdout.contains("convertio.co"), "stdout: {stdout}");
    }
    #[cfg(not(feature = "render"))]
    {
        assert!(stdout.contains("cargo install iconsmith"), "stdout: {stdout}");
        assert!(!stdout.contains("Error generating icons:"), "stdout: {stdout}");
    }
}

#[test]
fn strict_flag_exits_non_zero_on_failure() {
    let (_tmp, asset_dir) = empty_project();
    let out = run(&["--strict"], &asset_dir);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn strict_from_config_file() {
    let (tmp, asset_dir) = empty_project();
    fs::write(tmp.path().join("iconsmith.toml"), "[build]\nstrict = true\n").unwrap();
    let out = run(&[], &asset_dir);
    assert_eq!(out.status.code(), Some(1));
}

#[test]
fn config_warnings_go_to_stderr() {
    let (tmp, asset_dir) = empty_project();
    fs::write(tmp.path().join("iconsmith.toml"), "[icon]\nsizes = []\n").unwrap();
    let out = run(&[], &asset_dir);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Warning: [icon] sizes"), "stderr: {stderr}");
}

#[cfg(feature = "render")]
#[test]
fn successful_run_prints_progress() {
    let (_tmp, asset_dir) = empty_project();
    fs::copy(fixture("circle.svg"), asset_dir.join("icon.svg")).unwrap();

    let out = run(&["--strict"], &asset_dir);
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert!(out.status.success(), "stdout: {stdout}");
    assert!(stdout.starts_with("Generating icon images..."), "stdout: {stdout}");
    for size in [16, 32, 48, 64, 128, 256] {
        assert!(
            stdout.contains(&format!("  Generated {size}x{size}")),
            "missing {size} in: {stdout}"
        );
    }
    assert!(stdout.contains("Successfully created:"), "stdout: {stdout}");
    assert!(stdout.contains("Also created:"), "stdout: {stdout}");
    assert!(stdout.contains("Icon generation complete!"), "stdout: {stdout}");
    assert!(asset_dir.join("icon.ico").is_file());
    assert!(asset_dir.join("icon.png").is_file());
}
