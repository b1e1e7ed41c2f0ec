use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Run from an empty directory so no stray `swatchpad.toml` is picked up.
fn cmd(dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("swatchpad");
    cmd.current_dir(dir.path());
    cmd
}

#[test]
fn test_convert_prints_every_format() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["convert", "#ff0000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("HEX   #FF0000"))
        .stdout(predicate::str::contains("RGB   rgb(255, 0, 0)"))
        .stdout(predicate::str::contains("HSL   hsl(0, 100%, 50%)"))
        .stdout(predicate::str::contains("HSV   hsv(0, 100%, 100%)"))
        .stdout(predicate::str::contains("CMYK  cmyk(0%, 100%, 100%, 0%)"))
        .stdout(predicate::str::contains("LAB   lab("));
}

#[test]
fn test_convert_accepts_missing_hash() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["convert", "000000"])
        .assert()
        .success()
        .stdout(predicate::str::contains("cmyk(0%, 0%, 0%, 100%)"));
}

#[test]
fn test_convert_json() {
    let dir = TempDir::new().unwrap();
    let output = cmd(&dir)
        .args(["convert", "ffffff", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["hex"], "#FFFFFF");
    assert_eq!(value["hsl"], "hsl(0, 0%, 100%)");
}

#[test]
fn test_convert_yaml() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["convert", "#4ecdc4", "--format", "yaml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("hex:"))
        .stdout(predicate::str::contains("#4ECDC4"))
        .stdout(predicate::str::contains("rgb(78, 205, 196)"));
}

#[test]
fn test_convert_invalid_hex_fails() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["convert", "#abc"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid hex color"));
}

#[test]
fn test_shadow_defaults() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("shadow")
        .assert()
        .success()
        .stdout("box-shadow: 10px 10px 10px 0px #1e293b;\n");
}

#[test]
fn test_shadow_flags_are_clamped() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["shadow", "--x", "-80", "--blur", "99", "--color", "black"])
        .assert()
        .success()
        .stdout("box-shadow: -50px 10px 50px 0px black;\n");
}

#[test]
fn test_shadow_rejects_bad_color() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["shadow", "--color", "nope"])
        .assert()
        .failure();
}

#[test]
fn test_shadow_reads_config_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("swatchpad.toml"),
        "[shadow]\nspread = -4\ncolor = \"#000\"\n",
    )
    .unwrap();

    cmd(&dir)
        .arg("shadow")
        .assert()
        .success()
        .stdout("box-shadow: 10px 10px 10px -4px #000;\n");
}

#[test]
fn test_shadow_env_overrides_file() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("swatchpad.toml"), "[shadow]\nblur = 4\n").unwrap();

    cmd(&dir)
        .env("SWATCHPAD_SHADOW__BLUR", "7")
        .arg("shadow")
        .assert()
        .success()
        .stdout(predicate::str::contains(" 7px 0px"));
}

#[test]
fn test_offset_forward() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["offset", "70", "70"])
        .assert()
        .success()
        .stdout("x=0 y=0\n");

    cmd(&dir)
        .args(["offset", "200", "70"])
        .assert()
        .success()
        .stdout("x=50 y=0\n");
}

#[test]
fn test_offset_inverse() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["offset", "--inverse", "--", "50", "-50"])
        .assert()
        .success()
        .stdout("left=122.00 top=0.00\n");
}

#[test]
fn test_offset_custom_geometry() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["offset", "100", "50", "--size", "100", "--handle", "0", "--max-offset", "10"])
        .assert()
        .success()
        .stdout("x=10 y=0\n");
}

#[test]
fn test_missing_config_file_fails() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["--config", "missing.toml", "shadow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_completions() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("swatchpad"));
}
