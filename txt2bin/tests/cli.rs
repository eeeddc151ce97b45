use std::fs;
use std::process::Command;

use symbol_pack::{PackerConfig, unpack};
use tempfile::TempDir;
use txt2bin::{RunError, run};

fn txt2bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_txt2bin"));
    cmd.env_remove("TXT2BIN_BITS")
        .env_remove("TXT2BIN_POLICY")
        .env_remove("TXT2BIN_FLUSH")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn packs_skip6_example() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("numbers.txt");
    let output = dir.path().join("out.bin");
    fs::write(&source, "5 12\n65\n64\n").unwrap();

    let summary = run(PackerConfig::skip6(), &source, &output).unwrap();

    assert_eq!(summary.retained, 3);
    assert_eq!(summary.discarded, 1);
    assert_eq!(fs::read(&output).unwrap(), vec![0xC4, 0xF2]);
}

#[test]
fn repeated_runs_append() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("numbers.txt");
    let output = dir.path().join("out.bin");
    fs::write(&source, "5 12 64").unwrap();

    let config = PackerConfig::skip6().with_flush_on_finish(true);
    run(config, &source, &output).unwrap();
    run(config, &source, &output).unwrap();

    let bytes = fs::read(&output).unwrap();
    assert_eq!(bytes, vec![0xC4, 0xF2, 0x03, 0xC4, 0xF2, 0x03]);
    assert_eq!(unpack(&bytes[..3], 6, 3).unwrap(), vec![4, 11, 63]);
}

#[test]
fn missing_source_is_an_error() {
    let dir = TempDir::new().unwrap();
    let output = dir.path().join("out.bin");

    let err = run(PackerConfig::wrap5(), &dir.path().join("nope.txt"), &output).unwrap_err();
    assert!(matches!(err, RunError::Source { .. }));
    assert!(!output.exists());
}

#[test]
fn unopenable_output_is_an_error() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("numbers.txt");
    fs::write(&source, "1 2 3").unwrap();

    // a directory cannot be opened for appending
    let err = run(PackerConfig::wrap5(), &source, dir.path()).unwrap_err();
    assert!(matches!(err, RunError::Output { .. }));
}

#[test]
fn binary_defaults_to_five_bit_wrap() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("numbers.txt");
    let output = dir.path().join("out.bin");
    // symbols 0, 0, 31 -> one byte, 7 bits dropped
    fs::write(&source, "1 33 32").unwrap();

    let status = txt2bin().arg(&source).arg(&output).status().unwrap();

    assert_eq!(status.code(), Some(0));
    assert_eq!(fs::read(&output).unwrap(), vec![0x00]);
}

#[test]
fn binary_flush_flag() {
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("numbers.txt");
    let output = dir.path().join("out.bin");
    fs::write(&source, "1 33 32").unwrap();

    let status = txt2bin()
        .arg(&source)
        .arg(&output)
        .arg("--flush")
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(0));
    assert_eq!(fs::read(&output).unwrap(), vec![0x00, 0x7C]);
}

#[test]
fn binary_missing_arguments_prints_usage() {
    let out = txt2bin().output().unwrap();

    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Please provide a path to a source file and an output file"));
}

#[test]
fn binary_missing_source_exits_one() {
    let dir = TempDir::new().unwrap();
    let out = txt2bin()
        .arg(dir.path().join("nope.txt"))
        .arg(dir.path().join("out.bin"))
        .output()
        .unwrap();

    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Could not open source file"));
}
