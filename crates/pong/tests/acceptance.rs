// Copyright 2025 Dotanuki Labs
// SPDX-License-Identifier: MIT

// Scenarios drive the real binary against a stub engine script, hence unix-only.
#![cfg(unix)]

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use temp_dir::TempDir;

fn sut() -> Command {
    Command::cargo_bin("pong").expect("Should be able to create a command")
}

fn stub_engine(sandbox: &TempDir, script: &str) -> PathBuf {
    let path = sandbox.path().join("pong-engine");
    fs::write(&path, format!("#!/bin/sh\n{script}\n")).expect("Cannot write the stub engine");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).expect("Cannot mark the stub engine executable");
    path
}

fn recording_engine(sandbox: &TempDir) -> (PathBuf, PathBuf) {
    let record = sandbox.path().join("arguments.txt");
    let engine = stub_engine(sandbox, &format!("printf '%s ' \"$@\" > {}", record.display()));
    (engine, record)
}

fn recorded_arguments(record: &Path) -> String {
    fs::read_to_string(record).expect("The stub engine should have recorded its arguments")
}

#[test]
fn should_launch_game_with_default_settings() {
    let sandbox = TempDir::new().expect("Cannot create temp dir");
    let (engine, record) = recording_engine(&sandbox);

    let execution = sut().env("PONG_ENGINE", &engine).env("DISPLAY", ":0").assert();
    execution
        .success()
        .stdout(predicate::str::contains("Game finished normally."));

    let arguments = recorded_arguments(&record);
    assert!(arguments.contains("--difficulty medium"));
    assert!(arguments.contains("--width 800"));
    assert!(arguments.contains("--height 600"));
    assert!(!arguments.contains("--fullscreen"));
}

#[test]
fn should_honor_explicit_difficulty_and_size() {
    let sandbox = TempDir::new().expect("Cannot create temp dir");
    let (engine, record) = recording_engine(&sandbox);

    let execution = sut()
        .args(["--difficulty", "hard", "--size", "1024", "768"])
        .env("PONG_ENGINE", &engine)
        .env("DISPLAY", ":0")
        .assert();
    execution.success();

    let arguments = recorded_arguments(&record);
    assert!(arguments.contains("--difficulty hard"));
    assert!(arguments.contains("--width 1024"));
    assert!(arguments.contains("--height 768"));
}

#[test]
fn should_forward_fullscreen_request_to_the_engine() {
    let sandbox = TempDir::new().expect("Cannot create temp dir");
    let (engine, record) = recording_engine(&sandbox);

    let execution = sut()
        .arg("--fullscreen")
        .env("PONG_ENGINE", &engine)
        .env("DISPLAY", ":0")
        .assert();
    execution.success();

    assert!(recorded_arguments(&record).contains("--fullscreen"));
}

#[test]
fn should_refuse_invalid_difficulty_without_starting_the_engine() {
    let sandbox = TempDir::new().expect("Cannot create temp dir");
    let (engine, record) = recording_engine(&sandbox);

    let execution = sut()
        .args(["--difficulty", "extreme"])
        .env("PONG_ENGINE", &engine)
        .env("DISPLAY", ":0")
        .assert();
    execution
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not a valid difficulty"));

    assert!(!record.exists());
}

#[test]
fn should_fall_back_to_default_size_and_still_launch() {
    let sandbox = TempDir::new().expect("Cannot create temp dir");
    let (engine, record) = recording_engine(&sandbox);

    let execution = sut()
        .args(["--size", "abc", "600"])
        .env("PONG_ENGINE", &engine)
        .env("DISPLAY", ":0")
        .assert();
    execution
        .success()
        .stdout(predicate::str::contains("invalid window size"))
        .stdout(predicate::str::contains("Using default 800x600"));

    let arguments = recorded_arguments(&record);
    assert!(arguments.contains("--width 800"));
    assert!(arguments.contains("--height 600"));
}

#[test]
fn should_clean_scratch_files_without_starting_the_engine() {
    let sandbox = TempDir::new().expect("Cannot create temp dir");
    let (engine, record) = recording_engine(&sandbox);

    let scratch = sandbox.path().join("scratch");
    fs::create_dir_all(scratch.join("logs")).expect("Cannot create scratch layout");
    fs::write(scratch.join("logs").join("last-session.log"), "rally").expect("Cannot write scratch file");

    let execution = sut()
        .arg("--clean")
        .env("PONG_ENGINE", &engine)
        .env("PONG_SCRATCH", &scratch)
        .env("DISPLAY", ":0")
        .assert();
    execution
        .success()
        .stdout(predicate::str::contains("Cleaning complete : 1 files removed"));

    assert!(!scratch.exists());
    assert!(!record.exists());
}

#[test]
fn should_report_missing_engine_distinctly() {
    let sandbox = TempDir::new().expect("Cannot create temp dir");

    let execution = sut()
        .env("PONG_ENGINE", sandbox.path().join("nowhere"))
        .env("DISPLAY", ":0")
        .assert();
    execution
        .failure()
        .code(1)
        .stderr(predicate::str::contains("game engine not found"))
        .stderr(predicate::str::contains("PONG_ENGINE"));
}

#[test]
fn should_report_abnormal_engine_exit_distinctly() {
    let sandbox = TempDir::new().expect("Cannot create temp dir");
    let engine = stub_engine(&sandbox, "exit 3");

    let execution = sut().env("PONG_ENGINE", &engine).env("DISPLAY", ":0").assert();
    execution
        .failure()
        .code(1)
        .stderr(predicate::str::contains("ended abnormally"));
}

#[cfg(target_os = "linux")]
#[test]
fn should_report_unreachable_display_without_starting_the_engine() {
    let sandbox = TempDir::new().expect("Cannot create temp dir");
    let (engine, record) = recording_engine(&sandbox);

    let execution = sut()
        .env("PONG_ENGINE", &engine)
        .env_remove("DISPLAY")
        .env_remove("WAYLAND_DISPLAY")
        .assert();
    execution
        .failure()
        .code(1)
        .stderr(predicate::str::contains("graphics subsystem unavailable"));

    assert!(!record.exists());
}

#[test]
fn should_refuse_malformed_argument_grammar() {
    let execution = sut().arg("--bogus").assert();
    execution.failure();
}
