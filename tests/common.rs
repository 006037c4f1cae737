#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn jl() -> Command {
    cargo_bin_cmd!("jardinlog")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_jardinlog.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a fresh temporary directory for auto-named export files
pub fn temp_out_dir(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_outdir", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create temp out dir");
    path.to_string_lossy().to_string()
}

/// Initialize DB and add a small dataset useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates tables)
    jl().args(["--db", db_path, "--test", "init"]) // uses --test init to create schema
        .assert()
        .success();

    jl().args([
        "--db",
        db_path,
        "add",
        "2024-03-05",
        "--loc",
        "delegacion",
        "--min",
        "90",
        "--desc",
        "corte de cesped y bordes",
    ])
    .assert()
    .success();

    jl().args([
        "--db",
        db_path,
        "add",
        "2024-03-20",
        "--loc",
        "farmacia",
        "--min",
        "45",
        "--desc",
        "poda de setos",
    ])
    .assert()
    .success();
}
