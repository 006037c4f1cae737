mod common;
use common::{init_db_with_data, jl, setup_test_db, temp_out};
use std::fs;
use std::path::Path;

#[test]
fn test_backup_copies_database() {
    let db_path = setup_test_db("backup_plain");
    init_db_with_data(&db_path);

    let out = temp_out("backup_plain", "sqlite");

    jl().args(["--db", &db_path, "backup", "--file", &out])
        .assert()
        .success();

    assert!(Path::new(&out).exists());
    assert!(fs::metadata(&out).expect("backup metadata").len() > 0);
}

#[test]
fn test_backup_compress_creates_zip() {
    let db_path = setup_test_db("backup_zip");
    init_db_with_data(&db_path);

    let out = temp_out("backup_zip", "sqlite");
    let zip_path = Path::new(&out).with_extension("zip");
    fs::remove_file(&zip_path).ok();

    jl().args(["--db", &db_path, "backup", "--file", &out, "--compress"])
        .assert()
        .success();

    assert!(zip_path.exists());
    // uncompressed copy is removed after zipping
    assert!(!Path::new(&out).exists());

    let bytes = fs::read(&zip_path).expect("read zip");
    assert!(bytes.starts_with(b"PK"));
}
