mod common;
use common::{init_db_with_data, jl, setup_test_db};
use predicates::prelude::*;

#[test]
fn test_list_shows_jobs_and_monthly_totals() {
    let db_path = setup_test_db("list_totals");
    init_db_with_data(&db_path);

    jl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-05"))
        .stdout(predicate::str::contains("2024-03-20"))
        .stdout(predicate::str::contains("Página 1 de 1 (2 trabajos)"))
        .stdout(predicate::str::contains("Totales mensuales:"))
        .stdout(predicate::str::contains("Marzo 2024: 2h 15m"));
}

#[test]
fn test_list_empty_db() {
    let db_path = setup_test_db("list_empty");

    jl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    jl().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No hay trabajos registrados."));
}

#[test]
fn test_show_job_detail_with_tags_and_photos() {
    let db_path = setup_test_db("show_detail");

    jl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    jl().args([
        "--db",
        &db_path,
        "add",
        "2024-05-02",
        "--loc",
        "optica",
        "--min",
        "60",
        "--desc",
        "riego y fertilizacion",
        "--tag",
        "riego",
        "--photo",
        "before:fotos/antes.jpg",
        "--photo",
        "after:fotos/despues.jpg",
    ])
    .assert()
    .success();

    jl().args(["--db", &db_path, "show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Trabajo #1"))
        .stdout(predicate::str::contains("Óptica"))
        .stdout(predicate::str::contains("1h 00m"))
        .stdout(predicate::str::contains("#riego"))
        .stdout(predicate::str::contains("1 antes / 1 después"))
        .stdout(predicate::str::contains("[Antes] fotos/antes.jpg"));
}

#[test]
fn test_del_removes_job() {
    let db_path = setup_test_db("del_job");
    init_db_with_data(&db_path);

    jl().args(["--db", &db_path, "del", "1", "--yes"])
        .assert()
        .success();

    jl().args(["--db", &db_path, "show", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No job found with id 1"));
}

#[test]
fn test_add_rejects_unknown_location() {
    let db_path = setup_test_db("add_bad_loc");

    jl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    jl().args([
        "--db", &db_path, "add", "2024-05-02", "--loc", "vivero", "--min", "30",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Invalid location"));
}

#[test]
fn test_add_rejects_bad_date() {
    let db_path = setup_test_db("add_bad_date");

    jl().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    jl().args([
        "--db", &db_path, "add", "05/03/2024", "--loc", "otro", "--min", "30",
    ])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Invalid date format"));
}
