//! Integration tests for list command

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{discshelf_cmd, seed_collection};

fn init_library(temp: &TempDir) {
    discshelf_cmd().arg("init").arg(temp.path()).assert().success();
}

fn seed_two_dated(temp: &TempDir) {
    seed_collection(
        temp.path(),
        r#"[
            {"id":"e1","title":"Blade Runner","mediaType":"4K UHD",
             "purchaseDate":"2023-01-01","memo":"","createdAt":"2023-01-01T00:00:00Z"},
            {"id":"e2","title":"Dune","mediaType":"Blu-ray",
             "purchaseDate":"2024-06-01","memo":"","createdAt":"2024-06-01T00:00:00Z"}
        ]"#,
    );
}

#[test]
fn test_list_empty_library() {
    let temp = TempDir::new().unwrap();
    init_library(&temp);

    discshelf_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_list_search_matches_and_misses() {
    let temp = TempDir::new().unwrap();
    init_library(&temp);
    seed_two_dated(&temp);

    discshelf_cmd()
        .current_dir(temp.path())
        .args(["list", "--search", "dune"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"))
        .stdout(predicate::str::contains("1 entry"));

    discshelf_cmd()
        .current_dir(temp.path())
        .args(["list", "--search", "matrix"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"));
}

#[test]
fn test_list_newest_first_by_default() {
    let temp = TempDir::new().unwrap();
    init_library(&temp);
    seed_two_dated(&temp);

    let output = discshelf_cmd()
        .current_dir(temp.path())
        .arg("list")
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let dune = stdout.find("Dune").unwrap();
    let blade = stdout.find("Blade Runner").unwrap();
    assert!(dune < blade);
}

#[test]
fn test_list_oldest_first() {
    let temp = TempDir::new().unwrap();
    init_library(&temp);
    seed_two_dated(&temp);

    let output = discshelf_cmd()
        .current_dir(temp.path())
        .args(["list", "--sort", "oldest"])
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let dune = stdout.find("Dune").unwrap();
    let blade = stdout.find("Blade Runner").unwrap();
    assert!(blade < dune);
}

#[test]
fn test_list_title_sort() {
    let temp = TempDir::new().unwrap();
    init_library(&temp);
    seed_two_dated(&temp);

    let output = discshelf_cmd()
        .current_dir(temp.path())
        .args(["list", "--sort", "title"])
        .output()
        .unwrap();

    let stdout = String::from_utf8(output.stdout).unwrap();
    let dune = stdout.find("Dune").unwrap();
    let blade = stdout.find("Blade Runner").unwrap();
    assert!(blade < dune);
}

#[test]
fn test_list_media_filter() {
    let temp = TempDir::new().unwrap();
    init_library(&temp);
    seed_two_dated(&temp);

    discshelf_cmd()
        .current_dir(temp.path())
        .args(["list", "--media", "4K UHD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Blade Runner"))
        .stdout(predicate::str::contains("Dune").not());

    discshelf_cmd()
        .current_dir(temp.path())
        .args(["list", "--media", "all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 entries"));
}

#[test]
fn test_list_invalid_sort_mode_fails() {
    let temp = TempDir::new().unwrap();
    init_library(&temp);

    discshelf_cmd()
        .current_dir(temp.path())
        .args(["list", "--sort", "sideways"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid sort mode"))
        .stderr(predicate::str::contains("newest, oldest, title, title-desc"));
}

#[test]
fn test_list_corrupt_collection_degrades_to_empty() {
    let temp = TempDir::new().unwrap();
    init_library(&temp);
    seed_collection(temp.path(), "{ definitely not json [");

    discshelf_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries found"))
        .stderr(predicate::str::contains("Warning"));
}

#[test]
fn test_list_backfills_legacy_records() {
    let temp = TempDir::new().unwrap();
    init_library(&temp);

    // Old-format record: "media" key, no createdAt, no id
    seed_collection(
        temp.path(),
        r#"[{"title":"Dune","media":"DVD","purchaseDate":"2023-05-20","memo":""}]"#,
    );

    discshelf_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("[DVD]  Dune"));
}
