//! Integration tests for edit and remove commands

use predicates::prelude::*;
use tempfile::TempDir;

mod common;
use common::{discshelf_cmd, seed_collection};

fn seeded_library() -> TempDir {
    let temp = TempDir::new().unwrap();
    discshelf_cmd().arg("init").arg(temp.path()).assert().success();
    seed_collection(
        temp.path(),
        r#"[
            {"id":"e1","title":"Dune","mediaType":"DVD",
             "purchaseDate":"2024-01-01","memo":"","createdAt":"2024-01-01T00:00:00Z"},
            {"id":"e2","title":"Oldboy","mediaType":"DVD",
             "purchaseDate":"","memo":"","createdAt":"2024-02-01T00:00:00Z"}
        ]"#,
    );
    temp
}

#[test]
fn test_edit_overwrites_fields() {
    let temp = seeded_library();

    discshelf_cmd()
        .current_dir(temp.path())
        .args(["edit", "e1", "--media", "4K UHD", "--memo", "upgraded"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated \"Dune\" (e1)"));

    discshelf_cmd()
        .current_dir(temp.path())
        .args(["list", "--media", "4K UHD"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"))
        .stdout(predicate::str::contains("upgraded"));
}

#[test]
fn test_edit_untouched_fields_survive() {
    let temp = seeded_library();

    discshelf_cmd()
        .current_dir(temp.path())
        .args(["edit", "e1", "--title", "Dune: Part Two"])
        .assert()
        .success();

    discshelf_cmd()
        .current_dir(temp.path())
        .args(["list", "--search", "part two"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-01-01"))
        .stdout(predicate::str::contains("[DVD]"));
}

#[test]
fn test_edit_unknown_id_is_noop() {
    let temp = seeded_library();

    discshelf_cmd()
        .current_dir(temp.path())
        .args(["edit", "missing", "--title", "X"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry with id missing"));
}

#[test]
fn test_edit_blank_title_fails() {
    let temp = seeded_library();

    discshelf_cmd()
        .current_dir(temp.path())
        .args(["edit", "e1", "--title", "  "])
        .assert()
        .failure()
        .code(4);

    // Entry kept its last valid state
    discshelf_cmd()
        .current_dir(temp.path())
        .args(["list", "--search", "dune"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune"));
}

#[test]
fn test_remove_entry() {
    let temp = seeded_library();

    discshelf_cmd()
        .current_dir(temp.path())
        .args(["remove", "e1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed e1"));

    discshelf_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Dune").not())
        .stdout(predicate::str::contains("1 entry"));
}

#[test]
fn test_remove_unknown_id_is_noop() {
    let temp = seeded_library();

    discshelf_cmd()
        .current_dir(temp.path())
        .args(["remove", "missing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry with id missing"));

    discshelf_cmd()
        .current_dir(temp.path())
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("2 entries"));
}
