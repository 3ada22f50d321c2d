#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn discshelf_cmd() -> Command {
    let mut cmd = Command::cargo_bin("discshelf").unwrap();
    cmd.env_remove("DISCSHELF_ROOT");
    cmd
}

/// Write a collection file directly into an initialized library
pub fn seed_collection(root: &Path, json: &str) {
    std::fs::write(root.join(".discshelf").join("collection.json"), json).unwrap();
}
