use assert_cmd::{cargo::cargo_bin_cmd, Command};
use std::fs;
use std::path::{Path, PathBuf};

pub fn ruta() -> Command {
    cargo_bin_cmd!("ruta")
}

/// Write a network description file into `dir` and return its path.
#[allow(dead_code)]
pub fn write_network(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("network.json");
    fs::write(&path, contents).expect("Failed to write network file");
    path
}

/// The triangle network: the direct 0-2 road loses to the route via 1.
#[allow(dead_code)]
pub const TRIANGLE: &str = r#"{ "vertices": 3, "edges": [[0, 1, 5], [1, 2, 3], [0, 2, 10]] }"#;

/// Two separate island pairs; no road connects them.
#[allow(dead_code)]
pub const ISLANDS: &str = r#"{ "vertices": 4, "edges": [[0, 1, 7], [2, 3, 9]] }"#;
