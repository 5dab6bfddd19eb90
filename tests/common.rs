#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn qm() -> Command {
    let mut cmd = cargo_bin_cmd!("quakemap");
    cmd.env_remove(quakemap::config::ACCESS_TOKEN_ENV);
    cmd
}

/// Path of the bundled sample feed
pub fn fixture_feed() -> String {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("feed.geojson")
        .to_string_lossy()
        .to_string()
}

/// Create a unique config path inside the system temp dir and remove any existing file
pub fn temp_config(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_quakemap.conf", name));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_quakemap_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `body` to a temp file and return its path
pub fn temp_feed(name: &str, body: &str) -> String {
    let p = temp_out(name, "geojson");
    fs::write(&p, body).expect("write temp feed");
    p
}
