//! Test fixture utilities for integration tests.

pub mod harness;

use std::path::PathBuf;

/// Returns the path to the fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

/// Returns the path to an SSH key fixture by name.
pub fn key_fixture(name: &str) -> PathBuf {
    fixtures_dir().join("keys").join(name)
}
