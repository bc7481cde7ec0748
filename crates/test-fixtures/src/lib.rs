//! Fixture loader for balm reference data.
//!
//! The JSON files under `data/` use the verbatim wire field names of the
//! original reference data set (`Title`, `XP`, `"Issue Name"`,
//! `"Journal Template"`, `"Intervention Sub Type"`), so tests exercise the
//! exact interop format.

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Absolute path to a fixture file under this crate's `data/` directory.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("data")
        .join(relative_path)
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Load a fixture file as a raw string.
pub fn load_fixture_str(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}
