#![allow(dead_code)]

use std::path::Path;

use bugpattern_model::{Category, MaturityLevel, PatternDescriptor, SeverityLevel};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

/// Route registry logs through the test harness. Set `RUST_LOG` to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn pattern(name: &str, severity: SeverityLevel) -> PatternDescriptor {
    PatternDescriptor::new(
        name,
        Category::Jdk,
        severity,
        MaturityLevel::Mature,
        "Test pattern summary",
    )
}

/// Scratch directory removed when dropped.
pub fn temp_dir() -> TempDir {
    tempfile::Builder::new()
        .prefix("bugpattern-registry-")
        .tempdir()
        .unwrap()
}

pub fn write(path: &Path, contents: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, contents).unwrap();
}
