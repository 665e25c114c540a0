//! Locations of test inputs and outputs inside the workspace
//!
//! ```text
//! tests/data/images/   input maps
//! tests/golden/        {name}_golden.{index:02}.{ext}
//! tests/regout/        {name}.{index:02}.{ext}
//! ```

use std::path::{Path, PathBuf};

/// Workspace root: this crate lives at `crates/mapcc-test`.
fn workspace_root() -> &'static Path {
    let manifest = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest
        .parent()
        .and_then(Path::parent)
        .unwrap_or(manifest)
}

/// Path of an input file under `tests/data/images`.
pub fn test_data_path(name: &str) -> PathBuf {
    workspace_root().join("tests").join("data").join("images").join(name)
}

/// Directory holding golden files.
pub fn golden_dir() -> PathBuf {
    workspace_root().join("tests").join("golden")
}

/// Directory receiving files written by regression tests.
pub fn regout_dir() -> PathBuf {
    workspace_root().join("tests").join("regout")
}

pub(crate) fn output_file(test_name: &str, index: usize, ext: &str) -> PathBuf {
    regout_dir().join(format!("{test_name}.{index:02}.{ext}"))
}

pub(crate) fn golden_file(test_name: &str, index: usize, ext: &str) -> PathBuf {
    golden_dir().join(format!("{test_name}_golden.{index:02}.{ext}"))
}
