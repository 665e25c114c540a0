//! mapcc-test - Regression test framework for mapcc
//!
//! A regression test is a numbered sequence of checks collected by
//! [`RegParams`]. Checks either compare values in memory or write a file to
//! `tests/regout` and compare it with its golden copy in `tests/golden`.
//!
//! The `REGTEST_MODE` environment variable selects what file checks do:
//!
//! - `generate`: copy the written file over the golden file
//! - `compare` (default): fail when the file differs from the golden file
//! - `display`: write the file only
//!
//! ```ignore
//! use mapcc_test::RegParams;
//!
//! let mut rp = RegParams::new("label");
//! rp.compare_values(7.0, table.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```

mod error;
mod params;
mod paths;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};
pub use paths::{golden_dir, regout_dir, test_data_path};

use mapcc_core::Raster;
use mapcc_io::{ColorImage, ColorThreshold};

/// Decode a colour map from `tests/data/images`.
pub fn load_test_image(name: &str) -> TestResult<ColorImage> {
    let path = test_data_path(name);
    mapcc_io::read_image(&path).map_err(|e| TestError::ImageLoad {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Decode a colour map and classify it into a binary raster.
pub fn load_test_raster(name: &str, threshold: &ColorThreshold) -> TestResult<Raster> {
    let image = load_test_image(name)?;
    mapcc_io::classify(&image, threshold).map_err(|e| TestError::ImageLoad {
        path: test_data_path(name).display().to_string(),
        message: e.to_string(),
    })
}
