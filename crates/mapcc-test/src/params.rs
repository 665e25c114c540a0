//! Regression test parameters and operations

use crate::error::{TestError, TestResult};
use crate::paths::{golden_dir, golden_file, output_file, regout_dir};
use mapcc_core::Raster;
use std::fs;
use std::path::Path;

/// Regression test mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegTestMode {
    /// Generate golden files
    Generate,
    /// Compare with golden files (default)
    #[default]
    Compare,
    /// Display mode - run without comparison
    Display,
}

impl RegTestMode {
    /// Parse mode from the `REGTEST_MODE` environment variable
    pub fn from_env() -> Self {
        match std::env::var("REGTEST_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "generate" => Self::Generate,
            "display" => Self::Display,
            _ => Self::Compare,
        }
    }
}

/// Regression test parameters
///
/// Tracks the state of a regression test: its name, the index of the
/// current check, the mode, and whether every check so far has passed.
pub struct RegParams {
    /// Name of the test (e.g., "label")
    pub test_name: String,
    /// Current test index (incremented before each test)
    index: usize,
    /// Test mode (generate, compare, or display)
    pub mode: RegTestMode,
    /// Overall success status
    success: bool,
    /// Recorded failures
    failures: Vec<String>,
}

impl RegParams {
    /// Create new regression test parameters
    ///
    /// The mode is taken from the `REGTEST_MODE` environment variable.
    pub fn new(test_name: &str) -> Self {
        Self::with_mode(test_name, RegTestMode::from_env())
    }

    /// Create new regression test parameters with an explicit mode
    pub fn with_mode(test_name: &str, mode: RegTestMode) -> Self {
        // Ensure directories exist
        let _ = fs::create_dir_all(golden_dir());
        let _ = fs::create_dir_all(regout_dir());

        eprintln!();
        eprintln!("////////////////////////////////////////////////");
        eprintln!("////////////////   {}_reg   ///////////////", test_name);
        eprintln!("////////////////////////////////////////////////");
        eprintln!("Mode: {:?}", mode);

        Self {
            test_name: test_name.to_string(),
            index: 0,
            mode,
            success: true,
            failures: Vec::new(),
        }
    }

    /// Get the current test index
    pub fn index(&self) -> usize {
        self.index
    }

    /// Check if in display mode
    pub fn display(&self) -> bool {
        self.mode == RegTestMode::Display
    }

    fn fail(&mut self, msg: String) {
        eprintln!("{}", msg);
        self.failures.push(msg);
        self.success = false;
    }

    /// Compare two floating-point values
    ///
    /// Returns `true` if `expected` and `actual` differ by at most `delta`.
    pub fn compare_values(&mut self, expected: f64, actual: f64, delta: f64) -> bool {
        self.index += 1;
        let diff = (expected - actual).abs();

        if diff > delta {
            let msg = format!(
                "Failure in {}_reg: value comparison for index {}\n\
                 difference = {} but allowed delta = {}\n\
                 expected = {}, actual = {}",
                self.test_name, self.index, diff, delta, expected, actual
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Compare two rasters for exact equality
    ///
    /// Returns `true` if both rasters have the same dimensions and pixels.
    pub fn compare_rasters(&mut self, r1: &Raster, r2: &Raster) -> bool {
        self.index += 1;

        if !r1.same_dimensions(r2) {
            let msg = format!(
                "Failure in {}_reg: raster comparison for index {} - dimension mismatch ({}x{} vs {}x{})",
                self.test_name,
                self.index,
                r1.width(),
                r1.height(),
                r2.width(),
                r2.height()
            );
            self.fail(msg);
            return false;
        }

        for row in 0..r1.height() {
            for col in 0..r1.width() {
                if r1.get(row, col) != r2.get(row, col) {
                    let msg = format!(
                        "Failure in {}_reg: raster comparison for index {} - pixel mismatch at ({}, {})",
                        self.test_name, self.index, row, col
                    );
                    self.fail(msg);
                    return false;
                }
            }
        }

        true
    }

    /// Compare two binary data arrays
    ///
    /// Returns `true` if the data is identical.
    pub fn compare_strings(&mut self, data1: &[u8], data2: &[u8]) -> bool {
        self.index += 1;

        if data1 != data2 {
            let msg = format!(
                "Failure in {}_reg: string comparison for index {}\n\
                 sizes: {} vs {}",
                self.test_name,
                self.index,
                data1.len(),
                data2.len()
            );
            self.fail(msg);
            false
        } else {
            true
        }
    }

    /// Write a raster as PNG and check against its golden file
    pub fn write_raster_and_check(&mut self, raster: &Raster) -> TestResult<()> {
        self.index += 1;
        let local_path = output_file(&self.test_name, self.index, "png");

        mapcc_io::write_raster(raster, &local_path).map_err(|e| TestError::ImageWrite {
            path: local_path.display().to_string(),
            message: e.to_string(),
        })?;

        self.check_file(&local_path, "png")
    }

    /// Write data to file and check against golden file
    ///
    /// # Arguments
    ///
    /// * `data` - Data to write
    /// * `ext` - File extension (e.g., "txt")
    pub fn write_data_and_check(&mut self, data: &[u8], ext: &str) -> TestResult<()> {
        self.index += 1;
        let local_path = output_file(&self.test_name, self.index, ext);

        fs::write(&local_path, data)?;
        self.check_file(&local_path, ext)
    }

    /// Check a file against its golden counterpart
    ///
    /// In generate mode, copies the file to golden.
    /// In compare mode, compares with golden file.
    /// In display mode, does nothing.
    fn check_file(&mut self, local_path: &Path, ext: &str) -> TestResult<()> {
        let golden_path = golden_file(&self.test_name, self.index, ext);

        match self.mode {
            RegTestMode::Generate => {
                fs::copy(local_path, &golden_path)?;
                eprintln!("Generated: {}", golden_path.display());
            }
            RegTestMode::Compare => {
                if !golden_path.exists() {
                    let msg = format!(
                        "Failure in {}_reg: golden file not found: {}",
                        self.test_name,
                        golden_path.display()
                    );
                    self.fail(msg);
                    return Ok(());
                }

                let local_data = fs::read(local_path)?;
                let golden_data = fs::read(&golden_path)?;

                if local_data != golden_data {
                    // PNG encoders may differ in compression; fall back to pixels
                    let same = ext == "png" && same_image_content(local_path, &golden_path);

                    if !same {
                        let msg = format!(
                            "Failure in {}_reg, index {}: comparing {} with {}",
                            self.test_name,
                            self.index,
                            local_path.display(),
                            golden_path.display()
                        );
                        self.fail(msg);
                    }
                }
            }
            RegTestMode::Display => {}
        }

        Ok(())
    }

    /// Clean up and report results
    ///
    /// Returns `true` if all tests passed.
    pub fn cleanup(self) -> bool {
        if self.success {
            eprintln!("SUCCESS: {}_reg", self.test_name);
        } else {
            eprintln!("FAILURE: {}_reg", self.test_name);
            for failure in &self.failures {
                eprintln!("  {}", failure);
            }
        }
        eprintln!();

        self.success
    }

    /// Check if all tests have passed so far
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Get list of failures
    pub fn failures(&self) -> &[String] {
        &self.failures
    }
}

/// Compare two image files pixel-by-pixel
fn same_image_content(path1: &Path, path2: &Path) -> bool {
    match (mapcc_io::read_image(path1), mapcc_io::read_image(path2)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_env() {
        // The variable may be set by the caller; only check that parsing
        // yields a valid mode
        let mode = RegTestMode::from_env();
        assert!(matches!(
            mode,
            RegTestMode::Compare | RegTestMode::Generate | RegTestMode::Display
        ));
    }

    #[test]
    fn test_compare_values_success() {
        let mut rp = RegParams::with_mode("params_values", RegTestMode::Display);
        assert!(rp.compare_values(100.0, 100.0, 0.0));
        assert!(rp.compare_values(100.0, 100.5, 1.0));
        assert!(rp.is_success());
        assert_eq!(rp.index(), 2);
    }

    #[test]
    fn test_compare_values_failure() {
        let mut rp = RegParams::with_mode("params_values_fail", RegTestMode::Display);
        assert!(!rp.compare_values(100.0, 200.0, 0.0));
        assert!(!rp.is_success());
        assert_eq!(rp.failures().len(), 1);
    }

    #[test]
    fn test_compare_rasters() {
        let mut rp = RegParams::with_mode("params_rasters", RegTestMode::Display);
        let a = Raster::from_pattern("#.\n.#").unwrap();
        let b = Raster::from_pattern("#.\n.#").unwrap();
        let c = Raster::from_pattern("#.\n##").unwrap();
        let d = Raster::from_pattern("#.#").unwrap();
        assert!(rp.compare_rasters(&a, &b));
        assert!(!rp.compare_rasters(&a, &c));
        assert!(!rp.compare_rasters(&a, &d));
        assert_eq!(rp.failures().len(), 2);
    }

    #[test]
    fn test_compare_strings() {
        let mut rp = RegParams::with_mode("params_strings", RegTestMode::Display);
        assert!(rp.compare_strings(b"abc", b"abc"));
        assert!(!rp.compare_strings(b"abc", b"abd"));
    }

    #[test]
    fn test_generate_then_compare_data() {
        let data = b"Connected component 1, number of pixels = 3\n";

        let mut rp = RegParams::with_mode("params_selftest", RegTestMode::Generate);
        rp.write_data_and_check(data, "txt").unwrap();
        assert!(rp.cleanup());

        let mut rp = RegParams::with_mode("params_selftest", RegTestMode::Compare);
        rp.write_data_and_check(data, "txt").unwrap();
        assert!(rp.cleanup());
    }

    #[test]
    fn test_compare_missing_golden_fails() {
        let mut rp = RegParams::with_mode("params_no_golden_file", RegTestMode::Compare);
        rp.write_data_and_check(b"x", "missing").unwrap();
        assert!(!rp.is_success());
    }

    #[test]
    fn test_generate_then_compare_raster() {
        let raster = Raster::from_pattern("##..\n.#..\n...#").unwrap();

        let mut rp = RegParams::with_mode("params_raster_selftest", RegTestMode::Generate);
        rp.write_raster_and_check(&raster).unwrap();
        assert!(rp.cleanup());

        let mut rp = RegParams::with_mode("params_raster_selftest", RegTestMode::Compare);
        rp.write_raster_and_check(&raster).unwrap();
        assert!(rp.cleanup());
    }
}
