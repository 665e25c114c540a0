//! Connected component report
//!
//! Plain-text summary of a labeling: one line per region followed by the
//! total region count.
//!
//! ```text
//! Connected component 2, number of pixels = 7
//! Connected component 1, number of pixels = 3
//! Total number of connected components = 2
//! ```

use crate::error::IoResult;
use mapcc_region::{RankedRegion, RegionTable};
use std::fmt;
use std::io::Write;

/// Region summary in a fixed order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComponentReport {
    entries: Vec<RankedRegion>,
}

impl ComponentReport {
    /// Report regions in discovery (id) order.
    pub fn from_table(table: &RegionTable) -> Self {
        Self {
            entries: table
                .sizes()
                .map(|(id, size)| RankedRegion::new(id, size))
                .collect(),
        }
    }

    /// Report regions in ranking order.
    pub fn from_ranking(ranked: &[RankedRegion]) -> Self {
        Self {
            entries: ranked.to_vec(),
        }
    }

    /// Reported entries.
    pub fn entries(&self) -> &[RankedRegion] {
        &self.entries
    }

    /// Number of reported regions.
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// Write the report text.
    pub fn write_to<W: Write>(&self, mut writer: W) -> IoResult<()> {
        write!(writer, "{}", self)?;
        Ok(())
    }
}

impl fmt::Display for ComponentReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in &self.entries {
            writeln!(
                f,
                "Connected component {}, number of pixels = {}",
                entry.id, entry.size
            )?;
        }
        write!(
            f,
            "Total number of connected components = {}",
            self.entries.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapcc_core::Raster;
    use mapcc_region::{label_regions, rank_regions};

    #[test]
    fn test_report_discovery_order() {
        let raster = Raster::from_pattern("#.###").unwrap();
        let table = label_regions(&raster).unwrap().table;
        let report = ComponentReport::from_table(&table);
        assert_eq!(
            report.to_string(),
            "Connected component 1, number of pixels = 1\n\
             Connected component 2, number of pixels = 3\n\
             Total number of connected components = 2"
        );
    }

    #[test]
    fn test_report_ranked_order() {
        let raster = Raster::from_pattern("#.###").unwrap();
        let table = label_regions(&raster).unwrap().table;
        let report = ComponentReport::from_ranking(&rank_regions(&table));
        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Connected component 2, number of pixels = 3\n"));
        assert_eq!(report.count(), 2);
    }

    #[test]
    fn test_report_empty() {
        let report = ComponentReport::default();
        assert_eq!(
            report.to_string(),
            "Total number of connected components = 0"
        );
    }
}
