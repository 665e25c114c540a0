//! Region labeling regression test
//!
//! Checks the labeler on small hand-drawn rasters with known answers and
//! verifies the partition and connectivity properties on seeded random
//! rasters.
//!
//! Run with:
//! ```
//! cargo test -p mapcc-region --test label_reg
//! ```

use mapcc_core::{Coord, Raster};
use mapcc_region::{
    ConnectivityType, LabelOptions, Labeling, label_regions, label_regions_with,
};
use mapcc_test::RegParams;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashSet, VecDeque};

fn random_raster(rng: &mut StdRng, density: f64) -> Raster {
    let width = rng.gen_range(1..48);
    let height = rng.gen_range(1..48);
    let bits: Vec<bool> = (0..width * height).map(|_| rng.gen_bool(density)).collect();
    Raster::from_bits(width, height, &bits).unwrap()
}

/// Every foreground pixel is in exactly one region and nothing else is.
fn check_partition(raster: &Raster, labeling: &Labeling) -> bool {
    let mut seen = HashSet::new();
    for region in &labeling.table {
        for c in &region.coords {
            if !raster.is_foreground(*c) || !seen.insert(*c) {
                return false;
            }
        }
    }
    let foreground: HashSet<Coord> = raster.foreground().collect();
    seen == foreground
}

/// Each region is 8-connected within itself.
fn check_internal_connectivity(labeling: &Labeling) -> bool {
    labeling.table.iter().all(|region| {
        let members: HashSet<Coord> = region.coords.iter().copied().collect();
        let mut reached = HashSet::new();
        let mut queue = VecDeque::from([region.coords[0]]);
        reached.insert(region.coords[0]);
        while let Some(c) = queue.pop_front() {
            for m in &members {
                if c.is_adjacent8(*m) && reached.insert(*m) {
                    queue.push_back(*m);
                }
            }
        }
        reached.len() == members.len()
    })
}

/// No foreground pixel has an 8-neighbour in a different region.
fn check_regions_separated(raster: &Raster, labeling: &Labeling) -> bool {
    let map = labeling.label_map();
    raster.foreground().all(|c| {
        let id = map.get(c.row, c.col);
        ConnectivityType::EightWay
            .neighbors(c, raster.height(), raster.width())
            .filter(|n| raster.is_foreground(*n))
            .all(|n| map.get(n.row, n.col) == id)
    })
}

#[test]
fn label_reg() {
    let mut rp = RegParams::new("label");

    // --- All background ---
    let raster = Raster::new(3, 3).unwrap();
    let labeling = label_regions(&raster).unwrap();
    rp.compare_values(0.0, labeling.table.len() as f64, 0.0);
    rp.compare_values(0.0, labeling.visited.count_foreground() as f64, 0.0);

    // --- Single pixel at (1, 1) ---
    let raster = Raster::from_pattern("...\n.#.\n...").unwrap();
    let labeling = label_regions(&raster).unwrap();
    rp.compare_values(1.0, labeling.table.len() as f64, 0.0);
    let region = labeling.table.get(1).expect("region 1");
    rp.compare_values(1.0, region.id as f64, 0.0);
    rp.compare_values(1.0, region.size as f64, 0.0);
    rp.compare_values(
        1.0,
        if region.coords == vec![Coord::new(1, 1)] { 1.0 } else { 0.0 },
        0.0,
    );

    // --- "L" of five pixels, and a diagonal pair ---
    let raster = Raster::from_pattern(
        "
        #...
        #...
        #...
        ##..
        ",
    )
    .unwrap();
    let labeling = label_regions(&raster).unwrap();
    rp.compare_values(1.0, labeling.table.len() as f64, 0.0);
    rp.compare_values(5.0, labeling.table.size(1).unwrap_or(0) as f64, 0.0);

    let raster = Raster::from_pattern(
        "
        ....
        .#..
        ..#.
        ....
        ",
    )
    .unwrap();
    let labeling = label_regions(&raster).unwrap();
    rp.compare_values(1.0, labeling.table.len() as f64, 0.0);
    rp.compare_values(2.0, labeling.table.size(1).unwrap_or(0) as f64, 0.0);

    let four = label_regions_with(&raster, &LabelOptions::new(ConnectivityType::FourWay)).unwrap();
    rp.compare_values(2.0, four.table.len() as f64, 0.0);

    // --- Region straddling both side edges must not wrap ---
    let raster = Raster::from_pattern(
        "
        #....#
        #....#
        ",
    )
    .unwrap();
    let labeling = label_regions(&raster).unwrap();
    rp.compare_values(2.0, labeling.table.len() as f64, 0.0);

    // --- Degenerate rasters ---
    for (w, h) in [(0, 0), (0, 5), (5, 0)] {
        let raster = Raster::new(w, h).unwrap();
        let labeling = label_regions(&raster).unwrap();
        rp.compare_values(0.0, labeling.table.len() as f64, 0.0);
        rp.compare_rasters(&raster, &labeling.visited);
    }

    // --- Properties on random rasters ---
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for trial in 0..60 {
        let density = [0.1, 0.3, 0.45, 0.6, 0.9][trial % 5];
        let raster = random_raster(&mut rng, density);
        let labeling = label_regions(&raster).unwrap();

        let ok_partition = check_partition(&raster, &labeling);
        let ok_connected = check_internal_connectivity(&labeling);
        let ok_separated = check_regions_separated(&raster, &labeling);
        let ok_sizes = labeling
            .table
            .iter()
            .all(|r| r.size == r.coords.len() && r.size > 0);
        let ok_ids = labeling
            .table
            .iter()
            .enumerate()
            .all(|(i, r)| r.id as usize == i + 1);

        rp.compare_values(1.0, if ok_partition { 1.0 } else { 0.0 }, 0.0);
        rp.compare_values(1.0, if ok_connected { 1.0 } else { 0.0 }, 0.0);
        rp.compare_values(1.0, if ok_separated { 1.0 } else { 0.0 }, 0.0);
        rp.compare_values(1.0, if ok_sizes { 1.0 } else { 0.0 }, 0.0);
        rp.compare_values(1.0, if ok_ids { 1.0 } else { 0.0 }, 0.0);
        rp.compare_rasters(&raster, &labeling.visited);

        // Same raster, same table
        let again = label_regions(&raster).unwrap();
        rp.compare_values(
            1.0,
            if again.table == labeling.table { 1.0 } else { 0.0 },
            0.0,
        );

        // 4-way never merges more than 8-way
        let four =
            label_regions_with(&raster, &LabelOptions::new(ConnectivityType::FourWay)).unwrap();
        rp.compare_values(
            1.0,
            if four.table.len() >= labeling.table.len() { 1.0 } else { 0.0 },
            0.0,
        );
        rp.compare_values(
            raster.count_foreground() as f64,
            four.table.total_pixels() as f64,
            0.0,
        );
    }

    assert!(rp.cleanup(), "label regression test failed");
}

#[test]
fn label_map_reg() {
    let mut rp = RegParams::new("label_map");

    let raster = Raster::from_pattern(
        "
        ##....#
        ##....#
        .......
        ...#...
        ..###..
        ",
    )
    .unwrap();
    let labeling = label_regions(&raster).unwrap();
    let map = labeling.label_map();

    rp.compare_values(3.0, map.max_label() as f64, 0.0);
    rp.compare_values(1.0, map.get(1, 1).unwrap_or(99) as f64, 0.0);
    rp.compare_values(2.0, map.get(0, 6).unwrap_or(99) as f64, 0.0);
    rp.compare_values(3.0, map.get(4, 4).unwrap_or(99) as f64, 0.0);
    rp.compare_values(0.0, map.get(2, 2).unwrap_or(99) as f64, 0.0);

    let labeled = map.as_slice().iter().filter(|&&id| id != 0).count();
    rp.compare_values(raster.count_foreground() as f64, labeled as f64, 0.0);

    assert!(rp.cleanup(), "label_map regression test failed");
}
