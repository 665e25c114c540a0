//! Pixel connectivity
//!
//! Adjacency between pixels is implicit in their grid coordinates: a
//! neighbour is reached by adding a small offset to the row and column.
//! No explicit pixel graph is ever built.

use mapcc_core::Coord;

/// Edge neighbours: up, left, right, down.
const FOUR_WAY_OFFSETS: [(i32, i32); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// All eight neighbours in row-major order.
const EIGHT_WAY_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Connectivity type for region analysis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectivityType {
    /// 4-way connectivity (up, down, left, right)
    FourWay,
    /// 8-way connectivity (includes diagonals)
    #[default]
    EightWay,
}

impl ConnectivityType {
    /// `(d_row, d_col)` offsets of the neighbours of a pixel.
    pub fn offsets(self) -> &'static [(i32, i32)] {
        match self {
            ConnectivityType::FourWay => &FOUR_WAY_OFFSETS,
            ConnectivityType::EightWay => &EIGHT_WAY_OFFSETS,
        }
    }

    /// Check whether two pixels are neighbours under this connectivity.
    pub fn is_adjacent(self, a: Coord, b: Coord) -> bool {
        match self {
            ConnectivityType::FourWay => a.is_adjacent4(b),
            ConnectivityType::EightWay => a.is_adjacent8(b),
        }
    }

    /// In-bounds neighbours of `c` on a `height x width` grid.
    pub fn neighbors(self, c: Coord, height: u32, width: u32) -> impl Iterator<Item = Coord> {
        self.offsets()
            .iter()
            .filter_map(move |&(dr, dc)| c.offset(dr, dc, height, width))
    }
}
