// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Find the cheapest top-to-bottom seam through an energy map
//!
//! Classic dynamic programming: each cell of the cost map holds the
//! least total energy of any 8-connected path from the top row down
//! to that cell, along with the column in the row above that the path
//! came through.  The cheapest cell of the bottom row is the end of
//! the seam; following the parents back up gives the rest.

use crate::energy::EnergyMap;
use crate::options::RightEdge;
use crate::twodmap::TwoDimensionalMap;

/// A seam: one column index per row, top to bottom.
pub type Seam = Vec<u32>;

/// A cell of the cost map: cumulative cost, and the column of the
/// row above it came from.  Row zero has no parent.
#[derive(Default, Debug, Copy, Clone, PartialEq, Eq)]
pub struct CostAndParent {
    pub cost: u64,
    pub parent: Option<u32>,
}

/// Pick the parent of column `x` from the row above.  The centre is
/// the default; the left neighbour displaces it on a tie, the right
/// neighbour only when strictly cheaper.
fn cheapest_parent(above: &[CostAndParent], x: u32, right_edge: RightEdge) -> u32 {
    let width = above.len() as u32;
    let mut best = x;
    if x > 0 && above[x as usize - 1].cost <= above[best as usize].cost {
        best = x - 1;
    }
    if right_edge.allows(x, width) && above[x as usize + 1].cost < above[best as usize].cost {
        best = x + 1;
    }
    best
}

/// Build the cost map for an energy map.  Row `y` depends only on the
/// finished row `y - 1`.
pub fn cost_map(energy: &EnergyMap, right_edge: RightEdge) -> TwoDimensionalMap<CostAndParent> {
    let (width, height) = energy.dimensions();
    let mut target: TwoDimensionalMap<CostAndParent> = TwoDimensionalMap::new(width, height);

    // Populate the first row with their native energies.
    for x in 0..width {
        target[(x, 0)].cost = energy[(x, 0)];
    }

    let mut above = Vec::with_capacity(width as usize);
    for y in 1..height {
        above.clear();
        above.extend_from_slice(target.row(y - 1));
        for x in 0..width {
            let parent = cheapest_parent(&above, x, right_edge);
            target[(x, y)] = CostAndParent {
                cost: energy[(x, y)] + above[parent as usize].cost,
                parent: Some(parent),
            };
        }
    }
    target
}

/// Walk a finished cost map from the cheapest bottom cell (the
/// leftmost, on a tie) back up to the top row.
pub fn backtrack(costs: &TwoDimensionalMap<CostAndParent>) -> Seam {
    let (width, height) = costs.dimensions();
    if height == 0 {
        return Seam::new();
    }

    let mut seam_col = (0..width)
        .min_by_key(|x| costs[(*x, height - 1)].cost)
        .unwrap_or(0);
    let mut seam = vec![0; height as usize];
    for y in (0..height).rev() {
        seam[y as usize] = seam_col;
        seam_col = costs[(seam_col, y)].parent.unwrap_or(seam_col);
    }
    seam
}

/// Given an energy map, return the x-coordinate of the seam to remove
/// on each row.
pub fn find_vertical_seam(energy: &EnergyMap, right_edge: RightEdge) -> Seam {
    backtrack(&cost_map(energy, right_edge))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emap(width: u32, data: &[u64]) -> EnergyMap {
        TwoDimensionalMap::from_vec(width, data.len() as u32 / width, data.to_vec()).unwrap()
    }

    fn parents(costs: &TwoDimensionalMap<CostAndParent>, y: u32) -> Vec<Option<u32>> {
        costs.row(y).iter().map(|c| c.parent).collect()
    }

    fn is_connected(seam: &[u32]) -> bool {
        seam.windows(2).all(|w| (w[0] as i64 - w[1] as i64).abs() <= 1)
    }

    // The energies of the four-by-four white, black, red and blue
    // picture used throughout the crate's tests.
    const FIXTURE_ENERGY: [u64; 16] = [
        195075, 130050, 325125, 390150, //
        65025, 195075, 130050, 130050, //
        130050, 130050, 130050, 195075, //
        390150, 130050, 195075, 390150,
    ];

    // The grid from the pnmseam seam tests.
    const ENERGY_DATA: [u64; 20] = [9, 9, 0, 9, 9, 9, 1, 9, 8, 9, 9, 9, 9, 9, 0, 9, 9, 9, 0, 9];

    #[test]
    fn fixture_seam() {
        let energy = emap(4, &FIXTURE_ENERGY);
        let costs = cost_map(&energy, RightEdge::Excluded);
        let totals: Vec<u64> = costs.row(3).iter().map(|c| c.cost).collect();
        assert_eq!(totals, vec![715275, 455175, 520200, 780300]);
        assert_eq!(parents(&costs, 0), vec![None; 4]);
        assert_eq!(parents(&costs, 1), vec![Some(1), Some(1), Some(1), Some(2)]);
        assert_eq!(parents(&costs, 2), vec![Some(0), Some(0), Some(2), Some(2)]);
        assert_eq!(parents(&costs, 3), vec![Some(0), Some(0), Some(1), Some(2)]);
        assert_eq!(backtrack(&costs), vec![1, 0, 0, 1]);
    }

    #[test]
    fn ties_prefer_left_then_centre_then_right() {
        #[rustfmt::skip]
        let energy = emap(4, &[
            2, 2, 1, 1,
            0, 0, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
        ]);
        for edge in &[RightEdge::Excluded, RightEdge::Included] {
            let costs = cost_map(&energy, *edge);
            // Column 0: centre beats an equal right.  Column 1: left
            // beats an equal centre, then a cheaper right beats both.
            // Column 3: left beats an equal centre.
            assert_eq!(parents(&costs, 1), vec![Some(0), Some(2), Some(2), Some(2)]);
        }
    }

    #[test]
    fn excluded_right_edge_never_steps_into_last_column() {
        #[rustfmt::skip]
        let energy = emap(4, &[
            3, 3, 3, 1,
            0, 0, 0, 0,
            0, 0, 0, 0,
            0, 0, 0, 0,
        ]);
        let excluded = cost_map(&energy, RightEdge::Excluded);
        assert_eq!(parents(&excluded, 1), vec![Some(0), Some(0), Some(1), Some(3)]);
        let included = cost_map(&energy, RightEdge::Included);
        assert_eq!(parents(&included, 1), vec![Some(0), Some(0), Some(3), Some(3)]);
    }

    #[test]
    fn energy_grid_to_vertical_seam() {
        let energy = emap(5, &ENERGY_DATA);
        assert_eq!(find_vertical_seam(&energy, RightEdge::Included), vec![2, 3, 4, 3]);
        assert_eq!(find_vertical_seam(&energy, RightEdge::Excluded), vec![2, 1, 2, 3]);
    }

    #[test]
    fn bottom_ties_take_the_leftmost_column() {
        let energy = emap(3, &[0, 0, 0, 5, 5, 5]);
        assert_eq!(find_vertical_seam(&energy, RightEdge::Excluded), vec![0, 0]);
    }

    #[test]
    fn single_column_seam_is_all_zeros() {
        let energy = emap(1, &[4, 2, 7]);
        assert_eq!(find_vertical_seam(&energy, RightEdge::Excluded), vec![0, 0, 0]);
    }

    #[test]
    fn seams_are_connected_and_span_the_height() {
        let data: Vec<u64> = (0..7 * 9).map(|i| (i * 7919 % 113) as u64).collect();
        let energy = emap(7, &data);
        for edge in &[RightEdge::Excluded, RightEdge::Included] {
            let seam = find_vertical_seam(&energy, *edge);
            assert_eq!(seam.len(), 9);
            assert!(seam.iter().all(|x| *x < 7));
            assert!(is_connected(&seam));
        }
    }
}
