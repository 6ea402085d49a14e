// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Calculate the energy of a picture
//!
//! The energy of a pixel is the squared colour gradient across it:
//! the channel-wise difference between its left and right neighbours,
//! squared and summed, plus the same for its upper and lower
//! neighbours.  Borders clamp, so a pixel on the edge stands in for
//! its own missing neighbour.

use crate::cq;
use crate::options::EnergyUpdate;
use crate::picture::{Picture, Pixel};
use crate::twodmap::TwoDimensionalMap;
use itertools::iproduct;
use num_traits::pow;

/// One energy value per pixel.
pub type EnergyMap = TwoDimensionalMap<u64>;

// Takes the channels from two pixels and maps the difference between
// each channel, squares it, and then sums them all up:
//
//        |Δ|² = (Δr)²+(Δg)²+(Δb)²
//
fn energy_of_pair(p1: &Pixel, p2: &Pixel) -> u64 {
    p1.iter()
        .zip(p2.iter())
        .map(|(c1, c2)| pow(i64::from(*c1) - i64::from(*c2), 2) as u64)
        .sum()
}

/// The energy of the single pixel at `(x, y)`.
pub fn energy_at(picture: &Picture, x: u32, y: u32) -> u64 {
    let (mw, mh) = (picture.width() - 1, picture.height() - 1);
    let (left, right, up, down) = (
        cq!(x == 0, 0, x - 1),
        cq!(x >= mw, mw, x + 1),
        cq!(y == 0, 0, y - 1),
        cq!(y >= mh, mh, y + 1),
    );
    energy_of_pair(&picture[(left, y)], &picture[(right, y)])
        + energy_of_pair(&picture[(x, up)], &picture[(x, down)])
}

/// Compute the energy of every pixel in a picture.
pub fn calculate_energy(picture: &Picture) -> EnergyMap {
    let (width, height) = picture.dimensions();
    let mut emap = EnergyMap::new(width, height);
    for (y, x) in iproduct!(0..height, 0..width) {
        emap[(x, y)] = energy_at(picture, x, y);
    }
    emap
}

/// After `seam` has been cut out of both `picture` and `energy`,
/// refresh the energies that the cut could have changed: on each row,
/// the columns either side of the join.  Nothing further away has a
/// different neighbourhood than it did before the cut.
pub fn update_energy(picture: &Picture, energy: &mut EnergyMap, seam: &[u32], policy: EnergyUpdate) {
    let width = picture.width();
    for (y, &column) in seam.iter().enumerate() {
        let y = y as u32;
        let first = column.saturating_sub(1);
        let last = (column + 1).min(width - 1);
        for x in first..=last {
            let fresh = energy_at(picture, x, y);
            match policy {
                EnergyUpdate::Overwrite => energy[(x, y)] = fresh,
                EnergyUpdate::Accumulate => energy[(x, y)] += fresh,
            }
        }
    }
}
