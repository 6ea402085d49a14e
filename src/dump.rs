// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Render an energy map as a greyscale image, brightest where the
//! energy is highest.

use crate::energy::EnergyMap;
use image::{GrayImage, ImageBuffer, Luma};

/// Scale every energy against the map's maximum into 0..=255.  A map
/// with no energy anywhere renders black.
pub fn energy_to_image(energy: &EnergyMap) -> GrayImage {
    let (width, height) = energy.dimensions();
    let factor = energy.as_slice().iter().cloned().max().unwrap_or(0);
    ImageBuffer::from_fn(width, height, |x, y| {
        let level = if factor == 0 {
            0
        } else {
            energy[(x, y)] * 255 / factor
        };
        Luma([level as u8])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::twodmap::TwoDimensionalMap;

    #[test]
    fn energy_scales_to_full_range() {
        let energy = TwoDimensionalMap::from_vec(3, 1, vec![0, 50, 100]).unwrap();
        let image = energy_to_image(&energy);
        let levels: Vec<u8> = image.pixels().map(|p| p.0[0]).collect();
        assert_eq!(levels, vec![0, 127, 255]);
    }

    #[test]
    fn flat_energy_is_black() {
        let energy = TwoDimensionalMap::from_vec(2, 2, vec![0; 4]).unwrap();
        assert!(energy_to_image(&energy).pixels().all(|p| p.0[0] == 0));
    }
}
