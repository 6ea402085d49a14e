// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! The pixel matrix the carver works on, and its conversions to and
//! from ImageRS buffers.

use crate::error::{CarveError, Result};
use crate::twodmap::TwoDimensionalMap;
use image::{ImageBuffer, Rgb, RgbImage};

/// Three opaque colour channels.  The algorithm never cares which is
/// which.
pub type Pixel = [u8; 3];

/// A picture is just a map of pixels.
pub type Picture = TwoDimensionalMap<Pixel>;

/// Build a picture from a list of rows, rejecting an empty or ragged
/// matrix.
pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Picture> {
    let height = rows.len();
    let width = rows.first().map_or(0, |row| row.len());
    if width == 0 {
        return Err(CarveError::InvalidDimensions("picture is empty".to_string()));
    }
    if let Some((y, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
        return Err(CarveError::InvalidDimensions(format!(
            "row {} has {} pixels, expected {}",
            y,
            row.len(),
            width
        )));
    }
    let cells = rows.into_iter().flatten().collect();
    TwoDimensionalMap::from_vec(width as u32, height as u32, cells)
        .ok_or_else(|| CarveError::InvalidDimensions("picture too large".to_string()))
}

/// Copy an RGB image into a picture.
pub fn from_rgb_image(image: &RgbImage) -> Result<Picture> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(CarveError::InvalidDimensions("picture is empty".to_string()));
    }
    let cells = image.pixels().map(|p| p.0).collect();
    TwoDimensionalMap::from_vec(width, height, cells)
        .ok_or_else(|| CarveError::InvalidDimensions("pixel count mismatch".to_string()))
}

/// Copy a picture back out into an RGB image for encoding.
pub fn to_rgb_image(picture: &Picture) -> RgbImage {
    let (width, height) = picture.dimensions();
    ImageBuffer::from_fn(width, height, |x, y| Rgb(picture[(x, y)]))
}
