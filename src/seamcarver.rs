// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Seamcarve - The main routine
//!
//! Narrow a picture one seam at a time: find the cheapest seam, cut
//! it out of the picture and the energy map together, refresh the
//! energies either side of the cut, repeat.

use crate::energy::{calculate_energy, update_energy, EnergyMap};
use crate::error::{CarveError, Result};
use crate::options::CarveOptions;
use crate::picture::Picture;
use crate::seamfinder::{find_vertical_seam, Seam};
use log::{debug, info, trace};

/// Something that wants to hear about each seam as it is removed.
/// `done` counts from 1 to `total`.
pub trait Progress {
    fn advance(&mut self, done: u32, total: u32);
}

/// No progress reporting at all.
impl Progress for () {
    fn advance(&mut self, _done: u32, _total: u32) {}
}

impl<F: FnMut(u32, u32)> Progress for F {
    fn advance(&mut self, done: u32, total: u32) {
        self(done, total)
    }
}

/// Cut `seam` out of a picture and its energy map in lockstep.
pub fn remove_vertical_seam(picture: &mut Picture, energy: &mut EnergyMap, seam: &[u32]) {
    picture.remove_path(seam);
    energy.remove_path(seam);
}

/// The picture being carved, and its energy map.  The two always have
/// the same dimensions.
#[derive(Debug, Clone)]
pub struct SeamCarver {
    picture: Picture,
    energy: EnergyMap,
    options: CarveOptions,
}

impl SeamCarver {
    /// Take ownership of a picture and compute its full energy map.
    pub fn new(picture: Picture, options: CarveOptions) -> Result<Self> {
        let (width, height) = picture.dimensions();
        if width == 0 || height == 0 {
            return Err(CarveError::InvalidDimensions(format!(
                "cannot carve a {}x{} picture",
                width, height
            )));
        }
        let energy = calculate_energy(&picture);
        Ok(SeamCarver {
            picture,
            energy,
            options,
        })
    }

    pub fn picture(&self) -> &Picture {
        &self.picture
    }

    pub fn energy(&self) -> &EnergyMap {
        &self.energy
    }

    pub fn width(&self) -> u32 {
        self.picture.width()
    }

    /// Find, remove and return the cheapest seam.
    pub fn carve_once(&mut self) -> Result<Seam> {
        let width = self.picture.width();
        if width <= 1 {
            return Err(CarveError::DegenerateState { width });
        }
        let seam = find_vertical_seam(&self.energy, self.options.right_edge);
        trace!("seam: {:?}", seam);
        remove_vertical_seam(&mut self.picture, &mut self.energy, &seam);
        update_energy(&self.picture, &mut self.energy, &seam, self.options.energy_update);
        Ok(seam)
    }

    /// Carve seams until the picture is `target` columns wide, and
    /// hand back the result.
    pub fn carve_to<R: Progress>(mut self, target: u32, progress: &mut R) -> Result<Picture> {
        let width = self.picture.width();
        validate_target(width, target)?;
        let total = width - target;
        info!("narrowing {} -> {} columns ({} seams)", width, target, total);
        for done in 1..=total {
            self.carve_once()?;
            debug!("carved seam {}/{}, width now {}", done, total, self.width());
            progress.advance(done, total);
        }
        info!("narrowed to {}x{}", self.picture.width(), self.picture.height());
        Ok(self.picture)
    }
}

fn validate_target(width: u32, target: u32) -> Result<()> {
    if target == 0 {
        return Err(CarveError::InvalidDimensions("target width must be positive".to_string()));
    }
    if target > width {
        return Err(CarveError::InvalidDimensions(format!(
            "target width {} exceeds current width {}; seam carving cannot widen",
            target, width
        )));
    }
    Ok(())
}

/// Narrow `picture` to `target` columns with the default options and
/// no progress reporting.  The input is left untouched.
pub fn reduce_width(picture: &Picture, target: u32) -> Result<Picture> {
    reduce_width_with(picture, target, CarveOptions::default(), &mut ())
}

/// Narrow `picture` to `target` columns.  Every check happens before
/// any carving, so an error means nothing was done.
pub fn reduce_width_with<R: Progress>(
    picture: &Picture,
    target: u32,
    options: CarveOptions,
    progress: &mut R,
) -> Result<Picture> {
    let (width, height) = picture.dimensions();
    if width == 0 || height == 0 {
        return Err(CarveError::InvalidDimensions("picture is empty".to_string()));
    }
    validate_target(width, target)?;
    if target == width {
        return Ok(picture.clone());
    }
    SeamCarver::new(picture.clone(), options)?.carve_to(target, progress)
}
