// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Knobs for the two places where the carver's behaviour is a policy
//! choice rather than arithmetic.

use std::str::FromStr;

/// How energies around a removed seam are refreshed.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum EnergyUpdate {
    /// Replace the stale value with the recomputed one.  After every
    /// removal the map equals a full recalculation.
    Overwrite,
    /// Add the recomputed value onto the stale one.  Energy near
    /// frequently carved columns grows with every pass, which pushes
    /// later seams away from them.
    Accumulate,
}

/// Whether the seam search may step to the upper-right neighbour when
/// that neighbour is the last column.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RightEdge {
    /// Column `c + 1` is a candidate only when `c + 1 < width - 1`.
    Excluded,
    /// Column `c + 1` is a candidate whenever it exists.
    Included,
}

impl RightEdge {
    /// May column `x + 1` of the row above be a parent of column `x`?
    #[inline]
    pub fn allows(self, x: u32, width: u32) -> bool {
        match self {
            RightEdge::Excluded => x + 2 < width,
            RightEdge::Included => x + 1 < width,
        }
    }
}

/// The complete set of carving options.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct CarveOptions {
    pub energy_update: EnergyUpdate,
    pub right_edge: RightEdge,
}

impl Default for CarveOptions {
    fn default() -> Self {
        CarveOptions {
            energy_update: EnergyUpdate::Overwrite,
            right_edge: RightEdge::Excluded,
        }
    }
}

impl FromStr for EnergyUpdate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overwrite" => Ok(EnergyUpdate::Overwrite),
            "accumulate" => Ok(EnergyUpdate::Accumulate),
            other => Err(format!("unknown energy update policy '{}'", other)),
        }
    }
}

impl FromStr for RightEdge {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "excluded" => Ok(RightEdge::Excluded),
            "included" => Ok(RightEdge::Included),
            other => Err(format!("unknown right edge policy '{}'", other)),
        }
    }
}
