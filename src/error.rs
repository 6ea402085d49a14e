// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Errors raised by the carver.

use failure::Fail;

/// Everything that can stop a reduction.  Both are detected before
/// the picture is touched, so a failed call leaves nothing half-done.
#[derive(Debug, Fail, PartialEq, Eq)]
pub enum CarveError {
    /// Empty picture, ragged rows, or an unreachable target width.
    #[fail(display = "invalid dimensions: {}", _0)]
    InvalidDimensions(String),

    /// A seam was requested from a picture that is already one
    /// column wide.
    #[fail(display = "cannot carve a seam from a picture {} column(s) wide", width)]
    DegenerateState { width: u32 },
}

pub type Result<T> = std::result::Result<T, CarveError>;
