// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! A row-major two-dimensional grid
//!
//! Pictures, energy maps and the transient cost map all share this
//! one representation, so that the index math lives in exactly one
//! place and narrowing by a seam is the same operation for all of
//! them.

use std::ops::{Index, IndexMut};

/// An addressable two-dimensional field.  The content is a pixel for
/// a picture, a u64 for the energy map, or a cost + parent address
/// for the seam search.
#[derive(Debug, Clone, PartialEq)]
pub struct TwoDimensionalMap<P: Default + Copy> {
    width: u32,
    height: u32,
    cells: Vec<P>,
}

impl<P: Default + Copy> TwoDimensionalMap<P> {
    /// Define a new map filled with the content type's default.
    pub fn new(width: u32, height: u32) -> Self {
        TwoDimensionalMap {
            width,
            height,
            cells: vec![P::default(); width as usize * height as usize],
        }
    }

    /// Wrap an existing row-major vector.  Returns `None` if the
    /// vector's length does not match the dimensions.
    pub fn from_vec(width: u32, height: u32, cells: Vec<P>) -> Option<Self> {
        if cells.len() != width as usize * height as usize {
            return None;
        }
        Some(TwoDimensionalMap {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    // Absolutely, the number one name of this game is keep the index
    // math in a singular location and never, ever mess with it.
    fn get_index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Bounds-checked read of a single cell.
    pub fn get(&self, x: u32, y: u32) -> Option<P> {
        if x < self.width && y < self.height {
            Some(self.cells[self.get_index(x, y)])
        } else {
            None
        }
    }

    /// One full row, left to right.
    pub fn row(&self, y: u32) -> &[P] {
        let start = self.get_index(0, y);
        &self.cells[start..start + self.width as usize]
    }

    /// The raw row-major storage.
    pub fn as_slice(&self) -> &[P] {
        &self.cells
    }

    /// Narrow the map by one column, deleting from each row `y` the
    /// cell at `path[y]`.  Every row slides left over its removed
    /// cell in place, then the buffer is truncated to the new size.
    ///
    /// Panics if `path` is not one in-bounds column per row.
    pub fn remove_path(&mut self, path: &[u32]) {
        assert_eq!(path.len(), self.height as usize, "seam length must equal height");
        assert!(self.width > 0, "cannot narrow an empty map");
        let (width, new_width) = (self.width as usize, self.width as usize - 1);
        let mut write = 0;
        for (y, &column) in path.iter().enumerate() {
            let column = column as usize;
            assert!(column < width, "seam column {} outside width {}", column, width);
            let read = y * width;
            for x in (0..width).filter(|x| *x != column) {
                self.cells[write] = self.cells[read + x];
                write += 1;
            }
        }
        self.cells.truncate(new_width * self.height as usize);
        self.width -= 1;
    }
}

impl<P: Default + Copy> Index<(u32, u32)> for TwoDimensionalMap<P> {
    type Output = P;

    /// A convenience addressing mode for getting values.
    fn index(&self, (x, y): (u32, u32)) -> &P {
        debug_assert!(x < self.width && y < self.height);
        let index = self.get_index(x, y);
        &self.cells[index]
    }
}

impl<P: Default + Copy> IndexMut<(u32, u32)> for TwoDimensionalMap<P> {
    /// A convenience addressing mode for setting values.
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut P {
        debug_assert!(x < self.width && y < self.height);
        let index = self.get_index(x, y);
        &mut self.cells[index]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid() -> TwoDimensionalMap<u32> {
        TwoDimensionalMap::from_vec(4, 3, (0..12).collect()).unwrap()
    }

    #[test]
    fn from_vec_rejects_wrong_length() {
        assert!(TwoDimensionalMap::<u32>::from_vec(4, 3, vec![0; 11]).is_none());
    }

    #[test]
    fn indexing_is_row_major() {
        let map = grid();
        assert_eq!(map[(0, 0)], 0);
        assert_eq!(map[(3, 0)], 3);
        assert_eq!(map[(1, 2)], 9);
        assert_eq!(map.row(1), &[4, 5, 6, 7]);
        assert_eq!(map.get(4, 0), None);
        assert_eq!(map.get(0, 3), None);
    }

    #[test]
    fn remove_path_collapses_one_column() {
        let mut map = grid();
        map.remove_path(&[0, 1, 3]);
        assert_eq!(map.dimensions(), (3, 3));
        assert_eq!(map.as_slice(), &[1, 2, 3, 4, 6, 7, 8, 9, 10]);
    }

    #[test]
    fn remove_path_down_to_one_column() {
        let mut map = TwoDimensionalMap::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        map.remove_path(&[1, 0]);
        assert_eq!(map.dimensions(), (1, 2));
        assert_eq!(map.as_slice(), &[1, 4]);
    }

    #[test]
    #[should_panic]
    fn remove_path_rejects_short_seam() {
        grid().remove_path(&[0, 0]);
    }
}
