#![no_std]

use core::ops::Index;
use ndarray::Array2;
use rand::Rng;
use serde::{Deserialize, Serialize};

pub use error::*;
pub use types::*;

mod error;
mod types;

/// Square grid of lights, the whole state of one puzzle.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LightGrid {
    cells: Array2<bool>,
}

impl LightGrid {
    /// Creates a `size` by `size` grid with every light on.
    pub fn new(size: Coord) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidSize);
        }
        let cells = Array2::from_elem((size, size).to_nd_index(), true);
        Ok(Self { cells })
    }

    pub fn from_cell_mask(cells: Array2<bool>) -> Result<Self> {
        let (rows, cols) = cells.dim();
        if rows == 0 || rows != cols || rows > usize::from(Coord::MAX) {
            return Err(GameError::InvalidBoardShape);
        }
        Ok(Self { cells })
    }

    pub fn from_lit_coords(size: Coord, lit_coords: &[Coord2]) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidSize);
        }
        let mut cells: Array2<bool> = Array2::default((size, size).to_nd_index());

        for &coords in lit_coords {
            if coords.0 >= size || coords.1 >= size {
                return Err(GameError::InvalidCoords);
            }
            cells[coords.to_nd_index()] = true;
        }

        Ok(Self { cells })
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        let size = self.size();
        if coords.0 < size && coords.1 < size {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn size(&self) -> Coord {
        self.cells.dim().0.try_into().unwrap()
    }

    pub fn total_cells(&self) -> CellCount {
        self.cells.len().try_into().unwrap()
    }

    pub fn lit_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|&&lit| lit)
            .count()
            .try_into()
            .unwrap()
    }

    pub fn is_solved(&self) -> bool {
        self.cells.iter().all(|&lit| !lit)
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<bool> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    /// Turns every light back on, keeping the size.
    pub fn reset_all_on(&mut self) {
        self.cells.fill(true);
    }

    /// Redraws every cell as an independent fair coin from `rng`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for cell in self.cells.iter_mut() {
            *cell = rng.random();
        }
        let size = self.size();
        log::debug!("randomized {}x{} grid, {} lit", size, size, self.lit_count());
    }

    /// Inverts the pressed cell and every in-bounds cell around it, diagonals
    /// included. The grid is untouched when `coords` is out of range.
    pub fn toggle_at(&mut self, coords: Coord2) -> Result<()> {
        let coords = self.validate_coords(coords)?;

        for pos in self.cells.iter_neighborhood(coords) {
            let cell = &mut self.cells[pos.to_nd_index()];
            *cell = !*cell;
        }

        log::trace!("toggled block at {:?}", coords);
        Ok(())
    }
}

impl Index<Coord2> for LightGrid {
    type Output = bool;

    fn index(&self, (row, col): Coord2) -> &Self::Output {
        &self.cells[(row as usize, col as usize)]
    }
}
