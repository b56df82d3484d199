use serde::{Deserialize, Serialize};
use shoutou_core as game;

use crate::geometry::BoardLayout;

/// Constant from SplitMix64, spaces consecutive game seeds apart.
const SEED_INCREMENT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Board sizes offered by the size menu.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GridChoice {
    X3,
    X4,
    X5,
}

impl GridChoice {
    pub const ALL: [GridChoice; 3] = [GridChoice::X3, GridChoice::X4, GridChoice::X5];

    pub const fn dimension(self) -> game::Coord {
        match self {
            Self::X3 => 3,
            Self::X4 => 4,
            Self::X5 => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::X3 => "3×3",
            Self::X4 => "4×4",
            Self::X5 => "5×5",
        }
    }
}

impl Default for GridChoice {
    fn default() -> Self {
        Self::X3
    }
}

/// Outcome of a pointer press forwarded by the shell.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum PressOutcome {
    Ignored,
    Toggled,
    Solved,
}

impl PressOutcome {
    /// Whether this outcome could have caused an update to the game.
    pub const fn has_update(self) -> bool {
        use PressOutcome::*;
        match self {
            Ignored => false,
            Toggled => true,
            Solved => true,
        }
    }
}

/// Drives one puzzle on behalf of a GUI shell: presses come in as pixels or
/// cells, new-game and size-change requests rebuild the grid, and the shell
/// reads back layout and cell state to draw.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameController {
    choice: GridChoice,
    grid: game::LightGrid,
    layout: BoardLayout,
    seed: u64,
}

impl GameController {
    pub fn new(choice: GridChoice, seed: u64) -> Self {
        let grid = game::LightGrid::new(choice.dimension()).expect("menu sizes are non-zero");
        Self {
            choice,
            grid,
            layout: BoardLayout::new(choice.dimension()),
            seed,
        }
    }

    pub fn grid(&self) -> &game::LightGrid {
        &self.grid
    }

    pub fn layout(&self) -> &BoardLayout {
        &self.layout
    }

    pub fn choice(&self) -> GridChoice {
        self.choice
    }

    pub fn size(&self) -> game::Coord {
        self.grid.size()
    }

    pub fn is_solved(&self) -> bool {
        self.grid.is_solved()
    }

    pub fn press_at(&mut self, x: i32, y: i32) -> PressOutcome {
        match self.layout.hit_test(x, y) {
            Some(coords) => self
                .press_cell(coords)
                .expect("hit-tested coordinates are in bounds"),
            None => PressOutcome::Ignored,
        }
    }

    pub fn press_cell(&mut self, coords: game::Coord2) -> game::Result<PressOutcome> {
        self.grid.toggle_at(coords)?;

        Ok(if self.grid.is_solved() {
            PressOutcome::Solved
        } else {
            PressOutcome::Toggled
        })
    }

    /// Scrambles the board for a fresh game and advances the seed, so the next
    /// game differs while the whole sequence stays reproducible.
    pub fn new_game(&mut self) {
        use rand::prelude::*;

        let mut rng = SmallRng::seed_from_u64(self.seed);
        self.grid.randomize(&mut rng);
        self.seed = self.seed.wrapping_add(SEED_INCREMENT);
        log::debug!("new game on {} grid", self.choice.label());
    }

    pub fn reset_all_on(&mut self) {
        self.grid.reset_all_on();
    }

    /// A repeated choice still discards the current board.
    pub fn set_grid_choice(&mut self, choice: GridChoice) {
        self.choice = choice;
        self.grid = game::LightGrid::new(choice.dimension()).expect("menu sizes are non-zero");
        self.layout.set_cells(choice.dimension());
        log::debug!("grid set to {}", choice.label());
    }

    pub fn handle_resize(&mut self, window_height_px: i32) {
        self.layout.fit_to_height(window_height_px);
        log::debug!("board refit for height {}", window_height_px);
    }
}
