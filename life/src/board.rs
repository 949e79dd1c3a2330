use std::{
    fmt::{Display, Write},
    str::FromStr,
};

use itertools::Itertools;
use rand::Rng;

use crate::{
    cell::{Cell, Coordinates, Status},
    error::{LifeError, Result},
};

/// Side length of `Board::default()`.
pub const DEFAULT_BOARD_SIZE: usize = 10;

/// A fixed-size square grid. Edges are clamped, not wrapped.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: usize,
    // Row-major: the cell at (x, y) lives at x * size + y.
    cells: Vec<Cell>,
}

impl Board {
    pub fn new(size: usize) -> Result<Self> {
        if size == 0 {
            return Err(LifeError::InvalidSize(size));
        }
        Ok(Self::blank(size))
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Counts full cells in the clamped 3x3 window around (x, y), excluding
    /// (x, y) itself. Corners see at most 3 neighbours, edges at most 5.
    pub fn full_neighbours(&self, x: usize, y: usize) -> usize {
        let last = self.size - 1;
        let xs = x.saturating_sub(1)..=usize::min(x.saturating_add(1), last);
        let ys = y.saturating_sub(1)..=usize::min(y.saturating_add(1), last);
        xs.cartesian_product(ys)
            .filter(|&p| p != (x, y))
            .filter(|&(i, j)| self.cells[self.idx(i, j)].is_full())
            .count()
    }

    pub fn cell_by_coordinates(&self, x: usize, y: usize) -> Result<&Cell> {
        self.check_bounds(x, y)?;
        Ok(&self.cells[self.idx(x, y)])
    }

    pub fn set_status(&mut self, x: usize, y: usize, status: Status) -> Result<()> {
        self.check_bounds(x, y)?;
        let i = self.idx(x, y);
        self.cells[i].status = status;
        Ok(())
    }

    /// Fills cells using the thread-local generator. See [`Board::seed_with`].
    pub fn seed(&mut self) {
        self.seed_with(&mut rand::thread_rng());
    }

    /// Makes `size` draws per row, with replacement, and marks each drawn
    /// column full. Repeated draws collide, so a row usually ends up with
    /// fewer than `size` full cells.
    pub fn seed_with<R: Rng>(&mut self, rng: &mut R) {
        let size = self.size;
        for row in self.cells.chunks_mut(size) {
            for _ in 0..size {
                row[rng.gen_range(0..size)].status = Status::Full;
            }
        }
    }

    /// Every cell whose status is not `Empty`.
    pub fn live_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter().filter(|cell| cell.status() != Status::Empty)
    }

    pub fn population(&self) -> usize {
        self.live_cells().count()
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.size)
    }

    /// One glyph per cell, rows joined by `separator` with no trailing separator.
    pub fn render(&self, separator: &str) -> String {
        self.rows()
            .map(|row| row.iter().map(|cell| cell.status().glyph()).collect::<String>())
            .join(separator)
    }

    /// Builds the following generation into a fresh board. Every count is
    /// taken from `self`, never from the board being filled.
    pub fn next_generation(&self) -> Board {
        let mut next = Board::blank(self.size);
        for cell in &mut next.cells {
            let Coordinates { x, y } = cell.coordinates();
            let neighbours = self.full_neighbours(x, y);
            let status = self.cells[self.idx(x, y)].status();
            cell.status = Cell::apply_rules(neighbours, status);
        }
        next
    }
}

impl Board {
    pub(crate) fn blank(size: usize) -> Self {
        let cells = (0..size)
            .cartesian_product(0..size)
            .map(|(x, y)| Cell::new(x, y))
            .collect();
        Self { size, cells }
    }

    fn idx(&self, x: usize, y: usize) -> usize {
        x * self.size + y
    }

    fn check_bounds(&self, x: usize, y: usize) -> Result<()> {
        if x >= self.size || y >= self.size {
            return Err(LifeError::OutOfBounds {
                x,
                y,
                size: self.size,
            });
        }
        Ok(())
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::blank(DEFAULT_BOARD_SIZE)
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                f.write_char('\n')?;
            }
            for cell in row {
                f.write_char(cell.status().glyph())?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = LifeError;

    /// Parses rows of `O`/`X`. Indentation and blank lines are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect_vec();
        let size = rows.len();
        if size == 0 {
            return Err(LifeError::EmptyGrid);
        }
        let mut board = Board::blank(size);
        for (x, row) in rows.into_iter().enumerate() {
            let len = row.chars().count();
            if len != size {
                return Err(LifeError::NotSquare { row: x, len, size });
            }
            for (y, c) in row.chars().enumerate() {
                let i = board.idx(x, y);
                board.cells[i].status = Status::try_from(c)?;
            }
        }
        Ok(board)
    }
}
