use log::{debug, trace};
use rand::Rng;

use crate::{board::Board, error::Result};

/// Side length of the board built by `Generation::new()`.
pub const DEFAULT_GENERATION_SIZE: usize = 20;

/// Owns the current board and replaces it wholesale on every tick.
#[derive(Clone, Debug)]
pub struct Generation {
    board: Board,
    age: u64,
}

impl Generation {
    /// A randomly seeded 20x20 board.
    pub fn new() -> Self {
        let mut board = Board::blank(DEFAULT_GENERATION_SIZE);
        board.seed();
        debug!("seeded default board, population {}", board.population());
        Self::from_board(board)
    }

    pub fn with_rng<R: Rng>(size: usize, rng: &mut R) -> Result<Self> {
        let mut board = Board::new(size)?;
        board.seed_with(rng);
        debug!("seeded {size}x{size} board, population {}", board.population());
        Ok(Self::from_board(board))
    }

    pub fn from_board(board: Board) -> Self {
        Self { board, age: 0 }
    }

    pub fn next(&mut self) -> &mut Self {
        self.board = self.board.next_generation();
        self.age += 1;
        trace!("generation {}", self.age);
        debug!("population {}", self.board.population());
        self
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Adopts `board` as the current state and restarts the tick count.
    pub fn set_board(&mut self, board: Board) {
        self.board = board;
        self.age = 0;
    }

    pub fn into_board(self) -> Board {
        self.board
    }

    /// Number of ticks since the current board was adopted.
    pub fn age(&self) -> u64 {
        self.age
    }
}

impl Default for Generation {
    fn default() -> Self {
        Self::new()
    }
}
