//! Conway's Game of Life on a fixed, edge-clamped square board.

mod board;
mod cell;
mod error;
mod generation;
pub mod render;


pub use crate::{
    board::{Board, DEFAULT_BOARD_SIZE},
    cell::{Cell, Coordinates, Status},
    error::{LifeError, Result},
    generation::{DEFAULT_GENERATION_SIZE, Generation},
    render::Format,
};
