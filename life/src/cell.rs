use std::fmt::{Display, Write};

use crate::error::LifeError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Status {
    #[default]
    Empty,
    Full,
}

impl Status {
    pub fn glyph(self) -> char {
        match self {
            Status::Empty => 'X',
            Status::Full => 'O',
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_char(self.glyph())
    }
}

impl TryFrom<char> for Status {
    type Error = LifeError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'X' => Ok(Status::Empty),
            'O' => Ok(Status::Full),
            _ => Err(LifeError::UnknownGlyph(c)),
        }
    }
}

/// Position of a cell: `x` is the row, `y` the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinates {
    pub x: usize,
    pub y: usize,
}

impl Coordinates {
    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for Coordinates {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Cell {
    coordinates: Coordinates,
    pub(crate) status: Status,
}

impl Cell {
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            coordinates: Coordinates::new(x, y),
            status: Status::Empty,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn is_full(&self) -> bool {
        self.status == Status::Full
    }

    /// The Life transition: survive on 2 or 3 full neighbours, birth on exactly 3.
    pub fn apply_rules(neighbours: usize, status: Status) -> Status {
        match (status, neighbours) {
            (Status::Full, 2 | 3) | (Status::Empty, 3) => Status::Full,
            _ => Status::Empty,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.status.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_under_population() {
        // Any live cell with fewer than two live neighbours dies.
        assert_eq!(Cell::apply_rules(0, Status::Full), Status::Empty);
        assert_eq!(Cell::apply_rules(1, Status::Full), Status::Empty);
    }

    #[test]
    fn test_survival() {
        assert_eq!(Cell::apply_rules(2, Status::Full), Status::Full);
        assert_eq!(Cell::apply_rules(3, Status::Full), Status::Full);
    }

    #[test]
    fn test_overcrowding() {
        for n in 4..=8 {
            assert_eq!(Cell::apply_rules(n, Status::Full), Status::Empty);
        }
    }

    #[test]
    fn test_reproduction() {
        assert_eq!(Cell::apply_rules(3, Status::Empty), Status::Full);
        for n in (0..=8).filter(|&n| n != 3) {
            assert_eq!(Cell::apply_rules(n, Status::Empty), Status::Empty);
        }
    }

    #[test]
    fn test_glyphs() {
        assert_eq!(Status::Empty.to_string(), "X");
        assert_eq!(Status::Full.to_string(), "O");
        assert_eq!(Status::try_from('O'), Ok(Status::Full));
        assert_eq!(Status::try_from('X'), Ok(Status::Empty));
        assert_eq!(Status::try_from('o'), Err(LifeError::UnknownGlyph('o')));
    }

    #[test]
    fn test_new_cell() {
        let cell = Cell::new(2, 5);
        assert_eq!(cell.coordinates(), Coordinates { x: 2, y: 5 });
        assert_eq!(cell.status(), Status::Empty);
        assert!(!cell.is_full());
    }
}
