//! The board engine: placement legality, legal-move enumeration, win
//! detection.
//!
//! ## Placement Rules
//!
//! Checked in order, each with its own error:
//!
//! 1. The target must be inside the grid (`OutOfBounds`).
//! 2. The target must be empty (`CellOccupied`).
//! 3. On a fully empty board the target must be a center cell (`NotCenter`).
//! 4. Otherwise the target must touch at least one occupied cell in one of
//!    the 8 neighboring directions (`NoAdjacency`).
//!
//! A rejected placement leaves the grid bit-for-bit unchanged.
//!
//! ## Storage
//!
//! One flat row-major `Vec<Mark>` of `rows * cols` cells. The board
//! exclusively owns its storage; nothing else holds references into it.

use smallvec::SmallVec;

use super::coord::Coord;
use super::error::{InvalidSize, PlaceError};
use super::mark::Mark;

/// Smallest supported board edge.
pub const MIN_SIZE: usize = 5;
/// Largest supported board edge.
pub const MAX_SIZE: usize = 25;
/// Run length that wins the game.
pub const WIN_LENGTH: usize = 4;

/// The four forward run directions: east, south, south-east, south-west.
///
/// Forward-only counting is enough for win detection: any run of length
/// `WIN_LENGTH` or more is found starting from its own first cell.
const RUN_DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

/// A rectangular grid of marks with fixed dimensions.
///
/// Created empty, mutated only through [`Board::place`], and replaced
/// wholesale by a successful load. Win and draw are queries
/// ([`Board::check_win`], [`Board::is_full`]), never stored state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major, `rows * cols` cells.
    cells: Vec<Mark>,
}

impl Board {
    /// Create an empty board.
    ///
    /// Dimensions must satisfy `MIN_SIZE <= cols <= rows <= MAX_SIZE` and are
    /// immutable afterwards.
    pub fn new(rows: usize, cols: usize) -> Result<Self, InvalidSize> {
        if cols < MIN_SIZE || cols > rows || rows > MAX_SIZE {
            return Err(InvalidSize { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![Mark::Empty; rows * cols],
        })
    }

    /// Row count.
    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Column count.
    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// Get the mark at a coordinate, `None` outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<Mark> {
        if self.is_inside(row, col) {
            Some(self.cells[self.index(row, col)])
        } else {
            None
        }
    }

    /// Check whether a coordinate lies inside the grid.
    #[must_use]
    pub fn is_inside(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    fn is_inside_signed(&self, row: isize, col: isize) -> bool {
        row >= 0 && (row as usize) < self.rows && col >= 0 && (col as usize) < self.cols
    }

    /// Check whether a coordinate is inside the grid and unoccupied.
    #[must_use]
    pub fn is_empty_cell(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some_and(Mark::is_empty)
    }

    /// Check whether no cell holds a mark.
    #[must_use]
    pub fn is_board_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_empty())
    }

    /// Check whether every cell holds a mark.
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|cell| cell.is_empty())
    }

    /// The legal starting cells for the first placement.
    ///
    /// Odd rows and odd cols give a single geometric center. Otherwise the
    /// in-bounds subset of the 2x2 block nearest the center, up to 4 cells.
    #[must_use]
    pub fn center_cells(&self) -> SmallVec<[Coord; 4]> {
        let mid_row = (self.rows - 1) / 2;
        let mid_col = (self.cols - 1) / 2;

        if self.rows % 2 == 1 && self.cols % 2 == 1 {
            return SmallVec::from_iter([Coord::new(mid_row, mid_col)]);
        }

        let mut centers = SmallVec::new();
        for dr in 0..=1 {
            for dc in 0..=1 {
                let (row, col) = (mid_row + dr, mid_col + dc);
                if self.is_inside(row, col) {
                    centers.push(Coord::new(row, col));
                }
            }
        }
        centers
    }

    fn is_center(&self, coord: Coord) -> bool {
        self.center_cells().contains(&coord)
    }

    fn touches_occupied(&self, coord: Coord) -> bool {
        for dr in -1isize..=1 {
            for dc in -1isize..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let (row, col) = (coord.row as isize + dr, coord.col as isize + dc);
                if self.is_inside_signed(row, col)
                    && !self.cells[self.index(row as usize, col as usize)].is_empty()
                {
                    return true;
                }
            }
        }
        false
    }

    /// Place a mark.
    ///
    /// The only mutating operation. On success sets exactly the target cell;
    /// on any error the grid is unchanged.
    ///
    /// ## Panics
    ///
    /// If `mark` is `Mark::Empty` - placements never erase.
    pub fn place(&mut self, coord: Coord, mark: Mark) -> Result<(), PlaceError> {
        assert!(!mark.is_empty(), "cannot place the empty mark");

        if !self.is_inside(coord.row, coord.col) {
            return Err(PlaceError::OutOfBounds(coord));
        }
        if !self.cells[self.index(coord.row, coord.col)].is_empty() {
            return Err(PlaceError::CellOccupied(coord));
        }
        if self.is_board_empty() {
            if !self.is_center(coord) {
                return Err(PlaceError::NotCenter(coord));
            }
        } else if !self.touches_occupied(coord) {
            return Err(PlaceError::NoAdjacency(coord));
        }

        let index = self.index(coord.row, coord.col);
        self.cells[index] = mark;
        Ok(())
    }

    /// Enumerate every cell where [`Board::place`] would currently succeed,
    /// in row-major order.
    ///
    /// Freshly computed on each call. May be empty even while empty cells
    /// remain, when none of them touches an occupied cell.
    #[must_use]
    pub fn legal_moves(&self) -> Vec<Coord> {
        let board_empty = self.is_board_empty();
        let mut moves = Vec::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                let coord = Coord::new(row, col);
                if !self.cells[self.index(row, col)].is_empty() {
                    continue;
                }
                let legal = if board_empty {
                    self.is_center(coord)
                } else {
                    self.touches_occupied(coord)
                };
                if legal {
                    moves.push(coord);
                }
            }
        }
        moves
    }

    fn run_length(&self, start: Coord, direction: (isize, isize), mark: Mark) -> usize {
        let (mut row, mut col) = (start.row as isize, start.col as isize);
        let mut length = 0;
        while self.is_inside_signed(row, col)
            && self.cells[self.index(row as usize, col as usize)] == mark
        {
            length += 1;
            row += direction.0;
            col += direction.1;
        }
        length
    }

    /// Check whether `mark` has a run of [`WIN_LENGTH`] or more consecutive
    /// cells along a row, column, or diagonal.
    ///
    /// Pure query over the current grid; nothing is cached.
    #[must_use]
    pub fn check_win(&self, mark: Mark) -> bool {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if self.cells[self.index(row, col)] != mark {
                    continue;
                }
                let start = Coord::new(row, col);
                if RUN_DIRECTIONS
                    .iter()
                    .any(|&dir| self.run_length(start, dir, mark) >= WIN_LENGTH)
                {
                    return true;
                }
            }
        }
        false
    }

    pub(crate) fn cells(&self) -> &[Mark] {
        &self.cells
    }

    pub(crate) fn replace_cells(&mut self, cells: Vec<Mark>) {
        debug_assert_eq!(cells.len(), self.rows * self.cols);
        self.cells = cells;
    }
}
