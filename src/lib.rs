//! # amoba
//!
//! A two-player connection game ("amoeba") on a rectangular grid: four marks
//! in a row, column, or diagonal win. The human plays against a machine
//! opponent on the console, and the board can be saved to and restored from a
//! plain-text file.
//!
//! ## Design Principles
//!
//! 1. **Rules engine first**: `Board` owns all placement legality, win
//!    detection, and persistence. The console loop and the opponent policy
//!    are pure consumers of its public contract.
//!
//! 2. **Queries, not flags**: win and draw are derived by `check_win` /
//!    `is_full` on demand. The board stores no outcome state, so there is
//!    nothing to invalidate.
//!
//! 3. **Typed errors**: every rejected placement or malformed save file is a
//!    typed value for the caller to render; the engine never logs, retries,
//!    or exits. A failed operation leaves the grid untouched.
//!
//! ## Rules
//!
//! - The first mark on an empty board must occupy a center cell.
//! - Every later mark must touch at least one occupied cell in one of the
//!   8 neighboring directions.
//! - Four consecutive same marks along a row, column, or diagonal win.
//!
//! ## Modules
//!
//! - `board`: marks, coordinates, the `Board` engine, text persistence
//! - `policy`: opponent move selection (`MovePolicy`, `RandomPolicy`)
//! - `game`: console session, coordinate notation, board rendering

pub mod board;
pub mod game;
pub mod policy;

// Re-export commonly used types
pub use crate::board::{Board, Coord, InvalidSize, LoadError, Mark, PlaceError, WIN_LENGTH};

pub use crate::policy::{MovePolicy, RandomPolicy};

pub use crate::game::{move_label, parse_move, Session};
