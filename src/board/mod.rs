//! Board rules engine.
//!
//! The board is the only entity of the game: a fixed-size rectangular grid of
//! `Mark` cells, mutated through exactly one operation (`Board::place`) and
//! restored wholesale by `Board::load_from_file`.
//!
//! ## Key Types
//!
//! - `Mark`: cell content - `Empty`, `Human`, or `Ai`
//! - `Coord`: zero-based grid coordinate
//! - `Board`: the engine - placement legality, win detection, persistence
//! - `PlaceError` / `LoadError` / `InvalidSize`: typed failure values

pub mod coord;
pub mod engine;
pub mod error;
pub mod io;
pub mod mark;

pub use coord::Coord;
pub use engine::{Board, MAX_SIZE, MIN_SIZE, WIN_LENGTH};
pub use error::{InvalidSize, LoadError, PlaceError};
pub use mark::Mark;
