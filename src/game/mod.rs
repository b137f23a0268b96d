//! Console game session.
//!
//! Everything the rules engine deliberately excludes lives here: coordinate
//! notation, command parsing, prompts, board rendering, and the turn loop
//! that alternates between the human and the machine policy.
//!
//! ## Key Types
//!
//! - `Session`: the interactive turn loop over a `Board` and a `MovePolicy`
//! - `parse_move` / `move_label`: `b3`-style coordinate notation

pub mod notation;
pub mod session;

pub use notation::{move_label, parse_move};
pub use session::Session;
