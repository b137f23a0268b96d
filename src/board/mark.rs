//! Cell marks and their on-disk characters.

use serde::{Deserialize, Serialize};

/// Content of a single board cell.
///
/// A three-valued mark, not a boolean: a cell is empty, or holds the human's
/// mark, or the machine's mark. The character constants double as the cell
/// alphabet of the save-file format.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Unoccupied cell.
    #[default]
    Empty,
    /// The human player's mark (`x`).
    Human,
    /// The machine opponent's mark (`o`).
    Ai,
}

impl Mark {
    /// Character for an empty cell in the save format.
    pub const EMPTY_CHAR: char = '.';
    /// Character for the human's mark.
    pub const HUMAN_CHAR: char = 'x';
    /// Character for the machine's mark.
    pub const AI_CHAR: char = 'o';

    /// The save-file character for this mark.
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Mark::Empty => Self::EMPTY_CHAR,
            Mark::Human => Self::HUMAN_CHAR,
            Mark::Ai => Self::AI_CHAR,
        }
    }

    /// Parse a save-file character.
    ///
    /// Returns `None` for characters outside the cell alphabet.
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            Self::EMPTY_CHAR => Some(Mark::Empty),
            Self::HUMAN_CHAR => Some(Mark::Human),
            Self::AI_CHAR => Some(Mark::Ai),
            _ => None,
        }
    }

    /// Check whether this is the empty mark.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Mark::Empty)
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
