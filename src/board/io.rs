//! Text persistence for the board.
//!
//! ## Format
//!
//! ```text
//! <rows> <cols>
//! <row 0 as cols mark characters>
//! ...
//! <row rows-1 as cols mark characters>
//! ```
//!
//! No trailing metadata. Short body lines are right-padded with empty cells
//! on load; characters past the column count are ignored.
//!
//! Load is all-or-nothing: the text is parsed into a scratch grid and the
//! board is only replaced on success, so any `LoadError` leaves the current
//! grid untouched. Loaded data is trusted as a bulk restore - the center and
//! adjacency invariants are not re-checked against it.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use super::engine::Board;
use super::error::LoadError;
use super::mark::Mark;

impl Board {
    /// Render the board in the save-file format.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut text = String::with_capacity((self.cols() + 1) * (self.rows() + 1));
        text.push_str(&format!("{} {}\n", self.rows(), self.cols()));
        for row in self.cells().chunks(self.cols()) {
            text.extend(row.iter().map(|mark| mark.to_char()));
            text.push('\n');
        }
        text
    }

    /// Replace the grid from save-format text.
    ///
    /// The header dimensions must equal this board's; the board never
    /// resizes itself from a load.
    pub fn load_from_text(&mut self, text: &str) -> Result<(), LoadError> {
        let mut lines = text.lines();

        let header = lines.next().ok_or(LoadError::EmptyFile)?;
        let mut fields = header.split_whitespace();
        let (rows, cols) = match (fields.next(), fields.next()) {
            (Some(r), Some(c)) => match (r.parse::<usize>(), c.parse::<usize>()) {
                (Ok(rows), Ok(cols)) => (rows, cols),
                _ => return Err(LoadError::BadHeader(header.to_string())),
            },
            _ => return Err(LoadError::BadHeader(header.to_string())),
        };
        if rows != self.rows() || cols != self.cols() {
            return Err(LoadError::DimensionMismatch {
                expected_rows: self.rows(),
                expected_cols: self.cols(),
                rows,
                cols,
            });
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for row in 0..rows {
            let line = lines.next().ok_or(LoadError::Truncated {
                expected: rows,
                found: row,
            })?;
            let mut width = 0;
            for (col, ch) in line.chars().take(cols).enumerate() {
                let mark = Mark::from_char(ch)
                    .ok_or(LoadError::InvalidCellChar { ch, row, col })?;
                cells.push(mark);
                width += 1;
            }
            // Short lines pad out with empty cells
            cells.resize(cells.len() + (cols - width), Mark::Empty);
        }

        self.replace_cells(cells);
        Ok(())
    }

    /// Write the board to a file in the save format.
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> io::Result<()> {
        let mut file = fs::File::create(path)?;
        file.write_all(self.to_text().as_bytes())
    }

    /// Replace the grid from a save file.
    pub fn load_from_file<P: AsRef<Path>>(&mut self, path: P) -> Result<(), LoadError> {
        let text = fs::read_to_string(path)?;
        self.load_from_text(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::super::coord::Coord;
    use super::*;

    fn board_with_marks() -> Board {
        let mut b = Board::new(5, 5).unwrap();
        b.place(Coord::new(2, 2), Mark::Human).unwrap();
        b.place(Coord::new(2, 3), Mark::Ai).unwrap();
        b.place(Coord::new(1, 2), Mark::Human).unwrap();
        b
    }

    #[test]
    fn test_to_text_format() {
        let b = board_with_marks();
        assert_eq!(b.to_text(), "5 5\n.....\n..x..\n..xo.\n.....\n.....\n");
    }

    #[test]
    fn test_text_round_trip() {
        let b = board_with_marks();
        let mut restored = Board::new(5, 5).unwrap();
        restored.load_from_text(&b.to_text()).unwrap();
        assert_eq!(restored, b);
    }

    #[test]
    fn test_load_empty_text() {
        let mut b = Board::new(5, 5).unwrap();
        assert!(matches!(b.load_from_text(""), Err(LoadError::EmptyFile)));
    }

    #[test]
    fn test_load_bad_header() {
        let mut b = Board::new(5, 5).unwrap();
        assert!(matches!(
            b.load_from_text("five five\n"),
            Err(LoadError::BadHeader(_))
        ));
        assert!(matches!(
            b.load_from_text("5\n"),
            Err(LoadError::BadHeader(_))
        ));
    }

    #[test]
    fn test_load_dimension_mismatch_keeps_board() {
        let mut b = board_with_marks();
        let before = b.clone();
        let err = b.load_from_text("7 5\n.....\n").unwrap_err();
        assert!(matches!(err, LoadError::DimensionMismatch { rows: 7, cols: 5, .. }));
        assert_eq!(b, before);
    }

    #[test]
    fn test_load_truncated_keeps_board() {
        let mut b = board_with_marks();
        let before = b.clone();
        let err = b.load_from_text("5 5\n.....\n..x..\n").unwrap_err();
        assert!(matches!(err, LoadError::Truncated { expected: 5, found: 2 }));
        assert_eq!(b, before);
    }

    #[test]
    fn test_load_invalid_cell_char_keeps_board() {
        let mut b = board_with_marks();
        let before = b.clone();
        let text = "5 5\n.....\n..Z..\n.....\n.....\n.....\n";
        let err = b.load_from_text(text).unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidCellChar { ch: 'Z', row: 1, col: 2 }
        ));
        assert_eq!(b, before);
    }

    #[test]
    fn test_load_pads_short_lines() {
        let mut b = Board::new(5, 5).unwrap();
        b.load_from_text("5 5\n..x\n\n.....\n.....\n.....\n").unwrap();
        assert_eq!(b.get(0, 2), Some(Mark::Human));
        assert_eq!(b.get(0, 3), Some(Mark::Empty));
        assert_eq!(b.get(1, 0), Some(Mark::Empty));
    }

    #[test]
    fn test_load_ignores_extra_columns() {
        let mut b = Board::new(5, 5).unwrap();
        b.load_from_text("5 5\n.....xxx\n.....\n.....\n.....\n.....\n")
            .unwrap();
        assert!(b.is_board_empty());
    }
}
