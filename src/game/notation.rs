//! Coordinate notation for console input and output.
//!
//! A move is written as column letters followed by a 1-based row number:
//! `b3` is column 1, row 2. Column letters accumulate base-26 with `a` as
//! zero, though boards never exceed 25 columns so one letter always suffices.

use crate::board::Coord;

/// Parse a move like `b3` or `j10`.
///
/// Case-insensitive; interior whitespace is ignored. Returns `None` for
/// anything that is not letters followed by a positive number.
#[must_use]
pub fn parse_move(input: &str) -> Option<Coord> {
    let cleaned: String = input
        .chars()
        .filter(|ch| !ch.is_whitespace())
        .collect::<String>()
        .to_ascii_lowercase();

    let letters: String = cleaned.chars().take_while(char::is_ascii_alphabetic).collect();
    let digits = &cleaned[letters.len()..];
    if letters.is_empty() || digits.is_empty() {
        return None;
    }

    let mut col = 0usize;
    for ch in letters.chars() {
        col = col * 26 + (ch as usize - 'a' as usize);
    }

    let row: usize = digits.parse().ok()?;
    if row == 0 {
        return None;
    }
    Some(Coord::new(row - 1, col))
}

/// Render a coordinate in input notation: `Coord::new(2, 1)` becomes `b3`.
#[must_use]
pub fn move_label(coord: Coord) -> String {
    let col = char::from(b'a' + coord.col as u8);
    format!("{}{}", col, coord.row + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_moves() {
        assert_eq!(parse_move("a1"), Some(Coord::new(0, 0)));
        assert_eq!(parse_move("b3"), Some(Coord::new(2, 1)));
        assert_eq!(parse_move("j10"), Some(Coord::new(9, 9)));
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(parse_move("B3"), parse_move("b3"));
        assert_eq!(parse_move(" c 4 "), Some(Coord::new(3, 2)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(parse_move(""), None);
        assert_eq!(parse_move("3"), None);
        assert_eq!(parse_move("b"), None);
        assert_eq!(parse_move("b0"), None);
        assert_eq!(parse_move("3b"), None);
        assert_eq!(parse_move("b-3"), None);
        assert_eq!(parse_move("β3"), None);
    }

    #[test]
    fn test_multi_letter_columns_accumulate_base26() {
        assert_eq!(parse_move("ba1"), Some(Coord::new(0, 26)));
    }

    #[test]
    fn test_label_round_trip() {
        for coord in [Coord::new(0, 0), Coord::new(2, 1), Coord::new(24, 24)] {
            assert_eq!(parse_move(&move_label(coord)), Some(coord));
        }
    }
}
