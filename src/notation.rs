//! Text notation for moves.
//!
//! A placement is written as two letters, row then column, with `a`
//! meaning index 0: `"cd"` is row 2, column 3. The words `skip` and
//! `quit` are also accepted. Input is case-insensitive and surrounding
//! whitespace is ignored.
//!
//! Parsing does not know the board size. A well-formed placement beyond
//! the board comes back as a normal `Move` and is rejected by the rules
//! as out of bounds.

use crate::core::{Coord, Move, NotationError, MAX_SIDE};

/// A parsed line of player input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Play a move.
    Move(Move),
    /// Leave the game.
    Quit,
}

fn letter_index(ch: char) -> Result<usize, NotationError> {
    let lower = ch.to_ascii_lowercase();
    if lower.is_ascii_lowercase() {
        Ok((lower as u8 - b'a') as usize)
    } else {
        Err(NotationError::BadLetter(ch))
    }
}

fn index_letter(index: usize) -> Option<char> {
    (index < MAX_SIDE).then(|| (b'a' + index as u8) as char)
}

/// Parse one line of input.
///
/// ```
/// use rust_othello::core::Move;
/// use rust_othello::notation::{parse_move, Command};
///
/// assert_eq!(parse_move("cd").unwrap(), Command::Move(Move::place(2, 3)));
/// assert_eq!(parse_move(" SKIP ").unwrap(), Command::Move(Move::Skip));
/// assert_eq!(parse_move("quit").unwrap(), Command::Quit);
/// assert!(parse_move("c4").is_err());
/// ```
pub fn parse_move(text: &str) -> Result<Command, NotationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(NotationError::Empty);
    }
    if text.eq_ignore_ascii_case("skip") {
        return Ok(Command::Move(Move::Skip));
    }
    if text.eq_ignore_ascii_case("quit") {
        return Ok(Command::Quit);
    }

    let chars: Vec<char> = text.chars().collect();
    let [row, col] = chars[..] else {
        return Err(NotationError::BadLength(chars.len()));
    };

    Ok(Command::Move(Move::place(letter_index(row)?, letter_index(col)?)))
}

/// Render a coordinate as two letters, or `None` past column/row `z`.
#[must_use]
pub fn format_coord(coord: Coord) -> Option<String> {
    let row = index_letter(coord.row)?;
    let col = index_letter(coord.col)?;
    Some([row, col].iter().collect())
}
