use crate::engine::{Board, GRID_SIZE};
use crate::error::BoardError;

/// Parses an array of string slices into a `Board`.
///
/// Each string slice represents one row, starting from row 0. Exactly
/// `GRID_SIZE` rows of exactly `GRID_SIZE` characters are required; the
/// valid characters are the digits '0' through '8', with '0' denoting the
/// empty cell. The parsed grid must also be a permutation of 0..=8, which
/// `Board::from_grid` enforces.
///
/// # Arguments
/// * `s`: A slice of string slices (`&[&str]`) representing the rows of
///   the board, from top to bottom.
///
/// # Returns
/// * `Ok(Board)` if parsing and validation succeed.
/// * `Err(BoardError)` if the shape is wrong, a character is not a digit
///   in 0..=8, or a tile value repeats.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::utils::board_from_str_array;
///
/// let board = board_from_str_array(&["724", "506", "831"]).unwrap();
/// assert_eq!(board.get_tile(0, 0), 7);
/// assert_eq!(board.empty_position(), (1, 1));
///
/// assert!(board_from_str_array(&["724", "506"]).is_err());
/// assert!(board_from_str_array(&["724", "5x6", "831"]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board, BoardError> {
    if s.len() != GRID_SIZE {
        return Err(BoardError::WrongRowCount {
            expected: GRID_SIZE,
            found: s.len(),
        });
    }

    let mut grid = [[0u8; GRID_SIZE]; GRID_SIZE];
    for (r, row_str) in s.iter().enumerate() {
        let chars: Vec<char> = row_str.chars().collect();
        if chars.len() != GRID_SIZE {
            return Err(BoardError::WrongRowLength {
                row: r,
                expected: GRID_SIZE,
                found: chars.len(),
            });
        }

        for (c, ch) in chars.into_iter().enumerate() {
            grid[r][c] = match ch.to_digit(10) {
                Some(d) if d < 9 => d as u8,
                _ => return Err(BoardError::UnrecognizedCharacter { ch, row: r, col: c }),
            };
        }
    }

    Board::from_grid(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_from_str_array_valid() {
        let board = board_from_str_array(&["012", "345", "678"]).unwrap();
        assert_eq!(board, Board::solved());

        let classic = board_from_str_array(&["724", "506", "831"]).unwrap();
        assert_eq!(classic, Board::classic_start());
    }

    #[test]
    fn test_board_from_str_array_wrong_row_count() {
        let result = board_from_str_array(&["012", "345"]);
        assert_eq!(
            result.unwrap_err(),
            BoardError::WrongRowCount {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn test_board_from_str_array_wrong_row_length() {
        let result = board_from_str_array(&["012", "3456", "78"]);
        assert_eq!(
            result.unwrap_err(),
            BoardError::WrongRowLength {
                row: 1,
                expected: 3,
                found: 4
            }
        );
    }

    #[test]
    fn test_board_from_str_array_invalid_char() {
        let result = board_from_str_array(&["012", "3x5", "678"]);
        assert_eq!(
            result.unwrap_err(),
            BoardError::UnrecognizedCharacter {
                ch: 'x',
                row: 1,
                col: 1
            }
        );

        // '9' is a digit but not a valid tile.
        let result = board_from_str_array(&["012", "345", "679"]);
        assert_eq!(
            result.unwrap_err(),
            BoardError::UnrecognizedCharacter {
                ch: '9',
                row: 2,
                col: 2
            }
        );
    }

    #[test]
    fn test_board_from_str_array_duplicate_tile() {
        let result = board_from_str_array(&["012", "345", "677"]);
        assert_eq!(result.unwrap_err(), BoardError::DuplicateTile { value: 7 });
    }
}
