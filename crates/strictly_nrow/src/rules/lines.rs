//! Enumeration of candidate winning lines.

use crate::Move;
use tracing::instrument;

/// Ordered run of `win_length` contiguous cells along one direction.
pub type Line = Vec<Move>;

/// Direction a line runs in, in the order lines are enumerated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Direction {
    /// Left to right along a row.
    Horizontal,
    /// Top to bottom along a column.
    Vertical,
    /// Top-left to bottom-right.
    Diagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Direction {
    /// Appends every line of this direction, in scan order.
    fn push_lines(self, board_size: usize, win_length: usize, lines: &mut Vec<Line>) {
        let n = board_size;
        let w = win_length;
        let span = n - w + 1;
        match self {
            Direction::Horizontal => {
                for row in 0..n {
                    for start in 0..span {
                        lines.push((0..w).map(|i| Move::new(row, start + i)).collect());
                    }
                }
            }
            Direction::Vertical => {
                for col in 0..n {
                    for start in 0..span {
                        lines.push((0..w).map(|i| Move::new(start + i, col)).collect());
                    }
                }
            }
            Direction::Diagonal => {
                for row in 0..span {
                    for col in 0..span {
                        lines.push((0..w).map(|i| Move::new(row + i, col + i)).collect());
                    }
                }
            }
            Direction::AntiDiagonal => {
                for row in 0..span {
                    for col in (w - 1)..n {
                        lines.push((0..w).map(|i| Move::new(row + i, col - i)).collect());
                    }
                }
            }
        }
    }
}

/// Every line of exactly `win_length` cells on a `board_size` board.
///
/// Lines come horizontal first, then vertical, then diagonal, then
/// anti-diagonal; within a direction they are ordered by starting cell in
/// row-major order. The order decides which line is reported when a move
/// completes several at once.
///
/// Returns no lines when `win_length` is zero or exceeds `board_size`.
#[instrument]
pub fn all_lines(board_size: usize, win_length: usize) -> Vec<Line> {
    let mut lines = Vec::with_capacity(line_count(board_size, win_length));
    if win_length == 0 || win_length > board_size {
        return lines;
    }
    for direction in <Direction as strum::IntoEnumIterator>::iter() {
        direction.push_lines(board_size, win_length, &mut lines);
    }
    lines
}

/// Number of lines [`all_lines`] yields: `2·n·(n-w+1) + 2·(n-w+1)²`.
pub fn line_count(board_size: usize, win_length: usize) -> usize {
    if win_length == 0 || win_length > board_size {
        return 0;
    }
    let span = board_size - win_length + 1;
    2 * board_size * span + 2 * span * span
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_board_has_eight_lines() {
        let lines = all_lines(3, 3);
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], vec![Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)]);
        assert_eq!(lines[3], vec![Move::new(0, 0), Move::new(1, 0), Move::new(2, 0)]);
        assert_eq!(lines[6], vec![Move::new(0, 0), Move::new(1, 1), Move::new(2, 2)]);
        assert_eq!(lines[7], vec![Move::new(0, 2), Move::new(1, 1), Move::new(2, 0)]);
    }

    #[test]
    fn test_line_count_matches_enumeration() {
        for n in 1..=7 {
            for w in 1..=n {
                let lines = all_lines(n, w);
                assert_eq!(lines.len(), line_count(n, w), "n={} w={}", n, w);
                assert_eq!(lines.len(), 2 * n * (n - w + 1) + 2 * (n - w + 1).pow(2));
                assert!(lines.iter().all(|line| line.len() == w));
            }
        }
    }

    #[test]
    fn test_lines_stay_on_board() {
        for line in all_lines(5, 4) {
            assert!(line.iter().all(|m| m.row < 5 && m.col < 5));
        }
    }

    #[test]
    fn test_anti_diagonals_on_larger_board() {
        let lines = all_lines(5, 4);
        let last = lines.last().expect("lines");
        assert_eq!(
            last,
            &vec![Move::new(1, 4), Move::new(2, 3), Move::new(3, 2), Move::new(4, 1)]
        );
    }

    #[test]
    fn test_degenerate_win_lengths() {
        assert!(all_lines(3, 0).is_empty());
        assert!(all_lines(3, 4).is_empty());
        assert_eq!(line_count(3, 4), 0);
    }
}
