//! Win detection over arbitrary board sizes and win lengths.

use super::lines::{Line, all_lines};
use crate::{Board, CellState, GameResult};
use tracing::instrument;

/// Finds the first line in `lines` fully occupied by a single player.
///
/// `lines` must have been produced for this board's size.
pub fn find_winning_line_among<'a>(board: &Board, lines: &'a [Line]) -> Option<&'a Line> {
    let size = board.size();
    let cells = board.cells();
    lines.iter().find(|line| {
        let Some(first) = line.first() else {
            return false;
        };
        let mark = cells[first.to_index(size)];
        mark != CellState::Empty && line.iter().all(|m| cells[m.to_index(size)] == mark)
    })
}

/// Finds the first winning line on the board, in [`all_lines`] order.
///
/// Returns `None` if no line of `win_length` is fully occupied by one player.
#[instrument(skip(board))]
pub fn find_winning_line(board: &Board, win_length: usize) -> Option<Line> {
    let lines = all_lines(board.size(), win_length);
    find_winning_line_among(board, &lines).cloned()
}

/// Classifies a board against precomputed `lines`.
pub fn check_result_among(board: &Board, lines: &[Line]) -> GameResult {
    match find_winning_line_among(board, lines) {
        Some(line) => {
            let size = board.size();
            match line
                .first()
                .and_then(|m| board.cells()[m.to_index(size)].owner())
            {
                Some(winner) => GameResult::Win {
                    winner,
                    line: line.clone(),
                },
                None => GameResult::InProgress,
            }
        }
        None if board.is_full() => GameResult::Draw,
        None => GameResult::InProgress,
    }
}

/// Win if a winning line exists, else Draw if the board is full, else InProgress.
#[instrument(skip(board))]
pub fn check_result(board: &Board, win_length: usize) -> GameResult {
    let lines = all_lines(board.size(), win_length);
    check_result_among(board, &lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Move, PlayerId};

    fn play(size: usize, moves: &[(usize, usize, PlayerId)]) -> Board {
        moves.iter().fold(Board::new(size), |board, (r, c, p)| {
            board.with_move(*r, *c, *p).unwrap()
        })
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(3);
        assert_eq!(find_winning_line(&board, 3), None);
        assert_eq!(check_result(&board, 3), GameResult::InProgress);
    }

    #[test]
    fn test_winner_top_row() {
        let board = play(3, &[(0, 0, PlayerId::X), (0, 1, PlayerId::X), (0, 2, PlayerId::X)]);
        assert_eq!(
            check_result(&board, 3),
            GameResult::Win {
                winner: PlayerId::X,
                line: vec![Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)],
            }
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = play(3, &[(0, 2, PlayerId::O), (1, 1, PlayerId::O), (2, 0, PlayerId::O)]);
        assert_eq!(check_result(&board, 3).winner(), Some(PlayerId::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = play(3, &[(0, 0, PlayerId::X), (0, 1, PlayerId::X)]);
        assert_eq!(check_result(&board, 3), GameResult::InProgress);
    }

    #[test]
    fn test_four_in_a_row_on_five_board() {
        let board = play(
            5,
            &[
                (1, 4, PlayerId::X),
                (2, 3, PlayerId::X),
                (3, 2, PlayerId::X),
                (4, 1, PlayerId::X),
            ],
        );
        let line = find_winning_line(&board, 4).expect("anti-diagonal win");
        assert_eq!(line[0], Move::new(1, 4));
        assert_eq!(find_winning_line(&board, 5), None);
    }

    #[test]
    fn test_row_reported_before_diagonal() {
        // The last move completes both the top row and the main diagonal.
        let board = play(
            3,
            &[
                (0, 0, PlayerId::X),
                (0, 1, PlayerId::X),
                (1, 1, PlayerId::X),
                (2, 2, PlayerId::X),
                (0, 2, PlayerId::X),
            ],
        );
        assert_eq!(
            find_winning_line(&board, 3),
            Some(vec![Move::new(0, 0), Move::new(0, 1), Move::new(0, 2)])
        );
    }

    #[test]
    fn test_check_result_is_idempotent() {
        let board = play(4, &[(0, 0, PlayerId::X), (1, 1, PlayerId::O), (3, 3, PlayerId::X)]);
        assert_eq!(check_result(&board, 3), check_result(&board, 3));
    }
}
