//! Legal move enumeration.

use crate::{Board, CellState, Move};

/// Empty cells of `board` in row-major order.
///
/// The iterator is recomputed on every call; since boards are immutable
/// the sequence is stable for a given board.
pub fn valid_moves(board: &Board) -> impl Iterator<Item = Move> + '_ {
    let size = board.size();
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == CellState::Empty)
        .map(move |(index, _)| Move::from_index(index, size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlayerId;

    #[test]
    fn test_empty_board_all_moves() {
        let board = Board::new(3);
        let moves: Vec<_> = valid_moves(&board).collect();
        assert_eq!(moves.len(), 9);
        assert_eq!(moves[0], Move::new(0, 0));
        assert_eq!(moves[8], Move::new(2, 2));
    }

    #[test]
    fn test_occupied_cells_skipped() {
        let board = Board::new(3)
            .with_move(0, 0, PlayerId::X)
            .unwrap()
            .with_move(1, 1, PlayerId::O)
            .unwrap();
        let moves: Vec<_> = valid_moves(&board).collect();
        assert_eq!(moves.len(), 7);
        assert!(!moves.contains(&Move::new(0, 0)));
        assert!(!moves.contains(&Move::new(1, 1)));
        assert_eq!(moves[0], Move::new(0, 1));
    }

    #[test]
    fn test_restartable() {
        let board = Board::new(4).with_move(2, 3, PlayerId::X).unwrap();
        let first: Vec<_> = valid_moves(&board).collect();
        let second: Vec<_> = valid_moves(&board).collect();
        assert_eq!(first, second);
    }
}
