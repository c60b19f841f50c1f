//! Static evaluation for cut-off and drawn search nodes.

use crate::{Board, Move, PlayerId};

/// Rewards central control from `player`'s point of view.
///
/// Every occupied cell contributes `board_size - manhattan distance to the
/// centre`, counted positive for `player`'s marks and negative for the
/// opponent's. Empty cells contribute nothing.
pub fn evaluate(board: &Board, player: PlayerId) -> i32 {
    let size = board.size();
    let center = Move::new(size / 2, size / 2);
    let own = player.mark();

    board
        .cells()
        .iter()
        .enumerate()
        .filter_map(|(index, cell)| {
            cell.owner()?;
            let distance = Move::from_index(index, size).manhattan_distance(center);
            let weight = size as i32 - distance as i32;
            Some(if *cell == own { weight } else { -weight })
        })
        .sum()
}
