//! Minimax opponent with alpha-beta pruning.
//!
//! The search is a pure recursive function over immutable boards: every
//! node builds its children with [`Board::with_move`], so branches share
//! nothing and the root children can be searched on separate threads.
//!
//! Scoring is always from the requesting player's point of view:
//! - a win scores `100 + remaining depth` (faster wins score higher)
//! - a loss scores `-100 - remaining depth` (slower losses score higher)
//! - a draw, or a live node at depth zero, gets [`evaluate`]
//!
//! Candidate moves are ordered by Manhattan distance to the centre, which
//! only affects how much gets pruned.

use super::heuristic::evaluate;
use super::{AiError, Difficulty, Strategy, require_moves, require_win_length};
use crate::rules::{Line, all_lines, check_result_among};
use crate::{Board, GameResult, Move, PlayerId};
use rayon::prelude::*;
use tracing::{debug, instrument};

const WIN_SCORE: i32 = 100;

/// Plies searched from `board`.
///
/// 3×3 boards are solved outright (9 ply) and 4×4 boards get 6 ply. On
/// anything else the full tree is out of reach, so depth drops as the
/// number of empty cells grows: 3 ply above 15 empty cells, 4 above 10,
/// 5 otherwise.
pub fn search_depth(board: &Board) -> usize {
    match board.size() {
        3 => 9,
        4 => 6,
        _ => match board.empty_count() {
            n if n > 15 => 3,
            n if n > 10 => 4,
            _ => 5,
        },
    }
}

/// Empty cells, closest to the centre first (stable for ties).
fn ordered_moves(board: &Board) -> Vec<Move> {
    let center = Move::new(board.size() / 2, board.size() / 2);
    let mut moves: Vec<Move> = crate::rules::valid_moves(board).collect();
    moves.sort_by_key(|mv| mv.manhattan_distance(center));
    moves
}

/// Per-search context.
struct Search<'a> {
    lines: &'a [Line],
    maximizer: PlayerId,
    nodes: u64,
}

impl<'a> Search<'a> {
    fn new(lines: &'a [Line], maximizer: PlayerId) -> Self {
        Self {
            lines,
            maximizer,
            nodes: 0,
        }
    }

    /// Returns the node's score and, for an expanded node, its best move.
    fn minimax(
        &mut self,
        board: &Board,
        to_move: PlayerId,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
    ) -> (i32, Option<Move>) {
        self.nodes += 1;

        match check_result_among(board, self.lines) {
            GameResult::Win { winner, .. } => {
                let score = if winner == self.maximizer {
                    WIN_SCORE + depth as i32
                } else {
                    -WIN_SCORE - depth as i32
                };
                return (score, None);
            }
            GameResult::Draw => return (evaluate(board, self.maximizer), None),
            GameResult::InProgress if depth == 0 => {
                return (evaluate(board, self.maximizer), None);
            }
            GameResult::InProgress => {}
        }

        let maximizing = to_move == self.maximizer;
        let mut best_score = if maximizing { i32::MIN } else { i32::MAX };
        let mut best_move = None;

        for mv in ordered_moves(board) {
            let Ok(child) = board.with_move(mv.row, mv.col, to_move) else {
                continue;
            };
            let (score, _) = self.minimax(&child, to_move.opponent(), depth - 1, alpha, beta);

            if maximizing {
                if score > best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                alpha = alpha.max(score);
            } else {
                if score < best_score {
                    best_score = score;
                    best_move = Some(mv);
                }
                beta = beta.min(score);
            }

            if beta <= alpha {
                break;
            }
        }

        (best_score, best_move)
    }
}

/// Minimax opponent; optimal on 3×3 boards.
#[derive(Debug, Clone, Copy, Default)]
pub struct HardAi {
    parallel: bool,
}

impl HardAi {
    /// Creates a sequential searcher.
    pub fn new() -> Self {
        Self { parallel: false }
    }

    /// Creates a searcher that explores root moves on the rayon pool.
    ///
    /// Each root child is searched with a full window, so it picks the same
    /// move as the sequential search while pruning less.
    pub fn parallel() -> Self {
        Self { parallel: true }
    }

    /// Returns true if root moves are searched in parallel.
    pub fn is_parallel(&self) -> bool {
        self.parallel
    }

    fn search_sequential(
        &self,
        board: &Board,
        player: PlayerId,
        lines: &[Line],
        depth: usize,
    ) -> (i32, Option<Move>, u64) {
        let mut search = Search::new(lines, player);
        let (score, best) = search.minimax(board, player, depth, i32::MIN, i32::MAX);
        (score, best, search.nodes)
    }

    fn search_parallel(
        &self,
        board: &Board,
        player: PlayerId,
        lines: &[Line],
        depth: usize,
    ) -> (i32, Option<Move>, u64) {
        if check_result_among(board, lines).is_terminal() || depth == 0 {
            return self.search_sequential(board, player, lines, depth);
        }

        let scored: Vec<(Move, i32, u64)> = ordered_moves(board)
            .into_par_iter()
            .filter_map(|mv| {
                let child = board.with_move(mv.row, mv.col, player).ok()?;
                let mut search = Search::new(lines, player);
                let (score, _) =
                    search.minimax(&child, player.opponent(), depth - 1, i32::MIN, i32::MAX);
                Some((mv, score, search.nodes))
            })
            .collect();

        let nodes = 1 + scored.iter().map(|(_, _, n)| n).sum::<u64>();
        // First strictly better score wins, matching the sequential tie-break.
        let best = scored
            .iter()
            .fold(None::<(Move, i32)>, |best, (mv, score, _)| match best {
                Some((_, top)) if *score <= top => best,
                _ => Some((*mv, *score)),
            });

        match best {
            Some((mv, score)) => (score, Some(mv), nodes),
            None => (i32::MIN, None, nodes),
        }
    }
}

impl Strategy for HardAi {
    #[instrument(skip(self, board), fields(player = %player, parallel = self.parallel))]
    fn select_move(
        &mut self,
        board: &Board,
        player: PlayerId,
        win_length: usize,
    ) -> Result<Move, AiError> {
        let moves = require_moves(board)?;
        require_win_length(board, win_length)?;

        let lines = all_lines(board.size(), win_length);
        let depth = search_depth(board);

        let (score, best, nodes) = if self.parallel {
            self.search_parallel(board, player, &lines, depth)
        } else {
            self.search_sequential(board, player, &lines, depth)
        };

        debug!(depth, nodes, score, best = ?best, "Search complete");

        // The root can already be decided (e.g. a won board handed in by a
        // caller); any legal move will do then.
        Ok(best.unwrap_or(moves[0]))
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Hard
    }
}
