//! Game rules for N-in-a-row.
//!
//! This module contains pure functions for evaluating a board according
//! to the rules. Rules are separated from board storage and from the
//! state machine so that the opponents can call them on hypothetical
//! boards during search.

pub mod draw;
pub mod lines;
pub mod moves;
pub mod win;

pub use draw::{is_draw, is_full};
pub use lines::{Direction, Line, all_lines, line_count};
pub use moves::valid_moves;
pub use win::{check_result, check_result_among, find_winning_line, find_winning_line_among};
