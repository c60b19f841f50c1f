//! Tests for running matches from configuration files.

use std::io::Write;
use strictly_arena::{Arena, ArenaConfig};
use strictly_nrow::ai::Difficulty;
use strictly_nrow::rules::check_result;
use strictly_nrow::{GameConfig, PlayerId};
use tempfile::NamedTempFile;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_config_from_file() {
    let file = write_config(
        r#"
        board_size = 4
        win_length = 3
        rounds = 6
        x = "medium"
        o = "easy"
        seed = 3
        "#,
    );
    let config = ArenaConfig::from_file(file.path()).unwrap();
    assert_eq!(config.game(), &GameConfig::new(4, 3));
    assert_eq!(*config.rounds(), 6);
    assert_eq!(*config.x(), Difficulty::Medium);
    assert_eq!(*config.o(), Difficulty::Easy);
    assert!(*config.alternate_first());
}

#[test]
fn test_invalid_geometry_in_file_is_rejected() {
    let file = write_config("board_size = 3\nwin_length = 4\n");
    let err = ArenaConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Win length"));
}

#[test]
fn test_unknown_difficulty_is_rejected() {
    let file = write_config("x = \"impossible\"\n");
    let err = ArenaConfig::from_file(file.path()).unwrap_err();
    assert!(err.message.contains("Failed to parse config"));
}

#[test]
fn test_missing_file_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    assert!(ArenaConfig::from_file(dir.path().join("absent.toml")).is_err());
}

#[test]
fn test_hard_mirror_match_is_all_draws() {
    let config = ArenaConfig::default()
        .with_rounds(4)
        .with_x(Difficulty::Hard)
        .with_o(Difficulty::Hard);
    let report = Arena::new(config).unwrap().run().unwrap();
    assert_eq!(*report.draws(), 4);
    assert_eq!(*report.rounds(), 4);
}

#[test]
fn test_hard_never_loses_to_easy_in_arena() {
    let config = ArenaConfig::default()
        .with_rounds(20)
        .with_x(Difficulty::Easy)
        .with_o(Difficulty::Hard)
        .with_seed(17)
        .with_parallel_search(true);
    let mut arena = Arena::new(config).unwrap();
    let report = arena.run().unwrap();

    assert_eq!(*report.x_wins(), 0);
    assert_eq!(report.x_wins() + report.o_wins() + report.draws(), 20);
    assert_eq!(arena.final_boards().len(), 20);
    for board in arena.final_boards() {
        assert!(check_result(board, 3).is_terminal());
    }
}

#[test]
fn test_first_move_alternates() {
    let config = ArenaConfig::default()
        .with_rounds(2)
        .with_x(Difficulty::Hard)
        .with_o(Difficulty::Hard);
    let mut arena = Arena::new(config).unwrap();
    arena.run().unwrap();

    // a drawn 3x3 round is closed by whoever opened it, so O opens round two
    let boards = arena.final_boards();
    assert_eq!(boards[0].count_marks(PlayerId::X), 5);
    assert_eq!(boards[1].count_marks(PlayerId::O), 5);
}

#[test]
fn test_fixed_first_move() {
    let config = ArenaConfig::default()
        .with_rounds(2)
        .with_x(Difficulty::Hard)
        .with_o(Difficulty::Hard)
        .with_alternate_first(false);
    let mut arena = Arena::new(config).unwrap();
    arena.run().unwrap();
    assert!(arena
        .final_boards()
        .iter()
        .all(|b| b.count_marks(PlayerId::X) == 5));
}

#[test]
fn test_adaptive_seat_plays_larger_board() {
    let config = ArenaConfig::default()
        .with_game(GameConfig::new(5, 4))
        .with_rounds(3)
        .with_x(Difficulty::Adaptive)
        .with_o(Difficulty::Medium)
        .with_seed(8);
    let report = Arena::new(config).unwrap().run().unwrap();
    assert_eq!(*report.rounds(), 3);
}
