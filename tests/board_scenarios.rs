use proptest::prelude::*;
use terminal_life::game_of_life::{io, Board, FormatError, RuleEngine};
use terminal_life::{run_simulation, Settings};

fn board_from_live(size: usize, live: &[(usize, usize)]) -> anyhow::Result<Board> {
    let mut board = Board::blank(size)?;
    for &(row, col) in live {
        board.set(row, col, true)?;
    }
    Ok(board)
}

fn square_grid() -> impl Strategy<Value = Vec<Vec<bool>>> {
    (1usize..12)
        .prop_flat_map(|n| prop::collection::vec(prop::collection::vec(any::<bool>(), n), n))
}

#[test]
fn test_blinker_period_two() -> anyhow::Result<()> {
    let horizontal = board_from_live(5, &[(2, 1), (2, 2), (2, 3)])?;
    let vertical = board_from_live(5, &[(1, 2), (2, 2), (3, 2)])?;

    let mut board = horizontal.clone();
    RuleEngine::advance(&mut board);
    assert_eq!(board, vertical);

    RuleEngine::advance(&mut board);
    assert_eq!(board, horizontal);

    Ok(())
}

#[test]
fn test_full_board_keeps_only_corners() -> anyhow::Result<()> {
    let mut board = io::parse_board("[[true,true,true],[true,true,true],[true,true,true]]")?;
    RuleEngine::advance(&mut board);

    assert_eq!(
        io::board_to_json(&board),
        "[[true,false,true],[false,false,false],[true,false,true]]"
    );
    Ok(())
}

#[test]
fn test_ragged_json_is_a_format_error() {
    let err = io::parse_board("[[true, false], [true]]").unwrap_err();
    assert!(matches!(err, FormatError::Ragged { row: 1, .. }));
}

#[test]
fn test_run_simulation_from_file() -> anyhow::Result<()> {
    let temp_dir = tempfile::tempdir()?;
    let path = temp_dir.path().join("lonely.json");
    io::save_board_to_file(&board_from_live(3, &[(1, 1)])?, &path)?;

    let mut settings = Settings::default();
    settings.input.board_file = path;
    settings.simulation.frame_interval_ms = 0;
    settings.simulation.stop_when_extinct = true;
    settings.display.clear_screen = false;

    let summary = run_simulation(settings)?;
    assert_eq!(summary.generations, 1);
    assert_eq!(summary.living_cells, 0);

    Ok(())
}

proptest! {
    #[test]
    fn prop_cells_round_trip(cells in square_grid()) {
        let board = Board::from_cells(cells.clone()).unwrap();
        prop_assert_eq!(board.to_cells(), cells);
        prop_assert_eq!(Board::from_cells(board.to_cells()).unwrap(), board.clone());
        prop_assert_eq!(io::parse_board(&io::board_to_json(&board)).unwrap(), board);
    }

    #[test]
    fn prop_advance_follows_conway_rules(cells in square_grid()) {
        let before = Board::from_cells(cells).unwrap();
        let mut after = before.clone();
        RuleEngine::advance(&mut after);

        prop_assert_eq!(after.size(), before.size());
        for row in 0..before.size() {
            for col in 0..before.size() {
                let neighbors = before.count_neighbors(row, col);
                prop_assert!(neighbors <= 8);

                let alive = before.get(row, col).unwrap();
                let expected = matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3));
                prop_assert_eq!(after.get(row, col).unwrap(), expected);
            }
        }
    }

    #[test]
    fn prop_empty_board_is_stable(size in 1usize..20) {
        let mut board = Board::blank(size).unwrap();
        RuleEngine::advance(&mut board);
        prop_assert!(board.is_extinct());
    }
}
