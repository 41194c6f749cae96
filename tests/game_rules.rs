//! Board rules, terminal detection and rewards through the public API

mod common;

use common::mv;
use noughts::{Error, GameState, Outcome, Player};

mod concrete_scenarios {
    use super::*;

    #[test]
    fn test_top_row_win_for_x() {
        let mut state = GameState::new();
        for m in [mv(0, 0), mv(1, 1), mv(0, 1), mv(1, 2), mv(0, 2)] {
            state.apply_move(m).unwrap();
        }

        assert!(state.is_terminal());
        assert_eq!(state.winner_reward(), Some(1.0));
        assert_eq!(state.outcome(), Outcome::Won(Player::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X
        // X O O
        // O X X
        let mut state = GameState::new();
        for m in [
            mv(0, 0),
            mv(0, 1),
            mv(0, 2),
            mv(1, 1),
            mv(1, 0),
            mv(1, 2),
            mv(2, 1),
            mv(2, 0),
            mv(2, 2),
        ] {
            state.apply_move(m).unwrap();
        }

        assert!(state.board().is_full());
        assert!(state.is_terminal());
        assert_eq!(state.winner_reward(), Some(0.0));
    }

    #[test]
    fn test_row_out_of_range_leaves_state_unchanged() {
        let mut state: GameState = "X...O....".parse().unwrap();
        let before = state;

        let err = state.apply_move(mv(3, 0)).unwrap_err();
        assert!(matches!(err, Error::OutOfBounds { row: 3, col: 0 }));
        assert_eq!(state, before);
        assert!(!state.try_apply_move(3, 1));
        assert_eq!(state, before);
    }
}

mod move_legality {
    use super::*;

    #[test]
    fn test_occupied_cell_rejected() {
        let mut state = GameState::new();
        state.apply_move(mv(1, 1)).unwrap();
        let before = state;

        assert!(matches!(
            state.apply_move(mv(1, 1)),
            Err(Error::Occupied { row: 1, col: 1 })
        ));
        assert_eq!(state, before);
    }

    #[test]
    fn test_no_moves_after_game_over() {
        let mut state: GameState = "XXXOO....".parse().unwrap();
        let before = state;

        assert!(matches!(state.apply_move(mv(2, 2)), Err(Error::GameOver)));
        assert_eq!(state, before);
    }

    #[test]
    fn test_turn_passes_on_every_legal_move() {
        let mut state = GameState::new();
        assert_eq!(state.current_player(), Player::X);
        state.apply_move(mv(0, 0)).unwrap();
        assert_eq!(state.current_player(), Player::O);
        state.apply_move(mv(2, 2)).unwrap();
        assert_eq!(state.current_player(), Player::X);
    }

    #[test]
    fn test_reset_returns_to_empty_board() {
        let mut state: GameState = "XO.X.O...".parse().unwrap();
        state.reset();
        assert_eq!(state, GameState::new());
        assert_eq!(state.valid_moves().len(), 9);
    }
}

mod parsing {
    use super::*;

    #[test]
    fn test_encode_parse_agree() {
        let state: GameState = "XO.X.O..._X".parse().unwrap();
        assert_eq!(state.encode(), "XO.X.O..._X");
        assert_eq!(state.encode().parse::<GameState>().unwrap(), state);
    }

    #[test]
    fn test_unreachable_boards_rejected() {
        // Both sides complete a line
        assert!("XXXOOO...".parse::<GameState>().is_err());
        // O has more pieces than X, with or without a side-to-move suffix
        assert!(matches!(
            "OO.X.....".parse::<GameState>(),
            Err(Error::InvalidPieceCounts { x_count: 1, o_count: 2 })
        ));
        assert!(matches!(
            "OO.X....._X".parse::<GameState>(),
            Err(Error::InvalidPieceCounts { x_count: 1, o_count: 2 })
        ));
        // Wrong length, short or long
        assert!("XO".parse::<GameState>().is_err());
        assert!(matches!(
            "XO.......XXXXXX".parse::<GameState>(),
            Err(Error::InvalidBoardLength { got: 15, .. })
        ));
        // Unknown cell character
        assert!("XOZ......".parse::<GameState>().is_err());
    }
}
