//! Tests for placement legality and copy-on-write search states

#[cfg(test)]
mod tests {
    use pyramid_tour::tour::piece::{Direction, Piece};
    use pyramid_tour::tour::search::TourConfig;
    use pyramid_tour::tour::state::{IllegalPlacement, SearchState};
    use pyramid_tour::tour::supply::Supply;

    fn two_by_two() -> TourConfig {
        let supply = Supply::new([(1, 4)]).unwrap_or_else(|_| Supply::standard());
        TourConfig::new(2, [0, 0], supply).unwrap_or_else(|_| TourConfig::standard())
    }

    fn walk(config: &TourConfig, pieces: &[Piece]) -> Option<SearchState> {
        let mut state = SearchState::initial(config);
        for &piece in pieces {
            state = state.place(config, piece).ok()?;
        }
        Some(state)
    }

    // Tests the initial state sits on the start cell with nothing placed
    // Verified by starting the cursor at the tray center
    #[test]
    fn test_initial_state() {
        let config = TourConfig::standard();
        let state = SearchState::initial(&config);
        assert_eq!(state.cursor(), [0, 0]);
        assert_eq!(state.piece_count(), 0);
        assert_eq!(state.used(), &[0, 0, 0]);
        assert_eq!(state.path(), "");
        assert_eq!(state.tray().occupied(), 0);
        assert!(!state.is_complete(&config));
    }

    // Tests a legal placement fills the cursor cell and moves the cursor
    // Verified by placing the piece on the target cell instead
    #[test]
    fn test_place_moves_cursor() {
        let config = TourConfig::standard();
        let state = SearchState::initial(&config);
        let piece = Piece::new(2, Direction::North);

        let Ok(next) = state.place(&config, piece) else {
            panic!("2N from the corner is legal");
        };
        assert_eq!(next.cursor(), [0, 2]);
        assert_eq!(next.tray().get([0, 0]), Some(piece));
        assert!(next.tray().is_vacant([0, 2]));
        assert_eq!(next.used(), &[0, 1, 0]);
        assert_eq!(next.piece_count(), 1);
        assert_eq!(next.path(), "2N ");
        assert_eq!(next.pieces(), &[piece]);
    }

    // Tests the parent state survives a placement untouched
    // Verified by sharing the tray between parent and child
    #[test]
    fn test_place_does_not_mutate_parent() {
        let config = TourConfig::standard();
        let state = SearchState::initial(&config);
        let before = state.clone();

        let _ = state.place(&config, Piece::new(3, Direction::East));
        let _ = state.place(&config, Piece::new(1, Direction::South));
        assert_eq!(state, before);
    }

    // Tests pieces pointing off the tray are pruned
    // Verified by wrapping coordinates around the tray edge
    #[test]
    fn test_off_tray_rejected() {
        let config = TourConfig::standard();
        let state = SearchState::initial(&config);
        let piece = Piece::new(1, Direction::South);
        assert_eq!(
            state.place(&config, piece),
            Err(IllegalPlacement::OffTray {
                cursor: [0, 0],
                piece
            })
        );
    }

    // Tests a used up type cannot be placed again
    // Verified by comparing used count with <= instead of <
    #[test]
    fn test_exhausted_type_rejected() {
        let config = TourConfig::standard();
        let Some(state) = walk(&config, &[Piece::new(1, Direction::North)]) else {
            panic!("1N from the corner is legal");
        };
        assert_eq!(
            state.place(&config, Piece::new(1, Direction::East)),
            Err(IllegalPlacement::Exhausted { hop: 1 })
        );
    }

    // Tests types absent from the supply are treated as exhausted
    // Verified by defaulting unknown types to slot zero
    #[test]
    fn test_unknown_type_rejected() {
        let config = TourConfig::standard();
        let state = SearchState::initial(&config);
        assert_eq!(
            state.place(&config, Piece::new(4, Direction::North)),
            Err(IllegalPlacement::Exhausted { hop: 4 })
        );
    }

    // Tests landing on an occupied cell before the last piece is pruned
    // Verified by allowing the start cell at any step
    #[test]
    fn test_occupied_rejected() {
        let config = TourConfig::standard();
        let Some(state) = walk(&config, &[Piece::new(2, Direction::North)]) else {
            panic!("2N from the corner is legal");
        };
        assert_eq!(
            state.place(&config, Piece::new(2, Direction::South)),
            Err(IllegalPlacement::Occupied { target: [0, 0] })
        );
    }

    // Tests the final piece may close the tour on the start cell
    // Verified by removing the closing exception
    #[test]
    fn test_final_piece_closes_on_start() {
        let config = two_by_two();
        let path = [
            Piece::new(1, Direction::North),
            Piece::new(1, Direction::East),
            Piece::new(1, Direction::South),
            Piece::new(1, Direction::West),
        ];
        let Some(state) = walk(&config, &path) else {
            panic!("closing move rejected");
        };
        assert!(state.is_complete(&config));
        assert!(state.tray().is_full());
        assert_eq!(state.cursor(), [0, 0]);
        assert_eq!(state.path(), "1N 1E 1S 1W ");
    }

    // Tests the final piece may not land on any other occupied cell
    // Verified by generalising the exception to every occupied cell
    #[test]
    fn test_final_piece_other_cell_rejected() {
        let config = two_by_two();
        let path = [
            Piece::new(1, Direction::North),
            Piece::new(1, Direction::East),
            Piece::new(1, Direction::South),
        ];
        let Some(state) = walk(&config, &path) else {
            panic!("open path rejected");
        };
        assert_eq!(
            state.place(&config, Piece::new(1, Direction::North)),
            Err(IllegalPlacement::Occupied { target: [1, 1] })
        );
    }

    // Tests rejection messages name the cause
    // Verified by printing a generic message for every variant
    #[test]
    fn test_illegal_placement_display() {
        let exhausted = IllegalPlacement::Exhausted { hop: 2 };
        assert_eq!(exhausted.to_string(), "no pieces of type 2 available");

        let occupied = IllegalPlacement::Occupied { target: [1, 3] };
        assert!(occupied.to_string().contains("(1, 3)"));

        let off_tray = IllegalPlacement::OffTray {
            cursor: [0, 0],
            piece: Piece::new(3, Direction::West),
        };
        assert!(off_tray.to_string().contains("3W"));
    }
}
