//! Tests for piece targets, direction letters and token parsing

#[cfg(test)]
mod tests {
    use pyramid_tour::tour::piece::{Direction, Piece, parse_path};

    // Tests unit vectors of every direction
    // Verified by swapping the North and South offsets
    #[test]
    fn test_direction_offsets() {
        assert_eq!(Direction::North.offset(), [0, 1]);
        assert_eq!(Direction::South.offset(), [0, -1]);
        assert_eq!(Direction::East.offset(), [1, 0]);
        assert_eq!(Direction::West.offset(), [-1, 0]);
    }

    // Tests the search order of directions is N, S, E, W
    // Verified by reordering the ALL constant
    #[test]
    fn test_direction_order() {
        let letters: String = Direction::ALL.iter().map(|d| d.letter()).collect();
        assert_eq!(letters, "NSEW");
    }

    // Tests letters map back to their directions
    // Verified by mapping 'E' to West
    #[test]
    fn test_direction_letter_round_trip() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_letter(direction.letter()), Some(direction));
        }
        assert_eq!(Direction::from_letter('X'), None);
        assert_eq!(Direction::from_letter('n'), None);
    }

    // Tests hop targets inside the tray
    // Verified by ignoring the hop multiplier
    #[test]
    fn test_target_inside_tray() {
        assert_eq!(Piece::new(2, Direction::North).target([0, 0], 4), Some([0, 2]));
        assert_eq!(Piece::new(3, Direction::East).target([0, 1], 4), Some([3, 1]));
        assert_eq!(Piece::new(1, Direction::West).target([2, 2], 4), Some([1, 2]));
        assert_eq!(Piece::new(3, Direction::South).target([1, 3], 4), Some([1, 0]));
    }

    // Tests targets past any edge are rejected
    // Verified by dropping the upper bound check
    #[test]
    fn test_target_off_tray() {
        assert_eq!(Piece::new(1, Direction::South).target([0, 0], 4), None);
        assert_eq!(Piece::new(1, Direction::West).target([0, 3], 4), None);
        assert_eq!(Piece::new(2, Direction::North).target([0, 2], 4), None);
        assert_eq!(Piece::new(3, Direction::East).target([1, 0], 4), None);
        assert_eq!(Piece::new(1, Direction::North).target([0, 0], 1), None);
    }

    // Tests token rendering is hop followed by letter
    // Verified by printing the direction first
    #[test]
    fn test_piece_display() {
        assert_eq!(Piece::new(2, Direction::North).to_string(), "2N");
        assert_eq!(Piece::new(13, Direction::West).to_string(), "13W");
    }

    // Tests token parsing accepts rendered pieces
    // Verified by parsing the letter before the hop
    #[test]
    fn test_piece_parse() {
        assert_eq!("3E".parse::<Piece>(), Ok(Piece::new(3, Direction::East)));
        assert_eq!(" 1S ".parse::<Piece>(), Ok(Piece::new(1, Direction::South)));
        assert_eq!("10N".parse::<Piece>(), Ok(Piece::new(10, Direction::North)));
    }

    // Tests malformed tokens are rejected, signed hops included
    // Verified by handing the hop digits straight to usize parsing
    #[test]
    fn test_piece_parse_rejects_garbage() {
        for token in ["", "N", "2", "0N", "2Q", "xN", "-1S", "+2N", "2 N"] {
            let err = token.parse::<Piece>();
            assert!(err.is_err(), "'{token}' should not parse");
        }
        let Err(err) = "2Q".parse::<Piece>() else {
            return;
        };
        assert!(err.to_string().contains("2Q"));
    }

    // Tests whitespace separated paths parse in order
    // Verified by reversing the parsed sequence
    #[test]
    fn test_parse_path() {
        let pieces = parse_path("1N 2E 3S ").unwrap_or_default();
        assert_eq!(
            pieces,
            vec![
                Piece::new(1, Direction::North),
                Piece::new(2, Direction::East),
                Piece::new(3, Direction::South),
            ]
        );
        assert!(parse_path("1N 2X").is_err());
        assert_eq!(parse_path("").unwrap_or_default(), vec![]);
    }
}
