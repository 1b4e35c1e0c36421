//! Tests for puzzle constants and runtime defaults

#[cfg(test)]
mod tests {
    use pyramid_tour::io::configuration::{
        DEFAULT_PIECE_TYPES, DEFAULT_START, DEFAULT_TRAY_SIZE, EMPTY_CELL, MAX_TRAY_SIZE,
        PROGRESS_BAR_WIDTH, SOLUTION_HEADER, SOLVE_PROGRESS_INTERVAL, STANDARD_SUPPLY,
    };

    // Tests the standard puzzle dimensions
    // Verified by changing the tray size
    #[test]
    fn test_default_tray() {
        assert_eq!(DEFAULT_TRAY_SIZE, 4);
        assert_eq!(DEFAULT_START, [0, 0]);
    }

    // Tests the standard supply fills the tray exactly
    // Verified by dropping one 3-hop piece
    #[test]
    fn test_standard_supply_fills_tray() {
        let total: usize = STANDARD_SUPPLY.iter().map(|&(_, count)| count).sum();
        assert_eq!(total, DEFAULT_TRAY_SIZE * DEFAULT_TRAY_SIZE);
        assert_eq!(STANDARD_SUPPLY, [(1, 1), (2, 8), (3, 7)]);
    }

    // Tests sweep types agree with the standard supply types
    // Verified by adding a 4-hop type to the sweep defaults
    #[test]
    fn test_piece_types_match_supply() {
        let supply_types: Vec<usize> = STANDARD_SUPPLY.iter().map(|&(hop, _)| hop).collect();
        assert_eq!(DEFAULT_PIECE_TYPES.to_vec(), supply_types);
    }

    // Tests the size limit admits the standard tray
    // Verified by lowering the limit below the default
    #[test]
    fn test_max_tray_size() {
        assert_eq!(MAX_TRAY_SIZE, 16);
        assert_eq!(DEFAULT_TRAY_SIZE.min(MAX_TRAY_SIZE), DEFAULT_TRAY_SIZE);
    }

    // Tests output tokens
    // Verified by changing the empty cell marker
    #[test]
    fn test_output_tokens() {
        assert_eq!(SOLUTION_HEADER, "--- solution ---");
        assert_eq!(EMPTY_CELL, "__");
    }

    // Tests progress settings
    // Verified by refreshing the spinner on every solution
    #[test]
    fn test_progress_settings() {
        assert_eq!(PROGRESS_BAR_WIDTH, 40);
        assert_eq!(SOLVE_PROGRESS_INTERVAL, 64);
    }
}
