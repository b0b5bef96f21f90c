use proptest::prelude::*;
use tictactoe::Board;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn win_pattern_shape(n in 1usize..12) {
        let board: Board<char> = Board::new(n);
        let patterns = board.win_patterns();
        prop_assert_eq!(patterns.len(), 2 * n + 2);
        for pattern in &patterns {
            prop_assert_eq!(pattern.len(), n);
            prop_assert!(pattern.iter().all(|&idx| idx < n * n));
        }
    }

    #[test]
    fn rows_and_columns_partition_the_board(n in 1usize..12) {
        let board: Board<char> = Board::new(n);
        let patterns = board.win_patterns();
        let all: Vec<usize> = (0..n * n).collect();

        let mut rows: Vec<usize> = patterns[..n].iter().flatten().copied().collect();
        rows.sort_unstable();
        prop_assert_eq!(&rows, &all);

        let mut cols: Vec<usize> = patterns[n..2 * n].iter().flatten().copied().collect();
        cols.sort_unstable();
        prop_assert_eq!(&cols, &all);
    }

    #[test]
    fn fresh_board_has_every_cell_available(n in 1usize..12) {
        let board: Board<char> = Board::new(n);
        prop_assert!(board.is_empty());
        prop_assert!(!board.is_full());
        prop_assert_eq!(board.available_cells(), (0..n * n).collect::<Vec<_>>());
    }

    #[test]
    fn filling_every_cell_makes_board_full(n in 1usize..8, seed in any::<u64>()) {
        let mut board = Board::new(n);
        for idx in 0..n * n {
            let token = if (seed >> (idx % 64)) & 1 == 0 { 'x' } else { 'o' };
            prop_assert!(board.is_cell_available(idx).unwrap());
            board.set_cell(idx, token).unwrap();
            prop_assert_eq!(board.available_cells().len(), n * n - idx - 1);
        }
        prop_assert!(board.is_full());
        prop_assert!(!board.is_empty());
        prop_assert!(board.available_cells().is_empty());
    }

    #[test]
    fn display_has_one_line_per_row(n in 1usize..10) {
        let board: Board<char> = Board::new(n);
        let text = board.to_string();
        prop_assert!(text.ends_with('\n'));
        let lines: Vec<&str> = text.lines().collect();
        prop_assert_eq!(lines.len(), n);
        prop_assert!(lines.iter().all(|line| line.chars().count() == n));
    }
}
