use tictactoe::{Board, BoardError, EMPTY_CELL};

#[test]
fn test_new_board_is_empty() {
    let board: Board<char> = Board::new(3);
    assert_eq!(board.len(), 9);
    assert!(board.is_empty());
    assert!(!board.is_full());
    assert_eq!(board.available_cells(), (0..9).collect::<Vec<_>>());
    assert!(board.cells().iter().all(Option::is_none));
}

#[test]
fn test_set_and_get_cell() {
    let mut board = Board::new(3);
    board.set_cell(4, 'x').unwrap();
    assert_eq!(board.get_cell(4).unwrap(), Some('x'));
    assert_eq!(board.get_cell(0).unwrap(), None);
    assert!(!board.is_cell_available(4).unwrap());
    assert!(board.is_cell_available(0).unwrap());
    assert!(!board.is_empty());
    assert_eq!(board.available_cells(), vec![0, 1, 2, 3, 5, 6, 7, 8]);

    // no availability check at this layer
    board.set_cell(4, 'o').unwrap();
    assert_eq!(board.get_cell(4).unwrap(), Some('o'));
}

#[test]
fn test_out_of_range_index() {
    let mut board = Board::new(3);
    let expected = BoardError::IndexOutOfRange { index: 9, len: 9 };
    assert_eq!(board.get_cell(9).unwrap_err(), expected);
    assert_eq!(board.is_cell_available(9).unwrap_err(), expected);
    assert_eq!(board.set_cell(9, 'x').unwrap_err(), expected);
    assert!(board.is_empty());
}

#[test]
fn test_full_board() {
    let mut board = Board::new(2);
    for idx in 0..4 {
        board.set_cell(idx, if idx % 2 == 0 { 'x' } else { 'o' }).unwrap();
    }
    assert!(board.is_full());
    assert!(!board.is_empty());
    assert!(board.available_cells().is_empty());
}

#[test]
fn test_win_patterns_3x3() {
    let board: Board<char> = Board::new(3);
    let expected: Vec<Vec<usize>> = vec![
        vec![0, 1, 2],
        vec![3, 4, 5],
        vec![6, 7, 8],
        vec![0, 3, 6],
        vec![1, 4, 7],
        vec![2, 5, 8],
        vec![0, 4, 8],
        vec![2, 4, 6],
    ];
    assert_eq!(board.win_patterns(), expected);
}

#[test]
fn test_win_patterns_edge_sizes() {
    let single: Board<char> = Board::new(1);
    assert_eq!(single.win_patterns(), vec![vec![0usize]; 4]);

    let four: Board<char> = Board::new(4);
    let patterns = four.win_patterns();
    assert_eq!(patterns[8], vec![0, 5, 10, 15]);
    assert_eq!(patterns[9], vec![3, 6, 9, 12]);
}

#[test]
fn test_display_rows() {
    let mut board = Board::new(3);
    board.set_cell(0, 'x').unwrap();
    board.set_cell(4, 'o').unwrap();
    board.set_cell(8, 'x').unwrap();
    assert_eq!(board.to_string(), "x..\n.o.\n..x\n");

    let blank: Board<char> = Board::new(2);
    let row = format!("{0}{0}\n", EMPTY_CELL);
    assert_eq!(blank.to_string(), row.repeat(2));
}

#[test]
fn test_string_tokens() {
    let mut board = Board::new(2);
    board.set_cell(1, "X").unwrap();
    assert_eq!(board.get_cell(1).unwrap(), Some("X"));
    assert_eq!(board.to_string(), ".X\n..\n");
}
