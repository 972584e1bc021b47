use tictactoe::{Board, EncodingError, GameError, Mark, Move, Status, CELL_COUNT, WIN_LINES};

fn mv(row: i64, col: i64) -> Move {
    Move::new(row, col).unwrap()
}

fn line_cells(line: u16) -> Vec<usize> {
    (0..CELL_COUNT).filter(|i| line & (1 << i) != 0).collect()
}

fn has_line(cells: &[usize]) -> bool {
    WIN_LINES
        .iter()
        .any(|&line| line_cells(line).iter().all(|c| cells.contains(c)))
}

fn encoding(x: &[usize], o: &[usize]) -> String {
    (0..CELL_COUNT)
        .map(|i| {
            if x.contains(&i) {
                'X'
            } else if o.contains(&i) {
                'O'
            } else {
                '_'
            }
        })
        .collect()
}

#[test]
fn test_empty_board() {
    let board = Board::new();
    assert_eq!(board.status(), Status::InProgress);
    assert!(board.x_to_move());
    assert_eq!(board.current_mark(), Mark::X);
    assert_eq!(board.empty_cells().count(), CELL_COUNT);
    assert_eq!(board.encode(), "_________");
}

#[test]
fn test_first_line_wins_for_x() {
    let mut board = Board::new();
    for m in [mv(1, 1), mv(1, 2), mv(2, 1), mv(2, 2)] {
        board.apply_move(m).unwrap();
        assert_eq!(board.status(), Status::InProgress);
    }
    board.apply_move(mv(3, 1)).unwrap();
    assert_eq!(board.status(), Status::XWins);
    assert_eq!(board.encode(), "XXXOO____");
}

#[test]
fn test_every_line_wins_for_either_mark() {
    for &line in WIN_LINES.iter() {
        let on_line = line_cells(line);
        let off_line: Vec<usize> = (0..CELL_COUNT).filter(|i| !on_line.contains(i)).collect();

        let o_cells = &off_line[..2];
        let board: Board = encoding(&on_line, o_cells).parse().unwrap();
        assert_eq!(board.status(), Status::XWins, "line {:09b}", line);

        // three loser marks that do not form a line of their own
        let mut x_cells = None;
        'search: for a in 0..off_line.len() {
            for b in a + 1..off_line.len() {
                for c in b + 1..off_line.len() {
                    let cells = [off_line[a], off_line[b], off_line[c]];
                    if !has_line(&cells) {
                        x_cells = Some(cells);
                        break 'search;
                    }
                }
            }
        }
        let x_cells = x_cells.unwrap();
        let board: Board = encoding(&x_cells, &on_line).parse().unwrap();
        assert_eq!(board.status(), Status::OWins, "line {:09b}", line);
    }
}

#[test]
fn test_impossible_positions() {
    let both: Board = "XXXOOO___".parse().unwrap();
    assert_eq!(both.status(), Status::Impossible);

    let too_many_x: Board = "XX_______".parse().unwrap();
    assert_eq!(too_many_x.status(), Status::Impossible);

    let too_many_o: Board = "OOO_X____".parse().unwrap();
    assert_eq!(too_many_o.status(), Status::Impossible);
}

#[test]
fn test_alternating_encoding() {
    let board: Board = "XOXOXOOXO".parse().unwrap();
    assert_eq!(board.count(Mark::X), 4);
    assert_eq!(board.count(Mark::O), 5);
    assert!(board.is_full());
    assert_eq!(board.status(), Status::Draw);
}

#[test]
fn test_malformed_encodings() {
    assert_eq!(
        "XO".parse::<Board>().unwrap_err(),
        GameError::MalformedEncoding(EncodingError::WrongLength(2))
    );
    assert_eq!(
        "XOXOXOXOXO".parse::<Board>().unwrap_err(),
        GameError::MalformedEncoding(EncodingError::WrongLength(10))
    );
    assert_eq!(
        "XOX_x____".parse::<Board>().unwrap_err(),
        GameError::MalformedEncoding(EncodingError::InvalidSymbol('x'))
    );
}

#[test]
fn test_occupied_cell_rejected() {
    let mut board = Board::new();
    board.apply_move(mv(2, 2)).unwrap();
    let before = board;
    assert_eq!(
        board.apply_move(mv(2, 2)).unwrap_err(),
        GameError::CellOccupied(mv(2, 2))
    );
    assert_eq!(board, before);
    assert!(!board.x_to_move());
}

#[test]
fn test_cell_lookup_and_turns() {
    let mut board = Board::new();
    board.apply_move(mv(3, 1)).unwrap();
    board.apply_move(mv(1, 3)).unwrap();
    assert_eq!(board.cell(mv(3, 1)), Some(Mark::X));
    assert_eq!(board.cell(mv(1, 3)), Some(Mark::O));
    assert_eq!(board.cell(mv(2, 2)), None);
    assert!(board.is_empty_cell(mv(2, 2)));
    assert_eq!(board.current_mark(), Mark::X);
    assert_eq!(board.encode(), "__X___O__");
}

#[test]
fn test_empty_cells_follow_bit_order() {
    let board: Board = "X___O____".parse().unwrap();
    let indices: Vec<usize> = board.empty_cells().map(|m| m.index()).collect();
    assert_eq!(indices, vec![1, 2, 3, 5, 6, 7, 8]);
}

#[test]
fn test_with_move_leaves_original() {
    let board = Board::new();
    let next = board.with_move(mv(1, 1)).unwrap();
    assert_eq!(board, Board::new());
    assert_eq!(next.cell(mv(1, 1)), Some(Mark::X));
    assert!(!next.x_to_move());
}

#[test]
fn test_render() {
    let board: Board = "XO______O".parse().unwrap();
    let expected = "---------\n| X O _ |\n| _ _ _ |\n| _ _ O |\n---------\n";
    assert_eq!(board.render(), expected);
    assert_eq!(board.to_string(), expected);
}
