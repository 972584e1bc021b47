pub const BOARD_SIZE: u8 = 3;
pub const CELL_COUNT: usize = (BOARD_SIZE as usize) * (BOARD_SIZE as usize);

/// Rank of a position X has won; O wins rank the negation.
pub const WIN_RANK: i32 = 1000;

/// Ply limit for the full search. A game never lasts longer.
pub const SEARCH_DEPTH: u32 = CELL_COUNT as u32;

/// Exclusive upper bound of the random rank substituted for undecided
/// positions by the medium strategy.
pub const TIEBREAK_SPAN: i32 = 10;

/// The eight winning lines as raw bit masks (three of each orientation plus
/// both diagonals).
pub const WIN_LINES: [u16; 8] = [
    0b111_000_000,
    0b000_111_000,
    0b000_000_111,
    0b100_100_100,
    0b010_010_010,
    0b001_001_001,
    0b100_010_001,
    0b001_010_100,
];
