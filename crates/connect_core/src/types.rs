#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}
impl Side {
    pub fn other(self) -> Side {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
    pub fn idx(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }
    pub fn glyph(self) -> char {
        match self {
            Side::First => 'x',
            Side::Second => 'o',
        }
    }
}

/// Board coordinate, 1-based. Row 1 is the top row, so a piece dropped into
/// an empty column lands on the highest row index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Result carried by a state, as produced by the move that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    FirstWins,
    SecondWins,
    Undecided,
}

impl Outcome {
    pub fn win_for(side: Side) -> Outcome {
        match side {
            Side::First => Outcome::FirstWins,
            Side::Second => Outcome::SecondWins,
        }
    }

    pub fn winner(self) -> Option<Side> {
        match self {
            Outcome::FirstWins => Some(Side::First),
            Outcome::SecondWins => Some(Side::Second),
            Outcome::Undecided => None,
        }
    }

    pub fn is_decided(self) -> bool {
        self != Outcome::Undecided
    }
}
