//! Core domain types for Teeko.
//!
//! These mirror the symbols the game service puts on the wire. The client
//! never evaluates rules with them; they only carry the authoritative
//! snapshot from the service to the session and the view.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Side length of the Teeko board.
pub const BOARD_SIZE: usize = 5;

/// A piece colour, spelled the way the service spells it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Piece {
    /// Black piece (`b`). Black always moves first.
    #[serde(rename = "b")]
    #[display("b")]
    Black,
    /// Red piece (`r`).
    #[serde(rename = "r")]
    #[display("r")]
    Red,
}

impl Piece {
    /// Returns the other colour.
    pub fn other(self) -> Self {
        match self {
            Piece::Black => Piece::Red,
            Piece::Red => Piece::Black,
        }
    }
}

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Cell {
    /// No piece.
    #[default]
    Empty,
    /// Cell holds a piece.
    Occupied(Piece),
}

impl Cell {
    /// Wire symbol for this cell.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => " ",
            Cell::Occupied(Piece::Black) => "b",
            Cell::Occupied(Piece::Red) => "r",
        }
    }

    /// Returns true if any piece sits on this cell.
    pub fn is_occupied(self) -> bool {
        matches!(self, Cell::Occupied(_))
    }

    /// Returns true if this cell holds exactly `piece`.
    pub fn holds(self, piece: Piece) -> bool {
        self == Cell::Occupied(piece)
    }

    fn from_char(c: char) -> Option<Self> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'b' => Some(Cell::Occupied(Piece::Black)),
            'r' => Some(Cell::Occupied(Piece::Red)),
            _ => None,
        }
    }

    fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Piece::Black) => 'b',
            Cell::Occupied(Piece::Red) => 'r',
        }
    }
}

impl TryFrom<String> for Cell {
    type Error = BoardError;

    fn try_from(symbol: String) -> Result<Self, Self::Error> {
        match symbol.as_str() {
            "" | " " => Ok(Cell::Empty),
            "b" => Ok(Cell::Occupied(Piece::Black)),
            "r" => Ok(Cell::Occupied(Piece::Red)),
            _ => Err(BoardError::UnknownSymbol(symbol)),
        }
    }
}

impl From<Cell> for String {
    fn from(cell: Cell) -> Self {
        cell.symbol().to_string()
    }
}

/// Reasons a board snapshot could not be decoded.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardError {
    /// A cell carried a symbol other than empty, `b` or `r`.
    #[display("Unknown cell symbol {:?}", _0)]
    UnknownSymbol(String),
    /// The grid did not have five rows.
    #[display("Expected {} rows, got {}", BOARD_SIZE, _0)]
    RowCount(usize),
    /// A row did not have five cells.
    #[display("Row {} has {} cells, expected {}", row, len, BOARD_SIZE)]
    ColumnCount {
        /// Offending row index.
        row: usize,
        /// Number of cells found.
        len: usize,
    },
}

impl std::error::Error for BoardError {}

/// A coordinate on the 5x5 board, both components in `0..5`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "[u8; 2]", into = "[u8; 2]")]
#[display("({row}, {col})")]
pub struct Coord {
    row: u8,
    col: u8,
}

/// Coordinate outside the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("Coordinate ({row}, {col}) is off the board")]
pub struct CoordError {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
}

impl std::error::Error for CoordError {}

impl Coord {
    /// The centre cell.
    pub const CENTER: Coord = Coord { row: 2, col: 2 };

    /// Creates a checked coordinate.
    pub fn new(row: usize, col: usize) -> Result<Self, CoordError> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Ok(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(CoordError { row, col })
        }
    }

    /// Row index.
    pub fn row(self) -> usize {
        self.row as usize
    }

    /// Column index.
    pub fn col(self) -> usize {
        self.col as usize
    }

    /// All 25 coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..BOARD_SIZE).flat_map(|row| {
            (0..BOARD_SIZE).map(move |col| Coord {
                row: row as u8,
                col: col as u8,
            })
        })
    }
}

impl TryFrom<[u8; 2]> for Coord {
    type Error = CoordError;

    fn try_from([row, col]: [u8; 2]) -> Result<Self, Self::Error> {
        Coord::new(row as usize, col as usize)
    }
}

impl From<Coord> for [u8; 2] {
    fn from(coord: Coord) -> Self {
        [coord.row, coord.col]
    }
}

/// 5x5 Teeko board as reported by the service.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Cell>>", into = "Vec<Vec<Cell>>")]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at `coord`.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row()][coord.col()]
    }

    /// Rows in top-to-bottom order.
    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }

    /// Number of cells holding any piece.
    #[instrument(skip(self))]
    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.is_occupied())
            .count()
    }

    /// Number of cells holding `piece`.
    pub fn count(&self, piece: Piece) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| cell.holds(piece))
            .count()
    }
}

impl TryFrom<Vec<Vec<Cell>>> for Board {
    type Error = BoardError;

    fn try_from(rows: Vec<Vec<Cell>>) -> Result<Self, Self::Error> {
        if rows.len() != BOARD_SIZE {
            return Err(BoardError::RowCount(rows.len()));
        }
        let mut cells = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];
        for (row, values) in rows.into_iter().enumerate() {
            cells[row] = values
                .try_into()
                .map_err(|values: Vec<Cell>| BoardError::ColumnCount {
                    row,
                    len: values.len(),
                })?;
        }
        Ok(Self { cells })
    }
}

impl From<Board> for Vec<Vec<Cell>> {
    fn from(board: Board) -> Self {
        board.cells.iter().map(|row| row.to_vec()).collect()
    }
}

/// Parses the compact text form: five rows of `.`, `b` or `r`,
/// separated by `/` or newlines.
impl FromStr for Board {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows = s
            .split(['/', '\n'])
            .map(str::trim)
            .filter(|row| !row.is_empty())
            .map(|row| {
                row.chars()
                    .map(|c| {
                        Cell::from_char(c).ok_or_else(|| BoardError::UnknownSymbol(c.to_string()))
                    })
                    .collect::<Result<Vec<_>, _>>()
            })
            .collect::<Result<Vec<_>, _>>()?;
        Board::try_from(rows)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: String = row.iter().map(|cell| cell.to_char()).collect();
            write!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Whose move the service expects next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Turn {
    /// The human player.
    Opponent,
    /// The remote AI.
    #[serde(rename = "AI")]
    #[display("AI")]
    Ai,
    /// Nobody; the service reports this once the game is over.
    #[serde(rename = "None")]
    #[display("None")]
    Nobody,
}

/// Whether the game is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameStatus {
    /// Moves are still accepted.
    #[serde(rename = "ongoing")]
    #[display("ongoing")]
    InProgress,
    /// The game has ended.
    #[serde(rename = "over")]
    #[display("over")]
    Over,
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Winner {
    /// The human player won.
    Opponent,
    /// The AI won.
    #[serde(rename = "AI")]
    #[display("AI")]
    Ai,
    /// Move limit reached with no winner.
    Draw,
}

impl Winner {
    /// Banner shown once the game is over.
    pub fn banner(winner: Option<Winner>) -> &'static str {
        match winner {
            Some(Winner::Ai) => "AI Wins!",
            Some(Winner::Opponent) => "You Win!",
            Some(Winner::Draw) | None => "It's a Draw!",
        }
    }
}

/// AI strength offered on the entry screen.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Shallow search.
    Beginner,
    /// Medium search.
    Intermediate,
    /// Deepest search.
    Expert,
}

impl Difficulty {
    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Expert => "Expert",
        }
    }

    /// Search depth the service uses for this level.
    pub fn search_depth(self) -> u8 {
        match self {
            Difficulty::Beginner => 3,
            Difficulty::Intermediate => 4,
            Difficulty::Expert => 5,
        }
    }
}
