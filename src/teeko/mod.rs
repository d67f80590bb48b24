//! Teeko board model as seen by the client.

mod descriptor;
mod phase;
mod types;

pub use descriptor::{DescriptorLengthError, MoveDescriptor};
pub use phase::{PLACEMENT_QUOTA, Phase};
pub use types::{
    BOARD_SIZE, Board, BoardError, Cell, Coord, CoordError, Difficulty, GameStatus, Piece, Turn,
    Winner,
};
