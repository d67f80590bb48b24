//! Move descriptors as sent to the game service.

use super::types::Coord;
use derive_more::Display;
use serde::{Deserialize, Serialize};

/// One turn's action.
///
/// On the wire this is a list of `[row, col]` pairs: one pair for a drop,
/// two pairs for a slide with the destination first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(try_from = "Vec<Coord>", into = "Vec<Coord>")]
pub enum MoveDescriptor {
    /// Place a new piece.
    #[display("drop at {_0}")]
    Drop(Coord),
    /// Move an already placed piece.
    #[display("slide {source} -> {destination}")]
    Slide {
        /// Cell the piece moves to.
        destination: Coord,
        /// Cell the piece currently occupies.
        source: Coord,
    },
}

impl MoveDescriptor {
    /// Builds a slide from the order the user clicks in: source, then destination.
    pub fn slide(source: Coord, destination: Coord) -> Self {
        MoveDescriptor::Slide {
            destination,
            source,
        }
    }

    /// Coordinates in wire order.
    pub fn coords(&self) -> Vec<Coord> {
        match *self {
            MoveDescriptor::Drop(cell) => vec![cell],
            MoveDescriptor::Slide {
                destination,
                source,
            } => vec![destination, source],
        }
    }
}

/// A coordinate list that is not a valid move descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display("Move descriptor must hold one or two coordinates, got {_0}")]
pub struct DescriptorLengthError(pub usize);

impl std::error::Error for DescriptorLengthError {}

impl TryFrom<Vec<Coord>> for MoveDescriptor {
    type Error = DescriptorLengthError;

    fn try_from(coords: Vec<Coord>) -> Result<Self, Self::Error> {
        match coords.as_slice() {
            [cell] => Ok(MoveDescriptor::Drop(*cell)),
            [destination, source] => Ok(MoveDescriptor::Slide {
                destination: *destination,
                source: *source,
            }),
            _ => Err(DescriptorLengthError(coords.len())),
        }
    }
}

impl From<MoveDescriptor> for Vec<Coord> {
    fn from(descriptor: MoveDescriptor) -> Self {
        descriptor.coords()
    }
}
