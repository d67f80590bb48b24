//! Drop/slide phase derivation.
//!
//! The phase is never stored. It is recomputed from board occupancy every
//! time it is needed, so it cannot disagree with the board the service sent.

use super::types::Board;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Total pieces on the board once both sides have placed all four.
pub const PLACEMENT_QUOTA: usize = 8;

/// Which kind of move the current player makes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Phase {
    /// Pieces are dropped onto empty cells; one click is a full move.
    #[display("drop")]
    Drop,
    /// Placed pieces slide to a neighbouring cell; source then destination.
    #[display("slide")]
    Slide,
}

impl Phase {
    /// Derives the phase from how many cells are occupied.
    #[instrument(skip(board))]
    pub fn of(board: &Board) -> Self {
        if board.occupied_count() < PLACEMENT_QUOTA {
            Phase::Drop
        } else {
            Phase::Slide
        }
    }
}
