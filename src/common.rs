//! Common types for the game: shot outcomes and the error enums shared by
//! placement, resolution and the match state machine.

use alloc::string::String;
use thiserror::Error;

use crate::bitboard::BitBoardError;
use crate::ship::{Orientation, ShipId};

/// Result of resolving one shot against a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotResult {
    /// Shot landed on open water, which is now a crater.
    Miss,
    /// Nothing new to learn there; the shooter must pick again.
    Retry,
    /// Shot broke a deck of a ship that is still afloat.
    Hit,
    /// Shot broke the last intact deck, carrying the ship's size.
    Sunk { size: usize },
}

impl ShotResult {
    /// Whether the result scores a point for the shooter.
    pub fn is_hit(self) -> bool {
        matches!(self, ShotResult::Hit | ShotResult::Sunk { .. })
    }
}

/// Errors raised while building a fleet layout. All of them mean the
/// requested configuration cannot be played and are never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error("fleet manifest is empty")]
    EmptyFleet,
    #[error("fleet manifest contains a zero-sized ship")]
    ZeroSizedShip,
    /// No window of free cells fits the ship in the chosen orientation.
    #[error("no room left for a {orientation:?} ship of size {size}")]
    NoRoom {
        size: usize,
        orientation: Orientation,
    },
    #[error("ship of size {size} at ({row}, {col}) does not fit on the grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
    /// Ship would share or touch a cell of an existing ship.
    #[error("ship at ({row}, {col}) touches another ship")]
    Touches { row: usize, col: usize },
    #[error("reservation mask: {0}")]
    Mask(#[from] BitBoardError),
}

/// Contract violations when addressing a grid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("coordinate ({row}, {col}) is outside the {size}x{size} grid")]
    OutOfBounds { row: usize, col: usize, size: usize },
    /// A cell refers to a ship missing from the grid's ship table.
    #[error("cell refers to unknown ship {0:?}")]
    UnknownShip(ShipId),
}

/// Errors returned by the match state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatchError {
    #[error("match has not started")]
    NotStarted,
    #[error("match has already started")]
    AlreadyStarted,
    #[error("match is over")]
    Finished,
    /// A strategy gave up instead of choosing a target.
    #[error("{player} abandoned the match")]
    Abandoned { player: String },
    #[error(transparent)]
    Placement(#[from] PlacementError),
    #[error(transparent)]
    Grid(#[from] GridError),
}
