use alloc::vec::Vec;

use crate::common::PlacementError;

/// Side length of the standard grid.
pub const GRID_SIZE: usize = 10;

/// Standard fleet: one four-decker, two three-deckers, three two-deckers and
/// four single-deckers, largest first.
pub const DEFAULT_FLEET: [usize; 10] = [4, 3, 3, 2, 2, 2, 1, 1, 1, 1];

/// Environment variable consulted by [`crate::init_logging`].
pub const LOG_ENV: &str = "SEABATTLE_LOG";

/// The ship sizes each player must place, in placement order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FleetManifest {
    sizes: Vec<usize>,
}

impl FleetManifest {
    /// Build a manifest from a list of ship sizes.
    ///
    /// Rejects an empty fleet and zero-sized ships. Whether the fleet fits a
    /// given grid is only known once placement runs.
    pub fn new<S: Into<Vec<usize>>>(sizes: S) -> Result<Self, PlacementError> {
        let sizes = sizes.into();
        if sizes.is_empty() {
            return Err(PlacementError::EmptyFleet);
        }
        if sizes.contains(&0) {
            return Err(PlacementError::ZeroSizedShip);
        }
        Ok(Self { sizes })
    }

    /// The standard ten-ship fleet.
    pub fn standard() -> Self {
        Self {
            sizes: DEFAULT_FLEET.to_vec(),
        }
    }

    pub fn sizes(&self) -> &[usize] {
        &self.sizes
    }

    /// Number of ships in the fleet.
    pub fn len(&self) -> usize {
        self.sizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sizes.is_empty()
    }

    /// Total number of decks across the fleet.
    pub fn total_cells(&self) -> usize {
        self.sizes.iter().sum()
    }
}

impl Default for FleetManifest {
    fn default() -> Self {
        Self::standard()
    }
}

/// How much of the opponent's grid the renderer reveals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum))]
pub enum GameMode {
    /// Opponent's ships are drawn, along with every shot.
    Easy,
    /// Only shots and their results are drawn.
    #[default]
    Normal,
}

impl GameMode {
    pub fn reveals_opponent(self) -> bool {
        matches!(self, GameMode::Easy)
    }
}
