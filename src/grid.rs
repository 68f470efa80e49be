//! Grid model: coordinates, cell contents and the per-player ship table.

use alloc::vec::Vec;

use crate::common::{GridError, PlacementError};
use crate::config::GRID_SIZE;
use crate::ship::{DeckStatus, Orientation, Ship, ShipId};

/// A `(row, col)` position. Bounds are relative to the grid it addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Coordinate { row, col }
    }

    /// Chebyshev distance; two ships touch when any pair of their cells is
    /// closer than 2.
    pub fn chebyshev(self, other: Coordinate) -> usize {
        self.row.abs_diff(other.row).max(self.col.abs_diff(other.col))
    }
}

impl From<(usize, usize)> for Coordinate {
    fn from((row, col): (usize, usize)) -> Self {
        Coordinate::new(row, col)
    }
}

/// Content of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Open water, including the untouched margin around live ships.
    Empty,
    /// A missed shot.
    Crater,
    /// One deck of a ship in the grid's ship table.
    ShipPart { ship: ShipId, deck: usize },
    /// Next to a destroyed ship; nothing can be there.
    DeadZone,
}

/// What a shooter knows about a cell of the opponent's grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sighting {
    /// Not resolved yet: water or an intact deck.
    Unknown,
    Miss,
    Hit,
    DeadZone,
}

/// An `N`×`N` grid owned by one player, together with its ships.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid<const N: usize = GRID_SIZE> {
    cells: [[Cell; N]; N],
    ships: Vec<Ship>,
    afloat: Vec<ShipId>,
}

impl<const N: usize> Grid<N> {
    /// Side length of the grid.
    pub const SIZE: usize = N;

    /// An empty grid with no ships.
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::Empty; N]; N],
            ships: Vec::new(),
            afloat: Vec::new(),
        }
    }

    pub fn size(&self) -> usize {
        N
    }

    /// Content of the cell at `coord`.
    pub fn cell(&self, coord: Coordinate) -> Result<Cell, GridError> {
        self.check_bounds(coord)?;
        Ok(self.cells[coord.row][coord.col])
    }

    pub(crate) fn set_cell(&mut self, coord: Coordinate, cell: Cell) -> Result<(), GridError> {
        self.check_bounds(coord)?;
        self.cells[coord.row][coord.col] = cell;
        Ok(())
    }

    /// Status of the deck at `coord`, or `None` if no ship is there.
    pub fn deck_status(&self, coord: Coordinate) -> Result<Option<DeckStatus>, GridError> {
        match self.cell(coord)? {
            Cell::ShipPart { ship, deck } => {
                let ship = self.ship(ship).ok_or(GridError::UnknownShip(ship))?;
                Ok(ship.decks().get(deck).map(|d| d.status()))
            }
            _ => Ok(None),
        }
    }

    /// The cell as the opponent sees it: intact decks stay unknown.
    pub fn sighting(&self, coord: Coordinate) -> Result<Sighting, GridError> {
        Ok(match self.cell(coord)? {
            Cell::Empty => Sighting::Unknown,
            Cell::Crater => Sighting::Miss,
            Cell::DeadZone => Sighting::DeadZone,
            Cell::ShipPart { .. } => match self.deck_status(coord)? {
                Some(DeckStatus::Broken) => Sighting::Hit,
                _ => Sighting::Unknown,
            },
        })
    }

    /// Iterator over every coordinate in row-major order.
    pub fn coordinates() -> impl Iterator<Item = Coordinate> {
        (0..N).flat_map(|r| (0..N).map(move |c| Coordinate::new(r, c)))
    }

    pub fn ship(&self, id: ShipId) -> Option<&Ship> {
        self.ships.get(id.0)
    }

    pub(crate) fn ship_mut(&mut self, id: ShipId) -> Option<&mut Ship> {
        self.ships.get_mut(id.0)
    }

    /// Every ship ever placed on this grid, sunk or not.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Ids of the ships still afloat.
    pub fn afloat(&self) -> &[ShipId] {
        &self.afloat
    }

    pub fn fleet_remaining(&self) -> usize {
        self.afloat.len()
    }

    /// True once every ship has been sunk. An empty grid counts as sunk.
    pub fn all_sunk(&self) -> bool {
        self.afloat.is_empty()
    }

    /// Place a ship after checking bounds and that it neither overlaps nor
    /// touches any ship already on the grid.
    pub fn place(
        &mut self,
        origin: Coordinate,
        size: usize,
        orientation: Orientation,
    ) -> Result<ShipId, PlacementError> {
        if size == 0 {
            return Err(PlacementError::ZeroSizedShip);
        }
        let (along, across) = match orientation {
            Orientation::Horizontal => (origin.col, origin.row),
            Orientation::Vertical => (origin.row, origin.col),
        };
        if across >= N || along.checked_add(size).map_or(true, |end| end > N) {
            return Err(PlacementError::OutOfBounds {
                row: origin.row,
                col: origin.col,
                size,
            });
        }
        let ship = Ship::new(origin, size, orientation);
        let crowded = ship
            .cells()
            .chain(ship.margin(N))
            .any(|c| matches!(self.cells[c.row][c.col], Cell::ShipPart { .. }));
        if crowded {
            return Err(PlacementError::Touches {
                row: origin.row,
                col: origin.col,
            });
        }
        Ok(self.commit(ship))
    }

    /// Write a ship whose legality the caller has already established.
    pub(crate) fn commit(&mut self, ship: Ship) -> ShipId {
        let id = ShipId(self.ships.len());
        for (deck, coord) in ship.cells().enumerate() {
            self.cells[coord.row][coord.col] = Cell::ShipPart { ship: id, deck };
        }
        self.ships.push(ship);
        self.afloat.push(id);
        id
    }

    /// Drop a ship from the live fleet. Returns `false` if it was not afloat.
    pub(crate) fn retire(&mut self, id: ShipId) -> bool {
        match self.afloat.iter().position(|&s| s == id) {
            Some(pos) => {
                self.afloat.remove(pos);
                true
            }
            None => false,
        }
    }

    fn check_bounds(&self, coord: Coordinate) -> Result<(), GridError> {
        if coord.row >= N || coord.col >= N {
            Err(GridError::OutOfBounds {
                row: coord.row,
                col: coord.col,
                size: N,
            })
        } else {
            Ok(())
        }
    }
}

impl<const N: usize> Default for Grid<N> {
    fn default() -> Self {
        Self::new()
    }
}
