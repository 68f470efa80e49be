//! Ships, their decks and the geometry of a placed ship.

use alloc::vec::Vec;

use crate::grid::Coordinate;

/// Orientation of a ship on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// Coordinate `offset` cells from `origin` along this axis. Saturates at
    /// `usize::MAX`; such a coordinate is outside any grid.
    pub fn step(self, origin: Coordinate, offset: usize) -> Coordinate {
        match self {
            Orientation::Horizontal => Coordinate::new(origin.row, origin.col.saturating_add(offset)),
            Orientation::Vertical => Coordinate::new(origin.row.saturating_add(offset), origin.col),
        }
    }
}

/// Index of a ship in its grid's ship table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ShipId(pub(crate) usize);

impl ShipId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Status of a single deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckStatus {
    Intact,
    Broken,
}

/// One unit-cell segment of a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deck {
    coord: Coordinate,
    status: DeckStatus,
}

impl Deck {
    pub fn coord(&self) -> Coordinate {
        self.coord
    }

    pub fn status(&self) -> DeckStatus {
        self.status
    }

    pub fn is_broken(&self) -> bool {
        self.status == DeckStatus::Broken
    }
}

/// A ship placed at `origin`, extending `size` cells along `orientation`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ship {
    origin: Coordinate,
    size: usize,
    orientation: Orientation,
    decks: Vec<Deck>,
}

impl Ship {
    /// Build a ship with all decks intact, ordered from the origin outwards.
    /// Bounds are checked by the grid when the ship is committed.
    pub fn new(origin: Coordinate, size: usize, orientation: Orientation) -> Self {
        let decks = (0..size)
            .map(|i| Deck {
                coord: orientation.step(origin, i),
                status: DeckStatus::Intact,
            })
            .collect();
        Ship {
            origin,
            size,
            orientation,
            decks,
        }
    }

    pub fn origin(&self) -> Coordinate {
        self.origin
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn decks(&self) -> &[Deck] {
        &self.decks
    }

    /// Width of the ship's footprint in columns.
    pub fn width(&self) -> usize {
        match self.orientation {
            Orientation::Horizontal => self.size,
            Orientation::Vertical => 1,
        }
    }

    /// Height of the ship's footprint in rows.
    pub fn height(&self) -> usize {
        match self.orientation {
            Orientation::Horizontal => 1,
            Orientation::Vertical => self.size,
        }
    }

    /// Occupied coordinates in deck order.
    pub fn cells(&self) -> impl Iterator<Item = Coordinate> + '_ {
        self.decks.iter().map(|d| d.coord)
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row >= self.origin.row
            && coord.row < self.origin.row.saturating_add(self.height())
            && coord.col >= self.origin.col
            && coord.col < self.origin.col.saturating_add(self.width())
    }

    /// Whether the ship's footprint stays inside an `n`×`n` grid.
    pub fn fits(&self, n: usize) -> bool {
        let bottom = self.origin.row.checked_add(self.height());
        let right = self.origin.col.checked_add(self.width());
        matches!((bottom, right), (Some(b), Some(r)) if b <= n && r <= n)
    }

    /// The one-cell ring around the ship, clipped to an `n`×`n` grid.
    pub fn margin(&self, n: usize) -> impl Iterator<Item = Coordinate> + '_ {
        let rows = self.origin.row.saturating_sub(1)
            ..self.origin.row.saturating_add(self.height() + 1).min(n);
        let cols = self.origin.col.saturating_sub(1)
            ..self.origin.col.saturating_add(self.width() + 1).min(n);
        rows.flat_map(move |r| cols.clone().map(move |c| Coordinate::new(r, c)))
            .filter(move |&coord| !self.contains(coord))
    }

    /// Break the deck at `index`. Returns `false` if it was already broken.
    pub(crate) fn break_deck(&mut self, index: usize) -> bool {
        match self.decks.get_mut(index) {
            Some(deck) if deck.status == DeckStatus::Intact => {
                deck.status = DeckStatus::Broken;
                true
            }
            _ => false,
        }
    }

    pub fn intact_decks(&self) -> usize {
        self.decks.iter().filter(|d| !d.is_broken()).count()
    }

    /// A ship is destroyed once every deck is broken.
    pub fn is_destroyed(&self) -> bool {
        self.decks.iter().all(Deck::is_broken)
    }
}
