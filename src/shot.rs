//! Shot resolution against a single grid.

use crate::common::{GridError, ShotResult};
use crate::grid::{Cell, Coordinate, Grid};
use crate::ship::ShipId;

/// Resolve a shot at `coord`, mutating `grid` and the ship it hits.
///
/// A shot that sinks a ship also removes it from the live fleet and turns
/// the empty cells of its margin into dead zones. Out-of-bounds coordinates
/// are rejected without touching the grid.
pub fn resolve_shot<const N: usize>(
    coord: Coordinate,
    grid: &mut Grid<N>,
) -> Result<ShotResult, GridError> {
    let result = match grid.cell(coord)? {
        Cell::Empty => {
            grid.set_cell(coord, Cell::Crater)?;
            ShotResult::Miss
        }
        Cell::Crater | Cell::DeadZone => ShotResult::Retry,
        Cell::ShipPart { ship: id, deck } => {
            let ship = grid.ship_mut(id).ok_or(GridError::UnknownShip(id))?;
            if !ship.break_deck(deck) {
                ShotResult::Retry
            } else if ship.is_destroyed() {
                let size = ship.size();
                grid.retire(id);
                mark_dead_zone(grid, id)?;
                ShotResult::Sunk { size }
            } else {
                ShotResult::Hit
            }
        }
    };
    log::trace!("shot at ({}, {}): {:?}", coord.row, coord.col, result);
    Ok(result)
}

/// Turn every empty cell around ship `id` into a dead zone. Craters and
/// other ships' cells are left alone.
fn mark_dead_zone<const N: usize>(grid: &mut Grid<N>, id: ShipId) -> Result<(), GridError> {
    let ship = grid.ship(id).ok_or(GridError::UnknownShip(id))?;
    let ring: alloc::vec::Vec<Coordinate> = ship.margin(N).collect();
    for coord in ring {
        if grid.cell(coord)? == Cell::Empty {
            grid.set_cell(coord, Cell::DeadZone)?;
        }
    }
    Ok(())
}

impl<const N: usize> Grid<N> {
    /// Method form of [`resolve_shot`].
    pub fn receive_shot(&mut self, coord: Coordinate) -> Result<ShotResult, GridError> {
        resolve_shot(coord, self)
    }
}
