//! Random fleet placement.
//!
//! Ships are placed one at a time in manifest order. After each commit the
//! ship's cells and its one-cell margin are written into a reservation mask,
//! so the next scan already treats the margin as taken and no separate
//! adjacency check is needed.

use alloc::vec::Vec;
use rand::Rng;

use crate::bitboard::BitBoard;
use crate::common::PlacementError;
use crate::config::FleetManifest;
use crate::grid::{Coordinate, Grid};
use crate::ship::{Orientation, Ship};

/// Cells taken by a ship or a ship's margin.
pub type Reservations<const N: usize> = BitBoard<u128, N>;

/// Generate a random legal layout of `manifest` on an empty `N`×`N` grid.
///
/// Fails with [`PlacementError::NoRoom`] as soon as one ship has no candidate
/// in the orientation drawn for it; the layout is not retried.
pub fn generate_placement<const N: usize, R: Rng + ?Sized>(
    manifest: &FleetManifest,
    rng: &mut R,
) -> Result<Grid<N>, PlacementError> {
    let mut reserved = Reservations::<N>::try_new()?;
    let mut grid = Grid::<N>::new();

    for &size in manifest.sizes() {
        let orientation = if rng.random() {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        };
        let candidates = candidate_origins(&reserved, size, orientation);
        if candidates.is_empty() {
            log::debug!(
                "no room for {:?} ship of size {} on {}x{} grid",
                orientation,
                size,
                N,
                N
            );
            return Err(PlacementError::NoRoom { size, orientation });
        }
        let origin = candidates[rng.random_range(0..candidates.len())];
        let ship = Ship::new(origin, size, orientation);
        reserved.extend(ship.cells())?;
        reserved.extend(ship.margin(N))?;
        grid.commit(ship);
    }

    log::debug!(
        "placed {} ships, {} of {} cells reserved",
        manifest.len(),
        reserved.count_ones(),
        N * N
    );
    Ok(grid)
}

/// Every origin from which a ship of `size` fits along `orientation` without
/// crossing a reserved cell. Rows are scanned for horizontal ships, columns
/// for vertical ones; each window inside a free run is one candidate.
pub fn candidate_origins<const N: usize>(
    reserved: &Reservations<N>,
    size: usize,
    orientation: Orientation,
) -> Vec<Coordinate> {
    let mut result = Vec::new();
    if size == 0 || size > N {
        return result;
    }
    for line in 0..N {
        let mut run = 0;
        for k in 0..N {
            let coord = match orientation {
                Orientation::Horizontal => Coordinate::new(line, k),
                Orientation::Vertical => Coordinate::new(k, line),
            };
            if reserved.get(coord).unwrap_or(true) {
                run = 0;
            } else {
                run += 1;
            }
            if run >= size {
                let start = k + 1 - size;
                result.push(match orientation {
                    Orientation::Horizontal => Coordinate::new(line, start),
                    Orientation::Vertical => Coordinate::new(start, line),
                });
            }
        }
    }
    result
}

impl<const N: usize> Grid<N> {
    /// Convenience wrapper around [`generate_placement`].
    pub fn generate<R: Rng + ?Sized>(
        manifest: &FleetManifest,
        rng: &mut R,
    ) -> Result<Self, PlacementError> {
        generate_placement(manifest, rng)
    }
}
