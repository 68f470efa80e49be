use alloc::string::String;
use rand::rngs::SmallRng;

use crate::{
    common::ShotResult,
    config::GRID_SIZE,
    grid::{Coordinate, Grid, Sighting},
};

/// One of the two positions in a match. `First` moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }
}

/// A participant: name, owned grid (with its fleet) and score.
#[derive(Debug, Clone)]
pub struct Player<const N: usize = GRID_SIZE> {
    name: String,
    grid: Grid<N>,
    score: u32,
}

impl<const N: usize> Player<N> {
    /// A player with an empty grid; the fleet is placed when the match starts.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Player {
            name: name.into(),
            grid: Grid::new(),
            score: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn grid(&self) -> &Grid<N> {
        &self.grid
    }

    pub(crate) fn grid_mut(&mut self) -> &mut Grid<N> {
        &mut self.grid
    }

    pub(crate) fn set_grid(&mut self, grid: Grid<N>) {
        self.grid = grid;
    }

    /// Hits and kills scored so far.
    pub fn score(&self) -> u32 {
        self.score
    }

    pub(crate) fn inc_score(&mut self) {
        self.score += 1;
    }

    /// Ships still afloat.
    pub fn fleet_remaining(&self) -> usize {
        self.grid.fleet_remaining()
    }

    pub fn is_defeated(&self) -> bool {
        self.grid.all_sunk()
    }
}

/// Read-only view of the opponent's grid, limited to what the shooter has
/// already learnt.
#[derive(Clone, Copy)]
pub struct TargetView<'a, const N: usize = GRID_SIZE> {
    grid: &'a Grid<N>,
}

impl<'a, const N: usize> TargetView<'a, N> {
    pub fn new(grid: &'a Grid<N>) -> Self {
        TargetView { grid }
    }

    /// What is known about `coord`; out-of-bounds cells read as unknown.
    pub fn sighting(&self, coord: Coordinate) -> Sighting {
        self.grid.sighting(coord).unwrap_or(Sighting::Unknown)
    }

    /// Cells that have not been resolved by any shot.
    pub fn unknown_cells(&self) -> impl Iterator<Item = Coordinate> + 'a {
        let grid = self.grid;
        Grid::<N>::coordinates()
            .filter(move |&c| matches!(grid.sighting(c), Ok(Sighting::Unknown)))
    }

    /// Opponent ships still afloat.
    pub fn fleet_remaining(&self) -> usize {
        self.grid.fleet_remaining()
    }
}

/// Source of target coordinates for one side of a match.
///
/// Returning `None` abandons the match.
pub trait Strategy<const N: usize = GRID_SIZE> {
    /// Choose the next coordinate to fire at.
    fn select_target(&mut self, view: TargetView<'_, N>, rng: &mut SmallRng) -> Option<Coordinate>;

    /// Inform the strategy of the result of its last shot.
    fn handle_shot_result(&mut self, _target: Coordinate, _result: ShotResult) {}
}
