use rand::rngs::SmallRng;
use rand::Rng;

use crate::grid::Coordinate;
use crate::player::{Strategy, TargetView};

/// Computer opponent that fires uniformly at random.
///
/// Picks among cells it has not resolved yet, so it never wastes a turn on a
/// crater or dead zone. Falls back to the whole grid when nothing is left.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomStrategy;

impl RandomStrategy {
    pub fn new() -> Self {
        Self
    }
}

impl<const N: usize> Strategy<N> for RandomStrategy {
    fn select_target(&mut self, view: TargetView<'_, N>, rng: &mut SmallRng) -> Option<Coordinate> {
        if N == 0 {
            return None;
        }
        let unknown: alloc::vec::Vec<Coordinate> = view.unknown_cells().collect();
        if unknown.is_empty() {
            return Some(Coordinate::new(rng.random_range(0..N), rng.random_range(0..N)));
        }
        Some(unknown[rng.random_range(0..unknown.len())])
    }
}
