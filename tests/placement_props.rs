use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{generate_placement, Cell, Coordinate, FleetManifest, Grid, GRID_SIZE};

fn random_grid(seed: u64) -> Grid {
    let mut rng = SmallRng::seed_from_u64(seed);
    generate_placement(&FleetManifest::standard(), &mut rng).unwrap()
}

fn ship_cells(grid: &Grid) -> Vec<Vec<Coordinate>> {
    grid.ships().iter().map(|s| s.cells().collect()).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn ships_never_touch(seed in any::<u64>()) {
        let grid = random_grid(seed);
        let ships = ship_cells(&grid);
        for i in 0..ships.len() {
            for j in (i + 1)..ships.len() {
                for a in &ships[i] {
                    for b in &ships[j] {
                        prop_assert!(
                            a.chebyshev(*b) >= 2,
                            "ships {} and {} touch at {:?} / {:?}", i, j, a, b
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn fleet_is_conserved(seed in any::<u64>()) {
        let manifest = FleetManifest::standard();
        let grid = random_grid(seed);
        prop_assert_eq!(grid.ships().len(), manifest.len());
        prop_assert_eq!(grid.fleet_remaining(), manifest.len());

        let ship_parts = Grid::<GRID_SIZE>::coordinates()
            .filter(|&c| matches!(grid.cell(c), Ok(Cell::ShipPart { .. })))
            .count();
        prop_assert_eq!(ship_parts, manifest.total_cells());

        let mut sizes: Vec<usize> = grid.ships().iter().map(|s| s.size()).collect();
        sizes.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(sizes.as_slice(), manifest.sizes());
    }

    #[test]
    fn cells_point_back_at_their_deck(seed in any::<u64>()) {
        let grid = random_grid(seed);
        for (i, ship) in grid.ships().iter().enumerate() {
            prop_assert!(ship.fits(GRID_SIZE));
            for (k, coord) in ship.cells().enumerate() {
                match grid.cell(coord).unwrap() {
                    Cell::ShipPart { ship, deck } => {
                        prop_assert_eq!(ship.index(), i);
                        prop_assert_eq!(deck, k);
                    }
                    other => prop_assert!(false, "expected ship part at {:?}, got {:?}", coord, other),
                }
            }
        }
    }

    #[test]
    fn everything_else_is_open_water(seed in any::<u64>()) {
        let grid = random_grid(seed);
        for coord in Grid::<GRID_SIZE>::coordinates() {
            let cell = grid.cell(coord).unwrap();
            let is_open_or_ship = matches!(cell, Cell::Empty | Cell::ShipPart { .. });
            prop_assert!(is_open_or_ship);
        }
    }
}

#[test]
fn standard_fleet_always_fits() {
    let manifest = FleetManifest::standard();
    for seed in 0..2_000u64 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let grid: Result<Grid, _> = generate_placement(&manifest, &mut rng);
        assert!(grid.is_ok(), "seed {} failed: {:?}", seed, grid.err());
    }
}

#[test]
fn layouts_vary_between_seeds() {
    let first = random_grid(1);
    let differs = (2..20).any(|seed| random_grid(seed).ships() != first.ships());
    assert!(differs, "placement ignored the rng");
}

#[test]
fn same_seed_same_layout() {
    assert_eq!(random_grid(42), random_grid(42));
}
