use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{
    candidate_origins, generate_placement, BitBoardError, Cell, Coordinate, FleetManifest, Grid,
    Orientation, PlacementError, Reservations,
};

#[test]
fn one_by_one_grid_cannot_hold_the_standard_fleet() {
    let mut rng = SmallRng::seed_from_u64(7);
    let err = generate_placement::<1, _>(&FleetManifest::standard(), &mut rng).unwrap_err();
    assert!(matches!(err, PlacementError::NoRoom { size: 4, .. }));
}

#[test]
fn overcrowded_manifest_fails_instead_of_retrying() {
    // nine four-deckers cannot fit a 5x5 grid whatever the orientation
    let manifest = FleetManifest::new(vec![4; 9]).unwrap();
    for seed in 0..50 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let err = generate_placement::<5, _>(&manifest, &mut rng).unwrap_err();
        assert!(matches!(err, PlacementError::NoRoom { size: 4, .. }));
    }
}

#[test]
fn grid_too_large_for_mask() {
    let mut rng = SmallRng::seed_from_u64(1);
    let err = generate_placement::<12, _>(&FleetManifest::standard(), &mut rng).unwrap_err();
    assert!(matches!(
        err,
        PlacementError::Mask(BitBoardError::SizeTooLarge { n: 12, capacity: 128 })
    ));
}

#[test]
fn eleven_by_eleven_is_supported() {
    let mut rng = SmallRng::seed_from_u64(3);
    let grid = generate_placement::<11, _>(&FleetManifest::standard(), &mut rng).unwrap();
    assert_eq!(grid.ships().len(), 10);
}

#[test]
fn manifest_validation() {
    assert_eq!(FleetManifest::new(Vec::<usize>::new()), Err(PlacementError::EmptyFleet));
    assert_eq!(FleetManifest::new(vec![3, 0, 1]), Err(PlacementError::ZeroSizedShip));
    let manifest = FleetManifest::standard();
    assert_eq!(manifest.len(), 10);
    assert_eq!(manifest.total_cells(), 20);
    assert_eq!(manifest, FleetManifest::default());
}

#[test]
fn empty_grid_candidates() {
    let reserved = Reservations::<10>::try_new().unwrap();
    let horizontal = candidate_origins(&reserved, 4, Orientation::Horizontal);
    assert_eq!(horizontal.len(), 10 * 7);
    assert!(horizontal.iter().all(|c| c.col + 4 <= 10));

    let vertical = candidate_origins(&reserved, 4, Orientation::Vertical);
    assert_eq!(vertical.len(), 10 * 7);
    assert!(vertical.iter().all(|c| c.row + 4 <= 10));

    assert!(candidate_origins(&reserved, 11, Orientation::Horizontal).is_empty());
}

#[test]
fn reserved_cells_split_runs() {
    let mut reserved = Reservations::<5>::try_new().unwrap();
    // row 0: . . X . .   -> no window of 3
    reserved.set(Coordinate::new(0, 2)).unwrap();
    let in_row_zero: Vec<_> = candidate_origins(&reserved, 3, Orientation::Horizontal)
        .into_iter()
        .filter(|c| c.row == 0)
        .collect();
    assert!(in_row_zero.is_empty());

    // row 0 still offers two-deckers on each side of the block
    let pairs: Vec<_> = candidate_origins(&reserved, 2, Orientation::Horizontal)
        .into_iter()
        .filter(|c| c.row == 0)
        .collect();
    assert_eq!(pairs, vec![Coordinate::new(0, 0), Coordinate::new(0, 3)]);
}

#[test]
fn manual_place_checks_bounds_and_buffer() {
    let mut grid = Grid::<10>::new();
    let id = grid.place(Coordinate::new(3, 3), 2, Orientation::Horizontal).unwrap();
    assert_eq!(
        grid.cell(Coordinate::new(3, 4)).unwrap(),
        Cell::ShipPart { ship: id, deck: 1 }
    );

    assert_eq!(
        grid.place(Coordinate::new(0, 8), 3, Orientation::Horizontal),
        Err(PlacementError::OutOfBounds { row: 0, col: 8, size: 3 })
    );
    // diagonal neighbour of (3,4)
    assert_eq!(
        grid.place(Coordinate::new(4, 5), 1, Orientation::Vertical),
        Err(PlacementError::Touches { row: 4, col: 5 })
    );
    // overlap
    assert_eq!(
        grid.place(Coordinate::new(2, 3), 3, Orientation::Vertical),
        Err(PlacementError::Touches { row: 2, col: 3 })
    );
    // one clear cell away is fine
    assert!(grid.place(Coordinate::new(5, 3), 3, Orientation::Horizontal).is_ok());
    assert_eq!(grid.fleet_remaining(), 2);
}

#[test]
fn far_out_of_bounds_origin_is_an_error() {
    let mut grid = Grid::<10>::new();
    assert_eq!(
        grid.place(Coordinate::new(usize::MAX, 0), 2, Orientation::Vertical),
        Err(PlacementError::OutOfBounds { row: usize::MAX, col: 0, size: 2 })
    );
    assert_eq!(
        grid.place(Coordinate::new(0, usize::MAX - 1), 3, Orientation::Horizontal),
        Err(PlacementError::OutOfBounds { row: 0, col: usize::MAX - 1, size: 3 })
    );
    // off-axis overflow: the row is out of range for a horizontal ship
    assert_eq!(
        grid.place(Coordinate::new(10, 0), 1, Orientation::Horizontal),
        Err(PlacementError::OutOfBounds { row: 10, col: 0, size: 1 })
    );
    assert!(grid.ships().is_empty());
    assert!(Grid::<10>::coordinates().all(|c| grid.cell(c).unwrap() == Cell::Empty));
}

#[test]
fn ship_margin_is_clipped_to_grid() {
    let mut grid = Grid::<10>::new();
    let id = grid.place(Coordinate::new(0, 0), 3, Orientation::Vertical).unwrap();
    let ship = grid.ship(id).unwrap();
    let margin: Vec<_> = ship.margin(10).collect();
    // column 1 rows 0..=3, plus (3,0)
    assert_eq!(margin.len(), 5);
    assert!(margin.contains(&Coordinate::new(3, 0)));
    assert!(margin.contains(&Coordinate::new(3, 1)));
    assert!(!margin.iter().any(|c| ship.contains(*c)));
}
