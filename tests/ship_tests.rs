use seabattle::{Coordinate, DeckStatus, Orientation, Ship};

#[test]
fn test_new_and_decks() {
    let ship = Ship::new(Coordinate::new(2, 1), 3, Orientation::Horizontal);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![Coordinate::new(2, 1), Coordinate::new(2, 2), Coordinate::new(2, 3)]
    );
    assert!(ship.decks().iter().all(|d| d.status() == DeckStatus::Intact));
    assert_eq!(ship.intact_decks(), 3);
    assert!(!ship.is_destroyed());
    assert_eq!((ship.width(), ship.height()), (3, 1));
}

#[test]
fn test_contains_and_iter() {
    let ship = Ship::new(Coordinate::new(0, 0), 4, Orientation::Vertical);
    let cells: Vec<_> = ship.cells().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(0, 0),
            Coordinate::new(1, 0),
            Coordinate::new(2, 0),
            Coordinate::new(3, 0)
        ]
    );
    for c in cells {
        assert!(ship.contains(c));
    }
    assert!(!ship.contains(Coordinate::new(4, 0)));
    assert!(!ship.contains(Coordinate::new(0, 1)));
}

#[test]
fn test_fits() {
    let ship = Ship::new(Coordinate::new(0, 7), 3, Orientation::Horizontal);
    assert!(ship.fits(10));
    assert!(!ship.fits(9));
    let ship = Ship::new(Coordinate::new(8, 0), 3, Orientation::Vertical);
    assert!(!ship.fits(10));
}

#[test]
fn test_margin_ring() {
    let ship = Ship::new(Coordinate::new(4, 4), 2, Orientation::Vertical);
    let mut ring: Vec<_> = ship.margin(10).collect();
    ring.sort_by_key(|c| (c.row, c.col));
    // 3x4 box minus the two decks
    assert_eq!(ring.len(), 10);
    assert!(ring.iter().all(|&c| !ship.contains(c)));
    assert!(ring.iter().all(|&c| (3..=6).contains(&c.row) && (3..=5).contains(&c.col)));
}

#[test]
fn test_fits_does_not_overflow() {
    let ship = Ship::new(Coordinate::new(usize::MAX, 3), 2, Orientation::Vertical);
    assert!(!ship.fits(10));
    assert!(ship.decks().iter().all(|d| d.coord().row == usize::MAX));
    assert_eq!(ship.margin(10).count(), 0);
}
