use seabattle::{BitBoard, BitBoardError, Coordinate};

#[test]
fn test_try_new_sizes() {
    // Success for board that fits
    let ok = BitBoard::<u64, 8>::try_new();
    assert!(ok.is_ok());

    // Failure when board is too large
    let err = BitBoard::<u8, 3>::try_new();
    assert!(matches!(err, Err(BitBoardError::SizeTooLarge { n: 3, capacity: 8 })));
}

#[test]
fn test_get_set() {
    let mut bb = BitBoard::<u16, 4>::try_new().unwrap();
    assert!(bb.is_empty());

    bb.set(Coordinate::new(1, 1)).unwrap();
    assert!(bb.get(Coordinate::new(1, 1)).unwrap());
    assert!(!bb.get(Coordinate::new(1, 2)).unwrap());
    assert_eq!(bb.count_ones(), 1);

    assert_eq!(
        bb.set(Coordinate::new(4, 0)),
        Err(BitBoardError::IndexOutOfBounds { row: 4, col: 0 })
    );
}

#[test]
fn test_extend_and_iter() {
    let mut bb = BitBoard::<u128, 10>::try_new().unwrap();
    bb.extend([Coordinate::new(9, 9), Coordinate::new(0, 1), Coordinate::new(0, 1)])
        .unwrap();
    let marked: Vec<_> = bb.iter().collect();
    assert_eq!(marked, vec![Coordinate::new(0, 1), Coordinate::new(9, 9)]);
}
