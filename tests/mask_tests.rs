use shipgame::{CellMask, Coordinate, MaskError, ShotMask};

#[test]
fn test_try_new_checks_width() {
    assert_eq!(
        CellMask::<u64>::try_new().unwrap_err(),
        MaskError::SizeTooLarge {
            cells: 100,
            capacity: 64
        }
    );
    assert!(CellMask::<u8>::try_new().is_err());
    assert!(ShotMask::try_new().unwrap().is_empty());
}

#[test]
fn test_wide_mask_addresses_last_cell() {
    // J10 is the highest bit; every constructible mask must reach it.
    let j10: Coordinate = "J10".parse().unwrap();
    let mut checked = CellMask::<u128>::try_new().unwrap();
    assert!(checked.insert(j10));
    assert!(checked.contains(j10));

    let mut empty = ShotMask::empty();
    assert_eq!(empty, ShotMask::default());
    assert!(empty.insert(j10));
    assert_eq!(empty.count(), 1);
}

#[test]
fn test_insert_and_iterate() {
    let mut mask = ShotMask::empty();
    let j10: Coordinate = "J10".parse().unwrap();
    let b3: Coordinate = "B3".parse().unwrap();

    assert!(mask.insert(j10));
    assert!(mask.insert(b3));
    assert!(!mask.insert(j10));
    assert_eq!(mask.count(), 2);
    assert!(mask.contains(b3));
    assert!(!mask.contains("B4".parse().unwrap()));
    assert_eq!(mask.iter().collect::<Vec<_>>(), vec![b3, j10]);
}
