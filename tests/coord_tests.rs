use shipgame::{Coordinate, Orientation, ParseCoordError};

fn at(token: &str) -> Coordinate {
    token.parse().unwrap()
}

#[test]
fn test_parse_single_digit_and_ten() {
    let a1 = at("A1");
    assert_eq!((a1.column(), a1.row()), (0, 0));
    let j10 = at("j10");
    assert_eq!((j10.column(), j10.row()), (9, 9));
    let c10 = at("C10");
    assert_eq!((c10.column(), c10.row()), (2, 9));
    assert_eq!(c10.row_number(), 10);
    assert_eq!(c10.column_label(), 'C');
}

#[test]
fn test_display_uses_board_notation() {
    assert_eq!(at("A10").to_string(), "A10");
    assert_eq!(at("e7").to_string(), "E7");
    assert!(Coordinate::all().all(|c| c.to_string().parse::<Coordinate>() == Ok(c)));
}

#[test]
fn test_parse_rejects_off_grid_tokens() {
    assert_eq!("".parse::<Coordinate>(), Err(ParseCoordError::Empty));
    assert_eq!("K1".parse::<Coordinate>(), Err(ParseCoordError::InvalidColumn('K')));
    assert_eq!("A".parse::<Coordinate>(), Err(ParseCoordError::MissingRow));
    assert_eq!("A0".parse::<Coordinate>(), Err(ParseCoordError::InvalidRow));
    assert_eq!("A11".parse::<Coordinate>(), Err(ParseCoordError::InvalidRow));
    assert_eq!("B01".parse::<Coordinate>(), Err(ParseCoordError::InvalidRow));
    assert_eq!("A1x".parse::<Coordinate>(), Err(ParseCoordError::InvalidRow));
}

#[test]
fn test_new_bounds() {
    assert!(Coordinate::new(9, 9).is_some());
    assert!(Coordinate::new(10, 0).is_none());
    assert!(Coordinate::new(0, 10).is_none());
}

#[test]
fn test_step_follows_orientation() {
    // Row walks down the rows of one column, Column walks across letters.
    assert_eq!(at("A1").step(Orientation::Row, 1), Some(at("A2")));
    assert_eq!(at("A1").step(Orientation::Column, 1), Some(at("B1")));
    assert_eq!(at("C4").step(Orientation::Row, 6), Some(at("C10")));
    assert_eq!(at("C4").step(Orientation::Row, 7), None);
    assert_eq!(at("J1").step(Orientation::Column, 1), None);
}

#[test]
fn test_all_covers_grid_once() {
    let cells: Vec<_> = Coordinate::all().collect();
    assert_eq!(cells.len(), 100);
    assert_eq!(cells[0], at("A1"));
    assert_eq!(cells[10], at("B1"));
    assert_eq!(cells[99], at("J10"));
}

#[test]
fn test_serde_as_board_notation() {
    let json = serde_json::to_string(&at("A10")).unwrap();
    assert_eq!(json, "\"A10\"");
    let back: Coordinate = serde_json::from_str("\"h3\"").unwrap();
    assert_eq!(back, at("H3"));
    assert!(serde_json::from_str::<Coordinate>("\"Z9\"").is_err());
}
