use shipgame::{
    render_board, render_fleet, render_player_view, BoardView, Coordinate, GameEngine,
    Orientation, Role,
};

fn at(token: &str) -> Coordinate {
    token.parse().unwrap()
}

/// Symbol drawn for `token` in a rendered board.
fn symbol(board: &str, token: &str) -> char {
    let c = at(token);
    let line = board.lines().nth(c.row_number() as usize).unwrap();
    line.chars().nth(4 + 2 * c.column() as usize).unwrap()
}

fn game() -> GameEngine {
    let mut engine = GameEngine::new();
    engine
        .place_ship(Role::Second, 2, at("A1"), Orientation::Row)
        .unwrap();
    engine
        .place_ship(Role::First, 3, at("H10"), Orientation::Column)
        .unwrap();
    engine
}

#[test]
fn test_empty_board_layout() {
    let engine = GameEngine::new();
    let board = render_board(engine.player(Role::First), true);
    let lines: Vec<&str> = board.lines().collect();
    assert_eq!(lines.len(), 11);
    assert_eq!(lines[0], "    A B C D E F G H I J");
    assert_eq!(lines[1], " 1  . . . . . . . . . .");
    assert_eq!(lines[10], "10  . . . . . . . . . .");
}

#[test]
fn test_hidden_and_revealed_views() {
    let mut engine = game();
    engine.fire_torpedo(Role::First, at("A1")).unwrap();
    engine.fire_torpedo(Role::Second, at("B2")).unwrap();
    engine.fire_torpedo(Role::First, at("C5")).unwrap();

    let hidden = render_board(engine.player(Role::Second), false);
    assert_eq!(symbol(&hidden, "A1"), 'X');
    assert_eq!(symbol(&hidden, "A2"), '.');
    assert_eq!(symbol(&hidden, "C5"), 'o');

    let revealed = render_board(engine.player(Role::Second), true);
    assert_eq!(symbol(&revealed, "A2"), 'S');

    let own = render_board(engine.player(Role::First), true);
    assert_eq!(symbol(&own, "H10"), 'S');
    assert_eq!(symbol(&own, "J10"), 'S');
    assert_eq!(symbol(&own, "B2"), 'o');
}

#[test]
fn test_grid_display_matches_revealed_board_without_misses() {
    let mut engine = game();
    engine.fire_torpedo(Role::First, at("A2")).unwrap();
    let second = engine.player(Role::Second);
    assert_eq!(second.grid().to_string(), render_board(second, true));
}

#[test]
fn test_player_view_sections() {
    let engine = game();
    let view = render_player_view(&engine, Role::First);
    let (opponent, own) = view.split_once("\n\nYour board:\n").unwrap();
    let opponent = opponent.strip_prefix("Opponent board:\n").unwrap();
    assert_eq!(symbol(opponent, "A1"), '.');
    assert_eq!(symbol(own, "I10"), 'S');
}

#[test]
fn test_fleet_listing_tracks_damage() {
    let mut engine = game();
    engine
        .place_ship(Role::Second, 3, at("C2"), Orientation::Column)
        .unwrap();
    engine.fire_torpedo(Role::First, at("D2")).unwrap();

    let fleet = render_fleet(engine.player(Role::Second));
    assert_eq!(fleet, "A1 R 2/2\nC2 C 2/3");

    engine.fire_torpedo(Role::Second, at("A1")).unwrap();
    engine.fire_torpedo(Role::First, at("A1")).unwrap();
    engine.fire_torpedo(Role::Second, at("A2")).unwrap();
    engine.fire_torpedo(Role::First, at("A2")).unwrap();
    assert_eq!(render_fleet(engine.player(Role::Second)), "C2 C 2/3");
    assert_eq!(render_fleet(&shipgame::PlayerState::new(Role::First)), "");
}

#[test]
fn test_board_view_matches_render_board() {
    let mut engine = game();
    engine.fire_torpedo(Role::First, at("B4")).unwrap();
    let second = engine.player(Role::Second);
    for reveal in [false, true] {
        assert_eq!(
            BoardView::new(second, reveal).to_string(),
            render_board(second, reveal)
        );
    }
}
