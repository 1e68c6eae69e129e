use super::*;

const SAMPLE: &str = r#"{
    "grid": { "(0,0,0)": "white queen", "(1,-1,0)": "black ant" },
    "players": {
        "white": { "queen": 0, "spider": 2, "ant": 3 },
        "black": { "queen": 1, "ant": 2 }
    },
    "current": "white",
    "available_moves": ["move|(0,0,0)|(0,-1,1)", "place|spider|(-1,1,0)"]
}"#;

// =============================================================
// Map order
// =============================================================

#[test]
fn entries_preserve_server_order() {
    let snapshot = GameSnapshot::from_json(SAMPLE).unwrap();
    let owners: Vec<_> = snapshot.players.keys().map(String::as_str).collect();
    assert_eq!(owners, vec!["white", "black"]);

    let white = &snapshot.players["white"];
    let tiles: Vec<_> = white.iter().map(|(k, v)| (k.as_str(), *v)).collect();
    assert_eq!(tiles, vec![("queen", 0), ("spider", 2), ("ant", 3)]);
}

#[test]
fn repeated_owner_keeps_first_position_and_last_value() {
    let snapshot = GameSnapshot::from_json(
        r#"{"players": {"white": {"queen": 1}, "black": {"ant": 1}, "white": {"ant": 2}}}"#,
    )
    .unwrap();
    let owners: Vec<_> = snapshot.players.keys().map(String::as_str).collect();
    assert_eq!(owners, vec!["white", "black"]);
    let white: Vec<_> = snapshot.players["white"].iter().map(|(k, v)| (k.as_str(), *v)).collect();
    assert_eq!(white, vec![("ant", 2)]);
}

#[test]
fn repeated_grid_key_yields_one_cell() {
    let snapshot =
        GameSnapshot::from_json(r#"{"grid": {"(0,0,0)": "white queen", "(0,0,0)": "black ant"}}"#).unwrap();
    let cells = snapshot.cells().unwrap();
    assert_eq!(cells, vec![Cell { at: CubeCoordinate::ORIGIN, owner: "black".into(), tile: TileKind::Ant }]);
}

#[test]
fn snapshot_serializes_maps_in_order() {
    let snapshot = GameSnapshot::from_json(r#"{"grid": {"(1,-1,0)": "black ant", "(0,0,0)": "white queen"}}"#).unwrap();
    let text = serde_json::to_string(&snapshot.grid).unwrap();
    assert_eq!(text, r#"{"(1,-1,0)":"black ant","(0,0,0)":"white queen"}"#);
}

#[test]
fn players_reject_non_objects() {
    assert!(matches!(GameSnapshot::from_json(r#"{"players": [1, 2]}"#), Err(Error::Json(_))));
}

// =============================================================
// GameSnapshot
// =============================================================

#[test]
fn snapshot_decodes_all_fields() {
    let snapshot = GameSnapshot::from_json(SAMPLE).unwrap();
    assert_eq!(snapshot.grid.len(), 2);
    assert_eq!(snapshot.current, "white");
    assert_eq!(snapshot.available_moves.len(), 2);
}

#[test]
fn snapshot_missing_fields_default_to_empty() {
    let snapshot = GameSnapshot::from_json(r#"{"grid": {}}"#).unwrap();
    assert!(snapshot.grid.is_empty());
    assert!(snapshot.players.is_empty());
    assert!(snapshot.available_moves.is_empty());
    assert_eq!(snapshot.current, "");
}

#[test]
fn snapshot_rejects_invalid_json() {
    assert!(matches!(GameSnapshot::from_json("{"), Err(Error::Json(_))));
    assert!(matches!(GameSnapshot::from_json(r#"{"players": {"white": {"queen": -1}}}"#), Err(Error::Json(_))));
}

#[test]
fn cells_decode_in_order() {
    let snapshot = GameSnapshot::from_json(SAMPLE).unwrap();
    let cells = snapshot.cells().unwrap();
    assert_eq!(
        cells,
        vec![
            Cell { at: CubeCoordinate::ORIGIN, owner: "white".into(), tile: TileKind::Queen },
            Cell { at: CubeCoordinate::new(1, -1, 0), owner: "black".into(), tile: TileKind::Ant },
        ]
    );
}

#[test]
fn cells_reject_value_without_tile() {
    let snapshot = GameSnapshot::from_json(r#"{"grid": {"(0,0,0)": "white"}}"#).unwrap();
    let err = snapshot.cells().unwrap_err();
    assert!(matches!(err, Error::MalformedCell { ref coordinate, .. } if coordinate == "(0,0,0)"));
}

#[test]
fn cells_reject_bad_coordinate_key() {
    let snapshot = GameSnapshot::from_json(r#"{"grid": {"(0,0)": "white queen"}}"#).unwrap();
    assert!(matches!(snapshot.cells(), Err(Error::MalformedCoordinate(_))));
}

#[test]
fn cells_reject_unknown_tile() {
    let snapshot = GameSnapshot::from_json(r#"{"grid": {"(0,0,0)": "white ladybug"}}"#).unwrap();
    assert!(matches!(snapshot.cells(), Err(Error::UnknownTile(_))));
}
