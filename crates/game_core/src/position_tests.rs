use super::*;

const STARTPOS_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

fn mv(coord: &str) -> Move {
    coord.parse().unwrap()
}

#[test]
fn startpos_has_twenty_legal_moves() {
    let pos = Position::startpos();
    assert_eq!(pos.legal_moves().len(), 20);
    assert_eq!(pos.side_to_move(), Color::White);
    assert_eq!(pos.fen(), STARTPOS_FEN);
}

#[test]
fn fen_round_trip() {
    let fen = "r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1";
    let pos = Position::from_fen(fen).unwrap();
    assert_eq!(pos.fen(), fen);
}

#[test]
fn from_fen_rejects_garbage() {
    assert!(Position::from_fen("not a position").is_err());
}

#[test]
fn make_and_unmake_restore_exact_state() {
    let mut pos = Position::startpos();
    let undo = pos.make_move(mv("e2e4"));
    assert_ne!(pos.fen(), STARTPOS_FEN);
    pos.unmake_move(undo);
    assert_eq!(pos.fen(), STARTPOS_FEN);
}

#[test]
fn apply_rejects_illegal_moves() {
    let mut pos = Position::startpos();
    assert!(pos.apply(mv("e2e5")).is_err());
    assert_eq!(pos.fen(), STARTPOS_FEN);
    assert!(pos.apply(mv("e2e4")).is_ok());
}

#[test]
fn checkmate_is_detected() {
    // Scholar's mate: black to move with no way out
    let pos =
        Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
            .unwrap();
    assert!(pos.is_checkmate());
    assert!(!pos.is_stalemate());
    assert!(!pos.has_legal_moves());
}

#[test]
fn stalemate_is_detected() {
    let pos = Position::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();
    assert!(pos.is_stalemate());
    assert!(!pos.is_checkmate());
    assert!(!pos.in_check());
}

#[test]
fn fifty_move_rule_boundary() {
    let at_limit = Position::from_fen("8/8/8/4k3/8/4K3/8/8 w - - 100 60").unwrap();
    assert!(at_limit.is_fifty_move_draw());

    let below_limit = Position::from_fen("8/5r2/8/4k3/8/4K3/8/8 w - - 99 60").unwrap();
    assert!(!below_limit.is_fifty_move_draw());
}

#[test]
fn insufficient_material_cases() {
    // Bare kings
    assert!(Position::from_fen("8/8/8/4k3/8/4K3/8/8 w - - 0 1")
        .unwrap()
        .is_insufficient_material());
    // Lone minor piece
    assert!(Position::from_fen("8/8/8/4k3/8/4KB2/8/8 w - - 0 1")
        .unwrap()
        .is_insufficient_material());
    assert!(Position::from_fen("8/8/8/4k3/8/4KN2/8/8 w - - 0 1")
        .unwrap()
        .is_insufficient_material());
    // Bishops on the same square color cannot force mate
    assert!(Position::from_fen("8/8/8/4k3/5b2/8/8/2B1K3 w - - 0 1")
        .unwrap()
        .is_insufficient_material());
    // Opposite-colored bishops can
    assert!(!Position::from_fen("8/8/8/4kb2/8/8/8/2B1K3 w - - 0 1")
        .unwrap()
        .is_insufficient_material());
    // Any pawn, rook or queen is mating material
    assert!(!Position::from_fen("8/8/8/4k3/8/4KR2/8/8 w - - 0 1")
        .unwrap()
        .is_insufficient_material());
    assert!(!Position::startpos().is_insufficient_material());
}

#[test]
fn capture_classification() {
    let pos =
        Position::from_fen("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2")
            .unwrap();
    assert!(pos.is_capture(mv("e4d5")));
    assert!(!pos.is_capture(mv("e4e5")));
}

#[test]
fn en_passant_is_a_capture() {
    let pos =
        Position::from_fen("rnbqkbnr/ppp1pppp/8/8/3pP3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 2")
            .unwrap();
    assert!(pos.legal_moves().contains(&mv("d4e3")));
    assert!(pos.is_capture(mv("d4e3")));
}

#[test]
fn castling_is_recognized() {
    // cozy_chess encodes castling as king-onto-rook
    let pos =
        Position::from_fen("rnbqk2r/pppp1ppp/5n2/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4")
            .unwrap();
    assert!(pos.legal_moves().contains(&mv("e1h1")));
    assert!(pos.is_castling(mv("e1h1")));
    assert!(!pos.is_castling(mv("e1f1")));
}

#[test]
fn same_position_ignores_move_counters() {
    let a = Position::from_fen("8/5r2/8/4k3/8/4K3/8/8 w - - 0 1").unwrap();
    let b = Position::from_fen("8/5r2/8/4k3/8/4K3/8/8 w - - 40 70").unwrap();
    assert!(a.same_position(&b));
    assert_ne!(a, b);
}
