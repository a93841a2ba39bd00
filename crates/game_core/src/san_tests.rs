use super::*;
use crate::position::Position;

fn mv(coord: &str) -> cozy_chess::Move {
    coord.parse().unwrap()
}

#[test]
fn pawn_push_and_piece_move() {
    let pos = Position::startpos();
    assert_eq!(san_for_move(&pos, mv("e2e4")), "e4");
    assert_eq!(san_for_move(&pos, mv("g1f3")), "Nf3");
}

#[test]
fn pawn_capture_names_the_file() {
    let pos =
        Position::from_fen("rnbqkbnr/ppp1pppp/8/3p4/4P3/8/PPPP1PPP/RNBQKBNR w KQkq - 0 2")
            .unwrap();
    assert_eq!(san_for_move(&pos, mv("e4d5")), "exd5");
}

#[test]
fn castling_notation() {
    let pos =
        Position::from_fen("rnbqk2r/pppp1ppp/5n2/2b1p3/2B1P3/5N2/PPPP1PPP/RNBQK2R w KQkq - 4 4")
            .unwrap();
    assert_eq!(san_for_move(&pos, mv("e1h1")), "O-O");
    assert_eq!(move_from_san(&pos, "O-O"), Some(mv("e1h1")));
}

#[test]
fn promotion_notation() {
    let pos = Position::from_fen("8/P7/8/8/8/8/k6K/8 w - - 0 1").unwrap();
    assert_eq!(san_for_move(&pos, mv("a7a8q")), "a8=Q");
    assert_eq!(move_from_san(&pos, "a8=Q"), Some(mv("a7a8q")));
    assert_eq!(move_from_san(&pos, "a8=N"), Some(mv("a7a8n")));
}

#[test]
fn knights_on_one_rank_disambiguate_by_file() {
    // Knights on b1 and f3 can both reach the empty d2 square
    let pos =
        Position::from_fen("rnbqkb1r/pppppppp/5n2/8/3P4/5N2/PPP1PPPP/RNBQKB1R w KQkq - 0 1")
            .unwrap();
    assert_eq!(san_for_move(&pos, mv("b1d2")), "Nbd2");
    assert_eq!(san_for_move(&pos, mv("f3d2")), "Nfd2");
    assert_eq!(move_from_san(&pos, "Nbd2"), Some(mv("b1d2")));
}

#[test]
fn resolution_round_trips_every_legal_move() {
    let fens = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
        "r1bqk2r/pppp1ppp/2n2n2/2b1p3/2B1P3/2N2N2/PPPP1PPP/R1BQK2R w KQkq - 6 5",
        "8/P6k/8/8/8/8/6K1/8 w - - 0 1",
    ];
    for fen in fens {
        let pos = Position::from_fen(fen).unwrap();
        for legal in pos.legal_moves() {
            let san = san_for_move(&pos, legal);
            assert_eq!(
                move_from_san(&pos, &san),
                Some(legal),
                "notation {san:?} did not round-trip in {fen}"
            );
        }
    }
}

#[test]
fn resolution_accepts_coordinate_form_and_check_suffixes() {
    let pos = Position::startpos();
    assert_eq!(move_from_san(&pos, "e2e4"), Some(mv("e2e4")));
    assert_eq!(move_from_san(&pos, "Nf3+"), Some(mv("g1f3")));
    assert_eq!(move_from_san(&pos, "Qh5"), None);
}
