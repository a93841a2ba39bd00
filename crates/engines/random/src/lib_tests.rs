use super::*;

#[test]
fn random_engine_returns_legal_move() {
    let mut engine = RandomEngine::new();
    let pos = Position::startpos();

    for _ in 0..100 {
        let result = engine.search(&pos, 0);
        let best = result.best_move.expect("startpos has legal moves");
        assert!(pos.legal_moves().contains(&best));
    }
}

#[test]
fn random_engine_handles_checkmate() {
    let mut engine = RandomEngine::new();
    let pos = Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
        .unwrap();

    let result = engine.search(&pos, 0);

    assert!(result.best_move.is_none());
}

#[test]
fn random_engine_handles_stalemate() {
    let mut engine = RandomEngine::new();
    let pos = Position::from_fen("k7/8/1Q6/8/8/8/8/1K6 b - - 0 1").unwrap();

    let result = engine.search(&pos, 0);

    assert!(result.best_move.is_none());
}

#[test]
fn seeded_engine_is_deterministic() {
    let pos = Position::startpos();
    let a = RandomEngine::with_seed(7).search(&pos, 0).best_move;
    let b = RandomEngine::with_seed(7).search(&pos, 0).best_move;
    assert_eq!(a, b);
}
