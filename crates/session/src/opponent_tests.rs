use super::*;
use rand::SeedableRng;

#[test]
fn easy_selects_a_legal_move() {
    let pos = Position::startpos();
    let mut rng = StdRng::seed_from_u64(1);

    let chosen = select_move(&pos, Difficulty::Easy, &mut rng).unwrap();
    assert!(pos.legal_moves().contains(&chosen));
}

#[test]
fn hacker_finds_mate_in_one() {
    let pos = Position::from_fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1").unwrap();
    let mut rng = StdRng::seed_from_u64(2);

    let chosen = select_move(&pos, Difficulty::Hacker, &mut rng);
    assert_eq!(chosen, Some("e1e8".parse().unwrap()));
}

#[test]
fn medium_finds_mate_in_one() {
    let pos = Position::from_fen("6k1/5ppp/8/8/8/8/5PPP/4Q1K1 w - - 0 1").unwrap();
    let mut rng = StdRng::seed_from_u64(3);

    let chosen = select_move(&pos, Difficulty::Medium, &mut rng);
    assert_eq!(chosen, Some("e1e8".parse().unwrap()));
}

#[test]
fn no_legal_moves_yields_none() {
    let pos = Position::from_fen("r1bqkbnr/pppp1Qpp/2n5/4p3/2B1P3/8/PPPP1PPP/RNB1K1NR b KQkq - 0 1")
        .unwrap();
    let mut rng = StdRng::seed_from_u64(4);

    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hacker] {
        assert_eq!(select_move(&pos, difficulty, &mut rng), None);
    }
}

#[test]
fn seeded_selection_is_deterministic() {
    let pos = Position::startpos();

    let pick = |seed| {
        let mut rng = StdRng::seed_from_u64(seed);
        select_move(&pos, Difficulty::Hacker, &mut rng)
    };

    assert_eq!(pick(42), pick(42));
}
