use super::*;
use checkers_core::successors;

#[test]
fn test_parse_strategy() {
    for s in Strategy::ALL {
        assert_eq!(s.name().parse::<Strategy>(), Ok(s));
        assert_eq!(s.to_string(), s.name());
    }
    assert_eq!("AB".parse::<Strategy>(), Ok(Strategy::AlphaBeta));
    assert_eq!("alpha-beta".parse::<Strategy>(), Ok(Strategy::AlphaBeta));
    assert_eq!(
        "negamax".parse::<Strategy>(),
        Err(ParseStrategyError("negamax".to_string()))
    );
}

#[test]
fn test_limits_from_budget() {
    let l = Strategy::Minimax.limits(3, Heuristic::Positional);
    assert_eq!(l.depth, 3);
    assert_eq!(l.heuristic, Heuristic::Positional);

    let l = Strategy::Mcts.limits(500, Heuristic::Material);
    assert_eq!(l.iterations, 500);

    assert_eq!(Strategy::AlphaBeta.limits(1000, Heuristic::Material).depth, u8::MAX);
}

#[test]
fn test_choose_move_every_strategy() {
    let board = BoardState::startpos();
    let legal = successors(&board, Color::Black);
    for strategy in Strategy::ALL {
        let budget = if strategy.uses_iterations() { 30 } else { 2 };
        let next = choose_move(
            &board,
            Color::Black,
            strategy,
            budget,
            Heuristic::MaterialAndKings,
            Some(1),
        )
        .unwrap_or_else(|| panic!("{strategy} found no move"));
        assert!(legal.contains(&next), "{strategy} returned an illegal board");
    }
}

#[test]
fn test_choose_move_on_finished_game() {
    let mut board = BoardState::empty();
    board.place(checkers_core::Piece::new(4, 3, Color::White));
    for strategy in Strategy::ALL {
        assert!(choose_move(&board, Color::White, strategy, 2, Heuristic::Material, Some(0)).is_none());
    }
}

#[test]
fn test_engine_names() {
    let names: Vec<String> = Strategy::ALL
        .into_iter()
        .map(|s| create_engine(s, Some(0)).name().to_string())
        .collect();
    assert_eq!(names, ["Minimax v1.0", "AlphaBeta v1.0", "MCTS v1.0", "Random v1.0"]);
}
