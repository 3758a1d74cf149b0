use super::*;

fn board(diagram: &str) -> BoardState {
    BoardState::from_diagram(diagram).unwrap()
}

#[test]
fn test_startpos_is_balanced() {
    let b = BoardState::startpos();
    for c in [Color::White, Color::Black] {
        assert_eq!(b.eval_material(c), 0);
        assert_eq!(b.eval_material_and_kings(c), 0);
    }
}

#[test]
fn test_material_counts_pieces() {
    let b = board(
        "........
         ........
         ........
         ...W....
         ..w.....
         ........
         ......b.
         ........",
    );
    assert_eq!(b.eval_material(Color::White), 100);
    assert_eq!(b.eval_material(Color::Black), -100);
    // One king ahead adds 0.99 of a piece
    assert_eq!(b.eval_material_and_kings(Color::White), 199);
    assert_eq!(b.eval_material_and_kings(Color::Black), -199);
}

#[test]
fn test_positional_startpos() {
    // Own men: four on row 0 (0), four on row 1 (2), four on row 2 (3) = 20.
    // Opponent men, same rows from their side: -(4*2 + 4*3 + 4*4) = -36.
    let b = BoardState::startpos();
    assert_eq!(b.eval_positional(Color::White), -1600);
    assert_eq!(b.eval_positional(Color::Black), -1600);
}

#[test]
fn test_positional_rewards_deep_men() {
    let b = board(
        "........
         ........
         ........
         ........
         .....w..
         ........
         ........
         ......b.",
    );
    // Advance 4 is past the middle: 2 + 4 for the own man, -(2 + 0) for the enemy
    assert_eq!(b.eval_positional(Color::White), 400);
    // Seen from Black: 0 for its own home-row man, -(3 + 4) for the advanced enemy
    assert_eq!(b.eval_positional(Color::Black), -700);
}

#[test]
fn test_positional_trapped_king() {
    let b = board(
        "W.......
         .w......
         ........
         ........
         ........
         ........
         ........
         ......b.",
    );
    // King boxed in by the edge and its own man: -100 + 2 - 2
    assert_eq!(b.eval_positional(Color::White), -10_000);
}

#[test]
fn test_positional_free_king() {
    let b = board(
        "........
         ........
         ........
         ..W.....
         ........
         ........
         ........
         ......b.",
    );
    assert_eq!(b.eval_positional(Color::White), 1900);
    assert_eq!(b.eval_positional(Color::Black), -2100);
}

#[test]
fn test_evaluate_dispatch() {
    let b = board(
        "........
         ........
         ........
         ...W....
         ..w.....
         ........
         ......b.
         ........",
    );
    assert_eq!(Heuristic::Material.evaluate(&b, Color::White), 100);
    assert_eq!(Heuristic::MaterialAndKings.evaluate(&b, Color::White), 199);
    assert_eq!(
        Heuristic::Positional.evaluate(&b, Color::White),
        b.eval_positional(Color::White)
    );
}

#[test]
fn test_heuristic_ids_and_names() {
    for h in Heuristic::ALL {
        assert_eq!(Heuristic::from_id(h.id()), Some(h));
        assert_eq!(h.name().parse::<Heuristic>(), Ok(h));
        assert_eq!(h.id().to_string().parse::<Heuristic>(), Ok(h));
    }
    assert_eq!("POSITIONAL".parse::<Heuristic>(), Ok(Heuristic::Positional));
    assert_eq!(Heuristic::from_id(0), None);
    assert_eq!(
        "4".parse::<Heuristic>(),
        Err(ParseHeuristicError("4".to_string()))
    );
    assert!("mobility".parse::<Heuristic>().is_err());
    assert_eq!(Heuristic::default(), Heuristic::MaterialAndKings);
}
