use super::*;
use checkers_core::Heuristic;

#[test]
fn test_empty_config_uses_defaults() {
    let config = MatchConfig::from_toml_str("").unwrap();
    assert_eq!(config, MatchConfig::default());
    assert_eq!(config.players.first.strategy, Strategy::AlphaBeta);
    assert_eq!(config.players.first.limits, SearchLimits::default());
}

#[test]
fn test_full_config() {
    let config = MatchConfig::from_toml_str(
        r#"
        num_games = 20
        max_moves = 150
        alternate_colors = false
        verbose = false
        seed = 7

        [players.first]
        strategy = "alpha_beta"
        depth = 5
        heuristic = "positional"

        [players.second]
        strategy = "mcts"
        iterations = 300
        rollout_depth = 12
        "#,
    )
    .unwrap();

    assert_eq!(config.num_games, 20);
    assert_eq!(config.max_moves, 150);
    assert!(!config.alternate_colors);
    assert_eq!(config.seed, Some(7));

    let first = config.players.first;
    assert_eq!(first.strategy, Strategy::AlphaBeta);
    assert_eq!(first.limits.depth, 5);
    assert_eq!(first.limits.heuristic, Heuristic::Positional);

    let second = config.players.second;
    assert_eq!(second.strategy, Strategy::Mcts);
    assert_eq!(second.limits.iterations, 300);
    assert_eq!(second.limits.rollout_depth, 12);
    assert_eq!(second.limits.depth, SearchLimits::default().depth);
}

#[test]
fn test_bad_config() {
    assert!(matches!(
        MatchConfig::from_toml_str("num_games = \"many\""),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        MatchConfig::from_toml_str("[players.first]\nstrategy = \"negamax\""),
        Err(ConfigError::Parse(_))
    ));
    assert!(matches!(
        MatchConfig::load("/nonexistent/match.toml"),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn test_player_labels() {
    let ab = PlayerConfig::new(
        Strategy::AlphaBeta,
        SearchLimits::depth(4).with_heuristic(Heuristic::Positional),
    );
    assert_eq!(ab.label(), "alpha_beta(depth 4, positional)");

    let mcts = PlayerConfig::new(Strategy::Mcts, SearchLimits::iterations(100));
    assert_eq!(mcts.label(), "mcts(100 iterations, rollout 10)");

    let random = PlayerConfig::new(Strategy::Random, SearchLimits::default());
    assert_eq!(random.label(), "random");
}
