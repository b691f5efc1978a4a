//! Session controller: setup, human input, computer chaining, resets.

use ninety_nine::core::{Action, ConfigError, GameStatus, PlayerId, SessionConfig};
use ninety_nine::rules::{NinetyNine, PlayRejection, RuleSet, RulesEngine};
use ninety_nine::ai::UniformPolicy;
use ninety_nine::session::{initialize_session, Session, TurnOutcome};

#[test]
fn test_initialize_session_for_every_table_size() {
    for player_count in 2..=4 {
        let state = initialize_session(player_count).unwrap();

        assert_eq!(state.player_count(), player_count);
        assert_eq!(state.status, GameStatus::InProgress);
        assert_eq!(state.current_player_index, 0);
        assert_eq!(state.running_total, 0);
        assert!(state.players.iter().all(|p| p.hand_size() == 5));
        assert!(state.center_card.is_some());
        assert!(!state.players[0].is_computer);
        assert!(state.players.iter().skip(1).all(|p| p.is_computer));
        assert_eq!(state.players[0].name, "Player 1");
        assert!(state.check_integrity().is_ok());
    }
}

#[test]
fn test_invalid_table_sizes() {
    assert_eq!(initialize_session(0).unwrap_err(), ConfigError::PlayerCount(0));
    assert_eq!(initialize_session(5).unwrap_err(), ConfigError::PlayerCount(5));
}

#[test]
fn test_human_then_computer_turns() {
    let config = SessionConfig::default().with_player_count(3);
    let mut session = Session::new(config).unwrap();
    let human = PlayerId::new(0);

    assert!(!session.is_computer_turn());
    let card = session.state().players[0].hand[0].id;
    session.play(human, card).unwrap();
    assert!(!session.state().players[0].holds(card));
    assert_eq!(session.state().center_card.map(|c| c.id), Some(card));

    // Unless the card kept the turn, the computers are up.
    if session.state().current_player_index != 0 {
        assert!(session.is_computer_turn());
        let (steps, outcome) = session.run_computers(100);
        assert!(steps >= 1);
        assert!(matches!(
            outcome,
            TurnOutcome::HumanTurn(PlayerId(0)) | TurnOutcome::GameOver(_)
        ));
    }
    assert!(session.state().check_integrity().is_ok());
}

#[test]
fn test_rejections_surface_reason_and_keep_state() {
    let mut session = Session::new(SessionConfig::default()).unwrap();
    let before = session.state().clone();

    assert_eq!(session.draw(PlayerId::new(1)), Err(PlayRejection::NotYourTurn(PlayerId::new(1))));
    // Any card is playable under the default ruleset.
    assert_eq!(session.pass(PlayerId::new(0)), Err(PlayRejection::PassNotAllowed(PlayerId::new(0))));
    assert_eq!(session.state(), &before);
}

#[test]
fn test_human_draws_on_opening_turn() {
    let mut session = Session::new(SessionConfig::default()).unwrap();
    let pile = session.state().draw_pile.len();

    session.draw(PlayerId::new(0)).unwrap();
    assert_eq!(session.state().players[0].hand_size(), 6);
    assert_eq!(session.state().draw_pile.len(), pile - 1);
    assert!(session.is_computer_turn());
}

#[test]
fn test_play_with_explicit_total_can_bust() {
    let mut session = Session::new(SessionConfig::default()).unwrap();
    let card = session.state().players[0].hand[0].id;

    session.play_with_total(PlayerId::new(0), card, 120).unwrap();
    let result = session.result().unwrap();
    assert_eq!(result.winner, PlayerId::new(1));
    assert_eq!(session.state().running_total, 99);

    assert_eq!(session.step_computer(), TurnOutcome::GameOver(result));
}

#[test]
fn test_same_seed_same_game() {
    let config = SessionConfig::default().with_player_count(4).all_computer().with_seed(77);

    let mut a = Session::new(config.clone()).unwrap();
    let mut b = Session::new(config).unwrap();
    a.run_computers(1_000);
    b.run_computers(1_000);

    assert_eq!(a.state(), b.state());
    assert!(a.state().is_over());
}

#[test]
fn test_reset_sequence_is_reproducible() {
    let config = SessionConfig::default().with_seed(5);
    let mut a = Session::new(config.clone()).unwrap();
    let mut b = Session::new(config).unwrap();

    a.reset();
    b.reset();
    assert_eq!(a.state(), b.state());
    assert_eq!(a.games_started(), 2);

    a.reset_with_seed(123);
    assert_eq!(a.config().seed, 123);
    let fresh = Session::new(SessionConfig::default().with_seed(123)).unwrap();
    assert_eq!(a.state(), fresh.state());
}

#[test]
fn test_custom_engine_and_policy() {
    let config = SessionConfig::default()
        .with_player_count(3)
        .with_ruleset(RuleSet::ScoreRace)
        .all_computer();
    let engine = NinetyNine::from_config(&config);
    let mut session = Session::with_parts(engine, UniformPolicy, config).unwrap();

    let (_, outcome) = session.run_computers(2_000);
    assert!(matches!(outcome, TurnOutcome::GameOver(_)));
    assert_eq!(session.engine().ruleset(), RuleSet::ScoreRace);
    assert!(session.state().check_integrity().is_ok());
}

#[test]
fn test_apply_generic_action() {
    let mut session = Session::new(SessionConfig::default()).unwrap();
    let card = session.state().players[0].hand[2].id;

    session.apply(PlayerId::new(0), Action::play(card)).unwrap();
    assert_eq!(session.state().history.len(), 1);
    assert_eq!(session.state().history[0].action, Action::play(card));
}
