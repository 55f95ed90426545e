//! Match-level integration tests.
//!
//! These tests verify scoring across several games, match termination,
//! and the early END_GAME / END_MATCH shortcuts.

use backgammon_engine::board::Board;
use backgammon_engine::core::{Command, DicePair, MatchConfig, PlayerId};
use backgammon_engine::game::{CommandOutcome, FirstOption, GameService, DRAW};
use backgammon_engine::rules::{GameEnd, WinKind};
use backgammon_engine::EngineError;

/// Player 1 needs a single pip to win; player 2 has borne one checker off.
fn one_pip_from_single_win() -> Board {
    Board::empty()
        .with_off(PlayerId::ONE, 14)
        .with_point(PlayerId::ONE, 24, 1)
        .with_off(PlayerId::TWO, 1)
        .with_point(PlayerId::TWO, 6, 14)
}

/// Play one game in which player 1 bears off immediately.
fn win_game_for_player_one(game: &mut GameService) {
    game.start_game_from(one_pip_from_single_win(), PlayerId::ONE)
        .unwrap();
    game.set_next_dice(DicePair::new(1, 2).unwrap());
    let report = game.play_turn(&mut FirstOption).unwrap();
    let result = report.result.unwrap();
    assert_eq!(result.end, GameEnd::BoreOff(WinKind::Single));
    assert!(result.is_winner(PlayerId::ONE));
}

// =============================================================================
// Full Matches
// =============================================================================

/// Three single wins in a three-game match.
#[test]
fn test_three_game_match() {
    let mut game = GameService::new(MatchConfig::new(3), ["Ada", "Bob"]).unwrap();

    for played in 1..=3 {
        assert!(!game.is_match_over());
        assert_eq!(game.match_manager().current_game_number(), played);
        win_game_for_player_one(&mut game);
        assert_eq!(game.match_manager().score(PlayerId::ONE), played);
    }

    assert!(game.is_match_over());
    assert_eq!(game.match_manager().games_played(), 3);
    assert_eq!(game.match_manager().winner(), Some(PlayerId::ONE));
    assert_eq!(game.match_manager().winner_name(), "Ada");

    let err = game.start_game().unwrap_err();
    assert!(matches!(err, EngineError::InvalidCommand { .. }));
}

/// Reaching the point target ends the match before all games are played.
#[test]
fn test_point_target_ends_match_early() {
    let config = MatchConfig::new(5).with_point_target(2);
    let mut game = GameService::new(config, ["Ada", "Bob"]).unwrap();

    win_game_for_player_one(&mut game);
    assert!(!game.is_match_over());
    win_game_for_player_one(&mut game);

    assert!(game.is_match_over());
    assert_eq!(game.match_manager().games_played(), 2);
}

/// Each new game starts from a fresh board and a fresh history.
#[test]
fn test_new_game_resets_per_game_state() {
    let mut game = GameService::new(MatchConfig::new(3), ["Ada", "Bob"]).unwrap();
    win_game_for_player_one(&mut game);
    assert_eq!(game.history().len(), 1);

    let opening = game.start_game().unwrap();
    assert_eq!(game.board(), &Board::new());
    assert!(game.history().is_empty());
    assert_eq!(game.current_player(), opening.first);
    assert_eq!(game.cube().value(), 1);
}

// =============================================================================
// Early Termination
// =============================================================================

/// END_GAME on tied scores awards nothing but still counts the game.
#[test]
fn test_end_game_on_tie_awards_nothing() {
    let mut game = GameService::new(MatchConfig::new(3), ["Ada", "Bob"]).unwrap();
    game.start_game().unwrap();

    let outcome = game.execute(Command::EndGame, &mut FirstOption).unwrap();

    let CommandOutcome::GameOver(result) = outcome else {
        panic!("expected game over, got {outcome:?}");
    };
    assert_eq!(result.winner, None);
    assert_eq!(result.points, 0);
    assert_eq!(result.end, GameEnd::Stopped);
    assert_eq!(game.match_manager().games_played(), 1);
    assert!(game.is_game_over());
    assert!(!game.is_match_over());
}

/// END_GAME gives the leader one point.
#[test]
fn test_end_game_rewards_leader() {
    let mut game = GameService::new(MatchConfig::new(5), ["Ada", "Bob"]).unwrap();
    win_game_for_player_one(&mut game);
    game.start_game().unwrap();

    let result = game.end_game().unwrap();

    assert_eq!(result.winner, Some(PlayerId::ONE));
    assert_eq!(result.points, 1);
    assert_eq!(game.match_manager().score(PlayerId::ONE), 2);
    assert!(game.end_game().is_err());
}

/// END_MATCH forces the match over, even between games.
#[test]
fn test_end_match_between_games() {
    let mut game = GameService::new(MatchConfig::new(7), ["Ada", "Bob"]).unwrap();
    win_game_for_player_one(&mut game);

    let result = game.end_match().unwrap();

    assert_eq!(result.winner, Some(PlayerId::ONE));
    assert_eq!(game.match_manager().score(PlayerId::ONE), 2);
    assert_eq!(game.match_manager().games_played(), 1);
    assert!(game.is_match_over());
    assert_eq!(game.match_manager().winner_name(), "Ada");
    assert!(game.end_match().is_err());
}

/// END_MATCH mid-game on tied scores: no point, reported as a draw.
#[test]
fn test_end_match_mid_game_tie() {
    let mut game = GameService::new(MatchConfig::new(7), ["Ada", "Bob"]).unwrap();
    game.start_game().unwrap();

    let outcome = game.execute(Command::EndMatch, &mut FirstOption).unwrap();

    assert!(matches!(outcome, CommandOutcome::GameOver(r) if r.winner.is_none()));
    assert!(game.is_match_over());
    assert!(game.is_game_over());
    assert_eq!(game.match_manager().games_played(), 1);
    assert_eq!(game.match_manager().winner(), None);
    assert_eq!(game.match_manager().winner_name(), DRAW);
}

// =============================================================================
// Queries and Delegation
// =============================================================================

/// PIP reports both players, HINT/QUIT/TEST go back to the caller.
#[test]
fn test_queries_and_delegated_commands() {
    let mut game = GameService::new(MatchConfig::new(1), ["Ada", "Bob"]).unwrap();
    game.start_game().unwrap();
    let mut selector = FirstOption;

    let CommandOutcome::Pips(pips) = game.execute(Command::Pip, &mut selector).unwrap() else {
        panic!("expected pip counts");
    };
    assert_eq!(pips[PlayerId::ONE], 167);
    assert_eq!(pips[PlayerId::TWO], 167);

    for text in ["hint", "quit", "test script.txt"] {
        let command: Command = text.parse().unwrap();
        let kind = command.kind();
        assert_eq!(
            game.execute(command, &mut selector).unwrap(),
            CommandOutcome::Delegated(kind)
        );
    }
}

/// DICE presets exactly the next roll.
#[test]
fn test_dice_command_presets_next_roll() {
    let mut game = GameService::new(MatchConfig::new(1), ["Ada", "Bob"]).unwrap();
    game.start_game().unwrap();
    let mut selector = FirstOption;

    let command: Command = "dice 5 5".parse().unwrap();
    game.execute(command, &mut selector).unwrap();
    let CommandOutcome::Turn(report) = game.execute(Command::Roll, &mut selector).unwrap() else {
        panic!("expected a played turn");
    };

    assert_eq!(report.record.dice, DicePair::new(5, 5).unwrap());
    assert_eq!(report.record.moves.len() + report.record.forfeited.len(), 4);
}
