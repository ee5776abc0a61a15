//! Tests for the game session controller.

use counting_out::{
    Bounds, GameSession, GameSetup, PlayerId, SessionError, SessionEvent, SessionPhase,
    SetupError, solve,
};

fn session() -> GameSession {
    GameSession::new(Bounds::default())
}

#[test]
fn test_rejects_player_counts_outside_bounds() {
    let mut session = session();
    for players in [0, 1, 12, 50] {
        let result = session.on_start(players, 2);
        assert_eq!(
            result,
            Err(SessionError::Setup(SetupError::PlayersOutOfRange {
                players,
                min: 2,
                max: 11,
            }))
        );
    }
    assert!(!session.is_in_progress());
}

#[test]
fn test_rejects_zero_step() {
    let mut session = session();
    let result = session.on_start(5, 0);
    assert_eq!(
        result,
        Err(SessionError::Setup(SetupError::StepTooSmall { step: 0 }))
    );
}

#[test]
fn test_accepts_boundary_counts() {
    for players in [2, 11] {
        let mut session = session();
        let event = session.on_start(players, 1).expect("Valid setup");
        assert_eq!(event, SessionEvent::Started { players, step: 1 });
        assert_eq!(session.remaining(), players);
    }
}

#[test]
fn test_eliminate_without_game() {
    let mut session = session();
    assert_eq!(session.on_eliminate(), Err(SessionError::NoActiveGame));
}

#[test]
fn test_full_round_announces_winner() {
    let mut session = session();
    session.on_start(5, 2).expect("Valid setup");

    let mut eliminated = Vec::new();
    for remaining in (1..=4).rev() {
        match session.on_eliminate().expect("Round running") {
            SessionEvent::Eliminated { player, remaining: left } => {
                assert_eq!(left, remaining);
                eliminated.push(player.seat());
            }
            other => panic!("Expected elimination, got {other:?}"),
        }
    }
    assert_eq!(eliminated, [1, 3, 0, 4]);

    let event = session.on_eliminate().expect("Winner step");
    assert_eq!(
        event,
        SessionEvent::Winner {
            player: PlayerId::new(2),
            eliminated: [1, 3, 0, 4].into_iter().map(PlayerId::new).collect(),
        }
    );

    // The session is back in setup after the winner.
    assert!(!session.is_in_progress());
    assert_eq!(session.on_eliminate(), Err(SessionError::NoActiveGame));
}

#[test]
fn test_start_while_running_is_rejected() {
    let mut session = session();
    session.on_start(4, 2).expect("Valid setup");
    assert_eq!(session.on_start(3, 1), Err(SessionError::GameInProgress));
}

#[test]
fn test_reset_discards_round() {
    let mut session = session();
    session.on_start(6, 3).expect("Valid setup");
    session.on_eliminate().expect("Round running");
    assert_eq!(session.history().len(), 1);

    assert_eq!(session.on_reset(), SessionEvent::Reset);
    assert!(!session.is_in_progress());
    assert!(session.history().is_empty());
    assert_eq!(session.remaining(), 0);

    session.on_start(2, 1).expect("New round after reset");
    assert_eq!(
        session.on_eliminate(),
        Ok(SessionEvent::Eliminated {
            player: PlayerId::new(0),
            remaining: 1,
        })
    );
}

#[test]
fn test_custom_bounds() {
    let mut session = GameSession::new(Bounds { min: 3, max: 30 });
    assert!(session.on_start(2, 1).is_err());
    assert!(session.on_start(30, 4).is_ok());
}

#[test]
fn test_solve_matches_interactive_play() {
    let setup = GameSetup::new(7, 3, &Bounds::default()).expect("Valid setup");
    let summary = solve(setup);
    let order: Vec<_> = summary.order().iter().map(|p| p.seat()).collect();
    assert_eq!(order, [2, 5, 1, 6, 4, 0]);
    assert_eq!(summary.winner().map(PlayerId::seat), Some(3));
}

#[test]
fn test_summary_serializes() {
    let setup = GameSetup::new(2, 1, &Bounds::default()).expect("Valid setup");
    let json = serde_json::to_value(solve(setup)).expect("Serializable");
    assert_eq!(
        json,
        serde_json::json!({ "players": 2, "step": 1, "order": [0], "winner": 1 })
    );
}

#[test]
fn test_round_exposes_seated_players() {
    let mut session = session();
    session.on_start(5, 2).expect("Valid setup");
    session.on_eliminate().expect("Round running");

    let SessionPhase::InProgress(round) = session.phase() else {
        panic!("Round should be running");
    };
    assert_eq!(*round.setup().players(), 5);
    assert_eq!(round.history(), [PlayerId::new(1)]);
    let seated: Vec<_> = round.seated().iter().map(|p| p.seat()).collect();
    assert_eq!(seated, [0, 2, 3, 4]);
}

#[test]
fn test_solve_with_maximum_step_finishes() {
    let setup = GameSetup::new(11, usize::MAX, &Bounds::default()).expect("Valid setup");
    let summary = solve(setup);
    let k = std::num::NonZeroUsize::MAX;
    let expected = counting_out::josephus::survivor_position(11, k);
    assert_eq!(summary.order().len(), 10);
    assert_eq!(summary.winner().map(PlayerId::seat), expected);
}

#[test]
fn test_setup_never_seats_fewer_than_two() {
    let loose = Bounds { min: 0, max: 5 };
    for players in [0, 1] {
        assert_eq!(
            GameSetup::new(players, 1, &loose),
            Err(SetupError::PlayersOutOfRange {
                players,
                min: 2,
                max: 5,
            })
        );
    }
    assert!(GameSetup::new(2, 1, &loose).is_ok());
}

#[test]
fn test_setup_error_converts_into_session_error() {
    let err = SetupError::StepTooSmall { step: 0 };
    assert_eq!(SessionError::from(err), SessionError::Setup(err));
}
