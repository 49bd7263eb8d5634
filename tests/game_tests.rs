use liars_dice::{
    simulate, Action, Bid, BidError, ConfigError, DicePools, GameConfig, GameEngine, GameError,
    GamePhase, NaiveStrategy, RoundEnd, Strategies, Strategy, Verdict, WinHistory,
};
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Opens with a fixed bid; then either challenges or raises by one die.
struct Scripted {
    open: Bid,
    challenge: bool,
}

impl Strategy for Scripted {
    fn decide(
        &mut self,
        _rng: &mut SmallRng,
        current_bid: Option<Bid>,
        _total_dice: usize,
        _own_dice: &[u8],
    ) -> Action {
        match current_bid {
            None => Action::Bid(self.open),
            Some(_) if self.challenge => Action::Challenge,
            Some(bid) => Action::Bid(Bid {
                quantity: bid.quantity + 1,
                face: bid.face,
            }),
        }
    }
}

fn scripted(plan: &[(u32, u8, bool)]) -> Strategies {
    plan.iter()
        .enumerate()
        .map(|(p, &(quantity, face, challenge))| {
            let s: Box<dyn Strategy> = Box::new(Scripted {
                open: Bid { quantity, face },
                challenge,
            });
            (p, s)
        })
        .collect()
}

fn three_hands() -> DicePools {
    DicePools::from_hands([(0, vec![2, 2]), (1, vec![3, 3]), (2, vec![4, 4])])
}

fn fixed_order() -> GameConfig {
    GameConfig::new(3, 2).with_randomize_order(false)
}

#[test]
fn rejects_bad_configuration() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut strategies = scripted(&[(1, 2, true), (1, 2, true), (1, 2, true)]);

    let cases = [
        (GameConfig::new(1, 5), ConfigError::TooFewPlayers(1)),
        (GameConfig::new(3, 0), ConfigError::NoDice),
        (GameConfig::new(4, 5), ConfigError::MissingStrategy(3)),
        (
            GameConfig::new(3, 5).with_first_caller(Some(3)),
            ConfigError::UnknownFirstCaller(3),
        ),
    ];
    for (config, expected) in cases {
        let err = simulate(&config, &mut strategies, &mut rng, None).unwrap_err();
        assert_eq!(err, GameError::InvalidConfiguration(expected));
    }
}

#[test]
fn normal_rule_eliminates_liar_then_false_accuser() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut strategies = scripted(&[(3, 2, false), (2, 3, true), (1, 4, true)]);
    let engine = GameEngine::from_pools(fixed_order(), three_hands());
    assert_eq!(engine.phase(), GamePhase::AwaitingBid);

    let outcome = engine.run(&mut rng, &mut strategies).unwrap();
    let record = &outcome.record;

    assert_eq!(outcome.winner, 1);
    assert_eq!(outcome.first_player, 0);
    assert_eq!(record.total_bids, 4);
    assert_eq!(record.rounds, 2);
    assert_eq!(record.bids.len(), 4);
    assert_eq!(record.initial_counts.get(2), 2);

    let first = record.challenges[0];
    assert_eq!(first.turn, 2);
    assert_eq!(first.challenger, 1);
    assert_eq!(first.bid, Bid { quantity: 3, face: 2 });
    assert_eq!(first.verdict, Verdict::Valid);
    assert_eq!(first.active_players, 3);
    assert_eq!(first.loser, 0);

    let second = record.challenges[1];
    assert_eq!(second.turn, 4);
    assert_eq!(second.challenger, 2);
    assert_eq!(second.bid, Bid { quantity: 2, face: 3 });
    assert_eq!(second.verdict, Verdict::Invalid);
    assert_eq!(second.active_players, 2);
    assert_eq!(second.loser, 2);
}

#[test]
fn special_rule_costs_one_die_at_a_time() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut strategies = scripted(&[(3, 2, false), (2, 3, true), (1, 4, true)]);
    let config = fixed_order().with_special_rule(true);
    let outcome = GameEngine::from_pools(config, three_hands())
        .run(&mut rng, &mut strategies)
        .unwrap();

    let losses: Vec<_> = outcome
        .record
        .challenges
        .iter()
        .map(|c| (c.loser, c.loser_dice_left, c.active_players))
        .collect();
    assert_eq!(losses, vec![(0, 1, 3), (0, 0, 3), (2, 1, 2), (2, 0, 2)]);
    assert_eq!(outcome.winner, 1);
    assert_eq!(outcome.record.rounds, 4);
}

#[test]
fn uncontested_round_keeps_the_bid() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut strategies = scripted(&[(1, 2, false), (1, 5, false), (1, 6, false)]);
    let mut engine = GameEngine::from_pools(fixed_order(), three_hands());

    let end = engine.play_round(&mut rng, &mut strategies).unwrap();
    assert_eq!(end, RoundEnd::Exhausted);
    assert_eq!(engine.phase(), GamePhase::AwaitingBidOrChallenge);
    assert_eq!(engine.current_bid(), Some(Bid { quantity: 3, face: 2 }));
    assert_eq!(engine.pools().active_count(), 3);
}

#[test]
fn challenge_carries_over_round_boundary() {
    // Player 2 raises last in round one; player 0 opens round two with a challenge
    // and the bidder is looked up cyclically in the new order.
    let mut rng = SmallRng::seed_from_u64(3);
    let mut strategies = scripted(&[(1, 2, false), (1, 5, false), (1, 6, false)]);
    let mut engine = GameEngine::from_pools(fixed_order(), three_hands());
    engine.play_round(&mut rng, &mut strategies).unwrap();

    strategies.insert(0, Box::new(Scripted { open: Bid { quantity: 1, face: 2 }, challenge: true }));
    match engine.play_round(&mut rng, &mut strategies).unwrap() {
        RoundEnd::Challenge(c) => {
            assert_eq!(c.challenger, 0);
            // 3 x 2 against [2,2,3,3,4,4]: only two twos.
            assert_eq!(c.verdict, Verdict::Valid);
            assert_eq!(c.loser, 2);
        }
        other => panic!("expected a challenge, got {:?}", other),
    }
    assert_eq!(engine.phase(), GamePhase::AwaitingBid);
}

#[test]
fn turn_guard_stops_endless_raising() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut strategies = scripted(&[(1, 2, false), (1, 5, false), (1, 6, false)]);
    let config = fixed_order().with_max_turns(Some(10));
    let err = GameEngine::from_pools(config, three_hands())
        .run(&mut rng, &mut strategies)
        .unwrap_err();
    assert_eq!(err, GameError::TurnLimitExceeded { turns: 10 });
}

#[test]
fn challenging_nothing_is_an_invalid_bid() {
    struct AlwaysLiar;
    impl Strategy for AlwaysLiar {
        fn decide(&mut self, _: &mut SmallRng, _: Option<Bid>, _: usize, _: &[u8]) -> Action {
            Action::Challenge
        }
    }

    let mut rng = SmallRng::seed_from_u64(3);
    let mut strategies: Strategies = Strategies::new();
    for p in 0..3 {
        strategies.insert(p, Box::new(AlwaysLiar));
    }
    let err = GameEngine::from_pools(fixed_order(), three_hands())
        .run(&mut rng, &mut strategies)
        .unwrap_err();
    assert_eq!(
        err,
        GameError::InvalidBid(BidError::NothingToChallenge { player: 0 })
    );
}

#[test]
fn zero_quantity_bid_is_rejected() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut strategies = scripted(&[(0, 2, false), (1, 5, true), (1, 6, true)]);
    let err = GameEngine::from_pools(fixed_order(), three_hands())
        .run(&mut rng, &mut strategies)
        .unwrap_err();
    assert_eq!(err, GameError::InvalidBid(BidError::ZeroQuantity));
}

#[test]
fn history_updates_only_for_numbered_games() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut strategies: Strategies = (0..3)
        .map(|p| (p, Box::new(NaiveStrategy::default()) as Box<dyn Strategy>))
        .collect();
    let mut history = WinHistory::new();

    let config = GameConfig::new(3, 2);
    simulate(&config, &mut strategies, &mut rng, Some(&mut history)).unwrap();
    assert_eq!(history.games_recorded(), 0);

    let outcome = simulate(
        &config.clone().with_game_number(1),
        &mut strategies,
        &mut rng,
        Some(&mut history),
    )
    .unwrap();
    assert_eq!(history.games_recorded(), 1);
    assert_eq!(history.latest(outcome.winner), Some(1.0));
}

#[test]
fn missing_strategy_is_caught_before_the_roll() {
    let mut rng = SmallRng::seed_from_u64(21);
    let mut untouched = rng.clone();
    let mut strategies = scripted(&[(1, 2, true), (1, 2, true)]);

    let err = simulate(&GameConfig::new(3, 2), &mut strategies, &mut rng, None).unwrap_err();
    assert_eq!(err, GameError::InvalidConfiguration(ConfigError::MissingStrategy(2)));
    assert_eq!(rng.random::<u64>(), untouched.random::<u64>());
}

#[test]
fn engine_reports_a_seat_without_strategy_on_its_turn() {
    let mut rng = SmallRng::seed_from_u64(21);
    let mut strategies = scripted(&[(1, 2, false), (1, 2, false)]);
    let err = GameEngine::from_pools(fixed_order(), three_hands())
        .run(&mut rng, &mut strategies)
        .unwrap_err();
    assert_eq!(err, GameError::InvalidConfiguration(ConfigError::MissingStrategy(2)));
}
