//! Conflict resolution through full rounds of play.
//!
//! Round 1 always fights the single tier-one conflict, whose tiers grant
//! (influence 1, solari 2), (solari 3) and (solari 2).

use smallvec::smallvec;
use thumper::{
    ActionCategory, Conflict, ConflictDeck, ConflictResolver, ConflictReward, EngineConfig, GameEngine, GameRng,
    Player, PlayerId, PlayerMap, TurnOutcome,
};

fn p(id: u8) -> PlayerId {
    PlayerId::new(id)
}

fn arm(engine: &mut GameEngine) {
    engine.state_mut().current_mut().tokens =
        smallvec![ActionCategory::Economic, ActionCategory::Military, ActionCategory::Political];
}

fn finish_round(engine: &mut GameEngine) -> TurnOutcome {
    loop {
        let outcome = engine.pass_turn().unwrap();
        if !matches!(outcome, TurnOutcome::NextPlayer(_)) {
            return outcome;
        }
    }
}

#[test]
fn test_first_round_conflict_is_fixed() {
    for seed in 0..10 {
        let engine = GameEngine::new(EngineConfig::default().with_seed(seed));
        assert_eq!(engine.current_conflict().map(|c| c.id), Some(1));
    }
}

#[test]
fn test_strongest_deployment_wins() {
    let mut engine = GameEngine::new(EngineConfig::default());
    engine.state_mut().players[p(0)].spice = 5;

    arm(&mut engine);
    engine.quick_strike(2).unwrap();
    arm(&mut engine);
    engine.troop_transports(1).unwrap();

    let TurnOutcome::RoundEnded { outcome, round } = finish_round(&mut engine) else {
        panic!("expected round end");
    };
    assert_eq!(round, 2);
    assert_eq!(outcome.conflict, 1);
    assert_eq!(outcome.tier_for(p(0)), Some(0));
    assert_eq!(outcome.tier_for(p(1)), Some(1));
    assert_eq!(outcome.tier_for(p(2)), None);

    let winner = &engine.players()[p(0)];
    assert_eq!(winner.influence, 1);
    assert_eq!(winner.solari, 2);
    // Spice is overwritten by the tier, not added to
    assert_eq!(winner.spice, 0);
    // Deployed troops do not come home
    assert_eq!(winner.troops_deployed, 0);
    assert_eq!(winner.troops_garrison, 2);

    assert_eq!(engine.players()[p(1)].solari, 3);
    assert_eq!(engine.players()[p(2)].solari, 0);
}

#[test]
fn test_tie_burns_first_tier() {
    let mut engine = GameEngine::new(EngineConfig::default());

    arm(&mut engine);
    engine.quick_strike(2).unwrap();
    arm(&mut engine);
    engine.troop_transports(2).unwrap();

    let TurnOutcome::RoundEnded { outcome, .. } = finish_round(&mut engine) else {
        panic!("expected round end");
    };
    assert_eq!(outcome.tier_for(p(0)), Some(1));
    assert_eq!(outcome.tier_for(p(1)), Some(1));
    for id in [p(0), p(1)] {
        let player = &engine.players()[id];
        assert_eq!(player.influence, 0);
        assert_eq!(player.solari, 3);
    }
}

#[test]
fn test_shield_breaks_tie() {
    let mut engine = GameEngine::new(EngineConfig::default());
    engine.state_mut().players[p(1)].has_holtzman_shield = true;

    arm(&mut engine);
    engine.quick_strike(2).unwrap();
    arm(&mut engine);
    engine.troop_transports(2).unwrap();

    let TurnOutcome::RoundEnded { outcome, .. } = finish_round(&mut engine) else {
        panic!("expected round end");
    };
    assert_eq!(outcome.tier_for(p(1)), Some(0));
    assert_eq!(outcome.tier_for(p(0)), Some(1));
}

#[test]
fn test_no_deployment_no_rewards() {
    let mut engine = GameEngine::new(EngineConfig::default());
    engine.state_mut().players[p(3)].spice = 4;

    let TurnOutcome::RoundEnded { outcome, .. } = finish_round(&mut engine) else {
        panic!("expected round end");
    };
    assert!(outcome.awards.is_empty());
    assert_eq!(engine.players()[p(3)].spice, 4);
}

#[test]
fn test_resolver_with_deck_conflicts() {
    let deck = ConflictDeck::shuffled(&mut GameRng::new(5));
    let conflicts: Vec<Conflict> = deck.into_conflicts();

    for conflict in &conflicts {
        let mut players = PlayerMap::new(4, |id| Player {
            troops_deployed: 4 - u32::from(id.0),
            ..Player::new(0)
        });
        let outcome = ConflictResolver::resolve(conflict, &mut players);

        assert_eq!(outcome.awards.len(), 3);
        assert_eq!(outcome.tier_for(p(3)), None);
        let first: ConflictReward = conflict.rewards[0];
        assert_eq!(players[p(0)].conflict_victory_points, first.victory_points);
        assert_eq!(players[p(0)].solari, first.solari);
    }
}
