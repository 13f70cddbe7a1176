//! The game engine.
//!
//! `GameEngine` owns one game: its configuration, its state and the two RNG
//! streams the rules draw from. Every player action goes through
//! [`GameEngine::perform`], which validates the action against the current
//! state, applies it and advances the turn. Validation is a pure function of
//! the action and the state ([`GameEngine::check`]), so a rejected action never
//! changes anything.
//!
//! ## Preconditions
//!
//! Checked in this order, the first failure wins:
//!
//! 1. the game has not ended;
//! 2. the current player still has an agent;
//! 3. one-time upgrades are not taken twice;
//! 4. the player holds a token of the action's category;
//! 5. the action's identifier is unclaimed this round;
//! 6. spice, solari and garrison cover the cost;
//! 7. the action's argument is valid.
//!
//! `Pass` has no category, identifier or cost, so only the first two apply.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::scoring::{GameResult, ScoringEngine};
use super::turn::{self, TurnOutcome};
use crate::conflict::{Conflict, ConflictDeck};
use crate::core::action::melange_price;
use crate::core::{
    Action, ActionCategory, ActionId, ArgumentError, ArgumentKind, EngineConfig, GameRng, GameRngState, GameState,
    Player, PlayerId, PlayerMap, Resource, Result, ThumperError, Upgrade,
};

/// Troops a stone burner removes from its target.
pub const STONE_BURNER_KILLS: u32 = 4;

/// A serializable snapshot of an engine, RNG positions included.
///
/// Restoring it resumes the game with the same token draws and the same
/// conflict decks on later resets.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineCheckpoint {
    pub config: EngineConfig,
    pub state: GameState,
    pub deck_rng: GameRngState,
    pub token_rng: GameRngState,
}

/// Runs one game of Thumper.
#[derive(Clone, Debug)]
pub struct GameEngine {
    config: EngineConfig,
    state: GameState,
    deck_rng: GameRng,
    token_rng: GameRng,
}

impl GameEngine {
    /// Create an engine seeded from `config.seed` and deal the first round.
    #[must_use]
    pub fn new(config: EngineConfig) -> Self {
        let rng = GameRng::new(config.seed);
        Self::with_rng(config, rng)
    }

    /// Create an engine drawing from a caller-supplied RNG.
    ///
    /// The configured seed is replaced by the RNG's seed.
    #[must_use]
    pub fn with_rng(config: EngineConfig, rng: GameRng) -> Self {
        let config = config.with_seed(rng.seed());
        let mut deck_rng = rng.for_context("conflict-deck");
        let mut token_rng = rng.for_context("tokens");
        let state = Self::deal(&config, &mut deck_rng, &mut token_rng);
        Self {
            config,
            state,
            deck_rng,
            token_rng,
        }
    }

    /// Start a new game with the same configuration.
    ///
    /// The conflict deck is reshuffled; the RNG streams keep advancing, so
    /// successive resets play different games.
    pub fn reset(&mut self) {
        self.state = Self::deal(&self.config, &mut self.deck_rng, &mut self.token_rng);
        debug!(first_conflict = ?self.state.current_conflict().map(|c| c.id), "Game reset");
    }

    /// Snapshot the engine for later `restore`.
    #[must_use]
    pub fn checkpoint(&self) -> EngineCheckpoint {
        EngineCheckpoint {
            config: self.config.clone(),
            state: self.state.clone(),
            deck_rng: self.deck_rng.state(),
            token_rng: self.token_rng.state(),
        }
    }

    /// Rebuild an engine from a checkpoint.
    #[must_use]
    pub fn restore(checkpoint: EngineCheckpoint) -> Self {
        Self {
            config: checkpoint.config,
            state: checkpoint.state,
            deck_rng: GameRng::from_state(&checkpoint.deck_rng),
            token_rng: GameRng::from_state(&checkpoint.token_rng),
        }
    }

    fn deal(config: &EngineConfig, deck_rng: &mut GameRng, token_rng: &mut GameRng) -> GameState {
        let mut state = GameState::new(config.initial_troops, ConflictDeck::shuffled(deck_rng));
        for player in state.players.values_mut() {
            let drawn = turn::draw_tokens(token_rng, player.tokens_per_round());
            player.begin_round(drawn);
        }
        state
    }

    // === Accessors ===

    /// Engine configuration.
    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Current game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable game state, for scenario setup.
    ///
    /// Bypasses every rule; the caller keeps the state consistent.
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// The player whose turn it is.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player
    }

    /// Seat index of the player whose turn it is.
    #[must_use]
    pub fn current_player_index(&self) -> usize {
        self.state.current_player.index()
    }

    /// Current round, starting at 1.
    #[must_use]
    pub fn round(&self) -> u32 {
        self.state.round
    }

    #[must_use]
    pub fn is_game_ended(&self) -> bool {
        self.state.is_ended()
    }

    /// Snapshot of one player.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.state.players.get(id)
    }

    #[must_use]
    pub fn players(&self) -> &PlayerMap<Player> {
        &self.state.players
    }

    /// Unclaimed action identifiers, in catalog order.
    #[must_use]
    pub fn available_actions(&self) -> Vec<ActionId> {
        self.state.ledger.available()
    }

    #[must_use]
    pub fn spice_in_silo(&self) -> u32 {
        self.state.spice_in_silo
    }

    /// The conflict fought at the end of this round.
    #[must_use]
    pub fn current_conflict(&self) -> Option<&Conflict> {
        self.state.current_conflict()
    }

    // === Validation ===

    /// Check whether the current player may perform `action`.
    pub fn check(&self, action: &Action) -> Result<()> {
        let state = &self.state;
        if state.is_ended() {
            return Err(ThumperError::GameAlreadyEnded);
        }

        let actor = state.current_player;
        let player = state.current();
        if player.agents_left == 0 {
            return Err(ThumperError::InternalInvariantViolation { player: actor });
        }

        if let Some(upgrade) = Self::upgrade_for(action) {
            let acquired = match upgrade {
                Upgrade::Palace => player.has_palace,
                Upgrade::Swordmaster => player.has_swordmaster,
                Upgrade::HoltzmanShield => player.has_holtzman_shield,
            };
            if acquired {
                return Err(ThumperError::AlreadyAcquired { player: actor, upgrade });
            }
        }

        if let Some(category) = action.category() {
            if !player.has_token(category) {
                return Err(ThumperError::ActionUnavailableForPlayer { player: actor, category });
            }
        }

        if let Some(id) = action.id() {
            if !state.ledger.is_available(id) {
                return Err(ThumperError::ActionAlreadyClaimed { action: id });
            }
        }

        let cost = action.cost();
        Self::require(Resource::Spice, cost.spice, player.spice)?;
        Self::require(Resource::Solari, cost.solari, player.solari)?;
        Self::require(Resource::Garrison, cost.garrison, player.troops_garrison)?;

        self.check_argument(action).map_err(ThumperError::InvalidArgument)
    }

    /// Whether `check` would pass.
    #[must_use]
    pub fn can_perform(&self, action: &Action) -> bool {
        self.check(action).is_ok()
    }

    /// Every concrete action the current player could perform right now.
    ///
    /// Empty once the game has ended.
    #[must_use]
    pub fn legal_actions(&self) -> Vec<Action> {
        let actor = self.state.current_player;
        let count = self.state.player_count();
        ActionId::ALL
            .into_iter()
            .flat_map(|id| Action::expand(id, actor, count))
            .chain(std::iter::once(Action::Pass))
            .filter(|action| self.can_perform(action))
            .collect()
    }

    fn require(resource: Resource, required: u32, available: u32) -> Result<()> {
        if available < required {
            return Err(ThumperError::InsufficientResources {
                resource,
                required,
                available,
            });
        }
        Ok(())
    }

    fn upgrade_for(action: &Action) -> Option<Upgrade> {
        match action {
            Action::ConstructPalace => Some(Upgrade::Palace),
            Action::Swordmaster => Some(Upgrade::Swordmaster),
            Action::HoltzmanShield => Some(Upgrade::HoltzmanShield),
            _ => None,
        }
    }

    fn check_argument(&self, action: &Action) -> std::result::Result<(), ArgumentError> {
        let state = &self.state;
        let player = state.current();
        match *action {
            Action::SellMelange { amount } => match melange_price(amount) {
                Some(_) => Ok(()),
                None => Err(ArgumentError::SellAmount(amount)),
            },
            Action::StoneBurner { target } => match state.players.get(target) {
                None => Err(ArgumentError::TargetOutOfRange(target)),
                Some(_) if target == state.current_player => Err(ArgumentError::SelfTarget),
                Some(victim) if victim.total_troops() == 0 => Err(ArgumentError::TargetHasNoTroops(target)),
                Some(_) => Ok(()),
            },
            Action::HireMercenaries { troops }
            | Action::QuickStrike { troops }
            | Action::TroopTransports { troops }
            | Action::Mobilization { troops } => {
                let ArgumentKind::Troops {
                    produced,
                    deployment_limit,
                } = Self::argument_kind(action)
                else {
                    return Ok(());
                };
                if troops > deployment_limit {
                    return Err(ArgumentError::TroopCount {
                        requested: troops,
                        limit: deployment_limit,
                    });
                }
                let available = player.troops_garrison + produced;
                if troops > available {
                    return Err(ArgumentError::TroopsUnavailable {
                        requested: troops,
                        available,
                    });
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    fn argument_kind(action: &Action) -> ArgumentKind {
        action.id().map_or(ArgumentKind::None, |id| id.spec().argument)
    }

    // === Commands ===

    /// Validate and perform an action for the current player.
    ///
    /// All or nothing: on error the state is untouched.
    pub fn perform(&mut self, action: Action) -> Result<TurnOutcome> {
        let actor = self.state.current_player;
        if let Err(err) = self.check(&action) {
            debug!(player = %actor, ?action, error = %err, "Action rejected");
            return Err(err);
        }

        self.pay(&action);
        self.apply(actor, action);
        self.state.record_action(actor, action);
        debug!(player = %actor, ?action, round = self.state.round, "Action performed");

        Ok(turn::advance(&mut self.state, &self.config, &mut self.token_rng))
    }

    /// Spend the token, claim the identifier and deduct the cost.
    fn pay(&mut self, action: &Action) {
        if let Some(id) = action.id() {
            self.state.ledger.claim(id);
        }
        let cost = action.cost();
        let player = self.state.current_mut();
        if let Some(category) = action.category() {
            player.take_token(category);
        }
        player.spice -= cost.spice;
        player.solari -= cost.solari;
    }

    fn apply(&mut self, actor: PlayerId, action: Action) {
        let spice_in_silo = self.state.spice_in_silo;
        let deployment = Self::argument_kind(&action);

        if let Action::StoneBurner { target } = action {
            let lost = self.state.players[target].lose_troops(STONE_BURNER_KILLS);
            debug!(attacker = %actor, %target, lost, "Stone burner fired");
        }
        if let Action::Swordmaster = action {
            let token = turn::draw_tokens(&mut self.token_rng, 1);
            self.state.players[actor].tokens.extend(token);
        }

        let player = &mut self.state.players[actor];
        match action {
            Action::ConstructPalace => player.has_palace = true,
            Action::Harvester => player.gain_spice(3),
            Action::Refinery => {
                player.gain_spice(2);
                player.gain_solari(1);
            }
            Action::SpiceSilo => player.gain_spice(spice_in_silo),
            Action::SellMelange { amount } => player.gain_solari(melange_price(amount).unwrap_or(0)),
            Action::SecureContract => player.gain_solari(3),
            Action::HoltzmanShield => {
                player.has_holtzman_shield = true;
                player.troops_garrison += 1;
            }
            Action::StoneBurner { .. } => player.influence -= 1,
            Action::HireMercenaries { troops }
            | Action::QuickStrike { troops }
            | Action::TroopTransports { troops } => {
                if let ArgumentKind::Troops { produced, .. } = deployment {
                    player.produce_and_deploy(produced, troops);
                }
            }
            Action::RecruitmentCenter => player.troops_garrison += 1,
            Action::LootVillages => {
                player.gain_spice(1);
                player.gain_solari(4);
                player.influence -= 1;
            }
            Action::Swordmaster => {
                player.has_swordmaster = true;
                player.agents_left += 1;
            }
            Action::Sardaukar => {
                player.influence += 1;
                player.troops_garrison += 4;
            }
            Action::AudienceWithEmperor => player.influence += 2,
            Action::Mobilization { troops } => {
                player.influence += 1;
                player.produce_and_deploy(0, troops);
            }
            Action::SeekAllies => player.influence += 1,
            Action::PoliticalManeuvering { category } => {
                player.gain_solari(1);
                player.pending_tokens.push(category);
            }
            Action::Pass => {}
        }
    }

    pub fn construct_palace(&mut self) -> Result<TurnOutcome> {
        self.perform(Action::ConstructPalace)
    }

    pub fn harvester(&mut self) -> Result<TurnOutcome> {
        self.perform(Action::Harvester)
    }

    pub fn refinery(&mut self) -> Result<TurnOutcome> {
        self.perform(Action::Refinery)
    }

    pub fn spice_silo(&mut self) -> Result<TurnOutcome> {
        self.perform(Action::SpiceSilo)
    }

    /// Sell 1 to 3 spice for 3, 6 or 8 solari.
    pub fn sell_melange(&mut self, amount: u32) -> Result<TurnOutcome> {
        self.perform(Action::SellMelange { amount })
    }

    pub fn secure_contract(&mut self) -> Result<TurnOutcome> {
        self.perform(Action::SecureContract)
    }

    pub fn holtzman_shield(&mut self) -> Result<TurnOutcome> {
        self.perform(Action::HoltzmanShield)
    }

    /// Destroy up to four of `target`'s troops, deployed first.
    pub fn stone_burner(&mut self, target: PlayerId) -> Result<TurnOutcome> {
        self.perform(Action::StoneBurner { target })
    }

    pub fn hire_mercenaries(&mut self, troops: u32) -> Result<TurnOutcome> {
        self.perform(Action::HireMercenaries { troops })
    }

    pub fn quick_strike(&mut self, troops: u32) -> Result<TurnOutcome> {
        self.perform(Action::QuickStrike { troops })
    }

    pub fn recruitment_center(&mut self) -> Result<TurnOutcome> {
        self.perform(Action::RecruitmentCenter)
    }

    pub fn troop_transports(&mut self, troops: u32) -> Result<TurnOutcome> {
        self.perform(Action::TroopTransports { troops })
    }

    pub fn loot_villages(&mut self) -> Result<TurnOutcome> {
        self.perform(Action::LootVillages)
    }

    pub fn swordmaster(&mut self) -> Result<TurnOutcome> {
        self.perform(Action::Swordmaster)
    }

    pub fn sardaukar(&mut self) -> Result<TurnOutcome> {
        self.perform(Action::Sardaukar)
    }

    pub fn audience_with_emperor(&mut self) -> Result<TurnOutcome> {
        self.perform(Action::AudienceWithEmperor)
    }

    pub fn mobilization(&mut self, troops: u32) -> Result<TurnOutcome> {
        self.perform(Action::Mobilization { troops })
    }

    pub fn seek_allies(&mut self) -> Result<TurnOutcome> {
        self.perform(Action::SeekAllies)
    }

    /// Take a token of `category` into next round's pool, plus 1 solari.
    pub fn political_maneuvering(&mut self, category: ActionCategory) -> Result<TurnOutcome> {
        self.perform(Action::PoliticalManeuvering { category })
    }

    /// Spend an agent without doing anything.
    pub fn pass_turn(&mut self) -> Result<TurnOutcome> {
        self.perform(Action::Pass)
    }

    // === Results ===

    /// Seats ordered best first.
    #[must_use]
    pub fn ranked_players(&self) -> Vec<PlayerId> {
        ScoringEngine::ranking(&self.state.players)
    }

    /// The game result, once the game has ended.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.is_game_ended().then(|| ScoringEngine::result(&self.state.players))
    }
}
