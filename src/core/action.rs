//! Action catalog and concrete actions.
//!
//! The catalog is fixed: every [`ActionId`] names one board space that can be
//! claimed once per round. Each identifier carries its [`ActionSpec`]: the
//! category token it consumes, its nominal cost, and the kind of argument it
//! takes. An [`Action`] is an identifier plus its argument (or `Pass`), and is
//! what front ends submit to the engine.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Category token a player spends to take an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActionCategory {
    Economic,
    Military,
    Political,
}

impl ActionCategory {
    /// All categories, in canonical order.
    pub const ALL: [ActionCategory; 3] = [Self::Economic, Self::Military, Self::Political];
}

/// Globally unique action identifiers. Each is claimable once per round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ActionId {
    // Economic
    ConstructPalace,
    Harvester,
    Refinery,
    SpiceSilo,
    SellMelange,
    SecureContract,
    // Military
    HoltzmanShield,
    StoneBurner,
    HireMercenaries,
    QuickStrike,
    RecruitmentCenter,
    TroopTransports,
    LootVillages,
    // Political
    Swordmaster,
    Sardaukar,
    AudienceWithEmperor,
    Mobilization,
    SeekAllies,
    PoliticalManeuvering,
}

/// Kind of argument an action takes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArgumentKind {
    /// No argument.
    None,
    /// Number of troops to deploy, in `0..=deployment_limit`.
    Troops {
        /// Troops added to the garrison before deploying.
        produced: u32,
        /// Maximum troops that can be deployed.
        deployment_limit: u32,
    },
    /// Index of another player.
    Target,
    /// Amount of spice to sell, in `1..=3`.
    SpiceAmount,
    /// Category of the token to gain.
    Category,
}

/// Static description of a catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ActionSpec {
    /// The identifier.
    pub id: ActionId,
    /// Human-readable name.
    pub name: &'static str,
    /// Category token the action consumes.
    pub category: ActionCategory,
    /// Nominal spice cost (for `SellMelange`, the minimum).
    pub spice: u32,
    /// Nominal solari cost.
    pub solari: u32,
    /// Minimum garrison troops required.
    pub garrison: u32,
    /// Argument the action takes.
    pub argument: ArgumentKind,
}

const fn spec(
    id: ActionId,
    name: &'static str,
    category: ActionCategory,
    spice: u32,
    solari: u32,
    argument: ArgumentKind,
) -> ActionSpec {
    ActionSpec {
        id,
        name,
        category,
        spice,
        solari,
        garrison: 0,
        argument,
    }
}

const fn troops(produced: u32, deployment_limit: u32) -> ArgumentKind {
    ArgumentKind::Troops {
        produced,
        deployment_limit,
    }
}

impl ActionId {
    /// The full catalog, in canonical order.
    pub const ALL: [ActionId; 19] = [
        Self::ConstructPalace,
        Self::Harvester,
        Self::Refinery,
        Self::SpiceSilo,
        Self::SellMelange,
        Self::SecureContract,
        Self::HoltzmanShield,
        Self::StoneBurner,
        Self::HireMercenaries,
        Self::QuickStrike,
        Self::RecruitmentCenter,
        Self::TroopTransports,
        Self::LootVillages,
        Self::Swordmaster,
        Self::Sardaukar,
        Self::AudienceWithEmperor,
        Self::Mobilization,
        Self::SeekAllies,
        Self::PoliticalManeuvering,
    ];

    /// Catalog entry for this identifier.
    #[must_use]
    pub const fn spec(self) -> ActionSpec {
        use ActionCategory::{Economic, Military, Political};
        use ArgumentKind::{Category, SpiceAmount, Target};
        const NONE: ArgumentKind = ArgumentKind::None;

        match self {
            Self::ConstructPalace => spec(self, "Construct Palace", Economic, 0, 6, NONE),
            Self::Harvester => spec(self, "Harvester", Economic, 0, 0, NONE),
            Self::Refinery => spec(self, "Refinery", Economic, 0, 0, NONE),
            Self::SpiceSilo => spec(self, "Spice Silo", Economic, 0, 0, NONE),
            Self::SellMelange => spec(self, "Sell Melange", Economic, 1, 0, SpiceAmount),
            Self::SecureContract => spec(self, "Secure Contract", Economic, 0, 0, NONE),
            Self::HoltzmanShield => spec(self, "Holtzman Shield", Military, 3, 0, NONE),
            Self::StoneBurner => spec(self, "Stone Burner", Military, 4, 0, Target),
            Self::HireMercenaries => spec(self, "Hire Mercenaries", Military, 0, 2, troops(2, 3)),
            Self::QuickStrike => spec(self, "Quick Strike", Military, 0, 0, troops(1, 2)),
            Self::RecruitmentCenter => spec(self, "Recruitment Center", Military, 0, 0, NONE),
            Self::TroopTransports => ActionSpec {
                garrison: 1,
                ..spec(self, "Troop Transports", Military, 0, 0, troops(0, 4))
            },
            Self::LootVillages => spec(self, "Loot Villages", Military, 0, 0, NONE),
            Self::Swordmaster => spec(self, "Swordmaster", Political, 0, 8, NONE),
            Self::Sardaukar => spec(self, "Sardaukar", Political, 4, 0, NONE),
            Self::AudienceWithEmperor => spec(self, "Audience with Emperor", Political, 3, 0, NONE),
            Self::Mobilization => ActionSpec {
                garrison: 1,
                ..spec(self, "Mobilization", Political, 0, 2, troops(0, 5))
            },
            Self::SeekAllies => spec(self, "Seek Allies", Political, 0, 3, NONE),
            Self::PoliticalManeuvering => spec(self, "Political Maneuvering", Political, 0, 0, Category),
        }
    }

    /// Category token this action consumes.
    #[must_use]
    pub const fn category(self) -> ActionCategory {
        self.spec().category
    }
}

impl std::fmt::Display for ActionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.spec().name)
    }
}

/// Solari received for selling 1, 2 or 3 spice.
#[must_use]
pub const fn melange_price(amount: u32) -> Option<u32> {
    match amount {
        1 => Some(3),
        2 => Some(6),
        3 => Some(8),
        _ => None,
    }
}

/// A concrete action, ready to submit to the engine.
///
/// ## Example
///
/// ```
/// use thumper::core::{Action, ActionCategory, ActionId, PlayerId};
///
/// let deploy = Action::HireMercenaries { troops: 3 };
/// assert_eq!(deploy.id(), Some(ActionId::HireMercenaries));
/// assert_eq!(deploy.category(), Some(ActionCategory::Military));
///
/// let attack = Action::StoneBurner { target: PlayerId::new(2) };
/// assert_eq!(attack.cost().spice, 4);
///
/// assert_eq!(Action::Pass.id(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    ConstructPalace,
    Harvester,
    Refinery,
    SpiceSilo,
    SellMelange { amount: u32 },
    SecureContract,
    HoltzmanShield,
    StoneBurner { target: PlayerId },
    HireMercenaries { troops: u32 },
    QuickStrike { troops: u32 },
    RecruitmentCenter,
    TroopTransports { troops: u32 },
    LootVillages,
    Swordmaster,
    Sardaukar,
    AudienceWithEmperor,
    Mobilization { troops: u32 },
    SeekAllies,
    PoliticalManeuvering { category: ActionCategory },
    /// Take no action; only advances the turn.
    Pass,
}

/// Spice and solari an action costs.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cost {
    pub spice: u32,
    pub solari: u32,
    /// Minimum garrison troops held (not consumed).
    pub garrison: u32,
}

impl Action {
    /// The catalog identifier, or `None` for `Pass`.
    #[must_use]
    pub const fn id(&self) -> Option<ActionId> {
        Some(match self {
            Self::ConstructPalace => ActionId::ConstructPalace,
            Self::Harvester => ActionId::Harvester,
            Self::Refinery => ActionId::Refinery,
            Self::SpiceSilo => ActionId::SpiceSilo,
            Self::SellMelange { .. } => ActionId::SellMelange,
            Self::SecureContract => ActionId::SecureContract,
            Self::HoltzmanShield => ActionId::HoltzmanShield,
            Self::StoneBurner { .. } => ActionId::StoneBurner,
            Self::HireMercenaries { .. } => ActionId::HireMercenaries,
            Self::QuickStrike { .. } => ActionId::QuickStrike,
            Self::RecruitmentCenter => ActionId::RecruitmentCenter,
            Self::TroopTransports { .. } => ActionId::TroopTransports,
            Self::LootVillages => ActionId::LootVillages,
            Self::Swordmaster => ActionId::Swordmaster,
            Self::Sardaukar => ActionId::Sardaukar,
            Self::AudienceWithEmperor => ActionId::AudienceWithEmperor,
            Self::Mobilization { .. } => ActionId::Mobilization,
            Self::SeekAllies => ActionId::SeekAllies,
            Self::PoliticalManeuvering { .. } => ActionId::PoliticalManeuvering,
            Self::Pass => return None,
        })
    }

    /// The category token consumed, or `None` for `Pass`.
    #[must_use]
    pub const fn category(&self) -> Option<ActionCategory> {
        match self.id() {
            Some(id) => Some(id.category()),
            None => None,
        }
    }

    /// Cost of this concrete action.
    ///
    /// `SellMelange` costs exactly the spice being sold.
    #[must_use]
    pub fn cost(&self) -> Cost {
        if let Self::SellMelange { amount } = *self {
            return Cost {
                spice: amount,
                ..Cost::default()
            };
        }
        self.id()
            .map(|id| {
                let spec = id.spec();
                Cost {
                    spice: spec.spice,
                    solari: spec.solari,
                    garrison: spec.garrison,
                }
            })
            .unwrap_or_default()
    }

    /// Every concrete action for an identifier, with arguments expanded.
    ///
    /// Troop actions expand to `0..=deployment_limit`, targeted actions to
    /// every other seat of a `player_count`-player game, sell to `1..=3`.
    #[must_use]
    pub fn expand(id: ActionId, actor: PlayerId, player_count: usize) -> Vec<Action> {
        match id.spec().argument {
            ArgumentKind::None => Self::without_argument(id).into_iter().collect(),
            ArgumentKind::Troops { deployment_limit, .. } => (0..=deployment_limit)
                .filter_map(|troops| Self::with_troops(id, troops))
                .collect(),
            ArgumentKind::Target => PlayerId::all(player_count)
                .filter(|&target| target != actor)
                .map(|target| Self::StoneBurner { target })
                .collect(),
            ArgumentKind::SpiceAmount => (1..=3).map(|amount| Self::SellMelange { amount }).collect(),
            ArgumentKind::Category => ActionCategory::ALL
                .iter()
                .map(|&category| Self::PoliticalManeuvering { category })
                .collect(),
        }
    }

    fn with_troops(id: ActionId, troops: u32) -> Option<Action> {
        Some(match id {
            ActionId::HireMercenaries => Self::HireMercenaries { troops },
            ActionId::QuickStrike => Self::QuickStrike { troops },
            ActionId::TroopTransports => Self::TroopTransports { troops },
            ActionId::Mobilization => Self::Mobilization { troops },
            ActionId::ConstructPalace
            | ActionId::Harvester
            | ActionId::Refinery
            | ActionId::SpiceSilo
            | ActionId::SellMelange
            | ActionId::SecureContract
            | ActionId::HoltzmanShield
            | ActionId::StoneBurner
            | ActionId::RecruitmentCenter
            | ActionId::LootVillages
            | ActionId::Swordmaster
            | ActionId::Sardaukar
            | ActionId::AudienceWithEmperor
            | ActionId::SeekAllies
            | ActionId::PoliticalManeuvering => return None,
        })
    }

    fn without_argument(id: ActionId) -> Option<Action> {
        Some(match id {
            ActionId::ConstructPalace => Self::ConstructPalace,
            ActionId::Harvester => Self::Harvester,
            ActionId::Refinery => Self::Refinery,
            ActionId::SpiceSilo => Self::SpiceSilo,
            ActionId::SecureContract => Self::SecureContract,
            ActionId::HoltzmanShield => Self::HoltzmanShield,
            ActionId::RecruitmentCenter => Self::RecruitmentCenter,
            ActionId::LootVillages => Self::LootVillages,
            ActionId::Swordmaster => Self::Swordmaster,
            ActionId::Sardaukar => Self::Sardaukar,
            ActionId::AudienceWithEmperor => Self::AudienceWithEmperor,
            ActionId::SeekAllies => Self::SeekAllies,
            ActionId::SellMelange
            | ActionId::StoneBurner
            | ActionId::HireMercenaries
            | ActionId::QuickStrike
            | ActionId::TroopTransports
            | ActionId::Mobilization
            | ActionId::PoliticalManeuvering => return None,
        })
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Round in which the action was taken.
    pub round: u32,

    /// Sequence number within the game.
    pub sequence: u32,
}
