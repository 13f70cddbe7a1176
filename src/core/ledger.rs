//! Round-scoped availability of action identifiers.
//!
//! Every identifier in the catalog can be claimed by exactly one player per
//! round. The ledger starts each round full and shrinks as actions are taken.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use super::action::ActionId;

/// Unclaimed action identifiers for the current round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionLedger {
    available: FxHashSet<ActionId>,
}

impl Default for ActionLedger {
    fn default() -> Self {
        Self::full()
    }
}

impl ActionLedger {
    /// A ledger with the whole catalog available.
    #[must_use]
    pub fn full() -> Self {
        Self {
            available: ActionId::ALL.into_iter().collect(),
        }
    }

    /// Make the whole catalog available again.
    pub fn reset(&mut self) {
        self.available.extend(ActionId::ALL);
    }

    /// Check whether an identifier is still unclaimed.
    #[must_use]
    pub fn is_available(&self, id: ActionId) -> bool {
        self.available.contains(&id)
    }

    /// Claim an identifier for the rest of the round.
    ///
    /// Returns false if it was already claimed.
    pub fn claim(&mut self, id: ActionId) -> bool {
        self.available.remove(&id)
    }

    /// Unclaimed identifiers, in catalog order.
    #[must_use]
    pub fn available(&self) -> Vec<ActionId> {
        ActionId::ALL.into_iter().filter(|id| self.is_available(*id)).collect()
    }

    /// Number of unclaimed identifiers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.available.len()
    }

    /// Whether every identifier has been claimed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.available.is_empty()
    }
}
