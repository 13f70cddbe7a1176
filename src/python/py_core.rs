//! Core type bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Action, ActionCategory, ActionId, PlayerId, ThumperError};

/// Convert an engine error into a Python `ValueError`.
pub(crate) fn to_py_err(err: ThumperError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn normalize(name: &str) -> String {
    name.chars().filter(char::is_ascii_alphanumeric).map(|c| c.to_ascii_lowercase()).collect()
}

/// Look up a catalog identifier by name, ignoring case, spaces and underscores.
pub(crate) fn parse_action_id(name: &str) -> PyResult<ActionId> {
    let wanted = normalize(name);
    ActionId::ALL
        .into_iter()
        .find(|id| normalize(id.spec().name) == wanted)
        .ok_or_else(|| PyValueError::new_err(format!("unknown action: {name}")))
}

pub(crate) fn parse_category(name: &str) -> PyResult<ActionCategory> {
    ActionCategory::ALL
        .into_iter()
        .find(|c| normalize(&format!("{c:?}")) == normalize(name))
        .ok_or_else(|| PyValueError::new_err(format!("unknown category: {name}")))
}

/// Python wrapper for PlayerId.
#[pyclass(name = "PlayerId")]
#[derive(Clone, Debug)]
pub struct PyPlayerId(pub PlayerId);

#[pymethods]
impl PyPlayerId {
    /// Create a new player ID.
    #[new]
    fn new(id: u8) -> Self {
        Self(PlayerId::new(id))
    }

    /// Get the player index (0-based).
    fn index(&self) -> usize {
        self.0.index()
    }

    fn __repr__(&self) -> String {
        format!("PlayerId({})", self.0 .0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        u64::from(self.0 .0)
    }
}

/// Python wrapper for Action.
///
/// ```python
/// Action("Harvester")
/// Action("Hire Mercenaries", troops=2)
/// Action("stone_burner", target=3)
/// Action("Political Maneuvering", category="military")
/// Action("pass")
/// ```
#[pyclass(name = "Action")]
#[derive(Clone, Debug)]
pub struct PyAction(pub Action);

#[pymethods]
impl PyAction {
    #[new]
    #[pyo3(signature = (name, troops = 0, target = None, amount = 1, category = None))]
    fn new(name: &str, troops: u32, target: Option<u8>, amount: u32, category: Option<&str>) -> PyResult<Self> {
        if normalize(name) == "pass" {
            return Ok(Self(Action::Pass));
        }
        let action = match parse_action_id(name)? {
            ActionId::ConstructPalace => Action::ConstructPalace,
            ActionId::Harvester => Action::Harvester,
            ActionId::Refinery => Action::Refinery,
            ActionId::SpiceSilo => Action::SpiceSilo,
            ActionId::SellMelange => Action::SellMelange { amount },
            ActionId::SecureContract => Action::SecureContract,
            ActionId::HoltzmanShield => Action::HoltzmanShield,
            ActionId::StoneBurner => {
                let target = target.ok_or_else(|| PyValueError::new_err("stone burner needs a target"))?;
                Action::StoneBurner {
                    target: PlayerId::new(target),
                }
            }
            ActionId::HireMercenaries => Action::HireMercenaries { troops },
            ActionId::QuickStrike => Action::QuickStrike { troops },
            ActionId::RecruitmentCenter => Action::RecruitmentCenter,
            ActionId::TroopTransports => Action::TroopTransports { troops },
            ActionId::LootVillages => Action::LootVillages,
            ActionId::Swordmaster => Action::Swordmaster,
            ActionId::Sardaukar => Action::Sardaukar,
            ActionId::AudienceWithEmperor => Action::AudienceWithEmperor,
            ActionId::Mobilization => Action::Mobilization { troops },
            ActionId::SeekAllies => Action::SeekAllies,
            ActionId::PoliticalManeuvering => {
                let category = category.ok_or_else(|| PyValueError::new_err("political maneuvering needs a category"))?;
                Action::PoliticalManeuvering {
                    category: parse_category(category)?,
                }
            }
        };
        Ok(Self(action))
    }

    /// Catalog name, or "Pass".
    #[getter]
    fn name(&self) -> &'static str {
        self.0.id().map_or("Pass", |id| id.spec().name)
    }

    fn __repr__(&self) -> String {
        format!("Action({:?})", self.0)
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};
        let mut hasher = DefaultHasher::new();
        self.0.hash(&mut hasher);
        hasher.finish()
    }
}
