//! Python bindings for the Thumper engine.
//!
//! ```python
//! import thumper
//!
//! game = thumper.ThumperGame(seed=7)
//! while not game.game_ended:
//!     action = game.legal_actions()[0]
//!     game.perform(action)
//!
//! print(game.winners())
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

/// thumper: rules engine for a four-player worker-placement game.
#[pymodule]
fn thumper(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPlayerId>()?;
    m.add_class::<PyAction>()?;
    m.add_class::<PyThumperGame>()?;
    Ok(())
}
