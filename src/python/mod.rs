//! Python bindings.
//!
//! Hands cross the boundary as `mpsz` notation strings.
//!
//! # Quick Start
//!
//! ```python
//! import mahjong_tenpai as mt
//!
//! mt.shanten("123m456p789s1122z")          # 0
//! mt.waiting_tiles("123m456p789s1122z")    # ["honor-east", "honor-south"]
//!
//! analyzer = mt.HandAnalyzer(seven_pairs=False)
//! for wait in analyzer.waits("1112345678999m"):
//!     print(wait.tile, wait.remaining_tiles)
//! ```

use pyo3::prelude::*;

mod py_analysis;
mod py_tiles;

pub use py_analysis::*;
pub use py_tiles::*;

/// mahjong_tenpai: shanten and waiting-tile analysis.
#[pymodule]
fn mahjong_tenpai(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Tile types
    m.add_class::<PyTile>()?;
    m.add_class::<PyHand>()?;

    // Analysis types
    m.add_class::<PyHandAnalyzer>()?;
    m.add_class::<PyWaitingResult>()?;

    // Functions
    m.add_function(wrap_pyfunction!(shanten, m)?)?;
    m.add_function(wrap_pyfunction!(is_winning_hand, m)?)?;
    m.add_function(wrap_pyfunction!(waiting_tiles, m)?)?;

    Ok(())
}
