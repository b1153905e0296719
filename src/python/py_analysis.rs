//! Analysis bindings for Python.

use pyo3::prelude::*;

use super::py_tiles::{PyHand, PyTile};
use crate::analysis::{self, AnalyzerConfig, HandAnalyzer, WaitingResult};
use crate::tiles::Hand;

/// Python wrapper for WaitingResult.
#[pyclass(name = "WaitingResult")]
#[derive(Clone, Debug)]
pub struct PyWaitingResult(pub WaitingResult);

#[pymethods]
impl PyWaitingResult {
    /// The completing tile.
    #[getter]
    fn tile(&self) -> Option<PyTile> {
        self.0.waiting_tiles.first().copied().map(PyTile)
    }

    #[getter]
    fn waiting_type(&self) -> &'static str {
        self.0.waiting_type()
    }

    #[getter]
    fn waiting_type_japanese(&self) -> &'static str {
        self.0.waiting_type_japanese()
    }

    #[getter]
    fn description(&self) -> String {
        self.0.description.clone()
    }

    #[getter]
    fn remaining_tiles(&self) -> Option<u8> {
        self.0.remaining_tiles
    }

    #[getter]
    fn probability(&self) -> Option<f64> {
        self.0.probability
    }

    fn __repr__(&self) -> String {
        let ids: Vec<_> = self.0.waiting_tiles.iter().map(|t| t.id()).collect();
        format!("WaitingResult({}, {})", ids.join(","), self.0.waiting_type())
    }
}

/// Python wrapper for HandAnalyzer.
#[pyclass(name = "HandAnalyzer")]
#[derive(Clone, Debug)]
pub struct PyHandAnalyzer(pub HandAnalyzer);

#[pymethods]
impl PyHandAnalyzer {
    #[new]
    #[pyo3(signature = (seven_pairs=true, thirteen_orphans=true, copies_per_tile=4))]
    fn new(seven_pairs: bool, thirteen_orphans: bool, copies_per_tile: u8) -> Self {
        let config = AnalyzerConfig::default()
            .with_seven_pairs(seven_pairs)
            .with_thirteen_orphans(thirteen_orphans)
            .with_copies_per_tile(copies_per_tile);
        Self(HandAnalyzer::new(config))
    }

    fn shanten(&self, hand: &PyHand) -> i8 {
        self.0.shanten(&hand.0)
    }

    fn is_winning_hand(&self, hand: &PyHand) -> bool {
        self.0.is_winning_hand(&hand.0)
    }

    /// Status message, e.g. "テンパイ".
    fn status(&self, hand: &PyHand) -> String {
        self.0.status(&hand.0).message_ja()
    }

    /// Waiting tiles for a notation string.
    fn waits(&self, notation: &str) -> PyResult<Vec<PyWaitingResult>> {
        let hand: Hand = notation.parse()?;
        Ok(self
            .0
            .waiting_tiles(&hand)
            .into_iter()
            .map(PyWaitingResult)
            .collect())
    }
}

/// Shanten of a hand in `mpsz` notation.
#[pyfunction]
pub fn shanten(notation: &str) -> PyResult<i8> {
    let hand: Hand = notation.parse()?;
    Ok(analysis::shanten(&hand))
}

/// True if the 14-tile hand is complete.
#[pyfunction]
pub fn is_winning_hand(notation: &str) -> PyResult<bool> {
    let hand: Hand = notation.parse()?;
    Ok(analysis::is_winning_hand(&hand))
}

/// Waiting tile ids for a 13-tile ready hand, in catalogue order.
#[pyfunction]
pub fn waiting_tiles(notation: &str) -> PyResult<Vec<String>> {
    let hand: Hand = notation.parse()?;
    Ok(analysis::calculate_waiting_tiles(&hand)
        .iter()
        .flat_map(|w| w.waiting_tiles.iter().map(|t| t.id()))
        .collect())
}
