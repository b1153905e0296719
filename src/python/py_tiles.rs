//! Tile and hand bindings for Python.

use pyo3::prelude::*;

use crate::tiles::{Hand, Tile};

/// Python wrapper for Tile.
#[pyclass(name = "Tile")]
#[derive(Clone, Debug)]
pub struct PyTile(pub Tile);

#[pymethods]
impl PyTile {
    /// Parse a tile from its id, e.g. `"man-1"` or `"honor-east"`.
    #[new]
    fn new(id: &str) -> PyResult<Self> {
        Ok(Self(id.parse::<Tile>()?))
    }

    #[getter]
    fn id(&self) -> String {
        self.0.id()
    }

    #[getter]
    fn suit(&self) -> &'static str {
        self.0.suit().as_str()
    }

    #[getter]
    fn value(&self) -> String {
        self.0.rank().to_string()
    }

    /// Display name, e.g. "Characters 1".
    fn name(&self) -> String {
        self.0.name()
    }

    fn __repr__(&self) -> String {
        format!("Tile({})", self.0.id())
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.index() as u64
    }
}

/// Python wrapper for Hand.
#[pyclass(name = "Hand")]
#[derive(Clone, Debug)]
pub struct PyHand(pub Hand);

#[pymethods]
impl PyHand {
    /// Parse a hand from `mpsz` notation.
    #[new]
    fn new(notation: &str) -> PyResult<Self> {
        Ok(Self(notation.parse::<Hand>()?))
    }

    fn tiles(&self) -> Vec<PyTile> {
        self.0.iter().copied().map(PyTile).collect()
    }

    /// Sorted copy.
    fn sorted(&self) -> Self {
        Self(self.0.sorted())
    }

    /// Append a tile, refusing a fifth copy.
    fn add(&mut self, tile: &PyTile) -> PyResult<()> {
        self.0.try_push(tile.0)?;
        Ok(())
    }

    fn __len__(&self) -> usize {
        self.0.len()
    }

    fn __str__(&self) -> String {
        self.0.to_string()
    }

    fn __repr__(&self) -> String {
        format!("Hand({})", self.0)
    }
}
