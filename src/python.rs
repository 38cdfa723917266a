use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::catalog;
use crate::evaluator::{EvalError, GymMulti};

impl From<EvalError> for PyErr {
    fn from(err: EvalError) -> Self {
        match err {
            EvalError::ShapeMismatch { .. } | EvalError::Config(_) => {
                PyValueError::new_err(err.to_string())
            }
            _ => PyRuntimeError::new_err(err.to_string()),
        }
    }
}

/// Multi-step environment objective. `score` takes the flattened array.
#[pyclass(name = "GymMulti", unsendable)]
struct PyGymMulti {
    inner: GymMulti,
}

#[pymethods]
impl PyGymMulti {
    #[new]
    #[pyo3(signature = (name=None))]
    fn new(name: Option<&str>) -> PyResult<Self> {
        Ok(Self {
            inner: GymMulti::with_defaults(name)?,
        })
    }

    #[getter]
    fn shape(&self) -> Vec<usize> {
        self.inner.parametrization().shape().to_vec()
    }

    fn env_names(&self) -> Vec<String> {
        self.inner.env_names().to_vec()
    }

    /// Cost of one candidate given in row-major order.
    fn score(&mut self, values: Vec<f64>) -> PyResult<f64> {
        let x = self.inner.parametrization().from_flat(values)?;
        Ok(self.inner.score(x.view())?)
    }
}

/// Identifiers of every usable environment, fallback first.
#[pyfunction]
fn env_names() -> Vec<String> {
    catalog::get_or_init_catalog().names().to_vec()
}

/// The name of this function must match the lib.name in Cargo.toml
#[pymodule]
fn gymopt(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(env_names, m)?)?;
    m.add_class::<PyGymMulti>()?;
    Ok(())
}
