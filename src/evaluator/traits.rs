use ndarray::{ArrayD, ArrayViewD, IxDyn};
use rand::Rng;

use crate::evaluator::errors::EvalError;

/// Shape of the array an optimizer proposes on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parametrization {
    shape: Vec<usize>,
}

impl Parametrization {
    /// `steps` rows, each shaped like `dims`.
    pub fn new(steps: usize, dims: &[usize]) -> Self {
        let mut shape = Vec::with_capacity(dims.len() + 1);
        shape.push(steps);
        shape.extend_from_slice(dims);
        Self { shape }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Number of scalars in one candidate.
    pub fn len(&self) -> usize {
        self.shape.iter().product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn zeros(&self) -> ArrayD<f64> {
        ArrayD::zeros(IxDyn(&self.shape))
    }

    /// A candidate drawn uniformly from `[-1, 1]` per element.
    pub fn sample<R: Rng>(&self, rng: &mut R) -> ArrayD<f64> {
        ArrayD::from_shape_fn(IxDyn(&self.shape), |_| rng.random_range(-1.0..=1.0))
    }

    /// Rebuild a candidate from its row-major elements.
    pub fn from_flat(&self, values: Vec<f64>) -> Result<ArrayD<f64>, EvalError> {
        let found = values.len();
        ArrayD::from_shape_vec(IxDyn(&self.shape), values).map_err(|_| EvalError::ShapeMismatch {
            expected: self.shape.clone(),
            found: vec![found],
        })
    }

    pub(crate) fn check(&self, x: &ArrayViewD<'_, f64>) -> Result<(), EvalError> {
        if x.shape() != self.shape.as_slice() {
            return Err(EvalError::ShapeMismatch {
                expected: self.shape.clone(),
                found: x.shape().to_vec(),
            });
        }
        Ok(())
    }
}

/// A black-box objective: a declared parameter shape and a cost to minimize.
pub trait ExperimentFunction {
    fn parametrization(&self) -> &Parametrization;

    fn evaluate(&mut self, x: ArrayViewD<'_, f64>) -> Result<f64, EvalError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn shape_prepends_steps() {
        let p = Parametrization::new(100, &[3]);
        assert_eq!(p.shape(), &[100, 3]);
        assert_eq!(p.len(), 300);
        assert_eq!(Parametrization::new(100, &[]).shape(), &[100]);
    }

    #[test]
    fn samples_are_bounded() {
        let p = Parametrization::new(10, &[2, 2]);
        let x = p.sample(&mut StdRng::seed_from_u64(5));
        assert_eq!(x.shape(), p.shape());
        assert!(x.iter().all(|v| (-1.0..=1.0).contains(v)));
    }

    #[test]
    fn from_flat_checks_length() {
        let p = Parametrization::new(4, &[2]);
        assert_eq!(p.from_flat(vec![0.0; 8]).unwrap().shape(), &[4, 2]);
        assert!(matches!(
            p.from_flat(vec![0.0; 7]),
            Err(EvalError::ShapeMismatch { .. })
        ));
    }
}
