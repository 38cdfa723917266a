use std::mem;

use ndarray::{ArrayD, IxDyn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::env::errors::EnvError;

/// Outcome of a single `step`: observation, reward, done, info.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub observation: Vec<f64>,
    pub reward: f64,
    pub done: bool,
    pub info: serde_json::Value, // Keep it simple for now
}

impl Transition {
    pub fn new(observation: Vec<f64>, reward: f64, done: bool) -> Self {
        Self {
            observation,
            reward,
            done,
            info: serde_json::Value::Null,
        }
    }
}

/// A concrete action handed to [`Env::step`](crate::env::Env::step).
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Index into a discrete action space.
    Discrete(usize),
    /// Real-valued action with the shape of the continuous space.
    Continuous(ArrayD<f64>),
}

impl Action {
    /// Bytes one action occupies: the inline enum plus any heap payload.
    ///
    /// Two samples from a fixed-shape space always report the same footprint.
    pub fn footprint(&self) -> usize {
        let inline = mem::size_of::<Self>();
        match self {
            Action::Discrete(_) => inline,
            Action::Continuous(values) => {
                inline
                    + values.len() * mem::size_of::<f64>()
                    + 2 * values.ndim() * mem::size_of::<usize>()
            }
        }
    }

    pub fn shape(&self) -> &[usize] {
        match self {
            Action::Discrete(_) => &[],
            Action::Continuous(values) => values.shape(),
        }
    }
}

/// The set of actions an environment accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Space {
    /// `n` actions, indexed `0..n`.
    Discrete(usize),
    /// Every element bounded by `[low, high]`.
    Box {
        low: f64,
        high: f64,
        shape: Vec<usize>,
    },
}

impl Space {
    pub fn sample<R: Rng>(&self, rng: &mut R) -> Result<Action, EnvError> {
        match self {
            Space::Discrete(0) => Err(EnvError::UnsupportedSpace(
                "discrete space with no actions".to_string(),
            )),
            Space::Discrete(n) => Ok(Action::Discrete(rng.random_range(0..*n))),
            Space::Box { low, high, shape } => {
                if !low.is_finite() || !high.is_finite() || low > high {
                    return Err(EnvError::UnsupportedSpace(format!(
                        "box bounds [{low}, {high}] cannot be sampled"
                    )));
                }
                let values = ArrayD::from_shape_fn(IxDyn(shape), |_| rng.random_range(*low..=*high));
                Ok(Action::Continuous(values))
            }
        }
    }

    pub fn contains(&self, action: &Action) -> bool {
        match (self, action) {
            (Space::Discrete(n), Action::Discrete(index)) => index < n,
            (Space::Box { low, high, shape }, Action::Continuous(values)) => {
                values.shape() == shape.as_slice()
                    && values.iter().all(|v| (*low..=*high).contains(v))
            }
            _ => false,
        }
    }
}
