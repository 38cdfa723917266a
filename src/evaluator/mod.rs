//! Scoring of parameter arrays as multi-step episodes.
//!
//! [`GymMulti`] owns one environment. Every call to [`GymMulti::score`] resets
//! it with a fixed seed, replays the rows of the proposed array as actions and
//! returns the negated total reward, so that maximizing reward becomes a
//! minimization problem.

mod config;
mod errors;
mod softmax;
mod traits;

use std::fmt;

use ndarray::{ArrayViewD, Axis};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, trace};

use crate::catalog::{self, Catalog};
use crate::env::{Action, Env, EnvError, EnvRegistry, Space};

pub use config::EvaluatorConfig;
pub use errors::EvalError;
pub use softmax::{sample_categorical, softmax};
pub use traits::{ExperimentFunction, Parametrization};

/// How rows of the parameter array become actions. Fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionSpace {
    /// Rows are logits over this many actions.
    Discrete(usize),
    /// Rows are used as actions of this shape.
    Continuous(Vec<usize>),
}

impl ActionSpace {
    /// Classify a space from one action sampled out of it.
    pub fn classify(sample: &Action, space: &Space) -> Result<Self, EvalError> {
        match (sample, space) {
            (Action::Discrete(_), Space::Discrete(n)) => Ok(ActionSpace::Discrete(*n)),
            (Action::Discrete(_), space) => Err(EvalError::SpaceMismatch(format!(
                "discrete sample from {space:?}"
            ))),
            (Action::Continuous(values), _) => Ok(ActionSpace::Continuous(values.shape().to_vec())),
        }
    }

    /// Shape of one row of the parameter array.
    pub fn dims(&self) -> Vec<usize> {
        match self {
            ActionSpace::Discrete(n) => vec![*n],
            ActionSpace::Continuous(shape) => shape.clone(),
        }
    }
}

pub struct GymMulti {
    env_id: String,
    env: Box<dyn Env>,
    action_space: ActionSpace,
    parametrization: Parametrization,
    catalog: Catalog,
    config: EvaluatorConfig,
    rng: StdRng,
}

impl fmt::Debug for GymMulti {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GymMulti")
            .field("env_id", &self.env_id)
            .field("action_space", &self.action_space)
            .field("parametrization", &self.parametrization)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl GymMulti {
    /// Build an evaluator on `name`, or on the catalog's fallback when `None`.
    ///
    /// Fails immediately if the environment cannot be built or sampled.
    pub fn new(
        registry: &EnvRegistry,
        name: Option<&str>,
        catalog: Catalog,
        config: EvaluatorConfig,
    ) -> Result<Self, EvalError> {
        config.validate()?;
        let env_id = name.unwrap_or_else(|| catalog.fallback()).to_string();
        let mut env = registry.make(&env_id)?;
        let sample = env.sample_action()?;
        let action_space = ActionSpace::classify(&sample, env.action_space())?;
        let parametrization = Parametrization::new(config.steps, &action_space.dims());
        let rng = match config.sampling_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        debug!(env = %env_id, ?action_space, shape = ?parametrization.shape(), "evaluator ready");

        Ok(Self {
            env_id,
            env,
            action_space,
            parametrization,
            catalog,
            config,
            rng,
        })
    }

    /// Evaluator over the built-in registry, the process-wide catalog and
    /// default settings.
    pub fn with_defaults(name: Option<&str>) -> Result<Self, EvalError> {
        Self::new(
            &EnvRegistry::builtin(),
            name,
            catalog::get_or_init_catalog().clone(),
            EvaluatorConfig::default(),
        )
    }

    pub fn env_id(&self) -> &str {
        &self.env_id
    }

    pub fn env_names(&self) -> &[String] {
        self.catalog.names()
    }

    pub fn action_space(&self) -> &ActionSpace {
        &self.action_space
    }

    pub fn parametrization(&self) -> &Parametrization {
        &self.parametrization
    }

    pub fn config(&self) -> &EvaluatorConfig {
        &self.config
    }

    /// Play one episode driven by `x` and return its cost.
    ///
    /// An illegal action at step `i` ends the episode with
    /// `penalty / (1 + i)`, so later failures score better than early ones.
    /// Every other error is returned unchanged.
    pub fn score(&mut self, x: ArrayViewD<'_, f64>) -> Result<f64, EvalError> {
        self.parametrization.check(&x)?;
        self.env.reset(Some(self.config.reset_seed))?;

        let mut reward = 0.0;
        let mut steps = 0;
        for (i, row) in x.outer_iter().enumerate() {
            let action = self.action_for(i, row)?;
            let transition = match self.env.step(&action) {
                Ok(transition) => transition,
                Err(EnvError::IllegalAction(reason)) => {
                    let penalty = self.config.penalty / (1.0 + i as f64);
                    trace!(env = %self.env_id, step = i, %reason, penalty, "illegal action");
                    return Ok(penalty);
                }
                Err(e) => return Err(e.into()),
            };
            reward += transition.reward;
            steps = i + 1;
            if transition.done {
                break;
            }
        }

        trace!(env = %self.env_id, steps, reward, "episode finished");
        Ok(-reward)
    }

    fn action_for(&mut self, step: usize, row: ArrayViewD<'_, f64>) -> Result<Action, EvalError> {
        let mut scaled = row.mapv(|v| v * self.config.action_scale);
        if scaled.ndim() == 0 {
            scaled = scaled.insert_axis(Axis(0));
        }
        match self.action_space {
            ActionSpace::Discrete(_) => {
                let logits: Vec<f64> = scaled.iter().copied().collect();
                let probabilities = softmax(&logits);
                sample_categorical(&probabilities, &mut self.rng)
                    .map(Action::Discrete)
                    .ok_or(EvalError::InvalidLogits { step })
            }
            ActionSpace::Continuous(_) => Ok(Action::Continuous(scaled)),
        }
    }
}

impl ExperimentFunction for GymMulti {
    fn parametrization(&self) -> &Parametrization {
        &self.parametrization
    }

    fn evaluate(&mut self, x: ArrayViewD<'_, f64>) -> Result<f64, EvalError> {
        self.score(x)
    }
}

impl Drop for GymMulti {
    fn drop(&mut self) {
        if let Err(e) = self.env.close() {
            debug!(env = %self.env_id, error = %e, "failed to close environment");
        }
    }
}
