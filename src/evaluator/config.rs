use serde::{Deserialize, Serialize};

use crate::evaluator::errors::EvalError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Rows in the parameter array, one environment step each.
    pub steps: usize,
    /// Factor applied to every row before it becomes an action.
    pub action_scale: f64,
    /// Seed passed to `reset` at the start of every episode.
    pub reset_seed: u64,
    /// Score for an illegal action at step `i` is `penalty / (1 + i)`.
    pub penalty: f64,
    /// Seeds discrete action sampling; `None` draws from OS entropy.
    pub sampling_seed: Option<u64>,
}

impl Default for EvaluatorConfig {
    fn default() -> Self {
        Self {
            steps: 100,
            action_scale: 10.0,
            reset_seed: 0,
            penalty: 1e20,
            sampling_seed: None,
        }
    }
}

impl EvaluatorConfig {
    pub fn from_json(json: &str) -> Result<Self, EvalError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| EvalError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), EvalError> {
        if self.steps == 0 {
            return Err(EvalError::Config("steps must be positive".to_string()));
        }
        if !self.action_scale.is_finite() || self.action_scale <= 0.0 {
            return Err(EvalError::Config(format!(
                "action_scale must be finite and positive, got {}",
                self.action_scale
            )));
        }
        if !self.penalty.is_finite() || self.penalty <= 0.0 {
            return Err(EvalError::Config(format!(
                "penalty must be finite and positive, got {}",
                self.penalty
            )));
        }
        Ok(())
    }
}
