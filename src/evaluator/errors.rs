use thiserror::Error;

use crate::env::EnvError;

#[derive(Error, Debug)]
pub enum EvalError {
    #[error(transparent)]
    Env(#[from] EnvError),

    #[error("parameter shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: Vec<usize>,
        found: Vec<usize>,
    },

    #[error("sampled action does not match the declared space: {0}")]
    SpaceMismatch(String),

    #[error("step {step} produced logits that are not a distribution")]
    InvalidLogits { step: usize },

    #[error("invalid evaluator config: {0}")]
    Config(String),
}
