pub mod catalog;
pub mod env;
pub mod evaluator;
#[cfg(feature = "python")]
mod python;

pub use catalog::{Catalog, CatalogConfig};
pub use env::{Action, DEFAULT_ENV, Env, EnvError, EnvRegistry, Space, Transition};
pub use evaluator::{
    ActionSpace, EvalError, EvaluatorConfig, ExperimentFunction, GymMulti, Parametrization,
};
