use crate::env::errors::EnvError;
use crate::env::types::{Action, Space, Transition};

/// A stateful simulator driven one action at a time.
///
/// Implementations own their random state. `reset(Some(seed))` must make the
/// following episode reproducible; `sample_action` draws from a source that is
/// independent of the episode seed.
pub trait Env: Send {
    /// The space every action passed to [`Env::step`] is drawn from.
    fn action_space(&self) -> &Space;

    /// Draw one random action from the action space.
    fn sample_action(&mut self) -> Result<Action, EnvError>;

    /// Start a new episode and return the initial observation.
    fn reset(&mut self, seed: Option<u64>) -> Result<Vec<f64>, EnvError>;

    /// Advance the episode by one action.
    ///
    /// Actions outside the action space fail with [`EnvError::IllegalAction`].
    fn step(&mut self, action: &Action) -> Result<Transition, EnvError>;

    fn close(&mut self) -> Result<(), EnvError> {
        Ok(())
    }
}
