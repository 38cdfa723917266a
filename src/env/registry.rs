use std::fmt;

use crate::env::cartpole::CartPole;
use crate::env::errors::EnvError;
use crate::env::pendulum::Pendulum;
use crate::env::traits::Env;

/// Identifier of the environment used when none is named.
pub const DEFAULT_ENV: &str = "CartPole-v1";

pub type EnvConstructor = Box<dyn Fn() -> Result<Box<dyn Env>, EnvError> + Send + Sync>;

/// Ordered table of environment ids and the constructors that build them.
pub struct EnvRegistry {
    entries: Vec<(String, EnvConstructor)>,
}

// Constructors are opaque, so only the ids are shown.
impl fmt::Debug for EnvRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EnvRegistry")
            .field("ids", &self.ids().collect::<Vec<_>>())
            .finish()
    }
}

impl EnvRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registry holding the environments shipped with this crate.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry
            .entries
            .push((DEFAULT_ENV.to_string(), Box::new(make_cartpole) as EnvConstructor));
        registry
            .entries
            .push(("Pendulum-v1".to_string(), Box::new(make_pendulum) as EnvConstructor));
        registry
    }

    pub fn register<F>(&mut self, id: impl Into<String>, make: F) -> Result<(), EnvError>
    where
        F: Fn() -> Result<Box<dyn Env>, EnvError> + Send + Sync + 'static,
    {
        let id = id.into();
        if self.contains(&id) {
            return Err(EnvError::DuplicateId(id));
        }
        self.entries.push((id, Box::new(make)));
        Ok(())
    }

    /// Registered ids, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(id, _)| id.as_str())
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids().any(|known| known == id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Build a fresh instance of `id`.
    pub fn make(&self, id: &str) -> Result<Box<dyn Env>, EnvError> {
        let (_, make) = self
            .entries
            .iter()
            .find(|(known, _)| known == id)
            .ok_or_else(|| EnvError::UnknownEnv(id.to_string()))?;
        make()
    }
}

fn make_cartpole() -> Result<Box<dyn Env>, EnvError> {
    Ok(Box::new(CartPole::new()))
}

fn make_pendulum() -> Result<Box<dyn Env>, EnvError> {
    Ok(Box::new(Pendulum::new()))
}

impl Default for EnvRegistry {
    fn default() -> Self {
        Self::new()
    }
}
