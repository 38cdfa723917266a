#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use gymopt::{Action, Env, EnvError, Space, Transition};
use ndarray::{ArrayD, IxDyn};

/// Continuous environment that counts `step` calls and ends after `done_at`
/// steps. Reward is the first action element plus the episode's seed, so
/// scores are deterministic.
pub struct CountingEnv {
    pub space: Space,
    pub steps: Arc<AtomicUsize>,
    pub done_at: usize,
    episode_steps: usize,
    seed: f64,
}

impl CountingEnv {
    pub fn new(dims: Vec<usize>, done_at: usize, steps: Arc<AtomicUsize>) -> Self {
        Self {
            space: Space::Box {
                low: -100.0,
                high: 100.0,
                shape: dims,
            },
            steps,
            done_at,
            episode_steps: 0,
            seed: 0.0,
        }
    }
}

impl Env for CountingEnv {
    fn action_space(&self) -> &Space {
        &self.space
    }

    fn sample_action(&mut self) -> Result<Action, EnvError> {
        let Space::Box { shape, .. } = &self.space else {
            unreachable!()
        };
        Ok(Action::Continuous(ArrayD::zeros(IxDyn(shape))))
    }

    fn reset(&mut self, seed: Option<u64>) -> Result<Vec<f64>, EnvError> {
        self.seed = seed.unwrap_or(0) as f64;
        self.episode_steps = 0;
        Ok(vec![0.0])
    }

    fn step(&mut self, action: &Action) -> Result<Transition, EnvError> {
        self.steps.fetch_add(1, Ordering::SeqCst);
        self.episode_steps += 1;
        let first = match action {
            Action::Continuous(values) => values.iter().copied().next().unwrap_or(0.0),
            Action::Discrete(index) => *index as f64,
        };
        Ok(Transition::new(
            vec![first],
            first + self.seed,
            self.episode_steps >= self.done_at,
        ))
    }
}

/// Rejects every action from step `illegal_at` on.
pub struct IllegalAtEnv {
    pub space: Space,
    pub illegal_at: usize,
    episode_steps: usize,
}

impl IllegalAtEnv {
    pub fn new(illegal_at: usize) -> Self {
        Self {
            space: Space::Discrete(3),
            illegal_at,
            episode_steps: 0,
        }
    }
}

impl Env for IllegalAtEnv {
    fn action_space(&self) -> &Space {
        &self.space
    }

    fn sample_action(&mut self) -> Result<Action, EnvError> {
        Ok(Action::Discrete(0))
    }

    fn reset(&mut self, _seed: Option<u64>) -> Result<Vec<f64>, EnvError> {
        self.episode_steps = 0;
        Ok(vec![])
    }

    fn step(&mut self, action: &Action) -> Result<Transition, EnvError> {
        if self.episode_steps >= self.illegal_at {
            return Err(EnvError::IllegalAction(format!("{action:?}")));
        }
        self.episode_steps += 1;
        Ok(Transition::new(vec![], 1.0, false))
    }
}

/// Fails in `step` with an error that is not an illegal action.
pub struct FaultyEnv {
    space: Space,
}

impl FaultyEnv {
    pub fn new() -> Self {
        Self {
            space: Space::Box {
                low: -1.0,
                high: 1.0,
                shape: vec![2],
            },
        }
    }
}

impl Env for FaultyEnv {
    fn action_space(&self) -> &Space {
        &self.space
    }

    fn sample_action(&mut self) -> Result<Action, EnvError> {
        Ok(Action::Continuous(ArrayD::zeros(IxDyn(&[2]))))
    }

    fn reset(&mut self, _seed: Option<u64>) -> Result<Vec<f64>, EnvError> {
        Ok(vec![])
    }

    fn step(&mut self, _action: &Action) -> Result<Transition, EnvError> {
        Err(EnvError::EnvError("physics diverged".into()))
    }
}

/// Every action sample fails.
pub struct BrokenSampleEnv {
    space: Space,
}

impl BrokenSampleEnv {
    pub fn new() -> Self {
        Self {
            space: Space::Discrete(2),
        }
    }
}

impl Env for BrokenSampleEnv {
    fn action_space(&self) -> &Space {
        &self.space
    }

    fn sample_action(&mut self) -> Result<Action, EnvError> {
        Err(EnvError::Sample("sampler is broken".to_string()))
    }

    fn reset(&mut self, _seed: Option<u64>) -> Result<Vec<f64>, EnvError> {
        Ok(vec![])
    }

    fn step(&mut self, _action: &Action) -> Result<Transition, EnvError> {
        Ok(Transition::new(vec![], 0.0, true))
    }
}

/// Samples alternate between one and two elements.
pub struct VariableSizeEnv {
    space: Space,
    flip: bool,
}

impl VariableSizeEnv {
    pub fn new() -> Self {
        Self {
            space: Space::Box {
                low: 0.0,
                high: 1.0,
                shape: vec![1],
            },
            flip: false,
        }
    }
}

impl Env for VariableSizeEnv {
    fn action_space(&self) -> &Space {
        &self.space
    }

    fn sample_action(&mut self) -> Result<Action, EnvError> {
        self.flip = !self.flip;
        let len = if self.flip { 1 } else { 2 };
        Ok(Action::Continuous(ArrayD::zeros(IxDyn(&[len]))))
    }

    fn reset(&mut self, _seed: Option<u64>) -> Result<Vec<f64>, EnvError> {
        Ok(vec![])
    }

    fn step(&mut self, _action: &Action) -> Result<Transition, EnvError> {
        Ok(Transition::new(vec![], 0.0, true))
    }
}

/// Continuous space with a 0-dimensional (scalar) action. Records the shape
/// of every action it receives.
pub struct ScalarEnv {
    space: Space,
    pub seen: Arc<Mutex<Vec<Vec<usize>>>>,
}

impl ScalarEnv {
    pub fn new(seen: Arc<Mutex<Vec<Vec<usize>>>>) -> Self {
        Self {
            space: Space::Box {
                low: -1.0,
                high: 1.0,
                shape: vec![],
            },
            seen,
        }
    }
}

impl Env for ScalarEnv {
    fn action_space(&self) -> &Space {
        &self.space
    }

    fn sample_action(&mut self) -> Result<Action, EnvError> {
        Ok(Action::Continuous(ArrayD::zeros(IxDyn(&[]))))
    }

    fn reset(&mut self, _seed: Option<u64>) -> Result<Vec<f64>, EnvError> {
        Ok(vec![])
    }

    fn step(&mut self, action: &Action) -> Result<Transition, EnvError> {
        self.seen.lock().unwrap().push(action.shape().to_vec());
        Ok(Transition::new(vec![], 0.0, false))
    }
}

/// Discrete environment that records each chosen index.
pub struct RecordingDiscreteEnv {
    space: Space,
    pub chosen: Arc<Mutex<Vec<usize>>>,
}

impl RecordingDiscreteEnv {
    pub fn new(n: usize, chosen: Arc<Mutex<Vec<usize>>>) -> Self {
        Self {
            space: Space::Discrete(n),
            chosen,
        }
    }
}

impl Env for RecordingDiscreteEnv {
    fn action_space(&self) -> &Space {
        &self.space
    }

    fn sample_action(&mut self) -> Result<Action, EnvError> {
        Ok(Action::Discrete(0))
    }

    fn reset(&mut self, _seed: Option<u64>) -> Result<Vec<f64>, EnvError> {
        Ok(vec![])
    }

    fn step(&mut self, action: &Action) -> Result<Transition, EnvError> {
        if !self.space.contains(action) {
            return Err(EnvError::IllegalAction(format!("{action:?}")));
        }
        if let Action::Discrete(index) = action {
            self.chosen.lock().unwrap().push(*index);
        }
        Ok(Transition::new(vec![], 1.0, false))
    }
}
