use std::f64::consts::PI;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::env::errors::EnvError;
use crate::env::traits::Env;
use crate::env::types::{Action, Space, Transition};

const MAX_SPEED: f64 = 8.0;
const MAX_TORQUE: f64 = 2.0;
const DT: f64 = 0.05;
const GRAVITY: f64 = 10.0;
const MASS: f64 = 1.0;
const LENGTH: f64 = 1.0;
const MAX_EPISODE_STEPS: usize = 200;

/// Swing a frictionless pendulum upright with a bounded torque.
///
/// Actions are one-element arrays. Torques beyond `±2` are clipped; an action
/// of the wrong shape or a non-finite torque is illegal.
pub struct Pendulum {
    space: Space,
    theta: f64,
    theta_dot: f64,
    steps: usize,
    episode_rng: StdRng,
    space_rng: StdRng,
}

impl Pendulum {
    pub fn new() -> Self {
        Self {
            space: Space::Box {
                low: -MAX_TORQUE,
                high: MAX_TORQUE,
                shape: vec![1],
            },
            theta: 0.0,
            theta_dot: 0.0,
            steps: 0,
            episode_rng: StdRng::from_os_rng(),
            space_rng: StdRng::from_os_rng(),
        }
    }

    fn observation(&self) -> Vec<f64> {
        vec![self.theta.cos(), self.theta.sin(), self.theta_dot]
    }
}

impl Default for Pendulum {
    fn default() -> Self {
        Self::new()
    }
}

fn angle_normalize(x: f64) -> f64 {
    (x + PI).rem_euclid(2.0 * PI) - PI
}

impl Env for Pendulum {
    fn action_space(&self) -> &Space {
        &self.space
    }

    fn sample_action(&mut self) -> Result<Action, EnvError> {
        self.space.sample(&mut self.space_rng)
    }

    fn reset(&mut self, seed: Option<u64>) -> Result<Vec<f64>, EnvError> {
        if let Some(seed) = seed {
            self.episode_rng = StdRng::seed_from_u64(seed);
        }
        self.theta = self.episode_rng.random_range(-PI..PI);
        self.theta_dot = self.episode_rng.random_range(-1.0..1.0);
        self.steps = 0;
        Ok(self.observation())
    }

    fn step(&mut self, action: &Action) -> Result<Transition, EnvError> {
        let torque = match action {
            Action::Continuous(values) if values.shape() == &[1] => values.iter().copied().next(),
            _ => None,
        };
        let Some(torque) = torque.filter(|t| t.is_finite()) else {
            return Err(EnvError::IllegalAction(format!(
                "expected one finite torque, got {action:?}"
            )));
        };
        let u = torque.clamp(-MAX_TORQUE, MAX_TORQUE);

        let th = angle_normalize(self.theta);
        let cost = th * th + 0.1 * self.theta_dot * self.theta_dot + 0.001 * u * u;

        let theta_dot = self.theta_dot
            + (3.0 * GRAVITY / (2.0 * LENGTH) * self.theta.sin()
                + 3.0 / (MASS * LENGTH * LENGTH) * u)
                * DT;
        self.theta_dot = theta_dot.clamp(-MAX_SPEED, MAX_SPEED);
        self.theta += self.theta_dot * DT;
        self.steps += 1;

        Ok(Transition::new(
            self.observation(),
            -cost,
            self.steps >= MAX_EPISODE_STEPS,
        ))
    }
}
