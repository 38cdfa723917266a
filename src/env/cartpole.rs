use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::env::errors::EnvError;
use crate::env::traits::Env;
use crate::env::types::{Action, Space, Transition};

const GRAVITY: f64 = 9.8;
const MASS_CART: f64 = 1.0;
const MASS_POLE: f64 = 0.1;
const TOTAL_MASS: f64 = MASS_CART + MASS_POLE;
const HALF_POLE_LENGTH: f64 = 0.5;
const POLE_MASS_LENGTH: f64 = MASS_POLE * HALF_POLE_LENGTH;
const FORCE_MAG: f64 = 10.0;
const TAU: f64 = 0.02;
const THETA_THRESHOLD: f64 = 12.0 * 2.0 * std::f64::consts::PI / 360.0;
const X_THRESHOLD: f64 = 2.4;
const MAX_EPISODE_STEPS: usize = 500;

/// Balance a pole hinged on a cart by pushing the cart left (0) or right (1).
///
/// Reward is +1 for every step taken, including the one that ends the episode.
/// The episode ends when the pole tilts past 12 degrees, the cart leaves
/// `[-2.4, 2.4]`, or after 500 steps.
pub struct CartPole {
    space: Space,
    state: [f64; 4],
    steps: usize,
    episode_rng: StdRng,
    space_rng: StdRng,
}

impl CartPole {
    pub fn new() -> Self {
        Self {
            space: Space::Discrete(2),
            state: [0.0; 4],
            steps: 0,
            episode_rng: StdRng::from_os_rng(),
            space_rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for CartPole {
    fn default() -> Self {
        Self::new()
    }
}

impl Env for CartPole {
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
        for value in &mut self.state {
            *value = self.episode_rng.random_range(-0.05..0.05);
        }
        self.steps = 0;
        Ok(self.state.to_vec())
    }

    fn step(&mut self, action: &Action) -> Result<Transition, EnvError> {
        let force = match action {
            Action::Discrete(0) => -FORCE_MAG,
            Action::Discrete(1) => FORCE_MAG,
            other => {
                return Err(EnvError::IllegalAction(format!(
                    "{other:?} is not in {:?}",
                    self.space
                )));
            }
        };

        let [x, x_dot, theta, theta_dot] = self.state;
        let (sin_theta, cos_theta) = theta.sin_cos();
        let temp = (force + POLE_MASS_LENGTH * theta_dot * theta_dot * sin_theta) / TOTAL_MASS;
        let theta_acc = (GRAVITY * sin_theta - cos_theta * temp)
            / (HALF_POLE_LENGTH * (4.0 / 3.0 - MASS_POLE * cos_theta * cos_theta / TOTAL_MASS));
        let x_acc = temp - POLE_MASS_LENGTH * theta_acc * cos_theta / TOTAL_MASS;

        // explicit Euler
        self.state = [
            x + TAU * x_dot,
            x_dot + TAU * x_acc,
            theta + TAU * theta_dot,
            theta_dot + TAU * theta_acc,
        ];
        self.steps += 1;

        let [x, _, theta, _] = self.state;
        let terminated = !(-X_THRESHOLD..=X_THRESHOLD).contains(&x)
            || !(-THETA_THRESHOLD..=THETA_THRESHOLD).contains(&theta);
        let truncated = self.steps >= MAX_EPISODE_STEPS;

        Ok(Transition::new(self.state.to_vec(), 1.0, terminated || truncated))
    }
}
