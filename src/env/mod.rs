mod cartpole;
mod errors;
mod pendulum;
mod registry;
mod traits;
mod types;

pub use cartpole::CartPole;
pub use errors::EnvError;
pub use pendulum::Pendulum;
pub use registry::{DEFAULT_ENV, EnvConstructor, EnvRegistry};
pub use traits::Env;
pub use types::{Action, Space, Transition};
