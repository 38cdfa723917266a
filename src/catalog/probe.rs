use tracing::{debug, warn};

use crate::env::{EnvError, EnvRegistry};

/// Why a constructible environment was still turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// One sampled action is at least `limit` bytes.
    TooLarge { bytes: usize, limit: usize },
    /// Two samples differ in size, so the action shape is not fixed.
    VariableSize { first: usize, second: usize },
}

/// Instantiate `id`, draw two actions and check both footprints.
///
/// `Ok(None)` means the environment is usable.
pub fn probe(
    registry: &EnvRegistry,
    id: &str,
    max_sample_bytes: usize,
) -> Result<Option<Rejection>, EnvError> {
    let mut env = registry.make(id)?;
    let samples = env.sample_action().and_then(|first| Ok((first, env.sample_action()?)));
    if let Err(e) = env.close() {
        debug!(env = id, error = %e, "failed to close probe instance");
    }
    let (first, second) = samples?;

    let (first, second) = (first.footprint(), second.footprint());
    if first >= max_sample_bytes {
        return Ok(Some(Rejection::TooLarge {
            bytes: first,
            limit: max_sample_bytes,
        }));
    }
    if first != second {
        return Ok(Some(Rejection::VariableSize { first, second }));
    }
    Ok(None)
}

/// Probe `id` and swallow every failure. Returns whether `id` is usable.
pub(crate) fn accepts(registry: &EnvRegistry, id: &str, max_sample_bytes: usize) -> bool {
    match probe(registry, id, max_sample_bytes) {
        Ok(None) => true,
        Ok(Some(rejection)) => {
            debug!(env = id, ?rejection, "environment rejected");
            false
        }
        Err(e) if e.is_unsupported() => {
            debug!(env = id, error = %e, "environment unsupported");
            false
        }
        Err(e) => {
            warn!(env = id, error = %e, "environment failed while probing");
            false
        }
    }
}
