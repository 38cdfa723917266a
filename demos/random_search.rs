use gymopt::{EvalError, GymMulti, catalog};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::info;

// Pure random search: keep the cheapest of a fixed number of candidates.
fn main() -> Result<(), EvalError> {
    tracing_subscriber::fmt::init();

    let names = catalog::init().names().to_vec();
    info!(?names, "usable environments");

    let mut rng = StdRng::seed_from_u64(0);
    for name in &names {
        let mut gym = GymMulti::with_defaults(Some(name))?;
        let mut best = f64::INFINITY;
        for _ in 0..50 {
            let x = gym.parametrization().sample(&mut rng);
            best = best.min(gym.score(x.view())?);
        }
        println!("{name}: best cost {best}");
    }

    Ok(())
}
