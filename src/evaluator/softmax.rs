use rand::Rng;

/// Normalized exponentials of `logits`, shifted by their max first.
pub fn softmax(logits: &[f64]) -> Vec<f64> {
    let max = logits.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let exp: Vec<f64> = logits.iter().map(|&v| (v - max).exp()).collect();
    let sum: f64 = exp.iter().sum();
    exp.iter().map(|&e| e / sum).collect()
}

/// One multinomial trial over `probabilities`.
///
/// Returns `None` when `probabilities` is empty or holds non-finite or
/// negative entries.
pub fn sample_categorical<R: Rng>(probabilities: &[f64], rng: &mut R) -> Option<usize> {
    if probabilities.is_empty() || probabilities.iter().any(|p| !p.is_finite() || *p < 0.0) {
        return None;
    }
    let u: f64 = rng.random();
    let mut cumulative = 0.0;
    for (index, p) in probabilities.iter().enumerate() {
        cumulative += p;
        if u < cumulative {
            return Some(index);
        }
    }
    // rounding left the total just under u
    probabilities.iter().rposition(|p| *p > 0.0)
}
