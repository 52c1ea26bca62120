// ============================================================
// Layer 4 — Train/Evaluation Splitter
// ============================================================
// Shuffles dialogue records and holds a share of them out for
// evaluation:
//   - Training set:   written to the dialogue file
//   - Evaluation set: written to the eval file
//
// The shuffle is seeded so the same config always produces the
// same split. A non-empty input always keeps at least one
// training record, even when rounding would send every row to
// evaluation.
//
// Uses Fisher-Yates shuffle via rand::seq::SliceRandom.
//
// Reference: Rust Book §8 (Vectors)
//            rand crate documentation

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Shuffle `samples` with `seed` and split into (train, eval).
///
/// # Arguments
/// * `samples`       - All available samples (consumed by this function)
/// * `eval_fraction` - Proportion held out for evaluation, e.g. 0.1 = 10%
/// * `seed`          - Seed for the shuffle
///
/// # Returns
/// A tuple (train_samples, eval_samples)
pub fn split_train_eval<T>(mut samples: Vec<T>, eval_fraction: f64, seed: u64) -> (Vec<T>, Vec<T>) {
    let mut rng = StdRng::seed_from_u64(seed);
    samples.shuffle(&mut rng);

    // e.g. 100 samples * 0.1 = 10 → last 10 are evaluation
    let total      = samples.len();
    let eval_count = ((total as f64) * eval_fraction).round() as usize;
    let mut split_at = total - eval_count.min(total);

    if split_at == 0 && total > 0 {
        tracing::warn!(
            "eval_fraction {} would leave no training records out of {}; keeping one",
            eval_fraction,
            total,
        );
        split_at = 1;
    }

    // split_off(n) removes elements [n..] from the Vec and returns them
    let eval = samples.split_off(split_at);

    tracing::debug!(
        "Dataset split: {} training, {} evaluation (seed {})",
        samples.len(),
        eval.len(),
        seed,
    );

    (samples, eval)
}
