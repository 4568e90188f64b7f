//! Score solving: pin a candidate's dot product with the reference vector.

use mimic_core::MimicError;

use crate::linalg::linearly_independent;
use crate::orthogonal::orthogonal_to;
use crate::random::RandomSource;

/// Adjusts a candidate so its dot product with the reference vector encodes
/// the given score. Receives `(score, reference, candidate)` and returns the
/// adjusted vector.
pub type NormFn = dyn Fn(f32, &[f32], Vec<f32>) -> Vec<f32> + Send + Sync;

/// Default norm function: set the candidate's final coordinate so that
/// `dot(reference, candidate) = 2 * score - 1`, mapping a `[0, 1]` similarity
/// score onto the `[-1, 1]` dot-product range.
///
/// Requires equal, nonzero lengths and a nonzero final reference coordinate;
/// [`solve`] checks both before calling.
pub fn dot_product_norm(score: f32, reference: &[f32], mut candidate: Vec<f32>) -> Vec<f32> {
    debug_assert_eq!(reference.len(), candidate.len());
    debug_assert!(!reference.is_empty());

    let last = reference.len() - 1;
    let sum: f32 = reference[..last]
        .iter()
        .zip(&candidate[..last])
        .map(|(r, c)| r * c)
        .sum();

    candidate[last] = (2.0 * score - 1.0 - sum) / reference[last];
    candidate
}

/// Produce a vector whose dot product with `reference` encodes `score` and
/// which is linearly independent of `reference`.
///
/// Each attempt draws a fresh candidate orthogonal to `basis`, applies
/// `norm_fn`, and accepts the result iff it is independent of the reference.
/// Dependent outcomes are rare (the adjusted coordinate must land exactly on
/// a scalar multiple), so the loop is bounded rather than unbounded:
/// exhausting `max_attempts` is [`MimicError::ScoreSolveDivergence`].
pub(crate) fn solve(
    source: &mut dyn RandomSource,
    score: f32,
    reference: &[f32],
    basis: &[Vec<f32>],
    norm_fn: &NormFn,
    max_attempts: usize,
) -> Result<Vec<f32>, MimicError> {
    match reference.last() {
        Some(&coord) if coord != 0.0 => {}
        _ => {
            return Err(MimicError::DegenerateBasis(
                "reference vector has a zero final coordinate".to_string(),
            ))
        }
    }

    for attempt in 1..=max_attempts {
        let candidate = orthogonal_to(source, reference.len(), basis)?;
        let adjusted = norm_fn(score, reference, candidate);
        if adjusted.len() != reference.len() {
            return Err(MimicError::DimensionMismatch(format!(
                "norm function returned length {}, expected {}",
                adjusted.len(),
                reference.len()
            )));
        }

        if linearly_independent(reference, &adjusted) {
            return Ok(adjusted);
        }

        tracing::trace!("solve: attempt {attempt} produced a dependent vector, redrawing");
    }

    Err(MimicError::ScoreSolveDivergence {
        attempts: max_attempts,
    })
}
