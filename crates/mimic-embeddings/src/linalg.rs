//! Dot product and linear-independence primitives.

use mimic_core::MimicError;

/// Dot product of two equal-length vectors.
///
/// Unequal lengths are a caller error and are surfaced as
/// [`MimicError::DimensionMismatch`].
pub fn dot(v1: &[f32], v2: &[f32]) -> Result<f32, MimicError> {
    if v1.len() != v2.len() {
        return Err(MimicError::DimensionMismatch(format!(
            "dot product of lengths {} and {}",
            v1.len(),
            v2.len()
        )));
    }

    Ok(v1.iter().zip(v2).map(|(a, b)| a * b).sum())
}

/// True if `v2` is not a scalar multiple of `v1`.
///
/// Scans coordinates and compares the ratio `v2[i] / v1[i]` wherever `v1[i]`
/// is nonzero; any ratio mismatch, or a nonzero `v2[i]` where `v1[i]` is
/// zero, proves independence. Two all-zero vectors are treated as dependent.
/// Ratio comparison is exact, matching the solver's retry semantics: a
/// vector that is *almost* a scalar multiple is still usable.
pub fn linearly_independent(v1: &[f32], v2: &[f32]) -> bool {
    debug_assert_eq!(v1.len(), v2.len(), "vectors must share a dimension");

    let mut ratio: Option<f32> = None;
    for (a, b) in v1.iter().zip(v2) {
        if *a != 0.0 {
            let r = b / a;
            match ratio {
                None => ratio = Some(r),
                Some(seen) if r == seen => {}
                Some(_) => return true,
            }
        } else if *b != 0.0 {
            return true;
        }
    }

    false
}
