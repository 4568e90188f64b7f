//! Gram-Schmidt orthogonalization against an accumulated basis.

use mimic_core::MimicError;

use crate::linalg::dot;
use crate::random::{normalized_vector, RandomSource};

/// Draw a random candidate of length `dim` and project out its component
/// along every vector in `basis`, in the order supplied.
///
/// The result is approximately orthogonal to each basis vector (up to
/// floating-point rounding) and is not re-normalized. A zero-norm basis
/// vector makes the projection undefined and is rejected as
/// [`MimicError::DegenerateBasis`].
pub fn orthogonal_to(
    source: &mut dyn RandomSource,
    dim: usize,
    basis: &[Vec<f32>],
) -> Result<Vec<f32>, MimicError> {
    let mut candidate = normalized_vector(source, dim);

    for b in basis {
        let projection = dot(&candidate, b)?;
        let norm = dot(b, b)?;
        if norm == 0.0 {
            return Err(MimicError::DegenerateBasis(
                "cannot orthogonalize against a zero vector".to_string(),
            ));
        }

        for (c, bi) in candidate.iter_mut().zip(b) {
            *c -= (projection / norm) * bi;
        }
    }

    Ok(candidate)
}

/// Build `n` mutually orthogonal (hence linearly independent) vectors of
/// length `dim` by orthogonalizing each draw against all previous ones.
pub fn independent_vectors(
    source: &mut dyn RandomSource,
    n: usize,
    dim: usize,
) -> Result<Vec<Vec<f32>>, MimicError> {
    let mut vectors: Vec<Vec<f32>> = Vec::with_capacity(n);

    for _ in 0..n {
        let v = orthogonal_to(source, dim, &vectors)?;
        vectors.push(v);
    }

    Ok(vectors)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SeededSource;

    #[test]
    fn zero_basis_vector_is_rejected() {
        let mut source = SeededSource::new(1);
        let err = orthogonal_to(&mut source, 3, &[vec![0.0, 0.0, 0.0]]).unwrap_err();
        assert!(matches!(err, MimicError::DegenerateBasis(_)));
    }

    #[test]
    fn empty_basis_returns_the_raw_draw() {
        let mut a = SeededSource::new(9);
        let mut b = SeededSource::new(9);
        let candidate = orthogonal_to(&mut a, 4, &[]).unwrap();
        assert_eq!(candidate, normalized_vector(&mut b, 4));
    }
}
