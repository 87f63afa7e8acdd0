//! Pairwise Newtonian gravitational force model.

use thiserror::Error;

use gravity_core::vector::{self, Vector2};

use crate::body::Body;

/// Failure of a single force evaluation.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ForceError {
    /// Two distinct bodies share coordinates, so the pairwise distance is
    /// zero and the inverse-square law is undefined. Raised only when no
    /// softening is configured.
    #[error("bodies {subject} and {other} coincide; pairwise force is undefined")]
    DegenerateGeometry { subject: usize, other: usize },
}

/// Net gravitational force on `bodies[subject]` from every other body.
///
/// Pure function of its inputs: for each `j != subject` the contribution is
/// `g * m_subject * m_j / d²` along the displacement toward `j`, accumulated
/// componentwise. The caller applies Newton's second law (`a = F / m`);
/// keeping the output a force leaves this model mass-agnostic.
///
/// `softening` > 0 adds `softening²` inside the squared distance, which
/// bounds the force for close encounters and makes coincident bodies legal.
/// With zero softening a coincident pair is a [`ForceError`].
///
/// Cost is O(n); a full integration step over all bodies is O(n²), which is
/// the intended scale (single digits to low tens of bodies).
pub fn net_force(
    subject: usize,
    bodies: &[Body],
    g: f64,
    softening: f64,
) -> Result<Vector2, ForceError> {
    let subject_body = &bodies[subject];
    let mut total = vector::ZERO;

    for (other, other_body) in bodies.iter().enumerate() {
        // Exclusion by index, not by coordinates: two bodies at the same
        // point are still distinct bodies.
        if other == subject {
            continue;
        }

        let displacement = vector::sub(&other_body.position, &subject_body.position);
        let distance_sq = vector::dot(&displacement, &displacement) + softening * softening;
        if distance_sq == 0.0 {
            return Err(ForceError::DegenerateGeometry { subject, other });
        }

        let distance = distance_sq.sqrt();
        let magnitude = g * subject_body.mass * other_body.mass / distance_sq;
        total = vector::add(&total, &vector::scale(&displacement, magnitude / distance));
    }

    Ok(total)
}
