//! Vector helpers and the torsion-angle engine.
//!
//! Absence of geometry (missing atoms) travels as `Option`; degenerate
//! arithmetic (zero-length bond vectors, undefined cross products) is
//! absorbed by guarded wrappers instead of letting NaN leak through. A
//! torsion of `0` downstream therefore means "no reliable angle", not
//! "angle of zero orientation".

use itertools::izip;

pub type Vec3 = [f32; 3];

pub(crate) const ZERO: Vec3 = [0.0, 0.0, 0.0];

#[inline]
pub(crate) fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
pub(crate) fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
pub(crate) fn dot(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
pub(crate) fn norm(v: Vec3) -> f32 {
    dot(v, v).sqrt()
}

/// Normalize without NaN: a zero or non-finite norm yields the zero vector.
pub fn normalize_or_zero(v: Vec3) -> Vec3 {
    let n = norm(v);
    if n == 0.0 || !n.is_finite() {
        return ZERO;
    }
    [v[0] / n, v[1] / n, v[2] / n]
}

/// Division that yields 0 where the quotient is not finite (zero or NaN
/// denominator, NaN numerator).
#[inline]
fn guarded_div(a: f32, b: f32) -> f32 {
    let q = a / b;
    if q.is_finite() {
        q
    } else {
        0.0
    }
}

#[inline]
fn guarded_atan2(b: f32, a: f32) -> f32 {
    let torsion = b.atan2(a);
    if torsion.is_finite() {
        torsion
    } else {
        0.0
    }
}

/// Torsion angle of one bond-vector triplet, in `(-pi, pi]`.
pub(crate) fn dihedral(v1: Vec3, v2: Vec3, v3: Vec3) -> f32 {
    let n1 = cross(v1, v2);
    let n2 = cross(v2, v3);
    let a = dot(n1, n2);
    let b = guarded_div(dot(cross(n1, n2), v2), norm(v2));
    guarded_atan2(b, a)
}

/// Torsion angles for aligned rows of three consecutive bond vectors.
///
/// A row with any missing vector encodes as `0`. The result depends only on
/// vector differences (translation-invariant) and is exactly periodic.
pub fn compute_dihedrals(
    v1: &[Option<Vec3>],
    v2: &[Option<Vec3>],
    v3: &[Option<Vec3>],
) -> Vec<f32> {
    debug_assert_eq!(v1.len(), v2.len());
    debug_assert_eq!(v2.len(), v3.len());
    izip!(v1, v2, v3)
        .map(|(a, b, c)| match (a, b, c) {
            (Some(a), Some(b), Some(c)) => dihedral(*a, *b, *c),
            _ => 0.0,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    fn quartet_vectors(points: [Vec3; 4]) -> (Vec3, Vec3, Vec3) {
        (
            sub(points[1], points[0]),
            sub(points[2], points[1]),
            sub(points[3], points[2]),
        )
    }

    fn rotate_z(p: Vec3, theta: f32) -> Vec3 {
        [
            p[0] * theta.cos() - p[1] * theta.sin(),
            p[0] * theta.sin() + p[1] * theta.cos(),
            p[2],
        ]
    }

    #[test]
    fn test_dihedral_perpendicular() {
        let (v1, v2, v3) = quartet_vectors([
            [0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [1.0, 0.0, 1.0],
        ]);
        let angle = dihedral(v1, v2, v3);
        assert!((angle - FRAC_PI_2).abs() < 1e-6, "got {}", angle);
    }

    #[test]
    fn test_dihedral_rigid_rotation_invariance() {
        let points = [
            [0.3, 1.1, -0.2],
            [0.0, 0.0, 0.0],
            [1.4, 0.2, 0.1],
            [1.6, -0.4, 1.2],
        ];
        let (v1, v2, v3) = quartet_vectors(points);
        let reference = dihedral(v1, v2, v3);

        let rotated = points.map(|p| rotate_z(p, 0.7));
        let (r1, r2, r3) = quartet_vectors(rotated);
        assert!((dihedral(r1, r2, r3) - reference).abs() < 1e-5);
    }

    #[test]
    fn test_dihedral_degenerate_axis_is_zero() {
        // zero-length middle bond: no plane pair to compare
        assert_eq!(dihedral([1.0, 0.0, 0.0], ZERO, [0.0, 1.0, 0.0]), 0.0);
        // collinear quartet: both normals vanish
        let (v1, v2, v3) = quartet_vectors([
            [0.0, 0.0, 0.0],
            [1.0, 0.0, 0.0],
            [2.0, 0.0, 0.0],
            [3.0, 0.0, 0.0],
        ]);
        assert_eq!(dihedral(v1, v2, v3), 0.0);
    }

    #[test]
    fn test_compute_dihedrals_missing_rows() {
        let v = Some([1.0, 0.0, 0.0]);
        let angles = compute_dihedrals(&[v, None, v], &[v, v, None], &[None, v, v]);
        assert_eq!(angles, vec![0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_normalize_or_zero() {
        assert_eq!(normalize_or_zero(ZERO), ZERO);
        assert_eq!(normalize_or_zero([f32::NAN, 1.0, 0.0]), ZERO);
        let u = normalize_or_zero([3.0, 0.0, 4.0]);
        assert!((norm(u) - 1.0).abs() < 1e-6);
        assert!((u[0] - 0.6).abs() < 1e-6);
    }
}
