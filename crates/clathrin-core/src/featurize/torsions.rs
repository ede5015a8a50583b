use super::positions::ResiduePositions;
use crate::geometry::{self, compute_dihedrals, normalize_or_zero, Vec3, ZERO};
use itertools::izip;

/// `b - a` per row, defined only where both endpoints are.
fn bond(a: &[Option<Vec3>], b: &[Option<Vec3>]) -> Vec<Option<Vec3>> {
    a.iter()
        .zip(b)
        .map(|(a, b)| match (a, b) {
            (Some(a), Some(b)) => Some(geometry::sub(*b, *a)),
            _ => None,
        })
        .collect()
}

#[inline]
fn scrub(x: f32) -> f32 {
    if x.is_finite() {
        x
    } else {
        0.0
    }
}

/// Backbone torsion encodings, one `[cos phi, cos psi, cos omega, sin phi,
/// sin psi, sin omega]` row per residue.
///
/// The N/CA/C columns are interleaved into a single 3N-point backbone trace;
/// each consecutive step is normalized to a unit direction (zero vector where
/// the step is missing or degenerate) and windows of three directions go
/// through the torsion engine. The undefined phi of the first residue and
/// psi/omega of the last are padded as zero angles.
pub fn backbone_torsion_embs(positions: &ResiduePositions) -> Vec<[f32; 6]> {
    let n_res = positions.len();
    if n_res == 0 {
        return Vec::new();
    }

    let mut trace: Vec<Option<Vec3>> = Vec::with_capacity(3 * n_res);
    for i in 0..n_res {
        trace.push(positions.n[i]);
        trace.push(positions.ca[i]);
        trace.push(positions.c[i]);
    }

    let units: Vec<Option<Vec3>> = trace
        .windows(2)
        .map(|step| match (step[0], step[1]) {
            (Some(a), Some(b)) => normalize_or_zero(geometry::sub(b, a)),
            _ => ZERO,
        })
        .map(Some)
        .collect();

    let m = units.len();
    let raw = compute_dihedrals(&units[..m - 2], &units[1..m - 1], &units[2..]);

    let mut angles = Vec::with_capacity(3 * n_res);
    angles.push(0.0);
    angles.extend(raw);
    angles.push(0.0);
    angles.push(0.0);

    angles
        .chunks_exact(3)
        .map(|row| {
            [
                scrub(row[0].cos()),
                scrub(row[1].cos()),
                scrub(row[2].cos()),
                scrub(row[0].sin()),
                scrub(row[1].sin()),
                scrub(row[2].sin()),
            ]
        })
        .collect()
}

/// Side-chain torsion encodings, one `[cos chi1..chi4, sin chi1..chi4]` row
/// per residue.
///
/// Bond vectors run along the extended chain N -> CA -> CB -> gamma -> delta
/// -> epsilon -> zeta. The fifth torsion (ending at the eta nitrogen) is
/// omitted: only arginine has it and it sits near zero.
pub fn side_chain_torsion_embs(positions: &ResiduePositions) -> Vec<[f32; 8]> {
    let v1 = bond(&positions.n, &positions.ca);
    let v2 = bond(&positions.ca, &positions.cb);
    let v3 = bond(&positions.cb, &positions.gamma);
    let v4 = bond(&positions.gamma, &positions.delta);
    let v5 = bond(&positions.delta, &positions.epsilon);
    let v6 = bond(&positions.epsilon, &positions.zeta);

    let chi1 = compute_dihedrals(&v1, &v2, &v3);
    let chi2 = compute_dihedrals(&v2, &v3, &v4);
    let chi3 = compute_dihedrals(&v3, &v4, &v5);
    let chi4 = compute_dihedrals(&v4, &v5, &v6);

    izip!(chi1, chi2, chi3, chi4)
        .map(|(a, b, c, d)| {
            [
                scrub(a.cos()),
                scrub(b.cos()),
                scrub(c.cos()),
                scrub(d.cos()),
                scrub(a.sin()),
                scrub(b.sin()),
                scrub(c.sin()),
                scrub(d.sin()),
            ]
        })
        .collect()
}
