//! Convex-hull edge generation over residue CA coordinates.
//!
//! A lightweight QuickHull behind the core's [`HullGenerator`] interface:
//! farthest-pair seeding, an initial tetrahedron, then incremental expansion
//! of visible faces across the horizon. The shell is the set of hull vertex
//! positions; `edge_index` holds the unique face edges of the hull, emitted
//! once per direction and indexed into the input point table.
//!
//! Input rows with non-finite coordinates (residues without a CA atom) are
//! skipped. Inputs with fewer than four usable points, or whose points are
//! collinear/coplanar within `epsilon`, yield an empty shell.
use clathrin_core::{HullGenerator, HullShell, Vec3};
use log::debug;
use std::collections::{BTreeMap, BTreeSet};

pub struct QuickHull {
    /// Epsilon for face visibility and degeneracy checks.
    pub epsilon: f32,
}

impl Default for QuickHull {
    fn default() -> Self {
        Self { epsilon: 1e-6 }
    }
}

#[inline]
fn sub(a: Vec3, b: Vec3) -> Vec3 {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}

#[inline]
fn cross(a: Vec3, b: Vec3) -> Vec3 {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}

#[inline]
fn dot(a: Vec3, b: Vec3) -> f32 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

#[inline]
fn norm(v: Vec3) -> f32 {
    dot(v, v).sqrt()
}

struct Face {
    verts: [usize; 3],
    normal: Vec3,
    offset: f32,
}

impl Face {
    /// A face over three point indices, or `None` if the triangle is
    /// degenerate (near-zero normal).
    fn new(verts: [usize; 3], points: &[Vec3], epsilon: f32) -> Option<Face> {
        let a = points[verts[0]];
        let b = points[verts[1]];
        let c = points[verts[2]];
        let n = cross(sub(b, a), sub(c, a));
        let magnitude = norm(n);
        if magnitude <= epsilon {
            return None;
        }
        let normal = [n[0] / magnitude, n[1] / magnitude, n[2] / magnitude];
        Some(Face {
            verts,
            normal,
            offset: dot(normal, a),
        })
    }

    fn signed_distance(&self, p: Vec3) -> f32 {
        dot(self.normal, p) - self.offset
    }

    /// Orient so that `interior` sits on the negative side.
    fn oriented_away_from(
        verts: [usize; 3],
        interior: Vec3,
        points: &[Vec3],
        epsilon: f32,
    ) -> Option<Face> {
        let face = Face::new(verts, points, epsilon)?;
        if face.signed_distance(interior) > 0.0 {
            Face::new([verts[1], verts[0], verts[2]], points, epsilon)
        } else {
            Some(face)
        }
    }
}

fn farthest_pair(points: &[Vec3], usable: &[usize]) -> (usize, usize, f32) {
    let mut best = (usable[0], usable[0], 0.0f32);
    for (k, &i) in usable.iter().enumerate() {
        for &j in &usable[k + 1..] {
            let d = norm(sub(points[j], points[i]));
            if d > best.2 {
                best = (i, j, d);
            }
        }
    }
    best
}

fn farthest_from_line(points: &[Vec3], usable: &[usize], p0: usize, p1: usize) -> (usize, f32) {
    let axis = sub(points[p1], points[p0]);
    let axis_len = norm(axis);
    let mut best = (p0, 0.0f32);
    for &i in usable {
        let d = norm(cross(sub(points[i], points[p0]), axis)) / axis_len;
        if d > best.1 {
            best = (i, d);
        }
    }
    best
}

fn farthest_from_plane(
    points: &[Vec3],
    usable: &[usize],
    face: &Face,
) -> (usize, f32) {
    let mut best = (face.verts[0], 0.0f32);
    for &i in usable {
        let d = face.signed_distance(points[i]).abs();
        if d > best.1 {
            best = (i, d);
        }
    }
    best
}

impl HullGenerator for QuickHull {
    fn compute_hull(&self, points: &[Vec3]) -> HullShell {
        let eps = self.epsilon;
        let usable: Vec<usize> = points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.iter().all(|x| x.is_finite()))
            .map(|(i, _)| i)
            .collect();
        if usable.len() < 4 {
            return HullShell::default();
        }

        // initial tetrahedron from pairwise/line/plane extremes
        let (p0, p1, spread) = farthest_pair(points, &usable);
        if spread <= eps {
            return HullShell::default();
        }
        let (p2, line_dist) = farthest_from_line(points, &usable, p0, p1);
        if line_dist <= eps {
            return HullShell::default();
        }
        let Some(base) = Face::new([p0, p1, p2], points, eps) else {
            return HullShell::default();
        };
        let (p3, plane_dist) = farthest_from_plane(points, &usable, &base);
        if plane_dist <= eps {
            return HullShell::default();
        }

        let seeds = [p0, p1, p2, p3];
        let centroid = {
            let mut c = [0.0f32; 3];
            for &i in &seeds {
                c[0] += points[i][0] * 0.25;
                c[1] += points[i][1] * 0.25;
                c[2] += points[i][2] * 0.25;
            }
            c
        };

        let mut faces: Vec<Face> = [
            [p0, p1, p2],
            [p0, p1, p3],
            [p0, p2, p3],
            [p1, p2, p3],
        ]
        .into_iter()
        .filter_map(|verts| Face::oriented_away_from(verts, centroid, points, eps))
        .collect();

        // expand the hull point by point across the horizon of visible faces
        for &idx in &usable {
            if seeds.contains(&idx) {
                continue;
            }
            let visible: Vec<usize> = faces
                .iter()
                .enumerate()
                .filter(|(_, f)| f.signed_distance(points[idx]) > eps)
                .map(|(i, _)| i)
                .collect();
            if visible.is_empty() {
                continue;
            }

            let mut horizon: BTreeMap<(usize, usize), usize> = BTreeMap::new();
            for &fi in &visible {
                let v = faces[fi].verts;
                for (a, b) in [(v[0], v[1]), (v[1], v[2]), (v[2], v[0])] {
                    let key = if a < b { (a, b) } else { (b, a) };
                    *horizon.entry(key).or_default() += 1;
                }
            }

            faces = faces
                .into_iter()
                .enumerate()
                .filter(|(i, _)| !visible.contains(i))
                .map(|(_, f)| f)
                .collect();

            for ((a, b), count) in horizon {
                // edges shared by two visible faces are interior, not horizon
                if count != 1 {
                    continue;
                }
                if let Some(face) =
                    Face::oriented_away_from([a, b, idx], centroid, points, eps)
                {
                    faces.push(face);
                }
            }
        }

        let vertices: BTreeSet<usize> =
            faces.iter().flat_map(|f| f.verts).collect();
        let mut edges: BTreeSet<(usize, usize)> = BTreeSet::new();
        for face in &faces {
            let v = face.verts;
            for (a, b) in [(v[0], v[1]), (v[1], v[2]), (v[2], v[0])] {
                edges.insert((a, b));
                edges.insert((b, a));
            }
        }

        debug!(
            "hull: {} faces, {} vertices, {} directed edges from {} points",
            faces.len(),
            vertices.len(),
            edges.len(),
            points.len()
        );

        HullShell {
            shell_pos: vertices.iter().map(|&i| points[i]).collect(),
            edge_index: edges
                .into_iter()
                .map(|(a, b)| [a as i64, b as i64])
                .collect(),
        }
    }
}
