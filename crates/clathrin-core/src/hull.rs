use crate::geometry::Vec3;

/// Output of a hull generator: the positions of the hull shell points and the
/// derived structural edges, indexed into the input point table.
#[derive(Debug, Clone, Default)]
pub struct HullShell {
    pub shell_pos: Vec<Vec3>,
    pub edge_index: Vec<[i64; 2]>,
}

/// Narrow interface to the convex-hull edge generator.
///
/// The featurization core hands the generator the per-residue CA coordinate
/// table (rows for residues without a CA are NaN; implementations must
/// tolerate them) and attaches the output verbatim, converting shell
/// positions to a radius feature along the way. Hull internals never leak
/// into the core, so a stub generator is enough for testing.
pub trait HullGenerator {
    fn compute_hull(&self, points: &[Vec3]) -> HullShell;
}
