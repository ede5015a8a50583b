use super::positions::ResiduePositions;
use super::torsions::{backbone_torsion_embs, side_chain_torsion_embs};
use crate::atoms::AtomFrame;
use crate::error::FeaturizeError;
use crate::geometry::{self, Vec3};
use crate::hull::{HullGenerator, HullShell};
use candle_core::{Device, Tensor};
use log::debug;

/// One protein as a set of named graph tensors. Constructed once per protein
/// and immutable thereafter.
///
/// All residue-indexed tensors share the same length N; the hull tensors are
/// independently sized. Coordinate rows for residues without a CA atom are
/// NaN; the feature tensors (`side_chain_embs`, `bb_embs`) never contain NaN.
#[derive(Debug)]
pub struct ProteinGraph {
    pub id: String,
    /// residue type codes, shape (N), i64
    pub res_types: Tensor,
    /// CA positions, shape (N, 3), f32
    pub coords_ca: Tensor,
    /// N positions (CA-imputed where absent), shape (N, 3), f32
    pub coords_n: Tensor,
    /// C positions (CA-imputed where absent), shape (N, 3), f32
    pub coords_c: Tensor,
    /// side-chain torsion encodings, shape (N, 8), f32
    pub side_chain_embs: Tensor,
    /// backbone torsion encodings, shape (N, 6), f32
    pub bb_embs: Tensor,
    /// hull edges, shape (2, E), i64
    pub hull_edge_index: Tensor,
    /// hull shell positions, shape (M, 3), f32
    pub hull_pos: Tensor,
    /// distance of each shell point from the shell centroid, shape (M), f32
    pub hull_radius: Tensor,
    /// Attached by the dataset layer, not by the featurization core.
    pub label: Option<i64>,
}

impl ProteinGraph {
    pub fn num_residues(&self) -> usize {
        self.res_types.dims()[0]
    }

    pub fn with_label(mut self, label: i64) -> Self {
        self.label = Some(label);
        self
    }

    /// Assemble and validate one protein graph from its per-residue parts
    /// and hull output.
    ///
    /// Every residue-indexed input must have exactly one row per residue;
    /// a mismatch marks an upstream aggregation bug and aborts construction
    /// for this protein rather than truncating.
    pub fn assemble(
        id: &str,
        device: &Device,
        positions: &ResiduePositions,
        side_chain_embs: &[[f32; 8]],
        bb_embs: &[[f32; 6]],
        shell: &HullShell,
    ) -> Result<ProteinGraph, FeaturizeError> {
        let n_res = positions.res_types.len();
        check_len(id, "coords_ca", n_res, positions.ca.len())?;
        check_len(id, "coords_n", n_res, positions.n.len())?;
        check_len(id, "coords_c", n_res, positions.c.len())?;
        check_len(id, "side_chain_embs", n_res, side_chain_embs.len())?;
        check_len(id, "bb_embs", n_res, bb_embs.len())?;

        let res_types: Vec<i64> = positions.res_types.iter().map(|&t| t as i64).collect();

        let radius = shell_radii(&shell.shell_pos);
        let n_shell = shell.shell_pos.len();
        let n_edges = shell.edge_index.len();
        let mut edges = vec![0i64; 2 * n_edges];
        for (j, [src, dst]) in shell.edge_index.iter().enumerate() {
            edges[j] = *src;
            edges[n_edges + j] = *dst;
        }
        debug!(
            "assembling '{}': {} residues, {} shell points, {} hull edges",
            id, n_res, n_shell, n_edges
        );

        Ok(ProteinGraph {
            id: id.to_string(),
            res_types: Tensor::from_vec(res_types, (n_res,), device)?,
            coords_ca: coord_tensor(&positions.ca, device)?,
            coords_n: coord_tensor(&positions.n, device)?,
            coords_c: coord_tensor(&positions.c, device)?,
            side_chain_embs: Tensor::from_vec(
                side_chain_embs.concat(),
                (n_res, 8),
                device,
            )?,
            bb_embs: Tensor::from_vec(bb_embs.concat(), (n_res, 6), device)?,
            hull_edge_index: Tensor::from_vec(edges, (2, n_edges), device)?,
            hull_pos: Tensor::from_vec(
                shell.shell_pos.concat(),
                (n_shell, 3),
                device,
            )?,
            hull_radius: Tensor::from_vec(radius, (n_shell,), device)?,
            label: None,
        })
    }
}

/// Featurization entry points on the atom table.
pub trait GraphFeatures {
    /// Aggregate atom rows into per-residue role positions.
    fn residue_positions(&self) -> ResiduePositions;

    /// Run the full pipeline: extraction, torsion encodings, hull edges,
    /// validated assembly.
    fn to_graph(
        &self,
        id: &str,
        device: &Device,
        hull: &dyn HullGenerator,
    ) -> Result<ProteinGraph, FeaturizeError>;
}

impl GraphFeatures for AtomFrame {
    fn residue_positions(&self) -> ResiduePositions {
        ResiduePositions::extract(self)
    }

    fn to_graph(
        &self,
        id: &str,
        device: &Device,
        hull: &dyn HullGenerator,
    ) -> Result<ProteinGraph, FeaturizeError> {
        let positions = self.residue_positions();
        let side_chain_embs = side_chain_torsion_embs(&positions);
        let bb_embs = backbone_torsion_embs(&positions);

        let ca: Vec<Vec3> = positions
            .ca
            .iter()
            .map(|p| p.unwrap_or([f32::NAN; 3]))
            .collect();
        let shell = hull.compute_hull(&ca);

        ProteinGraph::assemble(id, device, &positions, &side_chain_embs, &bb_embs, &shell)
    }
}

fn check_len(
    id: &str,
    field: &'static str,
    expected: usize,
    actual: usize,
) -> Result<(), FeaturizeError> {
    if actual != expected {
        return Err(FeaturizeError::LengthMismatch {
            id: id.to_string(),
            field,
            expected,
            actual,
        });
    }
    Ok(())
}

fn coord_tensor(
    column: &[Option<Vec3>],
    device: &Device,
) -> Result<Tensor, candle_core::Error> {
    let flat: Vec<f32> = column
        .iter()
        .flat_map(|p| p.unwrap_or([f32::NAN; 3]))
        .collect();
    Tensor::from_vec(flat, (column.len(), 3), device)
}

/// Distance of each shell point from the shell centroid.
fn shell_radii(shell_pos: &[Vec3]) -> Vec<f32> {
    if shell_pos.is_empty() {
        return Vec::new();
    }
    let inv = 1.0 / shell_pos.len() as f32;
    let mut centroid = [0.0f32; 3];
    for p in shell_pos {
        centroid[0] += p[0] * inv;
        centroid[1] += p[1] * inv;
        centroid[2] += p[2] * inv;
    }
    shell_pos
        .iter()
        .map(|&p| geometry::norm(geometry::sub(p, centroid)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atoms::AtomRecord;

    /// Chain-connectivity stand-in for the external hull generator.
    struct StubHull;

    impl HullGenerator for StubHull {
        fn compute_hull(&self, points: &[Vec3]) -> HullShell {
            let edge_index = (0..points.len().saturating_sub(1))
                .flat_map(|i| [[i as i64, i as i64 + 1], [i as i64 + 1, i as i64]])
                .collect();
            HullShell {
                shell_pos: points.to_vec(),
                edge_index,
            }
        }
    }

    fn rec(res_id: i32, res_type: i32, name: &str, pos: Vec3) -> AtomRecord {
        AtomRecord {
            res_id,
            res_type,
            name: name.to_string(),
            pos,
        }
    }

    fn helix_frame(n_res: i32) -> AtomFrame {
        let mut records = Vec::new();
        for i in 0..n_res {
            for (j, name) in ["N", "CA", "C"].iter().enumerate() {
                let s = 0.6 * (3 * i + j as i32) as f32;
                records.push(rec(
                    i,
                    0,
                    name,
                    [2.3 * s.cos(), 2.3 * s.sin(), 0.5 * s],
                ));
            }
        }
        AtomFrame::from_records(records)
    }

    #[test]
    fn test_graph_length_invariant() {
        let device = Device::Cpu;
        let graph = helix_frame(5)
            .to_graph("helix5", &device, &StubHull)
            .unwrap();

        assert_eq!(graph.num_residues(), 5);
        assert_eq!(graph.res_types.dims(), &[5]);
        assert_eq!(graph.coords_ca.dims(), &[5, 3]);
        assert_eq!(graph.coords_n.dims(), &[5, 3]);
        assert_eq!(graph.coords_c.dims(), &[5, 3]);
        assert_eq!(graph.side_chain_embs.dims(), &[5, 8]);
        assert_eq!(graph.bb_embs.dims(), &[5, 6]);
        assert_eq!(graph.hull_edge_index.dims(), &[2, 8]);
        assert_eq!(graph.hull_pos.dims(), &[5, 3]);
        assert_eq!(graph.hull_radius.dims(), &[5]);
    }

    #[test]
    fn test_feature_tensors_contain_no_nan() {
        let device = Device::Cpu;
        // CA-only trace: all side-chain and most backbone geometry undefined
        let records: Vec<AtomRecord> = (0..4)
            .map(|i| rec(i, 0, "CA", [i as f32 * 3.8, (i * i) as f32, 0.3 * i as f32]))
            .collect();
        let graph = AtomFrame::from_records(records)
            .to_graph("ca_only", &device, &StubHull)
            .unwrap();

        let side: Vec<Vec<f32>> = graph.side_chain_embs.to_vec2().unwrap();
        let bb: Vec<Vec<f32>> = graph.bb_embs.to_vec2().unwrap();
        assert!(side.iter().flatten().all(|x| x.is_finite()));
        assert!(bb.iter().flatten().all(|x| x.is_finite()));
    }

    #[test]
    fn test_imputed_coords_equal_ca() {
        let device = Device::Cpu;
        let records: Vec<AtomRecord> = (0..3)
            .map(|i| rec(i, 0, "CA", [i as f32, 2.0 * i as f32, 0.5]))
            .collect();
        let graph = AtomFrame::from_records(records)
            .to_graph("ca_only", &device, &StubHull)
            .unwrap();

        let ca: Vec<Vec<f32>> = graph.coords_ca.to_vec2().unwrap();
        let n: Vec<Vec<f32>> = graph.coords_n.to_vec2().unwrap();
        let c: Vec<Vec<f32>> = graph.coords_c.to_vec2().unwrap();
        assert_eq!(ca, n);
        assert_eq!(ca, c);
    }

    #[test]
    fn test_assemble_rejects_row_mismatch() {
        let device = Device::Cpu;
        let positions = helix_frame(4).residue_positions();
        let side = side_chain_torsion_embs(&positions);
        let bb = backbone_torsion_embs(&positions);
        let shell = HullShell::default();

        // drop one side-chain row to simulate an upstream aggregation bug
        let truncated = &side[..side.len() - 1];
        let err = ProteinGraph::assemble(
            "broken",
            &device,
            &positions,
            truncated,
            &bb,
            &shell,
        )
        .unwrap_err();

        match err {
            FeaturizeError::LengthMismatch {
                id,
                field,
                expected,
                actual,
            } => {
                assert_eq!(id, "broken");
                assert_eq!(field, "side_chain_embs");
                assert_eq!(expected, 4);
                assert_eq!(actual, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_hull_radius_from_shell_centroid() {
        let device = Device::Cpu;
        // unit square shell: every corner sits sqrt(0.5) from the centroid
        let shell = HullShell {
            shell_pos: vec![
                [0.0, 0.0, 0.0],
                [1.0, 0.0, 0.0],
                [1.0, 1.0, 0.0],
                [0.0, 1.0, 0.0],
            ],
            edge_index: vec![[0, 1], [1, 0]],
        };
        let positions = helix_frame(4).residue_positions();
        let side = side_chain_torsion_embs(&positions);
        let bb = backbone_torsion_embs(&positions);
        let graph =
            ProteinGraph::assemble("square", &device, &positions, &side, &bb, &shell).unwrap();

        let radius: Vec<f32> = graph.hull_radius.to_vec1().unwrap();
        for r in radius {
            assert!((r - 0.5f32.sqrt()).abs() < 1e-6);
        }
        assert_eq!(graph.hull_edge_index.dims(), &[2, 2]);
    }

    #[test]
    fn test_label_attached_after_construction() {
        let device = Device::Cpu;
        let graph = helix_frame(3)
            .to_graph("labeled", &device, &StubHull)
            .unwrap();
        assert_eq!(graph.label, None);
        let graph = graph.with_label(7);
        assert_eq!(graph.label, Some(7));
    }
}
