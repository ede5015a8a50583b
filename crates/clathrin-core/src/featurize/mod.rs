//! Protein -> graph-tensor featurization.
//!
//! Three stages, run per protein with no shared state:
//! - aggregate atom rows into per-residue role positions ([`ResiduePositions`])
//! - derive torsion-angle encodings for the backbone (phi/psi/omega) and the
//!   side chain (chi1..chi4)
//! - assemble the validated [`ProteinGraph`] record, attaching hull output
mod graph;
mod positions;
mod torsions;

pub use self::graph::{GraphFeatures, ProteinGraph};
pub use self::positions::ResiduePositions;
pub use self::torsions::{backbone_torsion_embs, side_chain_torsion_embs};
