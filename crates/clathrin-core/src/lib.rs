//! # clathrin-core
//!
//! Prepares three-dimensional protein structures for geometric machine learning
//! by converting a raw table of atom records into a per-protein graph record:
//! per-residue identity, backbone and side-chain torsion-angle encodings,
//! spatial coordinates, and convex-hull-derived structural edges.
//!
//! The main entry point is the [`AtomFrame`] struct holding one protein's atom
//! table, together with the [`GraphFeatures`] trait which turns it into a
//! [`ProteinGraph`] of named tensors. Hull edges come from an external
//! generator behind the [`HullGenerator`] trait; this crate never depends on
//! hull internals.
//!
mod atoms;
mod conversions;
mod error;
mod featurize;
mod geometry;
mod hull;
mod info;

pub use self::atoms::{AtomFrame, AtomRecord};
pub use self::error::FeaturizeError;
pub use self::featurize::{
    backbone_torsion_embs, side_chain_torsion_embs, GraphFeatures, ProteinGraph, ResiduePositions,
};
pub use self::geometry::{compute_dihedrals, normalize_or_zero, Vec3};
pub use self::hull::{HullGenerator, HullShell};
pub use self::info::{res_type_from_name, AtomRole, UNKNOWN_RES_TYPE};
