use crate::atoms::AtomFrame;
use crate::geometry::Vec3;
use crate::info::{AtomRole, UNKNOWN_RES_TYPE};
use itertools::izip;
use log::debug;
use std::collections::HashMap;

/// Per-residue positions for the nine canonical atom roles, plus the residue
/// type codes. `None` marks a role with no atom in that residue.
///
/// Row order is the dense residue index: first-appearance order of unique
/// `(res_id, res_type)` pairs in the atom table.
pub struct ResiduePositions {
    pub res_types: Vec<i32>,
    pub n: Vec<Option<Vec3>>,
    pub ca: Vec<Option<Vec3>>,
    pub c: Vec<Option<Vec3>>,
    pub cb: Vec<Option<Vec3>>,
    pub gamma: Vec<Option<Vec3>>,
    pub delta: Vec<Option<Vec3>>,
    pub epsilon: Vec<Option<Vec3>>,
    pub zeta: Vec<Option<Vec3>>,
    pub eta: Vec<Option<Vec3>>,
}

impl ResiduePositions {
    /// Number of residues.
    pub fn len(&self) -> usize {
        self.res_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.res_types.is_empty()
    }

    /// Group the atom table by residue and scatter each atom into its role
    /// column. Missing atoms stay `None`; a residue with several atoms for
    /// one role keeps the last row (last-write-wins). Where N or C is absent
    /// the CA position stands in, so CA-only traces remain usable with
    /// degraded angle information.
    pub fn extract(frame: &AtomFrame) -> Self {
        let mut index: HashMap<(i32, i32), usize> = HashMap::new();
        let mut res_types: Vec<i32> = Vec::new();
        for (&res_id, &res_type) in frame.get_res_ids().iter().zip(frame.get_res_types()) {
            let key = (res_id, res_type);
            if !index.contains_key(&key) {
                index.insert(key, res_types.len());
                res_types.push(if res_type == -1 {
                    UNKNOWN_RES_TYPE
                } else {
                    res_type
                });
            }
        }

        let n_res = res_types.len();
        let mut positions = ResiduePositions {
            res_types,
            n: vec![None; n_res],
            ca: vec![None; n_res],
            c: vec![None; n_res],
            cb: vec![None; n_res],
            gamma: vec![None; n_res],
            delta: vec![None; n_res],
            epsilon: vec![None; n_res],
            zeta: vec![None; n_res],
            eta: vec![None; n_res],
        };

        for (&res_id, &res_type, name, &pos) in izip!(
            frame.get_res_ids(),
            frame.get_res_types(),
            frame.get_atom_names(),
            frame.get_coords()
        ) {
            let Some(role) = AtomRole::of(name) else {
                continue;
            };
            let idx = index[&(res_id, res_type)];
            positions.role_column_mut(role)[idx] = Some(pos);
        }

        for i in 0..n_res {
            positions.n[i] = positions.n[i].or(positions.ca[i]);
            positions.c[i] = positions.c[i].or(positions.ca[i]);
        }

        debug!("extracted {} residues from {} atoms", n_res, frame.size());
        positions
    }

    fn role_column_mut(&mut self, role: AtomRole) -> &mut Vec<Option<Vec3>> {
        match role {
            AtomRole::N => &mut self.n,
            AtomRole::CA => &mut self.ca,
            AtomRole::C => &mut self.c,
            AtomRole::CB => &mut self.cb,
            AtomRole::Gamma => &mut self.gamma,
            AtomRole::Delta => &mut self.delta,
            AtomRole::Epsilon => &mut self.epsilon,
            AtomRole::Zeta => &mut self.zeta,
            AtomRole::Eta => &mut self.eta,
        }
    }
}
