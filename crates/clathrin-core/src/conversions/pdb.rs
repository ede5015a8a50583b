use crate::atoms::AtomFrame;
use crate::info::res_type_from_name;
use itertools::Itertools;
use pdbtbx::PDB;

impl From<&PDB> for AtomFrame {
    // the PDB API requires us to iterate:
    // PDB --> Chain --> Residue --> Atom if we want data from all.
    // Here we collect all the data in one go and return an AtomFrame
    fn from(pdb_data: &PDB) -> Self {
        let (coords, res_ids, res_types, atom_names): (
            Vec<[f32; 3]>,
            Vec<i32>,
            Vec<i32>,
            Vec<String>,
        ) = pdb_data
            .chains()
            .flat_map(|chain| {
                chain.residues().flat_map(move |residue| {
                    let (res_number, _insertion_code) = residue.id();
                    let res_id = res_number as i32;
                    let res_type = res_type_from_name(residue.name().unwrap_or_default());
                    residue.atoms().map(move |atom| {
                        let (x, y, z) = atom.pos();
                        (
                            [x as f32, y as f32, z as f32],
                            res_id,
                            res_type,
                            atom.name().to_string(),
                        )
                    })
                })
            })
            .multiunzip();

        AtomFrame::new(coords.len(), coords, res_ids, res_types, atom_names)
    }
}
