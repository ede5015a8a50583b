use crate::geometry::Vec3;
use std::iter::FromIterator;

/// One row of the raw atom table: a single physical atom.
///
/// `res_type` uses the canonical integer codes (see
/// [`res_type_from_name`](crate::res_type_from_name)), with `-1` standing for
/// an unknown residue type.
#[derive(Debug, Clone, PartialEq)]
pub struct AtomRecord {
    pub res_id: i32,
    pub res_type: i32,
    pub name: String,
    pub pos: Vec3,
}

/// Columnar storage of one protein's atom records.
///
/// Row order is preserved from the input table; first-appearance order of
/// `(res_id, res_type)` pairs is what fixes the dense residue indexing used
/// by every per-residue output downstream.
pub struct AtomFrame {
    size: usize,
    coords: Vec<Vec3>,
    res_ids: Vec<i32>,
    res_types: Vec<i32>,
    atom_names: Vec<String>,
}

impl AtomFrame {
    pub fn new(
        size: usize,
        coords: Vec<Vec3>,
        res_ids: Vec<i32>,
        res_types: Vec<i32>,
        atom_names: Vec<String>,
    ) -> Self {
        AtomFrame {
            size,
            coords,
            res_ids,
            res_types,
            atom_names,
        }
    }

    pub fn from_records(records: impl IntoIterator<Item = AtomRecord>) -> Self {
        records.into_iter().collect()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get_coords(&self) -> &[Vec3] {
        &self.coords
    }

    pub fn get_res_ids(&self) -> &[i32] {
        &self.res_ids
    }

    pub fn get_res_types(&self) -> &[i32] {
        &self.res_types
    }

    pub fn get_atom_names(&self) -> &[String] {
        &self.atom_names
    }
}

impl FromIterator<AtomRecord> for AtomFrame {
    fn from_iter<T: IntoIterator<Item = AtomRecord>>(iter: T) -> Self {
        let mut coords = Vec::new();
        let mut res_ids = Vec::new();
        let mut res_types = Vec::new();
        let mut atom_names = Vec::new();
        for record in iter {
            coords.push(record.pos);
            res_ids.push(record.res_id);
            res_types.push(record.res_type);
            atom_names.push(record.name);
        }
        AtomFrame {
            size: coords.len(),
            coords,
            res_ids,
            res_types,
            atom_names,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_records() {
        let frame = AtomFrame::from_records([
            AtomRecord {
                res_id: 1,
                res_type: 0,
                name: "N".to_string(),
                pos: [0.0, 0.0, 0.0],
            },
            AtomRecord {
                res_id: 1,
                res_type: 0,
                name: "CA".to_string(),
                pos: [1.5, 0.0, 0.0],
            },
        ]);
        assert_eq!(frame.size(), 2);
        assert_eq!(frame.get_res_ids(), &[1, 1]);
        assert_eq!(frame.get_atom_names()[1], "CA");
        assert_eq!(frame.get_coords()[1], [1.5, 0.0, 0.0]);
    }
}
