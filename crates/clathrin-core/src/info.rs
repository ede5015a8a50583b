use strum::{Display, EnumIter};

/// Reserved residue-type code standing in for records whose type is `-1`.
pub const UNKNOWN_RES_TYPE: i32 = 25;

#[rustfmt::skip]
pub fn res_type_from_name(res_name: &str) -> i32 {
    match res_name {
        "ALA" => 0,  "CYS" => 1,  "ASP" => 2,
        "GLU" => 3,  "PHE" => 4,  "GLY" => 5,
        "HIS" => 6,  "ILE" => 7,  "LYS" => 8,
        "LEU" => 9,  "MET" => 10, "ASN" => 11,
        "PRO" => 12, "GLN" => 13, "ARG" => 14,
        "SER" => 15, "THR" => 16, "VAL" => 17,
        "TRP" => 18, "TYR" => 19, _     => -1,
    }
}

/// The nine canonical atom roles that feed the torsion-chain extraction:
/// the backbone trace (N, CA, C), CB, and the side-chain chain positions
/// out to the eta nitrogen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum AtomRole {
    N,
    CA,
    C,
    CB,
    Gamma,
    Delta,
    Epsilon,
    Zeta,
    Eta,
}

impl AtomRole {
    /// Atom names that scatter into this role. Matching is exact and
    /// case-sensitive; the synonym sets reflect chemical variation across
    /// amino acids (e.g. the gamma position is CG in LYS but SG in CYS).
    pub const fn names(&self) -> &'static [&'static str] {
        match self {
            AtomRole::N => &["N"],
            AtomRole::CA => &["CA"],
            AtomRole::C => &["C"],
            AtomRole::CB => &["CB"],
            AtomRole::Gamma => &["CG", "SG", "OG", "CG1", "OG1"],
            AtomRole::Delta => &["CD", "SD", "CD1", "OD1", "ND1"],
            AtomRole::Epsilon => &["CE", "NE", "OE1"],
            AtomRole::Zeta => &["CZ", "NZ"],
            AtomRole::Eta => &["NH1"],
        }
    }

    /// Classify an atom name into its role, if it has one.
    pub fn of(name: &str) -> Option<AtomRole> {
        match name {
            "N" => Some(AtomRole::N),
            "CA" => Some(AtomRole::CA),
            "C" => Some(AtomRole::C),
            "CB" => Some(AtomRole::CB),
            "CG" | "SG" | "OG" | "CG1" | "OG1" => Some(AtomRole::Gamma),
            "CD" | "SD" | "CD1" | "OD1" | "ND1" => Some(AtomRole::Delta),
            "CE" | "NE" | "OE1" => Some(AtomRole::Epsilon),
            "CZ" | "NZ" => Some(AtomRole::Zeta),
            "NH1" => Some(AtomRole::Eta),
            _ => None,
        }
    }
}
