use pdbtbx::*;

/// The type of biopolymer a residue or chain belongs to.
#[derive(Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum PolymerKind {
    /// L-amino acids
    Protein,
    /// Deoxyribonucleotides
    Dna,
    /// Ribonucleotides
    Rna,
    /// Chains holding more than one kind of polymer residue
    Mixed,
}

impl std::fmt::Display for PolymerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            PolymerKind::Protein => write!(f, "protein"),
            PolymerKind::Dna => write!(f, "dna"),
            PolymerKind::Rna => write!(f, "rna"),
            PolymerKind::Mixed => write!(f, "mixed"),
        }
    }
}

/// Polymer classification of a residue from its name.
pub trait ResidueExt {
    /// The residue one-letter code, or `None` if it's not one of the 20 standard amino acids.
    fn resn(&self) -> Option<&str>;

    /// The one-letter code and polymer type of a standard nucleotide, or `None`.
    fn nucleotide(&self) -> Option<(&str, PolymerKind)>;

    /// The one-letter code and polymer type of any standard polymer residue.
    fn polymer_code(&self) -> Option<(&str, PolymerKind)> {
        self.resn()
            .map(|aa| (aa, PolymerKind::Protein))
            .or_else(|| self.nucleotide())
    }

    /// Whether the residue is part of a protein or nucleic acid polymer.
    /// Waters, capping groups and ligands are not.
    fn is_polymer(&self) -> bool {
        self.polymer_code().is_some()
    }

    /// Whether the residue is a water molecule.
    fn is_water(&self) -> bool;
}

impl ResidueExt for Residue {
    fn resn(&self) -> Option<&str> {
        let aa_code = match self.name().unwrap_or("").trim().to_uppercase().as_str() {
            "ALA" => "A",
            "ARG" => "R",
            "ASN" => "N",
            "ASP" => "D",
            "CYS" => "C",
            "GLN" => "Q",
            "GLU" => "E",
            "GLY" => "G",
            "HIS" => "H",
            "ILE" => "I",
            "LEU" => "L",
            "LYS" => "K",
            "MET" => "M",
            "PHE" => "F",
            "PRO" => "P",
            "SER" => "S",
            "THR" => "T",
            "TRP" => "W",
            "TYR" => "Y",
            "VAL" => "V",
            _ => "X",
        };

        match aa_code {
            "X" => None,
            _ => Some(aa_code),
        }
    }

    fn nucleotide(&self) -> Option<(&str, PolymerKind)> {
        match self.name().unwrap_or("").trim().to_uppercase().as_str() {
            "DA" => Some(("A", PolymerKind::Dna)),
            "DC" => Some(("C", PolymerKind::Dna)),
            "DG" => Some(("G", PolymerKind::Dna)),
            "DT" => Some(("T", PolymerKind::Dna)),
            "DU" => Some(("U", PolymerKind::Dna)),
            "DI" => Some(("I", PolymerKind::Dna)),
            "A" => Some(("A", PolymerKind::Rna)),
            "C" => Some(("C", PolymerKind::Rna)),
            "G" => Some(("G", PolymerKind::Rna)),
            "U" => Some(("U", PolymerKind::Rna)),
            "I" => Some(("I", PolymerKind::Rna)),
            _ => None,
        }
    }

    fn is_water(&self) -> bool {
        matches!(
            self.name().unwrap_or("").trim().to_uppercase().as_str(),
            "HOH" | "WAT" | "DOD"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::load_structure;

    #[test]
    fn residue_codes() {
        let root = env!("CARGO_MANIFEST_DIR");
        let path = format!("{}/{}", root, "test-data/protein_dna.pdb");
        let (pdb, _) = load_structure(&path).unwrap();
        let model = pdb.model(0).unwrap();

        let protein = model.chain(0).unwrap();
        assert_eq!(protein.residue(0).unwrap().resn(), Some("M"));
        assert_eq!(protein.residue(0).unwrap().nucleotide(), None);
        assert!(protein.residues().all(|res| res.is_polymer()));

        let dna = model.chain(1).unwrap();
        let first = dna.residue(0).unwrap();
        assert_eq!(first.resn(), None);
        assert_eq!(first.polymer_code(), Some(("C", PolymerKind::Dna)));
    }

    #[test]
    fn non_polymer_residues() {
        let root = env!("CARGO_MANIFEST_DIR");
        let path = format!("{}/{}", root, "test-data/single_protein.pdb");
        let (pdb, _) = load_structure(&path).unwrap();

        let waters = pdb
            .residues()
            .filter(|res| res.name() == Some("HOH"))
            .collect::<Vec<_>>();
        assert_eq!(waters.len(), 3);
        assert!(waters.iter().all(|res| !res.is_polymer() && res.is_water()));
    }
}
