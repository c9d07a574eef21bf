use crate::residues::{PolymerKind, ResidueExt};
use pdbtbx::*;

/// Polymer sequence and classification of a chain.
pub trait ChainExt {
    /// One-letter codes of the polymer residues in the chain, in order.
    /// Non-standard residues between the first and last polymer residue are `X`.
    fn polymer_seq(&self) -> Vec<&str>;

    /// The polymer type of the chain, or `None` if it holds no polymer residues.
    fn polymer_kind(&self) -> Option<PolymerKind>;

    /// Whether the chain holds at least one protein or nucleic acid residue.
    fn is_polymer(&self) -> bool {
        self.polymer_kind().is_some()
    }
}

impl ChainExt for Chain {
    fn polymer_seq(&self) -> Vec<&str> {
        let residues = self.residues().collect::<Vec<&Residue>>();
        let first = residues.iter().position(|res| res.is_polymer());
        let last = residues.iter().rposition(|res| res.is_polymer());
        let (Some(first), Some(last)) = (first, last) else {
            return Vec::new();
        };

        // Modified residues within the polymer (MSE, SEP, ...) become `X`;
        // capping groups and ligands outside of it are left out
        residues[first..=last]
            .iter()
            .copied()
            .filter(|res| !res.is_water())
            .map(|res| res.polymer_code().map_or("X", |(code, _)| code))
            .collect()
    }

    fn polymer_kind(&self) -> Option<PolymerKind> {
        self.residues()
            .filter_map(|res| res.polymer_code().map(|(_, kind)| kind))
            .reduce(|acc, kind| if acc == kind { acc } else { PolymerKind::Mixed })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::load_structure;

    #[test]
    fn test_polymer_seq() {
        let root = env!("CARGO_MANIFEST_DIR");
        let path = format!("{}/{}", root, "test-data/capped_peptide.pdb");

        let (pdb, _) = load_structure(&path).unwrap();
        let chain = pdb.model(0).unwrap().chain(0).unwrap();
        let seq = chain.polymer_seq().join("");
        assert_eq!(seq, "GIVEQCC", "Capping group should not be part of the sequence");
        assert_eq!(chain.polymer_kind(), Some(PolymerKind::Protein));
    }

    #[test]
    fn test_polymer_kinds() {
        let root = env!("CARGO_MANIFEST_DIR");

        let path = format!("{}/{}", root, "test-data/dna_duplex.pdb");
        let (pdb, _) = load_structure(&path).unwrap();
        assert!(pdb
            .model(0)
            .unwrap()
            .chains()
            .all(|c| c.polymer_kind() == Some(PolymerKind::Dna)));

        let path = format!("{}/{}", root, "test-data/ligand_only.pdb");
        let (pdb, _) = load_structure(&path).unwrap();
        assert!(pdb.chains().all(|c| !c.is_polymer()));
    }

    #[test]
    fn test_rna_and_mixed_chains() {
        let root = env!("CARGO_MANIFEST_DIR");
        let path = format!("{}/{}", root, "test-data/rna_mixed.pdb");
        let (pdb, _) = load_structure(&path).unwrap();
        let model = pdb.model(0).unwrap();

        let rna = model.chain(0).unwrap();
        assert_eq!(rna.polymer_kind(), Some(PolymerKind::Rna));
        assert_eq!(rna.polymer_seq().join(""), "AGCUU");

        // Peptide-DNA conjugate
        let conjugate = model.chain(1).unwrap();
        assert_eq!(conjugate.polymer_kind(), Some(PolymerKind::Mixed));
        assert_eq!(conjugate.polymer_seq().join(""), "KRKGC");
    }

    #[test]
    fn test_modified_residue_in_sequence() {
        let root = env!("CARGO_MANIFEST_DIR");
        let path = format!("{}/{}", root, "test-data/modified_residue.pdb");
        let (pdb, _) = load_structure(&path).unwrap();
        let chain = pdb.model(0).unwrap().chain(0).unwrap();

        // MSE in the middle is kept as `X`, trailing waters are not part of the sequence
        assert_eq!(chain.polymer_seq().join(""), "MKXLA");
        assert_eq!(chain.polymer_kind(), Some(PolymerKind::Protein));
    }
}
