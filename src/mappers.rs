//! Map parsed structures onto their polymer chains.
//!
//! Only the first model of a structure is considered. A chain counts as a polymer
//! chain if it holds at least one standard amino acid or nucleotide, so waters,
//! ligands and capping groups sharing a chain identifier don't add chains of their own.

use crate::chains::ChainExt;
use crate::residues::PolymerKind;
use pdbtbx::*;
use polars::prelude::*;
use std::collections::HashSet;
use tracing::{debug, trace};

/// A single polymer chain split out of a structure.
#[derive(Debug, Clone)]
pub struct PolymerChain {
    /// `<structure_id>.<chain_id>`
    pub key: String,
    /// Chain identifier within the structure
    pub chain_id: String,
    /// Protein, DNA, RNA or mixed
    pub kind: PolymerKind,
    /// One-letter sequence of the polymer residues
    pub sequence: String,
}

/// Split the first model of `pdb` into its polymer chains.
///
/// With `exclude_duplicates`, only the first chain of each distinct sequence is kept,
/// e.g. a homodimer yields a single chain.
pub fn structure_to_polymer_chains(
    structure_id: &str,
    pdb: &PDB,
    exclude_duplicates: bool,
) -> Vec<PolymerChain> {
    let Some(model) = pdb.model(0) else {
        debug!("{structure_id} has no models");
        return Vec::new();
    };

    let mut seen: HashSet<String> = HashSet::new();
    let mut polymer_chains = Vec::new();
    for chain in model.chains() {
        let Some(kind) = chain.polymer_kind() else {
            trace!("Skipping non-polymer chain {structure_id}.{}", chain.id());
            continue;
        };
        let sequence = chain.polymer_seq().join("");
        if exclude_duplicates && !seen.insert(sequence.clone()) {
            trace!("Skipping duplicate chain {structure_id}.{}", chain.id());
            continue;
        }

        polymer_chains.push(PolymerChain {
            key: format!("{structure_id}.{}", chain.id()),
            chain_id: chain.id().to_string(),
            kind,
            sequence,
        });
    }

    debug!(
        "Mapped {structure_id} to {} polymer chain(s)",
        polymer_chains.len()
    );
    polymer_chains
}

/// Number of polymer chains in the first model of `pdb`.
pub fn count_polymer_chains(pdb: &PDB) -> usize {
    pdb.model(0)
        .map_or(0, |model| model.chains().filter(|c| c.is_polymer()).count())
}

/// Collect polymer chains into a [`DataFrame`] with the columns
/// `structure_chain_id`, `chain`, `polymer_type`, `length` and `sequence`.
pub fn polymer_chains_to_df(chains: &[PolymerChain]) -> PolarsResult<DataFrame> {
    df!(
        "structure_chain_id" => chains.iter().map(|x| x.key.to_owned()).collect::<Vec<String>>(),
        "chain" => chains.iter().map(|x| x.chain_id.to_owned()).collect::<Vec<String>>(),
        "polymer_type" => chains.iter().map(|x| x.kind.to_string()).collect::<Vec<String>>(),
        "length" => chains.iter().map(|x| x.sequence.len() as u32).collect::<Vec<u32>>(),
        "sequence" => chains.iter().map(|x| x.sequence.to_owned()).collect::<Vec<String>>(),
    )
}
