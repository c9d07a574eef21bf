//! The 21-letter amino-acid alphabet used to lay out one-hot feature vectors.

/// Symbol used for every residue outside the 20 standard amino acids.
pub const WILDCARD: char = 'X';

/// The 20 natural amino acids plus [`WILDCARD`], in feature-vector order.
pub const AMINO_ACIDS21: [char; 21] = [
    'A', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L', 'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V',
    'W', 'X', 'Y',
];

/// Number of symbols in [`AMINO_ACIDS21`].
pub const ALPHABET_SIZE: usize = AMINO_ACIDS21.len();

/// Position of [`WILDCARD`] in [`AMINO_ACIDS21`].
pub const WILDCARD_INDEX: usize = 19;

/// Position of `residue` in [`AMINO_ACIDS21`].
///
/// Anything that isn't one of the 20 standard one-letter codes falls back to
/// [`WILDCARD_INDEX`]. Lookup is case-sensitive.
pub fn alphabet_index(residue: char) -> usize {
    AMINO_ACIDS21
        .iter()
        .position(|&aa| aa == residue)
        .unwrap_or(WILDCARD_INDEX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wildcard_position() {
        assert_eq!(AMINO_ACIDS21[WILDCARD_INDEX], WILDCARD);
        assert_eq!(alphabet_index(WILDCARD), WILDCARD_INDEX);
    }

    #[test]
    fn known_residues() {
        assert_eq!(alphabet_index('A'), 0);
        assert_eq!(alphabet_index('G'), 5);
        assert_eq!(alphabet_index('Y'), 20);
        for (i, aa) in AMINO_ACIDS21.iter().enumerate() {
            assert_eq!(alphabet_index(*aa), i);
        }
    }

    #[test]
    fn unknown_residues_use_wildcard() {
        for c in ['B', 'Z', 'U', 'O', '*', '-', 'a', ' '] {
            assert_eq!(
                alphabet_index(c),
                WILDCARD_INDEX,
                "Expected {c:?} to map to the wildcard"
            );
        }
    }
}
