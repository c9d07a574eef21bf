//! Static per-residue lookup tables: physico-chemical descriptors and BLOSUM62 rows.

/// Number of descriptors per residue in [`PROPERTIES`].
pub const N_PROPERTIES: usize = 7;

/// Number of scores per residue in [`BLOSUM62`].
pub const N_BLOSUM62: usize = 20;

/// Column order of the [`BLOSUM62`] rows.
pub const BLOSUM62_COLUMNS: [char; N_BLOSUM62] = [
    'A', 'R', 'N', 'D', 'C', 'Q', 'E', 'G', 'H', 'I', 'L', 'K', 'M', 'F', 'P', 'S', 'T', 'W',
    'Y', 'V',
];

/// Seven physico-chemical descriptors per amino acid.
///
/// `X` is all zeros and stands in for any residue not listed.
#[rustfmt::skip]
pub static PROPERTIES: [(char, [f64; N_PROPERTIES]); 21] = [
    ('A', [1.28, 0.05, 1.00,  0.31,  6.11, 0.42, 0.23]),
    ('G', [0.00, 0.00, 0.00,  0.00,  6.07, 0.13, 0.15]),
    ('V', [3.67, 0.14, 3.00,  1.22,  6.02, 0.27, 0.49]),
    ('L', [2.59, 0.19, 4.00,  1.70,  6.04, 0.39, 0.31]),
    ('I', [4.19, 0.19, 4.00,  1.80,  6.04, 0.30, 0.45]),
    ('F', [2.94, 0.29, 5.89,  1.79,  5.67, 0.30, 0.38]),
    ('Y', [2.94, 0.30, 6.47,  0.96,  5.66, 0.25, 0.41]),
    ('W', [3.21, 0.41, 8.08,  2.25,  5.94, 0.32, 0.42]),
    ('T', [3.03, 0.11, 2.60,  0.26,  5.60, 0.21, 0.36]),
    ('S', [1.31, 0.06, 1.60, -0.04,  5.70, 0.20, 0.28]),
    // Listed as a second `A` upstream; the isoelectric point (10.74) is arginine's
    ('R', [2.34, 0.29, 6.13, -1.01, 10.74, 0.36, 0.25]),
    ('K', [1.89, 0.22, 4.77, -0.99,  9.99, 0.32, 0.27]),
    ('H', [2.99, 0.23, 4.66,  0.13,  7.69, 0.27, 0.30]),
    ('D', [1.60, 0.11, 2.78, -0.77,  2.95, 0.25, 0.20]),
    ('E', [1.56, 0.15, 3.78, -0.64,  3.09, 0.42, 0.21]),
    ('N', [1.60, 0.13, 2.95, -0.60,  6.52, 0.21, 0.22]),
    ('Q', [1.56, 0.18, 3.95, -0.22,  5.65, 0.36, 0.25]),
    ('M', [2.35, 0.22, 4.43,  1.23,  5.71, 0.38, 0.32]),
    ('P', [2.67, 0.00, 2.72,  0.72,  6.80, 0.13, 0.34]),
    ('C', [1.77, 0.13, 2.43,  1.54,  6.35, 0.17, 0.41]),
    ('X', [0.00, 0.00, 0.00,  0.00,  0.00, 0.00, 0.00]),
];

/// BLOSUM62 rows, columns ordered as [`BLOSUM62_COLUMNS`].
///
/// Source: <https://ftp.ncbi.nih.gov/repository/blocks/unix/blosum/BLOSUM/blosum62.blast.new>
#[rustfmt::skip]
pub static BLOSUM62: [(char, [i32; N_BLOSUM62]); 21] = [
    //     A   R   N   D   C   Q   E   G   H   I   L   K   M   F   P   S   T   W   Y   V
    ('A', [ 4, -1, -2, -2,  0, -1, -1,  0, -2, -1, -1, -1, -1, -2, -1,  1,  0, -3, -2,  0]),
    ('R', [-1,  5,  0, -2, -3,  1,  0, -2,  0, -3, -2,  2, -1, -3, -2, -1, -1, -3, -2, -3]),
    ('N', [-2,  0,  6,  1, -3,  0,  0,  0,  1, -3, -3,  0, -2, -3, -2,  1,  0, -4, -2, -3]),
    ('D', [-2, -2,  1,  6, -3,  0,  2, -1, -1, -3, -4, -1, -3, -3, -1,  0, -1, -4, -3, -3]),
    ('C', [ 0, -3, -3, -3,  9, -3, -4, -3, -3, -1, -1, -3, -1, -2, -3, -1, -1, -2, -2, -1]),
    ('Q', [-1,  1,  0,  0, -3,  5,  2, -2,  0, -3, -2,  1,  0, -3, -1,  0, -1, -2, -1, -2]),
    ('E', [-1,  0,  0,  2, -4,  2,  5, -2,  0, -3, -3,  1, -2, -3, -1,  0, -1, -3, -2, -2]),
    ('G', [ 0, -2,  0, -1, -3, -2, -2,  6, -2, -4, -4, -2, -3, -3, -2,  0, -2, -2, -3, -3]),
    ('H', [-2,  0,  1, -1, -3,  0,  0, -2,  8, -3, -3, -1, -2, -1, -2, -1, -2, -2,  2, -3]),
    ('I', [-1, -3, -3, -3, -1, -3, -3, -4, -3,  4,  2, -3,  1,  0, -3, -2, -1, -3, -1,  3]),
    ('L', [-1, -2, -3, -4, -1, -2, -3, -4, -3,  2,  4, -2,  2,  0, -3, -2, -1, -2, -1,  1]),
    ('K', [-1,  2,  0, -1, -3,  1,  1, -2, -1, -3, -2,  5, -1, -3, -1,  0, -1, -3, -2, -2]),
    ('M', [-1, -1, -2, -3, -1,  0, -2, -3, -2,  1,  2, -1,  5,  0, -2, -1, -1, -1, -1,  1]),
    ('F', [-2, -3, -3, -3, -2, -3, -3, -3, -1,  0,  0, -3,  0,  6, -4, -2, -2,  1,  3, -1]),
    ('P', [-1, -2, -2, -1, -3, -1, -1, -2, -2, -3, -3, -1, -2, -4,  7, -1, -1, -4, -3, -2]),
    ('S', [ 1, -1,  1,  0, -1,  0,  0,  0, -1, -2, -2,  0, -1, -2, -1,  4,  1, -3, -2, -2]),
    ('T', [ 0, -1,  0, -1, -1, -1, -1, -2, -2, -1, -1, -1, -1, -2, -1,  1,  5, -2, -2,  0]),
    ('W', [-3, -3, -4, -4, -2, -2, -3, -2, -2, -3, -2, -3, -1,  1, -4, -3, -2, 11,  2, -3]),
    ('Y', [-2, -2, -2, -3, -2, -1, -2, -3,  2, -1, -1, -2, -1,  3, -3, -2, -2,  2,  7, -1]),
    ('V', [ 0, -3, -3, -3, -1, -2, -2, -3, -3,  3,  1, -2,  1, -1, -2, -2,  0, -3, -1,  4]),
    ('X', [-4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4, -4]),
];

// The wildcard row is always last.
fn lookup<T>(table: &'static [(char, T)], residue: char) -> &'static T {
    table
        .iter()
        .find(|(aa, _)| *aa == residue)
        .map_or(&table[table.len() - 1].1, |(_, values)| values)
}

/// Descriptor row for `residue`, or the `X` row if it isn't a standard amino acid.
pub fn property_row(residue: char) -> &'static [f64; N_PROPERTIES] {
    lookup(&PROPERTIES, residue)
}

/// BLOSUM62 row for `residue`, or the `X` row if it isn't a standard amino acid.
pub fn blosum62_row(residue: char) -> &'static [i32; N_BLOSUM62] {
    lookup(&BLOSUM62, residue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alphabet::{AMINO_ACIDS21, WILDCARD};
    use std::collections::HashSet;

    #[test]
    fn tables_cover_the_alphabet_once() {
        let props: HashSet<char> = PROPERTIES.iter().map(|(aa, _)| *aa).collect();
        let blosum: HashSet<char> = BLOSUM62.iter().map(|(aa, _)| *aa).collect();
        let alphabet: HashSet<char> = AMINO_ACIDS21.into_iter().collect();

        assert_eq!(props.len(), PROPERTIES.len(), "Duplicate key in PROPERTIES");
        assert_eq!(blosum.len(), BLOSUM62.len(), "Duplicate key in BLOSUM62");
        assert_eq!(props, alphabet);
        assert_eq!(blosum, alphabet);
    }

    #[test]
    fn blosum62_is_symmetric() {
        for (i, a) in BLOSUM62_COLUMNS.iter().enumerate() {
            for (j, b) in BLOSUM62_COLUMNS.iter().enumerate() {
                assert_eq!(
                    blosum62_row(*a)[j],
                    blosum62_row(*b)[i],
                    "BLOSUM62[{a}][{b}] != BLOSUM62[{b}][{a}]"
                );
            }
        }
    }

    #[test]
    fn blosum62_spot_checks() {
        assert_eq!(blosum62_row('A')[0], 4);
        assert_eq!(blosum62_row('W')[17], 11);
        assert_eq!(blosum62_row('C')[4], 9);
        assert_eq!(blosum62_row('H')[18], 2);
    }

    #[test]
    fn unknown_residues_use_wildcard_rows() {
        assert_eq!(PROPERTIES[PROPERTIES.len() - 1].0, WILDCARD);
        assert_eq!(BLOSUM62[BLOSUM62.len() - 1].0, WILDCARD);
        assert_eq!(property_row('B'), &[0.0; N_PROPERTIES]);
        assert_eq!(property_row('a'), property_row('X'));
        assert_eq!(blosum62_row('Z'), &[-4; N_BLOSUM62]);
    }

    #[test]
    fn alanine_keeps_its_first_row() {
        assert_eq!(property_row('A')[4], 6.11);
        assert_eq!(property_row('R')[4], 10.74);
    }
}
