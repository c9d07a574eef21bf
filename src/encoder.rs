//! Protein sequence encoders that add a feature-vector column to a [`DataFrame`].
//!
//! The per-sequence functions ([`one_hot`], [`properties`], [`blosum62`]) are pure and
//! can be used on their own. [`ProteinSequenceEncoder`] maps one of them over a string
//! column and returns a new frame with a `List(Float64)` column holding the vectors.

use crate::alphabet::{alphabet_index, ALPHABET_SIZE};
use crate::properties::{blosum62_row, property_row, N_BLOSUM62, N_PROPERTIES};
use polars::prelude::*;
use rayon::prelude::*;
use tracing::debug;

/// Feature encodings available for a protein sequence.
#[derive(clap::ValueEnum, Clone, Debug, Copy, PartialEq, Eq, Default)]
pub enum EncodingMethod {
    /// 21 values per residue, one of which is set
    #[default]
    OneHot,
    /// 7 physico-chemical descriptors per residue
    Property,
    /// 20 BLOSUM62 substitution scores per residue
    Blosum62,
}

impl EncodingMethod {
    /// Number of values each residue contributes to the feature vector.
    pub fn width(&self) -> usize {
        match self {
            EncodingMethod::OneHot => ALPHABET_SIZE,
            EncodingMethod::Property => N_PROPERTIES,
            EncodingMethod::Blosum62 => N_BLOSUM62,
        }
    }

    /// Encode a single sequence.
    pub fn encode_sequence(&self, seq: &str) -> Vec<f64> {
        match self {
            EncodingMethod::OneHot => one_hot(seq),
            EncodingMethod::Property => properties(seq),
            EncodingMethod::Blosum62 => blosum62(seq),
        }
    }
}

impl std::fmt::Display for EncodingMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            EncodingMethod::OneHot => write!(f, "one-hot"),
            EncodingMethod::Property => write!(f, "property"),
            EncodingMethod::Blosum62 => write!(f, "blosum62"),
        }
    }
}

/// One-hot encode a protein sequence over the 21-letter alphabet.
///
/// Residue `i` sets position `i * 21 + alphabet_index(residue)` of an all-zero vector of
/// length `21 * len`. Residues outside the 20 natural amino acids are encoded as `X`.
pub fn one_hot(seq: &str) -> Vec<f64> {
    let mut values = vec![0.0; ALPHABET_SIZE * seq.chars().count()];
    for (i, residue) in seq.chars().enumerate() {
        values[i * ALPHABET_SIZE + alphabet_index(residue)] = 1.0;
    }
    values
}

/// Concatenate the physico-chemical descriptor rows of each residue.
pub fn properties(seq: &str) -> Vec<f64> {
    seq.chars()
        .flat_map(|residue| property_row(residue).iter().copied())
        .collect()
}

/// Concatenate the BLOSUM62 rows of each residue.
pub fn blosum62(seq: &str) -> Vec<f64> {
    seq.chars()
        .flat_map(|residue| blosum62_row(residue).iter().map(|&s| s as f64))
        .collect()
}

/// Encodes the protein sequences of a [`DataFrame`] column into feature vectors.
///
/// The sequence column defaults to `"sequence"` and the feature column to `"features"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProteinSequenceEncoder {
    /// Name of the column holding one-letter amino-acid sequences
    pub input_col: String,
    /// Name of the column the feature vectors are written to
    pub output_col: String,
}

impl Default for ProteinSequenceEncoder {
    fn default() -> Self {
        Self::new("sequence", "features")
    }
}

impl ProteinSequenceEncoder {
    /// Create an encoder reading from `input_col` and writing to `output_col`.
    pub fn new(input_col: impl Into<String>, output_col: impl Into<String>) -> Self {
        Self {
            input_col: input_col.into(),
            output_col: output_col.into(),
        }
    }

    /// One-hot encode the sequence column. See [`one_hot`].
    pub fn one_hot_encode(&self, df: &DataFrame) -> PolarsResult<DataFrame> {
        self.encode(df, EncodingMethod::OneHot)
    }

    /// Encode the sequence column with physico-chemical descriptors. See [`properties`].
    pub fn property_encode(&self, df: &DataFrame) -> PolarsResult<DataFrame> {
        self.encode(df, EncodingMethod::Property)
    }

    /// Encode the sequence column with BLOSUM62 rows. See [`blosum62`].
    pub fn blosum62_encode(&self, df: &DataFrame) -> PolarsResult<DataFrame> {
        self.encode(df, EncodingMethod::Blosum62)
    }

    /// Return a copy of `df` with the feature column added (or replaced).
    ///
    /// Null sequences produce null feature vectors. Fails if the input column is
    /// missing or doesn't hold strings.
    pub fn encode(&self, df: &DataFrame, method: EncodingMethod) -> PolarsResult<DataFrame> {
        let sequences: Vec<Option<&str>> = df.column(&self.input_col)?.str()?.into_iter().collect();
        debug!(
            "Encoding {} sequences from '{}' into '{}' ({method})",
            sequences.len(),
            self.input_col,
            self.output_col
        );

        let vectors: Vec<Option<Vec<f64>>> = sequences
            .par_iter()
            .map(|seq| seq.map(|s| method.encode_sequence(s)))
            .collect();

        // Typed builder keeps the column `List(Float64)` even when every row is null
        let values_capacity = vectors.iter().flatten().map(Vec::len).sum();
        let mut builder = ListPrimitiveChunkedBuilder::<Float64Type>::new(
            self.output_col.as_str().into(),
            vectors.len(),
            values_capacity,
            DataType::Float64,
        );
        for vector in &vectors {
            match vector {
                Some(values) => builder.append_slice(values),
                None => builder.append_null(),
            }
        }
        let features = builder.finish();

        let mut out = df.clone();
        out.with_column(features.into_series())?;
        Ok(out)
    }
}
