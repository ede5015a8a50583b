use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeaturizeError {
    /// Per-residue tensors disagree on the residue count. This marks an
    /// upstream aggregation bug for the named protein; construction aborts
    /// rather than returning a truncated or misaligned graph.
    #[error("protein '{id}': {field} has {actual} rows, expected {expected}")]
    LengthMismatch {
        id: String,
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error(transparent)]
    Tensor(#[from] candle_core::Error),
}
