//! # Padded Batch

use crate::types::{IdSequence, IdType};

/// A batch of id sequences, all of length [`Self::seq_len`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaddedBatch<T: IdType> {
    rows: Vec<IdSequence<T>>,
    seq_len: usize,
}

impl<T: IdType> PaddedBatch<T> {
    /// Assemble a batch from rows already of length `seq_len`.
    pub(crate) fn from_rows(
        rows: Vec<IdSequence<T>>,
        seq_len: usize,
    ) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == seq_len));
        Self { rows, seq_len }
    }

    /// The rows.
    pub fn rows(&self) -> &[IdSequence<T>] {
        &self.rows
    }

    /// Release the rows.
    pub fn into_rows(self) -> Vec<IdSequence<T>> {
        self.rows
    }

    /// The common row length.
    pub fn seq_len(&self) -> usize {
        self.seq_len
    }

    /// The number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Is the batch empty?
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// `(rows, seq_len)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.len(), self.seq_len)
    }

    /// The ids in row-major order; `len() * seq_len()` values.
    pub fn flatten(&self) -> Vec<T> {
        let mut flat = Vec::with_capacity(self.len() * self.seq_len);
        for row in &self.rows {
            flat.extend_from_slice(row);
        }
        flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_and_flatten() {
        let batch: PaddedBatch<u16> = PaddedBatch::from_rows(vec![vec![0, 1, 2], vec![3, 4, 5]], 3);

        assert_eq!(batch.shape(), (2, 3));
        assert_eq!(batch.flatten(), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(batch.rows()[1], vec![3, 4, 5]);
        assert!(!batch.is_empty());

        assert_eq!(batch.into_rows().len(), 2);
    }
}
