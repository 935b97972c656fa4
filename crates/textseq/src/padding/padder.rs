//! # Padder

use crate::{
    errors::{TSResult, TextSeqError},
    padding::{PadSide, PaddedBatch, PaddingOptions},
    types::{IdSequence, IdType},
};

/// The length of the longest sequence; `0` for an empty batch.
pub fn natural_len<T, S>(sequences: &[S]) -> usize
where
    S: AsRef<[T]>,
{
    sequences
        .iter()
        .map(|s| s.as_ref().len())
        .max()
        .unwrap_or(0)
}

/// Pad every sequence to a common length.
///
/// The target is `options.target_len`, or the [`natural_len`] when unset.
/// Sequences are never truncated; rows already at the target are copied
/// unchanged. The inputs are borrowed and left untouched.
///
/// ## Errors
/// [`TextSeqError::PaddingLength`] if the target is shorter than the
/// longest sequence.
#[cfg_attr(feature = "tracing", tracing::instrument(skip(sequences)))]
pub fn try_pad<T, S>(
    sequences: &[S],
    options: &PaddingOptions<T>,
) -> TSResult<PaddedBatch<T>>
where
    T: IdType,
    S: AsRef<[T]>,
{
    let required = natural_len::<T, S>(sequences);

    let seq_len = match options.target_len {
        None => required,
        Some(requested) if requested < required => {
            return Err(TextSeqError::PaddingLength {
                required,
                requested,
            });
        }
        Some(requested) => requested,
    };

    let rows = sequences
        .iter()
        .map(|seq| pad_row(seq.as_ref(), seq_len, options.pad_val, options.side))
        .collect();

    Ok(PaddedBatch::from_rows(rows, seq_len))
}

fn pad_row<T: IdType>(
    seq: &[T],
    seq_len: usize,
    pad_val: T,
    side: PadSide,
) -> IdSequence<T> {
    let fill = seq_len - seq.len();

    let mut row = Vec::with_capacity(seq_len);
    match side {
        PadSide::Left => {
            row.resize(fill, pad_val);
            row.extend_from_slice(seq);
        }
        PadSide::Right => {
            row.extend_from_slice(seq);
            row.resize(seq_len, pad_val);
        }
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    type T = u32;

    #[test]
    fn test_left_padding() {
        let batch = try_pad(
            &[vec![5, 7]],
            &PaddingOptions::<T>::default().with_target_len(Some(4)),
        )
        .unwrap();
        assert_eq!(batch.rows(), &[vec![0, 0, 5, 7]]);
        assert_eq!(batch.seq_len(), 4);
    }

    #[test]
    fn test_right_padding() {
        let batch = try_pad(
            &[vec![5, 7]],
            &PaddingOptions::<T>::default()
                .with_target_len(Some(4))
                .with_side(PadSide::Right),
        )
        .unwrap();
        assert_eq!(batch.rows(), &[vec![5, 7, 0, 0]]);
    }

    #[test]
    fn test_natural_len() {
        let sequences: Vec<Vec<T>> = vec![vec![1], vec![1, 2, 3], vec![]];

        assert_eq!(natural_len::<T, _>(&sequences), 3);

        let batch = try_pad(&sequences, &PaddingOptions::<T>::default().with_pad_val(9)).unwrap();
        assert_eq!(
            batch.rows(),
            &[vec![9, 9, 1], vec![1, 2, 3], vec![9, 9, 9]]
        );
    }

    #[test]
    fn test_explicit_natural_len_matches_default() {
        let sequences: Vec<Vec<T>> = vec![vec![4, 2], vec![1, 2, 3, 4, 5]];

        let implicit = try_pad(&sequences, &PaddingOptions::<T>::default()).unwrap();
        let explicit = try_pad(
            &sequences,
            &PaddingOptions::<T>::default().with_target_len(Some(5)),
        )
        .unwrap();

        assert_eq!(implicit, explicit);
    }

    #[test]
    fn test_full_length_unchanged() {
        let sequences: Vec<Vec<T>> = vec![vec![3, 1, 4], vec![1, 5, 9]];

        let batch = try_pad(
            &sequences,
            &PaddingOptions::<T>::default().with_target_len(Some(3)),
        )
        .unwrap();

        assert_eq!(batch.rows(), sequences.as_slice());
    }

    #[test]
    fn test_inputs_reusable() {
        let sequences: Vec<Vec<T>> = vec![vec![1], vec![2, 3]];
        let before = sequences.clone();

        let _ = try_pad(
            &sequences,
            &PaddingOptions::<T>::default().with_target_len(Some(6)),
        )
        .unwrap();

        assert_eq!(sequences, before);
    }

    #[test]
    fn test_padding_length_error() {
        let sequences: Vec<Vec<T>> = vec![vec![1, 2, 3, 4, 5], vec![1]];

        let err = try_pad(
            &sequences,
            &PaddingOptions::<T>::default().with_target_len(Some(3)),
        )
        .unwrap_err();

        assert!(matches!(
            err,
            TextSeqError::PaddingLength {
                required: 5,
                requested: 3
            }
        ));
    }

    #[test]
    fn test_empty_batch() {
        let sequences: Vec<Vec<T>> = vec![];

        let batch = try_pad(&sequences, &PaddingOptions::<T>::default()).unwrap();
        assert!(batch.is_empty());
        assert_eq!(batch.seq_len(), 0);

        let batch = try_pad(
            &sequences,
            &PaddingOptions::<T>::default().with_target_len(Some(4)),
        )
        .unwrap();
        assert_eq!(batch.shape(), (0, 4));
    }

    #[test]
    fn test_slices_as_input() {
        let a: &[T] = &[1, 2];
        let b: &[T] = &[3];

        let batch = try_pad(&[a, b], &PaddingOptions::<T>::default()).unwrap();
        assert_eq!(batch.rows(), &[vec![1, 2], vec![0, 3]]);
    }
}
