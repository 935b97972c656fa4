//! # Padding Options

use crate::types::IdType;

/// Which end of a sequence receives padding.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PadSide {
    /// Pad values precede the sequence: `[0, 0, 5, 7]`.
    #[default]
    Left,

    /// Pad values follow the sequence: `[5, 7, 0, 0]`.
    Right,
}

/// Options for [`crate::padding::try_pad`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaddingOptions<T: IdType> {
    /// The target length; `None` pads to the longest sequence.
    pub target_len: Option<usize>,

    /// The value inserted as padding.
    ///
    /// Rows share the id type `T`, so this must be a valid `T` value;
    /// negative sentinels are not representable.
    pub pad_val: T,

    /// Which end receives padding.
    pub side: PadSide,
}

impl<T: IdType> Default for PaddingOptions<T> {
    fn default() -> Self {
        Self {
            target_len: None,
            pad_val: T::zero(),
            side: PadSide::Left,
        }
    }
}

impl<T: IdType> PaddingOptions<T> {
    /// Set the target length.
    pub fn with_target_len(
        self,
        target_len: Option<usize>,
    ) -> Self {
        Self { target_len, ..self }
    }

    /// Set the padding value.
    pub fn with_pad_val(
        self,
        pad_val: T,
    ) -> Self {
        Self { pad_val, ..self }
    }

    /// Set the padding side.
    pub fn with_side(
        self,
        side: PadSide,
    ) -> Self {
        Self { side, ..self }
    }
}
