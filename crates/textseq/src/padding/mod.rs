//! # Padding
//!
//! Normalizes a batch of id sequences to a common length.
//!
//! * [`PaddingOptions`] - target length, pad value, and [`PadSide`].
//! * [`try_pad`] - builds a new [`PaddedBatch`]; the inputs are never mutated.

pub mod padded_batch;
pub mod padder;
pub mod padding_options;

#[doc(inline)]
pub use padded_batch::PaddedBatch;
#[doc(inline)]
pub use padder::{natural_len, try_pad};
#[doc(inline)]
pub use padding_options::{PadSide, PaddingOptions};
