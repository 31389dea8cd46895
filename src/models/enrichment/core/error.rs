use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Errors that can occur while building [`SeparationParameters`](super::SeparationParameters).
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SeparationError {
    /// A single input violates its numeric constraint.
    #[error("invalid {quantity}: {source}")]
    Invalid {
        /// Name of the offending input.
        quantity: &'static str,

        #[source]
        source: ConstraintError,
    },

    /// The assays are not ordered as tails < feed < product.
    #[error(
        "assays must satisfy tails < feed < product \
         (tails {tails}, feed {feed}, product {product})"
    )]
    Ordering {
        /// Tails assay fraction.
        tails: f64,

        /// Feed assay fraction.
        feed: f64,

        /// Product assay fraction.
        product: f64,
    },
}

impl SeparationError {
    /// Returns a closure that tags a [`ConstraintError`] with the input it came from.
    pub(super) fn invalid(quantity: &'static str) -> impl Fn(ConstraintError) -> Self {
        move |source| Self::Invalid { quantity, source }
    }
}
