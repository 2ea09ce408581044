// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;
use tracing::debug;

/// Errors raised at the raw-slice boundary of bound constructors.
///
/// Geometric operations themselves are total; this is the only failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoundError {
    /// The slice held fewer scalars than the target shape needs.
    #[error("invalid argument: {shape} needs at least {expected} scalars, got {actual}")]
    InvalidArgument {
        /// Name of the shape being built.
        shape: &'static str,
        /// Minimum number of scalars required.
        expected: usize,
        /// Number of scalars supplied.
        actual: usize,
    },
}

impl BoundError {
    pub(crate) fn short_slice(shape: &'static str, expected: usize, actual: usize) -> Self {
        debug!(shape, expected, actual, "rejected short slice");
        Self::InvalidArgument {
            shape,
            expected,
            actual,
        }
    }
}
