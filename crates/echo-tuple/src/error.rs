// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use thiserror::Error;

/// Errors raised when building tuple values from raw slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TupleError {
    /// The slice held fewer components than the target type needs.
    #[error("invalid argument: expected at least {expected} components, got {actual}")]
    InvalidArgument {
        /// Minimum number of components required.
        expected: usize,
        /// Number of components supplied.
        actual: usize,
    },
}
