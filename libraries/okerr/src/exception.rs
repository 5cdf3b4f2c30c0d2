// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright okerr Contributors 2026.

//! Misuse failures raised by `Result`.
//!
//! These never travel inside a `Result::Err`; that side belongs to the
//! caller's domain errors. A `ResultException` reports that the `Result` API
//! itself was used incorrectly.

use thiserror::Error;

use crate::variant::Variant;

/// A misuse of the `Result` API.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ResultException {
    /// A `Result` was assembled with both slots filled, or neither.
    #[error("Result must be an instance of Ok or Err")]
    IllegalInstantiation,

    /// An extractor was called on the variant it cannot extract from.
    #[error("cannot call {method} on a Result of type {variant}")]
    IllegalCall {
        /// The extractor that was called.
        method: &'static str,
        /// The variant the `Result` actually was.
        variant: Variant,
    },

    /// An `expect` or `expect_err` assertion failed. Holds the caller's
    /// message verbatim.
    #[error("{0}")]
    Expectation(String),
}
