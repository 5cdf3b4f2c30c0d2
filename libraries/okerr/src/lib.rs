// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright okerr Contributors 2026.

//! A success-or-error value type.
//!
//! [`Result`] holds exactly one of a success value ([`Result::Ok`]) or an
//! error value ([`Result::Err`]). The two variants are the only way to build
//! one; there is no untagged form. Combinators such as [`Result::and_then`]
//! and [`Result::map_err`] transform a value without unwinding, and the
//! unwrap family extracts it.
//!
//! Calling an extractor on the wrong variant is a programmer error and
//! panics. The `try_*` extractors report the same misuse as a
//! [`ResultException`] instead, so callers can match on it.
//!
//! ```
//! use okerr::prelude::*;
//!
//! let word: Result<String, &str> = Ok(String::from("foo"));
//! let joined = word.and_then(|w| Ok(w + "bar"));
//! assert_eq!(joined.unwrap(), "foobar");
//! ```

pub mod exception;
pub mod result;
pub mod variant;

pub use crate::exception::ResultException;
pub use crate::result::Result;
pub use crate::variant::Variant;

/// Brings the `Result` type and its two constructors into scope.
///
/// Importing the prelude shadows the standard library's `Result`, `Ok` and
/// `Err` in the importing module.
pub mod prelude {
    pub use crate::exception::ResultException;
    pub use crate::result::Result::{self, Err, Ok};
    pub use crate::variant::Variant;
}

#[cfg(test)]
mod tests;
