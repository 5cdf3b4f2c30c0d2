// Licensed under the Apache License, Version 2.0 or the MIT License.
// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright okerr Contributors 2026.

//! The `Result` sum type and its combinators.
//!
//! Every method here takes `self` by value unless it is a predicate or a
//! borrow adapter, so extracting a value consumes the `Result`. Use
//! [`Result::as_ref`] first for a non-consuming read; the `Result` is
//! `Clone`/`Copy` whenever both payloads are.
//!
//! Within this module `Self::Ok`/`Self::Err` are the variants of the type
//! defined here, and the bare `Ok`/`Err` are the standard library's.

use core::option;

use crate::exception::ResultException;
use crate::variant::Variant;

type StdResult<T, E> = core::result::Result<T, E>;

/// Either a success value (`Ok`) or an error value (`Err`).
///
/// These are the only two shapes; a `Result` can never hold both values or
/// neither of them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[must_use = "this `Result` may be an `Err` variant, which should be handled"]
pub enum Result<T, E> {
    /// Contains the success value.
    Ok(T),
    /// Contains the error value.
    Err(E),
}

impl<T, E> Result<T, E> {
    /// Builds a `Result` from two raw slots.
    ///
    /// Exactly one slot must be filled. Both filled, or both empty, is
    /// refused with [`ResultException::IllegalInstantiation`].
    ///
    /// # Examples
    ///
    /// ```
    /// use okerr::{Result, ResultException};
    ///
    /// let x = Result::<u32, &str>::from_slots(Some(2), None);
    /// assert_eq!(x, Ok(Result::Ok(2)));
    ///
    /// let y = Result::<u32, &str>::from_slots(Some(2), Some("two"));
    /// assert_eq!(y, Err(ResultException::IllegalInstantiation));
    /// ```
    pub fn from_slots(success: Option<T>, error: Option<E>) -> StdResult<Self, ResultException> {
        match (success, error) {
            (Some(value), None) => Ok(Self::Ok(value)),
            (None, Some(error)) => Ok(Self::Err(error)),
            _ => Err(ResultException::IllegalInstantiation),
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Querying the variant
    /////////////////////////////////////////////////////////////////////////

    /// Returns `true` if the result is `Ok`.
    pub fn is_ok(&self) -> bool {
        match self {
            Self::Ok(_) => true,
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if the result is `Err`.
    pub fn is_err(&self) -> bool {
        !self.is_ok()
    }

    /// Returns `true` if the result is `Ok` and its value satisfies `f`.
    /// `f` is not called on an `Err`.
    pub fn is_ok_and<F>(self, f: F) -> bool
    where
        F: FnOnce(T) -> bool,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(_) => false,
        }
    }

    /// Returns `true` if the result is `Err` and its error satisfies `f`.
    /// `f` is not called on an `Ok`.
    pub fn is_err_and<F>(self, f: F) -> bool
    where
        F: FnOnce(E) -> bool,
    {
        match self {
            Self::Ok(_) => false,
            Self::Err(error) => f(error),
        }
    }

    /// Which variant the result is.
    pub fn variant(&self) -> Variant {
        match self {
            Self::Ok(_) => Variant::Ok,
            Self::Err(_) => Variant::Err,
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Projection to Option
    /////////////////////////////////////////////////////////////////////////

    /// Converts into an `Option<T>`, discarding the error, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use okerr::Result;
    ///
    /// let x: Result<u32, &str> = Result::Ok(2);
    /// assert_eq!(x.ok(), Some(2));
    ///
    /// let x: Result<u32, &str> = Result::Err("Nothing here");
    /// assert_eq!(x.ok(), None);
    /// ```
    pub fn ok(self) -> Option<T> {
        match self {
            Self::Ok(value) => Some(value),
            Self::Err(_) => None,
        }
    }

    /// Converts into an `Option<E>`, discarding the success value, if any.
    pub fn err(self) -> Option<E> {
        match self {
            Self::Ok(_) => None,
            Self::Err(error) => Some(error),
        }
    }

    /// Iterates over the success value; yields nothing on an `Err`.
    pub fn iter(&self) -> option::IntoIter<&T> {
        self.as_ref().ok().into_iter()
    }

    /////////////////////////////////////////////////////////////////////////
    // Borrow adapters
    /////////////////////////////////////////////////////////////////////////

    /// Converts from `&Result<T, E>` to `Result<&T, &E>`, leaving the
    /// original in place.
    pub fn as_ref(&self) -> Result<&T, &E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Converts from `&mut Result<T, E>` to `Result<&mut T, &mut E>`.
    pub fn as_mut(&mut self) -> Result<&mut T, &mut E> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Transforming the contained values
    /////////////////////////////////////////////////////////////////////////

    /// Applies `op` to an `Ok` value, leaving an `Err` untouched.
    ///
    /// The variant never changes. The returned `Result` is always a newly
    /// built value, even when `op` is the identity.
    ///
    /// # Examples
    ///
    /// ```
    /// use okerr::Result;
    ///
    /// let x: Result<&str, &str> = Result::Ok("foo");
    /// assert_eq!(x.map(|s| s.len()), Result::Ok(3));
    ///
    /// let y: Result<&str, &str> = Result::Err("bad");
    /// assert_eq!(y.map(|s| s.len()), Result::Err("bad"));
    /// ```
    pub fn map<U, F>(self, op: F) -> Result<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => Result::Ok(op(value)),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Applies `op` to an `Err` value, leaving an `Ok` untouched.
    pub fn map_err<F, O>(self, op: O) -> Result<T, F>
    where
        O: FnOnce(E) -> F,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => Result::Err(op(error)),
        }
    }

    /// Applies `f` to an `Ok` value, or returns `default` on an `Err`.
    ///
    /// `default` is eagerly evaluated; use [`Result::map_or_else`] when it
    /// is the result of a function call.
    pub fn map_or<U, F>(self, default: U, f: F) -> U
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(_) => default,
        }
    }

    /// Applies `f` to an `Ok` value, or `default` to an `Err` value.
    pub fn map_or_else<U, D, F>(self, default: D, f: F) -> U
    where
        D: FnOnce(E) -> U,
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Ok(value) => f(value),
            Self::Err(error) => default(error),
        }
    }

    /// Calls `f` with a reference to the `Ok` value, then returns `self`.
    pub fn inspect<F>(self, f: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let Self::Ok(ref value) = self {
            f(value);
        }
        self
    }

    /// Calls `f` with a reference to the `Err` value, then returns `self`.
    pub fn inspect_err<F>(self, f: F) -> Self
    where
        F: FnOnce(&E),
    {
        if let Self::Err(ref error) = self {
            f(error);
        }
        self
    }

    /////////////////////////////////////////////////////////////////////////
    // Boolean operators
    /////////////////////////////////////////////////////////////////////////

    /// Returns `res` if the result is `Ok`, otherwise the `Err` value of
    /// `self`.
    ///
    /// `res` is moved through as is; it is not rebuilt.
    pub fn and<U>(self, res: Result<U, E>) -> Result<U, E> {
        match self {
            Self::Ok(_) => res,
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Calls `op` with the `Ok` value and returns what it returns. On an
    /// `Err`, `op` is never called and the error is propagated.
    ///
    /// # Examples
    ///
    /// ```
    /// use okerr::Result;
    ///
    /// fn halve(x: u32) -> Result<u32, String> {
    ///     if x % 2 == 0 {
    ///         Result::Ok(x / 2)
    ///     } else {
    ///         Result::Err(format!("{} is odd", x))
    ///     }
    /// }
    ///
    /// assert_eq!(Result::Ok(8).and_then(halve).and_then(halve), Result::Ok(2));
    /// assert_eq!(
    ///     Result::Ok(6).and_then(halve).and_then(halve),
    ///     Result::Err(String::from("3 is odd"))
    /// );
    /// ```
    pub fn and_then<U, F>(self, op: F) -> Result<U, E>
    where
        F: FnOnce(T) -> Result<U, E>,
    {
        match self {
            Self::Ok(value) => op(value),
            Self::Err(error) => Result::Err(error),
        }
    }

    /// Returns `res` if the result is `Err`, otherwise the `Ok` value of
    /// `self`.
    ///
    /// `res` is moved through as is; it is not rebuilt.
    pub fn or<F>(self, res: Result<T, F>) -> Result<T, F> {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(_) => res,
        }
    }

    /// Calls `op` with the `Err` value and returns what it returns. On an
    /// `Ok`, `op` is never called and the value is propagated.
    pub fn or_else<F, O>(self, op: O) -> Result<T, F>
    where
        O: FnOnce(E) -> Result<T, F>,
    {
        match self {
            Self::Ok(value) => Result::Ok(value),
            Self::Err(error) => op(error),
        }
    }

    /////////////////////////////////////////////////////////////////////////
    // Extracting the contained values
    /////////////////////////////////////////////////////////////////////////

    /// Returns the `Ok` value, or reports calling `unwrap` on an `Err`.
    pub fn try_unwrap(self) -> StdResult<T, ResultException> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(_) => Err(ResultException::IllegalCall {
                method: "unwrap",
                variant: Variant::Err,
            }),
        }
    }

    /// Returns the `Err` value, or reports calling `unwrap_err` on an `Ok`.
    pub fn try_unwrap_err(self) -> StdResult<E, ResultException> {
        match self {
            Self::Ok(_) => Err(ResultException::IllegalCall {
                method: "unwrap_err",
                variant: Variant::Ok,
            }),
            Self::Err(error) => Ok(error),
        }
    }

    /// Returns the `Ok` value, or `msg` as an
    /// [`Expectation`](ResultException::Expectation).
    pub fn try_expect(self, msg: &str) -> StdResult<T, ResultException> {
        match self {
            Self::Ok(value) => Ok(value),
            Self::Err(_) => Err(ResultException::Expectation(msg.to_owned())),
        }
    }

    /// Returns the `Err` value, or `msg` as an
    /// [`Expectation`](ResultException::Expectation).
    pub fn try_expect_err(self, msg: &str) -> StdResult<E, ResultException> {
        match self {
            Self::Ok(_) => Err(ResultException::Expectation(msg.to_owned())),
            Self::Err(error) => Ok(error),
        }
    }

    /// Returns the `Ok` value.
    ///
    /// # Panics
    ///
    /// Panics with `cannot call unwrap on a Result of type Err` if the value
    /// is an `Err`. Use [`Result::try_unwrap`] to get the failure as a
    /// value instead.
    ///
    /// # Examples
    ///
    /// ```should_panic
    /// use okerr::Result;
    ///
    /// let x: Result<u32, &str> = Result::Err("emergency failure");
    /// x.unwrap(); // panics
    /// ```
    #[track_caller]
    pub fn unwrap(self) -> T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(exception) => panic!("{}", exception),
        }
    }

    /// Returns the `Err` value.
    ///
    /// # Panics
    ///
    /// Panics with `cannot call unwrap_err on a Result of type Ok` if the
    /// value is an `Ok`. The message uses the Rust method name.
    #[track_caller]
    pub fn unwrap_err(self) -> E {
        match self.try_unwrap_err() {
            Ok(error) => error,
            Err(exception) => panic!("{}", exception),
        }
    }

    /// Returns the `Ok` value.
    ///
    /// # Panics
    ///
    /// Panics with exactly `msg` if the value is an `Err`.
    #[track_caller]
    pub fn expect(self, msg: &str) -> T {
        match self.try_expect(msg) {
            Ok(value) => value,
            Err(exception) => panic!("{}", exception),
        }
    }

    /// Returns the `Err` value.
    ///
    /// # Panics
    ///
    /// Panics with exactly `msg` if the value is an `Ok`.
    #[track_caller]
    pub fn expect_err(self, msg: &str) -> E {
        match self.try_expect_err(msg) {
            Ok(error) => error,
            Err(exception) => panic!("{}", exception),
        }
    }

    /// Returns the `Ok` value or `default`. Never panics.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => default,
        }
    }

    /// Returns the `Ok` value or computes one from the `Err` value.
    pub fn unwrap_or_else<F>(self, op: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(error) => op(error),
        }
    }

    /// Returns the `Ok` value or the default value of `T`.
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        match self {
            Self::Ok(value) => value,
            Self::Err(_) => T::default(),
        }
    }

    /// Converts into the standard library's result, e.g. to use `?`.
    pub fn into_std(self) -> StdResult<T, E> {
        self.into()
    }
}

impl<T: Copy, E> Result<&T, E> {
    /// Maps a `Result<&T, E>` to a `Result<T, E>` by copying the value.
    pub fn copied(self) -> Result<T, E> {
        match self {
            Self::Ok(&value) => Result::Ok(value),
            Self::Err(error) => Result::Err(error),
        }
    }
}

impl<T: Clone, E> Result<&T, E> {
    /// Maps a `Result<&T, E>` to a `Result<T, E>` by cloning the value.
    pub fn cloned(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Result::Ok(value.clone()),
            Self::Err(error) => Result::Err(error),
        }
    }
}

impl<T: Copy, E> Result<&mut T, E> {
    /// Maps a `Result<&mut T, E>` to a `Result<T, E>` by copying the value.
    pub fn copied(self) -> Result<T, E> {
        match self {
            Self::Ok(&mut value) => Result::Ok(value),
            Self::Err(error) => Result::Err(error),
        }
    }
}

impl<T: Clone, E> Result<&mut T, E> {
    /// Maps a `Result<&mut T, E>` to a `Result<T, E>` by cloning the value.
    pub fn cloned(self) -> Result<T, E> {
        match self {
            Self::Ok(value) => Result::Ok(value.clone()),
            Self::Err(error) => Result::Err(error),
        }
    }
}

impl<T, E> From<StdResult<T, E>> for Result<T, E> {
    fn from(res: StdResult<T, E>) -> Self {
        match res {
            Ok(value) => Self::Ok(value),
            Err(error) => Self::Err(error),
        }
    }
}

impl<T, E> From<Result<T, E>> for StdResult<T, E> {
    fn from(res: Result<T, E>) -> Self {
        match res {
            Result::Ok(value) => Ok(value),
            Result::Err(error) => Err(error),
        }
    }
}

impl<T, E> IntoIterator for Result<T, E> {
    type Item = T;
    type IntoIter = option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.ok().into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Result<T, E> {
    type Item = &'a T;
    type IntoIter = option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
