//! Conversion helpers between railroad containers and the standard library.
//!
//! These adapters let a pipeline start from, or hand its result back to, code
//! that speaks `Result` and `Option`.
//!
//! # Examples
//!
//! ```
//! use chainsmoke::convert::*;
//! use chainsmoke::{Either, Maybe};
//!
//! let either = result_to_either::<i32, &str>(Ok(42));
//! assert_eq!(either, Either::Success(42));
//!
//! let maybe = either_to_maybe(Either::<i32, &str>::Error("gone"));
//! assert_eq!(maybe, Maybe::Nothing);
//! ```

use crate::types::{Either, Maybe};

/// Converts a `Result` into an [`Either`].
///
/// # Examples
///
/// ```
/// use chainsmoke::convert::result_to_either;
/// use chainsmoke::Either;
///
/// assert_eq!(result_to_either::<i32, &str>(Err("bad")), Either::Error("bad"));
/// ```
#[inline]
pub fn result_to_either<T, E>(result: Result<T, E>) -> Either<T, E> {
    match result {
        Ok(value) => Either::Success(value),
        Err(error) => Either::Error(error),
    }
}

/// Converts an [`Either`] into a `Result`.
#[inline]
pub fn either_to_result<T, E>(either: Either<T, E>) -> Result<T, E> {
    either.into_result()
}

/// Converts an `Option` into a [`Maybe`].
#[inline]
pub fn option_to_maybe<T>(option: Option<T>) -> Maybe<T> {
    match option {
        Some(value) => Maybe::Just(value),
        None => Maybe::Nothing,
    }
}

/// Converts a [`Maybe`] into an `Option`.
#[inline]
pub fn maybe_to_option<T>(maybe: Maybe<T>) -> Option<T> {
    maybe.into_option()
}

/// Moves an [`Either`] onto the [`Maybe`] railroad, discarding a captured error.
///
/// # Examples
///
/// ```
/// use chainsmoke::convert::either_to_maybe;
/// use chainsmoke::{Either, Maybe};
///
/// assert_eq!(either_to_maybe(Either::<u8, ()>::Success(1)), Maybe::Just(1));
/// ```
#[inline]
pub fn either_to_maybe<T, E>(either: Either<T, E>) -> Maybe<T> {
    match either {
        Either::Success(value) => Maybe::Just(value),
        Either::Error(error) => {
            crate::trace::discarded(&error);
            Maybe::Nothing
        }
    }
}

/// Moves a [`Maybe`] onto the [`Either`] railroad, using `error` for `Nothing`.
///
/// The closure only runs on the absent path.
#[inline]
pub fn maybe_to_either<T, E, F>(maybe: Maybe<T>, error: F) -> Either<T, E>
where
    F: FnOnce() -> E,
{
    match maybe {
        Maybe::Just(value) => Either::Success(value),
        Maybe::Nothing => Either::Error(error()),
    }
}

impl<T, E> From<Either<T, E>> for Result<T, E> {
    #[inline]
    fn from(either: Either<T, E>) -> Self {
        either.into_result()
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    #[inline]
    fn from(maybe: Maybe<T>) -> Self {
        maybe.into_option()
    }
}
