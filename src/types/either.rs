#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::iter::Iter;

/// Value-or-captured-error container.
///
/// `Either<T, E>` is the result of a pipeline stage: either the payload the
/// stage produced, or the exact error a stage body returned. Once a pipeline
/// holds an `Error`, every later lifted stage passes it through untouched.
///
/// # Serde Support
///
/// `Either` implements `Serialize` and `Deserialize` when `T` and `E` do and
/// the `serde` feature is enabled.
///
/// # Type Parameters
///
/// * `T` - The success payload type
/// * `E` - The captured error type
///
/// # Variants
///
/// * `Success(T)` - The payload produced by a stage
/// * `Error(E)` - The error captured from a failing stage
///
/// # Examples
///
/// ```
/// use chainsmoke::Either;
///
/// let ok: Either<i32, &str> = Either::success(7);
/// assert_eq!(ok.value(), Some(&7));
///
/// let failed: Either<i32, &str> = Either::failure("boom");
/// assert_eq!(failed.error(), Some(&"boom"));
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Either<T, E> {
    Success(T),
    Error(E),
}

impl<T, E> Either<T, E> {
    /// Creates the success variant.
    #[inline]
    pub fn success(value: T) -> Self {
        Self::Success(value)
    }

    /// Creates the failure variant from an error payload.
    #[inline]
    pub fn failure(error: E) -> Self {
        Self::Error(error)
    }

    /// Returns `true` if this is the success variant.
    #[must_use]
    #[inline]
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Returns `true` if this is the failure variant.
    #[must_use]
    #[inline]
    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// Borrows the success payload, if any.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// Borrows the captured error, if any.
    #[must_use]
    #[inline]
    pub fn error(&self) -> Option<&E> {
        match self {
            Self::Success(_) => None,
            Self::Error(error) => Some(error),
        }
    }

    /// Converts `&Either<T, E>` into `Either<&T, &E>`.
    #[inline]
    pub fn as_ref(&self) -> Either<&T, &E> {
        match self {
            Self::Success(value) => Either::Success(value),
            Self::Error(error) => Either::Error(error),
        }
    }

    /// Consumes the container, returning the success payload if present.
    #[must_use]
    #[inline]
    pub fn into_value(self) -> Option<T> {
        match self {
            Self::Success(value) => Some(value),
            Self::Error(_) => None,
        }
    }

    /// Consumes the container, returning the captured error if present.
    #[must_use]
    #[inline]
    pub fn into_error(self) -> Option<E> {
        match self {
            Self::Success(_) => None,
            Self::Error(error) => Some(error),
        }
    }

    /// Converts into a standard `Result`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsmoke::Either;
    ///
    /// let either: Either<i32, &str> = Either::failure("bad input");
    /// assert_eq!(either.into_result(), Err("bad input"));
    /// ```
    #[inline]
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Self::Success(value) => Ok(value),
            Self::Error(error) => Err(error),
        }
    }

    /// Maps the success payload, leaving a captured error untouched.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Either<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Success(value) => Either::Success(f(value)),
            Self::Error(error) => Either::Error(error),
        }
    }

    /// Maps the captured error, leaving a success payload untouched.
    #[inline]
    pub fn map_error<G, F>(self, f: F) -> Either<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Self::Success(value) => Either::Success(value),
            Self::Error(error) => Either::Error(f(error)),
        }
    }

    /// Chains a computation that may itself fail.
    ///
    /// Behaves like [`Result::and_then`]: `f` runs only on the success track.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsmoke::Either;
    ///
    /// fn halve(v: i32) -> Either<i32, &'static str> {
    ///     if v % 2 == 0 { Either::Success(v / 2) } else { Either::Error("odd") }
    /// }
    ///
    /// assert_eq!(Either::Success(8).and_then(halve), Either::Success(4));
    /// assert_eq!(Either::Success(3).and_then(halve), Either::Error("odd"));
    /// ```
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Either<U, E>
    where
        F: FnOnce(T) -> Either<U, E>,
    {
        match self {
            Self::Success(value) => f(value),
            Self::Error(error) => Either::Error(error),
        }
    }

    /// Returns the payload or `default` on the failure track.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Success(value) => value,
            Self::Error(_) => default,
        }
    }

    /// Returns the payload or computes one from the captured error.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce(E) -> T,
    {
        match self {
            Self::Success(value) => value,
            Self::Error(error) => f(error),
        }
    }

    /// Iterates over the success payload (zero or one item).
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.value())
    }
}

impl<T> Either<T, T> {
    /// Returns whichever payload the active variant holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsmoke::Either;
    ///
    /// let either: Either<&str, &str> = Either::Error("fallback");
    /// assert_eq!(either.into_inner(), "fallback");
    /// ```
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Self::Success(value) | Self::Error(value) => value,
        }
    }
}

impl<T, E> From<T> for Either<T, E> {
    #[inline]
    fn from(value: T) -> Self {
        Self::Success(value)
    }
}

impl<T, E> IntoIterator for Either<T, E> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_value().into_iter()
    }
}

impl<'a, T, E> IntoIterator for &'a Either<T, E> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
