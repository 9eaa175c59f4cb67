#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::iter::Iter;

/// Present-or-absent container.
///
/// `Maybe<T>` is the classical option type used as a railroad: a failing stage
/// moves the pipeline onto `Nothing`, and the error that caused it is dropped.
/// Use [`Either`](crate::Either) when the cause has to survive to the end of
/// the pipeline.
///
/// # Variants
///
/// * `Just(T)` - A present payload
/// * `Nothing` - The absence marker
///
/// # Examples
///
/// ```
/// use chainsmoke::Maybe;
///
/// let present = Maybe::just(3);
/// assert_eq!(present.map(|v| v + 1), Maybe::Just(4));
///
/// let absent: Maybe<i32> = Maybe::nothing();
/// assert!(absent.is_nothing());
/// ```
#[must_use]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Debug, Hash)]
pub enum Maybe<T> {
    Just(T),
    Nothing,
}

impl<T> Maybe<T> {
    /// Creates the present variant.
    #[inline]
    pub fn just(value: T) -> Self {
        Self::Just(value)
    }

    /// Creates the absence marker.
    #[inline]
    pub fn nothing() -> Self {
        Self::Nothing
    }

    /// Returns `true` if a payload is present.
    #[must_use]
    #[inline]
    pub fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Returns `true` for the absence marker.
    #[must_use]
    #[inline]
    pub fn is_nothing(&self) -> bool {
        !self.is_just()
    }

    /// Borrows the payload, if any.
    #[must_use]
    #[inline]
    pub fn value(&self) -> Option<&T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Consumes the container, returning the payload if present.
    #[must_use]
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(value) => Some(value),
            Self::Nothing => None,
        }
    }

    /// Maps the payload, keeping `Nothing` as is.
    #[inline]
    pub fn map<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Just(value) => Maybe::Just(f(value)),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Chains a computation that may produce `Nothing`.
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(value) => f(value),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns the payload or `default`.
    #[inline]
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Self::Just(value) => value,
            Self::Nothing => default,
        }
    }

    /// Returns the payload or computes a fallback.
    #[inline]
    pub fn unwrap_or_else<F>(self, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            Self::Just(value) => value,
            Self::Nothing => f(),
        }
    }

    /// Turns `Nothing` into `Err(error())`.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsmoke::Maybe;
    ///
    /// let absent: Maybe<u8> = Maybe::Nothing;
    /// assert_eq!(absent.ok_or_else(|| "missing"), Err("missing"));
    /// ```
    #[inline]
    pub fn ok_or_else<E, F>(self, error: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        match self {
            Self::Just(value) => Ok(value),
            Self::Nothing => Err(error()),
        }
    }

    /// Iterates over the payload (zero or one item).
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.value())
    }
}

impl<T> Default for Maybe<T> {
    #[inline]
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T> From<T> for Maybe<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::Just(value)
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = core::option::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
