use crate::types::{Either, Maybe, RailroadKind};

/// A two-track container a pipeline can run on.
///
/// Implementors have a success variant carrying [`Container::Value`] and a
/// failure variant. Nothing here depends on the error type, so a container can
/// always be inspected without naming one.
///
/// # Examples
///
/// ```
/// use chainsmoke::traits::Container;
/// use chainsmoke::{Either, Maybe, RailroadKind};
///
/// let ok: Either<i32, &str> = Either::success(1);
/// assert!(!ok.is_failure());
///
/// let gone: Maybe<i32> = Maybe::Nothing;
/// assert!(gone.is_failure());
/// assert_eq!(<Maybe<i32> as Container>::KIND, RailroadKind::Maybe);
/// ```
pub trait Container: Sized {
    /// Payload carried on the success track.
    type Value;

    /// Which kind of railroad this container is.
    const KIND: RailroadKind;

    /// Puts a value on the success track.
    fn success(value: Self::Value) -> Self;

    /// Returns `true` on the failure track. Never panics.
    fn is_failure(&self) -> bool;

    /// Splits the container into its success payload, or gives the container
    /// itself back when it is on the failure track.
    ///
    /// The `Err` side is the very value that was passed in, which is what lets
    /// a short-circuited stage return a failure without rebuilding it.
    fn into_success(self) -> Result<Self::Value, Self>;
}

/// A [`Container`] whose failure track absorbs stage errors of type `E`.
///
/// Lifted stages only talk to their container through this trait.
///
/// # Examples
///
/// ```
/// use chainsmoke::traits::{Container, Railroad};
/// use chainsmoke::{Either, Maybe};
///
/// let kept = <Either<i32, &str> as Railroad<&str>>::failure("kept");
/// assert_eq!(kept.error(), Some(&"kept"));
///
/// let gone = <Maybe<i32> as Railroad<&str>>::failure("dropped");
/// assert!(gone.is_failure());
/// ```
pub trait Railroad<E>: Container {
    /// Puts a stage error on the failure track.
    fn failure(error: E) -> Self;
}

impl<T, E> Container for Either<T, E> {
    type Value = T;

    const KIND: RailroadKind = RailroadKind::Either;

    #[inline]
    fn success(value: T) -> Self {
        Either::Success(value)
    }

    #[inline]
    fn is_failure(&self) -> bool {
        self.is_error()
    }

    #[inline]
    fn into_success(self) -> Result<T, Self> {
        match self {
            Either::Success(value) => Ok(value),
            failure => Err(failure),
        }
    }
}

impl<T, E> Railroad<E> for Either<T, E> {
    #[inline]
    fn failure(error: E) -> Self {
        Either::Error(error)
    }
}

impl<T> Container for Maybe<T> {
    type Value = T;

    const KIND: RailroadKind = RailroadKind::Maybe;

    #[inline]
    fn success(value: T) -> Self {
        Maybe::Just(value)
    }

    #[inline]
    fn is_failure(&self) -> bool {
        self.is_nothing()
    }

    #[inline]
    fn into_success(self) -> Result<T, Self> {
        match self {
            Maybe::Just(value) => Ok(value),
            Maybe::Nothing => Err(Maybe::Nothing),
        }
    }
}

impl<T, E> Railroad<E> for Maybe<T> {
    #[inline]
    fn failure(error: E) -> Self {
        crate::trace::discarded(&error);
        drop(error);
        Maybe::Nothing
    }
}
