//! Failure policies decide what a stage does with an error returned by its body.
//!
//! The policy is a zero-sized type parameter of every lifted stage, fixed when
//! the stage is built. [`Guarded`] turns errors into the failure track of the
//! container; [`Bypass`] gives them straight back to the caller so the failing
//! stage can be inspected where it happened.
//!
//! [`IntoOutcome`] is what a pipeline can start from under a given policy.

use core::ops::ControlFlow;

use crate::traits::Railroad;

/// What a stage does when its body fails, and how stage outcomes are chained.
///
/// `Outcome<C, E>` is what a stage returns for container `C` and stage error
/// `E`. [`bind`](FailurePolicy::bind) is the short-circuit rule every
/// combinator folds over.
pub trait FailurePolicy {
    /// Result type of a stage running under this policy.
    type Outcome<C, E>;

    /// `true` when stage errors end up on the container's failure track.
    const CAPTURES: bool;

    /// Turns a body result into an outcome.
    fn capture<C, E>(result: Result<C::Value, E>) -> Self::Outcome<C, E>
    where
        C: Railroad<E>;

    /// Wraps a container that needs no further work, e.g. a failure that was
    /// passed through or the starting value of a fold.
    fn settle<C, E>(container: C) -> Self::Outcome<C, E>;

    /// Splits an outcome into the container to keep folding on, or the
    /// outcome to return as is.
    fn resume<C, E>(outcome: Self::Outcome<C, E>) -> ControlFlow<Self::Outcome<C, E>, C>;

    /// Feeds an outcome into the next step.
    #[inline]
    fn bind<C, E, F>(outcome: Self::Outcome<C, E>, next: F) -> Self::Outcome<C, E>
    where
        F: FnOnce(C) -> Self::Outcome<C, E>,
    {
        match Self::resume::<C, E>(outcome) {
            ControlFlow::Continue(container) => next(container),
            ControlFlow::Break(outcome) => outcome,
        }
    }
}

/// Default policy: stage errors are moved onto the container's failure track.
///
/// Stages return the container directly and never hand an error to the caller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Guarded;

impl FailurePolicy for Guarded {
    type Outcome<C, E> = C;

    const CAPTURES: bool = true;

    #[inline]
    fn capture<C, E>(result: Result<C::Value, E>) -> C
    where
        C: Railroad<E>,
    {
        match result {
            Ok(value) => C::success(value),
            Err(error) => C::failure(error),
        }
    }

    #[inline]
    fn settle<C, E>(container: C) -> C {
        container
    }

    #[inline]
    fn resume<C, E>(outcome: C) -> ControlFlow<C, C> {
        ControlFlow::Continue(outcome)
    }
}

/// Debug-mode policy: the railway is bypassed and a stage error is returned to the
/// caller unchanged as `Err`.
///
/// Stages return `Result<C, E>`, so a pipeline can be unwound with `?` right
/// at the stage that failed.
///
/// # Examples
///
/// ```
/// use chainsmoke::{chain, Either, Lifter};
///
/// let lift = Lifter::<Either<i32, &str>, &str>::new().debug();
/// let add2 = lift.lift(|v| Ok(v + 2));
/// let boom = lift.lift(|_| Err("boom"));
///
/// let outcome = chain!(2, add2, boom);
/// assert_eq!(outcome, Err("boom"));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bypass;

impl FailurePolicy for Bypass {
    type Outcome<C, E> = Result<C, E>;

    const CAPTURES: bool = false;

    #[inline]
    fn capture<C, E>(result: Result<C::Value, E>) -> Result<C, E>
    where
        C: Railroad<E>,
    {
        result.map(C::success)
    }

    #[inline]
    fn settle<C, E>(container: C) -> Result<C, E> {
        Ok(container)
    }

    #[inline]
    fn resume<C, E>(outcome: Result<C, E>) -> ControlFlow<Result<C, E>, C> {
        match outcome {
            Ok(container) => ControlFlow::Continue(container),
            Err(error) => ControlFlow::Break(Err(error)),
        }
    }
}

/// Values a pipeline running under policy `P` can start from.
///
/// Anything convertible into the container starts a pipeline: a raw payload,
/// or a container returned by an earlier guarded stage. Under [`Bypass`] the
/// `Result` returned by an earlier debug stage is accepted too, and an `Err`
/// start skips every stage.
///
/// `Via` only tells the two sources apart ([`FromInput`], [`FromOutcome`]) and
/// is always inferred.
///
/// # Examples
///
/// ```
/// use chainsmoke::traits::Stage;
/// use chainsmoke::{chain, Either, Lifter};
///
/// let lift = Lifter::<Either<i32, &str>, &str>::new().debug();
/// let add2 = lift.lift(|v| Ok(v + 2));
/// let add3 = lift.lift(|v| Ok(v + 3));
///
/// assert_eq!(chain!(add2.run(2), &add3), Ok(Either::Success(7)));
/// assert_eq!(add3.run(Err("earlier")), Err("earlier"));
/// ```
pub trait IntoOutcome<C, E, P: FailurePolicy, Via> {
    /// Converts into the outcome the first stage is fed with.
    fn into_outcome(self) -> P::Outcome<C, E>;
}

/// Start converted from a payload or container.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FromInput;

/// Start taken from the outcome of an earlier debug stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FromOutcome;

impl<C, E, P, T> IntoOutcome<C, E, P, FromInput> for T
where
    T: Into<C>,
    P: FailurePolicy,
{
    #[inline]
    fn into_outcome(self) -> P::Outcome<C, E> {
        P::settle::<C, E>(self.into())
    }
}

impl<C, E> IntoOutcome<C, E, Bypass, FromOutcome> for Result<C, E> {
    #[inline]
    fn into_outcome(self) -> Result<C, E> {
        self
    }
}
