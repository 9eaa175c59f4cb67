use core::fmt;
use core::marker::PhantomData;

use crate::error::RailroadError;
use crate::traits::{Bypass, FailurePolicy, Guarded, Railroad, Stage};
use crate::types::RailroadKind;

/// Factory that turns plain functions into pipeline stages.
///
/// A lifter is fixed to one container `C`, one stage error type `E`, and one
/// failure policy `P`. Every stage it produces shares those three choices, so
/// they can be chained and composed together.
///
/// # Type Parameters
///
/// * `C` - The container the pipeline runs on, [`Either`](crate::Either) or [`Maybe`](crate::Maybe)
/// * `E` - The error type stage bodies return
/// * `P` - The failure policy, [`Guarded`] unless [`debug`](Lifter::debug) is used
///
/// # Examples
///
/// ```
/// use chainsmoke::{chain, compose, Either, Lifter};
///
/// let lift = Lifter::<Either<i32, String>, String>::new();
/// let add2 = lift.lift(|v| Ok(v + 2));
/// let add3 = lift.lift(|v| Ok(v + 3));
/// let add4 = lift.lift(|v| Ok(v + 4));
///
/// let add7 = compose!(add3, add4);
/// assert_eq!(chain!(6, add2, add7), Either::Success(15));
/// ```
pub struct Lifter<C, E, P = Guarded> {
    _marker: PhantomData<fn() -> (C, E, P)>,
}

impl<C, E> Lifter<C, E, Guarded>
where
    C: Railroad<E>,
{
    /// Creates a guarded lifter for container `C`.
    #[inline]
    pub const fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }

    /// Creates a guarded lifter after checking that `kind` names the kind of
    /// container `C`.
    ///
    /// # Errors
    ///
    /// * [`RailroadError::InvalidKind`] when `kind` is neither `Either` nor `Maybe`
    /// * [`RailroadError::KindMismatch`] when `kind` is valid but not the kind of `C`
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsmoke::{Either, Lifter};
    ///
    /// let lift = Lifter::<Either<i32, String>, String>::for_kind("Either");
    /// assert!(lift.is_ok());
    ///
    /// let err = Lifter::<Either<i32, String>, String>::for_kind("Railway").unwrap_err();
    /// assert_eq!(err.to_string(), "Railway is not a valid railroad type; try Either or Maybe.");
    /// ```
    pub fn for_kind(kind: &str) -> Result<Self, RailroadError> {
        let requested: RailroadKind = kind.parse()?;
        if requested != C::KIND {
            return Err(RailroadError::KindMismatch {
                requested,
                container: C::KIND,
            });
        }
        Ok(Self::new())
    }
}

impl<C, E, P> Lifter<C, E, P>
where
    C: Railroad<E>,
    P: FailurePolicy,
{
    /// Switches to debug mode: stage errors are returned to the caller
    /// instead of being moved onto the failure track.
    #[inline]
    pub fn debug(self) -> Lifter<C, E, Bypass> {
        Lifter {
            _marker: PhantomData,
        }
    }

    /// Switches back to the guarded policy.
    #[inline]
    pub fn guarded(self) -> Lifter<C, E, Guarded> {
        Lifter {
            _marker: PhantomData,
        }
    }

    /// Kind of container produced stages run on.
    #[inline]
    pub fn kind(&self) -> RailroadKind {
        C::KIND
    }

    /// Returns `true` when produced stages bypass the railway on error.
    #[inline]
    pub fn is_debug(&self) -> bool {
        !P::CAPTURES
    }

    /// Lifts a fallible plain function into a stage.
    ///
    /// The function receives the unwrapped success payload; returning `Err`
    /// is how a stage body fails.
    #[inline]
    pub fn lift<F>(&self, func: F) -> Lifted<C, E, F, P>
    where
        F: Fn(C::Value) -> Result<C::Value, E>,
    {
        Lifted {
            func,
            name: None,
            _marker: PhantomData,
        }
    }

    /// Lifts a fallible plain function and names the stage for diagnostics.
    #[inline]
    pub fn lift_named<F>(&self, name: &'static str, func: F) -> Lifted<C, E, F, P>
    where
        F: Fn(C::Value) -> Result<C::Value, E>,
    {
        Lifted {
            func,
            name: Some(name),
            _marker: PhantomData,
        }
    }

    /// Lifts a function that cannot fail.
    ///
    /// # Examples
    ///
    /// ```
    /// use chainsmoke::{chain, Lifter, Maybe};
    ///
    /// let lift = Lifter::<Maybe<i32>, ()>::new();
    /// assert_eq!(chain!(3, lift.lift_map(|v| v * 2)), Maybe::Just(6));
    /// ```
    #[inline]
    pub fn lift_map<F>(
        &self,
        func: F,
    ) -> Lifted<C, E, impl Fn(C::Value) -> Result<C::Value, E>, P>
    where
        F: Fn(C::Value) -> C::Value,
    {
        self.lift(move |value| Ok(func(value)))
    }
}

impl<C, E> Default for Lifter<C, E, Guarded>
where
    C: Railroad<E>,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<C, E, P> Clone for Lifter<C, E, P> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<C, E, P> Copy for Lifter<C, E, P> {}

impl<C, E, P> fmt::Debug for Lifter<C, E, P>
where
    C: Railroad<E>,
    P: FailurePolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lifter")
            .field("kind", &C::KIND)
            .field("debug", &!P::CAPTURES)
            .finish()
    }
}

/// Creates a guarded lifter for container `C` from a kind name.
///
/// This is the entry point for pipelines whose railroad kind comes from
/// configuration. See [`Lifter::for_kind`] for the checks performed.
///
/// # Errors
///
/// Returns [`RailroadError`] when `kind` does not name the kind of `C`.
///
/// # Examples
///
/// ```
/// use chainsmoke::{make_lifter, Maybe};
///
/// let lift = make_lifter::<Maybe<i32>, String>("Maybe").unwrap();
/// let add2 = lift.lift(|v| Ok(v + 2));
/// assert_eq!(chainsmoke::chain!(1, add2), Maybe::Just(3));
///
/// let err = make_lifter::<Maybe<i32>, String>("NonValidRailroadType").unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "NonValidRailroadType is not a valid railroad type; try Either or Maybe."
/// );
/// ```
#[inline]
pub fn make_lifter<C, E>(kind: &str) -> Result<Lifter<C, E, Guarded>, RailroadError>
where
    C: Railroad<E>,
{
    Lifter::for_kind(kind)
}

/// A plain function lifted onto a railway.
///
/// Built by [`Lifter::lift`]. Running it follows the railway contract:
///
/// 1. a container on the failure track is returned as is, without calling the
///    body;
/// 2. otherwise the success payload (or a raw value) is passed to the body;
/// 3. `Ok(v)` becomes the success variant; `Err(e)` is captured onto the
///    failure track under [`Guarded`], or returned as `Err(e)` under [`Bypass`].
pub struct Lifted<C, E, F, P = Guarded> {
    func: F,
    name: Option<&'static str>,
    _marker: PhantomData<fn(C) -> (E, P)>,
}

impl<C, E, F, P> Lifted<C, E, F, P> {
    /// Diagnostic name given with [`Lifter::lift_named`].
    #[inline]
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Returns the wrapped plain function.
    #[inline]
    pub fn into_inner(self) -> F {
        self.func
    }
}

impl<C, E, F, P> Stage<C> for Lifted<C, E, F, P>
where
    C: Railroad<E>,
    F: Fn(C::Value) -> Result<C::Value, E>,
    P: FailurePolicy,
{
    type Error = E;
    type Policy = P;

    fn call(&self, input: C) -> P::Outcome<C, E> {
        let payload = match input.into_success() {
            Ok(payload) => payload,
            Err(failure) => {
                crate::trace::short_circuit(self.name, C::KIND);
                return P::settle::<C, E>(failure);
            }
        };

        let result = (self.func)(payload);
        if result.is_err() {
            crate::trace::stage_failed::<E>(self.name, C::KIND, P::CAPTURES);
        }
        P::capture::<C, E>(result)
    }
}

impl<C, E, F, P> Clone for Lifted<C, E, F, P>
where
    F: Clone,
{
    #[inline]
    fn clone(&self) -> Self {
        Self {
            func: self.func.clone(),
            name: self.name,
            _marker: PhantomData,
        }
    }
}

impl<C, E, F, P> fmt::Debug for Lifted<C, E, F, P>
where
    C: Railroad<E>,
    P: FailurePolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lifted")
            .field("name", &self.name)
            .field("kind", &C::KIND)
            .field("debug", &!P::CAPTURES)
            .finish_non_exhaustive()
    }
}
