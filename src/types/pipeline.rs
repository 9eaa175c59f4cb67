use smallvec::SmallVec;

use crate::traits::stage::StageOutcome;
use crate::traits::{FailurePolicy, IntoOutcome, Stage};

/// Two stages fused into one, `first` running before `second`.
///
/// Built by [`Stage::then`] or the [`compose!`](macro@crate::compose) macro.
/// A `Compose` is itself a [`Stage`], so composites nest and can be reused
/// across any number of starting values.
///
/// # Examples
///
/// ```
/// use chainsmoke::traits::Stage;
/// use chainsmoke::{Compose, Either, Lifter};
///
/// let lift = Lifter::<Either<i32, &str>, &str>::new();
/// let add3 = lift.lift(|v| Ok(v + 3));
/// let add4 = lift.lift(|v| Ok(v + 4));
///
/// let add7 = Compose::new(add3, add4);
/// assert_eq!(add7.run(1), Either::Success(8));
/// assert_eq!(add7.run(10), Either::Success(17));
/// ```
#[derive(Clone, Debug)]
pub struct Compose<A, B> {
    first: A,
    second: B,
}

impl<A, B> Compose<A, B> {
    /// Fuses `first` and `second`.
    #[inline]
    pub fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Splits the composite back into its two stages.
    #[inline]
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<C, A, B> Stage<C> for Compose<A, B>
where
    A: Stage<C>,
    B: Stage<C, Error = A::Error, Policy = A::Policy>,
{
    type Error = A::Error;
    type Policy = A::Policy;

    #[inline]
    fn call(&self, input: C) -> <Self::Policy as FailurePolicy>::Outcome<C, Self::Error> {
        self.second.feed(self.first.call(input))
    }
}

/// An ordered run of stages of one type, fused into a single stage.
///
/// Built by [`compose`] from any iterator of stages, typically boxed or
/// borrowed trait objects. The first few stages are stored inline.
///
/// # Examples
///
/// ```
/// use chainsmoke::traits::{Guarded, Stage};
/// use chainsmoke::{compose, Either, Lifter};
///
/// type Step<'a> = &'a dyn Stage<Either<i32, String>, Error = String, Policy = Guarded>;
///
/// let lift = Lifter::<Either<i32, String>, String>::new();
/// let add1 = lift.lift(|v| Ok(v + 1));
/// let double = lift.lift(|v| Ok(v * 2));
///
/// let steps: [Step<'_>; 3] = [&add1, &double, &add1];
/// let pipeline = compose(steps);
/// assert_eq!(pipeline.len(), 3);
/// assert_eq!(pipeline.run(4), Either::Success(11));
/// ```
#[derive(Clone, Debug)]
pub struct Pipeline<S> {
    stages: SmallVec<[S; 4]>,
}

impl<S> Pipeline<S> {
    /// Creates an empty pipeline, which hands its input back unchanged.
    #[inline]
    pub fn new() -> Self {
        Self {
            stages: SmallVec::new(),
        }
    }

    /// Appends a stage at the end.
    #[inline]
    pub fn push(&mut self, stage: S) {
        self.stages.push(stage);
    }

    /// Appends a stage at the end, builder style.
    #[inline]
    pub fn with_stage(mut self, stage: S) -> Self {
        self.push(stage);
        self
    }

    /// Number of stages.
    #[inline]
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    /// Returns `true` if the pipeline has no stages.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }

    /// Iterates over the stages in running order.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, S> {
        self.stages.iter()
    }
}

impl<S> Default for Pipeline<S> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<S> FromIterator<S> for Pipeline<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            stages: iter.into_iter().collect(),
        }
    }
}

impl<S> Extend<S> for Pipeline<S> {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.stages.extend(iter);
    }
}

impl<C, S> Stage<C> for Pipeline<S>
where
    S: Stage<C>,
{
    type Error = S::Error;
    type Policy = S::Policy;

    fn call(&self, input: C) -> <Self::Policy as FailurePolicy>::Outcome<C, Self::Error> {
        fold(<S::Policy as FailurePolicy>::settle::<C, S::Error>(input), &self.stages)
    }
}

fn fold<C, S, I>(start: StageOutcome<S, C>, stages: I) -> StageOutcome<S, C>
where
    I: IntoIterator<Item = S>,
    S: Stage<C>,
{
    stages.into_iter().fold(start, |running, stage| stage.feed(running))
}

/// Folds `stages` over `start`, left to right, immediately.
///
/// `start` may be a raw payload, a container, or under
/// [`Bypass`](crate::traits::Bypass) the outcome of an earlier debug stage.
/// Once the running value is on the failure track the remaining stages are
/// still fed, but every one of them hands the failure back without running
/// its body. With no stages the start is returned as an outcome.
///
/// Use the [`chain!`](macro@crate::chain) macro when the stages have
/// different types.
///
/// # Examples
///
/// ```
/// use chainsmoke::{chain, Either, Lifter};
///
/// let lift = Lifter::<Either<i32, &str>, &str>::new();
/// let add2 = lift.lift(|v| Ok(v + 2));
///
/// assert_eq!(chain(1, [&add2, &add2, &add2]), Either::Success(7));
/// assert_eq!(chain(Either::<i32, &str>::Error("no"), [&add2]), Either::Error("no"));
/// ```
pub fn chain<C, T, S, I, Via>(start: T, stages: I) -> StageOutcome<S, C>
where
    T: IntoOutcome<C, S::Error, S::Policy, Via>,
    I: IntoIterator<Item = S>,
    S: Stage<C>,
{
    fold(start.into_outcome(), stages)
}

/// Fuses `stages` into one reusable [`Pipeline`] without running anything.
///
/// `compose(stages).call(x)` equals `chain(x, stages)`.
#[inline]
pub fn compose<S, I>(stages: I) -> Pipeline<S>
where
    I: IntoIterator<Item = S>,
{
    stages.into_iter().collect()
}
