use crate::traits::{FailurePolicy, IntoOutcome};
use crate::types::alloc_type::Box;
use crate::types::Compose;

/// Outcome type of stage `S` running on container `C`.
///
/// `C` for [`Guarded`](crate::traits::Guarded) stages and `Result<C, E>` for
/// [`Bypass`](crate::traits::Bypass) stages.
pub type StageOutcome<S, C> =
    <<S as Stage<C>>::Policy as FailurePolicy>::Outcome<C, <S as Stage<C>>::Error>;

/// A single step of a railway pipeline.
///
/// Stages are ordinary single-argument callables over the container `C`.
/// Lifted functions, composites, and boxed or borrowed stages all implement
/// this trait, so they can be mixed freely in [`chain!`](crate::chain) and
/// [`compose!`](crate::compose).
///
/// # Type Parameters
///
/// * `C` - The container the stage reads and returns
///
/// # Examples
///
/// ```
/// use chainsmoke::traits::Stage;
/// use chainsmoke::{Either, Lifter};
///
/// let lift = Lifter::<Either<i32, String>, String>::new();
/// let add3 = lift.lift(|v| Ok(v + 3));
/// let add4 = lift.lift(|v| Ok(v + 4));
///
/// let add7 = add3.then(add4);
/// assert_eq!(add7.run(1), Either::Success(8));
/// ```
pub trait Stage<C> {
    /// Error produced by the stage body.
    type Error;

    /// Policy fixed when the stage was built.
    type Policy: FailurePolicy;

    /// Runs the stage on a container.
    ///
    /// A container on the failure track is handed back unchanged and the
    /// stage body is not invoked.
    fn call(&self, input: C) -> <Self::Policy as FailurePolicy>::Outcome<C, Self::Error>;

    /// Runs the stage on the outcome of a previous stage.
    ///
    /// This is the bind of the railway: an outcome that already ended the
    /// pipeline is returned without calling the stage.
    #[inline]
    fn feed(
        &self,
        prior: <Self::Policy as FailurePolicy>::Outcome<C, Self::Error>,
    ) -> <Self::Policy as FailurePolicy>::Outcome<C, Self::Error> {
        <Self::Policy as FailurePolicy>::bind::<C, Self::Error, _>(prior, |container| {
            self.call(container)
        })
    }

    /// Runs the stage on anything a pipeline can start from: a raw payload, a
    /// container, or under [`Bypass`](crate::traits::Bypass) the outcome of an
    /// earlier debug stage.
    #[inline]
    fn run<I, Via>(&self, input: I) -> <Self::Policy as FailurePolicy>::Outcome<C, Self::Error>
    where
        I: IntoOutcome<C, Self::Error, Self::Policy, Via>,
        Self: Sized,
    {
        self.feed(input.into_outcome())
    }

    /// Fuses this stage with `next`, running `self` first.
    #[inline]
    fn then<S>(self, next: S) -> Compose<Self, S>
    where
        S: Stage<C, Error = Self::Error, Policy = Self::Policy>,
        Self: Sized,
    {
        Compose::new(self, next)
    }
}

impl<C, S> Stage<C> for &S
where
    S: Stage<C> + ?Sized,
{
    type Error = S::Error;
    type Policy = S::Policy;

    #[inline]
    fn call(&self, input: C) -> <Self::Policy as FailurePolicy>::Outcome<C, Self::Error> {
        (**self).call(input)
    }
}

impl<C, S> Stage<C> for Box<S>
where
    S: Stage<C> + ?Sized,
{
    type Error = S::Error;
    type Policy = S::Policy;

    #[inline]
    fn call(&self, input: C) -> <Self::Policy as FailurePolicy>::Outcome<C, Self::Error> {
        (**self).call(input)
    }
}
