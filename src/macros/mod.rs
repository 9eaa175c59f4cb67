//! Macros for folding and fusing stages of different types.
//!
//! Every lifted function has its own closure type, so a pipeline written out
//! inline is a heterogeneous list. These macros expand it into nested calls:
//!
//! - [`macro@crate::chain`] - Runs a starting value through stages, left to right, immediately.
//! - [`macro@crate::compose`] - Fuses stages into one reusable stage without running anything.
//!
//! # Examples
//!
//! ```
//! use chainsmoke::traits::Stage;
//! use chainsmoke::{chain, compose, Either, Lifter};
//!
//! let lift = Lifter::<Either<i32, String>, String>::new();
//! let add2 = lift.lift(|v| Ok(v + 2));
//! let add3 = lift.lift(|v| Ok(v + 3));
//! let add4 = lift.lift(|v| Ok(v + 4));
//!
//! let add7 = compose!(&add3, &add4);
//! assert_eq!(add7.run(add2.run(6)), Either::Success(15));
//! assert_eq!(chain!(6, &add2, &add3, &add4), Either::Success(15));
//! ```

/// Runs a starting value through a sequence of stages.
///
/// `chain!(start, f1, f2, ...)` is a strict left fold: `f1` runs on `start`,
/// `f2` on what `f1` returned, and so on. `start` may be a raw payload or a
/// container, and in debug mode also the `Result` an earlier debug stage
/// returned. Once the running value is on the failure track every later stage
/// hands it back without running its body.
///
/// The start and every stage expression are evaluated, in order, before the
/// first stage runs.
///
/// `chain!(x)` returns `x` unchanged.
///
/// # Examples
///
/// ```
/// use chainsmoke::traits::Stage;
/// use chainsmoke::{chain, Either, Lifter};
///
/// #[derive(Debug, PartialEq)]
/// struct Overflow;
///
/// let lift = Lifter::<Either<u8, Overflow>, Overflow>::new();
/// let add100 = lift.lift(|v: u8| v.checked_add(100).ok_or(Overflow));
///
/// assert_eq!(chain!(1, &add100), Either::Success(101));
/// assert_eq!(chain!(1, &add100, &add100, &add100), Either::Error(Overflow));
/// assert_eq!(chain!(7), 7);
///
/// let debug = Lifter::<Either<u8, Overflow>, Overflow>::new().debug();
/// let add1 = debug.lift(|v: u8| v.checked_add(1).ok_or(Overflow));
/// assert_eq!(chain!(add1.run(1), &add1), Ok(Either::Success(3)));
/// ```
///
/// A chain needs a starting value:
///
/// ```rust,compile_fail
/// let nothing = chainsmoke::chain!();
/// ```
#[macro_export]
macro_rules! chain {
    () => {
        compile_error!("chain! takes 1 or more arguments (a starting value, then stages) but 0 were given")
    };
    ($start:expr $(,)?) => {
        $start
    };
    ($start:expr, $first:expr $(, $rest:expr)* $(,)?) => {
        match ($start, $crate::compose!(&$first $(, &$rest)*)) {
            (start, stages) => $crate::traits::Stage::run(&stages, start),
        }
    };
}

/// Fuses a sequence of stages into a single reusable stage.
///
/// `compose!(f, g)` returns a [`Compose`](crate::Compose) `h` such that
/// `h.run(x)` equals `chain!(x, f, g)`. The composite is itself a
/// [`Stage`](crate::traits::Stage), so it can be chained, reused, or composed
/// further. A single stage is returned as is.
///
/// # Examples
///
/// ```
/// use chainsmoke::traits::Stage;
/// use chainsmoke::{chain, compose, Lifter, Maybe};
///
/// let lift = Lifter::<Maybe<i32>, &str>::new();
/// let add2 = lift.lift(|v| Ok(v + 2));
/// let add3 = lift.lift(|v| Ok(v + 3));
///
/// let add5 = compose!(&add2, &add3);
/// assert_eq!(add5.run(3), chain!(3, &add2, &add3));
/// assert_eq!(add5.run(10), Maybe::Just(15));
/// ```
///
/// There is nothing to compose without stages:
///
/// ```rust,compile_fail
/// let empty = chainsmoke::compose!();
/// ```
#[macro_export]
macro_rules! compose {
    () => {
        compile_error!("compose! takes 1 or more stages but 0 were given")
    };
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $crate::Compose::new($first, $crate::compose!($($rest),+))
    };
}
