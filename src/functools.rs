//! Argument-order adapters for plain functions.
//!
//! Stages take exactly one argument, the payload. These helpers bend
//! multi-argument functions into that shape before they are lifted, without
//! touching the railway itself.
//!
//! # Examples
//!
//! ```
//! use chainsmoke::functools::{partial, swap};
//! use chainsmoke::{chain, Either, Lifter};
//!
//! fn checked_sub(a: i32, b: i32) -> Result<i32, String> {
//!     a.checked_sub(b).ok_or_else(|| "overflow".to_string())
//! }
//!
//! // Subtract 3 from the payload: swap to (b, a), then bind b = 3.
//! let minus3 = partial(swap(checked_sub), 3);
//!
//! let lift = Lifter::<Either<i32, String>, String>::new();
//! assert_eq!(chain!(10, lift.lift(minus3)), Either::Success(7));
//! ```

use crate::error::RailroadError;

/// Swaps the two arguments of a binary function.
///
/// # Examples
///
/// ```
/// use chainsmoke::functools::swap;
///
/// let divide = |a: f64, b: f64| a / b;
/// assert_eq!(swap(divide)(2.0, 10.0), 5.0);
/// ```
#[inline]
pub fn swap<A, B, R, F>(func: F) -> impl Fn(B, A) -> R
where
    F: Fn(A, B) -> R,
{
    move |b, a| func(a, b)
}

/// Binds the first argument of a binary function, leaving a unary one.
///
/// The bound value is cloned for every call.
///
/// # Examples
///
/// ```
/// use chainsmoke::functools::partial;
///
/// let greet = partial(|greeting: &str, name: &str| format!("{greeting}, {name}"), "hello");
/// assert_eq!(greet("rail"), "hello, rail");
/// ```
#[inline]
pub fn partial<A, B, R, F>(func: F, first: A) -> impl Fn(B) -> R
where
    A: Clone,
    F: Fn(A, B) -> R,
{
    move |second| func(first.clone(), second)
}

/// Reorders the arguments of a function over `N` same-typed arguments.
///
/// `order[i]` is the position of the incoming argument passed as the `i`-th
/// argument to `func`. `order` must be a permutation of `0..N`.
///
/// # Errors
///
/// Returns [`RailroadError::InvalidOrder`] when an index is out of range or
/// repeated. The check happens here, before any call.
///
/// # Examples
///
/// ```
/// use chainsmoke::functools::reorder;
///
/// let concat = |[a, b, c]: [&str; 3]| format!("{a}{b}{c}");
/// let rotated = reorder(concat, [2, 0, 1]).unwrap();
/// assert_eq!(rotated(["x", "y", "z"]), "zxy");
///
/// assert!(reorder(|[a, b]: [u8; 2]| a + b, [0, 0]).is_err());
/// ```
pub fn reorder<T, R, F, const N: usize>(
    func: F,
    order: [usize; N],
) -> Result<impl Fn([T; N]) -> R, RailroadError>
where
    F: Fn([T; N]) -> R,
{
    let mut seen = [false; N];
    let mut target = [0; N];
    for (position, &index) in order.iter().enumerate() {
        match seen.get_mut(index) {
            Some(slot) if !*slot => {
                *slot = true;
                target[index] = position;
            }
            _ => return Err(RailroadError::InvalidOrder { index, arity: N }),
        }
    }

    Ok(move |args: [T; N]| {
        let mut index = 0;
        let mut tagged = args.map(|arg| {
            let tag = (target[index], arg);
            index += 1;
            tag
        });
        tagged.sort_unstable_by_key(|&(position, _)| position);
        func(tagged.map(|(_, arg)| arg))
    })
}
