//! Railway-oriented pipelines of fallible, single-argument functions.
//!
//! A [`Lifter`] turns a plain function `Fn(T) -> Result<T, E>` into a pipeline
//! stage that runs on a two-track container, [`Either`] or [`Maybe`]. Once a
//! stage fails, every later stage is skipped and the failure flows to the end
//! unchanged; no stage has to check for it.
//!
//! Each submodule re-exports its public surface from here, so consumers can
//! simply depend on `chainsmoke::*` or pick focused pieces as needed.
//!
//! # Examples
//!
//! ## Chaining stages
//!
//! ```
//! use chainsmoke::{chain, Either, Lifter};
//!
//! #[derive(Debug, PartialEq)]
//! struct DivideByZero;
//!
//! let lift = Lifter::<Either<i32, DivideByZero>, DivideByZero>::new();
//! let add2 = lift.lift(|v| Ok(v + 2));
//! let invert = lift.lift(|v| if v == 0 { Err(DivideByZero) } else { Ok(100 / v) });
//!
//! assert_eq!(chain!(3, &add2, &invert, &add2), Either::Success(22));
//! assert_eq!(chain!(-2, &add2, &invert, &add2), Either::Error(DivideByZero));
//! ```
//!
//! ## Composing for reuse
//!
//! ```
//! use chainsmoke::traits::Stage;
//! use chainsmoke::{compose, Lifter, Maybe};
//!
//! let lift = Lifter::<Maybe<u32>, &str>::new();
//! let parse_even = compose!(
//!     lift.lift(|v| Ok(v * 10)),
//!     lift.lift(|v| if v % 20 == 0 { Ok(v) } else { Err("odd") }),
//! );
//!
//! assert_eq!(parse_even.run(2), Maybe::Just(20));
//! assert_eq!(parse_even.run(3), Maybe::Nothing);
//! ```
//!
//! ## Debug mode
//!
//! ```
//! use chainsmoke::{chain, Either, Lifter};
//!
//! let lift = Lifter::<Either<i32, String>, String>::new().debug();
//! let fail = lift.lift(|_| Err("This stage failed.".to_string()));
//!
//! let outcome = chain!(2, lift.lift(|v| Ok(v + 2)), fail);
//! assert_eq!(outcome, Err("This stage failed.".to_string()));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

/// Conversions between railroad containers and `Result`/`Option`
pub mod convert;
/// Setup-time errors
pub mod error;
/// Argument-order adapters for plain functions
pub mod functools;
/// `chain!` and `compose!` macros
pub mod macros;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits: containers, failure policies, stages
pub mod traits;
/// Containers, lifters, and composites
pub mod types;
/// Call-time argument type validation
pub mod validate;

mod trace;

pub use error::RailroadError;
pub use traits::{Bypass, Container, FailurePolicy, Guarded, Railroad, Stage};
pub use types::{
    chain, compose, make_lifter, Compose, Either, Lifted, Lifter, Maybe, Pipeline, RailroadKind,
};
