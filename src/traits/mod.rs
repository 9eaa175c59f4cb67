//! Core traits of the railway.
//!
//! - [`Container`]: a two-track container a pipeline can run on
//! - [`Railroad`]: a container that absorbs stage errors of one type
//! - [`FailurePolicy`]: what a stage does with a failing body, with the
//!   [`Guarded`] and [`Bypass`] policies
//! - [`IntoOutcome`]: what a pipeline can start from
//! - [`Stage`]: a single-argument pipeline step
//!
//! # Examples
//!
//! ```
//! use chainsmoke::traits::{Container, Stage};
//! use chainsmoke::{Either, Lifter, RailroadKind};
//!
//! assert_eq!(<Either<i32, ()> as Container>::KIND, RailroadKind::Either);
//!
//! let lift = Lifter::<Either<i32, ()>, ()>::new();
//! let inc = lift.lift(|v| Ok(v + 1));
//! assert_eq!(inc.run(1), Either::Success(2));
//! ```

pub mod policy;
pub mod railroad;
pub mod stage;

pub use policy::{Bypass, FailurePolicy, FromInput, FromOutcome, Guarded, IntoOutcome};
pub use railroad::{Container, Railroad};
pub use stage::{Stage, StageOutcome};
