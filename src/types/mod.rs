//! Railroad containers and the machinery that runs stages over them.
//!
//! # Examples
//!
//! ```
//! use chainsmoke::{chain, Either, Lifter, Maybe};
//!
//! let lift = Lifter::<Either<i32, &str>, &str>::new();
//! assert_eq!(chain!(2, lift.lift(|v| Ok(v + 2))), Either::Success(4));
//!
//! let lift = Lifter::<Maybe<i32>, &str>::new();
//! assert_eq!(chain!(2, lift.lift(|_| Err("lost"))), Maybe::Nothing);
//! ```
pub(crate) mod alloc_type;
pub mod either;
pub mod iter;
pub mod kind;
pub mod lifter;
pub mod maybe;
pub mod pipeline;

pub use either::Either;
pub use iter::Iter;
pub use kind::RailroadKind;
pub use lifter::{make_lifter, Lifted, Lifter};
pub use maybe::Maybe;
pub use pipeline::{chain, compose, Compose, Pipeline};
