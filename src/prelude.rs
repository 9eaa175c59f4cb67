//! Convenience re-exports for common usage patterns.
//!
//! This prelude module provides the most commonly used items for quick starts.
//! Import everything with:
//!
//! ```
//! use chainsmoke::prelude::*;
//! ```
//!
//! # What's Included
//!
//! - **Macros**: [`chain!`], [`compose!`]
//! - **Types**: [`Either`], [`Maybe`], [`Lifter`], [`Compose`], [`Pipeline`]
//! - **Traits**: [`Stage`], [`Container`], [`Railroad`]
//!
//! # Examples
//!
//! ```
//! use chainsmoke::prelude::*;
//!
//! let lift = Lifter::<Either<i32, String>, String>::new();
//! let add3 = lift.lift(|v| Ok(v + 3));
//! let add4 = lift.lift(|v| Ok(v + 4));
//!
//! let add7 = compose!(add3, add4);
//! assert_eq!(add7.run(8), Either::Success(15));
//! ```

// Macros
pub use crate::{chain, compose};

// Core types
pub use crate::types::{make_lifter, Compose, Either, Lifted, Lifter, Maybe, Pipeline};

// Traits
pub use crate::traits::{Container, Railroad, Stage};

// Errors
pub use crate::error::RailroadError;
