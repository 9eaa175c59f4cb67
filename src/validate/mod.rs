//! Call-time argument type validation.
//!
//! Pipelines over dynamically typed payloads cannot lean on the compiler to
//! check argument types. [`validate_it`] and [`validate_it2`] wrap a plain
//! function so that every call first checks its [`DynValue`] arguments against
//! the declared parameter types, failing with [`TypeMismatch`] before the
//! function runs.
//!
//! # Examples
//!
//! ```
//! use chainsmoke::validate::{validate_it2, DynValue};
//!
//! let add_two = validate_it2("add_two", ["x", "y"], |x: i32, y: i32| x + y);
//! let err = add_two(DynValue::new(2_i32), DynValue::new("A")).unwrap_err();
//! assert_eq!(
//!     err.to_string(),
//!     "add_two expects type i32 for arg y but received value \"A\" with type of &str"
//! );
//! ```
pub mod core;

pub use self::core::*;
