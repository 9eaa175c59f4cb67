#[cfg(feature = "std")]
pub use std::{boxed::Box, format, string::String};

#[cfg(not(feature = "std"))]
pub use alloc::{boxed::Box, format, string::String};
