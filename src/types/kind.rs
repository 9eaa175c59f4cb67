use core::fmt::{self, Display};
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::RailroadError;
use crate::types::alloc_type::String;

/// The closed set of containers a pipeline can run on.
///
/// A kind only ever fails to exist when it is spelled out at runtime, so the
/// name parsers ([`FromStr`], [`TryFrom<&str>`], and serde deserialization
/// behind the `serde` feature) are where an invalid kind is rejected.
///
/// # Examples
///
/// ```
/// use chainsmoke::RailroadKind;
///
/// assert_eq!("Either".parse::<RailroadKind>(), Ok(RailroadKind::Either));
/// assert_eq!(RailroadKind::Maybe.to_string(), "Maybe");
/// assert!("Result".parse::<RailroadKind>().is_err());
/// ```
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "&'static str"))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RailroadKind {
    Either,
    Maybe,
}

impl RailroadKind {
    /// Returns the canonical name of the kind.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Either => "Either",
            Self::Maybe => "Maybe",
        }
    }
}

impl Display for RailroadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RailroadKind {
    type Err = RailroadError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "Either" => Ok(Self::Either),
            "Maybe" => Ok(Self::Maybe),
            other => Err(RailroadError::invalid_kind(other)),
        }
    }
}

impl TryFrom<&str> for RailroadKind {
    type Error = RailroadError;

    #[inline]
    fn try_from(name: &str) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl TryFrom<String> for RailroadKind {
    type Error = RailroadError;

    #[inline]
    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<RailroadKind> for &'static str {
    #[inline]
    fn from(kind: RailroadKind) -> Self {
        kind.name()
    }
}
