use core::any::{type_name, Any};
use core::fmt::{self, Debug, Display};

use crate::types::alloc_type::{format, Box, String};

/// A dynamically typed argument that remembers where it came from.
///
/// Carries the value, the name of its concrete type, and its `Debug`
/// rendering, so a failed type check can say what was actually passed.
///
/// # Examples
///
/// ```
/// use chainsmoke::validate::DynValue;
///
/// let value = DynValue::new(5_i32);
/// assert!(value.is::<i32>());
/// assert_eq!(value.repr(), "5");
/// assert_eq!(value.downcast::<i32>().ok(), Some(5));
/// ```
pub struct DynValue {
    value: Box<dyn Any>,
    type_name: &'static str,
    repr: String,
}

impl DynValue {
    /// Wraps `value`, recording its type name and `Debug` rendering.
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Debug,
    {
        let repr = format!("{value:?}");
        Self {
            value: Box::new(value),
            type_name: type_name::<T>(),
            repr,
        }
    }

    /// Name of the concrete type held.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// `Debug` rendering of the held value.
    #[inline]
    pub fn repr(&self) -> &str {
        &self.repr
    }

    /// Returns `true` if the held value is a `T`.
    #[inline]
    pub fn is<T: Any>(&self) -> bool {
        self.value.is::<T>()
    }

    /// Borrows the held value as a `T`.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.value.downcast_ref::<T>()
    }

    /// Takes the held value out as a `T`, or gives `self` back.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        let Self {
            value,
            type_name,
            repr,
        } = self;
        match value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(Self {
                value,
                type_name,
                repr,
            }),
        }
    }
}

impl Debug for DynValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynValue")
            .field("type", &self.type_name)
            .field("value", &format_args!("{}", self.repr))
            .finish()
    }
}

/// A call-time argument did not have the declared parameter type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeMismatch {
    function: &'static str,
    arg: &'static str,
    expected: &'static str,
    found: &'static str,
    repr: String,
}

impl TypeMismatch {
    fn new<T: Any>(function: &'static str, arg: &'static str, value: &DynValue) -> Self {
        Self {
            function,
            arg,
            expected: type_name::<T>(),
            found: value.type_name,
            repr: value.repr.clone(),
        }
    }

    /// Name of the validated function.
    #[inline]
    pub fn function(&self) -> &'static str {
        self.function
    }

    /// Name of the offending parameter.
    #[inline]
    pub fn arg(&self) -> &'static str {
        self.arg
    }

    /// Declared parameter type.
    #[inline]
    pub fn expected(&self) -> &'static str {
        self.expected
    }

    /// Type of the value actually received.
    #[inline]
    pub fn found(&self) -> &'static str {
        self.found
    }
}

impl Display for TypeMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} expects type {} for arg {} but received value {} with type of {}",
            self.function, self.expected, self.arg, self.repr, self.found
        )
    }
}

impl core::error::Error for TypeMismatch {}

fn take<T: Any>(
    function: &'static str,
    arg: &'static str,
    value: DynValue,
) -> Result<T, TypeMismatch> {
    value.downcast::<T>().map_err(|value| TypeMismatch::new::<T>(function, arg, &value))
}

/// Wraps a unary function so its argument is type-checked at call time.
///
/// The returned function accepts a [`DynValue`]; a value of the wrong type is
/// rejected with [`TypeMismatch`] before `func` runs. The check does not
/// depend on any railway policy, so a validated function can sit either
/// above or below a lifted stage.
///
/// # Examples
///
/// ```
/// use chainsmoke::validate::{validate_it, DynValue};
///
/// let double = validate_it("double", "x", |x: i32| x * 2);
/// assert_eq!(double(DynValue::new(21_i32)), Ok(42));
///
/// let err = double(DynValue::new("A")).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "double expects type i32 for arg x but received value \"A\" with type of &str"
/// );
/// ```
pub fn validate_it<T, R, F>(
    function: &'static str,
    arg: &'static str,
    func: F,
) -> impl Fn(DynValue) -> Result<R, TypeMismatch>
where
    T: Any,
    F: Fn(T) -> R,
{
    move |value| Ok(func(take::<T>(function, arg, value)?))
}

/// Wraps a binary function so both arguments are type-checked at call time.
///
/// Arguments are checked left to right; the first mismatch is reported.
///
/// # Examples
///
/// ```
/// use chainsmoke::validate::{validate_it2, DynValue};
///
/// let add_two = validate_it2("add_two", ["x", "y"], |x: i32, y: i32| x + y);
/// assert_eq!(add_two(DynValue::new(2_i32), DynValue::new(3_i32)), Ok(5));
///
/// let err = add_two(DynValue::new(2_i32), DynValue::new("A")).unwrap_err();
/// assert_eq!(err.arg(), "y");
/// ```
pub fn validate_it2<A, B, R, F>(
    function: &'static str,
    args: [&'static str; 2],
    func: F,
) -> impl Fn(DynValue, DynValue) -> Result<R, TypeMismatch>
where
    A: Any,
    B: Any,
    F: Fn(A, B) -> R,
{
    let [first, second] = args;
    move |a, b| {
        let a = take::<A>(function, first, a)?;
        let b = take::<B>(function, second, b)?;
        Ok(func(a, b))
    }
}
