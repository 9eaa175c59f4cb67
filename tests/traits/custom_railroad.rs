use chainsmoke::traits::{Container, Railroad};
use chainsmoke::{chain, Lifter, RailroadKind};

/// Container that keeps only the error message.
#[derive(Debug, PartialEq)]
enum Checked<T> {
    Valid(T),
    Invalid(String),
}

impl<T> Container for Checked<T> {
    type Value = T;

    const KIND: RailroadKind = RailroadKind::Either;

    fn success(value: T) -> Self {
        Checked::Valid(value)
    }

    fn is_failure(&self) -> bool {
        matches!(self, Checked::Invalid(_))
    }

    fn into_success(self) -> Result<T, Self> {
        match self {
            Checked::Valid(value) => Ok(value),
            invalid => Err(invalid),
        }
    }
}

impl<T, E: std::fmt::Display> Railroad<E> for Checked<T> {
    fn failure(error: E) -> Self {
        Checked::Invalid(error.to_string())
    }
}

impl<T> From<T> for Checked<T> {
    fn from(value: T) -> Self {
        Checked::Valid(value)
    }
}

#[test]
fn lifter_runs_on_user_defined_container() {
    let lift = Lifter::<Checked<u32>, std::num::TryFromIntError>::new();
    let narrow = lift.lift(|v| u8::try_from(v).map(u32::from));
    let double = lift.lift(|v| Ok(v * 2));

    assert_eq!(chain!(100, &narrow, &double), Checked::Valid(200));
    assert!(matches!(chain!(1000, &narrow, &double), Checked::Invalid(_)));
}

#[test]
fn custom_container_is_inspected_without_an_error_type() {
    let invalid: Checked<u8> = Checked::Invalid("bad".to_string());

    assert!(invalid.is_failure());
    assert!(!Checked::Valid(1_u8).is_failure());
}
