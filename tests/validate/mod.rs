use chainsmoke::validate::{validate_it, validate_it2, DynValue, TypeMismatch};
use chainsmoke::{chain, Either, Lifter};

fn add_two(x: i32, y: i32) -> i32 {
    x + y
}

#[test]
fn matching_types_call_through() {
    let checked = validate_it2("add_two", ["x", "y"], add_two);
    assert_eq!(checked(DynValue::new(2_i32), DynValue::new(3_i32)), Ok(5));
}

#[test]
fn mismatch_message_names_function_arg_and_types() {
    let checked = validate_it2("add_two", ["x", "y"], add_two);
    let err = checked(DynValue::new(2_i32), DynValue::new("A")).unwrap_err();

    assert_eq!(err.function(), "add_two");
    assert_eq!(err.arg(), "y");
    assert_eq!(err.expected(), "i32");
    assert_eq!(err.found(), "&str");
    assert_eq!(
        err.to_string(),
        "add_two expects type i32 for arg y but received value \"A\" with type of &str"
    );
}

#[test]
fn first_mismatch_is_reported() {
    let checked = validate_it2("add_two", ["x", "y"], add_two);
    let err = checked(DynValue::new(1.5_f64), DynValue::new("A")).unwrap_err();

    assert_eq!(err.arg(), "x");
    assert_eq!(err.found(), "f64");
}

#[test]
fn function_is_not_called_on_mismatch() {
    let calls = std::cell::Cell::new(0);
    let checked = validate_it("count", "n", |n: u8| {
        calls.set(calls.get() + 1);
        n
    });

    assert!(checked(DynValue::new(1_u16)).is_err());
    assert_eq!(calls.get(), 0);
    assert_eq!(checked(DynValue::new(1_u8)), Ok(1));
    assert_eq!(calls.get(), 1);
}

#[test]
fn dyn_value_downcasts() {
    let value = DynValue::new(String::from("text"));
    assert!(value.is::<String>());
    assert!(!value.is::<&str>());
    assert_eq!(value.downcast_ref::<String>().map(String::as_str), Some("text"));
    assert_eq!(value.repr(), "\"text\"");

    let value = value.downcast::<u8>().unwrap_err();
    assert_eq!(value.type_name(), "alloc::string::String");
    assert_eq!(value.downcast::<String>().unwrap(), "text");
}

#[test]
fn type_mismatch_becomes_a_pipeline_failure() {
    let lift = Lifter::<Either<DynValue, TypeMismatch>, TypeMismatch>::new();
    let square = validate_it("square", "v", |v: i64| v * v);
    let stage = lift.lift(|value| square(value).map(DynValue::new));

    let ok = chain!(DynValue::new(4_i64), &stage, &stage);
    assert_eq!(ok.into_value().and_then(|v| v.downcast::<i64>().ok()), Some(256));

    let failed = chain!(DynValue::new(4_i32), &stage, &stage);
    assert_eq!(failed.error().map(TypeMismatch::arg), Some("v"));
}
