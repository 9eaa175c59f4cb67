use std::cell::Cell;

use chainsmoke::convert::*;
use chainsmoke::{chain, Either, Lifter, Maybe};

#[test]
fn result_and_either_round_trip() {
    assert_eq!(result_to_either::<i32, &str>(Ok(1)), Either::Success(1));
    assert_eq!(either_to_result(Either::<i32, &str>::Error("e")), Err("e"));

    let back = either_to_result(result_to_either::<i32, &str>(Err("kept")));
    assert_eq!(back, Err("kept"));
}

#[test]
fn option_and_maybe_round_trip() {
    assert_eq!(option_to_maybe(Some(2)), Maybe::Just(2));
    assert_eq!(option_to_maybe::<i32>(None), Maybe::Nothing);
    assert_eq!(maybe_to_option(Maybe::Just(2)), Some(2));
}

#[test]
fn either_to_maybe_drops_error() {
    assert_eq!(either_to_maybe(Either::<i32, String>::Error("gone".into())), Maybe::Nothing);
    assert_eq!(either_to_maybe(Either::<i32, String>::Success(3)), Maybe::Just(3));
}

#[test]
fn maybe_to_either_builds_error_only_when_absent() {
    let built = Cell::new(0);
    let make = || {
        built.set(built.get() + 1);
        "absent"
    };

    assert_eq!(maybe_to_either(Maybe::Just(1), make), Either::Success(1));
    assert_eq!(built.get(), 0);
    assert_eq!(maybe_to_either(Maybe::<i32>::Nothing, make), Either::Error("absent"));
    assert_eq!(built.get(), 1);
}

#[test]
fn pipeline_result_converts_for_question_mark() {
    fn parse_and_bump(input: &str) -> Result<i32, String> {
        let lift = Lifter::<Either<i32, String>, String>::new();
        let bump = lift.lift(|v| v.checked_add(1).ok_or_else(|| "overflow".to_string()));

        let start = result_to_either(input.parse::<i32>().map_err(|e| e.to_string()));
        let value = either_to_result(chain!(start, &bump))?;
        Ok(value)
    }

    assert_eq!(parse_and_bump("41"), Ok(42));
    assert!(parse_and_bump("forty").is_err());
    assert_eq!(parse_and_bump(&i32::MAX.to_string()), Err("overflow".to_string()));
}
