use std::cell::Cell;

use chainsmoke::traits::Stage;
use chainsmoke::{make_lifter, Either, Lifter, Maybe, RailroadError, RailroadKind};

#[test]
fn make_lifter_accepts_matching_kind() {
    let lift = make_lifter::<Either<i32, String>, String>("Either").unwrap();
    assert_eq!(lift.kind(), RailroadKind::Either);
    assert!(!lift.is_debug());

    let lift = make_lifter::<Maybe<i32>, String>("Maybe").unwrap();
    assert_eq!(lift.kind(), RailroadKind::Maybe);
}

#[test]
fn make_lifter_rejects_kind_of_other_container() {
    let err = make_lifter::<Maybe<i32>, String>("Either").unwrap_err();
    assert_eq!(
        err,
        RailroadError::KindMismatch {
            requested: RailroadKind::Either,
            container: RailroadKind::Maybe,
        }
    );
    assert_eq!(err.to_string(), "Either was requested but this lifter produces Maybe stages");
}

#[test]
fn debug_and_guarded_switch_policy() {
    let lift = Lifter::<Either<i32, ()>, ()>::new();
    assert!(lift.debug().is_debug());
    assert!(!lift.debug().guarded().is_debug());
    assert_eq!(lift.debug().kind(), RailroadKind::Either);
}

#[test]
fn lifted_stage_accepts_raw_value_and_container() {
    let lift = Lifter::<Either<i32, ()>, ()>::new();
    let inc = lift.lift(|v| Ok(v + 1));

    assert_eq!(inc.run(1), Either::Success(2));
    assert_eq!(inc.run(Either::Success(1)), Either::Success(2));
    assert_eq!(inc.call(Either::Success(1)), Either::Success(2));
}

#[test]
fn body_is_not_called_on_failure_track() {
    let lift = Lifter::<Maybe<i32>, ()>::new();
    let calls = Cell::new(0);
    let counted = lift.lift(|v| {
        calls.set(calls.get() + 1);
        Ok(v)
    });

    assert_eq!(counted.run(Maybe::Nothing), Maybe::Nothing);
    assert_eq!(calls.get(), 0);

    assert_eq!(counted.run(1), Maybe::Just(1));
    assert_eq!(calls.get(), 1);
}

#[test]
fn debug_stage_passes_failure_through_as_ok() {
    let lift = Lifter::<Either<i32, &str>, &str>::new().debug();
    let inc = lift.lift(|v| Ok(v + 1));

    assert_eq!(inc.run(Either::Error("earlier")), Ok(Either::Error("earlier")));
}

#[test]
fn lift_map_never_fails() {
    let lift = Lifter::<Either<String, ()>, ()>::new();
    let shout = lift.lift_map(|s: String| s.to_uppercase());

    assert_eq!(shout.run(String::from("hi")), Either::Success(String::from("HI")));
}

#[test]
fn named_stage_keeps_name_and_function() {
    let lift = Lifter::<Either<i32, ()>, ()>::new();
    let named = lift.lift_named("add_one", |v| Ok(v + 1));
    assert_eq!(named.name(), Some("add_one"));
    assert_eq!(lift.lift(|v| Ok(v)).name(), None);

    let debug = format!("{named:?}");
    assert!(debug.contains("add_one"));
    assert!(debug.contains("Either"));

    let func = named.into_inner();
    assert_eq!(func(1), Ok(2));
}

#[test]
fn lifter_is_copy_and_debug() {
    let lift = Lifter::<Maybe<u8>, ()>::default();
    let copy = lift;
    assert_eq!(format!("{lift:?}"), format!("{copy:?}"));
    assert!(format!("{lift:?}").contains("Maybe"));
}

#[test]
fn stage_can_be_reused_across_inputs() {
    let lift = Lifter::<Either<i32, String>, String>::new();
    let checked = lift.lift(|v| {
        if v < 10 {
            Ok(v)
        } else {
            Err(format!("{v} too big"))
        }
    });

    assert_eq!(checked.run(3), Either::Success(3));
    assert_eq!(checked.run(30), Either::Error("30 too big".to_string()));
    assert_eq!(checked.run(4), Either::Success(4));
}
