use chainsmoke::traits::{Bypass, Container, FailurePolicy, Guarded, Railroad, Stage};
use chainsmoke::{chain, Either, Lifter, Maybe, RailroadKind};

mod custom_railroad;

#[test]
fn either_railroad_keeps_error() {
    let failed = <Either<i32, &str> as Railroad<&str>>::failure("why");
    assert!(failed.is_failure());
    assert_eq!(failed, Either::Error("why"));
    assert_eq!(<Either<i32, &str> as Container>::KIND, RailroadKind::Either);
}

#[test]
fn maybe_railroad_drops_error() {
    let failed = <Maybe<i32> as Railroad<String>>::failure("why".to_string());
    assert!(failed.is_failure());
    assert_eq!(failed, Maybe::Nothing);
    assert_eq!(<Maybe<i32> as Container>::KIND, RailroadKind::Maybe);
}

#[test]
fn into_success_hands_failure_back() {
    let ok = <Either<i32, &str> as Container>::success(3);
    assert_eq!(Container::into_success(ok), Ok(3));

    let failed: Either<i32, &str> = Either::Error("same");
    assert_eq!(Container::into_success(failed), Err(Either::Error("same")));

    let absent: Maybe<i32> = Maybe::Nothing;
    assert_eq!(Container::into_success(absent), Err(Maybe::Nothing));
}

#[test]
fn guarded_policy_captures_and_continues() {
    assert!(Guarded::CAPTURES);

    let captured: Either<i32, &str> = Guarded::capture::<Either<i32, &str>, &str>(Err("e"));
    assert_eq!(captured, Either::Error("e"));

    let bound = Guarded::bind::<Either<i32, &str>, &str, _>(captured, |c| {
        Container::into_success(c).map_or_else(|f| f, |v| Either::Success(v + 1))
    });
    assert_eq!(bound, Either::Error("e"));
}

#[test]
fn bypass_policy_breaks_on_err() {
    assert!(!Bypass::CAPTURES);

    let outcome = Bypass::capture::<Either<i32, &str>, &str>(Err("e"));
    assert_eq!(outcome, Err("e"));

    let mut called = false;
    let bound = Bypass::bind::<Either<i32, &str>, &str, _>(outcome, |c| {
        called = true;
        Ok(c)
    });
    assert_eq!(bound, Err("e"));
    assert!(!called);

    let settled = Bypass::settle::<Maybe<i32>, ()>(Maybe::Just(1));
    assert_eq!(settled, Ok(Maybe::Just(1)));
}

#[test]
fn borrowed_and_boxed_stages_behave_like_the_original() {
    let lift = Lifter::<Either<i32, ()>, ()>::new();
    let inc = lift.lift(|v| Ok(v + 1));
    let boxed: Box<dyn Stage<Either<i32, ()>, Error = (), Policy = Guarded>> =
        Box::new(lift.lift(|v| Ok(v + 1)));

    assert_eq!((&inc).run(1), inc.run(1));
    assert_eq!(boxed.run(1), inc.run(1));
    assert_eq!(chain!(1, &inc, &boxed, boxed), Either::Success(4));
}

#[test]
fn feed_skips_stage_after_failure() {
    let lift = Lifter::<Either<i32, &str>, &str>::new();
    let inc = lift.lift(|v| Ok(v + 1));

    assert_eq!(inc.feed(Either::Error("stop")), Either::Error("stop"));
    assert_eq!(inc.feed(Either::Success(1)), Either::Success(2));
}

#[test]
fn maybe_failure_check_needs_no_error_type() {
    let absent: Maybe<i32> = Maybe::Nothing;
    let present = Maybe::Just(4);

    assert!(absent.is_failure());
    assert!(!present.is_failure());
    assert_eq!(present.into_success(), Ok(4));
}

#[test]
fn bypass_stage_runs_on_an_earlier_outcome() {
    let lift = Lifter::<Maybe<i32>, &str>::new().debug();
    let inc = lift.lift(|v| Ok(v + 1));

    assert_eq!(inc.run(inc.run(1)), Ok(Maybe::Just(3)));
    assert_eq!(inc.run(Err("earlier")), Err("earlier"));
    assert_eq!(inc.run(Maybe::Nothing), Ok(Maybe::Nothing));
}
