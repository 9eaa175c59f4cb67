use chainsmoke::Maybe;

#[test]
fn default_is_nothing() {
    assert_eq!(Maybe::<String>::default(), Maybe::Nothing);
}

#[test]
fn constructors_and_predicates() {
    let present = Maybe::just("x");
    let absent: Maybe<&str> = Maybe::nothing();

    assert!(present.is_just());
    assert!(absent.is_nothing());
    assert_eq!(present.value(), Some(&"x"));
    assert_eq!(absent.value(), None);
}

#[test]
fn map_and_and_then_skip_nothing() {
    let absent: Maybe<i32> = Maybe::Nothing;
    assert_eq!(absent.map(|v| v * 2), Maybe::Nothing);
    assert_eq!(absent.and_then(|v| Maybe::Just(v * 2)), Maybe::Nothing);

    let present = Maybe::Just(3);
    assert_eq!(present.and_then(|v| Maybe::Just(v * 2)), Maybe::Just(6));
    assert_eq!(present.and_then(|_| Maybe::<i32>::Nothing), Maybe::Nothing);
}

#[test]
fn fallbacks() {
    assert_eq!(Maybe::<i32>::Nothing.unwrap_or(7), 7);
    assert_eq!(Maybe::<i32>::Nothing.unwrap_or_else(|| 8), 8);
    assert_eq!(Maybe::Just(1).unwrap_or(7), 1);
    assert_eq!(Maybe::Just(1).ok_or_else(|| "missing"), Ok(1));
}

#[test]
fn option_round_trip_via_from() {
    let option: Option<i32> = Maybe::Just(5).into();
    assert_eq!(option, Some(5));
    assert_eq!(Maybe::Just(5).into_option(), Some(5));

    let maybe: Maybe<i32> = 5.into();
    assert_eq!(maybe, Maybe::Just(5));
}

#[test]
fn iter_yields_at_most_one_item() {
    let present = Maybe::Just(2);
    let mut iter = present.iter();
    assert_eq!(iter.size_hint(), (1, Some(1)));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next(), None);

    let absent: Maybe<i32> = Maybe::Nothing;
    assert_eq!(absent.iter().count(), 0);
    assert_eq!(absent.into_iter().count(), 0);
}
