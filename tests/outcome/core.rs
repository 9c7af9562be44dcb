use core::cell::Cell;
use outcome_rail::Outcome;

#[test]
fn test_outcome_success_into_parts() {
    let o = Outcome::<i32, &str>::success(5);
    assert_eq!(o.into_parts(), (Some(5), None));
}

#[test]
fn test_outcome_failure_into_parts() {
    let o = Outcome::<i32, &str>::failure("boom");
    assert_eq!(o.into_parts(), (None, Some("boom")));
}

#[test]
fn test_outcome_predicates() {
    assert!(Outcome::<i32, &str>::success(1).is_success());
    assert!(!Outcome::<i32, &str>::success(1).is_failure());
    assert!(Outcome::<i32, &str>::failure("e").is_failure());
    assert!(!Outcome::<i32, &str>::failure("e").is_success());
}

#[test]
fn test_outcome_borrowing_accessors() {
    let success = Outcome::<i32, &str>::success(5);
    assert_eq!(success.value(), Some(&5));
    assert_eq!(success.error(), None);

    let failure = Outcome::<i32, &str>::failure("boom");
    assert_eq!(failure.value(), None);
    assert_eq!(failure.error(), Some(&"boom"));
}

#[test]
fn test_outcome_from_parts_value() {
    let o = Outcome::<i32, &str>::from_parts(Some(5), None);
    assert_eq!(o.into_value(), Some(5));
}

#[test]
fn test_outcome_from_parts_error() {
    let o = Outcome::<i32, &str>::from_parts(None, Some("boom"));
    assert_eq!(o.into_error(), Some("boom"));
}

#[test]
fn test_outcome_from_parts_error_priority() {
    // A populated value slot does not mask a present error.
    let o = Outcome::from_parts(Some(5), Some("stale"));
    assert_eq!(o.into_error(), Some("stale"));
}

#[test]
#[should_panic(expected = "requires a value")]
fn test_outcome_from_parts_both_absent_panics() {
    let _ = Outcome::<i32, &str>::from_parts(None, None);
}

#[test]
fn test_outcome_attempt_success() {
    let o: Outcome<i32, &str> = Outcome::attempt(|| (Some(5), None));
    assert_eq!(o.into_value(), Some(5));
}

#[test]
fn test_outcome_attempt_failure() {
    let o: Outcome<i32, &str> = Outcome::attempt(|| (None, Some("x")));
    assert_eq!(o.into_error(), Some("x"));
}

#[test]
fn test_outcome_attempt_invokes_exactly_once() {
    let calls = Cell::new(0);
    let o: Outcome<i32, &str> = Outcome::attempt(|| {
        calls.set(calls.get() + 1);
        (Some(5), None)
    });
    assert_eq!(calls.get(), 1);
    assert_eq!(o.into_value(), Some(5));
}

#[test]
fn test_outcome_map_success() {
    let o = Outcome::<i32, &str>::success(21).map(|x| x * 2);
    assert_eq!(o.into_value(), Some(42));
}

#[test]
fn test_outcome_map_failure_passes_through() {
    let o: Outcome<String, &str> = Outcome::failure("boom").map(|x: i32| x.to_string());
    assert_eq!(o.into_error(), Some("boom"));
}

#[test]
fn test_outcome_map_err_failure() {
    let o = Outcome::<i32, &str>::failure("boom").map_err(|e| e.len());
    assert_eq!(o.into_error(), Some(4));
}

#[test]
fn test_outcome_map_err_success_passes_through() {
    let o = Outcome::<i32, &str>::success(5).map_err(|e| e.len());
    assert_eq!(o.into_value(), Some(5));
}

#[test]
fn test_outcome_and_then_left_identity() {
    fn double(x: i32) -> Outcome<i32, &'static str> {
        Outcome::success(x * 2)
    }
    assert_eq!(Outcome::success(5).and_then(double), double(5));
}

#[test]
fn test_outcome_and_then_failure_short_circuits() {
    let invoked = Cell::new(false);
    let o: Outcome<i32, &str> = Outcome::failure("boom").and_then(|x: i32| {
        invoked.set(true);
        Outcome::success(x * 2)
    });
    assert!(!invoked.get());
    assert_eq!(o.into_error(), Some("boom"));
}

#[test]
fn test_outcome_analyze_success_branch_only() {
    let success_ran = Cell::new(false);
    let failure_ran = Cell::new(false);
    let o = Outcome::<i32, &str>::success(21).analyze(
        |value| {
            success_ran.set(true);
            Outcome::success(value * 2)
        },
        |error| {
            failure_ran.set(true);
            Outcome::failure(error)
        },
    );
    assert!(success_ran.get());
    assert!(!failure_ran.get());
    assert_eq!(o.into_value(), Some(42));
}

#[test]
fn test_outcome_analyze_failure_branch_only() {
    let success_ran = Cell::new(false);
    let failure_ran = Cell::new(false);
    let o = Outcome::<i32, &str>::failure("boom").analyze(
        |value| {
            success_ran.set(true);
            Outcome::success(value)
        },
        |_| {
            failure_ran.set(true);
            Outcome::failure("handled")
        },
    );
    assert!(!success_ran.get());
    assert!(failure_ran.get());
    assert_eq!(o.into_error(), Some("handled"));
}

#[test]
fn test_outcome_recover_success() {
    assert_eq!(Outcome::<i32, &str>::success(42).recover(0), 42);
}

#[test]
fn test_outcome_recover_failure() {
    assert_eq!(Outcome::<i32, &str>::failure("boom").recover(0), 0);
}

#[test]
fn test_outcome_recover_with_lazy_on_success() {
    let invoked = Cell::new(false);
    let value = Outcome::<i32, &str>::success(42).recover_with(|_| {
        invoked.set(true);
        0
    });
    assert!(!invoked.get());
    assert_eq!(value, 42);
}

#[test]
fn test_outcome_recover_with_failure() {
    let value = Outcome::<usize, &str>::failure("boom").recover_with(|e| e.len());
    assert_eq!(value, 4);
}

#[test]
fn test_outcome_or_success_keeps_receiver() {
    let o = Outcome::<i32, &str>::success(1).or(Outcome::success(2));
    assert_eq!(o.into_value(), Some(1));
}

#[test]
fn test_outcome_or_failure_takes_alternative() {
    let o = Outcome::<i32, &str>::failure("boom").or(Outcome::success(2));
    assert_eq!(o.into_value(), Some(2));
}

#[test]
fn test_outcome_or_else_failure_alternative_may_fail() {
    let o = Outcome::<i32, &str>::failure("boom").or_else(|_| Outcome::failure("still boom"));
    assert_eq!(o.into_error(), Some("still boom"));
}

#[test]
fn test_outcome_or_else_lazy_on_success() {
    let invoked = Cell::new(false);
    let o = Outcome::<i32, &str>::success(1).or_else(|_| {
        invoked.set(true);
        Outcome::success(2)
    });
    assert!(!invoked.get());
    assert_eq!(o.into_value(), Some(1));
}

#[test]
fn test_outcome_zip_both_success() {
    let o = Outcome::<i32, &str>::success(1).zip(Outcome::success("two"));
    assert_eq!(o.into_value(), Some((1, "two")));
}

#[test]
fn test_outcome_zip_leftmost_failure_wins() {
    let left = Outcome::<i32, &str>::failure("left");
    let right = Outcome::<i32, &str>::failure("right");
    assert_eq!(left.zip(right).into_error(), Some("left"));
}

#[test]
fn test_outcome_zip_right_failure() {
    let o = Outcome::<i32, &str>::success(1).zip(Outcome::<i32, &str>::failure("right"));
    assert_eq!(o.into_error(), Some("right"));
}

#[test]
fn test_outcome_from_result_round_trip() {
    let ok: Result<i32, &str> = Ok(42);
    assert_eq!(Outcome::from_result(ok).into_result(), Ok(42));

    let err: Result<i32, &str> = Err("boom");
    assert_eq!(Outcome::from_result(err).into_result(), Err("boom"));
}

#[test]
fn test_outcome_clone_and_eq() {
    let o = Outcome::<i32, &str>::success(5);
    let copy = o;
    assert_eq!(o, copy);
    assert!(Outcome::<i32, &str>::success(1) < Outcome::success(2));
}
