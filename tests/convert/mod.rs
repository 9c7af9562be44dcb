use outcome_rail::convert::{
    collect_outcomes, outcome_to_result, partition_outcomes, result_to_outcome,
};
use outcome_rail::Outcome;

#[test]
fn test_result_to_outcome_ok() {
    let result: Result<i32, &str> = Ok(42);
    assert!(result_to_outcome(result).is_success());
}

#[test]
fn test_result_to_outcome_err() {
    let result: Result<i32, &str> = Err("boom");
    assert_eq!(result_to_outcome(result).into_error(), Some("boom"));
}

#[test]
fn test_outcome_to_result() {
    assert_eq!(outcome_to_result(Outcome::<i32, &str>::success(42)), Ok(42));
    assert_eq!(
        outcome_to_result(Outcome::<i32, &str>::failure("boom")),
        Err("boom")
    );
}

#[test]
fn test_from_impl_result_to_outcome() {
    let o: Outcome<i32, &str> = Ok(42).into();
    assert_eq!(o.into_value(), Some(42));
}

#[test]
fn test_from_impl_outcome_to_result() {
    let result: Result<i32, &str> = Outcome::failure("boom").into();
    assert_eq!(result, Err("boom"));
}

#[test]
fn test_collect_outcomes_all_success() {
    let o = collect_outcomes([
        Outcome::<i32, &str>::success(1),
        Outcome::success(2),
        Outcome::success(3),
    ]);
    assert_eq!(o.into_value(), Some(vec![1, 2, 3]));
}

#[test]
fn test_collect_outcomes_first_failure() {
    let o = collect_outcomes([
        Outcome::<i32, &str>::success(1),
        Outcome::failure("first"),
        Outcome::failure("second"),
    ]);
    assert_eq!(o.into_error(), Some("first"));
}

#[test]
fn test_partition_outcomes_preserves_order() {
    let (values, errors) = partition_outcomes([
        Outcome::<i32, &str>::success(1),
        Outcome::failure("a"),
        Outcome::success(2),
        Outcome::failure("b"),
        Outcome::success(3),
    ]);
    assert_eq!(values, vec![1, 2, 3]);
    assert_eq!(errors, vec!["a", "b"]);
}

#[test]
fn test_partition_outcomes_empty() {
    let (values, errors) = partition_outcomes(Vec::<Outcome<i32, &str>>::new());
    assert!(values.is_empty());
    assert!(errors.is_empty());
}
