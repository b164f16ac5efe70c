#![cfg(feature = "check")]

use whittle::{
    check::{Check, CheckError},
    Value,
};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn check_passes_when_the_property_holds() -> anyhow::Result<()> {
    init_logger();

    Check::new()
        .iters(500)
        .run(
            |rng| (rng.gen_u32(), rng.gen_u32()),
            |a: u32, b: u32| a.wrapping_add(b) == b.wrapping_add(a),
        )
        .map_err(|e| anyhow::anyhow!("{e}"))?;
    Ok(())
}

#[test]
fn check_shrinks_the_first_counterexample() -> anyhow::Result<()> {
    init_logger();

    let property = |a: u32| a < 1000;
    let failure = Check::new()
        .iters(1000)
        .run(|rng| (rng.gen_u32(),), property)
        .unwrap_err()
        .unwrap_failed();

    let Value::U32(found) = failure.counterexample.args[0] else {
        panic!("unexpected counterexample: {}", failure.counterexample.args);
    };
    assert!(!property(found));

    let outcome = failure.outcome;
    assert!(outcome.is_minimized());
    assert!(outcome.count() > failure.counterexample.count);
    assert_eq!(outcome.original(), &failure.counterexample.args);

    let minimized = outcome.unwrap_minimized();
    let (Value::U32(input), Value::U32(succeeded)) = (&minimized.input[0], &minimized.succeeded[0])
    else {
        panic!("unexpected outcome: {minimized}");
    };
    assert!(*input >= 1000 && *input < 2000);
    assert_eq!(*succeeded, *input / 2);
    Ok(())
}

#[test]
fn check_is_deterministic_for_a_seed() -> anyhow::Result<()> {
    init_logger();

    let run = |seed| {
        Check::new()
            .seed(seed)
            .run(|rng| (rng.gen_string(16),), |s: String| s.len() < 8)
            .unwrap_err()
            .unwrap_failed()
    };

    let a = run(42);
    let b = run(42);
    assert_eq!(a.counterexample, b.counterexample);
    assert_eq!(a.outcome, b.outcome);
    Ok(())
}

#[test]
fn check_respects_the_retry_budget() -> anyhow::Result<()> {
    init_logger();

    let failure = Check::new()
        .max_retries(0)
        .run(|rng| (rng.gen_u8(),), |_a: u8| false)
        .unwrap_err()
        .unwrap_failed();

    assert_eq!(failure.counterexample.count, 1);
    assert!(!failure.outcome.is_minimized());
    assert_eq!(failure.outcome.count(), 1);
    Ok(())
}

#[test]
fn check_reports_setup_errors() -> anyhow::Result<()> {
    init_logger();

    // The generator produces two arguments but the property takes one.
    let err = Check::new()
        .run(|rng| (rng.gen_u8(), rng.gen_u8()), |_a: u8| true)
        .unwrap_err();

    assert!(matches!(err, CheckError::Error(_)));
    assert!(err.unwrap_error().is_setup());
    Ok(())
}

#[test]
fn check_with_generated_lists() -> anyhow::Result<()> {
    init_logger();

    let failure = Check::new()
        .run(
            |rng| (rng.gen_vec(20, |rng| rng.gen_bool()),),
            |v: Vec<bool>| v.len() < 4,
        )
        .unwrap_err()
        .unwrap_failed();

    let minimized = failure.outcome.unwrap_minimized();
    let [Value::List(input)] = minimized.input.as_slice() else {
        panic!("unexpected outcome: {minimized}");
    };
    let [Value::List(succeeded)] = minimized.succeeded.as_slice() else {
        panic!("unexpected outcome: {minimized}");
    };
    assert!(input.len() >= 4);
    assert!(succeeded.len() < 4);
    Ok(())
}
