use whittle::{reduce::Fields, Arg, Opaque, Reduce, Reduction, Value};

/// Reduce `value` until its rule is exhausted, collecting every step.
fn reduce_all(value: Value) -> Vec<Value> {
    let mut steps = vec![value];
    for _ in 0..1000 {
        match steps.last().unwrap().reduce() {
            Reduction::Reduced(v) => steps.push(v),
            Reduction::Exhausted => return steps,
            other => panic!("unexpected reduction: {other:?}"),
        }
    }
    panic!("reduction did not terminate: {steps:?}");
}

#[test]
fn integers_halve_toward_zero() -> anyhow::Result<()> {
    assert_eq!(Value::I32(1600).reduce(), Reduction::Reduced(Value::I32(800)));
    assert_eq!(Value::I32(7).reduce(), Reduction::Reduced(Value::I32(3)));
    assert_eq!(Value::I32(-7).reduce(), Reduction::Reduced(Value::I32(-3)));
    assert_eq!(Value::I32(1).reduce(), Reduction::Reduced(Value::I32(0)));
    assert_eq!(Value::I32(-1).reduce(), Reduction::Reduced(Value::I32(0)));
    assert_eq!(Value::I32(0).reduce(), Reduction::Exhausted);

    assert_eq!(
        Value::I8(i8::MIN).reduce(),
        Reduction::Reduced(Value::I8(-64))
    );
    assert_eq!(
        Value::U64(u64::MAX).reduce(),
        Reduction::Reduced(Value::U64(u64::MAX / 2))
    );
    assert_eq!(Value::U8(0).reduce(), Reduction::Exhausted);
    assert_eq!(
        Value::Usize(5).reduce(),
        Reduction::Reduced(Value::Usize(2))
    );
    assert_eq!(
        Value::I128(-9).reduce(),
        Reduction::Reduced(Value::I128(-4))
    );
    Ok(())
}

#[test]
fn integers_reach_zero() -> anyhow::Result<()> {
    let steps = reduce_all(Value::I64(1000));
    assert_eq!(
        steps,
        [1000, 500, 250, 125, 62, 31, 15, 7, 3, 1, 0]
            .into_iter()
            .map(Value::I64)
            .collect::<Vec<_>>()
    );

    let steps = reduce_all(Value::I16(i16::MIN));
    assert_eq!(steps.last(), Some(&Value::I16(0)));
    Ok(())
}

#[test]
fn floats_halve_and_round_toward_zero() -> anyhow::Result<()> {
    assert_eq!(
        Value::F64(-7.0).reduce(),
        Reduction::Reduced(Value::F64(-3.0))
    );
    assert_eq!(
        Value::F64(7.0).reduce(),
        Reduction::Reduced(Value::F64(3.0))
    );
    assert_eq!(
        Value::F64(0.5).reduce(),
        Reduction::Reduced(Value::F64(0.0))
    );
    assert_eq!(
        Value::F32(-1.0).reduce(),
        Reduction::Reduced(Value::F32(0.0))
    );
    assert_eq!(
        Value::F32(100.0).reduce(),
        Reduction::Reduced(Value::F32(50.0))
    );
    assert_eq!(Value::F64(0.0).reduce(), Reduction::Exhausted);
    assert_eq!(Value::F64(f64::INFINITY).reduce(), Reduction::Exhausted);
    assert_eq!(Value::F32(f32::NEG_INFINITY).reduce(), Reduction::Exhausted);

    // NaN is not equal to itself, so check the variant directly.
    assert!(matches!(
        Value::F64(f64::NAN).reduce(),
        Reduction::Exhausted
    ));
    Ok(())
}

#[test]
fn negative_floats_converge_on_zero() -> anyhow::Result<()> {
    let steps = reduce_all(Value::F64(-9.0));
    assert_eq!(
        steps,
        [-9.0, -4.0, -2.0, -1.0, 0.0]
            .into_iter()
            .map(Value::F64)
            .collect::<Vec<_>>()
    );

    let steps = reduce_all(Value::F64(-1.0e100));
    assert_eq!(steps.last(), Some(&Value::F64(0.0)));

    let steps = reduce_all(Value::F32(f32::MAX));
    assert_eq!(steps.last(), Some(&Value::F32(0.0)));
    Ok(())
}

#[test]
fn booleans_flip() -> anyhow::Result<()> {
    assert_eq!(
        Value::Bool(true).reduce(),
        Reduction::Reduced(Value::Bool(false))
    );
    assert_eq!(
        Value::Bool(false).reduce(),
        Reduction::Reduced(Value::Bool(true))
    );
    Ok(())
}

#[test]
fn strings_keep_their_first_half_rounded_up() -> anyhow::Result<()> {
    let steps = reduce_all(Value::of(String::from("asd")));
    assert_eq!(
        steps,
        ["asd", "as", "a"]
            .into_iter()
            .map(|s| Value::Str(s.into()))
            .collect::<Vec<_>>()
    );

    assert_eq!(
        Value::Str("abcd".into()).reduce(),
        Reduction::Reduced(Value::Str("ab".into()))
    );
    assert_eq!(Value::Str("a".into()).reduce(), Reduction::Exhausted);
    assert_eq!(Value::Str(String::new()).reduce(), Reduction::Exhausted);
    Ok(())
}

#[test]
fn string_lengths_count_chars() -> anyhow::Result<()> {
    assert_eq!(
        Value::Str("héé".into()).reduce(),
        Reduction::Reduced(Value::Str("hé".into()))
    );
    assert_eq!(
        Value::Str("日本語".into()).reduce(),
        Reduction::Reduced(Value::Str("日本".into()))
    );
    Ok(())
}

#[test]
fn lists_keep_their_first_half_rounded_up() -> anyhow::Result<()> {
    let list = vec![1u8, 2, 3, 4, 5].into_value();
    assert_eq!(
        list.reduce(),
        Reduction::Reduced(vec![1u8, 2, 3].into_value())
    );

    // The elements themselves are left alone.
    let list = vec![100u8, 200].into_value();
    assert_eq!(list.reduce(), Reduction::Reduced(vec![100u8].into_value()));

    assert_eq!(vec![1u8].into_value().reduce(), Reduction::Exhausted);
    assert_eq!(Vec::<u8>::new().into_value().reduce(), Reduction::Exhausted);
    Ok(())
}

#[test]
fn reduction_is_deterministic() -> anyhow::Result<()> {
    let values = [
        Value::I32(12345),
        Value::F64(-3.75),
        Value::Bool(true),
        Value::Str("hello".into()),
        vec![String::from("a"), String::from("b")].into_value(),
    ];
    for v in values {
        assert_eq!(v.reduce(), v.reduce());
    }
    Ok(())
}

#[test]
fn other_values_are_unsupported() -> anyhow::Result<()> {
    let value = Opaque('x').into_value();
    match value.reduce() {
        Reduction::Unsupported(name) => assert_eq!(name, "char"),
        other => panic!("unexpected reduction: {other:?}"),
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq)]
struct Countdown(u32);

impl Reduce for Countdown {
    fn reduce(&self) -> Reduction<Self> {
        // Deliberately not halving, to see that the built-in rule is skipped.
        match self.0 {
            0 => Reduction::Exhausted,
            n => Reduction::Reduced(Countdown(n - 1)),
        }
    }
}

#[test]
fn custom_rules_take_precedence() -> anyhow::Result<()> {
    let value = Countdown(10).into_value();
    let reduced = value.reduce().reduced().unwrap();
    assert_eq!(reduced.into_arg::<Countdown>(), Some(Countdown(9)));

    assert_eq!(Countdown(0).into_value().reduce(), Reduction::Exhausted);
    Ok(())
}

#[derive(Clone, Debug, PartialEq)]
struct Broken;

impl Reduce for Broken {
    fn reduce(&self) -> Reduction<Self> {
        Reduction::failed("always broken")
    }
}

#[test]
fn custom_rule_failures_are_reported() -> anyhow::Result<()> {
    match Broken.into_value().reduce() {
        Reduction::Failed(msg) => assert_eq!(msg.as_str(), "always broken"),
        other => panic!("unexpected reduction: {other:?}"),
    }
    Ok(())
}

#[test]
fn fields_reduce_every_member() -> anyhow::Result<()> {
    let mut fields = Fields::new();
    let a = fields.field(&10i32);
    let b = fields.field(&String::from("abc"));
    let c = fields.field(&0u8);
    assert_eq!((a, b.as_str(), c), (5, "ab", 0));
    assert_eq!(fields.finish(()), Reduction::Reduced(()));
    Ok(())
}

#[test]
fn fields_skip_unsupported_members_while_others_reduce() -> anyhow::Result<()> {
    let mut fields = Fields::new();
    let a = fields.field(&Opaque('x'));
    let b = fields.field(&4u16);
    assert_eq!((a, b), (Opaque('x'), 2));
    assert_eq!(fields.finish(()), Reduction::Reduced(()));
    Ok(())
}

#[test]
fn fields_classify_rounds_without_progress() -> anyhow::Result<()> {
    let mut fields = Fields::new();
    fields.field(&0i32);
    fields.field(&String::from("a"));
    assert_eq!(fields.finish(()), Reduction::Exhausted);

    let mut fields = Fields::new();
    fields.field(&0i32);
    fields.field(&Opaque(1.5f32));
    assert_eq!(fields.finish(()), Reduction::Unsupported("f32"));
    Ok(())
}

#[test]
fn fields_fail_if_any_member_fails() -> anyhow::Result<()> {
    let mut fields = Fields::new();
    fields.field(&100i32);
    fields.field(&Broken);
    fields.field(&100i32);
    match fields.finish(()) {
        Reduction::Failed(msg) => assert_eq!(msg.as_str(), "always broken"),
        other => panic!("unexpected reduction: {other:?}"),
    }
    Ok(())
}
