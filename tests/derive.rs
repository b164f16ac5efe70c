#![cfg(all(feature = "derive", feature = "std"))]

use whittle::{Counterexample, IntoArgs, Opaque, Reduce, Reduction, Shrink};

#[test]
fn derive_on_struct_with_named_fields() -> anyhow::Result<()> {
    #[derive(Clone, Debug, PartialEq, Reduce)]
    struct MyStruct {
        x: u8,
        y: bool,
    }

    let value = MyStruct { x: 10, y: true };
    assert_eq!(
        value.reduce(),
        Reduction::Reduced(MyStruct { x: 5, y: false })
    );
    Ok(())
}

#[test]
fn derive_on_struct_with_unnamed_fields() -> anyhow::Result<()> {
    #[derive(Clone, Debug, PartialEq, Reduce)]
    struct MyStruct(u8, String);

    let value = MyStruct(9, "abc".into());
    assert_eq!(
        value.reduce(),
        Reduction::Reduced(MyStruct(4, "ab".into()))
    );

    // `0` and `"a"` are as small as they get.
    assert_eq!(MyStruct(0, "a".into()).reduce(), Reduction::Exhausted);
    Ok(())
}

#[test]
fn derive_on_unit_struct() -> anyhow::Result<()> {
    #[derive(Clone, Debug, PartialEq, Reduce)]
    struct MyUnitStruct;

    assert_eq!(MyUnitStruct.reduce(), Reduction::Exhausted);
    Ok(())
}

#[test]
fn derive_on_enum() -> anyhow::Result<()> {
    #[derive(Clone, Debug, PartialEq, Reduce)]
    enum MyEnum {
        Unit,
        Unnamed(u8, bool),
        Named { x: u8, y: String },
    }

    assert_eq!(MyEnum::Unit.reduce(), Reduction::Exhausted);

    assert_eq!(
        MyEnum::Unnamed(4, false).reduce(),
        Reduction::Reduced(MyEnum::Unnamed(2, true))
    );

    // Reduction never moves a value from one variant to another.
    assert_eq!(
        MyEnum::Named {
            x: 0,
            y: "abc".into()
        }
        .reduce(),
        Reduction::Reduced(MyEnum::Named {
            x: 0,
            y: "ab".into()
        })
    );
    Ok(())
}

#[test]
fn ignore_field() -> anyhow::Result<()> {
    #[derive(Clone, Debug, PartialEq, Reduce)]
    struct MyStruct {
        x: u64,

        #[whittle(ignore)]
        y: u64,
    }

    assert_eq!(
        MyStruct { x: 10, y: 10 }.reduce(),
        Reduction::Reduced(MyStruct { x: 5, y: 10 })
    );
    assert_eq!(MyStruct { x: 0, y: 10 }.reduce(), Reduction::Exhausted);
    Ok(())
}

#[test]
fn ignored_fields_need_not_be_arguments() -> anyhow::Result<()> {
    #[derive(Clone, Debug, PartialEq, Reduce)]
    struct Labeled {
        #[whittle(ignore)]
        label: &'static str,
        n: i32,
    }

    assert_eq!(
        Labeled { label: "hi", n: -8 }.reduce(),
        Reduction::Reduced(Labeled { label: "hi", n: -4 })
    );
    Ok(())
}

#[test]
fn derive_with_generic_parameters() -> anyhow::Result<()> {
    #[derive(Clone, Debug, PartialEq, Reduce)]
    struct MyGenericStruct<'a, T: Copy, U>
    where
        U: Default,
    {
        #[whittle(ignore)]
        x: &'a T,

        z: Vec<T>,
        w: U,
    }

    let x = 5;
    let value = MyGenericStruct {
        x: &x,
        z: vec![1i32, 2, 3],
        w: 100u8,
    };

    assert_eq!(
        value.reduce(),
        Reduction::Reduced(MyGenericStruct {
            x: &x,
            z: vec![1, 2],
            w: 50,
        })
    );
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Reduce)]
struct Point {
    x: i32,
    y: i32,
}

#[test]
fn derived_types_nest() -> anyhow::Result<()> {
    #[derive(Clone, Debug, PartialEq, Reduce)]
    struct Segment {
        from: Point,
        to: Point,
    }

    let value = Segment {
        from: Point { x: 0, y: 0 },
        to: Point { x: 7, y: -3 },
    };
    assert_eq!(
        value.reduce(),
        Reduction::Reduced(Segment {
            from: Point { x: 0, y: 0 },
            to: Point { x: 3, y: -1 },
        })
    );
    Ok(())
}

#[test]
fn derived_unsupported_fields() -> anyhow::Result<()> {
    #[derive(Clone, Debug, PartialEq, Reduce)]
    struct WithOpaque {
        c: Opaque<char>,
        n: u8,
    }

    assert_eq!(
        WithOpaque {
            c: Opaque('x'),
            n: 2
        }
        .reduce(),
        Reduction::Reduced(WithOpaque {
            c: Opaque('x'),
            n: 1
        })
    );
    assert_eq!(
        WithOpaque {
            c: Opaque('x'),
            n: 0
        }
        .reduce(),
        Reduction::Unsupported("char")
    );
    Ok(())
}

#[test]
fn shrink_derived_arguments() -> anyhow::Result<()> {
    let failure = Shrink::new()
        .run(
            |p: Point| p.x < 10,
            Counterexample::new(1, (Point { x: 1000, y: 3 },)),
        )?
        .unwrap_minimized();

    // `x` and `y` shrink together, one round at a time.
    assert_eq!(failure.count, 8);
    assert_eq!(failure.input, (Point { x: 15, y: 0 },).into_args());
    assert_eq!(failure.succeeded, (Point { x: 7, y: 0 },).into_args());
    Ok(())
}
