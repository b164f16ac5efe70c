/*!

# The `#[derive(Reduce)]` Macro

The `#[derive(Reduce)]` macro is only available when the `derive` cargo feature
is enabled:

```toml
[dependencies]
whittle = { version = "...", features = ["derive"] }
```

Once the `derive` feature is enabled, you can put `#[derive(Reduce)]` on top of
your `struct` and `enum` definitions. It supports unit-, tuple-, and
named-field-styles of `struct`s and `enum` variants. You cannot derive a
reduction rule for `union`s.

The derived rule reduces every field once per call, each with its own rule,
following the same policy as a shrink round (see
[`reduce::Fields`][crate::reduce::Fields]). Enum values keep their variant.
Unit structs and unit variants are always exhausted.

```rust
# #[cfg(feature = "derive")]
# fn main() {
use whittle::{Reduce, Reduction};

#[derive(Clone, Debug, PartialEq, Reduce)]
pub struct Request {
    path: String,
    retries: u8,
    verbose: bool,
}

let request = Request {
    path: "/a/b/c".into(),
    retries: 5,
    verbose: true,
};

assert_eq!(
    request.reduce(),
    Reduction::Reduced(Request {
        path: "/a/".into(),
        retries: 2,
        verbose: false,
    }),
);
# }
# #[cfg(not(feature = "derive"))]
# fn main() {}
```

Every field's type must implement [`Arg`][crate::Arg]. Since every `Reduce`
type that is also `Clone`, `Debug`, and `PartialEq` is an `Arg`, derived types
nest.

## Field Attributes

### `#[whittle(ignore)]`

Never reduce this field; it is cloned as is. Its type only needs to implement
`Clone`.

```rust
# #[cfg(feature = "derive")]
# fn main() {
use whittle::{Reduce, Reduction};

#[derive(Clone, Debug, PartialEq, Reduce)]
enum Shape {
    Circle {
        radius: u32,
        #[whittle(ignore)]
        label: &'static str,
    },
    Empty,
}

let circle = Shape::Circle { radius: 10, label: "c" };
assert_eq!(
    circle.reduce(),
    Reduction::Reduced(Shape::Circle { radius: 5, label: "c" }),
);
assert_eq!(Shape::Empty.reduce(), Reduction::Exhausted);
# }
# #[cfg(not(feature = "derive"))]
# fn main() {}
```

 */
