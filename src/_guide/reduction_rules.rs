/*!

# Reduction Rules and the Shrink Loop

Shrinking takes a counterexample (an argument tuple on which a property
returns `false`) and repeatedly makes every argument a little smaller, until
the property starts returning `true`. The last failing tuple and the first
passing one are then reported together: the bug lives somewhere between them.

## Built-in Rules

| Type | Rule | Exhausted at |
|---|---|---|
| integers | halve toward zero | `0` |
| `f32`, `f64` | halve, then round toward zero | `0.0`, NaN, and infinities |
| `bool` | flip | never |
| `String` | keep the first `ceil(len / 2)` characters | length `<= 1` |
| `Vec<T>` | keep the first `ceil(len / 2)` elements | length `<= 1` |
| [`Opaque<T>`][crate::Opaque] | none | always unsupported |

Every rule is deterministic, so running the same shrink twice always produces
the same result.

```rust
use whittle::{Reduction, Value};

let mut value = Value::F64(-9.0);
let mut seen = vec![];
while let Reduction::Reduced(v) = value.reduce() {
    seen.push(v.clone());
    value = v;
}
assert_eq!(seen, [Value::F64(-4.0), Value::F64(-2.0), Value::F64(-1.0), Value::F64(0.0)]);
```

## Rounds

Each round reduces every argument of the current tuple once:

* Arguments that are exhausted, or that have no rule, keep their value as long
  as at least one other argument was reduced in the same round.

* If no argument was reduced and every argument was merely exhausted, the
  shrink run ends with [`Outcome::NoProgress`][crate::Outcome::NoProgress].

* If no argument was reduced and some argument has no rule at all, the run
  fails with an [`Unsupported`][crate::ErrorKind::Unsupported] error.

The property is then evaluated on the reduced tuple. If it passes, the run ends
with [`Outcome::Minimized`][crate::Outcome::Minimized]. If it still fails, the
reduced tuple becomes the current one. The number of rounds is bounded by
[`Shrink::max_retries`][crate::Shrink::max_retries].

```rust
use whittle::{Counterexample, IntoArgs, Opaque, Shrink};

// The `char` has no reduction rule, but the `u16` next to it does.
let failure = Shrink::new()
    .run(
        |n: u16, _c: Opaque<char>| n < 100,
        Counterexample::new(1, (1000u16, Opaque('x'))),
    )
    .unwrap()
    .unwrap_minimized();

assert_eq!(failure.input, (125u16, Opaque('x')).into_args());
assert_eq!(failure.succeeded, (62u16, Opaque('x')).into_args());
```

## Custom Rules

Implement [`Reduce`][crate::Reduce] for your own types to give them their own
rule; see its documentation for an example. A type's custom rule always takes
precedence: the built-in rules are never consulted for it. To reduce a
composite type member by member, use
[`reduce::Fields`][crate::reduce::Fields] or
[`#[derive(Reduce)]`][crate::_guide::derive_macro].

 */
