/*!

# Cargo Features

* **`std`** (enabled by default): Implement `std::error::Error` for this
  crate's error types. Without it, the crate is `no_std` and only needs
  `alloc`.

* **`log`**: Enable logging with [the `log` crate](https://docs.rs/log). The
  shrink loop logs each round at the `trace` level and its stopping condition
  at the `debug` level.

* **`check`**: Enable the `whittle::check` module, a small random-search
  property checker that feeds its first counterexample to the shrinker. This
  feature pulls in `rand` and implies `std` and `log`.

* **`derive`**: Enable the `#[derive(Reduce)]` macro for automatically deriving
  reduction rules for your types.

 */
