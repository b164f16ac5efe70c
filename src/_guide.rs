/*!

Tutorials, overviews, and etc... for the `whittle` crate.

All the documentation that isn't API reference.

# Table of Contents

* [Reduction Rules and the Shrink Loop][reduction_rules]
* [The `#[derive(Reduce)]` Macro][derive_macro]
* [Cargo Features][cargo_features]
* [Minimum Supported Rust Version][msrv]

 */

pub mod cargo_features;
pub mod derive_macro;
pub mod msrv;
pub mod reduction_rules;
