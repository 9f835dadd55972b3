//! `rbfp` is a pure Rust, no-std implementation of IEEE
//! 754-2008 binary floating point numbers.
//!
//! Arithmetic is performed entirely in integer registers, so
//! results are bit-identical on every platform regardless of the
//! host FPU, and every operation takes its rounding mode as an
//! explicit argument. This is useful for targets without
//! hardware floating point, for cross-platform reproducibility,
//! and as a reference model when validating FPU implementations.
//!
//! # Features
//!
//! - [`Bin16`][binary::Bin16] and [`Bin32`][binary::Bin32],
//! realized as two configurations of the same generic code path.
//! - Addition, subtraction, multiplication, and division with
//! correct treatment of signed zero, infinities, NaN
//! propagation, subnormals, and directed rounding.
//!
//! # Cargo Features
//!
//! - `alloc`: Include [`alloc`] support. This is currently
//! unused, but may be used in the future.
//!
//! - `rand`: Enable [`rand`] support.
//!
//! - `std`: Include [`std`] support. This is currently
//! unused, but may be used in the future. Implies the `alloc`
//! feature.
//!
//! - `slow-tests`: Enable exhaustive tests.
//!
//! [`alloc`]: https://doc.rust-lang.org/alloc/
//! [`rand`]: https://crates.io/crates/rand
//! [`std`]: https://doc.rust-lang.org/std/

#![allow(dead_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(any(feature = "std", test)), deny(clippy::std_instead_of_core))]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(clippy::alloc_instead_of_core)]
#![deny(clippy::cast_lossless)]
#![deny(clippy::cast_possible_wrap)]
#![deny(clippy::cast_precision_loss)]
#![deny(clippy::cast_sign_loss)]
#![deny(clippy::expect_used)]
#![deny(clippy::implicit_saturating_sub)]
#![deny(clippy::indexing_slicing)]
#![deny(clippy::missing_panics_doc)]
#![deny(clippy::panic)]
#![deny(clippy::ptr_as_ptr)]
#![deny(clippy::string_slice)]
#![deny(clippy::transmute_ptr_to_ptr)]
#![deny(clippy::undocumented_unsafe_blocks)]
#![deny(clippy::unimplemented)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::wildcard_imports)]
#![deny(missing_docs)]
#![deny(rust_2018_idioms)]
#![deny(unused_lifetimes)]
#![deny(unused_qualifications)]

pub mod binary;
mod bintest;
mod conv;
mod ctx;
mod macros;
mod util;

#[doc(inline)]
#[allow(non_camel_case_types)]
pub use binary::Bin16 as b16;
#[doc(inline)]
#[allow(non_camel_case_types)]
pub use binary::Bin32 as b32;
pub use conv::*;
pub use ctx::*;

/// Simplifies importing common items.
pub mod prelude {
    pub use super::{b16, b32, RoundingMode};
}
