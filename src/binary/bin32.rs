// Integer-register arithmetic: the working values are wider
// than the fields they come from, so widening and narrowing
// casts are pervasive and checked by the field invariants.
#![allow(clippy::cast_lossless)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]

use core::{fmt, mem::size_of, num::FpCategory};

use super::base::impl_bin;
use crate::{conv::ParseError, ctx::RoundingMode, util::const_assert};

#[cfg(feature = "rand")]
use rand::{
    distributions::{Distribution, Standard},
    Rng,
};

/// A 32-bit binary floating point number.
///
/// (–1)^sign × 1.mantissa × 2^(exponent − 127)
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Bin32(
    /// s eeeeeeee mmmmmmmmmmm mmmmmmmmmmmm
    u32,
);
const_assert!(size_of::<Bin32>() == 32 / 8);

impl_bin! {
    name = Bin32,
    bits = u32,
    ebits = 8,
    mbits = 23,
}

#[cfg(feature = "rand")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand")))]
impl Distribution<Bin32> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Bin32 {
        Bin32::from_bits(rng.gen())
    }
}
