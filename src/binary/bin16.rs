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

/// A 16-bit binary floating point number.
///
/// (–1)^sign × 1.mantissa × 2^(exponent − 15)
#[derive(Copy, Clone)]
#[repr(transparent)]
pub struct Bin16(
    /// s eeeee mmmmmmmmmm
    u16,
);
const_assert!(size_of::<Bin16>() == 16 / 8);

impl_bin! {
    name = Bin16,
    bits = u16,
    ebits = 5,
    mbits = 10,
}

#[cfg(feature = "rand")]
#[cfg_attr(docsrs, doc(cfg(feature = "rand")))]
impl Distribution<Bin16> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Bin16 {
        Bin16::from_bits(rng.gen())
    }
}
