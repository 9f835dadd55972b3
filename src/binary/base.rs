macro_rules! impl_bin {
    (
        name = $name:ident,
        bits = $bits:ty,
        ebits = $ebits:literal,
        mbits = $mbits:literal $(,)?
    ) => {
        $crate::binary::base::impl_bin_internal!($name, $bits, $ebits, $mbits);
        $crate::binary::base::impl_bin_consts!($name, $bits);
        $crate::binary::base::impl_bin_to_from_repr!($name, $bits);
        $crate::binary::base::impl_bin_arith!($name, $bits);
        $crate::binary::base::impl_bin_impls!($name);
    };
}
pub(crate) use impl_bin;

macro_rules! impl_bin_internal {
    ($name:ident, $bits:ty, $ebits:literal, $mbits:literal $(,)?) => {
        // Internal stuff.
        impl $name {
            /// The storage width in bits.
            pub(crate) const K: u32 = (size_of::<$name>() * 8) as u32;
            /// The size of the sign bit in bits.
            const S: u32 = 1;
            /// The width of the exponent field in bits.
            pub(crate) const EBITS: u32 = $ebits;
            /// The width of the mantissa field in bits.
            pub(crate) const MBITS: u32 = $mbits;

            /// The storage width in bytes.
            pub(crate) const BYTES: usize = (Self::K / 8) as usize;

            /// The bias subtracted from the encoded exponent in
            /// order to recover the "actual" exponent.
            pub(crate) const BIAS: i32 = (1 << (Self::EBITS - 1)) - 1;

            /// The all-ones exponent code marking an infinity or
            /// a NaN.
            pub(crate) const EXP_LIMIT: u32 = (1 << Self::EBITS) - 1;

            /// The shift needed to set the sign bit.
            pub(crate) const SIGN_SHIFT: u32 = Self::K - Self::S;
            /// Masks just the sign bit.
            const SIGN_MASK: $bits = 1 << Self::SIGN_SHIFT;
            /// Masks the mantissa field.
            pub(crate) const MANTISSA_MASK: $bits = (1 << Self::MBITS) - 1;
            /// The top mantissa bit, set on every quiet NaN.
            const QUIET_BIT: $bits = 1 << (Self::MBITS - 1);

            /// The number of hex digits needed to render the
            /// mantissa, and the left shift that aligns the
            /// mantissa with a nibble boundary.
            const NIBBLES: usize = ((Self::MBITS + 3) / 4) as usize;
            const NIBBLE_SHIFT: u32 = (Self::NIBBLES as u32) * 4 - Self::MBITS;

            const fn signbit(self) -> bool {
                (self.0 & Self::SIGN_MASK) != 0
            }

            /// Returns the biased exponent code.
            ///
            /// The result is in [0, [`EXP_LIMIT`][Self::EXP_LIMIT]].
            pub(crate) const fn biased_exp(self) -> u32 {
                ((self.0 >> Self::MBITS) as u32) & Self::EXP_LIMIT
            }

            /// Returns the raw mantissa field, without the
            /// implicit bit.
            pub(crate) const fn raw_mantissa(self) -> $bits {
                self.0 & Self::MANTISSA_MASK
            }

            /// Creates a number from its sign, biased exponent
            /// code, and mantissa field.
            pub(crate) const fn from_parts(sign: bool, exp: u32, mantissa: $bits) -> Self {
                debug_assert!(exp <= Self::EXP_LIMIT);
                debug_assert!(mantissa <= Self::MANTISSA_MASK);

                let mut bits = 0;
                bits |= (sign as $bits) << Self::SIGN_SHIFT;
                bits |= (exp as $bits) << Self::MBITS;
                bits |= mantissa;
                Self(bits)
            }

            /// Creates a signed zero.
            const fn zero(sign: bool) -> Self {
                Self::from_parts(sign, 0, 0)
            }

            /// Creates a canonical infinity.
            pub(crate) const fn inf(sign: bool) -> Self {
                Self::from_parts(sign, Self::EXP_LIMIT, 0)
            }

            /// The largest finite magnitude with the given sign.
            const fn max_finite(sign: bool) -> Self {
                Self::from_parts(sign, Self::EXP_LIMIT - 1, Self::MANTISSA_MASK)
            }

            /// Returns `self` with the quiet bit forced set.
            const fn quiet(self) -> Self {
                debug_assert!(self.is_nan());

                Self(self.0 | Self::QUIET_BIT)
            }

            /// Reports whether the magnitude of `self` is
            /// strictly smaller than the magnitude of `rhs`.
            ///
            /// Both operands must be finite: with the sign bit
            /// cleared, the remaining bits of a finite value
            /// order first by exponent and then by mantissa.
            const fn mag_lt(self, rhs: Self) -> bool {
                debug_assert!(self.is_finite() && rhs.is_finite());

                (self.0 & !Self::SIGN_MASK) < (rhs.0 & !Self::SIGN_MASK)
            }

            /// Converts a subnormal (exponent code 0) pair into
            /// an equivalent normalized pair with bit
            /// [`MBITS`][Self::MBITS] set in the significand.
            ///
            /// Normal pairs and zero are returned unchanged.
            /// Terminates within MBITS iterations: every shift
            /// moves the leading one bit one place closer to bit
            /// MBITS.
            const fn normalize(exp: i32, sig: u64) -> (i32, u64) {
                if exp != 0 || sig == 0 {
                    return (exp, sig);
                }
                let mut exp = 1;
                let mut sig = sig;
                while (sig >> Self::MBITS) != 1 {
                    sig <<= 1;
                    exp -= 1;
                }
                (exp, sig)
            }

            /// Returns the operand's (exponent, significand),
            /// renormalizing subnormals.
            ///
            /// The significand does *not* carry the implicit bit
            /// for normal operands; callers OR it in.
            const fn normalized(self) -> (i32, u64) {
                Self::normalize(self.biased_exp() as i32, self.raw_mantissa() as u64)
            }

            /// Reports whether the number is `-0.0` or `+0.0`.
            pub const fn is_zero(self) -> bool {
                self.0 & !Self::SIGN_MASK == 0
            }

            /// Reports whether the number is subnormal.
            pub const fn is_subnormal(self) -> bool {
                self.biased_exp() == 0 && self.raw_mantissa() != 0
            }

            /// Reports whether the number is neither zero,
            /// infinite, subnormal, nor NaN.
            pub const fn is_normal(self) -> bool {
                self.biased_exp() != 0 && self.biased_exp() != Self::EXP_LIMIT
            }

            /// Reports whether the number is neither infinite
            /// nor NaN.
            pub const fn is_finite(self) -> bool {
                self.biased_exp() != Self::EXP_LIMIT
            }

            /// Reports whether the number is either positive or
            /// negative infinity.
            pub const fn is_infinite(self) -> bool {
                self.biased_exp() == Self::EXP_LIMIT && self.raw_mantissa() == 0
            }

            /// Reports whether the number is a NaN.
            pub const fn is_nan(self) -> bool {
                self.biased_exp() == Self::EXP_LIMIT && self.raw_mantissa() != 0
            }

            /// Reports whether the number is a quiet NaN.
            ///
            /// A NaN is quiet iff its top mantissa bit is set.
            pub const fn is_qnan(self) -> bool {
                self.is_nan() && self.raw_mantissa() & Self::QUIET_BIT != 0
            }

            /// Reports whether the number is negative, including
            /// `-0.0`.
            pub const fn is_sign_negative(self) -> bool {
                self.signbit()
            }

            /// Reports whether the number is positive, including
            /// `+0.0`.
            pub const fn is_sign_positive(self) -> bool {
                !self.is_sign_negative()
            }

            /// Returns the floating point category of the
            /// number.
            pub const fn classify(self) -> FpCategory {
                if self.is_nan() {
                    FpCategory::Nan
                } else if self.is_infinite() {
                    FpCategory::Infinite
                } else if self.is_zero() {
                    FpCategory::Zero
                } else if self.is_normal() {
                    FpCategory::Normal
                } else {
                    FpCategory::Subnormal
                }
            }

            /// Returns the absolute value of `self`.
            ///
            /// This operation has no special NaN handling.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn copy_abs(self) -> Self {
                Self(self.0 & !Self::SIGN_MASK)
            }

            /// Returns `-self`.
            ///
            /// The sign of every input is flipped, NaNs
            /// included.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn copy_neg(self) -> Self {
                Self(self.0 ^ Self::SIGN_MASK)
            }

            /// Returns `self` with the same sign as `rhs`.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn copy_sign(self, rhs: Self) -> Self {
                let mut bits = self.0;
                bits &= !Self::SIGN_MASK;
                bits |= rhs.0 & Self::SIGN_MASK;
                Self(bits)
            }
        }
    };
}
pub(crate) use impl_bin_internal;

macro_rules! impl_bin_consts {
    ($name:ident, $bits:ty $(,)?) => {
        impl $name {
            /// The largest finite value that can be represented
            /// by this type.
            pub const MAX: Self = Self::max_finite(false);

            /// The smallest finite value (`-MAX`) that can be
            /// represented by this type.
            pub const MIN: Self = Self::max_finite(true);

            /// The smallest positive normal value.
            ///
            /// Positive subnormals are smaller still; the least
            /// of them has just the bottom mantissa bit set.
            pub const MIN_POSITIVE: Self = Self::from_parts(false, 1, 0);

            /// Not a Number (NaN).
            ///
            /// The canonical quiet NaN: sign zero, exponent all
            /// ones, and only the top mantissa bit set. Every
            /// operation on an invalid input (`0/0`, `∞−∞`,
            /// `0×∞`, `∞/∞`) returns this value.
            ///
            /// # Note
            ///
            /// Do not use this constant to determine whether
            /// a number is NaN. Use [`is_nan`][Self::is_nan]
            /// instead.
            pub const NAN: Self = Self::from_parts(false, Self::EXP_LIMIT, Self::QUIET_BIT);

            /// Infinity (∞).
            ///
            /// # Note
            ///
            /// Do not use this constant to determine whether
            /// a number is infinity. Use
            /// [`is_infinite`][Self::is_infinite] instead.
            pub const INFINITY: Self = Self::inf(false);

            /// Negative infinity (−∞).
            ///
            /// # Note
            ///
            /// Do not use this constant to determine whether
            /// a number is infinity. Use
            /// [`is_infinite`][Self::is_infinite] instead.
            pub const NEG_INFINITY: Self = Self::inf(true);
        }
    };
}
pub(crate) use impl_bin_consts;

macro_rules! impl_bin_to_from_repr {
    ($name:ident, $bits:ty $(,)?) => {
        // To/from repr.
        impl $name {
            /// Creates a number from its raw bits.
            ///
            /// Every bit pattern decodes to some value, so this
            /// conversion cannot fail.
            pub const fn from_bits(bits: $bits) -> Self {
                Self(bits)
            }

            /// Raw transmutation to the number's bit
            /// representation.
            ///
            /// This is the exact inverse of
            /// [`from_bits`][Self::from_bits].
            pub const fn to_bits(self) -> $bits {
                self.0
            }

            /// Creates a number from a little-endian byte array.
            pub const fn from_le_bytes(bytes: [u8; Self::BYTES]) -> Self {
                Self(<$bits>::from_le_bytes(bytes))
            }

            /// Creates a number from a big-endian byte array.
            pub const fn from_be_bytes(bytes: [u8; Self::BYTES]) -> Self {
                Self(<$bits>::from_be_bytes(bytes))
            }

            /// Creates a number from a native-endian byte array.
            pub const fn from_ne_bytes(bytes: [u8; Self::BYTES]) -> Self {
                Self(<$bits>::from_ne_bytes(bytes))
            }

            /// Converts the number to a little-endian byte
            /// array.
            pub const fn to_le_bytes(self) -> [u8; Self::BYTES] {
                self.0.to_le_bytes()
            }

            /// Converts the number to a big-endian byte array.
            pub const fn to_be_bytes(self) -> [u8; Self::BYTES] {
                self.0.to_be_bytes()
            }

            /// Converts the number to a native-endian byte
            /// array.
            pub const fn to_ne_bytes(self) -> [u8; Self::BYTES] {
                self.0.to_ne_bytes()
            }

            /// Parses a number from its raw bit pattern written
            /// in hexadecimal, e.g. `3F800000`.
            ///
            /// The pattern must fit the storage width.
            pub fn parse_bits(s: &str) -> Result<Self, ParseError> {
                if s.is_empty() {
                    return Err(ParseError::empty());
                }
                match <$bits>::from_str_radix(s, 16) {
                    Ok(bits) => Ok(Self::from_bits(bits)),
                    Err(_) => Err(ParseError::invalid(
                        "expected a bare hexadecimal bit pattern",
                    )),
                }
            }
        }
    };
}
pub(crate) use impl_bin_to_from_repr;

macro_rules! impl_bin_arith {
    ($name:ident, $bits:ty $(,)?) => {
        // Arithmetic operations.
        impl $name {
            /// Places a computed result into the output width,
            /// saturating on overflow and denormalizing on
            /// underflow.
            ///
            /// `sig` still carries the implicit bit; `exp` is
            /// the candidate biased exponent and may lie outside
            /// the representable range.
            const fn from_sig_exp(sign: bool, exp: i32, sig: u64, rounding: RoundingMode) -> Self {
                if exp >= Self::EXP_LIMIT as i32 {
                    // Overflow. The modes that move away from
                    // `sign` saturate to infinity, the rest to
                    // the largest finite magnitude.
                    return match rounding {
                        RoundingMode::ToNearestEven => Self::inf(sign),
                        RoundingMode::ToZero => Self::max_finite(sign),
                        RoundingMode::ToPositiveInf => {
                            if sign {
                                Self::max_finite(sign)
                            } else {
                                Self::inf(sign)
                            }
                        }
                        RoundingMode::ToNegativeInf => {
                            if sign {
                                Self::inf(sign)
                            } else {
                                Self::max_finite(sign)
                            }
                        }
                    };
                }
                if exp <= 0 {
                    // Underflow: denormalize into exponent code
                    // zero, rounding off the shifted-out bits.
                    let shift = 1 - exp; // >= 1
                    let (mut sig, round_bit, sticky_bit) = if shift >= u64::BITS as i32 {
                        (0, false, sig != 0)
                    } else {
                        let round_bit = sig & (1 << (shift - 1)) != 0;
                        let sticky_bit = sig & ((1 << (shift - 1)) - 1) != 0;
                        (sig >> shift, round_bit, sticky_bit)
                    };
                    sig = super::round::round(sig, rounding, round_bit, sticky_bit, sign);
                    // A carry out of the subnormal range lands
                    // exactly on the smallest normal value.
                    if sig >> Self::MBITS != 0 {
                        return Self::from_parts(sign, 1, 0);
                    }
                    return Self::from_parts(sign, 0, sig as $bits);
                }
                Self::from_parts(sign, exp as u32, (sig as $bits) & Self::MANTISSA_MASK)
            }

            /// Returns `self + rhs`, rounded per `rounding`.
            ///
            /// Infinities of opposite sign produce the canonical
            /// NaN; a NaN operand propagates with its quiet bit
            /// forced set. Every other input is computed exactly
            /// and rounded once.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn add(self, rhs: Self, rounding: RoundingMode) -> Self {
                if self.is_nan() {
                    return self.quiet();
                }
                if rhs.is_nan() {
                    return rhs.quiet();
                }
                // Neither is NaN.

                if self.is_infinite() && rhs.is_infinite() {
                    return if self.signbit() != rhs.signbit() {
                        // ∞ − ∞ has no useful answer.
                        Self::NAN
                    } else {
                        self
                    };
                }
                if self.is_infinite() {
                    return self;
                }
                if rhs.is_infinite() {
                    return rhs;
                }
                // Both are finite.

                // Order the operands by magnitude so the
                // magnitude-domain subtraction below cannot go
                // negative.
                let (a, b) = if self.mag_lt(rhs) {
                    (rhs, self)
                } else {
                    (self, rhs)
                };
                // |a| >= |b|, so only `b` needs a zero check.
                if b.is_zero() {
                    if matches!(rounding, RoundingMode::ToNegativeInf)
                        && a.is_zero()
                        && a.signbit() != b.signbit()
                    {
                        return Self::zero(true);
                    }
                    if a.is_zero() && a.signbit() && !b.signbit() {
                        return b;
                    }
                    return a;
                }

                let sign = a.signbit();
                let (ae, am) = a.normalized();
                let (be, bm) = b.normalized();
                let am = am | (1 << Self::MBITS);
                let bm = bm | (1 << Self::MBITS);

                if ae - be > Self::MBITS as i32 + 2 {
                    // `b` cannot touch any retained bit of `a`;
                    // it matters only through the round and
                    // sticky bits.
                    let mut exp = ae;
                    let mut sig = am;
                    if a.signbit() == b.signbit() {
                        // The discarded tail is `b` itself:
                        // entirely below the round bit, but not
                        // zero.
                        sig = super::round::round(sig, rounding, false, true, sign);
                    } else {
                        // Subtracting a tiny `b` borrows one
                        // unit from the last retained place and
                        // leaves a discarded tail reading as all
                        // ones.
                        sig -= 1;
                        if sig >> Self::MBITS == 0 {
                            sig = (sig << 1) | 1;
                            exp -= 1;
                        }
                        sig = super::round::round(sig, rounding, true, true, sign);
                    }
                    if sig >> (Self::MBITS + 1) != 0 {
                        sig >>= 1;
                        exp += 1;
                    }
                    return Self::from_sig_exp(sign, exp, sig, rounding);
                }

                // Align the significands on the smaller
                // exponent, shifting the larger one left rather
                // than losing bits off the smaller. The gap is
                // at most MBITS + 2, so the shift cannot
                // overflow the working width.
                let am = if ae > be { am << (ae - be) as u32 } else { am };

                let mut sig = if a.signbit() == b.signbit() {
                    am + bm
                } else {
                    // |a| >= |b| guarantees a non-negative
                    // difference.
                    am - bm
                };
                if sig == 0 {
                    // Exact cancellation: negative only under
                    // ToNegativeInf.
                    return Self::zero(matches!(rounding, RoundingMode::ToNegativeInf));
                }

                let mut exp = be;
                let mut round_bit = false;
                let mut sticky_bit = false;
                // Renormalize, preserving the rounding
                // information shifted out on the way down.
                while sig >> (Self::MBITS + 1) != 0 {
                    sticky_bit = sticky_bit || round_bit;
                    round_bit = sig & 1 != 0;
                    sig >>= 1;
                    exp += 1;
                }
                while sig >> Self::MBITS == 0 {
                    sig <<= 1;
                    exp -= 1;
                }

                sig = super::round::round(sig, rounding, round_bit, sticky_bit, sign);
                if sig >> (Self::MBITS + 1) != 0 {
                    sig >>= 1;
                    exp += 1;
                }
                Self::from_sig_exp(sign, exp, sig, rounding)
            }

            /// Returns `self - rhs`, rounded per `rounding`.
            ///
            /// Subtraction is addition with the sign of `rhs`
            /// negated.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn sub(self, rhs: Self, rounding: RoundingMode) -> Self {
                self.add(rhs.copy_neg(), rounding)
            }

            /// Returns `self * rhs`, rounded per `rounding`.
            ///
            /// Zero times infinity produces the canonical NaN;
            /// a NaN operand propagates with its quiet bit
            /// forced set.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn mul(self, rhs: Self, rounding: RoundingMode) -> Self {
                if self.is_nan() {
                    return self.quiet();
                }
                if rhs.is_nan() {
                    return rhs.quiet();
                }
                // Neither is NaN.

                let sign = self.signbit() != rhs.signbit();

                if self.is_zero() || rhs.is_zero() {
                    return if self.is_infinite() || rhs.is_infinite() {
                        // 0 × ∞ has no useful answer.
                        Self::NAN
                    } else {
                        Self::zero(sign)
                    };
                }
                if self.is_infinite() || rhs.is_infinite() {
                    return Self::inf(sign);
                }
                // Both are finite and non-zero.

                let (ae, am) = self.normalized();
                let (be, bm) = rhs.normalized();
                let mut exp = ae + be - Self::BIAS;

                // The exact double-width product of the two
                // implicit-bit significands.
                let mut sig = (am | (1 << Self::MBITS)) * (bm | (1 << Self::MBITS));
                let mut round_bit = (sig >> (Self::MBITS - 1)) & 1 != 0;
                let mut sticky_bit = sig & ((1 << (Self::MBITS - 1)) - 1) != 0;
                sig >>= Self::MBITS;

                // 1.x · 1.y lies in [1, 4): fold a top overflow
                // bit down into the rounding tail.
                if sig >> (Self::MBITS + 1) != 0 {
                    sticky_bit = sticky_bit || round_bit;
                    round_bit = sig & 1 != 0;
                    sig >>= 1;
                    exp += 1;
                }

                if exp > 0 {
                    sig = super::round::round(sig, rounding, round_bit, sticky_bit, sign);
                    if sig >> (Self::MBITS + 1) != 0 {
                        sig >>= 1;
                        exp += 1;
                    }
                } else {
                    // Keep the round bit inside the working
                    // value; the underflow shift takes it back
                    // out.
                    sig <<= 1;
                    exp -= 1;
                    sticky_bit = sticky_bit || round_bit;
                    sig |= sticky_bit as u64;
                }
                Self::from_sig_exp(sign, exp, sig, rounding)
            }

            /// Returns `self / rhs`, rounded per `rounding`.
            ///
            /// `0/0` and `∞/∞` produce the canonical NaN;
            /// a nonzero dividend over zero produces a signed
            /// infinity. The quotient is computed by widened
            /// integer division, leaving one extra quotient bit
            /// as the round bit and the remainder as the sticky
            /// bit.
            #[must_use = "this returns the result of the operation \
                              without modifying the original"]
            pub const fn div(self, rhs: Self, rounding: RoundingMode) -> Self {
                if self.is_nan() {
                    return self.quiet();
                }
                if rhs.is_nan() {
                    return rhs.quiet();
                }
                // Neither is NaN.

                if (self.is_zero() && rhs.is_zero()) || (self.is_infinite() && rhs.is_infinite()) {
                    // 0/0 and ∞/∞ have no useful answer.
                    return Self::NAN;
                }

                let sign = self.signbit() != rhs.signbit();

                if rhs.is_zero() || self.is_infinite() {
                    return Self::inf(sign);
                }
                if self.is_zero() || rhs.is_infinite() {
                    return Self::zero(sign);
                }
                // Both are finite and non-zero.

                let (ae, am) = self.normalized();
                let (be, bm) = rhs.normalized();
                let mut exp = ae - be + Self::BIAS;

                let mut am = am | (1 << Self::MBITS);
                let bm = bm | (1 << Self::MBITS);

                // Pre-shift so the quotient lands in [1, 2).
                if am < bm {
                    am <<= 1;
                    exp -= 1;
                }

                let dividend = am << (Self::MBITS + 1);
                let mut sig = dividend / bm;
                let rem = dividend % bm;

                let round_bit = sig & 1 != 0;
                let mut sticky_bit = rem != 0;
                sig >>= 1;

                if exp > 0 {
                    sig = super::round::round(sig, rounding, round_bit, sticky_bit, sign);
                    if sig >> (Self::MBITS + 1) != 0 {
                        sig >>= 1;
                        exp += 1;
                    }
                } else {
                    // Same trick as multiplication: defer the
                    // round bit to the underflow shift.
                    sig <<= 1;
                    exp -= 1;
                    sticky_bit = sticky_bit || round_bit;
                    sig |= sticky_bit as u64;
                }
                Self::from_sig_exp(sign, exp, sig, rounding)
            }
        }
    };
}
pub(crate) use impl_bin_arith;

macro_rules! impl_bin_impls {
    ($name:ident) => {
        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_nan() {
                    return f.write_str("nan");
                }
                if self.signbit() {
                    f.write_str("-")?;
                }
                if self.is_infinite() {
                    f.write_str("inf")
                } else if self.is_zero() {
                    write!(f, "0x0.{:0width$x}p+0", 0, width = Self::NIBBLES)
                } else {
                    // Subnormals render in normalized form.
                    let (exp, sig) = self.normalized();
                    let m = (sig & Self::MANTISSA_MASK as u64) << Self::NIBBLE_SHIFT;
                    write!(
                        f,
                        "0x1.{m:0width$x}p{e:+}",
                        width = Self::NIBBLES,
                        e = exp - Self::BIAS,
                    )
                }
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(self, f)
            }
        }

        $crate::macros::add_impl! { $name }
        $crate::macros::sub_impl! { $name }
        $crate::macros::mul_impl! { $name }
        $crate::macros::div_impl! { $name }
        $crate::macros::neg_impl! { $name }
        $crate::macros::add_assign_impl! { $name }
        $crate::macros::sub_assign_impl! { $name }
        $crate::macros::mul_assign_impl! { $name }
        $crate::macros::div_assign_impl! { $name }
    };
}
pub(crate) use impl_bin_impls;
