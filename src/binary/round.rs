use crate::ctx::RoundingMode;

/// Conditionally adds one unit in the last retained place to
/// `sig`.
///
/// `round_bit` is the most significant discarded bit and
/// `sticky_bit` is the OR of every discarded bit below it. The
/// exponent is never touched here: a carry out of the
/// significand is the caller's problem.
pub(super) const fn round(
    sig: u64,
    rounding: RoundingMode,
    round_bit: bool,
    sticky_bit: bool,
    sign: bool,
) -> u64 {
    match rounding {
        RoundingMode::ToZero => sig,
        RoundingMode::ToNearestEven => {
            if round_bit && sticky_bit {
                // Over the halfway point.
                sig + 1
            } else if round_bit && sig & 1 != 0 {
                // Exactly halfway; round to even.
                sig + 1
            } else {
                sig
            }
        }
        RoundingMode::ToPositiveInf => {
            if !sign && (round_bit || sticky_bit) {
                sig + 1
            } else {
                sig
            }
        }
        RoundingMode::ToNegativeInf => {
            if sign && (round_bit || sticky_bit) {
                sig + 1
            } else {
                sig
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round() {
        use RoundingMode::{ToNearestEven, ToNegativeInf, ToPositiveInf, ToZero};

        // (sig, mode, round, sticky, sign) -> sig'
        let tests = [
            // Truncation never increments.
            (10, ToZero, true, true, false, 10),
            (10, ToZero, true, true, true, 10),
            // Nearest: below, above, and exactly at the halfway
            // point.
            (10, ToNearestEven, false, true, false, 10),
            (10, ToNearestEven, true, true, false, 11),
            (10, ToNearestEven, true, false, false, 10),
            (11, ToNearestEven, true, false, false, 12),
            (11, ToNearestEven, true, true, true, 12),
            // Directed modes only move in their own direction.
            (10, ToPositiveInf, false, true, false, 11),
            (10, ToPositiveInf, true, false, false, 11),
            (10, ToPositiveInf, false, true, true, 10),
            (10, ToNegativeInf, false, true, true, 11),
            (10, ToNegativeInf, true, false, true, 11),
            (10, ToNegativeInf, false, true, false, 10),
            // Exact values never move.
            (10, ToNearestEven, false, false, false, 10),
            (10, ToPositiveInf, false, false, false, 10),
            (10, ToNegativeInf, false, false, true, 10),
        ];
        for (i, (sig, mode, rb, sb, sign, want)) in tests.into_iter().enumerate() {
            let got = round(sig, mode, rb, sb, sign);
            assert_eq!(got, want, "#{i}");
        }
    }
}
