/// The direction in which an inexact result moves to reach
/// a representable value.
///
/// Every arithmetic operation takes its rounding mode as an
/// explicit argument; the mode is never stored alongside
/// a value.
#[derive(Copy, Clone, Default, Debug, Eq, PartialEq)]
pub enum RoundingMode {
    /// IEEE 754-2008 roundTiesToEven.
    ///
    /// - Under 0.5 rounds down.
    /// - Over 0.5 rounds up.
    /// - Exactly 0.5 rounds to the nearest even.
    #[default]
    ToNearestEven,
    /// IEEE 754-2008 roundTowardZero.
    ///
    /// AKA truncation.
    ToZero,
    /// IEEE 754-2008 roundTowardPositive.
    ///
    /// AKA ceiling.
    ToPositiveInf,
    /// IEEE 754-2008 roundTowardNegative.
    ///
    /// AKA floor.
    ToNegativeInf,
}

impl RoundingMode {
    /// Parses a mode from its name or from the numeric code used
    /// by batch test streams.
    pub fn try_from_str(s: &str) -> Option<Self> {
        match s {
            "0" | "toward_zero" => Some(Self::ToZero),
            "1" | "nearest_even" => Some(Self::ToNearestEven),
            "2" | "toward_positive" => Some(Self::ToPositiveInf),
            "3" | "toward_negative" => Some(Self::ToNegativeInf),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_from_str() {
        let tests = [
            ("0", Some(RoundingMode::ToZero)),
            ("1", Some(RoundingMode::ToNearestEven)),
            ("2", Some(RoundingMode::ToPositiveInf)),
            ("3", Some(RoundingMode::ToNegativeInf)),
            ("toward_zero", Some(RoundingMode::ToZero)),
            ("nearest_even", Some(RoundingMode::ToNearestEven)),
            ("toward_positive", Some(RoundingMode::ToPositiveInf)),
            ("toward_negative", Some(RoundingMode::ToNegativeInf)),
            ("4", None),
            ("", None),
            ("nearest", None),
        ];
        for (i, (input, want)) in tests.into_iter().enumerate() {
            let got = RoundingMode::try_from_str(input);
            assert_eq!(got, want, "#{i}: `{input}`");
        }
    }

    #[test]
    fn test_default() {
        assert_eq!(RoundingMode::default(), RoundingMode::ToNearestEven);
    }
}
