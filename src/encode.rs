// ============================================================================
// Decimal-Fraction Encoder
// Scales base-10 digit sequences into binary fraction bits
// ============================================================================

use crate::width::FixedInt;

/// Compute 10^n
pub(crate) const fn pow10(n: u32) -> u64 {
    let mut result: u64 = 1;
    let mut i = 0;
    while i < n {
        result *= 10;
        i += 1;
    }
    result
}

/// floor(log10(x)) for x > 0
pub(crate) const fn floor_log10(x: u64) -> u32 {
    let mut n = 0;
    let mut x = x / 10;
    while x > 0 {
        n += 1;
        x /= 10;
    }
    n
}

/// Base-10 digits the fractional field can resolve, holding one digit back
/// as margin against rounding at the boundary. Requires `precision >= 1`.
pub(crate) const fn headroom_digits(precision: u32) -> u32 {
    let max_frac = (1u64 << precision) - 1;
    let digits = floor_log10(max_frac);
    if digits <= 1 {
        1
    } else {
        digits - 1
    }
}

/// `(digits << precision) / 10^den_pow`, computed in the widened accumulator
/// and truncated back to the storage width.
///
/// The extra width preserves the conversion ratio's full resolution through
/// the division. With 64-bit storage there is no wider accumulator, so large
/// precisions can overflow here just as they can in multiplication.
pub(crate) fn scale_decimal_digits<T: FixedInt>(digits: u64, den_pow: u32, precision: u32) -> T {
    let scaled = T::Wider::from_i64(digits as i64)
        .shl(precision)
        .wrapping_div(T::Wider::from_i64(pow10(den_pow) as i64));
    T::truncate(scaled)
}

/// Converts a base-10 fractional digit sequence into the binary fraction
/// occupying `precision` bits of the storage type.
///
/// The sequence is digit-count-invariant: `5`, `50`, and `500` all denote
/// `.5`. Digits beyond the base-10 headroom of the fractional field are
/// dropped, least significant first, without error.
pub(crate) fn encode_fraction<T: FixedInt>(d: u64, precision: u32) -> T {
    if d == 0 || precision == 0 {
        return T::ZERO;
    }

    let headroom = headroom_digits(precision);
    let digits = floor_log10(d) + 1;

    // Normalize to exactly `headroom` significant digits, so the sequence
    // denotes d / 10^headroom no matter how many digits it was written with.
    let d = if digits > headroom {
        tracing::trace!(
            dropped = digits - headroom,
            "fraction digits beyond precision headroom truncated"
        );
        d / pow10(digits - headroom)
    } else {
        d * pow10(headroom - digits)
    };

    scale_decimal_digits::<T>(d, headroom, precision)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pow10() {
        assert_eq!(pow10(0), 1);
        assert_eq!(pow10(1), 10);
        assert_eq!(pow10(9), 1_000_000_000);
        assert_eq!(pow10(19), 10_000_000_000_000_000_000);
    }

    #[test]
    fn test_floor_log10() {
        assert_eq!(floor_log10(1), 0);
        assert_eq!(floor_log10(9), 0);
        assert_eq!(floor_log10(10), 1);
        assert_eq!(floor_log10(32767), 4);
        assert_eq!(floor_log10(u64::MAX), 19);
    }

    #[test]
    fn test_headroom_digits() {
        // 2^15 - 1 = 32767: five digits, minus one margin digit, minus one
        assert_eq!(headroom_digits(15), 3);
        assert_eq!(headroom_digits(31), 8);
        // tiny precisions clamp to a single digit
        assert_eq!(headroom_digits(1), 1);
        assert_eq!(headroom_digits(4), 1);
        assert_eq!(headroom_digits(7), 1);
    }

    #[test]
    fn test_digit_count_invariance() {
        // .5 written with one, two, three, or four digits
        let half: i32 = encode_fraction(5, 15);
        assert_eq!(half, 1 << 14);
        assert_eq!(encode_fraction::<i32>(50, 15), half);
        assert_eq!(encode_fraction::<i32>(500, 15), half);
        assert_eq!(encode_fraction::<i32>(5000, 15), half);
    }

    #[test]
    fn test_positional_values() {
        // .25 and .75 at precision 15
        assert_eq!(encode_fraction::<i32>(25, 15), 1 << 13);
        assert_eq!(encode_fraction::<i32>(75, 15), 3 << 13);
        // .1 truncates: floor(0.1 * 2^15) = 3276
        assert_eq!(encode_fraction::<i32>(1, 15), 3276);
        assert_eq!(encode_fraction::<i32>(10, 15), 3276);
    }

    #[test]
    fn test_excess_digits_truncate_silently() {
        // headroom at precision 15 is three digits; the rest are dropped
        assert_eq!(
            encode_fraction::<i32>(500_123, 15),
            encode_fraction::<i32>(500, 15)
        );
        assert_eq!(
            encode_fraction::<i32>(123_456_789_123_456_789, 15),
            encode_fraction::<i32>(123, 15)
        );
    }

    #[test]
    fn test_zero_contributes_nothing() {
        assert_eq!(encode_fraction::<i32>(0, 15), 0);
        assert_eq!(encode_fraction::<i64>(0, 40), 0);
    }

    #[test]
    fn test_zero_precision_contributes_nothing() {
        assert_eq!(encode_fraction::<i32>(5, 0), 0);
    }

    #[test]
    fn test_narrow_widths() {
        // i8 with four fractional bits: .5 is 8/16
        assert_eq!(encode_fraction::<i8>(5, 4), 8);
        // single-digit headroom drops the second digit of .25
        assert_eq!(encode_fraction::<i8>(25, 4), 3); // floor(0.2 * 16)
        // i16 with eight fractional bits: .5 is 128/256
        assert_eq!(encode_fraction::<i16>(5, 8), 128);
    }
}
