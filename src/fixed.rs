// ============================================================================
// Fixed-Point Value
// Binary fixed-point arithmetic with compile-time width and precision
// ============================================================================

use crate::encode;
use crate::errors::{FixedError, FixedResult};
use crate::width::FixedInt;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Binary fixed-point number with compile-time width and precision.
///
/// Stores one signed integer of the selected width; the denoted real number
/// is that bit pattern, read as two's complement, divided by `2^P`. The low
/// `P` bits hold the fraction, the remaining bits the integer part.
///
/// # Type Parameters
/// - `T`: Storage width, one of `i8`, `i16`, `i32`, `i64`.
/// - `P`: Fractional bits, `0 <= P < T::BITS`. Checked at compile time.
///
/// # Overflow
/// Arithmetic wraps at the storage width, like the plain integer types with
/// wrapping operations; nothing is checked or saturated. Multiplication and
/// division run through the next wider width internally, so only the final
/// result can wrap. `i64` storage has no wider accumulator and can overflow
/// mid-computation; prefer `i32` storage unless the full 64 bits are needed.
///
/// # Example
/// ```
/// use fixbits::Fixed32;
///
/// let price = Fixed32::<15>::from_parts(15, 5); // 15.5
/// let half = Fixed32::<15>::from_integer(1) / Fixed32::<15>::from_integer(2);
/// assert_eq!(price, Fixed32::<15>::from_integer(15) + half);
/// ```
#[derive(Clone, Copy)]
#[repr(transparent)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Fixed<T: FixedInt, const P: u32>(T);

// ============================================================================
// Construction and Conversion
// ============================================================================

impl<T: FixedInt, const P: u32> Fixed<T, P> {
    // Referenced from every construction entry point so that an invalid
    // precision fails compilation before a value can exist.
    const PRECISION_OK: () = assert!(P < T::BITS, "precision must be less than the storage width");

    /// Zero bit pattern.
    pub const ZERO: Self = {
        let _ = Self::PRECISION_OK;
        Self(T::ZERO)
    };

    /// Most negative representable value.
    pub const MIN: Self = {
        let _ = Self::PRECISION_OK;
        Self(T::MIN)
    };

    /// Most positive representable value.
    pub const MAX: Self = {
        let _ = Self::PRECISION_OK;
        Self(T::MAX)
    };

    /// Create from a raw bit pattern that is already scaled by `2^P`.
    #[inline]
    pub const fn from_raw(bits: T) -> Self {
        let _ = Self::PRECISION_OK;
        Self(bits)
    }

    /// Get the raw bit pattern.
    #[inline]
    pub const fn raw_value(self) -> T {
        self.0
    }

    /// Convert an integer into a fixed-point number by upscaling it `P`
    /// bits. Values outside the `T::BITS - P` bit range wrap.
    #[inline]
    pub fn from_integer(n: T) -> Self {
        let _ = Self::PRECISION_OK;
        Self(n.shl(P))
    }

    /// Build a value from an integer part and base-10 fraction digits.
    ///
    /// The digit sequence is scaled by count, not position: `5`, `50`, and
    /// `500` all denote `.5`, so `from_parts(15, 5) == from_parts(15, 50)`.
    /// Digits beyond the precision's base-10 headroom are silently dropped.
    ///
    /// The fraction is always an added magnitude; it does not inherit the
    /// sign of the integer part. `from_parts(-1, 5)` is -1 + 0.5 = -0.5,
    /// not -1.5. Represent negative values through the integer part alone.
    #[inline]
    pub fn from_parts(int_part: T, frac_digits: T::Unsigned) -> Self {
        let _ = Self::PRECISION_OK;
        let frac = encode::encode_fraction::<T>(frac_digits.into(), P);
        Self(int_part.shl(P).wrapping_add(frac))
    }

    /// Downscale to an integer with an arithmetic shift. Negative values
    /// truncate toward negative infinity, not toward zero.
    #[inline]
    pub fn to_integer(self) -> T {
        self.0.shr(P)
    }
}

impl<T: FixedInt, const P: u32> From<T> for Fixed<T, P> {
    /// Upscaling conversion, equivalent to [`Fixed::from_integer`].
    #[inline]
    fn from(n: T) -> Self {
        Self::from_integer(n)
    }
}

impl<T: FixedInt, const P: u32> Default for Fixed<T, P> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

// ============================================================================
// Arithmetic: fixed (+ - * /) fixed
// ============================================================================

impl<T: FixedInt, const P: u32> AddAssign for Fixed<T, P> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        self.0 = self.0.wrapping_add(rhs.0);
    }
}

impl<T: FixedInt, const P: u32> SubAssign for Fixed<T, P> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        self.0 = self.0.wrapping_sub(rhs.0);
    }
}

impl<T: FixedInt, const P: u32> MulAssign for Fixed<T, P> {
    /// Widens both operands one step, multiplies, then shifts the product
    /// right by `P` and truncates back. The widening absorbs the product's
    /// extra `P` bits of scale; with `i64` storage there is no wider step
    /// and the product itself can wrap.
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        let wide = self.0.widen().wrapping_mul(rhs.0.widen());
        self.0 = T::truncate(wide.shr(P));
    }
}

impl<T: FixedInt, const P: u32> DivAssign for Fixed<T, P> {
    /// Widens the dividend one step and pre-shifts it left by `P` so the
    /// quotient keeps its fractional resolution, then divides and truncates
    /// back. A zero divisor panics exactly like integer division.
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        let wide = self.0.widen().shl(P).wrapping_div(rhs.0.widen());
        self.0 = T::truncate(wide);
    }
}

impl<T: FixedInt, const P: u32> Add for Fixed<T, P> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl<T: FixedInt, const P: u32> Sub for Fixed<T, P> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: Self) -> Self {
        self -= rhs;
        self
    }
}

impl<T: FixedInt, const P: u32> Mul for Fixed<T, P> {
    type Output = Self;

    #[inline]
    fn mul(mut self, rhs: Self) -> Self {
        self *= rhs;
        self
    }
}

impl<T: FixedInt, const P: u32> Div for Fixed<T, P> {
    type Output = Self;

    #[inline]
    fn div(mut self, rhs: Self) -> Self {
        self /= rhs;
        self
    }
}

impl<T: FixedInt, const P: u32> Neg for Fixed<T, P> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self(self.0.wrapping_neg())
    }
}

// ============================================================================
// Arithmetic: fixed (+ - * /) integer
// ============================================================================

impl<T: FixedInt, const P: u32> AddAssign<T> for Fixed<T, P> {
    /// Adds `rhs` as an already-scaled bit pattern, without upscaling it.
    /// This is the raw fast path: callers adding a whole number must shift
    /// it themselves or go through [`Fixed::from_integer`] first.
    #[inline]
    fn add_assign(&mut self, rhs: T) {
        self.0 = self.0.wrapping_add(rhs);
    }
}

impl<T: FixedInt, const P: u32> SubAssign<T> for Fixed<T, P> {
    /// Subtracts `rhs` as an already-scaled bit pattern; see
    /// [`AddAssign<T>`](#impl-AddAssign<T>-for-Fixed<T,+P>).
    #[inline]
    fn sub_assign(&mut self, rhs: T) {
        self.0 = self.0.wrapping_sub(rhs);
    }
}

impl<T: FixedInt, const P: u32> MulAssign<T> for Fixed<T, P> {
    /// Multiplies the bit pattern by a dimensionless integer factor. No
    /// shift is involved; scaling by an integer keeps fractional alignment.
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        self.0 = self.0.wrapping_mul(rhs);
    }
}

impl<T: FixedInt, const P: u32> DivAssign<T> for Fixed<T, P> {
    /// Divides the bit pattern by a dimensionless integer factor. A zero
    /// divisor panics exactly like integer division.
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        self.0 = self.0.wrapping_div(rhs);
    }
}

impl<T: FixedInt, const P: u32> Add<T> for Fixed<T, P> {
    type Output = Self;

    #[inline]
    fn add(mut self, rhs: T) -> Self {
        self += rhs;
        self
    }
}

impl<T: FixedInt, const P: u32> Sub<T> for Fixed<T, P> {
    type Output = Self;

    #[inline]
    fn sub(mut self, rhs: T) -> Self {
        self -= rhs;
        self
    }
}

impl<T: FixedInt, const P: u32> Mul<T> for Fixed<T, P> {
    type Output = Self;

    #[inline]
    fn mul(mut self, rhs: T) -> Self {
        self *= rhs;
        self
    }
}

impl<T: FixedInt, const P: u32> Div<T> for Fixed<T, P> {
    type Output = Self;

    #[inline]
    fn div(mut self, rhs: T) -> Self {
        self /= rhs;
        self
    }
}

// ============================================================================
// Arithmetic and comparison: integer (+ - * / == <) fixed
// ============================================================================

// These cannot be written generically over the storage type (the integer
// would be an uncovered impl parameter), so a macro instantiates them per
// width. Addition and multiplication commute onto the fixed operand's fast
// path; subtraction and division are order-sensitive and promote the
// integer to a properly scaled value first.
macro_rules! impl_int_operand {
    ($($int:ty),*) => {$(
        impl<const P: u32> Add<Fixed<$int, P>> for $int {
            type Output = Fixed<$int, P>;

            #[inline]
            fn add(self, mut rhs: Fixed<$int, P>) -> Fixed<$int, P> {
                rhs += self;
                rhs
            }
        }

        impl<const P: u32> Mul<Fixed<$int, P>> for $int {
            type Output = Fixed<$int, P>;

            #[inline]
            fn mul(self, mut rhs: Fixed<$int, P>) -> Fixed<$int, P> {
                rhs *= self;
                rhs
            }
        }

        impl<const P: u32> Sub<Fixed<$int, P>> for $int {
            type Output = Fixed<$int, P>;

            #[inline]
            fn sub(self, rhs: Fixed<$int, P>) -> Fixed<$int, P> {
                Fixed::<$int, P>::from_integer(self) - rhs
            }
        }

        impl<const P: u32> Div<Fixed<$int, P>> for $int {
            type Output = Fixed<$int, P>;

            #[inline]
            fn div(self, rhs: Fixed<$int, P>) -> Fixed<$int, P> {
                Fixed::<$int, P>::from_integer(self) / rhs
            }
        }

        impl<const P: u32> PartialEq<Fixed<$int, P>> for $int {
            #[inline]
            fn eq(&self, other: &Fixed<$int, P>) -> bool {
                self.widen().shl(P) == other.raw_value().widen()
            }
        }

        impl<const P: u32> PartialOrd<Fixed<$int, P>> for $int {
            #[inline]
            fn partial_cmp(&self, other: &Fixed<$int, P>) -> Option<Ordering> {
                self.widen().shl(P).partial_cmp(&other.raw_value().widen())
            }
        }
    )*};
}

impl_int_operand!(i8, i16, i32, i64);

// ============================================================================
// Comparison
// ============================================================================

impl<T: FixedInt, const P: u32> PartialEq for Fixed<T, P> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T: FixedInt, const P: u32> Eq for Fixed<T, P> {}

impl<T: FixedInt, const P: u32> PartialOrd for Fixed<T, P> {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.0.cmp(&other.0))
    }
}

impl<T: FixedInt, const P: u32> Ord for Fixed<T, P> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl<T: FixedInt, const P: u32> Hash for Fixed<T, P> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

// The integer operand is compared through the wider width with the shift
// applied there, so magnitudes stay correct near the sign boundary where the
// upscaled integer would not fit the storage width.
impl<T: FixedInt, const P: u32> PartialEq<T> for Fixed<T, P> {
    #[inline]
    fn eq(&self, other: &T) -> bool {
        self.0.widen() == other.widen().shl(P)
    }
}

impl<T: FixedInt, const P: u32> PartialOrd<T> for Fixed<T, P> {
    #[inline]
    fn partial_cmp(&self, other: &T) -> Option<Ordering> {
        self.0.widen().partial_cmp(&other.widen().shl(P))
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl<T: FixedInt, const P: u32> fmt::Debug for Fixed<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fixed<{},{}>({}, raw={})", T::BITS, P, self, self.0.to_i64())
    }
}

impl<T: FixedInt, const P: u32> fmt::Display for Fixed<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_decimal())
    }
}

// ============================================================================
// Conversion from rust_decimal (for API boundaries)
// ============================================================================

impl<T: FixedInt, const P: u32> Fixed<T, P> {
    /// Convert from `rust_decimal::Decimal`, truncating toward zero at the
    /// binary precision.
    ///
    /// This is intended for API boundaries only (parsing user input).
    ///
    /// # Errors
    /// `Overflow` if the scaled value does not fit the storage width.
    pub fn from_decimal(value: rust_decimal::Decimal) -> FixedResult<Self> {
        use rust_decimal::prelude::ToPrimitive;

        let _ = Self::PRECISION_OK;
        let scale = rust_decimal::Decimal::from(1u64 << P);
        let scaled = value.checked_mul(scale).ok_or(FixedError::Overflow)?;
        let raw = scaled.trunc().to_i64().ok_or(FixedError::Overflow)?;

        if T::from_i64(raw).to_i64() != raw {
            return Err(FixedError::Overflow);
        }

        Ok(Self(T::from_i64(raw)))
    }

    /// Convert to `rust_decimal::Decimal`.
    ///
    /// This is intended for display and debugging; `Decimal` keeps 28
    /// significant digits, which covers every value up to 64-bit storage
    /// with moderate precision but rounds the last digits of extreme ones.
    pub fn to_decimal(self) -> rust_decimal::Decimal {
        rust_decimal::Decimal::from(self.0.to_i64()) / rust_decimal::Decimal::from(1u64 << P)
    }
}

// ============================================================================
// String Parsing
// ============================================================================

impl<T: FixedInt, const P: u32> std::str::FromStr for Fixed<T, P> {
    type Err = FixedError;

    /// Parse a decimal literal of the form `[-]int[.frac]`.
    ///
    /// Unlike [`Fixed::from_parts`], the fraction is positional: leading
    /// zeros are significant (`"0.05"` is five hundredths) and a leading
    /// minus negates the whole value including its fraction. Fraction
    /// digits beyond the precision's resolution truncate silently.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let _ = Self::PRECISION_OK;

        let s = s.trim();
        let (negative, s) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let (int_str, frac_str) = match s.find('.') {
            Some(pos) => (&s[..pos], &s[pos + 1..]),
            None => (s, ""),
        };
        if int_str.is_empty() && frac_str.is_empty() {
            return Err(FixedError::InvalidInput);
        }

        // the sign was stripped above, so the integer part is digits only
        let int_val: i64 = if int_str.is_empty() {
            0
        } else if int_str.bytes().all(|b| b.is_ascii_digit()) {
            int_str.parse().map_err(|_| FixedError::Overflow)?
        } else {
            return Err(FixedError::InvalidInput);
        };
        if T::from_i64(int_val).to_i64() != int_val {
            return Err(FixedError::Overflow);
        }

        let frac = Self::parse_fraction(frac_str)?;
        let magnitude = Self(T::from_i64(int_val).shl(P).wrapping_add(frac));

        Ok(if negative { -magnitude } else { magnitude })
    }
}

impl<T: FixedInt, const P: u32> Fixed<T, P> {
    /// Positional fraction digits to binary fraction bits.
    fn parse_fraction(frac_str: &str) -> FixedResult<T> {
        if frac_str.is_empty() {
            return Ok(T::ZERO);
        }
        if !frac_str.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FixedError::InvalidInput);
        }
        if P == 0 {
            return Ok(T::ZERO);
        }

        let zeros = frac_str.bytes().take_while(|&b| b == b'0').count();
        let significant = &frac_str[zeros..];
        if significant.is_empty() {
            return Ok(T::ZERO);
        }

        // Keep only the digits the precision can resolve; anything past the
        // headroom truncates, and a fraction below 10^-18 is zero at every
        // supported precision.
        let keep = significant.len().min(encode::headroom_digits(P) as usize);
        let den_pow = zeros + keep;
        if den_pow > 18 {
            return Ok(T::ZERO);
        }

        let digits: u64 = significant[..keep]
            .parse()
            .map_err(|_| FixedError::InvalidInput)?;

        // Underflow check before dividing: the denominator must fit the
        // widened accumulator, which it only has to once the result has at
        // least one bit.
        if (digits as u128) << P < encode::pow10(den_pow as u32) as u128 {
            return Ok(T::ZERO);
        }
        Ok(encode::scale_decimal_digits::<T>(digits, den_pow as u32, P))
    }
}

// ============================================================================
// Width Aliases
// ============================================================================

/// 8-bit fixed-point value with `P` fractional bits.
pub type Fixed8<const P: u32> = Fixed<i8, P>;

/// 16-bit fixed-point value with `P` fractional bits.
pub type Fixed16<const P: u32> = Fixed<i16, P>;

/// 32-bit fixed-point value with `P` fractional bits.
pub type Fixed32<const P: u32> = Fixed<i32, P>;

/// 64-bit fixed-point value with `P` fractional bits.
pub type Fixed64<const P: u32> = Fixed<i64, P>;

// ============================================================================
// Tests
// ============================================================================
