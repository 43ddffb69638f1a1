/*
 * // Copyright (c) Radzivon Bartoshyk 5/2025. All rights reserved.
 * //
 * // Redistribution and use in source and binary forms, with or without modification,
 * // are permitted provided that the following conditions are met:
 * //
 * // 1.  Redistributions of source code must retain the above copyright notice, this
 * // list of conditions and the following disclaimer.
 * //
 * // 2.  Redistributions in binary form must reproduce the above copyright notice,
 * // this list of conditions and the following disclaimer in the documentation
 * // and/or other materials provided with the distribution.
 * //
 * // 3.  Neither the name of the copyright holder nor the names of its
 * // contributors may be used to endorse or promote products derived from
 * // this software without specific prior written permission.
 * //
 * // THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS"
 * // AND ANY EXPRESS OR IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE
 * // IMPLIED WARRANTIES OF MERCHANTABILITY AND FITNESS FOR A PARTICULAR PURPOSE ARE
 * // DISCLAIMED. IN NO EVENT SHALL THE COPYRIGHT HOLDER OR CONTRIBUTORS BE LIABLE
 * // FOR ANY DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL
 * // DAMAGES (INCLUDING, BUT NOT LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR
 * // SERVICES; LOSS OF USE, DATA, OR PROFITS; OR BUSINESS INTERRUPTION) HOWEVER
 * // CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT, STRICT LIABILITY,
 * // OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
 * // OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.
 */
use num_traits::{Num, WrappingAdd};

/// Raw IEEE-754 layout of a supported precision.
///
/// `MANTISSA_SHIFT` is the position of the exponent field, fixed by the
/// hardware format: adding `q << MANTISSA_SHIFT` to the raw bits multiplies
/// the represented value by `2^q` as long as the exponent stays in range.
pub trait RawFloat: Num + Copy + PartialOrd {
    /// Unsigned integer of the same width.
    type Bits: Copy + WrappingAdd;
    /// Width of the format in bits.
    const BITS: u32;
    /// Number of mantissa bits, 23 for binary32 and 52 for binary64.
    const MANTISSA_SHIFT: u32;
    /// log2(e) at this precision.
    const LOG2E: Self;

    fn to_raw(self) -> Self::Bits;
    fn from_raw(bits: Self::Bits) -> Self;
    /// Round towards minus infinity.
    fn ffloor(self) -> Self;
    /// `(self as signed) << MANTISSA_SHIFT`, wrapping. Only meaningful while
    /// the integral part fits the exponent range; larger magnitudes silently
    /// produce garbage, per the crate contract.
    fn exponent_carry(self) -> Self::Bits;
    /// `2^q` assembled directly in the exponent field.
    fn pow2(q: i32) -> Self;
}

impl RawFloat for f32 {
    type Bits = u32;
    const BITS: u32 = 32;
    const MANTISSA_SHIFT: u32 = 23;
    const LOG2E: f32 = std::f32::consts::LOG2_E;

    #[inline(always)]
    fn to_raw(self) -> u32 {
        self.to_bits()
    }

    #[inline(always)]
    fn from_raw(bits: u32) -> f32 {
        f32::from_bits(bits)
    }

    #[inline(always)]
    fn ffloor(self) -> f32 {
        self.floor()
    }

    #[inline(always)]
    fn exponent_carry(self) -> u32 {
        ((self as i32) as u32) << Self::MANTISSA_SHIFT
    }

    #[inline(always)]
    fn pow2(q: i32) -> f32 {
        f32::from_bits((q.wrapping_add(0x7f) as u32) << 23)
    }
}

impl RawFloat for f64 {
    type Bits = u64;
    const BITS: u32 = 64;
    const MANTISSA_SHIFT: u32 = 52;
    const LOG2E: f64 = std::f64::consts::LOG2_E;

    #[inline(always)]
    fn to_raw(self) -> u64 {
        self.to_bits()
    }

    #[inline(always)]
    fn from_raw(bits: u64) -> f64 {
        f64::from_bits(bits)
    }

    #[inline(always)]
    fn ffloor(self) -> f64 {
        self.floor()
    }

    #[inline(always)]
    fn exponent_carry(self) -> u64 {
        ((self as i64) as u64) << Self::MANTISSA_SHIFT
    }

    #[inline(always)]
    fn pow2(q: i32) -> f64 {
        f64::from_bits(((q as i64).wrapping_add(0x3ff) as u64) << 52)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pow2_exact() {
        assert_eq!(<f32 as RawFloat>::pow2(3), 8.0);
        assert_eq!(<f32 as RawFloat>::pow2(-2), 0.25);
        assert_eq!(<f64 as RawFloat>::pow2(10), 1024.0);
        assert_eq!(<f64 as RawFloat>::pow2(-10), 1.0 / 1024.0);
    }

    #[test]
    fn exponent_carry_scales_by_power_of_two() {
        // adding the carry of n to the bits of 1.0 must give 2^n
        let one = 1.0f32.to_raw();
        let shifted = f32::from_raw(one.wrapping_add(3.0f32.exponent_carry()));
        assert_eq!(shifted, 8.0);
        let one = 1.0f64.to_raw();
        let shifted = f64::from_raw(one.wrapping_add((-2.0f64).exponent_carry()));
        assert_eq!(shifted, 0.25);
    }

    #[test]
    fn shift_matches_mantissa_width() {
        assert_eq!(<f32 as RawFloat>::MANTISSA_SHIFT, f32::MANTISSA_DIGITS - 1);
        assert_eq!(<f64 as RawFloat>::MANTISSA_SHIFT, f64::MANTISSA_DIGITS - 1);
    }
}
