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
use crate::raw_float::RawFloat;
use num_traits::WrappingAdd;

/// One compile-time (variant, degree) selection of the approximation.
///
/// Implementations are zero-sized tags; every selection monomorphizes to a
/// straight-line evaluation with no runtime dispatch.
pub trait ExpStrategy<T> {
    fn evaluate(x: T) -> T;
}

/// Fractional-range correction consumed by the bit-trick families.
///
/// `correction` is only meaningful for `xf` in `[0, 1)`; the coefficient
/// table holds the fitted constants low order first, `degree + 1` of them,
/// and is empty for the raw degree-0 trick.
pub trait Correction<T> {
    fn correction(xf: T) -> T;
    fn coefficients() -> &'static [T];
}

/// Shared engine of the bit-trick families.
///
/// Scale by log2(e), split into integral and fractional parts, correct the
/// fraction, then push the integral part straight into the exponent field.
#[inline(always)]
pub(crate) fn bit_exp<T: RawFloat, C: Correction<T>>(x: T) -> T {
    let x = x * T::LOG2E;
    let xi = x.ffloor();
    let xf = x - xi;
    let k = C::correction(xf) + T::one();
    T::from_raw(k.to_raw().wrapping_add(&xi.exponent_carry()))
}
