/*
 * // Copyright (c) Radzivon Bartoshyk 6/2025. All rights reserved.
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
use crate::common::horner;
use crate::raw_float::RawFloat;
use crate::schraudolph::polynomial_fit;
use crate::strategy::{Correction, ExpStrategy, bit_exp};

/// Bit-trick approximation with endpoint-constrained fits.
///
/// Same reassembly as [`crate::Schraudolph`], but every table satisfies
/// `P(0) = 0` and `P(1) ≤ 1`, so the curve is continuous and monotone across
/// every power-of-two boundary at the cost of a slightly worse mid-interval
/// fit. The constants are constrained least-squares fits of `2^t - 1` on
/// `[0, 1]`; degree 1 collapses to the plain trick.
pub struct Interpolative<const DEGREE: usize>;

impl<T: RawFloat, const DEGREE: usize> ExpStrategy<T> for Interpolative<DEGREE>
where
    Interpolative<DEGREE>: Correction<T>,
{
    #[inline(always)]
    fn evaluate(x: T) -> T {
        bit_exp::<T, Self>(x)
    }
}

// Trailing constants are rounded down so each table sums strictly below 1.
polynomial_fit!(Interpolative, f32, 1, INTERP_F32_1, [0.0, 1.0]);
polynomial_fit!(
    Interpolative,
    f32,
    2,
    INTERP_F32_2,
    [0.0, 6.56365861e-01, 3.43634138e-01]
);
polynomial_fit!(
    Interpolative,
    f32,
    3,
    INTERP_F32_3,
    [0.0, 6.95928470e-01, 2.24946311e-01, 7.91252180e-02]
);
polynomial_fit!(
    Interpolative,
    f32,
    4,
    INTERP_F32_4,
    [
        0.0,
        6.92995655e-01,
        2.41565598e-01,
        5.17522761e-02,
        1.36864700e-02
    ]
);
polynomial_fit!(
    Interpolative,
    f32,
    5,
    INTERP_F32_5,
    [
        0.0,
        6.93153589e-01,
        2.40144189e-01,
        5.58585677e-02,
        8.94844246e-03,
        1.89521100e-03
    ]
);

polynomial_fit!(Interpolative, f64, 1, INTERP_F64_1, [0.0, 1.0]);
polynomial_fit!(
    Interpolative,
    f64,
    2,
    INTERP_F64_2,
    [0.0, 6.56365861e-01, 3.43634138e-01]
);
polynomial_fit!(
    Interpolative,
    f64,
    3,
    INTERP_F64_3,
    [0.0, 6.95928470e-01, 2.24946311e-01, 7.91252180e-02]
);
polynomial_fit!(
    Interpolative,
    f64,
    4,
    INTERP_F64_4,
    [
        0.0,
        6.92995655e-01,
        2.41565598e-01,
        5.17522761e-02,
        1.36864700e-02
    ]
);
polynomial_fit!(
    Interpolative,
    f64,
    5,
    INTERP_F64_5,
    [
        0.0,
        6.93153589e-01,
        2.40144189e-01,
        5.58585677e-02,
        8.94844246e-03,
        1.89521100e-03
    ]
);

/// Interpolative approximate `e^x` for `f32`.
///
/// Validated on `[-10, 10]`; max relative error ≈ 6.2e-2 for degree 1,
/// 3.3e-3 for 2, 1.5e-4 for 3, 5.1e-6 for 4, 1.6e-7 for 5, on top of the
/// rounding floor of the precision. Monotone for every degree.
#[inline]
pub fn interp_expf<const DEGREE: usize>(x: f32) -> f32
where
    Interpolative<DEGREE>: Correction<f32>,
{
    Interpolative::<DEGREE>::evaluate(x)
}

/// Interpolative approximate `e^x` for `f64`.
///
/// Same fits and error bounds as [`interp_expf`].
#[inline]
pub fn interp_exp<const DEGREE: usize>(x: f64) -> f64
where
    Interpolative<DEGREE>: Correction<f64>,
{
    Interpolative::<DEGREE>::evaluate(x)
}

/// Applies [`interp_expf`] to every element in place, using explicit vector
/// kernels where the target allows.
#[inline]
pub fn interp_expf_inplace<const DEGREE: usize>(dst: &mut [f32])
where
    Interpolative<DEGREE>: Correction<f32>,
{
    crate::apply::poly_exp_inplace_f32::<Interpolative<DEGREE>>(dst)
}

/// Applies [`interp_exp`] to every element in place.
#[inline]
pub fn interp_exp_inplace<const DEGREE: usize>(dst: &mut [f64])
where
    Interpolative<DEGREE>: Correction<f64>,
{
    crate::apply::poly_exp_inplace_f64::<Interpolative<DEGREE>>(dst)
}
