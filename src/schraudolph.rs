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
use crate::common::horner;
use crate::raw_float::RawFloat;
use crate::strategy::{Correction, ExpStrategy, bit_exp};

/// Schraudolph bit-trick approximation of `e^x`, refined by a fixed
/// polynomial fit of the fractional part.
///
/// Degree 0 is the plain trick (linear interpolation between powers of two);
/// higher degrees consult a fitted table of `DEGREE + 1` constants. The fits
/// are independent per degree, so switching degree changes the shape of the
/// error curve, not just its size.
pub struct Schraudolph<const DEGREE: usize>;

impl<T: RawFloat, const DEGREE: usize> ExpStrategy<T> for Schraudolph<DEGREE>
where
    Schraudolph<DEGREE>: Correction<T>,
{
    #[inline(always)]
    fn evaluate(x: T) -> T {
        bit_exp::<T, Self>(x)
    }
}

macro_rules! polynomial_fit {
    ($family:ident, $t:ty, $degree:literal, $table:ident, [$($c:expr),+ $(,)?]) => {
        const $table: [$t; $degree + 1] = [$($c),+];

        impl Correction<$t> for $family<$degree> {
            #[inline(always)]
            fn correction(xf: $t) -> $t {
                horner(xf, &$table)
            }

            #[inline]
            fn coefficients() -> &'static [$t] {
                &$table
            }
        }
    };
}
pub(crate) use polynomial_fit;

impl Correction<f32> for Schraudolph<0> {
    #[inline(always)]
    fn correction(xf: f32) -> f32 {
        xf
    }

    #[inline]
    fn coefficients() -> &'static [f32] {
        &[]
    }
}

impl Correction<f64> for Schraudolph<0> {
    #[inline(always)]
    fn correction(xf: f64) -> f64 {
        xf
    }

    #[inline]
    fn coefficients() -> &'static [f64] {
        &[]
    }
}

// Least-squares fits of 2^t - 1 on [0, 1). The degree-4 table is a rederived
// fit: the historical one carried only four constants for five slots.
polynomial_fit!(Schraudolph, f32, 1, SCHRAUDOLPH_F32_1, [-0.05288671, 0.99232129]);
polynomial_fit!(
    Schraudolph,
    f32,
    2,
    SCHRAUDOLPH_F32_2,
    [0.00365539, 0.64960693, 0.34271434]
);
polynomial_fit!(
    Schraudolph,
    f32,
    3,
    SCHRAUDOLPH_F32_3,
    [-1.77187919e-04, 6.96787180e-01, 2.24169036e-01, 7.90302044e-02]
);
polynomial_fit!(
    Schraudolph,
    f32,
    4,
    SCHRAUDOLPH_F32_4,
    [
        7.25105677e-06,
        6.92931571e-01,
        2.41709642e-01,
        5.16672167e-02,
        1.36765981e-02
    ]
);
// The degree-5 fit genuinely has a zero leading coefficient.
polynomial_fit!(
    Schraudolph,
    f32,
    5,
    SCHRAUDOLPH_F32_5,
    [
        6.58721338e-06,
        6.92937406e-01,
        2.41696769e-01,
        5.16742848e-02,
        1.36779598e-02,
        0.0
    ]
);

polynomial_fit!(Schraudolph, f64, 1, SCHRAUDOLPH_F64_1, [-0.05288671, 0.99232129]);
polynomial_fit!(
    Schraudolph,
    f64,
    2,
    SCHRAUDOLPH_F64_2,
    [0.00365539, 0.64960693, 0.34271434]
);
polynomial_fit!(
    Schraudolph,
    f64,
    3,
    SCHRAUDOLPH_F64_3,
    [-1.77187919e-04, 6.96787180e-01, 2.24169036e-01, 7.90302044e-02]
);
polynomial_fit!(
    Schraudolph,
    f64,
    4,
    SCHRAUDOLPH_F64_4,
    [
        7.25105677e-06,
        6.92931571e-01,
        2.41709642e-01,
        5.16672167e-02,
        1.36765981e-02
    ]
);
polynomial_fit!(
    Schraudolph,
    f64,
    5,
    SCHRAUDOLPH_F64_5,
    [
        6.58721338e-06,
        6.92937406e-01,
        2.41696769e-01,
        5.16742848e-02,
        1.36779598e-02,
        0.0
    ]
);

/// Schraudolph approximate `e^x` for `f32`.
///
/// Validated on `[-10, 10]`; max relative error ≈ 6.2e-2 for degree 0,
/// 5.3e-2 for 1, 3.7e-3 for 2, 1.8e-4 for 3, 7.3e-6 for 4, 6.6e-6 for 5,
/// on top of the rounding floor of the precision. Degrees 1 and 3 dip
/// slightly at power-of-two boundaries and are not monotone there.
#[inline]
pub fn schraudolph_expf<const DEGREE: usize>(x: f32) -> f32
where
    Schraudolph<DEGREE>: Correction<f32>,
{
    Schraudolph::<DEGREE>::evaluate(x)
}

/// Schraudolph approximate `e^x` for `f64`.
///
/// Same fits and error bounds as [`schraudolph_expf`].
#[inline]
pub fn schraudolph_exp<const DEGREE: usize>(x: f64) -> f64
where
    Schraudolph<DEGREE>: Correction<f64>,
{
    Schraudolph::<DEGREE>::evaluate(x)
}

/// Applies [`schraudolph_expf`] to every element in place, using explicit
/// vector kernels where the target allows.
#[inline]
pub fn schraudolph_expf_inplace<const DEGREE: usize>(dst: &mut [f32])
where
    Schraudolph<DEGREE>: Correction<f32>,
{
    crate::apply::poly_exp_inplace_f32::<Schraudolph<DEGREE>>(dst)
}

/// Applies [`schraudolph_exp`] to every element in place.
#[inline]
pub fn schraudolph_exp_inplace<const DEGREE: usize>(dst: &mut [f64])
where
    Schraudolph<DEGREE>: Correction<f64>,
{
    crate::apply::poly_exp_inplace_f64::<Schraudolph<DEGREE>>(dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn max_rel_err_f64<const DEGREE: usize>() -> f64
    where
        Schraudolph<DEGREE>: Correction<f64>,
    {
        let mut worst = 0f64;
        for i in -10_000..=10_000 {
            let x = i as f64 / 1000.;
            let approx = schraudolph_exp::<DEGREE>(x);
            let exact = x.exp();
            worst = worst.max(((approx - exact) / exact).abs());
        }
        worst
    }

    fn max_rel_err_f32<const DEGREE: usize>() -> f32
    where
        Schraudolph<DEGREE>: Correction<f32>,
    {
        let mut worst = 0f32;
        for i in -10_000..=10_000 {
            let x = i as f32 / 1000.;
            let approx = schraudolph_expf::<DEGREE>(x);
            let exact = x.exp();
            worst = worst.max(((approx - exact) / exact).abs());
        }
        worst
    }

    #[test]
    fn published_bounds_f64() {
        assert!(max_rel_err_f64::<0>() < 6.5e-2);
        assert!(max_rel_err_f64::<1>() < 5.5e-2);
        assert!(max_rel_err_f64::<2>() < 4e-3);
        assert!(max_rel_err_f64::<3>() < 2e-4);
        assert!(max_rel_err_f64::<4>() < 1e-5);
        assert!(max_rel_err_f64::<5>() < 1e-5);
    }

    #[test]
    fn published_bounds_f32() {
        assert!(max_rel_err_f32::<0>() < 6.5e-2);
        assert!(max_rel_err_f32::<2>() < 4e-3);
        assert!(max_rel_err_f32::<5>() < 1e-5);
    }

    #[test]
    fn accuracy_improves_with_degree() {
        assert!(max_rel_err_f64::<2>() < max_rel_err_f64::<0>());
        assert!(max_rel_err_f64::<3>() < max_rel_err_f64::<2>());
        assert!(max_rel_err_f64::<4>() < max_rel_err_f64::<3>());
    }

    #[test]
    fn identity_anchor() {
        assert!((schraudolph_exp::<0>(0.) - 1.).abs() < 6.5e-2);
        assert!((schraudolph_exp::<2>(0.) - 1.).abs() < 4e-3);
        assert!((schraudolph_exp::<5>(0.) - 1.).abs() < 1e-5);
        assert!((schraudolph_expf::<2>(0.) - 1.).abs() < 4e-3);
    }

    #[test]
    fn degree2_within_one_percent_at_one() {
        let exact = 1f64.exp();
        let approx = schraudolph_exp::<2>(1.0);
        assert!(
            ((approx - exact) / exact).abs() < 1e-2,
            "got {approx}, want ~{exact}"
        );
        let approx = schraudolph_expf::<2>(1.0f32);
        assert!(((approx as f64 - exact) / exact).abs() < 1e-2);
    }

    fn assert_monotone_f64<const DEGREE: usize>()
    where
        Schraudolph<DEGREE>: Correction<f64>,
    {
        let mut prev = schraudolph_exp::<DEGREE>(-10.);
        for i in -200_000..=200_000 {
            let x = i as f64 / 20_000.;
            let v = schraudolph_exp::<DEGREE>(x);
            assert!(v >= prev, "decrease at x={x}: {v} < {prev}");
            prev = v;
        }
    }

    // Degrees with a non-negative constant term keep the reassembled value
    // increasing across every power-of-two boundary; 1 and 3 do not.
    #[test]
    fn monotone_degrees() {
        assert_monotone_f64::<0>();
        assert_monotone_f64::<2>();
        assert_monotone_f64::<4>();
        assert_monotone_f64::<5>();
    }

    #[test]
    fn monotone_f32_degree2() {
        let mut prev = schraudolph_expf::<2>(-10.);
        for i in -100_000..=100_000 {
            let x = i as f32 / 10_000.;
            let v = schraudolph_expf::<2>(x);
            assert!(v >= prev, "decrease at x={x}");
            prev = v;
        }
    }

    #[test]
    fn table_arity() {
        assert!(<Schraudolph<0> as Correction<f64>>::coefficients().is_empty());
        assert_eq!(<Schraudolph<1> as Correction<f64>>::coefficients().len(), 2);
        assert_eq!(<Schraudolph<2> as Correction<f64>>::coefficients().len(), 3);
        assert_eq!(<Schraudolph<3> as Correction<f32>>::coefficients().len(), 4);
        assert_eq!(<Schraudolph<4> as Correction<f32>>::coefficients().len(), 5);
        assert_eq!(<Schraudolph<5> as Correction<f64>>::coefficients().len(), 6);
    }

    #[test]
    fn precisions_agree() {
        for i in -40..=40 {
            let x = i as f64 / 4.;
            let wide = schraudolph_exp::<2>(x);
            let narrow = schraudolph_expf::<2>(x as f32) as f64;
            assert!(
                ((wide - narrow) / wide).abs() < 8e-3,
                "diverged at x={x}: {wide} vs {narrow}"
            );
        }
    }
}
