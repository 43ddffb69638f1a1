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
use crate::apply::exp_inplace;
use crate::raw_float::RawFloat;
use crate::strategy::ExpStrategy;

/// Repeated-squaring approximation `e^x ≈ (1 + x/2^K)^(2^K)`.
///
/// Straight-line multiplication only, no bit manipulation; `K` squarings per
/// evaluation. There is no range reduction: accuracy is best for small `|x|`
/// and degrades with magnitude (at `K = 12`, ≈1.2e-4 relative at `|x| = 1`
/// but ≈1.2e-2 at `|x| = 10`). Useful iteration counts are 8..=16.
pub struct Product<const K: i32>;

impl<T: RawFloat, const K: i32> ExpStrategy<T> for Product<K> {
    #[inline(always)]
    fn evaluate(x: T) -> T {
        // scaling by 2^-K is exact, the squaring chain is not
        let mut x = T::one() + x * T::pow2(-K);
        let mut i = 0;
        while i < K {
            x = x * x;
            i += 1;
        }
        x
    }
}

/// Product approximate `e^x` for `f32`, `K` squarings.
///
/// Relative error at `|x| ≤ 1`: ≈2.0e-3 for `K = 8`, 4.9e-4 for `K = 10`,
/// 1.2e-4 for `K = 12`, before the rounding of the chain itself.
#[inline]
pub fn product_expf<const K: i32>(x: f32) -> f32 {
    Product::<K>::evaluate(x)
}

/// Product approximate `e^x` for `f64`, `K` squarings.
#[inline]
pub fn product_exp<const K: i32>(x: f64) -> f64 {
    Product::<K>::evaluate(x)
}

/// Applies [`product_expf`] to every element in place.
///
/// The chain has no cross-element state; the hinted loop is enough for the
/// autovectorizer, so no explicit kernels exist for this family.
#[inline]
pub fn product_expf_inplace<const K: i32>(dst: &mut [f32]) {
    exp_inplace::<f32, Product<K>>(dst)
}

/// Applies [`product_exp`] to every element in place.
#[inline]
pub fn product_exp_inplace<const K: i32>(dst: &mut [f64]) {
    exp_inplace::<f64, Product<K>>(dst)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_anchor_exact() {
        assert_eq!(product_exp::<8>(0.), 1.0);
        assert_eq!(product_exp::<16>(0.), 1.0);
        assert_eq!(product_expf::<10>(0.), 1.0);
    }

    #[test]
    fn ten_iterations_within_a_tenth_percent_at_one() {
        let exact = 1f64.exp();
        let approx = product_exp::<10>(1.0);
        assert!(
            ((approx - exact) / exact).abs() < 1e-3,
            "got {approx}, want ~{exact}"
        );
        let approx = product_expf::<10>(1.0f32) as f64;
        assert!(((approx - exact) / exact).abs() < 1e-3);
    }

    #[test]
    fn bounds_near_origin() {
        for i in -1000..=1000 {
            let x = i as f64 / 1000.;
            let exact = x.exp();
            let r8 = ((product_exp::<8>(x) - exact) / exact).abs();
            let r12 = ((product_exp::<12>(x) - exact) / exact).abs();
            assert!(r8 < 2.5e-3, "K=8 off at x={x}: {r8}");
            assert!(r12 < 2e-4, "K=12 off at x={x}: {r12}");
        }
    }

    #[test]
    fn accuracy_improves_with_iterations() {
        let exact = 2f64.exp();
        let e8 = (product_exp::<8>(2.) - exact).abs();
        let e10 = (product_exp::<10>(2.) - exact).abs();
        let e12 = (product_exp::<12>(2.) - exact).abs();
        assert!(e10 < e8);
        assert!(e12 < e10);
    }

    #[test]
    fn degrades_away_from_origin() {
        // documented precondition, not a handled error
        let exact = 10f64.exp();
        let rel = ((product_exp::<8>(10.) - exact) / exact).abs();
        assert!(rel > 1e-2);
        assert!(rel < 0.5);
    }

    #[test]
    fn monotone_on_small_range() {
        let mut prev = product_exp::<8>(-5.);
        for i in -50_000..=50_000 {
            let x = i as f64 / 10_000.;
            let v = product_exp::<8>(x);
            assert!(v >= prev, "decrease at x={x}");
            prev = v;
        }
    }
}
