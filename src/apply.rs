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
use crate::raw_float::RawFloat;
use crate::strategy::{Correction, ExpStrategy};

#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
mod avx;
#[cfg(all(target_arch = "aarch64", feature = "neon"))]
mod neon;
#[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
mod sse;

/// Group width of the hinted loop, one 256-bit register.
const VECTOR_BITS: u32 = 256;

/// Overwrites every element with its approximation, iterating in fixed-width
/// groups.
///
/// Elements carry no cross-iteration state, so any partition of the buffer
/// across lanes or threads gives results identical to sequential execution;
/// the grouping exists to make that visible to the autovectorizer.
#[inline]
pub fn exp_inplace<T: RawFloat, S: ExpStrategy<T>>(dst: &mut [T]) {
    let lanes = (VECTOR_BITS / T::BITS) as usize;
    let mut chunks = dst.chunks_exact_mut(lanes);
    for chunk in &mut chunks {
        for v in chunk.iter_mut() {
            *v = S::evaluate(*v);
        }
    }
    for v in chunks.into_remainder().iter_mut() {
        *v = S::evaluate(*v);
    }
}

/// Overwrites one fixed-width group with its approximation.
///
/// Element-for-element identical to [`exp_inplace`] over the same values.
#[inline]
pub fn exp_batch<T: RawFloat, S: ExpStrategy<T>, const N: usize>(block: &mut [T; N]) {
    for v in block.iter_mut() {
        *v = S::evaluate(*v);
    }
}

/// Plain sequential loop without the grouping, kept for comparison in
/// benchmarks. Numerically identical to [`exp_inplace`].
#[inline]
pub fn exp_inplace_seq<T: RawFloat, S: ExpStrategy<T>>(dst: &mut [T]) {
    for v in dst.iter_mut() {
        *v = S::evaluate(*v);
    }
}

/// In-place bit-trick application over `f32` with explicit kernels where the
/// target allows; falls back to the hinted loop. All paths issue the same
/// operation sequence as the scalar evaluation, so output is bit-identical.
#[inline]
pub(crate) fn poly_exp_inplace_f32<C: Correction<f32> + ExpStrategy<f32>>(dst: &mut [f32]) {
    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "avx"))]
    {
        if std::arch::is_x86_feature_detected!("avx2") {
            return unsafe { avx::poly_exp_avx2::<C>(dst) };
        }
    }
    #[cfg(all(any(target_arch = "x86", target_arch = "x86_64"), feature = "sse"))]
    {
        if std::arch::is_x86_feature_detected!("sse4.1") {
            return unsafe { sse::poly_exp_sse41::<C>(dst) };
        }
    }
    #[cfg(all(target_arch = "aarch64", feature = "neon"))]
    {
        return neon::poly_exp_neon_f32::<C>(dst);
    }
    #[allow(unreachable_code)]
    exp_inplace::<f32, C>(dst)
}

/// In-place bit-trick application over `f64`; NEON kernel on aarch64, hinted
/// loop elsewhere.
#[inline]
pub(crate) fn poly_exp_inplace_f64<C: Correction<f64> + ExpStrategy<f64>>(dst: &mut [f64]) {
    #[cfg(all(target_arch = "aarch64", feature = "neon"))]
    {
        return neon::poly_exp_neon_f64::<C>(dst);
    }
    #[allow(unreachable_code)]
    exp_inplace::<f64, C>(dst)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpolative::{interp_exp, interp_exp_inplace};
    use crate::product::{Product, product_expf};
    use crate::schraudolph::{
        Schraudolph, schraudolph_exp_inplace, schraudolph_expf, schraudolph_expf_inplace,
    };
    use rand::Rng;

    fn random_f32(n: usize) -> Vec<f32> {
        let mut rng = rand::rng();
        (0..n).map(|_| rng.random_range(-10f32..10f32)).collect()
    }

    #[test]
    fn hinted_matches_scalar_bitwise() {
        // odd length exercises the remainder path
        let src = random_f32(1003);
        let mut dst = src.clone();
        exp_inplace::<f32, Schraudolph<2>>(&mut dst);
        for (d, s) in dst.iter().zip(src.iter()) {
            assert_eq!(d.to_bits(), schraudolph_expf::<2>(*s).to_bits());
        }
    }

    #[test]
    fn seq_matches_hinted_bitwise() {
        let src = random_f32(517);
        let mut hinted = src.clone();
        let mut seq = src.clone();
        exp_inplace::<f32, Product<10>>(&mut hinted);
        exp_inplace_seq::<f32, Product<10>>(&mut seq);
        assert_eq!(
            hinted.iter().map(|x| x.to_bits()).collect::<Vec<_>>(),
            seq.iter().map(|x| x.to_bits()).collect::<Vec<_>>()
        );
        for (d, s) in seq.iter().zip(src.iter()) {
            assert_eq!(d.to_bits(), product_expf::<10>(*s).to_bits());
        }
    }

    #[test]
    fn batch_matches_scalar_bitwise() {
        let src = random_f32(8);
        let mut block: [f32; 8] = src.clone().try_into().unwrap();
        exp_batch::<f32, Schraudolph<5>, 8>(&mut block);
        for (d, s) in block.iter().zip(src.iter()) {
            assert_eq!(d.to_bits(), schraudolph_expf::<5>(*s).to_bits());
        }
    }

    #[test]
    fn dispatched_f32_matches_scalar_bitwise() {
        for n in [0usize, 1, 3, 4, 7, 8, 64, 1003] {
            let src = random_f32(n);
            let mut dst = src.clone();
            schraudolph_expf_inplace::<2>(&mut dst);
            for (d, s) in dst.iter().zip(src.iter()) {
                assert_eq!(
                    d.to_bits(),
                    schraudolph_expf::<2>(*s).to_bits(),
                    "mismatch at input {s}"
                );
            }
        }
    }

    #[test]
    fn dispatched_degree0_matches_scalar_bitwise() {
        let src = random_f32(133);
        let mut dst = src.clone();
        schraudolph_expf_inplace::<0>(&mut dst);
        for (d, s) in dst.iter().zip(src.iter()) {
            assert_eq!(d.to_bits(), schraudolph_expf::<0>(*s).to_bits());
        }
    }

    #[test]
    fn dispatched_f64_matches_scalar_bitwise() {
        let mut rng = rand::rng();
        let src: Vec<f64> = (0..509).map(|_| rng.random_range(-10f64..10f64)).collect();
        let mut dst = src.clone();
        interp_exp_inplace::<3>(&mut dst);
        for (d, s) in dst.iter().zip(src.iter()) {
            assert_eq!(d.to_bits(), interp_exp::<3>(*s).to_bits());
        }
        let mut dst = src.clone();
        schraudolph_exp_inplace::<5>(&mut dst);
        for (d, s) in dst.iter().zip(src.iter()) {
            assert_eq!(
                d.to_bits(),
                crate::schraudolph::schraudolph_exp::<5>(*s).to_bits()
            );
        }
    }

    #[test]
    fn thousand_zeros_stay_near_one() {
        let mut buf = vec![0f32; 1000];
        schraudolph_expf_inplace::<2>(&mut buf);
        assert_eq!(buf.len(), 1000);
        for v in buf {
            assert!((v - 1.0).abs() < 4e-3, "got {v}");
        }
    }
}
