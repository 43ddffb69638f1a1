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
use crate::strategy::{Correction, bit_exp};
#[cfg(target_arch = "x86")]
use std::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use std::arch::x86_64::*;

/// Eight-lane bit-trick kernel, same operation sequence as the scalar path.
#[target_feature(enable = "avx2")]
pub(crate) unsafe fn poly_exp_avx2<C: Correction<f32>>(dst: &mut [f32]) {
    unsafe {
        let coeffs = C::coefficients();
        let log2e = _mm256_set1_ps(std::f32::consts::LOG2_E);
        let ones = _mm256_set1_ps(1.0);

        let mut chunks = dst.chunks_exact_mut(8);
        for chunk in &mut chunks {
            let x = _mm256_loadu_ps(chunk.as_ptr());
            let x = _mm256_mul_ps(x, log2e);
            let xi = _mm256_floor_ps(x);
            let xf = _mm256_sub_ps(x, xi);

            let p = if coeffs.is_empty() {
                xf
            } else {
                let mut p = _mm256_set1_ps(coeffs[coeffs.len() - 1]);
                let mut i = coeffs.len() - 1;
                while i > 0 {
                    i -= 1;
                    p = _mm256_add_ps(_mm256_mul_ps(p, xf), _mm256_set1_ps(coeffs[i]));
                }
                p
            };

            let k = _mm256_add_ps(p, ones);
            let e = _mm256_add_epi32(
                _mm256_castps_si256(k),
                _mm256_slli_epi32::<23>(_mm256_cvttps_epi32(xi)),
            );
            _mm256_storeu_ps(chunk.as_mut_ptr(), _mm256_castsi256_ps(e));
        }
        for v in chunks.into_remainder().iter_mut() {
            *v = bit_exp::<f32, C>(*v);
        }
    }
}
