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
use std::arch::aarch64::*;

/// Four-lane bit-trick kernel, same operation sequence as the scalar path.
/// NEON is baseline on aarch64, no detection needed.
pub(crate) fn poly_exp_neon_f32<C: Correction<f32>>(dst: &mut [f32]) {
    unsafe {
        let coeffs = C::coefficients();
        let log2e = vdupq_n_f32(std::f32::consts::LOG2_E);
        let ones = vdupq_n_f32(1.0);

        let mut chunks = dst.chunks_exact_mut(4);
        for chunk in &mut chunks {
            let x = vld1q_f32(chunk.as_ptr());
            let x = vmulq_f32(x, log2e);
            let xi = vrndmq_f32(x);
            let xf = vsubq_f32(x, xi);

            let p = if coeffs.is_empty() {
                xf
            } else {
                let mut p = vdupq_n_f32(coeffs[coeffs.len() - 1]);
                let mut i = coeffs.len() - 1;
                while i > 0 {
                    i -= 1;
                    // deliberately not vfmaq: the scalar path rounds twice
                    p = vaddq_f32(vmulq_f32(p, xf), vdupq_n_f32(coeffs[i]));
                }
                p
            };

            let k = vaddq_f32(p, ones);
            let e = vaddq_s32(
                vreinterpretq_s32_f32(k),
                vshlq_n_s32::<23>(vcvtq_s32_f32(xi)),
            );
            vst1q_f32(chunk.as_mut_ptr(), vreinterpretq_f32_s32(e));
        }
        for v in chunks.into_remainder().iter_mut() {
            *v = bit_exp::<f32, C>(*v);
        }
    }
}

/// Two-lane `f64` kernel; aarch64 converts and shifts 64-bit lanes natively.
pub(crate) fn poly_exp_neon_f64<C: Correction<f64>>(dst: &mut [f64]) {
    unsafe {
        let coeffs = C::coefficients();
        let log2e = vdupq_n_f64(std::f64::consts::LOG2_E);
        let ones = vdupq_n_f64(1.0);

        let mut chunks = dst.chunks_exact_mut(2);
        for chunk in &mut chunks {
            let x = vld1q_f64(chunk.as_ptr());
            let x = vmulq_f64(x, log2e);
            let xi = vrndmq_f64(x);
            let xf = vsubq_f64(x, xi);

            let p = if coeffs.is_empty() {
                xf
            } else {
                let mut p = vdupq_n_f64(coeffs[coeffs.len() - 1]);
                let mut i = coeffs.len() - 1;
                while i > 0 {
                    i -= 1;
                    p = vaddq_f64(vmulq_f64(p, xf), vdupq_n_f64(coeffs[i]));
                }
                p
            };

            let k = vaddq_f64(p, ones);
            let e = vaddq_s64(
                vreinterpretq_s64_f64(k),
                vshlq_n_s64::<52>(vcvtq_s64_f64(xi)),
            );
            vst1q_f64(chunk.as_mut_ptr(), vreinterpretq_f64_s64(e));
        }
        for v in chunks.into_remainder().iter_mut() {
            *v = bit_exp::<f64, C>(*v);
        }
    }
}
