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
use num_traits::Num;

/// Non-fused multiply-add, `c + a * b`.
///
/// Deliberately not an FMA: the vector kernels issue a plain multiply and
/// add, and the scalar path must round identically.
#[inline(always)]
pub(crate) fn c_mla<T: Num + Copy>(a: T, b: T, c: T) -> T {
    c + a * b
}

/// Horner evaluation over a fixed coefficient table, low order first.
///
/// The bound is the table length, known at monomorphization, so the loop
/// fully unrolls.
#[inline(always)]
pub(crate) fn horner<T: Num + Copy, const N: usize>(x: T, c: &[T; N]) -> T {
    let mut p = c[N - 1];
    let mut i = N - 1;
    while i > 0 {
        i -= 1;
        p = c_mla(p, x, c[i]);
    }
    p
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horner_matches_naive() {
        let c = [1.0f64, -2.0, 3.0];
        let x = 0.37;
        let naive = 1.0 - 2.0 * x + 3.0 * x * x;
        assert!((horner(x, &c) - naive).abs() < 1e-12);
    }
}
