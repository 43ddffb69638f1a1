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
//! C ABI surface binding fixed symbol names to fixed compile-time
//! instantiations, so the family can be called without generics. Pure
//! forwarding, no logic.
use crate::product::{product_exp, product_exp_inplace, product_expf, product_expf_inplace};
use crate::schraudolph::{
    schraudolph_exp, schraudolph_exp_inplace, schraudolph_expf, schraudolph_expf_inplace,
};

/// Base bit-trick `e^x`, single precision.
#[unsafe(no_mangle)]
pub extern "C" fn exp_s(x: f32) -> f32 {
    schraudolph_expf::<0>(x)
}

/// Base bit-trick `e^x`, double precision.
#[unsafe(no_mangle)]
pub extern "C" fn exp_d(x: f64) -> f64 {
    schraudolph_exp::<0>(x)
}

/// In-place vectorized base trick over `n` single-precision values.
///
/// # Safety
/// `x` must be non-null and point to `n` valid, writable `f32`; violating
/// this is undefined behavior, not a reported error.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn exp_v_s(x: *mut f32, n: usize) {
    let dst = unsafe { std::slice::from_raw_parts_mut(x, n) };
    schraudolph_expf_inplace::<0>(dst);
}

/// In-place vectorized base trick over `n` double-precision values.
///
/// # Safety
/// Same contract as [`exp_v_s`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn exp_v_d(x: *mut f64, n: usize) {
    let dst = unsafe { std::slice::from_raw_parts_mut(x, n) };
    schraudolph_exp_inplace::<0>(dst);
}

/// Plain-loop base trick over `n` single-precision values, for comparison.
///
/// # Safety
/// Same contract as [`exp_v_s`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn exp_nv_s(x: *mut f32, n: usize) {
    let dst = unsafe { std::slice::from_raw_parts_mut(x, n) };
    crate::apply::exp_inplace_seq::<f32, crate::Schraudolph<0>>(dst);
}

/// Plain-loop base trick over `n` double-precision values, for comparison.
///
/// # Safety
/// Same contract as [`exp_v_s`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn exp_nv_d(x: *mut f64, n: usize) {
    let dst = unsafe { std::slice::from_raw_parts_mut(x, n) };
    crate::apply::exp_inplace_seq::<f64, crate::Schraudolph<0>>(dst);
}

/// Product approximation with 8 squarings, single precision.
#[unsafe(no_mangle)]
pub extern "C" fn exp256_s(x: f32) -> f32 {
    product_expf::<8>(x)
}

/// Product approximation with 8 squarings, double precision.
#[unsafe(no_mangle)]
pub extern "C" fn exp256_d(x: f64) -> f64 {
    product_exp::<8>(x)
}

/// Product approximation with 10 squarings, single precision.
#[unsafe(no_mangle)]
pub extern "C" fn exp1024_s(x: f32) -> f32 {
    product_expf::<10>(x)
}

/// Product approximation with 10 squarings, double precision.
#[unsafe(no_mangle)]
pub extern "C" fn exp1024_d(x: f64) -> f64 {
    product_exp::<10>(x)
}

/// In-place product approximation, 8 squarings, single precision.
///
/// # Safety
/// Same contract as [`exp_v_s`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn exp256_v_s(x: *mut f32, n: usize) {
    let dst = unsafe { std::slice::from_raw_parts_mut(x, n) };
    product_expf_inplace::<8>(dst);
}

/// In-place product approximation, 10 squarings, double precision.
///
/// # Safety
/// Same contract as [`exp_v_s`].
#[unsafe(no_mangle)]
pub unsafe extern "C" fn exp1024_v_d(x: *mut f64, n: usize) {
    let dst = unsafe { std::slice::from_raw_parts_mut(x, n) };
    product_exp_inplace::<10>(dst);
}
