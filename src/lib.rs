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
//! Fast, approximate implementations of the exponential function for `f32`
//! and `f64`, trading accuracy for speed through the IEEE-754 bit layout
//! instead of a true transcendental series.
//!
//! Three families are provided, each selected entirely at compile time:
//!
//! - [`Schraudolph`]: the classic bit trick, refined by fixed polynomial
//!   fits of the fractional part; degrees 0 to 5.
//! - [`Interpolative`]: the same bit reassembly with endpoint-constrained
//!   fits, continuous and monotone across power-of-two boundaries.
//! - [`Product`]: repeated squaring of `1 + x/2^K`; no bit manipulation.
//!
//! All evaluations are pure, stateless and allocation free. Special inputs
//! (NaN, infinities, |x·log2(e)| beyond the exponent range) produce
//! meaningless but non-crashing results; validation belongs to the caller.
#![allow(clippy::manual_clamp, clippy::excessive_precision)]
#![deny(unreachable_pub)]
#![cfg_attr(
    not(any(
        feature = "avx",
        feature = "sse",
        feature = "neon",
        feature = "ffi"
    )),
    forbid(unsafe_code)
)]
mod apply;
mod common;
#[cfg(feature = "ffi")]
pub mod ffi;
mod interpolative;
mod product;
mod raw_float;
mod schraudolph;
mod strategy;

pub use apply::{exp_batch, exp_inplace, exp_inplace_seq};
pub use interpolative::{
    Interpolative, interp_exp, interp_exp_inplace, interp_expf, interp_expf_inplace,
};
pub use product::{Product, product_exp, product_exp_inplace, product_expf, product_expf_inplace};
pub use raw_float::RawFloat;
pub use schraudolph::{
    Schraudolph, schraudolph_exp, schraudolph_exp_inplace, schraudolph_expf,
    schraudolph_expf_inplace,
};
pub use strategy::{Correction, ExpStrategy};
