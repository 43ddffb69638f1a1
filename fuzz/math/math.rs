#![no_main]

use libfuzzer_sys::fuzz_target;
use moxexp::{
    interp_exp, interp_expf, product_exp, product_expf, schraudolph_exp, schraudolph_expf,
};

fuzz_target!(|data: u64| {
    let lo = data.to_ne_bytes();

    let z_f32 = f32::from_bits(u32::from_ne_bytes([lo[0], lo[1], lo[2], lo[3]]));
    let z_f64 = f64::from_bits(data);

    _ = schraudolph_expf::<0>(z_f32);
    _ = schraudolph_expf::<1>(z_f32);
    _ = schraudolph_expf::<2>(z_f32);
    _ = schraudolph_expf::<3>(z_f32);
    _ = schraudolph_expf::<4>(z_f32);
    _ = schraudolph_expf::<5>(z_f32);
    _ = schraudolph_exp::<0>(z_f64);
    _ = schraudolph_exp::<2>(z_f64);
    _ = schraudolph_exp::<5>(z_f64);
    _ = interp_expf::<1>(z_f32);
    _ = interp_expf::<3>(z_f32);
    _ = interp_expf::<5>(z_f32);
    _ = interp_exp::<2>(z_f64);
    _ = interp_exp::<4>(z_f64);
    _ = product_expf::<8>(z_f32);
    _ = product_expf::<12>(z_f32);
    _ = product_exp::<10>(z_f64);
    _ = product_exp::<16>(z_f64);
});
