#![no_main]

use libfuzzer_sys::fuzz_target;
use moxexp::{
    Schraudolph, exp_inplace_seq, interp_expf_inplace, schraudolph_expf, schraudolph_expf_inplace,
};

fuzz_target!(|data: Vec<f32>| {
    let mut buf = data.clone();
    schraudolph_expf_inplace::<2>(&mut buf);
    // the vector path must agree with scalar wherever the integral part
    // converts exactly; garbage magnitudes are only required not to crash
    for (d, s) in buf.iter().zip(data.iter()) {
        if s.is_finite() && s.abs() < 1e6 {
            assert_eq!(d.to_bits(), schraudolph_expf::<2>(*s).to_bits());
        }
    }

    let mut buf = data.clone();
    interp_expf_inplace::<4>(&mut buf);

    let mut buf = data;
    exp_inplace_seq::<f32, Schraudolph<0>>(&mut buf);
});
