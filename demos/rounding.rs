use ssemu::sse::{
    cvtps_pi32, cvtps_pi32_with, cvttps_pi32, get_rounding_mode, getcsr, setr_ps, RoundingMode,
    RoundingScope,
};
use ssemu::SimdConvert;

fn main() {
    // Example 1: the same lanes under every rounding mode
    let v = setr_ps(2.5, -2.5, 0.0, 0.0);
    println!("Input lanes: {:?}", v);

    for mode in [
        RoundingMode::Nearest,
        RoundingMode::Down,
        RoundingMode::Up,
        RoundingMode::TowardZero,
    ] {
        let _scope = RoundingScope::new(mode);
        println!(
            "{:>12}: csr = {:#06x}, cvtps_pi32 = {:?}",
            mode.to_string(),
            getcsr(),
            cvtps_pi32(v).to_i32x2()
        );
    }
    println!("Restored mode: {}", get_rounding_mode());

    // Example 2: truncation ignores the register, explicit context ignores it too
    println!("\ncvttps_pi32 = {:?}", cvttps_pi32(v).to_i32x2());
    println!(
        "cvtps_pi32_with(Up) = {:?}",
        cvtps_pi32_with(v, RoundingMode::Up).to_i32x2()
    );

    // Example 3: out-of-range and NaN lanes produce the integer-indefinite value
    let wild = setr_ps(3.0e9, f32::NAN, 0.0, 0.0);
    println!("\nOut of range: {:?}", cvtps_pi32(wild).to_i32x2());

    // Example 4: the parallel slice conversion carries the caller's mode to every worker
    let data: Vec<f32> = (0..1_000_000).map(|i| i as f32 + 0.5).collect();
    let _scope = RoundingScope::new(RoundingMode::Up);
    let start = std::time::Instant::now();
    let converted = data.as_slice().par_simd_to_i32();
    println!(
        "\nConverted {} values rounding up in {:?}; first = {}, last = {}",
        converted.len(),
        start.elapsed(),
        converted[0],
        converted[converted.len() - 1]
    );
}
