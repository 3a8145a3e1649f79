use ssemu::config::Config;
use ssemu::sse::{RoundingMode, RoundingScope};
use ssemu::{SimdAdd, SimdApprox, SimdConvert, SimdDiv, SimdMul, SimdSub};

#[test]
fn test_parallel_add_small_array() {
    let a = vec![1.0f32, -2.0, 3.0, -4.0, 5.0];
    let b = vec![0.5f32, 0.5, 0.5, 0.5, 0.5];
    let result = a.as_slice().par_simd_add(b.as_slice());
    let expected = vec![1.5f32, -1.5, 3.5, -3.5, 5.5];

    for (actual, expected) in result.iter().zip(expected.iter()) {
        assert_eq!(actual, expected, "par_simd_add failed: {} != {}", actual, expected);
    }
}

#[test]
fn test_parallel_methods_large_array() {
    let len = Config::get().parallel_threshold * 2 + 3;
    let a: Vec<f32> = (0..len).map(|i| if i % 2 == 0 { i as f32 } else { -(i as f32) }).collect();
    let b: Vec<f32> = (0..len).map(|i| (i % 7) as f32 + 1.0).collect();

    let add = a.as_slice().par_simd_add(b.as_slice());
    let sub = a.as_slice().par_simd_sub(b.as_slice());
    let mul = a.as_slice().par_simd_mul(b.as_slice());
    let div = a.as_slice().par_simd_div(b.as_slice());

    assert_eq!(add, a.as_slice().scalar_add(b.as_slice()));
    assert_eq!(sub, a.as_slice().scalar_sub(b.as_slice()));
    assert_eq!(mul, a.as_slice().scalar_mul(b.as_slice()));
    assert_eq!(div, a.as_slice().scalar_div(b.as_slice()));
}

#[test]
fn test_sqrt_methods() {
    let data = vec![0.0f32, 1.0, 4.0, 9.0, 16.0];
    let expected = vec![0.0f32, 1.0, 2.0, 3.0, 4.0];

    assert_eq!(data.as_slice().simd_sqrt(), expected);
    assert_eq!(data.as_slice().par_simd_sqrt(), expected);
    assert_eq!(data.as_slice().scalar_sqrt(), expected);
}

#[test]
fn test_estimate_methods() {
    let data = vec![1.0f32, 2.0, 0.5, 8.0, 0.0, -0.0];
    let rcp = data.as_slice().simd_rcp();
    let rsqrt = data.as_slice().par_simd_rsqrt();

    for (x, r) in data.iter().zip(rcp.iter()).take(4) {
        assert!((r * x - 1.0).abs() <= 1.5 / 4096.0, "rcp({}) = {}", x, r);
    }
    assert_eq!(rcp[4], f32::INFINITY);
    assert_eq!(rcp[5], f32::NEG_INFINITY);

    for (x, r) in data.iter().zip(rsqrt.iter()).take(4) {
        assert!((r * x.sqrt() - 1.0).abs() <= 1.5 / 4096.0, "rsqrt({}) = {}", x, r);
    }
    assert_eq!(rsqrt[4], f32::INFINITY);
    assert_eq!(data.as_slice().par_simd_rcp(), rcp);
}

#[test]
fn test_convert_methods_follow_rounding_mode() {
    let data = vec![0.5f32, 1.5, -0.5, -1.5, 2.6, 1.0e10, f32::NAN];
    // Independent of SSEMU_ROUNDING_MODE.
    let _nearest = RoundingScope::new(RoundingMode::Nearest);

    assert_eq!(data.as_slice().simd_to_i32(), vec![0, 2, 0, -2, 3, i32::MIN, i32::MIN]);
    assert_eq!(
        data.as_slice().simd_to_i32_truncated(),
        vec![0, 1, 0, -1, 2, i32::MIN, i32::MIN]
    );

    let scope = RoundingScope::new(RoundingMode::Down);
    assert_eq!(data.as_slice().par_simd_to_i32(), vec![0, 1, -1, -2, 2, i32::MIN, i32::MIN]);
    assert_eq!(scope.previous(), RoundingMode::Nearest);
    drop(scope);

    assert_eq!(data.as_slice().scalar_to_i32(), data.as_slice().simd_to_i32());
}

#[test]
fn test_threshold_selection() {
    let small = vec![1.0f32; 10];
    let result_small = small.as_slice().par_simd_mul(small.as_slice());
    assert_eq!(result_small.len(), 10);

    let large = vec![1.0f32; Config::get().parallel_threshold + 1];
    let result_large = large.as_slice().par_simd_mul(large.as_slice());
    assert_eq!(result_large.len(), large.len());

    assert!(result_small.iter().chain(result_large.iter()).all(|&v| v == 1.0));
}
