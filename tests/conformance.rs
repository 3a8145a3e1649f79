//! Reference-vector tables for the emulated instructions.
//!
//! Each table row is an input/output triple captured from the reference
//! hardware. Float arithmetic rows were recorded with two decimals, so those
//! are compared with a small tolerance; everything else is bit-exact.

use ssemu::sse::{
    add_ps, castps_si128, castsi128_ps, cmpneq_ps, cmpnlt_ps, cmpunord_ps, cvt_ps2pi, cvtpi8_ps,
    cvtps_pi16, cvtsi32_ss, loadh_pi, move_ss, movehl_ps, set_epi32, set_pi16, set_pi32, set_pi8,
    set_ps, set_pu16, set_pu8, setzero_ps, shuffle_ps, storeh_pi, unpackhi_ps, MmxSection,
    RoundingMode, RoundingScope, M128, M64,
};

fn assert_close(actual: M128, expected: M128, tolerance: f32) {
    for (i, (a, e)) in actual
        .to_f32x4()
        .iter()
        .zip(expected.to_f32x4())
        .enumerate()
    {
        assert!(
            (a - e).abs() <= tolerance,
            "lane {i}: {a} differs from {e} by more than {tolerance}"
        );
    }
}

#[test]
fn add_ps_table() {
    let rows = [
        (
            set_ps(782.92, -222.67, 471.90, -984.28),
            set_ps(-729.71, -713.63, 101.93, 419.08),
            set_ps(53.21, -936.30, 573.83, -565.20),
        ),
        (
            set_ps(-310.27, -266.98, 473.62, -317.54),
            set_ps(896.47, 62.00, -359.88, 461.78),
            set_ps(586.20, -204.98, 113.74, 144.24),
        ),
        (
            set_ps(-277.35, -650.32, -363.29, -263.97),
            set_ps(-142.70, -245.27, 255.99, -801.08),
            set_ps(-420.05, -895.59, -107.30, -1065.05),
        ),
        (
            set_ps(662.19, -244.69, 858.56, -832.94),
            set_ps(-70.79, 352.43, 233.94, -606.56),
            set_ps(591.40, 107.74, 1092.50, -1439.50),
        ),
    ];

    for (a, b, r) in rows {
        assert_close(add_ps(a, b), r, 0.01);
        assert_close(a + b, r, 0.01);
    }
}

#[test]
fn cmpneq_ps_table() {
    let rows = [
        (
            set_epi32(532215048, 130142512, -2127364592, 1091895543),
            set_epi32(532215048, 130142512, -2127364592, 1091895543),
            set_epi32(0, 0, 0, 0),
        ),
        (
            set_epi32(-1046985290, -1731603099, 610751781, 1112478841),
            set_epi32(-1046985290, 622608062, -1239630421, -1197092706),
            set_epi32(0, -1, -1, -1),
        ),
        (
            set_epi32(2082220393, 853275580, 1554259301, 1874019211),
            set_epi32(2082220393, 853275580, -464704033, 1874019211),
            set_epi32(0, 0, -1, 0),
        ),
        (
            set_epi32(209990814, 2072268417, -198384983, -634248146),
            set_epi32(-1549476809, -306787617, -198384983, 461233263),
            set_epi32(-1, -1, 0, -1),
        ),
    ];

    for (a, b, r) in rows {
        let result = castps_si128(cmpneq_ps(castsi128_ps(a), castsi128_ps(b)));
        assert_eq!(result, r);
    }
}

#[test]
fn cmpnlt_ps_table() {
    // Raw bit patterns, so the rows cover tiny, huge and mixed-sign lanes.
    let rows = [
        (
            set_epi32(-696394921, -747986358, -647555009, 1026098152),
            set_epi32(-633562196, -747986358, -647555009, 1026098152),
            set_epi32(-1, -1, -1, -1),
        ),
        (
            set_epi32(-452783834, -762534148, 527526057, 875267484),
            set_epi32(2135403130, -762534148, 527526057, -792882965),
            set_epi32(0, -1, -1, -1),
        ),
        (
            set_epi32(-1833897906, -1370978496, -1396909811, 612871018),
            set_epi32(-1833897906, -1370978496, 1459624563, 612871018),
            set_epi32(-1, -1, 0, -1),
        ),
        (
            set_epi32(1770608184, -1440913128, -375433996, -1167135078),
            set_epi32(1685329021, 1594341486, -749207466, -1647221832),
            set_epi32(-1, 0, 0, 0),
        ),
        (
            set_epi32(702745450, -1148209866, 305771684, 10161619),
            set_epi32(-437200102, -1148209866, 703243165, 10161619),
            set_epi32(-1, -1, 0, -1),
        ),
    ];

    for (a, b, r) in rows {
        let result = castps_si128(cmpnlt_ps(castsi128_ps(a), castsi128_ps(b)));
        assert_eq!(result, r);
    }
}

#[test]
fn cmpunord_ps_table() {
    let all = !setzero_ps();
    let rows = [
        (set_ps(1.0, 2.0, 3.0, 4.0), set_ps(1.0, 2.0, 3.0, 4.0), setzero_ps()),
        (set_ps(f32::NAN, f32::NAN, f32::NAN, f32::NAN), set_ps(f32::NAN, f32::NAN, f32::NAN, f32::NAN), all),
        (set_ps(1.0, 2.0, 3.0, f32::NAN), set_ps(1.0, 2.0, 3.0, 4.0), move_ss(setzero_ps(), all)),
    ];

    for (a, b, r) in rows {
        assert_eq!(cmpunord_ps(a, b).to_bits(), r.to_bits());
        assert_eq!(cmpunord_ps(b, a).to_bits(), r.to_bits());
    }
}

#[test]
fn cvt_ps2pi_toward_zero_table() {
    let rows = [
        (set_ps(585.40, -596.31, -33.58, -973.52), set_pi32(-33, -973)),
        (set_ps(461.40, -885.65, -130.70, 767.11), set_pi32(-130, 767)),
        (set_ps(667.28, 289.45, 167.11, -820.87), set_pi32(167, -820)),
        (set_ps(-445.67, 116.25, 836.77, -145.00), set_pi32(836, -145)),
        (set_ps(457.72, -725.98, -428.45, 251.28), set_pi32(-428, 251)),
        (set_ps(776.17, 285.46, -148.62, 251.11), set_pi32(-148, 251)),
        (set_ps(-758.68, -834.46, 247.62, 252.25), set_pi32(247, 252)),
        (set_ps(185.27, -33.00, 323.39, 851.62), set_pi32(323, 851)),
    ];

    let _scope = RoundingScope::new(RoundingMode::TowardZero);
    for (a, r) in rows {
        assert_eq!(cvt_ps2pi(a), r);
    }
}

#[test]
fn cvtps_pi16_table() {
    // Recorded under truncation; the default nearest mode may land one away.
    let rows = [
        (set_ps(-971.34, 980.33, 226.19, 352.17), set_pi16(-971, 980, 226, 352)),
        (set_ps(683.88, 462.85, 142.42, 129.11), set_pi16(683, 462, 142, 129)),
        (set_ps(283.06, 686.09, -297.54, -892.52), set_pi16(283, 686, -297, -892)),
        (set_ps(-946.49, -370.84, -468.24, 497.16), set_pi16(-946, -370, -468, 497)),
    ];

    for (a, r) in rows {
        let result = cvtps_pi16(a).to_i16x4();
        for (x, y) in result.iter().zip(r.to_i16x4()) {
            assert!((x - y).abs() <= 1, "{result:?} vs {:?}", r.to_i16x4());
        }
    }

    let _scope = RoundingScope::new(RoundingMode::TowardZero);
    for (a, r) in rows {
        assert_eq!(cvtps_pi16(a), r);
    }
}

#[test]
fn cvtsi32_ss_table() {
    let rows = [
        (set_ps(-368.26, -772.15, 700.78, -416.87), -93207, set_ps(-368.26, -772.15, 700.78, -93207.00)),
        (set_ps(774.49, 920.32, 159.83, -900.78), -99810, set_ps(774.49, 920.32, 159.83, -99810.00)),
        (set_ps(704.87, 236.14, -91.25, -708.13), 83867, set_ps(704.87, 236.14, -91.25, 83867.00)),
        (set_ps(-552.37, -873.85, 968.75, -669.38), 88818, set_ps(-552.37, -873.85, 968.75, 88818.00)),
    ];

    for (a, b, r) in rows {
        assert_eq!(cvtsi32_ss(a, b), r);
    }
}

#[test]
fn cvtpi8_ps_table() {
    let rows = [
        (set_pi8(-61, 15, 46, 20, 68, 82, 13, 113), set_ps(68.0, 82.0, 13.0, 113.0)),
        (set_pi8(67, -77, 44, -51, 66, 66, -123, 31), set_ps(66.0, 66.0, -123.0, 31.0)),
        (set_pi8(-62, 28, -11, -61, -61, -110, -20, -51), set_ps(-61.0, -110.0, -20.0, -51.0)),
        (set_pi8(-63, -73, 71, -82, 68, 25, -121, -82), set_ps(68.0, 25.0, -121.0, -82.0)),
        (set_pi8(67, 107, -121, -82, -60, 116, -88, -10), set_ps(-60.0, 116.0, -88.0, -10.0)),
    ];

    for (a, r) in rows {
        assert_eq!(cvtpi8_ps(a), r);
    }
}

#[test]
fn loadh_pi_table() {
    let rows = [
        (
            set_ps(-455.54, -740.65, -363.65, 886.57),
            [777.77f32, 785.97],
            set_ps(785.97, 777.77, -363.65, 886.57),
        ),
        (
            set_ps(-290.30, -717.24, -75.52, -178.85),
            [651.15, 282.51],
            set_ps(282.51, 651.15, -75.52, -178.85),
        ),
        (
            set_ps(-381.01, 365.46, 910.45, -366.39),
            [-543.76, -718.32],
            set_ps(-718.32, -543.76, 910.45, -366.39),
        ),
        (
            set_ps(-855.62, 166.31, -528.67, -704.53),
            [973.93, -558.08],
            set_ps(-558.08, 973.93, -528.67, -704.53),
        ),
    ];

    for (a, mem, r) in rows {
        assert_eq!(loadh_pi(a, &mem), r);
    }
}

#[test]
fn storeh_pi_table() {
    let rows = [
        (set_ps(575.54, 220.03, 206.01, 870.81), [220.03f32, 575.54]),
        (set_ps(289.58, 629.51, 767.25, 704.01), [629.51, 289.58]),
        (set_ps(627.14, 949.08, 581.33, 434.65), [949.08, 627.14]),
        (set_ps(57.99, 910.00, 605.74, 76.21), [910.00, 57.99]),
    ];

    for (a, r) in rows {
        let mut mem = [0.0f32; 2];
        storeh_pi(&mut mem, a);
        assert_eq!(mem, r);
    }
}

#[test]
fn movehl_ps_table() {
    let rows = [
        (
            set_ps(448.42, 812.28, -569.58, -612.98),
            set_ps(-260.91, 851.49, -543.31, -452.37),
            set_ps(448.42, 812.28, -260.91, 851.49),
        ),
        (
            set_ps(164.79, -510.29, -875.53, 338.43),
            set_ps(195.22, -222.31, -247.28, -544.38),
            set_ps(164.79, -510.29, 195.22, -222.31),
        ),
        (
            set_ps(632.26, -381.04, -465.25, -913.48),
            set_ps(-790.33, -504.12, -321.51, -760.29),
            set_ps(632.26, -381.04, -790.33, -504.12),
        ),
    ];

    for (a, b, r) in rows {
        assert_eq!(movehl_ps(a, b), r);
    }
}

#[test]
fn unpackhi_ps_table() {
    let rows = [
        (
            set_ps(-756.38, -450.47, 901.78, 859.60),
            set_ps(-17.95, -383.47, 601.72, 328.61),
            set_ps(-17.95, -756.38, -383.47, -450.47),
        ),
        (
            set_ps(-696.67, -318.67, -746.84, 486.97),
            set_ps(76.54, -173.13, 775.95, 744.80),
            set_ps(76.54, -696.67, -173.13, -318.67),
        ),
        (
            set_ps(-437.50, -751.51, -255.04, 713.97),
            set_ps(-835.16, 838.19, -968.67, -800.39),
            set_ps(-835.16, -437.50, 838.19, -751.51),
        ),
    ];

    for (a, b, r) in rows {
        assert_eq!(unpackhi_ps(a, b), r);
    }
}

#[test]
fn shuffle_ps_selector() {
    let a = set_ps(4.0, 3.0, 2.0, 1.0);
    let b = set_ps(8.0, 7.0, 6.0, 5.0);
    // 11 = 0b00_00_10_11
    assert_eq!(shuffle_ps::<11>(a, b), set_ps(5.0, 5.0, 3.0, 4.0));
}

#[test]
fn mulhi_pu16_table() {
    let rows = [
        (
            set_pu16(53192, 40647, 19455, 638),
            set_pu16(25315, 56464, 55360, 30008),
            set_pu16(20546, 35020, 16434, 292),
        ),
        (
            set_pu16(37591, 35425, 33771, 61304),
            set_pu16(7821, 6117, 18035, 21492),
            set_pu16(4486, 3306, 9293, 20104),
        ),
        (
            set_pu16(56491, 868, 60755, 8677),
            set_pu16(58515, 60020, 23196, 54339),
            set_pu16(50439, 794, 21503, 7194),
        ),
    ];

    let mmx = MmxSection::enter();
    for (a, b, r) in rows {
        assert_eq!(mmx.mulhi_pu16(a, b), r);
    }
    mmx.exit();
}

#[test]
fn avg_pu16_table() {
    let rows = [
        (
            set_pu16(984, 30280, 42568, 40084),
            set_pu16(27500, 27572, 25285, 55528),
            set_pu16(14242, 28926, 33927, 47806),
        ),
        (
            set_pu16(16799, 60083, 41622, 59771),
            set_pu16(44269, 15826, 52483, 45725),
            set_pu16(30534, 37955, 47053, 52748),
        ),
        (
            set_pu16(41380, 64067, 33526, 10279),
            set_pu16(34327, 29328, 8579, 1111),
            set_pu16(37854, 46698, 21053, 5695),
        ),
        (
            set_pu16(18628, 48112, 3068, 50432),
            set_pu16(746, 22132, 21846, 48900),
            set_pu16(9687, 35122, 12457, 49666),
        ),
    ];

    let mmx = MmxSection::enter();
    for (a, b, r) in rows {
        assert_eq!(mmx.avg_pu16(a, b), r);
    }
    mmx.exit();
}

#[test]
fn max_pu8_table() {
    let rows = [
        (
            set_pu8(95, 35, 185, 136, 198, 90, 109, 138),
            set_pu8(165, 90, 139, 114, 195, 147, 62, 160),
            set_pu8(165, 90, 185, 136, 198, 147, 109, 160),
        ),
        (
            set_pu8(192, 104, 198, 106, 121, 208, 222, 80),
            set_pu8(14, 66, 107, 237, 19, 244, 121, 240),
            set_pu8(192, 104, 198, 237, 121, 244, 222, 240),
        ),
        (
            set_pu8(247, 220, 6, 72, 190, 176, 185, 129),
            set_pu8(102, 233, 69, 70, 65, 36, 164, 122),
            set_pu8(247, 233, 69, 72, 190, 176, 185, 129),
        ),
        (
            set_pu8(71, 199, 130, 210, 23, 163, 117, 223),
            set_pu8(47, 138, 43, 60, 152, 77, 246, 8),
            set_pu8(71, 199, 130, 210, 152, 163, 246, 223),
        ),
    ];

    let mmx = MmxSection::enter();
    for (a, b, r) in rows {
        assert_eq!(mmx.max_pu8(a, b), r);
    }
    mmx.exit();
}

#[test]
fn min_pi16_table() {
    let rows = [
        (
            set_pi16(-17712, 12551, -23434, -13133),
            set_pi16(26266, -20490, 7912, 29803),
            set_pi16(-17712, -20490, -23434, -13133),
        ),
        (
            set_pi16(-24457, 29877, -26735, -29539),
            set_pi16(11486, 18014, 20714, -14577),
            set_pi16(-24457, 18014, -26735, -29539),
        ),
        (
            set_pi16(-31520, 3559, -26842, 21046),
            set_pi16(13846, -3714, 16375, 18158),
            set_pi16(-31520, -3714, -26842, 18158),
        ),
        (
            set_pi16(14557, 3319, 16372, 28742),
            set_pi16(-29436, 20833, -11479, -29779),
            set_pi16(-29436, 3319, -11479, -29779),
        ),
    ];

    let mmx = MmxSection::enter();
    for (a, b, r) in rows {
        assert_eq!(mmx.min_pi16(a, b), r);
    }
    mmx.exit();
}

#[test]
fn sad_pu8_table() {
    let rows = [
        (
            set_pu8(158, 38, 204, 230, 242, 108, 135, 100),
            set_pu8(130, 168, 102, 233, 237, 176, 22, 158),
            set_pu16(0, 0, 0, 507),
        ),
        (
            set_pu8(15, 252, 176, 193, 115, 44, 0, 83),
            set_pu8(99, 169, 76, 203, 218, 181, 138, 226),
            set_pu16(0, 0, 0, 798),
        ),
        (
            set_pu8(230, 50, 152, 234, 252, 79, 170, 145),
            set_pu8(225, 219, 116, 170, 250, 129, 102, 178),
            set_pu16(0, 0, 0, 427),
        ),
    ];

    let mmx = MmxSection::enter();
    for (a, b, r) in rows {
        assert_eq!(mmx.sad_pu8(a, b), r);
    }
    mmx.exit();
}

#[test]
fn legacy_lane_access_table() {
    let mmx = MmxSection::enter();

    let a = set_pi16(24440, -12101, -13621, -14757);
    assert_eq!(mmx.extract_pi16::<2>(a) as i16, -12101);
    assert_eq!(mmx.extract_pi16::<3>(a) as i16, 24440);

    assert_eq!(mmx.movemask_pi8(set_pi8(7, -33, 4, -58, -87, 16, 83, -97)), 89);
    assert_eq!(mmx.movemask_pi8(set_pi8(-84, 23, 93, 30, 87, 114, 66, 94)), 128);

    let a = set_pi8(-5, 112, 109, -9, -10, -30, -103, -13);
    let mask = set_pi8(-112, 64, -92, 19, -70, -49, -42, 75);
    let mut mem = M64::from_i8x8([-67, -21, 107, 96, -47, 95, 34, -108]).to_u8x8();
    mmx.maskmove_si64(a, mask, &mut mem);
    assert_eq!(
        M64::from_u8x8(mem).to_i8x8(),
        [-67, -103, -30, -10, -47, 109, 34, -5]
    );

    let a = set_pi16(4, 3, 2, 1);
    assert_eq!(mmx.shuffle_pi16::<5>(a), set_pi16(1, 1, 2, 2));
}
