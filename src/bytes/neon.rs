use archmage::prelude::*;

use super::mask_pattern;

// ===========================================================================
// ARM NEON: rite row implementations
// ===========================================================================

#[rite]
pub(super) fn invert_words_row_arm_v2(_token: Arm64V2Token, row: &mut [u8], mask: u32) {
    use core::arch::aarch64::veorq_u8;
    let pattern: [u8; 16] = mask_pattern(mask);
    let m = safe_unaligned_simd::aarch64::vld1q_u8(&pattern);
    let n = row.len();
    let mut i = 0;
    while i + 16 <= n {
        let arr: &[u8; 16] = row[i..i + 16].try_into().unwrap();
        let v = safe_unaligned_simd::aarch64::vld1q_u8(arr);
        let out: &mut [u8; 16] = (&mut row[i..i + 16]).try_into().unwrap();
        safe_unaligned_simd::aarch64::vst1q_u8(out, veorq_u8(v, m));
        i += 16;
    }
    for px in row[i..].chunks_exact_mut(4) {
        let v = u32::from_le_bytes([px[0], px[1], px[2], px[3]]);
        px.copy_from_slice(&(v ^ mask).to_le_bytes());
    }
}

#[arcane]
pub(super) fn invert_words_impl_arm_v2(t: Arm64V2Token, b: &mut [u8], mask: u32) {
    invert_words_row_arm_v2(t, b, mask);
}

#[arcane]
pub(super) fn invert_words_strided_arm_v2(
    t: Arm64V2Token,
    buf: &mut [u8],
    mask: u32,
    row_bytes: usize,
    h: usize,
    stride: usize,
) {
    for y in 0..h {
        invert_words_row_arm_v2(t, &mut buf[y * stride..][..row_bytes], mask);
    }
}
