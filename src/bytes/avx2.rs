use archmage::prelude::*;

use super::mask_pattern;

// ===========================================================================
// x86-64 AVX2: rite row implementations
// ===========================================================================

#[rite]
pub(super) fn invert_words_row_v3(_token: X64V3Token, row: &mut [u8], mask: u32) {
    let pattern: [u8; 32] = mask_pattern(mask);
    let m = _mm256_loadu_si256(&pattern);
    let n = row.len();
    let mut i = 0;
    while i + 32 <= n {
        let arr: &[u8; 32] = row[i..i + 32].try_into().unwrap();
        let v = _mm256_loadu_si256(arr);
        let flipped = _mm256_xor_si256(v, m);
        let out: &mut [u8; 32] = (&mut row[i..i + 32]).try_into().unwrap();
        _mm256_storeu_si256(out, flipped);
        i += 32;
    }
    for px in row[i..].chunks_exact_mut(4) {
        let v = u32::from_le_bytes([px[0], px[1], px[2], px[3]]);
        px.copy_from_slice(&(v ^ mask).to_le_bytes());
    }
}

// x86-64 arcane contiguous wrappers

#[arcane]
pub(super) fn invert_words_impl_v3(t: X64V3Token, b: &mut [u8], mask: u32) {
    invert_words_row_v3(t, b, mask);
}

// x86-64 arcane strided wrappers

#[arcane]
pub(super) fn invert_words_strided_v3(
    t: X64V3Token,
    buf: &mut [u8],
    mask: u32,
    row_bytes: usize,
    h: usize,
    stride: usize,
) {
    for y in 0..h {
        invert_words_row_v3(t, &mut buf[y * stride..][..row_bytes], mask);
    }
}
