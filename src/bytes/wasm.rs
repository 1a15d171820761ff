use archmage::prelude::*;

// ===========================================================================
// WASM SIMD128: rite row implementations
// ===========================================================================

#[rite]
pub(super) fn invert_words_row_wasm128(_token: Wasm128Token, row: &mut [u8], mask: u32) {
    use core::arch::wasm32::{u32x4_splat, v128_xor};
    // wasm32 is little-endian, so lanes match the byte order of `mask`.
    let m = u32x4_splat(mask);
    let n = row.len();
    let mut i = 0;
    while i + 16 <= n {
        let arr: &[u8; 16] = row[i..i + 16].try_into().unwrap();
        let v = safe_unaligned_simd::wasm32::v128_load(arr);
        let out: &mut [u8; 16] = (&mut row[i..i + 16]).try_into().unwrap();
        safe_unaligned_simd::wasm32::v128_store(out, v128_xor(v, m));
        i += 16;
    }
    for px in row[i..].chunks_exact_mut(4) {
        let v = u32::from_le_bytes([px[0], px[1], px[2], px[3]]);
        px.copy_from_slice(&(v ^ mask).to_le_bytes());
    }
}

#[arcane]
pub(super) fn invert_words_impl_wasm128(t: Wasm128Token, b: &mut [u8], mask: u32) {
    invert_words_row_wasm128(t, b, mask);
}

#[arcane]
pub(super) fn invert_words_strided_wasm128(
    t: Wasm128Token,
    buf: &mut [u8],
    mask: u32,
    row_bytes: usize,
    h: usize,
    stride: usize,
) {
    for y in 0..h {
        invert_words_row_wasm128(t, &mut buf[y * stride..][..row_bytes], mask);
    }
}
