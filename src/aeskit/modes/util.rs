use crate::aeskit::BLOCK_SIZE;

pub const PARALLEL_THRESHOLD: usize = 4 * 1024; // decrypt in parallel if input size gt 4 KiB

/// XORs up to 16 bytes of `chunk` into a copy of `y`. Bytes of `y` past `chunk.len()` are kept.
#[inline(always)]
pub(crate) fn xor_chunks(y: &[u8; BLOCK_SIZE], chunk: &[u8]) -> [u8; BLOCK_SIZE] {
    let mut out: [u8; BLOCK_SIZE] = *y;
    for (o, c) in out.iter_mut().zip(chunk) {
        *o ^= c;
    }
    out
}

/// Copies an exact 16-byte chunk into an array. Callers pass `chunks_exact(16)` items.
#[inline(always)]
pub(crate) fn to_block(chunk: &[u8]) -> [u8; BLOCK_SIZE] {
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(chunk);
    block
}

/// Ciphertext block preceding block `i` in `IV || payload`: the IV for the first block.
#[inline(always)]
pub(crate) fn prev_block<'a>(iv: &'a [u8; BLOCK_SIZE], payload: &'a [u8], i: usize) -> &'a [u8] {
    if i == 0 {
        iv
    } else {
        &payload[(i - 1) * BLOCK_SIZE..i * BLOCK_SIZE]
    }
}
