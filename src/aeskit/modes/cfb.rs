use rayon::prelude::*;

use crate::aeskit::BLOCK_SIZE;
use crate::aeskit::core::BlockCipher;
use crate::aeskit::modes::util::{PARALLEL_THRESHOLD, prev_block, to_block, xor_chunks};

/// Core CFB-128 encryption algorithm. The keystream for each block is the encryption of the
/// previous ciphertext block (the IV for the first), so encryption is inherently serial.
/// A trailing partial block uses the leading bytes of its keystream block.
pub fn cfb_core_enc(plaintext: &[u8], cipher: &BlockCipher, iv: &[u8; BLOCK_SIZE]) -> Vec<u8> {
    let mut output = Vec::with_capacity(plaintext.len());
    let mut feedback = *iv;

    for chunk in plaintext.chunks(BLOCK_SIZE) {
        let keystream = cipher.encrypt_block(&feedback);
        let ct = xor_chunks(&keystream, chunk);
        output.extend_from_slice(&ct[..chunk.len()]);
        // only a full block feeds back, and a partial block is always the last one
        feedback = ct;
    }

    output
}

/// Core CFB-128 decryption algorithm, serial.
pub fn cfb_core_dec_serial(payload: &[u8], cipher: &BlockCipher, iv: &[u8; BLOCK_SIZE]) -> Vec<u8> {
    let mut output = Vec::with_capacity(payload.len());
    let mut feedback = *iv;

    for chunk in payload.chunks(BLOCK_SIZE) {
        let keystream = cipher.encrypt_block(&feedback);
        let pt = xor_chunks(&keystream, chunk);
        output.extend_from_slice(&pt[..chunk.len()]);
        if chunk.len() == BLOCK_SIZE {
            feedback = to_block(chunk);
        }
    }

    output
}

/// Core CFB-128 decryption algorithm, parallel. The keystream for block `i` depends only on
/// ciphertext block `i - 1`, which is already known.
pub fn cfb_core_dec_parallel(
    payload: &[u8],
    cipher: &BlockCipher,
    iv: &[u8; BLOCK_SIZE],
) -> Vec<u8> {
    let mut output = vec![0u8; payload.len()];

    output
        .par_chunks_mut(BLOCK_SIZE)
        .zip(payload.par_chunks(BLOCK_SIZE))
        .enumerate()
        .for_each(|(i, (out_chunk, in_chunk))| {
            let keystream = cipher.encrypt_block(&to_block(prev_block(iv, payload, i)));
            let pt = xor_chunks(&keystream, in_chunk);
            out_chunk.copy_from_slice(&pt[..in_chunk.len()]);
        });

    output
}

/// Picks serial or parallel decryption by payload size.
pub fn cfb_core_dec(payload: &[u8], cipher: &BlockCipher, iv: &[u8; BLOCK_SIZE]) -> Vec<u8> {
    if payload.len() > PARALLEL_THRESHOLD {
        cfb_core_dec_parallel(payload, cipher, iv)
    } else {
        cfb_core_dec_serial(payload, cipher, iv)
    }
}
