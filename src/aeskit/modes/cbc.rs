use rayon::prelude::*;

use crate::aeskit::BLOCK_SIZE;
use crate::aeskit::core::BlockCipher;
use crate::aeskit::error::*;
use crate::aeskit::modes::util::{PARALLEL_THRESHOLD, prev_block, to_block, xor_chunks};

/// Core CBC encryption algorithm. `padded` must already be a whole number of blocks.
/// Each block is XOR'd with the previous ciphertext block (the IV for the first) and then
/// encrypted. Inherently serial.
pub fn cbc_core_enc(padded: &[u8], cipher: &BlockCipher, iv: &[u8; BLOCK_SIZE]) -> Vec<u8> {
    debug_assert!(padded.len() % BLOCK_SIZE == 0);

    let mut ciphertext = vec![0u8; padded.len()];
    let mut prev = *iv;

    for (pt, ct) in padded
        .chunks_exact(BLOCK_SIZE)
        .zip(ciphertext.chunks_exact_mut(BLOCK_SIZE))
    {
        prev = cipher.encrypt_block(&xor_chunks(&prev, pt));
        ct.copy_from_slice(&prev);
    }

    ciphertext
}

/// Core CBC decryption algorithm, serial. Returns the still-padded plaintext.
pub fn cbc_core_dec_serial(
    payload: &[u8],
    cipher: &BlockCipher,
    iv: &[u8; BLOCK_SIZE],
) -> Result<Vec<u8>> {
    check_aligned(payload)?;

    let mut plaintext = vec![0u8; payload.len()];
    let mut prev = *iv;

    for (ct, pt) in payload
        .chunks_exact(BLOCK_SIZE)
        .zip(plaintext.chunks_exact_mut(BLOCK_SIZE))
    {
        let ct_block = to_block(ct);
        let dec = cipher.decrypt_block(&ct_block);
        pt.copy_from_slice(&xor_chunks(&dec, &prev));
        prev = ct_block;
    }

    Ok(plaintext)
}

/// Core CBC decryption algorithm, parallel. Each plaintext block only needs its own
/// ciphertext block and the one before it, so blocks are decrypted independently.
pub fn cbc_core_dec_parallel(
    payload: &[u8],
    cipher: &BlockCipher,
    iv: &[u8; BLOCK_SIZE],
) -> Result<Vec<u8>> {
    check_aligned(payload)?;

    let mut plaintext = vec![0u8; payload.len()];

    plaintext
        .par_chunks_exact_mut(BLOCK_SIZE)
        .zip(payload.par_chunks_exact(BLOCK_SIZE))
        .enumerate()
        .for_each(|(i, (pt, ct))| {
            let dec = cipher.decrypt_block(&to_block(ct));
            pt.copy_from_slice(&xor_chunks(&dec, prev_block(iv, payload, i)));
        });

    Ok(plaintext)
}

/// Picks serial or parallel decryption by payload size.
pub fn cbc_core_dec(payload: &[u8], cipher: &BlockCipher, iv: &[u8; BLOCK_SIZE]) -> Result<Vec<u8>> {
    if payload.len() > PARALLEL_THRESHOLD {
        cbc_core_dec_parallel(payload, cipher, iv)
    } else {
        cbc_core_dec_serial(payload, cipher, iv)
    }
}

fn check_aligned(payload: &[u8]) -> Result<()> {
    if payload.len() % BLOCK_SIZE != 0 {
        return Err(Error::MisalignedCiphertext {
            len: payload.len(),
        });
    }
    Ok(())
}
