use rand::TryRngCore;
use rand::rngs::OsRng;

use crate::aeskit::error::*;
use crate::aeskit::BLOCK_SIZE;

/// Fills a fresh array from the OS RNG.
///
/// `getrandom` may block until the kernel entropy pool is seeded (only a concern very early
/// in boot on some platforms).
pub(crate) fn random_bytes<const N: usize>() -> Result<[u8; N]> {
    let mut bytes = [0u8; N];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(bytes)
}

pub(crate) fn random_iv() -> Result<[u8; BLOCK_SIZE]> {
    random_bytes()
}

/// Splits `IV || payload`, rejecting input too short to hold the IV.
pub(crate) fn split_iv(ciphertext: &[u8]) -> Result<([u8; BLOCK_SIZE], &[u8])> {
    if ciphertext.len() < BLOCK_SIZE {
        return Err(Error::CiphertextTooShort {
            len: ciphertext.len(),
        });
    }

    let (iv_bytes, payload) = ciphertext.split_at(BLOCK_SIZE);
    let mut iv = [0u8; BLOCK_SIZE];
    iv.copy_from_slice(iv_bytes);
    Ok((iv, payload))
}
