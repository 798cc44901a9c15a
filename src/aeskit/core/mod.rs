//! Single-block AES transforms. The block primitive itself comes from the `aes` crate; this
//! module picks AES-128/192/256 from a validated [Key] and exposes `encrypt_block` and
//! `decrypt_block` on plain byte arrays for the chaining modes.

use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::{Aes128, Aes192, Aes256, Block};

use crate::aeskit::key::{Key, KeyBytes};
use crate::aeskit::BLOCK_SIZE;

/// Expanded AES key schedule. Round keys are zeroized on drop by the `aes` crate.
#[derive(Clone)]
pub(crate) enum BlockCipher {
    Aes128(Aes128),
    Aes192(Aes192),
    Aes256(Aes256),
}

impl BlockCipher {
    /// Runs the key schedule. Infallible, [Key] guarantees a valid length.
    pub(crate) fn new(key: &Key) -> Self {
        match key.bytes() {
            KeyBytes::K128(k) => BlockCipher::Aes128(Aes128::new(&(*k).into())),
            KeyBytes::K192(k) => BlockCipher::Aes192(Aes192::new(&(*k).into())),
            KeyBytes::K256(k) => BlockCipher::Aes256(Aes256::new(&(*k).into())),
        }
    }

    /// Forward AES transform of one 16-byte block.
    #[inline(always)]
    pub(crate) fn encrypt_block(&self, input: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let mut block = Block::from(*input);
        match self {
            BlockCipher::Aes128(c) => c.encrypt_block(&mut block),
            BlockCipher::Aes192(c) => c.encrypt_block(&mut block),
            BlockCipher::Aes256(c) => c.encrypt_block(&mut block),
        }
        to_array(&block)
    }

    /// Inverse AES transform of one 16-byte block.
    #[inline(always)]
    pub(crate) fn decrypt_block(&self, input: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let mut block = Block::from(*input);
        match self {
            BlockCipher::Aes128(c) => c.decrypt_block(&mut block),
            BlockCipher::Aes192(c) => c.decrypt_block(&mut block),
            BlockCipher::Aes256(c) => c.decrypt_block(&mut block),
        }
        to_array(&block)
    }
}

#[inline(always)]
fn to_array(block: &Block) -> [u8; BLOCK_SIZE] {
    let mut out = [0u8; BLOCK_SIZE];
    out.copy_from_slice(block);
    out
}
