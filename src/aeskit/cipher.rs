use crate::aeskit::BLOCK_SIZE;
use crate::aeskit::core::BlockCipher;
use crate::aeskit::error::Result;
use crate::aeskit::key::Key;
use crate::aeskit::modes::*;
use crate::aeskit::padding::{pad, unpad};
use crate::aeskit::util::{random_iv, split_iv};

/// Provides encryption and decryption functions for AES in modes [CFB](crate::Cipher::encrypt_cfb)
/// and [CBC](crate::Cipher::encrypt_cbc).
/// Instantiated with an AES [Key], which is expanded into round keys and stored in the instance.
///
/// A `Cipher` is immutable once built, so one instance can be shared between threads.
///
/// **Neither mode authenticates the ciphertext.** Modified ciphertext decrypts to modified
/// plaintext (or to a padding error in CBC) without any other warning.
#[derive(Clone)]
pub struct Cipher {
    block: BlockCipher,
}

impl Cipher {
    /// Generates round keys from provided key and stores in the returned instance.
    pub fn new(key: &Key) -> Self {
        Self {
            block: BlockCipher::new(key),
        }
    }

    /// **Cipher feedback** encryption (CFB-128).
    ///
    /// Generates a random 16-byte initialisation vector (IV). The first plaintext block is
    /// `XOR`'d with the encrypted IV, every later block with the encryption of the previous
    /// ciphertext block. No padding is needed, the ciphertext is as long as the plaintext.
    ///
    /// Output is formatted as `IV (16 bytes) || Ciphertext`
    ///
    /// Returns an [Rng](crate::Error::Rng) error if the OS RNG cannot supply the IV. On some
    /// platforms the OS RNG blocks until its entropy pool is seeded.
    pub fn encrypt_cfb(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let iv = random_iv()?;
        Ok(self.encrypt_cfb_with_iv(plaintext, &iv))
    }

    /// CFB encryption with a caller-supplied IV. Output format matches [encrypt_cfb](Cipher::encrypt_cfb).
    ///
    /// **Important**: intended for known-answer tests. Reusing an IV with the same key
    /// reveals the XOR of the two plaintexts' first blocks.
    pub fn encrypt_cfb_with_iv(&self, plaintext: &[u8], iv: &[u8; BLOCK_SIZE]) -> Vec<u8> {
        let mut ciphertext = Vec::with_capacity(BLOCK_SIZE + plaintext.len());
        ciphertext.extend_from_slice(iv);
        ciphertext.append(&mut cfb_core_enc(plaintext, &self.block, iv));
        ciphertext
    }

    /// **Cipher feedback** decryption.
    ///
    /// Assumes format matches output of encryption: `IV (16 bytes) || Ciphertext`.
    /// Returns a [CiphertextTooShort](crate::Error::CiphertextTooShort) error if the input
    /// cannot hold an IV.
    pub fn decrypt_cfb(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let (iv, payload) = split_iv(ciphertext)?;
        Ok(cfb_core_dec(payload, &self.block, &iv))
    }

    /// **Cipher block chaining** encryption.
    ///
    /// PKCS#7 pads the plaintext, then generates a random 16-byte IV. Each padded block is
    /// `XOR`'d with the previous ciphertext block (the IV for the first) and encrypted.
    ///
    /// Output is formatted as `IV (16 bytes) || Ciphertext`, where the ciphertext is the
    /// plaintext length rounded up to the next multiple of 16 (always at least one block).
    ///
    /// Returns an [Rng](crate::Error::Rng) error if the OS RNG cannot supply the IV.
    pub fn encrypt_cbc(&self, plaintext: &[u8]) -> Result<Vec<u8>> {
        let padded = pad(plaintext, BLOCK_SIZE);
        let iv = random_iv()?;
        Ok(self.encrypt_padded_cbc(&padded, &iv))
    }

    /// CBC encryption with a caller-supplied IV. Output format matches [encrypt_cbc](Cipher::encrypt_cbc).
    ///
    /// **Important**: intended for known-answer tests. IVs must be unpredictable in CBC.
    pub fn encrypt_cbc_with_iv(&self, plaintext: &[u8], iv: &[u8; BLOCK_SIZE]) -> Vec<u8> {
        self.encrypt_padded_cbc(&pad(plaintext, BLOCK_SIZE), iv)
    }

    /// **Cipher block chaining** decryption.
    ///
    /// Assumes format matches output of encryption: `IV (16 bytes) || Ciphertext`.
    ///
    /// Returns:
    /// - the unpadded plaintext if decryption was successful.
    /// - [CiphertextTooShort](crate::Error::CiphertextTooShort) error if the input cannot hold an IV.
    /// - [MisalignedCiphertext](crate::Error::MisalignedCiphertext) error if the ciphertext after
    ///   the IV is not a whole number of blocks.
    /// - [InvalidPadding](crate::Error::InvalidPadding) error if the decrypted padding is
    ///   malformed. This usually means the ciphertext was modified or the key is wrong.
    ///
    /// Do not report padding failures back to an untrusted sender: distinguishable padding
    /// errors act as a padding oracle against unauthenticated CBC.
    pub fn decrypt_cbc(&self, ciphertext: &[u8]) -> Result<Vec<u8>> {
        let (iv, payload) = split_iv(ciphertext)?;
        let mut plaintext = cbc_core_dec(payload, &self.block, &iv)?;

        let len = unpad(&plaintext, BLOCK_SIZE)?.len();
        plaintext.truncate(len);
        Ok(plaintext)
    }

    fn encrypt_padded_cbc(&self, padded: &[u8], iv: &[u8; BLOCK_SIZE]) -> Vec<u8> {
        let mut ciphertext = Vec::with_capacity(BLOCK_SIZE + padded.len());
        ciphertext.extend_from_slice(iv);
        ciphertext.append(&mut cbc_core_enc(padded, &self.block, iv));
        ciphertext
    }
}
