use rand::rand_core;
use thiserror::Error;

/// AES Result type.
pub type Result<T> = std::result::Result<T, Error>;

/// AES Error type. Messages never contain key or plaintext bytes.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// Attempted to use an AES key with an input size that is not 128, 192, or 256 bits.
    #[error("invalid key length: {len} bytes (expected 16, 24, or 32)")]
    InvalidKeyLength { len: usize },

    /// OS RNG failed while generating an IV or a random key.
    #[error("OS RNG failed to supply random bytes")]
    Rng(#[from] rand_core::OsError),

    /// Ciphertext is shorter than the 16-byte IV that must prefix it.
    #[error("ciphertext too short: {len} bytes (missing 16-byte IV)")]
    CiphertextTooShort { len: usize },

    /// CBC payload (ciphertext after the IV) is not a whole number of 16-byte blocks.
    #[error("misaligned ciphertext: {len} byte CBC payload is not a multiple of 16")]
    MisalignedCiphertext { len: usize },

    /// PKCS#7 padding was malformed after decryption. Caused by corrupted or tampered
    /// ciphertext, or by decrypting with the wrong key.
    #[error("invalid PKCS#7 padding ({context})")]
    InvalidPadding { context: &'static str },
}
