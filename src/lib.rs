//! AES encryption of opaque byte payloads in CFB and CBC modes.
//!
//! Every encryption draws a fresh 16-byte IV from the OS RNG and returns `IV || Ciphertext`.
//! CFB ciphertext is as long as the plaintext; CBC ciphertext is PKCS#7 padded to a whole
//! number of 16-byte blocks (at least one).
//!
//! ```
//! # fn main() -> aeskit::Result<()> {
//! let key = [0u8; 32];
//!
//! let ciphertext = aeskit::encrypt_cbc(&key, b"hello world")?;
//! assert_eq!(ciphertext.len(), 32); // 16 byte IV + one padded block
//! assert_eq!(aeskit::decrypt_cbc(&key, &ciphertext)?, b"hello world");
//!
//! let ciphertext = aeskit::encrypt_cfb(&key, b"hello world")?;
//! assert_eq!(ciphertext.len(), 16 + 11);
//! assert_eq!(aeskit::decrypt_cfb(&key, &ciphertext)?, b"hello world");
//! # Ok(())
//! # }
//! ```
//!
//! **No integrity protection.** CBC and CFB only provide confidentiality: modified
//! ciphertext is not detected, and CBC padding errors can act as a padding oracle. Pair
//! with a MAC, or use an AEAD mode, when ciphertext may be tampered with.

mod aeskit;

pub use aeskit::{
    BLOCK_SIZE, Cipher, Error, Key, KeySize, Result, decrypt_cbc, decrypt_cfb, encrypt_cbc,
    encrypt_cfb, pad, random_key, unpad,
};
