//! Per-call key API. Each function validates the raw key bytes, expands them into a
//! transient [Cipher] and drops (and zeroizes) the key material before returning.

use crate::aeskit::cipher::Cipher;
use crate::aeskit::error::Result;
use crate::aeskit::key::Key;

fn cipher(key: &[u8]) -> Result<Cipher> {
    Ok(Cipher::new(&Key::try_from_slice(key)?))
}

/// AES-CFB encryption under a 16, 24, or 32 byte `key`. Returns `IV || Ciphertext`.
/// See [Cipher::encrypt_cfb].
pub fn encrypt_cfb(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    cipher(key)?.encrypt_cfb(plaintext)
}

/// AES-CFB decryption of `IV || Ciphertext`. See [Cipher::decrypt_cfb].
pub fn decrypt_cfb(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    cipher(key)?.decrypt_cfb(ciphertext)
}

/// AES-CBC encryption with PKCS#7 padding under a 16, 24, or 32 byte `key`.
/// Returns `IV || Ciphertext`. See [Cipher::encrypt_cbc].
pub fn encrypt_cbc(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    cipher(key)?.encrypt_cbc(plaintext)
}

/// AES-CBC decryption of `IV || Ciphertext`, removing PKCS#7 padding.
/// See [Cipher::decrypt_cbc] for the failure cases.
pub fn decrypt_cbc(key: &[u8], ciphertext: &[u8]) -> Result<Vec<u8>> {
    cipher(key)?.decrypt_cbc(ciphertext)
}
