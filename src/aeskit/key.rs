//! Defines the [`Key`] struct, which holds a valid AES key of 128, 192, or 256 bits.
//! Keys can be randomly generated or constructed from an existing byte slice.

use std::fmt;

use zeroize::Zeroize;

use crate::aeskit::error::{Error, Result};
use crate::aeskit::util::random_bytes;

/// Supported AES key sizes.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum KeySize {
    Bits128,
    Bits192,
    Bits256,
}

impl KeySize {
    /// Length of a key of this size, in bytes.
    pub fn byte_len(self) -> usize {
        match self {
            KeySize::Bits128 => 16,
            KeySize::Bits192 => 24,
            KeySize::Bits256 => 32,
        }
    }
}

#[derive(Clone, PartialEq, Eq)]
pub(crate) enum KeyBytes {
    K128([u8; 16]),
    K192([u8; 24]),
    K256([u8; 32]),
}

/// Contains a valid AES key. Can be instantiated with a random key, or built from a slice
/// of bytes that is 16, 24, or 32 bytes long.
/// A `Key` is required to instantiate a [Cipher](crate::Cipher).
///
/// Key bytes are zeroized when the `Key` is dropped, and `Debug` output only shows the key size.
///
/// ## Examples
/// ```
/// # fn main() -> aeskit::Result<()> {
/// use aeskit::{Key, KeySize};
///
/// // Instantiate random keys:
/// let rk_128 = Key::rand_key_128()?;
/// let rk_256 = Key::random(KeySize::Bits256)?;
/// assert_eq!(rk_128.size(), KeySize::Bits128);
/// assert_eq!(rk_256.as_bytes().len(), 32);
///
/// // Instantiate keys from slice:
/// let key_bytes: [u8; 32] = [0xBA, 0x32, 0x82, 0x9A, 0x43, 0x8A, 0x48, 0xED,
///                            0xC2, 0xEA, 0x10, 0x73, 0x26, 0xF8, 0xA9, 0x62,
///                            0xDE, 0x82, 0x06, 0xBA, 0x53, 0xC2, 0xC7, 0x55,
///                            0x2C, 0x72, 0xC5, 0x37, 0xBF, 0xD4, 0xDB, 0x5E];
/// let my_key_192 = Key::try_from_slice(&key_bytes[..24])?;
/// assert_eq!(my_key_192.as_bytes(), &key_bytes[..24]);
///
/// // Any other length returns an InvalidKeyLength error:
/// assert!(Key::try_from_slice(&key_bytes[..20]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Key {
    bytes: KeyBytes,
}

impl Key {
    /// Generate a random 128-bit key. Returns Error if OsRng fails.
    pub fn rand_key_128() -> Result<Self> {
        Ok(Self {
            bytes: KeyBytes::K128(random_bytes()?),
        })
    }

    /// Generate a random 192-bit key. Returns Error if OsRng fails.
    pub fn rand_key_192() -> Result<Self> {
        Ok(Self {
            bytes: KeyBytes::K192(random_bytes()?),
        })
    }

    /// Generate a random 256-bit key. Returns Error if OsRng fails.
    pub fn rand_key_256() -> Result<Self> {
        Ok(Self {
            bytes: KeyBytes::K256(random_bytes()?),
        })
    }

    /// Generate a random key of the given size. Returns Error if OsRng fails.
    pub fn random(size: KeySize) -> Result<Self> {
        match size {
            KeySize::Bits128 => Self::rand_key_128(),
            KeySize::Bits192 => Self::rand_key_192(),
            KeySize::Bits256 => Self::rand_key_256(),
        }
    }

    /// Attempts to build a key from a slice of bytes. Will return an InvalidKeyLength error
    /// if the input slice is anything other than 16, 24, or 32 bytes long.
    pub fn try_from_slice(bytes: &[u8]) -> Result<Self> {
        let invalid = |_| Error::InvalidKeyLength { len: bytes.len() };
        let bytes = match bytes.len() {
            16 => KeyBytes::K128(bytes.try_into().map_err(invalid)?),
            24 => KeyBytes::K192(bytes.try_into().map_err(invalid)?),
            32 => KeyBytes::K256(bytes.try_into().map_err(invalid)?),
            len => return Err(Error::InvalidKeyLength { len }),
        };
        Ok(Self { bytes })
    }

    /// Returns a reference to the internal key as a slice of bytes.
    pub fn as_bytes(&self) -> &[u8] {
        match &self.bytes {
            KeyBytes::K128(k) => k,
            KeyBytes::K192(k) => k,
            KeyBytes::K256(k) => k,
        }
    }

    /// Size of this key.
    pub fn size(&self) -> KeySize {
        match self.bytes {
            KeyBytes::K128(_) => KeySize::Bits128,
            KeyBytes::K192(_) => KeySize::Bits192,
            KeyBytes::K256(_) => KeySize::Bits256,
        }
    }

    pub(crate) fn bytes(&self) -> &KeyBytes {
        &self.bytes
    }
}

impl fmt::Debug for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Key")
            .field("size", &self.size())
            .finish_non_exhaustive()
    }
}

impl Drop for Key {
    fn drop(&mut self) {
        match &mut self.bytes {
            KeyBytes::K128(k) => k.zeroize(),
            KeyBytes::K192(k) => k.zeroize(),
            KeyBytes::K256(k) => k.zeroize(),
        }
    }
}

/// Generates random key bytes of the given size. Returns Error if OsRng fails.
pub fn random_key(size: KeySize) -> Result<Vec<u8>> {
    Ok(Key::random(size)?.as_bytes().to_vec())
}
