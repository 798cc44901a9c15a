mod cipher;
mod core;
mod error;
mod key;
mod modes;
mod oneshot;
mod padding;
mod util;

/// AES block size in bytes. Also the IV length for both modes.
pub const BLOCK_SIZE: usize = 16;

pub use cipher::Cipher;
pub use error::{Error, Result};
pub use key::{Key, KeySize, random_key};
pub use oneshot::{decrypt_cbc, decrypt_cfb, encrypt_cbc, encrypt_cfb};
pub use padding::{pad, unpad};
