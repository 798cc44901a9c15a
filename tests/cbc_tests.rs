#![cfg(feature = "test-vectors")]

// test vectors from NIST SP 800-38A, appendix F.2
// https://nvlpubs.nist.gov/nistpubs/Legacy/SP/nistspecialpublication800-38a.pdf
//
// SP 800-38A vectors are unpadded, so the public API output carries one extra block of
// PKCS#7 padding after the listed ciphertext.

use aeskit::{Cipher, Error, Key};
use hex_literal::hex;

const IV: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");

const PLAINTEXT: [u8; 64] = hex!(
    "6bc1bee22e409f96e93d7e117393172a"
    "ae2d8a571e03ac9c9eb76fac45af8e51"
    "30c81c46a35ce411e5fbc1191a0a52ef"
    "f69f2445df4f9b17ad2b417be66c3710"
);

struct TestVector {
    key: &'static [u8],
    ciphertext: [u8; 64],
}

const VECTORS: [TestVector; 2] = [
    // F.2.1 CBC-AES128
    TestVector {
        key: &hex!("2b7e151628aed2a6abf7158809cf4f3c"),
        ciphertext: hex!(
            "7649abac8119b246cee98e9b12e9197d"
            "5086cb9b507219ee95db113a917678b2"
            "73bed6b8e3c1743b7116e69e22229516"
            "3ff1caa1681fac09120eca307586e1a7"
        ),
    },
    // F.2.5 CBC-AES256
    TestVector {
        key: &hex!("603deb1015ca71be2b73aef0857d77811f352c073b6108d72d9810a30914dff4"),
        ciphertext: hex!(
            "f58c4c04d6e5f1ba779eabfb5f7bfbd6"
            "9cfc4e967edb808d679f777bc6702c7d"
            "39f23369a9d9bacfa530e26304231461"
            "b2eb05e2c39be9fcda6c19078c6a9d1b"
        ),
    },
];

#[test]
fn nist_vectors_encrypt_matches() -> Result<(), Error> {
    for vector in &VECTORS {
        let cipher = Cipher::new(&Key::try_from_slice(vector.key)?);
        let got = cipher.encrypt_cbc_with_iv(&PLAINTEXT, &IV);

        assert_eq!(got.len(), 16 + 64 + 16);
        assert_eq!(&got[..16], &IV);
        assert_eq!(&got[16..80], &vector.ciphertext);
    }
    Ok(())
}

#[test]
fn nist_vectors_decrypt_ok() -> Result<(), Error> {
    for vector in &VECTORS {
        let cipher = Cipher::new(&Key::try_from_slice(vector.key)?);
        let msg = cipher.encrypt_cbc_with_iv(&PLAINTEXT, &IV);

        assert_eq!(cipher.decrypt_cbc(&msg)?, PLAINTEXT.to_vec());
    }
    Ok(())
}

#[test]
fn nist_vectors_reject_truncated_padding_block() -> Result<(), Error> {
    for vector in &VECTORS {
        let cipher = Cipher::new(&Key::try_from_slice(vector.key)?);

        // IV || listed ciphertext, without the padding block: the last plaintext byte
        // (0x10) is a padding length, but the 16 bytes before it are not all 0x10
        let mut msg = IV.to_vec();
        msg.extend_from_slice(&vector.ciphertext);

        assert!(matches!(
            cipher.decrypt_cbc(&msg),
            Err(Error::InvalidPadding { .. })
        ));
    }
    Ok(())
}

#[test]
fn nist_vectors_reject_misaligned() -> Result<(), Error> {
    for vector in &VECTORS {
        let cipher = Cipher::new(&Key::try_from_slice(vector.key)?);
        let msg = cipher.encrypt_cbc_with_iv(&PLAINTEXT, &IV);

        assert!(matches!(
            cipher.decrypt_cbc(&msg[..msg.len() - 1]),
            Err(Error::MisalignedCiphertext { len: 79 })
        ));
    }
    Ok(())
}
