//! PKCS#7 padding. [pad] always appends between 1 and `block_size` bytes, each holding the
//! padding length, and [unpad] strictly validates every padding byte before stripping them.

use crate::aeskit::error::*;

/// Appends PKCS#7 padding so the output length is a multiple of `block_size`.
///
/// Input that is already aligned receives a full block of padding, so the padding length is
/// always in `1..=block_size`.
///
/// # Panics
/// If `block_size` is 0 or greater than 255 (PKCS#7 cannot express the padding length).
///
/// ```
/// let padded = aeskit::pad(b"hello", 8);
/// assert_eq!(padded, b"hello\x03\x03\x03");
/// ```
pub fn pad(data: &[u8], block_size: usize) -> Vec<u8> {
    assert!(
        (1..=255).contains(&block_size),
        "PKCS#7 block size must be in 1..=255, got {block_size}"
    );

    let pad_len = block_size - data.len() % block_size;

    let total_len = data
        .len()
        .checked_add(pad_len)
        .expect("plaintext too large to pad");

    let mut out = Vec::with_capacity(total_len);
    out.extend_from_slice(data);
    out.resize(total_len, pad_len as u8);
    out
}

/// Validates and strips PKCS#7 padding, returning the unpadded prefix of `data`.
///
/// Returns [InvalidPadding](crate::Error::InvalidPadding) if `data` is empty, if the last byte
/// is zero, larger than `block_size`, or larger than `data`, or if any of the trailing padding
/// bytes does not hold the padding length.
pub fn unpad(data: &[u8], block_size: usize) -> Result<&[u8]> {
    let pad = match data.last() {
        Some(&b) => b as usize,
        None => {
            return Err(Error::InvalidPadding {
                context: "attempted to unpad empty input",
            });
        }
    };

    if pad == 0 || pad > block_size || pad > data.len() {
        return Err(Error::InvalidPadding {
            context: "invalid padding length specified by last byte",
        });
    }

    let start = data.len() - pad;
    if !data[start..].iter().all(|&b| b as usize == pad) {
        return Err(Error::InvalidPadding {
            context: "padding bytes do not match padding length",
        });
    }

    Ok(&data[..start])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aligned_input_gets_full_block() {
        let data = [0x61u8; 32];
        let padded = pad(&data, 16);
        assert_eq!(padded.len(), 48);
        assert!(padded[32..].iter().all(|&b| b == 16));
    }

    #[test]
    fn pad_lengths_are_in_range() {
        for len in 0..=48 {
            let data = vec![0xEEu8; len];
            let padded = pad(&data, 16);
            let added = padded.len() - len;

            assert_eq!(padded.len() % 16, 0);
            assert!((1..=16).contains(&added), "len {len} added {added}");
            assert_eq!(&padded[..len], data.as_slice());
            assert!(padded[len..].iter().all(|&b| b as usize == added));
        }
    }

    #[test]
    fn empty_input_pads_to_one_block() {
        assert_eq!(pad(&[], 16), vec![16u8; 16]);
    }

    #[test]
    fn unpad_strips_valid_padding() -> Result<()> {
        assert_eq!(unpad(b"hello world\x05\x05\x05\x05\x05", 16)?, b"hello world");
        assert_eq!(unpad(&[16u8; 16], 16)?, b"");
        assert_eq!(unpad(&pad(b"abc", 16), 16)?, b"abc");
        Ok(())
    }

    #[test]
    fn unpad_rejects_empty() {
        assert!(matches!(unpad(&[], 16), Err(Error::InvalidPadding { .. })));
    }

    #[test]
    fn unpad_rejects_zero_pad_byte() {
        let mut block = [0x41u8; 16];
        block[15] = 0;
        assert!(matches!(unpad(&block, 16), Err(Error::InvalidPadding { .. })));
    }

    #[test]
    fn unpad_rejects_pad_larger_than_block() {
        let block = [17u8; 32];
        assert!(matches!(unpad(&block, 16), Err(Error::InvalidPadding { .. })));
    }

    #[test]
    fn unpad_rejects_pad_larger_than_input() {
        assert!(matches!(
            unpad(&[4u8, 4, 4], 16),
            Err(Error::InvalidPadding { .. })
        ));
    }

    #[test]
    fn unpad_rejects_inconsistent_padding_bytes() {
        // claims 4 bytes of padding but one of them is wrong
        let data = b"twelve bytes\x04\x04\x03\x04";
        assert!(matches!(unpad(data, 16), Err(Error::InvalidPadding { .. })));
    }

    #[test]
    #[should_panic]
    fn pad_rejects_zero_block_size() {
        pad(b"data", 0);
    }
}
