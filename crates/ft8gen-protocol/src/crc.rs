//! CRC-14 used to protect the 77-bit payload.

use crate::constants::{LDPC_K_BYTES, PAYLOAD_BYTES};

const CRC_WIDTH: u32 = 14;
const CRC_POLYNOMIAL: u16 = 0x2757;
const TOP_BIT: u16 = 1 << (CRC_WIDTH - 1);

/// Bits covered by the checksum: the payload zero-extended to 82 bits.
const CRC_SPAN_BITS: usize = 96 - CRC_WIDTH as usize;

/// Compute the CRC-14 of the first `num_bits` bits of `message`, MSB first.
pub fn crc14(message: &[u8], num_bits: usize) -> u16 {
    let mut remainder: u16 = 0;
    let mut bytes = message.iter();

    for bit in 0..num_bits {
        if bit % 8 == 0 {
            let byte = bytes.next().copied().unwrap_or(0);
            remainder ^= u16::from(byte) << (CRC_WIDTH - 8);
        }
        remainder = if remainder & TOP_BIT != 0 {
            (remainder << 1) ^ CRC_POLYNOMIAL
        } else {
            remainder << 1
        };
    }

    remainder & ((TOP_BIT << 1) - 1)
}

/// Append the CRC to a packed payload, producing the 91-bit LDPC message.
///
/// Bits 77..91 carry the checksum; the three bits after it are zero.
pub fn add_crc(payload: &[u8; PAYLOAD_BYTES]) -> [u8; LDPC_K_BYTES] {
    let mut a91 = [0u8; LDPC_K_BYTES];
    a91[..PAYLOAD_BYTES].copy_from_slice(payload);
    a91[9] &= 0xf8;

    let checksum = crc14(&a91, CRC_SPAN_BITS);
    a91[9] |= (checksum >> 11) as u8;
    a91[10] = (checksum >> 3) as u8;
    a91[11] = (checksum << 5) as u8;
    a91
}

/// Read back the CRC stored by [`add_crc`].
pub fn extract_crc(a91: &[u8; LDPC_K_BYTES]) -> u16 {
    (u16::from(a91[9] & 0x07) << 11) | (u16::from(a91[10]) << 3) | u16::from(a91[11] >> 5)
}

/// True if the CRC stored in `a91` matches its payload bits.
pub fn check_crc(a91: &[u8; LDPC_K_BYTES]) -> bool {
    let mut payload = [0u8; PAYLOAD_BYTES];
    payload.copy_from_slice(&a91[..PAYLOAD_BYTES]);
    add_crc(&payload) == *a91
}
