//! Payload to channel-symbol encoding.
//!
//! The payload gains a CRC-14, the 91 bits are LDPC encoded to 174, and the
//! codeword is read three bits at a time through a Gray map. The resulting 58
//! data symbols are split around three Costas sync blocks:
//!
//! ```text
//! S7 D29 S7 D29 S7
//! ```

use crate::constants::{COSTAS_OFFSETS, COSTAS_PATTERN, FT8_NN, GRAY_MAP, LDPC_N};
use crate::{Payload, add_crc, ldpc_encode};

/// Channel symbols of one FT8 transmission, each in `0..8`.
pub type Tones = [u8; FT8_NN];

/// Turns a packed payload into channel symbols.
pub trait ToneEncoder {
    /// Encode `payload`. Always succeeds for a well-formed payload.
    fn encode(&self, payload: &Payload) -> Tones;
}

/// FT8 tone encoder.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ft8Encoder;

impl ToneEncoder for Ft8Encoder {
    fn encode(&self, payload: &Payload) -> Tones {
        encode_ft8(payload)
    }
}

/// True if symbol `index` belongs to a Costas sync block.
pub fn is_sync_symbol(index: usize) -> bool {
    COSTAS_OFFSETS
        .iter()
        .any(|&start| (start..start + COSTAS_PATTERN.len()).contains(&index))
}

/// Encode `payload` into 79 FT8 channel symbols.
///
/// # Example
///
/// ```rust
/// use ft8gen_protocol::{encode_ft8, pack77};
///
/// let tones = encode_ft8(&pack77("CQ K1ABC FN42").unwrap());
/// assert_eq!(&tones[..7], &[3, 1, 4, 0, 6, 5, 2]);
/// ```
pub fn encode_ft8(payload: &Payload) -> Tones {
    let a91 = add_crc(payload.as_bytes());
    let codeword = ldpc_encode(&a91);

    let bit = |i: usize| (codeword[i / 8] >> (7 - i % 8)) & 1;

    let mut tones = [0u8; FT8_NN];
    let mut next_bit = 0;
    for (i, tone) in tones.iter_mut().enumerate() {
        if let Some(&start) = COSTAS_OFFSETS
            .iter()
            .find(|&&start| (start..start + COSTAS_PATTERN.len()).contains(&i))
        {
            *tone = COSTAS_PATTERN[i - start];
        } else {
            let bits3 = (bit(next_bit) << 2) | (bit(next_bit + 1) << 1) | bit(next_bit + 2);
            *tone = GRAY_MAP[bits3 as usize];
            next_bit += 3;
        }
    }
    debug_assert_eq!(next_bit, LDPC_N);

    tones
}
