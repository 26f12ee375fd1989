//! FT8 frame constants.

/// Total channel symbols per transmission.
pub const FT8_NN: usize = 79;

/// Data symbols per transmission.
pub const FT8_ND: usize = 58;

/// Sync symbols per transmission (three Costas blocks).
pub const FT8_NS: usize = 21;

/// Number of tones in the FT8 alphabet.
pub const TONE_COUNT: u8 = 8;

/// Bits per channel symbol.
pub const BITS_PER_SYMBOL: usize = 3;

/// Packed message length in bits.
pub const PAYLOAD_BITS: usize = 77;

/// Packed message length in bytes (last byte holds 5 payload bits).
pub const PAYLOAD_BYTES: usize = 10;

/// CRC length in bits.
pub const CRC_BITS: usize = 14;

/// LDPC message length in bits: payload plus CRC.
pub const LDPC_K: usize = PAYLOAD_BITS + CRC_BITS;

/// LDPC message length in bytes.
pub const LDPC_K_BYTES: usize = LDPC_K.div_ceil(8);

/// LDPC parity bits.
pub const LDPC_M: usize = 83;

/// LDPC codeword length in bits.
pub const LDPC_N: usize = LDPC_K + LDPC_M;

/// LDPC codeword length in bytes.
pub const LDPC_N_BYTES: usize = LDPC_N.div_ceil(8);

/// 7x7 Costas array sent at the start, middle and end of every frame.
pub const COSTAS_PATTERN: [u8; 7] = [3, 1, 4, 0, 6, 5, 2];

/// Symbol offsets of the three Costas blocks.
pub const COSTAS_OFFSETS: [usize; 3] = [0, 36, 72];

/// Gray code map from 3-bit value to tone index.
pub const GRAY_MAP: [u8; 8] = [0, 1, 3, 2, 5, 6, 4, 7];
