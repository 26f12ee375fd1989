//! ft8gen Protocol - FT8 message packing and tone encoding
//!
//! Produces the symbol sequence the synthesizer turns into audio:
//!
//! - [`pack77`] / [`Ft8Packer`] - Text message to 77-bit [`Payload`]
//! - [`add_crc`] / [`crc14`] - CRC-14 over the payload
//! - [`ldpc_encode`] - LDPC(174,91) forward error correction
//! - [`encode_ft8`] / [`Ft8Encoder`] - Payload to 79 channel symbols
//!
//! The [`MessagePacker`] and [`ToneEncoder`] traits are the seams the
//! transmit pipeline is generic over.
//!
//! ## Example
//!
//! ```rust
//! use ft8gen_protocol::{Ft8Encoder, Ft8Packer, MessagePacker, ToneEncoder, FT8_NN};
//!
//! let payload = Ft8Packer.pack("CQ K1ABC FN42").unwrap();
//! let tones = Ft8Encoder.encode(&payload);
//!
//! assert_eq!(tones.len(), FT8_NN);
//! ```

mod constants;
mod crc;
mod encode;
mod error;
mod ldpc;
mod pack;

pub use constants::{
    BITS_PER_SYMBOL, COSTAS_OFFSETS, COSTAS_PATTERN, CRC_BITS, FT8_ND, FT8_NN, FT8_NS, GRAY_MAP,
    LDPC_K, LDPC_K_BYTES, LDPC_M, LDPC_N, LDPC_N_BYTES, PAYLOAD_BITS, PAYLOAD_BYTES, TONE_COUNT,
};
pub use crc::{add_crc, check_crc, crc14, extract_crc};
pub use encode::{Ft8Encoder, ToneEncoder, Tones, encode_ft8, is_sync_symbol};
pub use error::PackError;
pub use ldpc::ldpc_encode;
pub use pack::{Ft8Packer, MessagePacker, Payload, pack77};
