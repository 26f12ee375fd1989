//! The ft8gen transmit chain.
//!
//! [`Pipeline`] ties a [`MessagePacker`](ft8gen_protocol::MessagePacker), a
//! [`ToneEncoder`](ft8gen_protocol::ToneEncoder) and an
//! [`AudioFileWriter`](ft8gen_io::AudioFileWriter) around the clip assembler.
//! The `ft8gen` binary drives it with the FT8 implementations of each.

mod pipeline;

pub use pipeline::{Pipeline, RunError, Transmission};
