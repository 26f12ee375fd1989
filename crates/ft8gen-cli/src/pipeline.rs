//! Pack, encode, synthesize, write.

use ft8gen_io::AudioFileWriter;
use ft8gen_protocol::{MessagePacker, PackError, Payload, ToneEncoder, Tones};
use ft8gen_synth::{AssembledSignal, SignalAssembler};
use std::path::Path;

/// Failure of a full [`Pipeline::run`].
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    /// The packer rejected the message; nothing was synthesized or written.
    #[error("cannot parse message: {0}")]
    Pack(#[from] PackError),

    /// The writer failed.
    #[error(transparent)]
    Write(#[from] ft8gen_io::Error),
}

/// Everything produced for one message, ready to be written.
#[derive(Debug, Clone)]
pub struct Transmission {
    payload: Payload,
    tones: Tones,
    signal: AssembledSignal,
}

impl Transmission {
    /// Packed 77-bit payload.
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Channel symbols.
    pub fn tones(&self) -> &Tones {
        &self.tones
    }

    /// Channel symbols as concatenated decimal digits.
    pub fn tone_string(&self) -> String {
        self.tones.iter().map(|&t| char::from(b'0' + t)).collect()
    }

    /// Assembled audio clip.
    pub fn signal(&self) -> &AssembledSignal {
        &self.signal
    }
}

/// The transmit chain, generic over its three collaborators.
pub struct Pipeline<P, E, W> {
    packer: P,
    encoder: E,
    writer: W,
    assembler: SignalAssembler,
}

impl<P, E, W> Pipeline<P, E, W>
where
    P: MessagePacker,
    E: ToneEncoder,
    W: AudioFileWriter,
{
    /// Pipeline producing standard FT8 clips.
    pub fn new(packer: P, encoder: E, writer: W) -> Self {
        Self {
            packer,
            encoder,
            writer,
            assembler: SignalAssembler::FT8,
        }
    }

    /// Replace the clip assembler.
    pub fn with_assembler(mut self, assembler: SignalAssembler) -> Self {
        self.assembler = assembler;
        self
    }

    /// Pack, encode and synthesize `message`. Touches no files.
    pub fn prepare(&self, message: &str) -> Result<Transmission, PackError> {
        let payload = self.packer.pack(message)?;
        let tones = self.encoder.encode(&payload);
        let signal = self.assembler.assemble(&tones);

        tracing::debug!(
            payload = %payload,
            samples = signal.len(),
            "prepared transmission"
        );

        Ok(Transmission {
            payload,
            tones,
            signal,
        })
    }

    /// Write a prepared transmission to `path`.
    pub fn transmit(&self, transmission: &Transmission, path: &Path) -> ft8gen_io::Result<()> {
        let signal = transmission.signal();
        let sample_rate = signal.sample_rate().round() as u32;
        self.writer.write_audio(path, signal.samples(), sample_rate)
    }

    /// [`prepare`](Self::prepare) then [`transmit`](Self::transmit).
    pub fn run(&self, message: &str, path: &Path) -> Result<Transmission, RunError> {
        let transmission = self.prepare(message)?;
        self.transmit(&transmission, path)?;
        Ok(transmission)
    }
}
