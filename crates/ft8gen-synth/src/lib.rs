//! ft8gen Synth - Continuous-phase FSK synthesis for the ft8gen transmitter
//!
//! This crate turns a sequence of tone indices into audio samples and places
//! the resulting tone burst inside a fixed-length, silence-padded clip.
//!
//! # Core Components
//!
//! ## Parameters
//!
//! - [`SynthParams`] - Base frequency, tone spacing, symbol rate and sample rate
//!
//! ## Synthesis
//!
//! - [`FskSynthesizer`] - Sample-by-sample continuous-phase FSK generator
//! - [`synth_fsk`] - One-shot helper that fills a caller-owned buffer
//!
//! ```rust
//! use ft8gen_synth::{FskSynthesizer, SynthParams};
//!
//! let symbols = [0u8, 1, 2];
//! let mut synth = FskSynthesizer::new(&symbols, SynthParams::FT8);
//!
//! let first = synth.advance();
//! assert!(first.is_some());
//! ```
//!
//! ## Clip Assembly
//!
//! - [`SignalAssembler`] - Centers a tone burst between two equal silences
//! - [`AssembledSignal`] - The finished sample buffer and its layout
//! - [`ClipLayout`] - Silence and burst lengths in samples
//!
//! ```rust
//! use ft8gen_synth::SignalAssembler;
//!
//! let symbols = [0u8; 79];
//! let signal = SignalAssembler::FT8.assemble(&symbols);
//!
//! assert_eq!(signal.len(), 180_000);
//! assert_eq!(signal.burst_range(), 14_160..165_840);
//! ```
//!
//! # no_std Support
//!
//! This crate is `no_std` compatible (it needs `alloc` for the clip buffer).
//! Disable the default `std` feature:
//!
//! ```toml
//! [dependencies]
//! ft8gen-synth = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod assembler;
pub mod fsk;
pub mod params;

pub use assembler::{AssembledSignal, ClipLayout, SignalAssembler};
pub use fsk::{FskSynthesizer, synth_fsk};
pub use params::SynthParams;
