//! ft8gen - Generate a 15-second WAV file carrying an FT8 message.

use anyhow::Context;
use clap::Parser;
use clap::error::ErrorKind;
use ft8gen_cli::Pipeline;
use ft8gen_io::WavFileWriter;
use ft8gen_protocol::{Ft8Encoder, Ft8Packer};
use std::path::PathBuf;
use std::process;

const USAGE: &str = "\
Generate a 15-second WAV file encoding a given message.
Usage:

ft8gen MESSAGE WAV_FILE

(Note that you might have to enclose your message in quote marks if it contains spaces)";

/// Exit status for malformed arguments.
const EXIT_USAGE: i32 = -1;
/// Exit status when the message cannot be packed.
const EXIT_PACK: i32 = -2;

#[derive(Parser)]
#[command(name = "ft8gen")]
#[command(
    author,
    version,
    about = "Generate a 15-second WAV file encoding a given message",
    long_about = None
)]
struct Cli {
    /// Message to transmit, e.g. "CQ K1ABC FN42". May start with '-'.
    #[arg(value_name = "MESSAGE", allow_hyphen_values = true)]
    message: String,

    /// Output WAV file
    #[arg(value_name = "WAV_FILE")]
    output: PathBuf,

    /// Arguments past WAV_FILE are ignored
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    extra: Vec<String>,

    /// Write 32-bit float samples instead of 16-bit PCM
    #[arg(long)]
    float: bool,
}

impl Cli {
    fn writer(&self) -> WavFileWriter {
        if self.float {
            WavFileWriter::float()
        } else {
            WavFileWriter::pcm16()
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => {
            println!("{USAGE}");
            process::exit(EXIT_USAGE);
        }
    };

    init_tracing();

    if !cli.extra.is_empty() {
        tracing::debug!(ignored = ?cli.extra, "extra arguments ignored");
    }

    let pipeline = Pipeline::new(Ft8Packer, Ft8Encoder, cli.writer());

    let transmission = match pipeline.prepare(&cli.message) {
        Ok(transmission) => transmission,
        Err(err) => {
            tracing::warn!(text = %cli.message, error = %err, "pack failed");
            println!("Cannot parse message!");
            println!("RC = {}", err.code());
            process::exit(EXIT_PACK);
        }
    };

    println!("Packed data: {}", transmission.payload());
    println!("FSK tones: {}", transmission.tone_string());

    pipeline
        .transmit(&transmission, &cli.output)
        .with_context(|| format!("failed to write {}", cli.output.display()))?;

    tracing::info!(path = %cli.output.display(), "done");
    Ok(())
}
