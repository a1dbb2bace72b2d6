//! Seal and open CLI commands

use std::path::PathBuf;

use clap::Args;
use zeroize::Zeroizing;

use super::io::{input_text, read_input, write_output};
use super::keys::KeyArgs;
use crate::config::Settings;
use crate::crypto::{envelope, open, seal};
use crate::error::SealResult;

/// Arguments shared by `seal` and `open`
#[derive(Args, Clone, Default)]
pub struct CodecArgs {
    #[command(flatten)]
    pub key: KeyArgs,

    /// Input file (defaults to stdin)
    #[arg(short, long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Exchange raw binary envelopes
    #[arg(long, conflicts_with = "text")]
    pub binary: bool,

    /// Exchange base64 text envelopes
    #[arg(long)]
    pub text: bool,
}

impl CodecArgs {
    fn text_mode(&self, settings: &Settings) -> bool {
        if self.binary {
            false
        } else if self.text {
            true
        } else {
            settings.text_envelopes
        }
    }
}

/// Seal the input and write the envelope
pub fn handle_seal_command(settings: &Settings, args: CodecArgs) -> SealResult<()> {
    let key = args.key.resolve()?;
    let plaintext = Zeroizing::new(read_input(args.input.as_deref())?);

    let sealed = seal(&plaintext, &key)?;

    if args.text_mode(settings) {
        let mut text = envelope::encode_text(&sealed);
        text.push('\n');
        write_output(args.output.as_deref(), text.as_bytes())
    } else {
        write_output(args.output.as_deref(), &sealed)
    }
}

/// Open the input envelope and write the plaintext
pub fn handle_open_command(settings: &Settings, args: CodecArgs) -> SealResult<()> {
    let key = args.key.resolve()?;
    let input = read_input(args.input.as_deref())?;

    let sealed = if args.text_mode(settings) {
        envelope::decode_text(input_text(&input)?)?
    } else {
        input
    };

    let plaintext = Zeroizing::new(open(&sealed, &key)?);
    write_output(args.output.as_deref(), &plaintext)
}
