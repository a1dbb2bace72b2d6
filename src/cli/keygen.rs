//! Key and random byte generation commands

use std::path::PathBuf;

use clap::Args;
use zeroize::Zeroizing;

use super::io::write_output;
use crate::config::Settings;
use crate::crypto::{generate_key, generate_random_bytes, KeySize, SecretString};
use crate::error::SealResult;

/// Arguments for `keygen`
#[derive(Args, Clone, Default)]
pub struct KeygenArgs {
    /// Key size in bytes: 16, 24, or 32 (defaults to the configured size)
    #[arg(short, long, value_parser = parse_key_size)]
    pub size: Option<KeySize>,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Arguments for `random`
#[derive(Args, Clone, Default)]
pub struct RandomArgs {
    /// Number of random bytes to draw
    pub length: usize,

    /// Write raw bytes instead of base64
    #[arg(long)]
    pub raw: bool,

    /// Output file (defaults to stdout)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

fn parse_key_size(value: &str) -> Result<KeySize, String> {
    let len: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a byte count", value))?;
    KeySize::from_len(len).map_err(|e| e.to_string())
}

/// Print a fresh base64 key
pub fn handle_keygen_command(settings: &Settings, args: KeygenArgs) -> SealResult<()> {
    let size = args.size.unwrap_or(settings.default_key_size);
    let key = generate_key(size)?;

    let line = SecretString::new(format!("{}\n", key.to_base64().as_str()));
    write_output(args.output.as_deref(), line.as_bytes())
}

/// Print random bytes, base64 encoded unless `--raw`
pub fn handle_random_command(args: RandomArgs) -> SealResult<()> {
    let bytes = Zeroizing::new(generate_random_bytes(args.length)?);

    if args.raw {
        write_output(args.output.as_deref(), &bytes)
    } else {
        use base64::{engine::general_purpose::STANDARD, Engine};
        let line = SecretString::new(format!("{}\n", STANDARD.encode(bytes.as_slice())));
        write_output(args.output.as_deref(), line.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::Key;
    use tempfile::TempDir;

    #[test]
    fn test_parse_key_size() {
        assert_eq!(parse_key_size("16").unwrap(), KeySize::Aes128);
        assert_eq!(parse_key_size("32").unwrap(), KeySize::Aes256);
        assert!(parse_key_size("15").is_err());
        assert!(parse_key_size("big").is_err());
    }

    #[test]
    fn test_keygen_uses_configured_size() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("key.b64");
        let mut settings = Settings::default();
        settings.default_key_size = KeySize::Aes192;

        let args = KeygenArgs {
            size: None,
            output: Some(path.clone()),
        };
        handle_keygen_command(&settings, args).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let key = Key::from_base64(text.trim()).unwrap();
        assert_eq!(key.size(), KeySize::Aes192);
    }

    #[test]
    fn test_random_raw_length() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("random.bin");

        let args = RandomArgs {
            length: 48,
            raw: true,
            output: Some(path.clone()),
        };
        handle_random_command(args).unwrap();

        assert_eq!(std::fs::read(&path).unwrap().len(), 48);
    }
}
