use anyhow::Result;
use clap::{Parser, Subcommand};

use sealbox::cli::{
    handle_keygen_command, handle_open_command, handle_random_command, handle_seal_command,
    CodecArgs, KeygenArgs, RandomArgs,
};
use sealbox::config::{paths::SealboxPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "sealbox",
    author = "Kaylee Beyene",
    version,
    about = "AES-GCM sealed envelopes from the command line",
    long_about = "sealbox seals data into authenticated AES-GCM envelopes \
                  (nonce || ciphertext || tag) and opens them again. Keys and \
                  envelopes travel as base64 text unless --binary is given."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new base64 key
    Keygen(KeygenArgs),

    /// Draw random bytes from the OS entropy source
    Random(RandomArgs),

    /// Seal data into an envelope
    #[command(alias = "encrypt")]
    Seal(CodecArgs),

    /// Open an envelope and recover the data
    #[command(alias = "decrypt")]
    Open(CodecArgs),

    /// Write default settings to the config file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = SealboxPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    sealbox::logging::init(&settings.log_level)?;

    match cli.command {
        Some(Commands::Keygen(args)) => handle_keygen_command(&settings, args)?,
        Some(Commands::Random(args)) => handle_random_command(args)?,
        Some(Commands::Seal(args)) => handle_seal_command(&settings, args)?,
        Some(Commands::Open(args)) => handle_open_command(&settings, args)?,
        Some(Commands::Init) => {
            settings.save(&paths)?;
            println!("Settings written to: {}", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("sealbox Configuration");
            println!("=====================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Initialized:      {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Default key size: {}", settings.default_key_size);
            println!("  Text envelopes:   {}", settings.text_envelopes);
            println!("  Log level:        {}", settings.log_level);
        }
        None => {
            println!("sealbox - AES-GCM sealed envelopes");
            println!();
            println!("Run 'sealbox --help' for usage information.");
            println!("Run 'sealbox keygen' to create a key.");
        }
    }

    Ok(())
}
