use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
mod auth;
use smsseal::{Blob, SecurityPreset, preset};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use zeroize::Zeroizing;

#[derive(Debug, clap::Args)]
struct Argon2Args {
    /// Override Argon2 memory cost in KiB
    #[arg(long = "argon-mem")]
    mem_cost_kib: Option<u32>,

    /// Override Argon2 time cost / iterations
    #[arg(long = "argon-time")]
    time_cost: Option<u32>,

    /// Override Argon2 parallelism
    #[arg(long = "argon-parallelism")]
    parallelism: Option<u8>,
}

impl Argon2Args {
    /// Applies any overrides on top of `base`. Blobs made with overrides only
    /// decrypt with the same overrides.
    fn to_preset(&self, base: &SecurityPreset) -> Result<SecurityPreset> {
        if self.mem_cost_kib.is_none() && self.time_cost.is_none() && self.parallelism.is_none() {
            return Ok(base.clone());
        }

        let custom = SecurityPreset::new(
            format!("{} (custom)", base.name()),
            self.time_cost.unwrap_or(base.time_cost()),
            self.mem_cost_kib.unwrap_or(base.mem_cost_kib()),
            self.parallelism.unwrap_or(base.parallelism()),
        )?;
        info!(
            time_cost = custom.time_cost(),
            mem_cost_kib = custom.mem_cost_kib(),
            parallelism = custom.parallelism(),
            "using custom argon2 parameters"
        );
        Ok(custom)
    }
}

#[derive(Debug, Parser)]
#[command(name = "smsseal")]
#[command(
    version,
    about = "Offline password-based encryption for short text messages (Argon2id + AES-256-GCM)."
)]
struct Cli {
    /// Security level: High, Medium or Low
    #[arg(
        long,
        short,
        global = true,
        value_name = "NAME",
        env = "SMSSEAL_PRESET",
        default_value = "High"
    )]
    preset: String,

    /// Print debug logs to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Encrypts a message and prints the text to send
    #[command(arg_required_else_help = true)]
    Encrypt {
        message: String,

        /// Also copy the result to the clipboard
        #[arg(long)]
        copy: bool,

        #[command(flatten)]
        argon2: Argon2Args,
    },

    /// Decrypts received text and prints the message
    #[command(arg_required_else_help = true)]
    Decrypt {
        blob: String,

        /// Also copy the result to the clipboard
        #[arg(long)]
        copy: bool,

        #[command(flatten)]
        argon2: Argon2Args,
    },

    /// Lists the available security levels
    Presets {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },

    /// Shows the framing of encrypted text without decrypting it
    #[command(arg_required_else_help = true)]
    Inspect {
        blob: String,

        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
}

fn init_tracing(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env("SMSSEAL_LOG")
        .unwrap_or_else(|_| EnvFilter::new(format!("smsseal={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().context("clipboard unavailable")?;
    clipboard
        .set_text(text.to_owned())
        .context("failed to copy to clipboard")?;
    eprintln!("copied to clipboard");
    Ok(())
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let args = Cli::parse();
    init_tracing(args.verbose);

    match args.command {
        Commands::Encrypt {
            message,
            copy,
            argon2,
        } => {
            if message.is_empty() {
                bail!("message and password are required");
            }
            let preset = argon2.to_preset(preset::resolve(&args.preset)?)?;
            let password = auth::read_new_password_with_confirmation()?;

            debug!(preset = preset.name(), message_len = message.len(), "encrypting");
            let blob = smsseal::encrypt(&message, &password, &preset)?;
            debug!(blob_len = blob.len(), "encrypted");

            println!("{blob}");
            if copy {
                copy_to_clipboard(&blob)?;
            }
        }
        Commands::Decrypt { blob, copy, argon2 } => {
            let blob = blob.trim();
            if blob.is_empty() {
                bail!("encrypted text and password are required");
            }
            let preset = argon2.to_preset(preset::resolve(&args.preset)?)?;
            let password = auth::read_password()?;

            debug!(preset = preset.name(), blob_len = blob.len(), "decrypting");
            let message = Zeroizing::new(smsseal::decrypt(blob, &password, &preset)?);

            println!("{}", message.as_str());
            if copy {
                copy_to_clipboard(&message)?;
            }
        }
        Commands::Presets { json } => {
            let presets = preset::all();
            if json {
                println!("{}", serde_json::to_string_pretty(presets)?);
                return Ok(());
            }

            let name_width = presets
                .iter()
                .map(|p| p.label().len())
                .chain(std::iter::once("Level".len()))
                .max()
                .unwrap_or_default();

            println!(
                "{:<6}  {:<name_width$}  {:>4}  {:>12}  {:>7}",
                "Name", "Level", "Time", "Memory (KiB)", "Threads"
            );
            for p in presets {
                println!(
                    "{:<6}  {:<name_width$}  {:>4}  {:>12}  {:>7}",
                    p.name(),
                    p.label(),
                    p.time_cost(),
                    p.mem_cost_kib(),
                    p.parallelism()
                );
            }
        }
        Commands::Inspect { blob, json } => {
            let info = Blob::decode(blob.trim())?.info();
            if json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("{info}");
            }
        }
    }

    Ok(())
}
