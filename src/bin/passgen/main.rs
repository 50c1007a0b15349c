use std::io;
use std::process;

use anyhow::Context;
use clap::Parser;
use log::{debug, LevelFilter};
use passgen::{CharacterClass, ClassSet, GenerationRequest};

mod banner;

/// Generate a random password containing at least one character of every enabled class.
#[derive(Parser, Debug)]
#[command(
    version,
    after_help = "Examples:\n  passgen -l 14 --no-sym --no-dig\n  passgen -l 20"
)]
struct Args {
    /// Length of the password.
    #[arg(
        short,
        long,
        default_value_t = GenerationRequest::DEFAULT_LENGTH,
        allow_negative_numbers = true
    )]
    length: i64,

    /// Leave out uppercase letters (A-Z).
    #[arg(long)]
    no_upper: bool,

    /// Leave out lowercase letters (a-z).
    #[arg(long)]
    no_lower: bool,

    /// Leave out digits (0-9).
    #[arg(long)]
    no_dig: bool,

    /// Leave out symbols (!@#$...).
    #[arg(long)]
    no_sym: bool,

    /// Print debug logging to stderr.
    #[arg(short, long)]
    verbose: bool,
}

impl Args {
    fn request(&self) -> GenerationRequest {
        let disabled = [
            (CharacterClass::Upper, self.no_upper),
            (CharacterClass::Lower, self.no_lower),
            (CharacterClass::Digit, self.no_dig),
            (CharacterClass::Symbol, self.no_sym),
        ];
        let classes = disabled
            .into_iter()
            .filter(|(_, off)| !off)
            .map(|(class, _)| class)
            .collect::<ClassSet>();
        GenerationRequest::new(self.length, classes)
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level).init();
}

fn run(args: Args) -> Result<(), ProgError> {
    let request = args.request();
    debug!("request: {request:?}");
    let password = passgen::generate_with_os_rng(&request)?;
    banner::display_password(&password, io::stdout().lock())
        .context("failed to write the password to stdout")?;
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}

#[derive(Debug, thiserror::Error)]
enum ProgError {
    #[error(transparent)]
    Generation(passgen::GenerationError),
    #[error(transparent)]
    Other(anyhow::Error),
}

impl From<passgen::GenerationError> for ProgError {
    fn from(err: passgen::GenerationError) -> ProgError {
        ProgError::Generation(err)
    }
}

impl From<anyhow::Error> for ProgError {
    fn from(err: anyhow::Error) -> ProgError {
        ProgError::Other(err)
    }
}
