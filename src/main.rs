//! Entropy Password CLI
//!
//! Prints a password or passphrase of at least the requested entropy, or
//! rotates through candidates until interrupted.

use clap::Parser;
use entropy_password::{
    alphabet::{WordList, WordListError},
    analysis,
    catalog::{AlphabetCatalog, CatalogEntry},
    config::FileConfig,
    generator::PasswordGenerator,
    Error,
};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Generate a secure password.
#[derive(Debug, Parser)]
#[command(name = "entropy-password", version)]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Password security level, in bits of entropy
    #[arg(long)]
    bits: Option<u32>,

    /// Number of symbols in the alphabet to use (100 or more selects word lists)
    #[arg(long)]
    alphabet: Option<usize>,

    /// Path to a bzip2 compressed list of words, one word per line
    #[arg(long)]
    wordlist: Option<PathBuf>,

    /// Loop forever generating passwords until interrupted
    #[arg(long = "loop")]
    rotate: bool,

    /// Draw this many secrets and print symbol frequency statistics
    #[arg(long, value_name = "SAMPLES")]
    audit: Option<u64>,

    /// Verbose output
    #[arg(long)]
    verbose: bool,
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    info!("Entropy Password v{}", entropy_password::VERSION);

    let mut config = match &args.config {
        Some(path) => match FileConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Failed to load configuration: {}", e);
                std::process::exit(1);
            }
        },
        None => FileConfig::default(),
    };
    if let Some(bits) = args.bits {
        config.bits = bits;
    }
    if args.alphabet.is_some() {
        config.alphabet = args.alphabet;
    }
    if let Some(wordlist) = &args.wordlist {
        config.wordlist = wordlist.clone();
    }
    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        std::process::exit(1);
    }

    let mut generator = PasswordGenerator::from_os_entropy().with_min_bits(config.min_bits);
    if generator.check_floor(config.bits).is_err() {
        eprintln!(
            "Passwords must be at least {} bits strong",
            config.displayed_min_bits()
        );
        std::process::exit(1);
    }

    let catalog = match build_catalog(&config) {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let selector = config.selector(args.rotate);
    let candidates = match catalog.select(&selector, &mut rand_core::OsRng) {
        Ok(candidates) => candidates,
        Err(e) => fail(e),
    };

    if let Some(samples) = args.audit {
        run_audit(&mut generator, &candidates[0], config.bits, samples);
        return;
    }

    if args.rotate {
        run_loop(&mut generator, &candidates, &config);
        return;
    }

    match generator.generate(config.bits, candidates[0].alphabet()) {
        Ok(secret) => {
            info!(
                alphabet = candidates[0].name(),
                entropy_bits = secret.entropy_bits(),
                "Generated secret"
            );
            println!("{}", secret.as_str());
        }
        Err(e) => fail(e),
    }
}

fn build_catalog(config: &FileConfig) -> Result<AlphabetCatalog, String> {
    let mut catalog = AlphabetCatalog::builtin();

    match WordList::open(&config.wordlist) {
        Ok(list) => catalog.register_word_list(list),
        Err(WordListError::NotFound(path)) => {
            info!(path = %path.display(), "No word list, passphrases disabled");
        }
        Err(e) => warn!("Skipping word list: {}", e),
    }

    catalog
        .set_defaults(config.default_alphabets.as_slice())
        .map_err(|e| e.to_string())?;
    Ok(catalog)
}

fn run_loop(
    generator: &mut PasswordGenerator,
    candidates: &[CatalogEntry],
    config: &FileConfig,
) {
    let running = Arc::new(AtomicBool::new(true));
    let flag = running.clone();
    if let Err(e) = ctrlc::set_handler(move || flag.store(false, Ordering::SeqCst)) {
        eprintln!("Failed to install interrupt handler: {}", e);
        std::process::exit(1);
    }

    let delay = Duration::from_millis(config.loop_delay_ms);
    while running.load(Ordering::SeqCst) {
        for entry in candidates {
            if !running.load(Ordering::SeqCst) {
                break;
            }
            match generator.generate(config.bits, entry.alphabet()) {
                Ok(secret) => println!("{}", secret.as_str()),
                Err(e) => fail(e),
            }
            std::thread::sleep(delay);
        }
    }

    info!(
        generated = generator.secrets_generated(),
        "Interrupted, stopping"
    );
}

fn run_audit(generator: &mut PasswordGenerator, entry: &CatalogEntry, bits: u32, samples: u64) {
    match analysis::audit(generator, entry.alphabet(), bits, samples) {
        Ok(freq) => {
            println!("alphabet:       {}", entry.name());
            println!("symbols:        {}", freq.counts().len());
            println!("observations:   {}", freq.total());
            println!("chi-square:     {:.2}", freq.chi_square());
            println!("max deviation:  {:.4}", freq.max_relative_deviation());
            println!(
                "verdict:        {}",
                if freq.looks_uniform() {
                    "no gross bias detected"
                } else {
                    "SKEWED"
                }
            );
        }
        Err(e) => fail(e),
    }
}

fn fail(e: Error) -> ! {
    eprintln!("{}", e);
    std::process::exit(1);
}
