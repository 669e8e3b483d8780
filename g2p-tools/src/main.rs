//! g2ptool — the external driver harness for the g2p-core decoder.
//!
//! Splits the work between a library crate and a thin `clap`+`anyhow` CLI:
//! parsing, I/O, and error reporting live here, the decoding algorithm
//! stays in `g2p-core`.

mod accuracy;
mod dict;
mod table;

use anyhow::Result;
use clap::{Parser, Subcommand};
use g2p_core::Config;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "g2ptool", about = "Joint-model grapheme-to-phoneme utilities")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the accuracy-measurement driver over a CMUdict-style dictionary.
    Accuracy {
        /// Path to the plain-text joint n-gram table (see `table` module).
        #[arg(long)]
        model: PathBuf,
        /// Path to the dictionary file (`WORD[(n)] SPACE PHONEME`).
        #[arg(long)]
        dict: PathBuf,
        /// Beam width.
        #[arg(long, default_value_t = Config::default().beam_width)]
        beam: usize,
    },
    /// Pronounce a single word and print the result.
    Pronounce {
        #[arg(long)]
        model: PathBuf,
        word: String,
        #[arg(long, default_value_t = Config::default().beam_width)]
        beam: usize,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Accuracy { model, dict, beam } => {
            let model = table::load_table(&model)?;
            let report = accuracy::run(&model, &dict, beam)?;
            println!(
                "{} {} {}",
                report.correct_count,
                report.unique_word_count,
                report.accuracy()
            );
        }
        Command::Pronounce { model, word, beam } => {
            let model = table::load_table(&model)?;
            match g2p_core::g2p(&model, &word, beam)? {
                Some(phoneme) => println!("{phoneme}"),
                None => println!("(no alignment)"),
            }
        }
    }
    Ok(())
}
