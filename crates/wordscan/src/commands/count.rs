//! Count command — word and letter counts for an original and edited file.

use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use wordscan_core::{Measurement, TextManager, TracingObserver, summarize};

use super::read_input_file;

/// Arguments for the `count` subcommand.
#[derive(Args, Debug)]
pub struct CountArgs {
    /// Original text file.
    pub file: Utf8PathBuf,

    /// Edited copy to count alongside the original (defaults to the original).
    #[arg(long, value_name = "FILE")]
    pub edited: Option<Utf8PathBuf>,

    /// Print only this count.
    #[arg(long, value_enum)]
    pub only: Option<Measurement>,
}

/// Count words and letters of a file and its edited copy.
#[instrument(name = "cmd_count", skip_all, fields(file = %args.file))]
pub fn cmd_count(
    args: CountArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, edited = ?args.edited, only = ?args.only, "executing count command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let mut manager = TextManager::new(content).with_observer(TracingObserver);
    if let Some(ref edited) = args.edited {
        manager.set_edited(read_input_file(edited, max_input_bytes)?);
    }

    let summary = summarize(&manager);

    if let Some(only) = args.only {
        let value = match only {
            Measurement::Words => summary.words,
            Measurement::Letters => summary.letters,
            Measurement::EditedWords => summary.edited_words,
        };
        if global_json {
            println!("{}", serde_json::json!({ only.as_str(): value }));
        } else {
            println!("{value}");
        }
        return Ok(());
    }

    if global_json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", args.file.bold());
        println!("  {} {}", "Words:".cyan(), summary.words);
        println!("  {} {}", "Letters:".cyan(), summary.letters);
        println!("  {} {}", "Edited words:".cyan(), summary.edited_words);
    }

    Ok(())
}
