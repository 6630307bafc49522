//! Repeats command — immediately repeated words.

use anyhow::{Context, bail};
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use wordscan_core::{MatchReport, TextAnalyzer, TextManager};

use super::read_input_file;

/// Arguments for the `repeats` subcommand.
#[derive(Args, Debug)]
pub struct RepeatsArgs {
    /// File to check.
    pub file: Utf8PathBuf,

    /// Only report repeats containing this word.
    #[arg(short, long)]
    pub word: Option<String>,

    /// Ignore case when matching. Repeats are always compared ignoring
    /// case; the flag is accepted for symmetry with `find`.
    #[arg(short, long)]
    pub ignore_case: bool,

    /// Exit with an error when any repeat is found.
    #[arg(long)]
    pub deny: bool,
}

/// Report adjacent repeated words, optionally filtered by a word.
#[instrument(name = "cmd_repeats", skip_all, fields(file = %args.file))]
pub fn cmd_repeats(
    args: RepeatsArgs,
    global_json: bool,
    config_ignore_case: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let ignore_case = args.ignore_case || config_ignore_case;
    debug!(file = %args.file, word = ?args.word, ignore_case, deny = args.deny, "executing repeats command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let manager = TextManager::new(content);
    let matches = match args.word.as_deref() {
        Some(word) => manager
            .find_repeated_word(word, ignore_case)
            .with_context(|| format!("failed to search {}", args.file))?,
        None => manager.find_all_repeated_words(),
    };

    let report = MatchReport::new(args.word.as_deref(), matches);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.matches.is_empty() {
        println!("{} no repeated words in {}", "PASS:".green(), args.file);
    } else {
        for m in &report.matches {
            println!("{}\t{}", m.offset, m.text.replace(char::is_whitespace, " ").red());
        }
    }

    if args.deny && report.total > 0 {
        bail!("{} has {} repeated words", args.file, report.total);
    }

    Ok(())
}
