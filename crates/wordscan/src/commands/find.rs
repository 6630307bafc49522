//! Find command — substring occurrences, overlapping hits included.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use wordscan_core::{OccurrenceReport, TextAnalyzer, TextManager};

use super::read_input_file;

/// Arguments for the `find` subcommand.
#[derive(Args, Debug)]
pub struct FindArgs {
    /// File to search.
    pub file: Utf8PathBuf,

    /// Text to look for.
    pub word: String,

    /// Ignore case when matching.
    #[arg(short, long)]
    pub ignore_case: bool,
}

/// Print the character offset of every occurrence of a word.
#[instrument(name = "cmd_find", skip_all, fields(file = %args.file))]
pub fn cmd_find(
    args: FindArgs,
    global_json: bool,
    config_ignore_case: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let ignore_case = args.ignore_case || config_ignore_case;
    debug!(file = %args.file, word = %args.word, ignore_case, "executing find command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let manager = TextManager::new(content);
    let offsets = manager
        .find_word(&args.word, ignore_case)
        .with_context(|| format!("failed to search {}", args.file))?;

    let report = OccurrenceReport {
        word: args.word,
        ignore_case,
        total: offsets.len(),
        offsets,
    };

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.offsets.is_empty() {
        println!("{} \"{}\" not found", "NONE:".yellow(), report.word);
    } else {
        for offset in &report.offsets {
            println!("{offset}");
        }
    }

    Ok(())
}
