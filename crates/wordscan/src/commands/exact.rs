//! Exact command — whole-word matches.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use wordscan_core::{MatchReport, TextAnalyzer, TextManager};

use super::read_input_file;

/// Arguments for the `exact` subcommand.
#[derive(Args, Debug)]
pub struct ExactArgs {
    /// File to search.
    pub file: Utf8PathBuf,

    /// Word to look for.
    pub word: String,

    /// Ignore case when matching. Whole-word matching always ignores case;
    /// the flag is accepted for symmetry with `find`.
    #[arg(short, long)]
    pub ignore_case: bool,
}

/// Print every whole-word match with its character offset.
#[instrument(name = "cmd_exact", skip_all, fields(file = %args.file))]
pub fn cmd_exact(
    args: ExactArgs,
    global_json: bool,
    config_ignore_case: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    let ignore_case = args.ignore_case || config_ignore_case;
    debug!(file = %args.file, word = %args.word, ignore_case, "executing exact command");

    let content = read_input_file(&args.file, max_input_bytes)?;
    let manager = TextManager::new(content);
    let matches = manager
        .find_exact_word(&args.word, ignore_case)
        .with_context(|| format!("failed to search {}", args.file))?;

    let report = MatchReport::new(Some(args.word.as_str()), matches);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.matches.is_empty() {
        println!("{} \"{}\" not found", "NONE:".yellow(), args.word);
    } else {
        for m in &report.matches {
            println!("{}\t{}", m.offset, m.text);
        }
    }

    Ok(())
}
