use tracing::info;

use crate::{
    error::Result,
    loader::{self, LoadReport},
    matcher,
    settings::Settings,
};

/// What a single search produced.
///
/// Fatal problems are the `Err` side of [`run`]; an empty prompt and a
/// search without hits are ordinary outcomes the host must present.
#[derive(Debug)]
pub enum Outcome {
    /// The prompt was empty or cancelled. Nothing was scanned.
    NoTerm,
    /// The directory was scanned but nothing matched.
    NoMatches { term: String },
    Staged(LoadReport),
}

/// Search the configured directory for `term` and stage the best matches.
pub fn run(term: &str, settings: &Settings) -> Result<Outcome> {
    if term.trim().is_empty() {
        info!("no search term inputted");
        return Ok(Outcome::NoTerm);
    }

    info!(term, "searching");
    let candidates = matcher::search(term, &settings.emoji_dir)?;
    if candidates.is_empty() {
        return Ok(Outcome::NoMatches {
            term: term.to_string(),
        });
    }

    info!(count = candidates.len(), "loading emojis");
    let report = loader::load(&candidates, settings.load_limit)?;
    info!(
        "read cumulative {}b for {} emojis",
        report.total_bytes, report.accepted
    );
    Ok(Outcome::Staged(report))
}
