use std::path::Path;

use clap::Parser;
use emojipick::{
    Settings,
    cli::{Cli, Command, SearchArgs, StageArgs},
    error,
    loader::LoadReport,
    matcher,
    output,
    session::{self, Outcome},
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("EMOJIPICK_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() -> error::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Command::Search(args) => {
            cmd_search(cli.emoji_dir.as_deref(), &args)?;
        }
        Command::Stage(args) => {
            cmd_stage(cli.emoji_dir.as_deref(), &args)?;
        }
        Command::Completions(args) => {
            args.generate();
        }
    }

    Ok(())
}

/// Name the file or directory a fatal error is about before bailing out.
fn report_failure(err: &error::Error) {
    if let Some(path) = err.path() {
        tracing::error!(path = %path.display(), "{err}");
    }
}

fn cmd_search(
    emoji_dir: Option<&Path>,
    args: &SearchArgs,
) -> error::Result<()> {
    if args.term.trim().is_empty() {
        eprintln!("No search term given.");
        return Ok(());
    }

    let dir = Settings::resolve_dir(emoji_dir)?;
    let candidates =
        matcher::search(&args.term, &dir).inspect_err(report_failure)?;

    if args.json {
        output::format_candidates_json(&candidates, &args.term)?;
    } else {
        output::format_candidates_human(&candidates, &args.term);
    }
    Ok(())
}

fn cmd_stage(
    emoji_dir: Option<&Path>,
    args: &StageArgs,
) -> error::Result<()> {
    let limit = args
        .limit
        .map(usize::try_from)
        .transpose()
        .map_err(|e| error::Error::Config(format!("invalid limit: {e}")))?;
    let settings = Settings::resolve(emoji_dir, limit)?;

    match session::run(&args.term, &settings).inspect_err(report_failure)? {
        Outcome::NoTerm => {
            eprintln!("No search term given; nothing staged.");
        }
        Outcome::NoMatches { term } => {
            if args.json {
                output::format_staged_json(&LoadReport::default(), &term)?;
            } else {
                println!("No results found for search term \"{term}\"");
            }
        }
        Outcome::Staged(report) => {
            if let Some(ref dir) = args.out {
                let written = output::write_payloads(dir, &report)?;
                eprintln!(
                    "Wrote {} payload(s) to {}",
                    written.len(),
                    dir.display()
                );
            }
            if args.json {
                output::format_staged_json(&report, &args.term)?;
            } else {
                output::format_staged_human(&report);
            }
        }
    }

    Ok(())
}
