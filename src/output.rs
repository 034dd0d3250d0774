use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{
    error::Result,
    loader::LoadReport,
    matcher::Candidate,
    record::HostItem,
};

#[derive(Debug, Serialize)]
struct SearchHit<'a> {
    rank: usize,
    score: u8,
    group: &'a str,
    label: &'a str,
    extension: &'a str,
    path: &'a Path,
}

#[derive(Debug, Serialize)]
struct StageOutput<'a> {
    term: &'a str,
    total_bytes: u64,
    accepted: usize,
    items: Vec<HostItem>,
}

/// Format ranked candidates for human-readable terminal output.
pub fn format_candidates_human(candidates: &[Candidate], term: &str) {
    if candidates.is_empty() {
        println!("No results found for search term \"{term}\"");
        return;
    }

    for (i, c) in candidates.iter().enumerate() {
        println!(
            "{:>3}. [{}] {}:{}.{}  {}",
            i + 1,
            c.score,
            c.group(),
            c.label(),
            c.extension(),
            c.path.display()
        );
    }
    println!("\n{} result(s)", candidates.len());
}

/// Format ranked candidates as JSON output.
pub fn format_candidates_json(
    candidates: &[Candidate],
    term: &str,
) -> Result<()> {
    let hits: Vec<SearchHit<'_>> = candidates
        .iter()
        .enumerate()
        .map(|(i, c)| SearchHit {
            rank: i + 1,
            score: c.score,
            group: c.group(),
            label: c.label(),
            extension: c.extension(),
            path: &c.path,
        })
        .collect();
    let json = serde_json::json!({
        "term": term,
        "result_count": hits.len(),
        "results": hits,
    });
    println!("{}", serde_json::to_string(&json)?);
    Ok(())
}

/// Format a staged set for human-readable terminal output.
pub fn format_staged_human(report: &LoadReport) {
    for r in &report.records {
        println!(
            "{:>3}. {}  {}  {} bytes",
            r.index,
            r.tags(),
            r.mime_type(),
            r.bytes.len()
        );
    }
    println!(
        "\nread cumulative {}b for {} emoji(s)",
        report.total_bytes, report.accepted
    );
}

/// Format a staged set as a JSON document of host items.
pub fn format_staged_json(report: &LoadReport, term: &str) -> Result<()> {
    println!("{}", staged_json(report, term)?);
    Ok(())
}

fn staged_json(report: &LoadReport, term: &str) -> Result<String> {
    let output = StageOutput {
        term,
        total_bytes: report.total_bytes,
        accepted: report.accepted,
        items: report.records.iter().map(|r| r.to_host_item()).collect(),
    };
    Ok(serde_json::to_string(&output)?)
}

/// Write each staged payload to `dir` as `<index>.<extension>`.
///
/// Returns the written paths in staging order.
pub fn write_payloads(
    dir: &Path,
    report: &LoadReport,
) -> Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(report.records.len());
    for r in &report.records {
        let path = dir.join(format!("{}.{}", r.index, r.name.extension));
        std::fs::write(&path, &r.bytes)?;
        written.push(path);
    }
    Ok(written)
}
