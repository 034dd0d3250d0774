use std::{collections::HashSet, fs::File, io::Read};

use tracing::{debug, info, warn};

use crate::{
    error::{Error, Result},
    matcher::Candidate,
    record::StagedRecord,
};

/// Everything a single load pass produced.
#[derive(Debug, Default)]
pub struct LoadReport {
    pub records: Vec<StagedRecord>,
    /// Sum of the sizes of accepted records only.
    pub total_bytes: u64,
    pub accepted: usize,
}

/// Read ranked candidates into memory.
///
/// Walks `candidates` in order and stages at most `limit` records:
///
/// 1. A file that cannot be opened or read aborts the whole load.
/// 2. Empty files are skipped with a warning.
/// 3. Files whose bytes match an already staged record are skipped.
///
/// Once `limit` records are staged no further candidate is opened.
pub fn load(candidates: &[Candidate], limit: usize) -> Result<LoadReport> {
    let mut report = LoadReport::default();
    let mut seen = HashSet::new();

    for candidate in candidates {
        if report.accepted >= limit {
            info!(limit, "loaded the limit of emojis");
            break;
        }
        debug!(
            path = %candidate.path.display(),
            score = candidate.score,
            "loading"
        );

        let bytes = read_candidate(candidate)?;
        if bytes.is_empty() {
            warn!(
                path = %candidate.path.display(),
                "emoji file is empty, did the downloader fail?"
            );
            continue;
        }

        let hash = blake3::hash(&bytes);
        if !seen.insert(hash) {
            info!(
                tags = %candidate.name.tags(),
                "skipping byte-for-byte identical emoji"
            );
            continue;
        }

        report.accepted += 1;
        report.total_bytes += bytes.len() as u64;
        report.records.push(StagedRecord {
            index: report.accepted,
            name: candidate.name.clone(),
            path: candidate.path.clone(),
            bytes,
            hash,
        });
    }

    Ok(report)
}

/// Open and fully read one candidate. The handle is dropped on return.
fn read_candidate(candidate: &Candidate) -> Result<Vec<u8>> {
    let mut file = File::open(&candidate.path).map_err(|source| Error::Open {
        path: candidate.path.clone(),
        source,
    })?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|source| Error::Read {
            path: candidate.path.clone(),
            source,
        })?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::*;
    use crate::matcher;

    fn fixture(files: &[(&str, &[u8])]) -> tempfile::TempDir {
        let tmp = tempfile::tempdir().unwrap();
        for (name, bytes) in files {
            std::fs::write(tmp.path().join(name), bytes).unwrap();
        }
        tmp
    }

    fn tags(report: &LoadReport) -> Vec<String> {
        report.records.iter().map(StagedRecord::tags).collect()
    }

    #[test]
    fn identical_bytes_are_staged_once() {
        let tmp = fixture(&[
            ("guildA.smile.png", b"same"),
            ("guildA.smiley.png", b"same"),
        ]);
        let ranked = matcher::search("smi", tmp.path()).unwrap();
        assert_eq!(ranked.len(), 2);

        let report = load(&ranked, 10).unwrap();
        assert_eq!(report.accepted, 1);
        assert_eq!(report.total_bytes, 4);
        // First in ranked order wins.
        assert_eq!(tags(&report), ["smiley,guildA,png"]);
    }

    #[test]
    fn stops_at_limit() {
        let files: Vec<(String, Vec<u8>)> = (0..10)
            .map(|i| (format!("g.smile{i}.png"), vec![b'a' + i as u8; 3]))
            .collect();
        let refs: Vec<(&str, &[u8])> = files
            .iter()
            .map(|(n, b)| (n.as_str(), b.as_slice()))
            .collect();
        let tmp = fixture(&refs);
        let ranked = matcher::search("smile", tmp.path()).unwrap();
        assert_eq!(ranked.len(), 10);

        let report = load(&ranked, 3).unwrap();
        assert_eq!(report.accepted, 3);
        assert_eq!(report.records.len(), 3);
        assert_eq!(report.total_bytes, 9);
        // Never limit + 1.
        assert_ne!(report.accepted, 4);
    }

    #[test]
    fn limit_stops_before_opening_more_files() {
        let tmp = fixture(&[("g.smile.png", b"a")]);
        let mut ranked = matcher::search("smile", tmp.path()).unwrap();
        // A second candidate that does not exist on disk.
        let mut missing = ranked[0].clone();
        missing.path = tmp.path().join("g.smirk.png");
        ranked.push(missing);

        let report = load(&ranked, 1).unwrap();
        assert_eq!(report.accepted, 1);
    }

    #[test]
    fn zero_limit_stages_nothing() {
        let tmp = fixture(&[("g.smile.png", b"a")]);
        let ranked = matcher::search("smile", tmp.path()).unwrap();
        let report = load(&ranked, 0).unwrap();
        assert!(report.records.is_empty());
        assert_eq!(report.total_bytes, 0);
    }

    #[test]
    fn empty_files_are_skipped() {
        let tmp = fixture(&[("g.smile.png", b""), ("g.smirk.png", b"abc")]);
        let ranked = matcher::search("smi", tmp.path()).unwrap();
        let report = load(&ranked, 10).unwrap();
        assert_eq!(report.accepted, 1);
        assert_eq!(report.total_bytes, 3);
        assert_eq!(tags(&report), ["smirk,g,png"]);
    }

    #[test]
    fn indexes_are_one_based_and_dense() {
        let tmp = fixture(&[
            ("g.a1.png", b"1"),
            ("g.a2.png", b"1"),
            ("g.a3.png", b""),
            ("g.a4.png", b"4"),
        ]);
        let ranked = matcher::search("a", tmp.path()).unwrap();
        let report = load(&ranked, 10).unwrap();
        let indexes: Vec<usize> =
            report.records.iter().map(|r| r.index).collect();
        assert_eq!(indexes, [1, 2]);
    }

    #[test]
    fn open_failure_is_fatal() {
        let tmp = fixture(&[("g.smile.png", b"a"), ("g.smirk.png", b"b")]);
        let mut ranked = matcher::search("smi", tmp.path()).unwrap();
        std::fs::remove_file(tmp.path().join("g.smile.png")).unwrap();
        // Make sure the missing file is not first, so a good one loads first.
        ranked.sort_by(|a, b| b.label().cmp(a.label()));

        let err = load(&ranked, 10).unwrap_err();
        match err {
            Error::Open { path, .. } => {
                assert_eq!(path, tmp.path().join("g.smile.png"));
            }
            other => panic!("expected open error, got {other:?}"),
        }
    }

    #[test]
    fn read_failure_is_fatal() {
        let tmp = fixture(&[("g.smile.png", b"a")]);
        let ranked = matcher::search("smile", tmp.path()).unwrap();
        // Opening a directory succeeds on Unix; reading it does not.
        let path = tmp.path().join("g.smile.png");
        std::fs::remove_file(&path).unwrap();
        std::fs::create_dir(&path).unwrap();

        match load(&ranked, 5) {
            Err(Error::Read { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("expected read error, got {other:?}"),
        }
    }

    #[test]
    fn records_keep_candidate_metadata() {
        let tmp = fixture(&[("guildB.smile.gif", b"GIF")]);
        let ranked = matcher::search("smile", tmp.path()).unwrap();
        let report = load(&ranked, 1).unwrap();
        let record = &report.records[0];
        assert_eq!(record.tags(), "smile,guildB,gif");
        assert_eq!(record.mime_type(), "image/gif");
        assert_eq!(record.bytes, b"GIF");
        assert_eq!(record.hash, blake3::hash(b"GIF"));
        assert!(record.path.ends_with(Path::new("guildB.smile.gif")));
    }
}
