use std::{
    cmp::Ordering,
    path::{Path, PathBuf},
};

use tracing::debug;

use crate::{
    error::{Error, Result},
    naming::EmojiName,
};

/// How a search term matched a candidate, strongest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    LabelPrefix,
    LabelContains,
    GroupPrefix,
    GroupContains,
}

impl MatchKind {
    pub fn score(self) -> u8 {
        match self {
            MatchKind::LabelPrefix => 4,
            MatchKind::LabelContains => 3,
            MatchKind::GroupPrefix => 2,
            MatchKind::GroupContains => 1,
        }
    }

    /// Classify `term` against a group and label. All three are
    /// case-folded first; an empty term never matches.
    pub fn classify(term: &str, group: &str, label: &str) -> Option<Self> {
        if term.is_empty() {
            return None;
        }
        let term = term.to_lowercase();
        let group = group.to_lowercase();
        let label = label.to_lowercase();

        if label.starts_with(&term) {
            Some(MatchKind::LabelPrefix)
        } else if label.contains(&term) {
            Some(MatchKind::LabelContains)
        } else if group.starts_with(&term) {
            Some(MatchKind::GroupPrefix)
        } else if group.contains(&term) {
            Some(MatchKind::GroupContains)
        } else {
            None
        }
    }
}

/// Score `term` against a group and label. 0 means no match.
pub fn score(term: &str, group: &str, label: &str) -> u8 {
    MatchKind::classify(term, group, label).map_or(0, MatchKind::score)
}

/// A scannable emoji file that matched the current search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Absolute path of the file.
    pub path: PathBuf,
    pub name: EmojiName,
    /// Always at least 1.
    pub score: u8,
}

impl Candidate {
    pub fn group(&self) -> &str {
        &self.name.group
    }

    pub fn label(&self) -> &str {
        &self.name.label
    }

    pub fn extension(&self) -> &str {
        &self.name.extension
    }
}

/// List the file names of a single directory, without recursing.
///
/// Only entries that resolve to regular files are returned, sorted by
/// name. Failing to read the directory at all is fatal.
pub fn list_directory(root: &Path) -> Result<Vec<String>> {
    let directory_error = |source| Error::Directory {
        path: root.to_path_buf(),
        source,
    };

    let mut names = Vec::new();
    for entry in std::fs::read_dir(root).map_err(directory_error)? {
        let entry = entry.map_err(directory_error)?;
        if !entry.path().is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(raw) => debug!(name = ?raw, "skipping non-UTF-8 file name"),
        }
    }
    names.sort();
    Ok(names)
}

/// Score and order a directory listing against `term`.
///
/// Non-conforming file names and non-matches are dropped. The result is
/// the ascending order (score, label, group) reversed, so equal scores
/// come out with labels and then groups in descending order.
pub fn rank<I, S>(term: &str, root: &Path, file_names: I) -> Vec<Candidate>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut candidates: Vec<Candidate> = file_names
        .into_iter()
        .filter_map(|file_name| {
            let file_name = file_name.as_ref();
            let name = EmojiName::parse(file_name)?;
            let score = score(term, &name.group, &name.label);
            (score > 0).then(|| Candidate {
                path: root.join(file_name),
                name,
                score,
            })
        })
        .collect();

    candidates.sort_by(|a, b| {
        a.score
            .cmp(&b.score)
            .then_with(|| locale_cmp(a.label(), b.label()))
            .then_with(|| locale_cmp(a.group(), b.group()))
    });
    candidates.reverse();
    candidates
}

/// List `root` and rank its contents against `term`.
///
/// A blank term matches nothing and the directory is not touched.
pub fn search(term: &str, root: &Path) -> Result<Vec<Candidate>> {
    if term.trim().is_empty() {
        return Ok(Vec::new());
    }
    let root = std::path::absolute(root).map_err(|source| Error::Directory {
        path: root.to_path_buf(),
        source,
    })?;
    let file_names = list_directory(&root)?;
    debug!(
        root = %root.display(),
        files = file_names.len(),
        "listed emoji directory"
    );
    Ok(rank(term, &root, &file_names))
}

/// Case-insensitive ordering; on a case-only difference lowercase sorts
/// first.
///
/// Only approximates a locale collation: after folding, characters are
/// compared by code point, so punctuation such as `_` sorts after digits
/// where ICU would put it before them.
fn locale_cmp(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}
