use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Number of emojis staged per search unless configured otherwise.
pub const DEFAULT_LOAD_LIMIT: usize = 50;

pub const DIR_ENV: &str = "EMOJIPICK_DIR";
pub const LOAD_LIMIT_ENV: &str = "EMOJIPICK_LOAD_LIMIT";

/// Startup configuration for a search session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub emoji_dir: PathBuf,
    pub load_limit: usize,
}

impl Settings {
    /// Resolve settings from, in order of priority:
    /// 1. Explicit values (from --emoji-dir / --limit)
    /// 2. The EMOJIPICK_DIR / EMOJIPICK_LOAD_LIMIT environment variables
    /// 3. The XDG data directory (~/.local/share/emojipick/) and a limit
    ///    of [`DEFAULT_LOAD_LIMIT`]
    ///
    /// The emoji directory is never created here; it belongs to whatever
    /// downloads the emojis.
    pub fn resolve(
        explicit_dir: Option<&Path>,
        explicit_limit: Option<usize>,
    ) -> Result<Self> {
        Self::resolve_with(explicit_dir, explicit_limit, |key| {
            std::env::var(key).ok()
        })
    }

    /// Resolve only the emoji directory, for commands that never load.
    ///
    /// The load limit is not read, so a bad EMOJIPICK_LOAD_LIMIT does not
    /// get in the way.
    pub fn resolve_dir(explicit_dir: Option<&Path>) -> Result<PathBuf> {
        resolve_dir_with(explicit_dir, |key| std::env::var(key).ok())
    }

    fn resolve_with(
        explicit_dir: Option<&Path>,
        explicit_limit: Option<usize>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self> {
        let emoji_dir = resolve_dir_with(explicit_dir, &env)?;

        let load_limit = match (explicit_limit, env(LOAD_LIMIT_ENV)) {
            (Some(limit), _) => limit,
            (None, Some(val)) => val.trim().parse().map_err(|e| {
                Error::Config(format!("invalid {LOAD_LIMIT_ENV} '{val}': {e}"))
            })?,
            (None, None) => DEFAULT_LOAD_LIMIT,
        };
        if load_limit == 0 {
            return Err(Error::Config(
                "load limit must be a positive integer".into(),
            ));
        }

        Ok(Self {
            emoji_dir,
            load_limit,
        })
    }
}

fn resolve_dir_with(
    explicit_dir: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> Result<PathBuf> {
    if let Some(path) = explicit_dir {
        Ok(path.to_path_buf())
    } else if let Some(val) = env(DIR_ENV) {
        Ok(PathBuf::from(val))
    } else {
        xdg::BaseDirectories::with_prefix("emojipick")
            .get_data_home()
            .ok_or_else(|| {
                Error::Config(
                    "could not determine XDG data home directory".into(),
                )
            })
    }
}
