//! emojipick - find emoji images by name and stage them for a picker.
//!
//! Emoji files live in one flat directory and are named
//! `<group>.<label>.<extension>`, e.g. `myguild.smile.png`. A search
//! scores every file name against a term, ranks the matches, then loads
//! the top ones into memory, dropping byte-for-byte duplicates.
//!
//! # Quick start
//!
//! ```no_run
//! use emojipick::{Settings, session::{self, Outcome}};
//!
//! let settings = Settings::resolve(None, Some(10)).unwrap();
//! match session::run("smile", &settings).unwrap() {
//!     Outcome::NoTerm => {}
//!     Outcome::NoMatches { term } => println!("nothing for {term}"),
//!     Outcome::Staged(report) => {
//!         for r in &report.records {
//!             println!("{}. {} ({})", r.index, r.tags(), r.uri());
//!         }
//!     }
//! }
//! ```

pub mod cli;
pub mod error;
pub mod loader;
pub mod matcher;
pub mod naming;
pub mod output;
pub mod record;
pub mod session;
pub mod settings;

pub use error::{Error, Result};
pub use loader::LoadReport;
pub use matcher::Candidate;
pub use record::{HostItem, StagedRecord};
pub use settings::Settings;
