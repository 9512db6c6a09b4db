use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("unknown theme `{0}` (expected `light` or `dark`)")]
    UnknownTheme(String),

    /// The tracked content is exactly one viewport tall, so start and end of
    /// the scroll span coincide.
    #[error("reading progress span is empty (start == end == {0})")]
    DegenerateSpan(f64),

    #[error("post filename `{0}` does not match YYYY-MM-DD-slug.md")]
    BadFilename(String),

    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("front matter: {0}")]
    FrontMatter(&'static str),

    #[error("missing required front matter fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}
