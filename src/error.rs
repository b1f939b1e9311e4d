use std::path::PathBuf;

/// Errors from the fallible edges of the crate (fonts, settings, input files).
/// The packers themselves never fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse font {}: {reason}", .path.display())]
    Font { path: PathBuf, reason: String },

    #[error("unable to load a system font from known locations")]
    NoSystemFont,

    #[error("invalid layout settings: {0}")]
    Config(#[from] toml::de::Error),

    #[error("invalid layout input: {0}")]
    Input(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Read a whole file, tagging I/O failures with the path.
pub(crate) fn read_file(path: &std::path::Path) -> Result<Vec<u8>> {
    std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })
}
