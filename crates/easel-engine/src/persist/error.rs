use thiserror::Error;

/// Why a save file could not be turned into a scene.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The text is not JSON at all.
    #[error("save file is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    /// Valid JSON that does not describe a non-empty shape list, or, under
    /// `LoadPolicy::Strict`, an entry whose fields cannot be read.
    #[error("malformed save file: {0}")]
    Malformed(String),

    /// Unknown `type` tag; only raised under `LoadPolicy::Strict`.
    #[error("unknown shape type {tag:?} in entry {index}")]
    UnknownShapeTag { index: usize, tag: String },

    #[error("failed to read save file: {0}")]
    Io(#[from] std::io::Error),

    /// A load was completed with a ticket the session is not waiting on.
    #[error("load ticket {0} does not match the pending load")]
    ForeignTicket(u64),
}

impl LoadError {
    pub(crate) fn malformed(msg: impl Into<String>) -> Self {
        LoadError::Malformed(msg.into())
    }
}
