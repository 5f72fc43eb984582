// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

use crate::value_objects::{Gid, Uid};

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum DirListError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<DirListError>,
    },

    #[error("Collection error: {0}")]
    Collection(#[from] CollectionError),

    #[error("Entry error: {0}")]
    Entry(#[from] EntryError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, DirListError>;

impl DirListError {
    /// Whether the error must end the run instead of dropping a single entry.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Context { source, .. } => source.is_fatal(),
            Self::Collection(_) | Self::Presentation(_) => true,
            Self::Entry(_) => false,
        }
    }
}

/// Failures that abort the whole listing.
#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("cannot read directory '{path}': {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unexpected fault while inspecting '{path}': {reason}")]
    UnexpectedFault { path: PathBuf, reason: String },
}

pub type CollectionResult<T> = std::result::Result<T, CollectionError>;

/// Per-entry failures. The entry is omitted and the listing continues.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("cannot count links of '{path}': {source}")]
    SubdirectoryLinkCount {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("user: unknown userid {uid}")]
    OwnerLookup { uid: Uid },

    #[error("group: unknown groupid {gid}")]
    GroupLookup { gid: Gid },
}

pub type EntryResult<T> = std::result::Result<T, EntryError>;

/// Output-side errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("failed to write listing: {0}")]
    Write(#[from] std::io::Error),

    #[error("failed to serialize {format} output: {details}")]
    Serialization { format: String, details: String },
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<std::io::Error> for DirListError {
    fn from(err: std::io::Error) -> Self {
        PresentationError::from(err).into()
    }
}

impl From<serde_json::Error> for PresentationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for DirListError {
    fn from(err: serde_json::Error) -> Self {
        PresentationError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<DirListError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| DirListError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| DirListError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
