use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::smell::Smell;

/// The step of a sniff that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Stat,
    Open,
    ContentProbe,
    FinalEolProbe,
    CrProbe,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Stat => "stat",
            Self::Open => "open",
            Self::ContentProbe => "read leading content of",
            Self::FinalEolProbe => "read final bytes of",
            Self::CrProbe => "scan for carriage returns in",
        })
    }
}

/// Coarse failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    PermissionDenied,
    Io,
}

/// I/O failure while sniffing a path.
///
/// Carries whatever the record held when the failure happened. A partial
/// record is not a negative verdict: `posixy == false` on it means
/// "unknown", not "not a shell script".
#[derive(Debug, Error)]
#[error("failed to {stage} {}: {source}", .path.display())]
pub struct SniffError {
    pub stage: Stage,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
    partial: Box<Smell>,
}

impl SniffError {
    pub fn new(stage: Stage, path: impl Into<PathBuf>, source: io::Error, partial: Smell) -> Self {
        Self {
            stage,
            path: path.into(),
            source,
            partial: Box::new(partial),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self.source.kind() {
            io::ErrorKind::NotFound => ErrorKind::NotFound,
            io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
            _ => ErrorKind::Io,
        }
    }

    /// The record as populated before the failure.
    pub fn partial(&self) -> &Smell {
        &self.partial
    }

    pub fn into_partial(self) -> Smell {
        *self.partial
    }
}
