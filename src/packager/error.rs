//! Error types for packaging operations.
//!
//! One [`Error`] enum covers every failure the pipeline can surface: missing
//! key material, template problems, external tool failures, and certificate
//! download errors. The [`Context`] and [`ErrorExt`] traits attach human
//! context at the call site; [`bail!`](crate::bail) returns early with a
//! formatted [`Error::Generic`].

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Result type alias for packager operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for all packaging operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO errors without further context
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// IO errors carrying the operation and path that produced them
    #[error("{action} ({}): {source}", .path.display())]
    Fs {
        /// What was being done (e.g. "writing manifest")
        action: String,
        /// Path the operation touched
        path: PathBuf,
        /// Underlying IO error
        source: std::io::Error,
    },

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Template read or render failures
    #[error("template {name}: {reason}")]
    Template {
        /// Template file name
        name: String,
        /// What went wrong
        reason: String,
    },

    /// Required private key or certificate file absent
    #[error("{} is missing", .0.display())]
    MissingKeyMaterial(PathBuf),

    /// External tool not found on PATH
    #[error("required tool not found on PATH: {0}")]
    ToolNotFound(String),

    /// External tool could not be spawned
    #[error("failed to execute {command}: {source}")]
    CommandFailed {
        /// Command that failed to start
        command: String,
        /// Spawn error
        source: std::io::Error,
    },

    /// External tool ran but exited non-zero
    #[error("{command} failed with exit code {code:?}: {stderr}")]
    CommandStatus {
        /// Command that failed
        command: String,
        /// Exit code, if the process was not killed by a signal
        code: Option<i32>,
        /// Captured standard error output
        stderr: String,
    },

    /// Certificate download failure (transport error or non-success status)
    #[error("downloading {url}: {reason}")]
    Download {
        /// URL that was being fetched
        url: String,
        /// What went wrong
        reason: String,
    },

    /// Generic errors with a formatted message
    #[error("{0}")]
    Generic(String),
}

/// Attaches a message to errors and empty options.
pub trait Context<T> {
    /// Wraps the error (or the missing value) with a static message.
    fn context(self, msg: &str) -> Result<T>;

    /// Wraps the error (or the missing value) with a lazily built message.
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: std::fmt::Display> Context<T> for std::result::Result<T, E> {
    fn context(self, msg: &str) -> Result<T> {
        self.map_err(|e| Error::Generic(format!("{msg}: {e}")))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| Error::Generic(format!("{}: {e}", f())))
    }
}

impl<T> Context<T> for Option<T> {
    fn context(self, msg: &str) -> Result<T> {
        self.ok_or_else(|| Error::Generic(msg.to_string()))
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.ok_or_else(|| Error::Generic(f()))
    }
}

/// Attaches the filesystem action and path to IO errors.
pub trait ErrorExt<T> {
    /// Converts an IO error into [`Error::Fs`] with the action and path.
    fn fs_context(self, action: &str, path: &Path) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, std::io::Error> {
    fn fs_context(self, action: &str, path: &Path) -> Result<T> {
        self.map_err(|source| Error::Fs {
            action: action.to_string(),
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Returns early with a formatted [`Error::Generic`].
#[macro_export]
macro_rules! bail {
    ($($arg:tt)*) => {
        return Err($crate::packager::Error::Generic(format!($($arg)*)))
    };
}
