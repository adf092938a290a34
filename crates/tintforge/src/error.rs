//! Error types and the batch error collector.
//!
//! [`Error`] covers every failure the builder can report. Scheme discovery
//! uses [`ErrorList`] to keep going after a broken file and report all
//! problems at once; rendering propagates the first [`Error`] with `?`.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::color::InvalidColorFormat;

/// Result type for builder operations.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A problem with the contents of an otherwise well-formed scheme file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Required palette keys are absent for the scheme's system.
    #[error("missing colors from {system} palette: {}", .keys.join(", "))]
    MissingColors { system: String, keys: Vec<String> },

    #[error("scheme name cannot be empty")]
    EmptySchemeName,

    /// The name slugified to nothing and no explicit slug was given.
    #[error("scheme slug derived from name {0:?} is empty")]
    EmptySlug(String),

    #[error("invalid color for {key}: {source}")]
    InvalidColor {
        key: String,
        #[source]
        source: InvalidColorFormat,
    },

    #[error("unexpected number of palette colors: {0}")]
    UnexpectedPaletteSize(usize),

    /// A mapping alias shadows a key already defined in the palette.
    #[error("mapping alias {0:?} already exists in the palette")]
    DuplicateAliasKey(String),

    #[error("mapping alias {alias:?} refers to missing palette key {target:?}")]
    UnresolvedAlias { alias: String, target: String },
}

/// Error type for scheme loading, template loading and rendering.
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed YAML.
    #[error("parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Two scheme files claim the same output identity.
    #[error("conflicting scheme {system}/{slug}: defined in both {first} and {second}")]
    Conflict {
        system: String,
        slug: String,
        first: String,
        second: String,
    },

    /// A template has neither a filename nor an extension to build one from.
    #[error("template {template:?} has no filename and no extension to infer one from")]
    MissingExtension { template: String },

    #[error("no valid schemes for template {template:?} (supported systems: {})", .systems.join(", "))]
    NoCompatibleSchemes {
        template: String,
        systems: Vec<String>,
    },

    #[error("output path {} exists but is not a directory", .0.display())]
    OutputNotADirectory(PathBuf),

    /// Template syntax or rendering failure reported by the engine.
    #[error("template error: {0}")]
    Template(String),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Another error, prefixed with where it happened (usually a file path).
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<Error>,
    },

    #[error("{0}")]
    Multiple(ErrorList),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Wraps this error with a context prefix.
    pub fn context(self, context: impl Into<String>) -> Self {
        Error::Context {
            context: context.into(),
            source: Box::new(self),
        }
    }

    /// Flattens [`Context`](Error::Context) and [`Multiple`](Error::Multiple)
    /// wrappers, returning the underlying errors.
    pub fn leaves(&self) -> Vec<&Error> {
        match self {
            Error::Context { source, .. } => source.leaves(),
            Error::Multiple(list) => list.iter().flat_map(Error::leaves).collect(),
            other => vec![other],
        }
    }

    /// The validation errors contained in this error, at any depth.
    pub fn validation_errors(&self) -> Vec<&ValidationError> {
        self.leaves()
            .into_iter()
            .filter_map(|err| match err {
                Error::Validation(v) => Some(v),
                _ => None,
            })
            .collect()
    }
}

impl From<mustache::Error> for Error {
    fn from(err: mustache::Error) -> Self {
        Error::Template(err.to_string())
    }
}

/// Collects independent failures from a batch.
///
/// # Example
///
/// ```rust
/// use tintforge::{ErrorList, ValidationError};
///
/// let mut errors = ErrorList::new();
/// assert!(ErrorList::new().finish().is_ok());
///
/// errors.push_with_context("a.yaml", ValidationError::EmptySchemeName);
/// errors.push_with_context("b.yaml", ValidationError::UnexpectedPaletteSize(3));
///
/// let err = errors.finish().unwrap_err();
/// assert_eq!(err.leaves().len(), 2);
/// assert!(err.to_string().contains("a.yaml: scheme name cannot be empty"));
/// ```
#[derive(Debug, Default)]
pub struct ErrorList {
    errors: Vec<Error>,
}

impl ErrorList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, err: impl Into<Error>) {
        self.errors.push(err.into());
    }

    /// Records an error prefixed with `context`.
    pub fn push_with_context(&mut self, context: impl Into<String>, err: impl Into<Error>) {
        self.errors.push(err.into().context(context));
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.errors.iter()
    }

    /// `Ok(())` if nothing was collected, otherwise every collected error as
    /// [`Error::Multiple`].
    pub fn finish(self) -> Result<()> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(Error::Multiple(self))
        }
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.errors.as_slice() {
            [single] => write!(f, "{}", single),
            errors => {
                write!(f, "{} errors occurred:", errors.len())?;
                for err in errors {
                    // Indent nested lists so each batch stays readable.
                    let text = err.to_string().replace('\n', "\n    ");
                    write!(f, "\n  - {}", text)?;
                }
                Ok(())
            }
        }
    }
}

impl IntoIterator for ErrorList {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorList {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}
