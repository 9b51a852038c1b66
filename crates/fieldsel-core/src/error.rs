//! Error types for fieldsel
//!
//! Provides error handling for:
//! - Registry lookups and registration (field type tags)
//! - Schema loading (file → [`ListSchema`](crate::ListSchema))
//! - Query composition (schema → query document)

use std::path::PathBuf;

/// Errors from the field selection registry
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    /// No selection builder registered for the tag
    #[error("unknown field type: '{0}'")]
    UnknownFieldType(String),

    /// Tag already has a selection builder
    #[error("field type already registered: '{0}'")]
    DuplicateFieldType(String),
}

impl SelectionError {
    /// The field type tag this error refers to
    #[must_use]
    pub fn field_type(&self) -> &str {
        match self {
            Self::UnknownFieldType(tag) | Self::DuplicateFieldType(tag) => tag,
        }
    }
}

/// Errors while loading or querying a list schema
#[derive(Debug, thiserror::Error)]
pub enum SchemaError {
    /// IO error during file read
    #[error("io error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File extension does not map to a known format
    #[error("unsupported schema format: {0}")]
    UnsupportedFormat(PathBuf),

    /// YAML syntax or shape error
    #[error("invalid yaml schema: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// TOML syntax or shape error
    #[error("invalid toml schema: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON syntax or shape error
    #[error("invalid json schema: {0}")]
    Json(#[from] serde_json::Error),

    /// No list with the requested key
    #[error("unknown list: '{0}'")]
    UnknownList(String),

    /// A field references an unregistered type
    #[error("list '{list}' field '{field}': {source}")]
    InvalidField {
        list: String,
        field: String,
        #[source]
        source: SelectionError,
    },
}

impl SchemaError {
    /// Create IO error for path
    pub fn io_error(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors during query composition
#[derive(Debug, thiserror::Error)]
pub enum QueryError {
    /// Field selection failed
    #[error("selection failed for field '{field}': {source}")]
    Selection {
        field: String,
        #[source]
        source: SelectionError,
    },

    /// Schema lookup failed
    #[error("schema error: {0}")]
    Schema(#[from] SchemaError),
}

/// Result type alias for registry operations
pub type SelectionResult<T> = Result<T, SelectionError>;
