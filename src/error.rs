use std::io;

use thiserror::Error;

/// A column name that cannot be found in a [Title](crate::title::Title).
///
/// The value is the missing name, so two errors for the same name compare equal.
#[derive(Error, Debug, Clone, PartialEq, Eq, Hash)]
#[error("title not found: {0}")]
pub struct TitleNotFound(pub String);

impl TitleNotFound {
    /// The name that was looked up
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// Errors returned by [Table](crate::table::Table) operations and the table reader
#[derive(Error, Debug)]
pub enum TableError {
    #[error(transparent)]
    TitleNotFound(#[from] TitleNotFound),

    #[error("title already exists: {0}")]
    DuplicateTitle(String),

    #[error("{titles} titles for rows of {columns} columns")]
    ColumnMismatch {
        titles: usize,
        columns: usize,
    },

    #[error("invalid sort key: {0}")]
    InvalidSortKey(String),

    #[error("no records in {0}")]
    EmptyInput(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("failed to persist {path}: {source}")]
    Persist {
        path: String,
        #[source]
        source: tempfile::PersistError,
    },
}
