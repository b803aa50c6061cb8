//! Error types.
//!
//! [`AgeError`] ends the run before any file is produced. [`SaveError`] is
//! reported for one image and the remaining plots still render.

use chrono::NaiveDate;
use thiserror::Error;

/// Fatal birthdate failures.
#[derive(Debug, Error)]
pub enum AgeError {
    /// Input does not match `YYYY-MM-DD`.
    #[error("Invalid date format `{input}`. Use YYYY-MM-DD ({source})")]
    InvalidFormat {
        input: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Input is not a four-digit year followed by month and day.
    #[error("Invalid date format `{input}`. Use YYYY-MM-DD")]
    MalformedDate { input: String },

    /// Birthdate lies after the reference instant.
    #[error("Birthdate {birthdate} is in the future")]
    FutureBirthdate { birthdate: NaiveDate },
}

/// Per-image failures. The run continues with the next plot.
#[derive(Debug, Error)]
pub enum SaveError {
    /// Drawing into the figure failed.
    #[error("rendering failed: {reason}")]
    Render { filename: String, reason: String },

    /// PNG encoding or the file write failed.
    #[error("{source}")]
    Encode {
        filename: String,
        #[source]
        source: image::ImageError,
    },
}

impl SaveError {
    /// Name of the image the failure belongs to.
    pub fn filename(&self) -> &str {
        match self {
            SaveError::Render { filename, .. }
            | SaveError::Encode { filename, .. } => filename,
        }
    }
}

/// Errors that stop [`crate::orchestrator::run`].
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Age(#[from] AgeError),

    /// Writing status lines to the output stream failed.
    #[error("failed to write status output: {0}")]
    Output(#[from] std::io::Error),
}
