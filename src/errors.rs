//! Module for errors.
use std::{error::Error, fmt::Display};

/// Error from the worksheet library.
#[derive(Debug)]
pub enum WorksheetErr {
    // Inherited errors from std
    /// Error forwarded from std
    IO(::std::io::Error),

    // Other forwarded errors
    /// Undecodable JSON in an import document
    Json(::serde_json::Error),

    // My own errors from this crate
    /// The import document was not a GeoJSON FeatureCollection.
    NotAFeatureCollection,
    /// A position fix could not be acquired.
    PositionUnavailable(String),
    /// There was an internal logic error.
    LogicError(&'static str),
}

impl Display for WorksheetErr {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> Result<(), std::fmt::Error> {
        use crate::errors::WorksheetErr::*;

        match self {
            IO(err) => write!(f, "std lib io error: {}", err),

            Json(err) => write!(f, "json decode error: {}", err),

            NotAFeatureCollection => write!(f, "import document is not a FeatureCollection"),
            PositionUnavailable(reason) => write!(f, "error getting location: {}", reason),
            LogicError(msg) => write!(f, "internal logic error: {}", msg),
        }
    }
}

impl Error for WorksheetErr {}

impl From<::std::io::Error> for WorksheetErr {
    fn from(err: ::std::io::Error) -> WorksheetErr {
        WorksheetErr::IO(err)
    }
}

impl From<::serde_json::Error> for WorksheetErr {
    fn from(err: ::serde_json::Error) -> WorksheetErr {
        WorksheetErr::Json(err)
    }
}
