use core::fmt;
use derive_more::From;

#[derive(Debug,From)]
pub enum Error {
    /// no drawing backend was supplied to the builder
    BackendUnavailable,
    /// a selection (e.g. a date range) matched no records
    EmptyInputRange,
    InvalidLayout(String),
    /// the drawing backend could not produce its byte stream
    Backend(String),
   #[from]
    Json(serde_json::Error),
   #[from]
    SaveError(std::io::Error),
}

impl std::error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::BackendUnavailable => write!(f, "no drawing backend available"),
            Error::EmptyInputRange => write!(f, "no notes found in the selected range"),
            Error::InvalidLayout(reason) => write!(f, "invalid layout: {reason}"),
            Error::Backend(reason) => write!(f, "drawing backend failed: {reason}"),
            Error::Json(e) => write!(f, "{e}"),
            Error::SaveError(e) => write!(f, "{e}"),
        }
    }
}
