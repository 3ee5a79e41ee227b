use core::fmt::{self, Display};
use serde_json::error::Category;
use std::io;

#[derive(Debug)]
pub enum Error {
    /// The stored blob is not valid JSON of the expected shape.
    Schema,
    /// The underlying file system refused the operation.
    Io(io::ErrorKind),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err.kind())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Io => Self::Io(io::ErrorKind::Other),
            Category::Syntax | Category::Data | Category::Eof => Self::Schema,
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schema => f.write_str("Stored data does not match the expected schema."),
            Self::Io(kind) => write!(f, "Storage failure: {kind}."),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
